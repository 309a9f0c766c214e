//! Foundational types shared across the katalog crates
//!
//! This module defines:
//! - ProductId: catalog item identifier
//! - TermSet: the normalized-query term set

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Identifier of a catalog product
///
/// Newtype over `i64` matching the warehouse's `product_id` column.
/// Ordering is used as the deterministic ranking tie-break.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct ProductId(pub i64);

impl ProductId {
    /// Create a new ProductId
    pub fn new(id: i64) -> Self {
        ProductId(id)
    }

    /// Raw identifier value
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ProductId {
    fn from(id: i64) -> Self {
        ProductId(id)
    }
}

/// The result of query normalization: a true set of lower-case search terms
///
/// Order and duplicates carry no meaning (terms feed OR-style matching).
/// `BTreeSet` keeps iteration deterministic for assertions and serialization.
///
/// Invariant: every member is lower-case, non-empty, at least 2 characters
/// long, and contains no excluded-language characters.
pub type TermSet = BTreeSet<String>;

/// Build a TermSet from string literals (test and seed convenience)
pub fn term_set<I, S>(terms: I) -> TermSet
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    terms.into_iter().map(Into::into).collect()
}
