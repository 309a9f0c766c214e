//! Core types for the katalog product-search system
//!
//! This crate defines the foundational types shared by the query and ranking
//! crates:
//! - ProductId / TermSet: identifiers and the normalized-query term set
//! - SearchSignals: per-candidate raw scores, counters, and quality flags
//! - VocabularyConfig: raw language-table configuration
//! - Error / Result: the error surface of the configuration and store
//!   boundaries (the core components themselves never fail)

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod signals;
pub mod types;

pub use config::VocabularyConfig;
pub use error::{Error, Result};
pub use signals::SearchSignals;
pub use types::{term_set, ProductId, TermSet};
