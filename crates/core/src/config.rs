//! Vocabulary configuration
//!
//! Raw, serde-deserializable form of the language tables the query
//! normalizer consumes. Loaded once at process start (from the built-in seed
//! or a TOML file) and converted into the read-only `Vocabulary` structure
//! owned by the normalizer — never consulted as ambient global state.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Raw vocabulary tables for the query normalizer
///
/// All keys and values are expected to be lower-case tokens. Conversion into
/// the lookup-optimized `Vocabulary` lives in `katalog-query`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VocabularyConfig {
    /// Function words (prepositions, conjunctions) dropped from every query
    pub stopwords: Vec<String>,

    /// Canonical token → cross-dialect/cross-language equivalents
    pub synonyms: BTreeMap<String, Vec<String>>,

    /// Technical acronym / abbreviation → expansion terms
    pub abbreviations: BTreeMap<String, Vec<String>>,

    /// Characters that mark a token as excluded-language (e.g. Polish
    /// diacritics); any token containing one is dropped entirely
    pub excluded_characters: String,
}

impl VocabularyConfig {
    /// True when every table is empty
    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
            && self.synonyms.is_empty()
            && self.abbreviations.is_empty()
            && self.excluded_characters.is_empty()
    }
}
