//! Query normalizer: word-order-invariant, cross-language term expansion
//!
//! This module converts a free-text catalog query into the OR-matchable term
//! set the candidate store consumes:
//!
//! 1. Tokenize (Unicode-aware, lower-case, drop short and excluded-language
//!    tokens)
//! 2. Remove stopwords
//! 3. Expand every surviving token through adjective/noun stemming and the
//!    synonym and abbreviation tables
//! 4. Filter expansion output so no excluded-language variant re-enters
//!
//! Every stage is memoized in a bounded LRU cache: repeated identical
//! queries are extremely common in production traffic, so the full
//! `normalize` call and each per-token expansion are cached. Eviction only
//! costs recomputation, never correctness.
//!
//! The normalizer never fails: empty, whitespace-only, and all-stopword
//! queries yield an empty set.

use crate::cache::{CacheStats, LruCache};
use crate::stemmer::{stem_adjective, stem_noun};
use crate::vocab::Vocabulary;
use katalog_core::TermSet;
use std::sync::Arc;
use tracing::debug;

/// Capacity of the adjective-stem memo cache
const ADJECTIVE_CACHE_CAPACITY: usize = 1024;
/// Capacity of the noun-stem memo cache
const NOUN_CACHE_CAPACITY: usize = 1024;
/// Capacity of the combined per-token expansion cache
const TOKEN_CACHE_CAPACITY: usize = 2048;
/// Capacity of the full-query cache
const QUERY_CACHE_CAPACITY: usize = 512;

/// Minimum character count for a token to survive tokenization
const MIN_TOKEN_CHARS: usize = 2;

/// Usage counters for all four normalizer caches
#[derive(Debug, Clone, Copy)]
pub struct NormalizerCacheStats {
    /// Adjective-stem cache counters
    pub adjective: CacheStats,
    /// Noun-stem cache counters
    pub noun: CacheStats,
    /// Per-token expansion cache counters
    pub token: CacheStats,
    /// Full-query cache counters
    pub query: CacheStats,
}

/// Morphological query normalizer with bounded memoization
///
/// Owns an injected, immutable [`Vocabulary`] plus four LRU caches. All
/// methods take `&self`; the caches use interior mutability, so one
/// normalizer instance is safely shared across worker threads.
pub struct QueryNormalizer {
    vocab: Arc<Vocabulary>,
    adjective_cache: LruCache<String, TermSet>,
    noun_cache: LruCache<String, TermSet>,
    token_cache: LruCache<String, TermSet>,
    query_cache: LruCache<(String, bool), TermSet>,
}

impl QueryNormalizer {
    /// Create a normalizer over an injected vocabulary
    pub fn new(vocab: Arc<Vocabulary>) -> Self {
        QueryNormalizer {
            vocab,
            adjective_cache: LruCache::new(ADJECTIVE_CACHE_CAPACITY),
            noun_cache: LruCache::new(NOUN_CACHE_CAPACITY),
            token_cache: LruCache::new(TOKEN_CACHE_CAPACITY),
            query_cache: LruCache::new(QUERY_CACHE_CAPACITY),
        }
    }

    /// Create a normalizer with the built-in automotive vocabulary
    pub fn automotive() -> Self {
        QueryNormalizer::new(Vocabulary::automotive())
    }

    /// The vocabulary this normalizer was built with
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocab
    }

    // ========================================================================
    // Pipeline stages
    // ========================================================================

    /// Split a raw query into lower-case word tokens
    ///
    /// Every character that is not alphanumeric, underscore, or hyphen
    /// becomes a separator (Unicode-aware, so Cyrillic and Latin scripts
    /// both tokenize correctly). Tokens shorter than 2 characters and tokens
    /// containing excluded-language characters are dropped.
    pub fn tokenize(&self, query: &str) -> Vec<String> {
        let lowered = query.to_lowercase();
        let cleaned: String = lowered
            .chars()
            .map(|c| {
                if c.is_alphanumeric() || c == '_' || c == '-' {
                    c
                } else {
                    ' '
                }
            })
            .collect();

        cleaned
            .split_whitespace()
            .filter(|w| w.chars().count() >= MIN_TOKEN_CHARS)
            .filter(|w| !self.vocab.contains_excluded_chars(w))
            .map(String::from)
            .collect()
    }

    /// Drop stopwords (prepositions, conjunctions) from a token list
    pub fn remove_stopwords(&self, tokens: Vec<String>) -> Vec<String> {
        tokens
            .into_iter()
            .filter(|t| !self.vocab.is_stopword(t))
            .collect()
    }

    /// Expand one token into all its stemmed and synonym forms
    ///
    /// Union of adjective stems, noun stems, and vocabulary variants, with
    /// excluded-language and sub-minimum-length forms filtered back out so
    /// expansion never violates the term-set invariant.
    pub fn expand_token(&self, token: &str) -> TermSet {
        self.token_cache.get_or_insert_with(token.to_string(), || {
            let mut forms = TermSet::new();
            forms.insert(token.to_string());

            forms.extend(
                self.adjective_cache
                    .get_or_insert_with(token.to_string(), || stem_adjective(token)),
            );
            forms.extend(
                self.noun_cache
                    .get_or_insert_with(token.to_string(), || stem_noun(token)),
            );
            forms.extend(self.vocab.expand_variants(token));

            forms.retain(|form| {
                form.chars().count() >= MIN_TOKEN_CHARS && !self.vocab.contains_excluded_chars(form)
            });
            forms
        })
    }

    /// Normalize a query into its word-order-invariant term set
    ///
    /// With `expand_cases` the surviving tokens are expanded through
    /// stemming and synonym tables; without it the tokens are returned
    /// as-is (used for exact-form matching, e.g. vendor codes).
    ///
    /// Never fails: malformed or degenerate input yields an empty set.
    pub fn normalize(&self, query: &str, expand_cases: bool) -> TermSet {
        let key = (query.to_string(), expand_cases);
        if let Some(cached) = self.query_cache.get(&key) {
            return cached;
        }

        let tokens = self.remove_stopwords(self.tokenize(query));

        let terms: TermSet = if expand_cases {
            tokens.iter().flat_map(|t| self.expand_token(t)).collect()
        } else {
            tokens.into_iter().collect()
        };

        debug!(
            target: "katalog.normalizer",
            query,
            expand_cases,
            term_count = terms.len(),
            "normalized query"
        );

        self.query_cache.insert(key, terms.clone());
        terms
    }

    // ========================================================================
    // Instrumentation
    // ========================================================================

    /// Snapshot hit/miss counters for all four caches
    pub fn cache_stats(&self) -> NormalizerCacheStats {
        NormalizerCacheStats {
            adjective: self.adjective_cache.stats(),
            noun: self.noun_cache.stats(),
            token: self.token_cache.stats(),
            query: self.query_cache.stats(),
        }
    }

    /// Drop all cached entries and reset counters
    pub fn clear_caches(&self) {
        self.adjective_cache.clear();
        self.noun_cache.clear();
        self.token_cache.clear();
        self.query_cache.clear();
    }
}

/// Fraction of normalized terms found as substrings of a product text
///
/// Used as a lightweight relevance diagnostic for store results; 0.0 when
/// the term set is empty.
pub fn coverage_score(terms: &TermSet, product_text: &str) -> f32 {
    if terms.is_empty() {
        return 0.0;
    }
    let haystack = product_text.to_lowercase();
    let matches = terms.iter().filter(|t| haystack.contains(t.as_str())).count();
    matches as f32 / terms.len() as f32
}
