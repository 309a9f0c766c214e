//! Query understanding for the katalog product-search system
//!
//! This crate provides:
//! - Vocabulary: injected read-only stopword/synonym/abbreviation tables
//! - Rule-based Ukrainian/Russian morphological stemming
//! - LruCache: explicit bounded memoization with hit/miss instrumentation
//! - QueryNormalizer: word-order-invariant, cross-language term expansion
//!
//! # Usage
//!
//! ```
//! use katalog_query::QueryNormalizer;
//!
//! let normalizer = QueryNormalizer::automotive();
//! let terms = normalizer.normalize("Диск гальмівний", true);
//! assert!(terms.contains("гальмо"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cache;
pub mod normalizer;
pub mod stemmer;
pub mod vocab;

pub use cache::{CacheStats, LruCache};
pub use normalizer::{coverage_score, NormalizerCacheStats, QueryNormalizer};
pub use stemmer::{stem_adjective, stem_noun};
pub use vocab::Vocabulary;
