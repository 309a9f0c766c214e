//! Katalog - query understanding and ensemble ranking for product search
//!
//! Katalog is the ranking core of an e-commerce parts-catalog search system.
//! It turns messy Ukrainian/Russian user queries into normalized term sets
//! and combines per-candidate retrieval signals (exact match, full-text,
//! trigram, vector similarity, popularity, availability, freshness) into one
//! relevance score.
//!
//! # Quick Start
//!
//! ```
//! use katalog::{QueryNormalizer, EnsembleRanker, RankingWeights};
//! use katalog::{ProductId, SearchSignals};
//!
//! // Normalize a query: word order, morphology, and language variants
//! // all collapse into one term set
//! let normalizer = QueryNormalizer::automotive();
//! let terms = normalizer.normalize("Диск гальмівний передній", true);
//! assert!(terms.contains("гальмо"));
//!
//! // Rank candidates with a named preset
//! let ranker = EnsembleRanker::new(RankingWeights::preset("exact_priority"));
//! let hits = ranker.rank_all(vec![
//!     SearchSignals::new(ProductId::new(1)).with_exact_match(0.9),
//!     SearchSignals::new(ProductId::new(2)).with_vector_similarity(0.9),
//! ]);
//! assert_eq!(hits[0].signals.product_id, ProductId::new(1));
//! ```
//!
//! # Architecture
//!
//! The workspace splits along the two core components plus their seams:
//! - [`katalog_core`]: shared types, the [`SearchSignals`] record, errors
//! - [`katalog_query`]: vocabulary, stemming, bounded caches, [`QueryNormalizer`]
//! - [`katalog_ranking`]: [`RankingWeights`] presets and the [`EnsembleRanker`]
//! - [`katalog_search`]: the [`SearchPipeline`] orchestrator and the
//!   [`CandidateSource`] store seam
//!
//! Retrieval itself (SQL, full-text indexes, vector stores) stays behind
//! `CandidateSource`; this crate never talks to a database.

pub use katalog_core::{
    term_set, Error, ProductId, Result, SearchSignals, TermSet, VocabularyConfig,
};
pub use katalog_query::{
    coverage_score, CacheStats, LruCache, NormalizerCacheStats, QueryNormalizer, Vocabulary,
};
pub use katalog_ranking::{EnsembleRanker, RankedHit, RankingWeights};
pub use katalog_search::{
    merge_candidates, CandidateSource, SearchPipeline, SearchRequest, SearchResponse, SearchStats,
    DEFAULT_LIMIT,
};
