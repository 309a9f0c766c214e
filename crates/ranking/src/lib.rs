//! Ensemble ranking for the katalog product-search system
//!
//! This crate provides:
//! - RankingWeights: the seven-signal weight vector plus named presets
//! - EnsembleRanker: per-candidate scoring and full-list ranking
//! - RankedHit: a scored, rank-numbered candidate
//!
//! # Usage
//!
//! ```
//! use katalog_core::{ProductId, SearchSignals};
//! use katalog_ranking::{EnsembleRanker, RankingWeights};
//!
//! let ranker = EnsembleRanker::new(RankingWeights::preset("exact_priority"));
//! let hits = ranker.rank_all(vec![
//!     SearchSignals::new(ProductId::new(1)).with_exact_match(0.9),
//!     SearchSignals::new(ProductId::new(2)).with_vector_similarity(0.9),
//! ]);
//! assert_eq!(hits[0].signals.product_id, ProductId::new(1));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod ranker;
pub mod weights;

pub use ranker::{EnsembleRanker, RankedHit};
pub use weights::RankingWeights;
