//! Search pipeline orchestration for the katalog product-search system
//!
//! This crate provides:
//! - CandidateSource: the external-store collaborator seam
//! - SearchRequest / SearchResponse / SearchStats: the request surface
//! - SearchPipeline: normalize, fetch, merge, rank, truncate
//!
//! # Usage
//!
//! ```no_run
//! use katalog_query::QueryNormalizer;
//! use katalog_search::{SearchPipeline, SearchRequest};
//!
//! let pipeline = SearchPipeline::new(QueryNormalizer::automotive());
//! let response = pipeline.search(&SearchRequest::new("Диск гальмівний"))?;
//! for hit in &response.hits {
//!     println!("{}: {:.3}", hit.signals.product_id, hit.ranking_score);
//! }
//! # Ok::<(), katalog_core::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod pipeline;

pub use pipeline::{
    merge_candidates, CandidateSource, SearchPipeline, SearchRequest, SearchResponse, SearchStats,
    DEFAULT_LIMIT,
};
