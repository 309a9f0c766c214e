//! Hybrid search pipeline
//!
//! This module orchestrates one search request end to end:
//! 1. normalize the raw query into a term set
//! 2. fetch candidates from every registered [`CandidateSource`],
//!    over-fetching 2x the requested limit so reranking has room to reorder
//! 3. merge duplicate candidates by product id, keeping the strongest value
//!    of every signal
//! 4. score and sort with the ensemble ranker
//! 5. truncate to the requested limit
//!
//! Retrieval techniques (exact vendor-code match, full-text, trigram, vector)
//! live behind the `CandidateSource` seam; the pipeline itself touches no
//! store and holds no connection state.

use katalog_core::{Error, ProductId, Result, SearchSignals, TermSet};
use katalog_query::QueryNormalizer;
use katalog_ranking::{EnsembleRanker, RankedHit, RankingWeights};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::debug;

/// Default number of hits returned per request
pub const DEFAULT_LIMIT: usize = 20;

/// Over-fetch multiplier applied to each source's fetch limit
const OVERFETCH_FACTOR: usize = 2;

// ============================================================================
// Candidate source seam
// ============================================================================

/// One retrieval technique backed by an external store
///
/// Implementations receive both the normalized term set and the raw query
/// (exact vendor-code matching wants the untouched input). A source returns
/// signal records with only its own score fields populated; the pipeline
/// merges records for the same product across sources.
pub trait CandidateSource: Send + Sync {
    /// Short identifier used in errors and stats
    fn name(&self) -> &str;

    /// Fetch up to `limit` candidates for the given query
    fn fetch(&self, terms: &TermSet, raw_query: &str, limit: usize)
        -> Result<Vec<SearchSignals>>;
}

// ============================================================================
// Request / response
// ============================================================================

/// Parameters of one search request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRequest {
    /// The raw user query
    pub query: String,
    /// Maximum number of hits to return
    pub limit: usize,
    /// Whether the normalizer applies morphological case expansion
    pub expand_cases: bool,
    /// Named weight preset; ignored when `weights` is set
    pub preset: Option<String>,
    /// Explicit weight vector, overriding any preset
    pub weights: Option<RankingWeights>,
}

impl SearchRequest {
    /// Create a request with default limit and case expansion enabled
    pub fn new(query: impl Into<String>) -> Self {
        SearchRequest {
            query: query.into(),
            limit: DEFAULT_LIMIT,
            expand_cases: true,
            preset: None,
            weights: None,
        }
    }

    /// Builder: set the hit limit
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Builder: enable or disable morphological case expansion
    pub fn with_expand_cases(mut self, expand: bool) -> Self {
        self.expand_cases = expand;
        self
    }

    /// Builder: select a named weight preset
    pub fn with_preset(mut self, preset: impl Into<String>) -> Self {
        self.preset = Some(preset.into());
        self
    }

    /// Builder: supply an explicit weight vector
    pub fn with_weights(mut self, weights: RankingWeights) -> Self {
        self.weights = Some(weights);
        self
    }

    /// Weight vector this request ranks with
    ///
    /// Explicit weights win over a preset name; absent both, balanced.
    /// Unknown preset names fall back to balanced rather than failing.
    pub fn resolve_weights(&self) -> RankingWeights {
        if let Some(weights) = self.weights {
            return weights;
        }
        match &self.preset {
            Some(name) => RankingWeights::preset(name),
            None => RankingWeights::balanced(),
        }
    }
}

/// Timing and volume counters for one request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SearchStats {
    /// Wall-clock duration of the whole pipeline run
    pub elapsed_micros: u64,
    /// Candidates fetched across all sources, before merging
    pub candidates_considered: usize,
    /// Number of sources queried
    pub sources_searched: usize,
}

/// Result of one search request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Ranked hits, best first, at most `limit` of them
    pub hits: Vec<RankedHit>,
    /// True when merging produced more candidates than the limit
    pub truncated: bool,
    /// Request-level counters
    pub stats: SearchStats,
}

impl SearchResponse {
    fn empty(stats: SearchStats) -> Self {
        SearchResponse {
            hits: Vec::new(),
            truncated: false,
            stats,
        }
    }
}

// ============================================================================
// Pipeline
// ============================================================================

/// In-process search orchestrator
///
/// Owns the normalizer and the registered sources; construct once, share
/// across threads, call [`search`](SearchPipeline::search) per request.
pub struct SearchPipeline {
    normalizer: QueryNormalizer,
    sources: Vec<Box<dyn CandidateSource>>,
}

impl SearchPipeline {
    /// Create a pipeline with no sources registered
    pub fn new(normalizer: QueryNormalizer) -> Self {
        SearchPipeline {
            normalizer,
            sources: Vec::new(),
        }
    }

    /// Builder: register a candidate source
    pub fn with_source(mut self, source: Box<dyn CandidateSource>) -> Self {
        self.sources.push(source);
        self
    }

    /// The normalizer this pipeline runs queries through
    pub fn normalizer(&self) -> &QueryNormalizer {
        &self.normalizer
    }

    /// Number of registered sources
    pub fn source_count(&self) -> usize {
        self.sources.len()
    }

    /// Run one request through the full pipeline
    ///
    /// A query that normalizes to the empty term set (empty input, pure
    /// stopwords, excluded-language input) yields an empty response, not an
    /// error. Source failures propagate.
    pub fn search(&self, request: &SearchRequest) -> Result<SearchResponse> {
        let started = Instant::now();

        let terms = self.normalizer.normalize(&request.query, request.expand_cases);
        if terms.is_empty() || request.limit == 0 {
            debug!(
                target: "katalog.pipeline",
                query = %request.query,
                limit = request.limit,
                "nothing to search, returning empty response"
            );
            return Ok(SearchResponse::empty(SearchStats {
                elapsed_micros: started.elapsed().as_micros() as u64,
                candidates_considered: 0,
                sources_searched: 0,
            }));
        }

        let fetch_limit = request.limit.saturating_mul(OVERFETCH_FACTOR);
        let mut fetched: Vec<SearchSignals> = Vec::new();
        for source in &self.sources {
            let mut batch = source
                .fetch(&terms, &request.query, fetch_limit)
                .map_err(|e| match e {
                    e @ Error::SourceError { .. } => e,
                    other => Error::source_error(source.name(), other),
                })?;
            debug!(
                target: "katalog.pipeline",
                source = source.name(),
                candidates = batch.len(),
                "fetched candidates"
            );
            fetched.append(&mut batch);
        }
        let candidates_considered = fetched.len();

        let merged = merge_candidates(fetched);
        let truncated = merged.len() > request.limit;

        let ranker = EnsembleRanker::new(request.resolve_weights());
        let mut hits = ranker.rank_all(merged);
        hits.truncate(request.limit);

        let stats = SearchStats {
            elapsed_micros: started.elapsed().as_micros() as u64,
            candidates_considered,
            sources_searched: self.sources.len(),
        };
        debug!(
            target: "katalog.pipeline",
            query = %request.query,
            terms = terms.len(),
            hits = hits.len(),
            truncated,
            elapsed_micros = stats.elapsed_micros,
            "search complete"
        );

        Ok(SearchResponse {
            hits,
            truncated,
            stats,
        })
    }
}

/// Collapse duplicate candidates from different retrieval techniques
///
/// Records sharing a product id merge via [`SearchSignals::merge_max`]:
/// scores and counters keep the per-field maximum, flags OR, timestamps keep
/// the first present value. First-seen order is preserved so ranking input
/// stays deterministic.
pub fn merge_candidates(candidates: Vec<SearchSignals>) -> Vec<SearchSignals> {
    let mut index: FxHashMap<ProductId, usize> = FxHashMap::default();
    let mut merged: Vec<SearchSignals> = Vec::with_capacity(candidates.len());

    for candidate in candidates {
        match index.get(&candidate.product_id) {
            Some(&slot) => merged[slot].merge_max(&candidate),
            None => {
                index.insert(candidate.product_id, merged.len());
                merged.push(candidate);
            }
        }
    }
    merged
}
