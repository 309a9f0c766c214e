//! Ranking weight vectors and named presets
//!
//! This module defines the seven-signal weight vector the ensemble ranker
//! consumes, plus the named presets callers select per request. Presets are
//! immutable; request-time weight vectors are derived copies.

use serde::{Deserialize, Serialize};

/// Convex weight vector over the seven ranking signals
///
/// Weights are non-negative; after [`normalize`](RankingWeights::normalize)
/// they sum to 1.0 — except for the all-zero vector, which is returned
/// unchanged (the ranker then scores every candidate 0.0; a documented
/// degenerate case, not an error).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RankingWeights {
    /// Vendor code / name exact match
    pub exact_match: f32,
    /// Full-text rank
    pub fulltext: f32,
    /// Trigram fuzzy similarity
    pub trigram: f32,
    /// Embedding cosine similarity
    pub vector_similarity: f32,
    /// Behavioral popularity (clicks, views, conversions)
    pub popularity: f32,
    /// Listing quality / purchasability
    pub availability: f32,
    /// Product age
    pub freshness: f32,
}

impl Default for RankingWeights {
    /// The balanced preset
    fn default() -> Self {
        RankingWeights {
            exact_match: 0.30,
            fulltext: 0.10,
            trigram: 0.05,
            vector_similarity: 0.25,
            popularity: 0.15,
            availability: 0.10,
            freshness: 0.05,
        }
    }
}

impl RankingWeights {
    /// The default balanced preset
    pub fn balanced() -> Self {
        RankingWeights::default()
    }

    /// Preset favoring vendor-code and name matches
    pub fn exact_priority() -> Self {
        RankingWeights {
            exact_match: 0.50,
            fulltext: 0.15,
            trigram: 0.05,
            vector_similarity: 0.15,
            popularity: 0.10,
            availability: 0.03,
            freshness: 0.02,
        }
    }

    /// Preset favoring embedding similarity
    pub fn semantic_priority() -> Self {
        RankingWeights {
            exact_match: 0.15,
            fulltext: 0.10,
            trigram: 0.05,
            vector_similarity: 0.45,
            popularity: 0.15,
            availability: 0.05,
            freshness: 0.05,
        }
    }

    /// Preset favoring behavioral signals
    pub fn popularity_priority() -> Self {
        RankingWeights {
            exact_match: 0.20,
            fulltext: 0.10,
            trigram: 0.05,
            vector_similarity: 0.20,
            popularity: 0.35,
            availability: 0.05,
            freshness: 0.05,
        }
    }

    /// Resolve a preset by name, falling back to balanced
    ///
    /// Unrecognized names are never an error: callers always get a usable
    /// weight vector.
    pub fn preset(name: &str) -> Self {
        match name {
            "balanced" => RankingWeights::balanced(),
            "exact_priority" => RankingWeights::exact_priority(),
            "semantic_priority" => RankingWeights::semantic_priority(),
            "popularity_priority" => RankingWeights::popularity_priority(),
            _ => RankingWeights::balanced(),
        }
    }

    /// Names of all built-in presets
    pub fn preset_names() -> &'static [&'static str] {
        &[
            "balanced",
            "exact_priority",
            "semantic_priority",
            "popularity_priority",
        ]
    }

    /// Sum of all seven weights
    pub fn sum(&self) -> f32 {
        self.exact_match
            + self.fulltext
            + self.trigram
            + self.vector_similarity
            + self.popularity
            + self.availability
            + self.freshness
    }

    /// Scale the vector so its components sum to 1.0
    ///
    /// The all-zero vector is returned unchanged rather than silently
    /// replaced with a uniform distribution; the ranker then yields 0.0 for
    /// every candidate.
    pub fn normalize(&self) -> RankingWeights {
        let total = self.sum();
        if total == 0.0 {
            return *self;
        }
        RankingWeights {
            exact_match: self.exact_match / total,
            fulltext: self.fulltext / total,
            trigram: self.trigram / total,
            vector_similarity: self.vector_similarity / total,
            popularity: self.popularity / total,
            availability: self.availability / total,
            freshness: self.freshness / total,
        }
    }
}
