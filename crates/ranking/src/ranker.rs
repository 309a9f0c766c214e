//! Multi-signal ensemble ranker
//!
//! This module combines the per-candidate [`SearchSignals`] record with a
//! [`RankingWeights`] vector into one scalar in [0, 1]:
//! - text/semantic scores pass through as supplied by the store
//! - popularity is log-damped so a handful of extremely popular items
//!   cannot saturate the ordering linearly
//! - availability is an indicator sum acting as a quality tie-breaker
//! - freshness decays exponentially with product age
//!
//! The ranker never fails for well-typed input. Out-of-range raw scores are
//! not validated; they propagate into the weighted sum and are clamped only
//! at the final aggregate, which callers should treat as masking an
//! upstream bug rather than a supported input range.

use crate::weights::RankingWeights;
use chrono::{DateTime, Utc};
use katalog_core::SearchSignals;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Relative worth of a conversion vs. a click vs. a view
const CONVERSION_WEIGHT: f64 = 10.0;
const CLICK_WEIGHT: f64 = 3.0;
const VIEW_WEIGHT: f64 = 1.0;

/// Popularity saturates at this weighted total (log base)
const POPULARITY_SATURATION: f64 = 1000.0;

/// Freshness half-life in days
const FRESHNESS_HALF_LIFE_DAYS: f64 = 180.0;

/// Freshness contribution when no timestamp is known
const FRESHNESS_NEUTRAL: f32 = 0.5;

/// A scored candidate as returned by [`EnsembleRanker::rank_all`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedHit {
    /// The raw signals this score was computed from
    pub signals: SearchSignals,
    /// Final ensemble score in [0, 1]
    pub ranking_score: f32,
    /// 1-based position after sorting
    pub rank: u32,
}

/// Multi-signal ensemble ranker
///
/// Construction normalizes the supplied weights once; scoring is a pure
/// function of the signals record afterwards, so one ranker instance is
/// safely shared across threads.
#[derive(Debug, Clone)]
pub struct EnsembleRanker {
    weights: RankingWeights,
}

impl Default for EnsembleRanker {
    fn default() -> Self {
        EnsembleRanker::new(RankingWeights::balanced())
    }
}

impl EnsembleRanker {
    /// Create a ranker; weights are normalized at construction
    pub fn new(weights: RankingWeights) -> Self {
        EnsembleRanker {
            weights: weights.normalize(),
        }
    }

    /// The normalized weights this ranker scores with
    pub fn weights(&self) -> &RankingWeights {
        &self.weights
    }

    // ========================================================================
    // Signal shaping
    // ========================================================================

    /// Strongest of the three text-matching signals
    ///
    /// Diagnostic convenience; the weighted sum uses the individual
    /// components, not this maximum.
    pub fn text_score(signals: &SearchSignals) -> f32 {
        signals
            .exact_match_score
            .max(signals.fulltext_rank)
            .max(signals.trigram_similarity)
    }

    /// Log-damped behavioral popularity in [0, 1]
    ///
    /// `ln(1 + 10·conversions + 3·clicks + views) / ln(1000)`, capped at
    /// 1.0. The 10:3:1 coefficients encode that a conversion is worth
    /// roughly three clicks or ten views for ranking purposes.
    pub fn popularity_score(signals: &SearchSignals) -> f32 {
        if signals.click_count == 0 && signals.view_count == 0 && signals.conversion_count == 0 {
            return 0.0;
        }
        let weighted = signals.conversion_count as f64 * CONVERSION_WEIGHT
            + signals.click_count as f64 * CLICK_WEIGHT
            + signals.view_count as f64 * VIEW_WEIGHT;
        let normalized = (1.0 + weighted).ln() / POPULARITY_SATURATION.ln();
        normalized.min(1.0) as f32
    }

    /// Listing quality indicator sum: image 0.3, for-sale 0.4, for-web 0.3
    pub fn availability_score(signals: &SearchSignals) -> f32 {
        let mut score = 0.0;
        if signals.has_image {
            score += 0.3;
        }
        if signals.is_for_sale {
            score += 0.4;
        }
        if signals.is_for_web {
            score += 0.3;
        }
        score
    }

    /// Age-decayed freshness in [0, 1]
    ///
    /// Exponential half-life decay (180 days) over the update timestamp,
    /// falling back to the creation timestamp. Candidates without any
    /// timestamp score the neutral 0.5.
    pub fn freshness_score(signals: &SearchSignals, now: DateTime<Utc>) -> f32 {
        let Some(ts) = signals.updated_at.or(signals.created_at) else {
            return FRESHNESS_NEUTRAL;
        };
        let age_days = (now - ts).num_seconds() as f64 / 86_400.0;
        let decayed = 0.5_f64.powf(age_days.max(0.0) / FRESHNESS_HALF_LIFE_DAYS);
        decayed.clamp(0.0, 1.0) as f32
    }

    // ========================================================================
    // Scoring
    // ========================================================================

    /// Ensemble score for one candidate, evaluated at `now`
    ///
    /// Weighted sum of the seven shaped contributions, clamped to [0, 1].
    /// The clamp guards against floating-point overshoot, not against
    /// out-of-range raw inputs.
    pub fn score_at(&self, signals: &SearchSignals, now: DateTime<Utc>) -> f32 {
        let w = &self.weights;
        let final_score = w.exact_match * signals.exact_match_score
            + w.fulltext * signals.fulltext_rank
            + w.trigram * signals.trigram_similarity
            + w.vector_similarity * signals.vector_similarity
            + w.popularity * Self::popularity_score(signals)
            + w.availability * Self::availability_score(signals)
            + w.freshness * Self::freshness_score(signals, now);

        let clamped = final_score.clamp(0.0, 1.0);
        trace!(
            target: "katalog.ranker",
            product_id = %signals.product_id,
            score = clamped,
            "scored candidate"
        );
        clamped
    }

    /// Ensemble score for one candidate at the current time
    pub fn score(&self, signals: &SearchSignals) -> f32 {
        self.score_at(signals, Utc::now())
    }

    /// Score, sort, and rank a whole candidate list
    ///
    /// Sorted descending by score; ties break deterministically by
    /// ascending product id. Ranks are 1-based.
    pub fn rank_all(&self, candidates: Vec<SearchSignals>) -> Vec<RankedHit> {
        let now = Utc::now();
        let mut hits: Vec<RankedHit> = candidates
            .into_iter()
            .map(|signals| {
                let ranking_score = self.score_at(&signals, now);
                RankedHit {
                    signals,
                    ranking_score,
                    rank: 0,
                }
            })
            .collect();

        hits.sort_by(|a, b| {
            b.ranking_score
                .total_cmp(&a.ranking_score)
                .then_with(|| a.signals.product_id.cmp(&b.signals.product_id))
        });

        for (i, hit) in hits.iter_mut().enumerate() {
            hit.rank = (i + 1) as u32;
        }
        hits
    }
}
