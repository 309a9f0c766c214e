//! Per-candidate search signals
//!
//! This module defines `SearchSignals`, the strongly-typed record of every
//! raw retrieval score, behavioral counter, and quality flag the ensemble
//! ranker consumes. One record exists per candidate per request; records are
//! created from store output, scored, and discarded.

use crate::types::ProductId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Container for all search scoring signals of one candidate
///
/// Text/semantic scores are conventionally pre-scaled to [0, 1] by the
/// store; the ranker trusts this and does not re-validate. Counters are
/// non-negative behavioral totals; flags describe listing quality.
///
/// Created fresh per search request, never shared mutably across calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchSignals {
    /// Candidate identifier
    pub product_id: ProductId,

    /// 0-1: vendor code / name exact match
    pub exact_match_score: f32,
    /// 0-1: full-text rank, normalized by the store
    pub fulltext_rank: f32,
    /// 0-1: trigram fuzzy string match
    pub trigram_similarity: f32,
    /// 0-1: embedding cosine similarity (callers pre-clamp negatives)
    pub vector_similarity: f32,

    /// Total recorded clicks
    pub click_count: u64,
    /// Total recorded views
    pub view_count: u64,
    /// Total recorded conversions
    pub conversion_count: u64,

    /// Listing has a product image
    pub has_image: bool,
    /// Product is purchasable
    pub is_for_sale: bool,
    /// Product is published to the web storefront
    pub is_for_web: bool,

    /// Product creation timestamp, when known
    pub created_at: Option<DateTime<Utc>>,
    /// Last product update timestamp, when known
    pub updated_at: Option<DateTime<Utc>>,
}

impl SearchSignals {
    /// Create a signals record with all scores zero and all flags false
    pub fn new(product_id: ProductId) -> Self {
        SearchSignals {
            product_id,
            exact_match_score: 0.0,
            fulltext_rank: 0.0,
            trigram_similarity: 0.0,
            vector_similarity: 0.0,
            click_count: 0,
            view_count: 0,
            conversion_count: 0,
            has_image: false,
            is_for_sale: false,
            is_for_web: false,
            created_at: None,
            updated_at: None,
        }
    }

    /// Builder: set exact match score
    pub fn with_exact_match(mut self, score: f32) -> Self {
        self.exact_match_score = score;
        self
    }

    /// Builder: set full-text rank
    pub fn with_fulltext_rank(mut self, rank: f32) -> Self {
        self.fulltext_rank = rank;
        self
    }

    /// Builder: set trigram similarity
    pub fn with_trigram_similarity(mut self, similarity: f32) -> Self {
        self.trigram_similarity = similarity;
        self
    }

    /// Builder: set vector similarity
    pub fn with_vector_similarity(mut self, similarity: f32) -> Self {
        self.vector_similarity = similarity;
        self
    }

    /// Builder: set behavioral counters
    pub fn with_popularity(mut self, clicks: u64, views: u64, conversions: u64) -> Self {
        self.click_count = clicks;
        self.view_count = views;
        self.conversion_count = conversions;
        self
    }

    /// Builder: set quality flags
    pub fn with_availability(mut self, has_image: bool, is_for_sale: bool, is_for_web: bool) -> Self {
        self.has_image = has_image;
        self.is_for_sale = is_for_sale;
        self.is_for_web = is_for_web;
        self
    }

    /// Builder: set creation timestamp
    pub fn with_created_at(mut self, ts: DateTime<Utc>) -> Self {
        self.created_at = Some(ts);
        self
    }

    /// Builder: set update timestamp
    pub fn with_updated_at(mut self, ts: DateTime<Utc>) -> Self {
        self.updated_at = Some(ts);
        self
    }

    /// Merge another record for the same product, keeping the stronger signal
    ///
    /// Used when several retrieval techniques return the same candidate:
    /// scores and counters keep the per-field maximum, flags OR together,
    /// timestamps keep the first present value.
    pub fn merge_max(&mut self, other: &SearchSignals) {
        self.exact_match_score = self.exact_match_score.max(other.exact_match_score);
        self.fulltext_rank = self.fulltext_rank.max(other.fulltext_rank);
        self.trigram_similarity = self.trigram_similarity.max(other.trigram_similarity);
        self.vector_similarity = self.vector_similarity.max(other.vector_similarity);
        self.click_count = self.click_count.max(other.click_count);
        self.view_count = self.view_count.max(other.view_count);
        self.conversion_count = self.conversion_count.max(other.conversion_count);
        self.has_image |= other.has_image;
        self.is_for_sale |= other.is_for_sale;
        self.is_for_web |= other.is_for_web;
        if self.created_at.is_none() {
            self.created_at = other.created_at;
        }
        if self.updated_at.is_none() {
            self.updated_at = other.updated_at;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signals_new_defaults() {
        let s = SearchSignals::new(ProductId::new(1));
        assert_eq!(s.exact_match_score, 0.0);
        assert_eq!(s.click_count, 0);
        assert!(!s.has_image);
        assert!(s.created_at.is_none());
    }

    #[test]
    fn test_signals_builder() {
        let s = SearchSignals::new(ProductId::new(5))
            .with_exact_match(1.0)
            .with_vector_similarity(0.8)
            .with_popularity(3, 10, 1)
            .with_availability(true, true, false);

        assert_eq!(s.exact_match_score, 1.0);
        assert_eq!(s.vector_similarity, 0.8);
        assert_eq!(s.click_count, 3);
        assert_eq!(s.view_count, 10);
        assert_eq!(s.conversion_count, 1);
        assert!(s.has_image);
        assert!(s.is_for_sale);
        assert!(!s.is_for_web);
    }

    #[test]
    fn test_merge_max_keeps_stronger_signal() {
        let mut a = SearchSignals::new(ProductId::new(1))
            .with_exact_match(0.9)
            .with_fulltext_rank(0.2);
        let b = SearchSignals::new(ProductId::new(1))
            .with_exact_match(0.3)
            .with_fulltext_rank(0.7)
            .with_availability(true, false, false);

        a.merge_max(&b);
        assert_eq!(a.exact_match_score, 0.9);
        assert_eq!(a.fulltext_rank, 0.7);
        assert!(a.has_image);
    }

    #[test]
    fn test_merge_max_timestamps_first_present() {
        let ts = Utc::now();
        let mut a = SearchSignals::new(ProductId::new(1));
        let b = SearchSignals::new(ProductId::new(1)).with_created_at(ts);

        a.merge_max(&b);
        assert_eq!(a.created_at, Some(ts));

        // Existing timestamp is not overwritten
        let later = ts + chrono::Duration::days(1);
        let c = SearchSignals::new(ProductId::new(1)).with_created_at(later);
        a.merge_max(&c);
        assert_eq!(a.created_at, Some(ts));
    }
}
