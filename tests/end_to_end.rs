//! End-to-end scenarios: normalize, fetch, merge, rank through the facade
//!
//! These tests drive the whole pipeline against a small in-memory catalog
//! standing in for the product store. The catalog source scores candidates
//! the way a real store adapter would: exact vendor-code equality on the raw
//! query, term coverage on the product name for full-text.

use katalog::{
    coverage_score, CandidateSource, EnsembleRanker, ProductId, QueryNormalizer, RankingWeights,
    Result, SearchPipeline, SearchRequest, SearchSignals, TermSet,
};

struct CatalogRow {
    id: i64,
    name: &'static str,
    vendor_code: &'static str,
    clicks: u64,
    conversions: u64,
}

/// In-memory stand-in for the product store
struct CatalogSource {
    rows: Vec<CatalogRow>,
}

impl CatalogSource {
    fn seeded() -> Self {
        CatalogSource {
            rows: vec![
                CatalogRow {
                    id: 101,
                    name: "Гвинт кріплення супорта M10",
                    vendor_code: "WHT001595",
                    clicks: 40,
                    conversions: 2,
                },
                CatalogRow {
                    id: 102,
                    name: "Диск гальмівний передній",
                    vendor_code: "BPW0980",
                    clicks: 500,
                    conversions: 30,
                },
                CatalogRow {
                    id: 103,
                    name: "Фільтр оливи двигуна",
                    vendor_code: "OX401D",
                    clicks: 120,
                    conversions: 8,
                },
                CatalogRow {
                    id: 104,
                    name: "Супорт гальмівний задній",
                    vendor_code: "GDB1330",
                    clicks: 300,
                    conversions: 15,
                },
            ],
        }
    }
}

impl CandidateSource for CatalogSource {
    fn name(&self) -> &str {
        "catalog"
    }

    fn fetch(
        &self,
        terms: &TermSet,
        raw_query: &str,
        limit: usize,
    ) -> Result<Vec<SearchSignals>> {
        let code = raw_query.trim().to_uppercase();
        let mut out = Vec::new();
        for row in &self.rows {
            let exact = if row.vendor_code == code { 1.0 } else { 0.0 };
            let fulltext = coverage_score(terms, row.name);
            if exact == 0.0 && fulltext == 0.0 {
                continue;
            }
            out.push(
                SearchSignals::new(ProductId::new(row.id))
                    .with_exact_match(exact)
                    .with_fulltext_rank(fulltext)
                    .with_popularity(row.clicks, row.clicks * 4, row.conversions)
                    .with_availability(true, true, true),
            );
            if out.len() == limit {
                break;
            }
        }
        Ok(out)
    }
}

fn pipeline() -> SearchPipeline {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    SearchPipeline::new(QueryNormalizer::automotive())
        .with_source(Box::new(CatalogSource::seeded()))
}

#[test]
fn test_scenario_mounting_screw() {
    let pipeline = pipeline();
    let response = pipeline.search(&SearchRequest::new("Гвинт кріплення")).unwrap();

    assert!(!response.hits.is_empty());
    assert_eq!(response.hits[0].signals.product_id, ProductId::new(101));
    // The oil filter shares no terms and must not appear
    assert!(response
        .hits
        .iter()
        .all(|h| h.signals.product_id != ProductId::new(103)));
}

#[test]
fn test_scenario_cross_language_brake_query() {
    // Russian "тормоз" must reach Ukrainian-named brake products through
    // the synonym table
    let pipeline = pipeline();
    let response = pipeline.search(&SearchRequest::new("тормоз")).unwrap();

    let ids: Vec<i64> = response
        .hits
        .iter()
        .map(|h| h.signals.product_id.value())
        .collect();
    assert!(ids.contains(&102), "brake disc missing: {ids:?}");
    assert!(ids.contains(&104), "brake caliper missing: {ids:?}");
    assert!(!ids.contains(&103), "oil filter should not match: {ids:?}");
}

#[test]
fn test_word_order_invariant_end_to_end() {
    let pipeline = pipeline();
    let a = pipeline.search(&SearchRequest::new("Гвинт кріплення")).unwrap();
    let b = pipeline.search(&SearchRequest::new("кріплення гвинт")).unwrap();

    let ids = |r: &katalog::SearchResponse| -> Vec<i64> {
        r.hits.iter().map(|h| h.signals.product_id.value()).collect()
    };
    assert_eq!(ids(&a), ids(&b));
}

#[test]
fn test_vendor_code_query_hits_exact_match() {
    let pipeline = pipeline();
    let response = pipeline
        .search(&SearchRequest::new("WHT001595").with_preset("exact_priority"))
        .unwrap();

    assert_eq!(response.hits[0].signals.product_id, ProductId::new(101));
    assert_eq!(response.hits[0].signals.exact_match_score, 1.0);
}

#[test]
fn test_preset_reorders_same_candidates() {
    // One candidate wins on exact match, the other on vector similarity;
    // the preset decides which comes first.
    struct SignalsSource;
    impl CandidateSource for SignalsSource {
        fn name(&self) -> &str {
            "signals"
        }
        fn fetch(&self, _: &TermSet, _: &str, _: usize) -> Result<Vec<SearchSignals>> {
            Ok(vec![
                SearchSignals::new(ProductId::new(1)).with_exact_match(0.95),
                SearchSignals::new(ProductId::new(2)).with_vector_similarity(0.95),
            ])
        }
    }

    let pipeline =
        SearchPipeline::new(QueryNormalizer::automotive()).with_source(Box::new(SignalsSource));

    let exact = pipeline
        .search(&SearchRequest::new("диск").with_preset("exact_priority"))
        .unwrap();
    assert_eq!(exact.hits[0].signals.product_id, ProductId::new(1));

    let semantic = pipeline
        .search(&SearchRequest::new("диск").with_preset("semantic_priority"))
        .unwrap();
    assert_eq!(semantic.hits[0].signals.product_id, ProductId::new(2));
}

#[test]
fn test_explicit_weights_override_preset() {
    let pipeline = pipeline();
    let response = pipeline
        .search(
            &SearchRequest::new("гальмівний диск")
                .with_preset("semantic_priority")
                .with_weights(RankingWeights::exact_priority()),
        )
        .unwrap();
    assert!(!response.hits.is_empty());
}

#[test]
fn test_popularity_breaks_text_ties() {
    // Both brake products match "гальмівний" with equal coverage; the disc
    // has far more engagement and must outrank the caliper under
    // popularity_priority.
    let pipeline = pipeline();
    let response = pipeline
        .search(&SearchRequest::new("гальмівний").with_preset("popularity_priority"))
        .unwrap();

    let ids: Vec<i64> = response
        .hits
        .iter()
        .map(|h| h.signals.product_id.value())
        .collect();
    let disc_pos = ids.iter().position(|&id| id == 102).expect("disc missing");
    let pads_pos = ids.iter().position(|&id| id == 104).expect("pads missing");
    assert!(disc_pos < pads_pos);
}

#[test]
fn test_scores_bounded_and_ranks_sequential() {
    let pipeline = pipeline();
    let response = pipeline.search(&SearchRequest::new("гальмівний диск")).unwrap();

    for (i, hit) in response.hits.iter().enumerate() {
        assert!((0.0..=1.0).contains(&hit.ranking_score));
        assert_eq!(hit.rank, (i + 1) as u32);
        if i > 0 {
            assert!(response.hits[i - 1].ranking_score >= hit.ranking_score);
        }
    }
}

#[test]
fn test_repeated_searches_hit_query_cache() {
    let pipeline = pipeline();
    let _ = pipeline.search(&SearchRequest::new("диск гальмівний")).unwrap();
    let before = pipeline.normalizer().cache_stats().query.hits;
    let _ = pipeline.search(&SearchRequest::new("диск гальмівний")).unwrap();
    let after = pipeline.normalizer().cache_stats().query.hits;
    assert!(after > before);
}

#[test]
fn test_empty_and_stopword_queries_yield_empty_response() {
    let pipeline = pipeline();
    for query in ["", "    ", "для і на"] {
        let response = pipeline.search(&SearchRequest::new(query)).unwrap();
        assert!(response.hits.is_empty(), "query {query:?}");
    }
}

#[test]
fn test_ranker_deterministic_tie_break_through_facade() {
    let ranker = EnsembleRanker::new(RankingWeights::balanced());
    let hits = ranker.rank_all(vec![
        SearchSignals::new(ProductId::new(8)).with_fulltext_rank(0.6),
        SearchSignals::new(ProductId::new(2)).with_fulltext_rank(0.6),
    ]);
    assert_eq!(hits[0].signals.product_id, ProductId::new(2));
}
