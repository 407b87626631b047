//! Result ranking.
//!
//! Filters out zero-scored candidates and sorts the rest by score descending.
//! The sort is stable, so ties keep the catalog aggregation order, which is
//! what makes the pipeline deterministic for a fixed catalog and query.

use gc_catalog::{ResultKind, SearchResult};

use crate::score::score;

/// Scores the candidate pool and returns the surviving results in rank order.
///
/// Results with a score of zero are excluded. Each survivor carries its score
/// in `relevance_score`.
pub fn rank(query: &str, catalog: &[SearchResult]) -> Vec<SearchResult> {
    let mut ranked: Vec<SearchResult> = catalog
        .iter()
        .filter_map(|candidate| {
            let points = score(query, candidate);
            (points > 0).then(|| {
                let mut result = candidate.clone();
                result.relevance_score = Some(points);
                result
            })
        })
        .collect();

    // Stable sort: equal scores keep aggregation order.
    ranked.sort_by(|a, b| b.relevance_score.cmp(&a.relevance_score));
    ranked
}

/// Post-ranking kind filter. Does not affect scores or relative order.
pub fn filter_by_kind(results: Vec<SearchResult>, kind: Option<ResultKind>) -> Vec<SearchResult> {
    match kind {
        None => results,
        Some(kind) => results.into_iter().filter(|r| r.kind == kind).collect(),
    }
}
