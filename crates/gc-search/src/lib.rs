//! Heuristic relevance scoring and ranking for the GharConnect catalog.
//!
//! The pipeline is deliberately simple: a linear scan over the aggregated
//! candidate pool with an additive point system, not an index. A query runs
//! through three stages:
//!
//! 1. **Shortcuts** — well-known single-category intents (`"plumber"`,
//!    `"milk"`, `"2 bhk"`) redirect straight to a category page and skip
//!    scoring entirely.
//! 2. **Scoring** — every candidate gets an additive relevance score; zero
//!    means excluded.
//! 3. **Ranking** — survivors are sorted by score descending with ties kept
//!    in aggregation order, then optionally filtered by result kind.
//!
//! # Example
//!
//! ```
//! use gc_catalog::{CatalogSnapshot, aggregate};
//! use gc_search::{SearchOptions, SearchOutcome, run_search};
//!
//! let catalog = aggregate(&CatalogSnapshot::default(), "sunrise");
//! let outcome = run_search("plumber near me", &catalog, "sunrise", &SearchOptions::default());
//! assert!(matches!(outcome, Ok(SearchOutcome::Redirect(_))));
//! ```

#![warn(missing_docs)]

mod error;
mod fuzzy;
mod rank;
mod score;
mod shortcut;

use gc_catalog::{ResultKind, SearchResult};

pub use error::SearchError;
pub use fuzzy::fuzzy_match;
pub use rank::{filter_by_kind, rank};
pub use score::{ScoreBreakdown, Signal, score, score_with_breakdown};
pub use shortcut::{Redirect, match_shortcut};

/// Options controlling one pipeline run.
#[derive(Debug, Clone, Default)]
pub struct SearchOptions {
    /// Disable the direct-redirect shortcuts and always rank.
    pub no_shortcuts: bool,
    /// Keep only results of this kind (applied after ranking).
    pub kind: Option<ResultKind>,
    /// Truncate the ranked list to this many results.
    pub limit: Option<usize>,
}

/// Outcome of one pipeline run.
#[derive(Debug, Clone)]
pub enum SearchOutcome {
    /// A shortcut trigger fired; navigate instead of showing results.
    Redirect(Redirect),
    /// Ranked results, best first. May be empty.
    Results(Vec<SearchResult>),
}

/// Runs the full search pipeline for one query.
///
/// The query must be non-empty after trimming ([`SearchError::EmptyQuery`]
/// otherwise). Shortcuts are checked first unless disabled; on fall-through
/// the catalog is scored, ranked, kind-filtered, and truncated.
pub fn run_search(
    query: &str,
    catalog: &[SearchResult],
    society: &str,
    options: &SearchOptions,
) -> Result<SearchOutcome, SearchError> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return Err(SearchError::EmptyQuery);
    }

    if !options.no_shortcuts
        && let Some(redirect) = match_shortcut(trimmed, society)
    {
        return Ok(SearchOutcome::Redirect(redirect));
    }

    let mut results = filter_by_kind(rank(trimmed, catalog), options.kind);
    if let Some(limit) = options.limit {
        results.truncate(limit);
    }
    Ok(SearchOutcome::Results(results))
}
