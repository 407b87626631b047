//! Error types for the search pipeline.

use thiserror::Error;

/// Errors returned by [`run_search`](crate::run_search).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The pipeline requires a non-empty, non-whitespace query.
    ///
    /// Callers are expected to guard this at the input boundary and show a
    /// "start searching" state instead; scoring an empty query is undefined
    /// because substring containment on the empty string matches everything.
    #[error("query must be non-empty and non-whitespace")]
    EmptyQuery,
}
