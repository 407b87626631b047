//! Error types for the catalog store boundary.

use std::io;

use thiserror::Error;

/// Errors that can occur when reading catalog tables.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The table's backing file could not be read.
    #[error("catalog table '{table}' unavailable: {source}")]
    TableUnavailable {
        /// Name of the table.
        table: String,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The table's rows could not be decoded.
    #[error("malformed rows in catalog table '{table}': {source}")]
    MalformedTable {
        /// Name of the table.
        table: String,
        /// Underlying decode error.
        source: serde_json::Error,
    },
}
