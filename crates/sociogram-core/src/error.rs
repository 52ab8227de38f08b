//! Error types for edge-list ingestion.

use thiserror::Error;

/// Ingestion result type.
pub type Result<T> = std::result::Result<T, ReadError>;

/// Errors raised while reading an edge list.
///
/// Row-level problems are never errors: malformed rows are skipped with a
/// logged warning and the run continues. These variants cover failures of
/// the underlying source itself.
#[derive(Error, Debug)]
pub enum ReadError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV decode error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
