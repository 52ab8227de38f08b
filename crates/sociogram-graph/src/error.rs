//! Error types for graph construction and queries.

use thiserror::Error;

/// Graph result type.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Errors raised while building or querying the adjacency matrix.
#[derive(Error, Debug)]
pub enum GraphError {
    /// No valid nodes were found; there is nothing to build.
    #[error("no valid nodes in input")]
    EmptyGraph,

    /// A supplied node id falls outside the matrix index space.
    #[error("node {node} is outside the matrix (size {size})")]
    NodeOutOfRange { node: usize, size: usize },

    /// IO error while writing an export.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
