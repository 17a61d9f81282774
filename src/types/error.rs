//! Error types for the digraph-walk library.

use thiserror::Error;

/// Errors raised by the fallible surfaces of the library.
///
/// The core graph operations never fail: unknown vertices behave as vertices
/// without neighbors and exhausted searches return `None`. These variants are
/// only produced by the strict construction helpers and by the CLI.
#[derive(Error, Debug)]
pub enum GraphError {
    /// An edge endpoint was never added as a vertex.
    #[error("Vertex {0} not found")]
    VertexNotFound(String),

    /// An edge given on the command line could not be parsed.
    #[error("Invalid edge spec: {0} (expected U:V)")]
    InvalidEdgeSpec(String),

    /// A vertex given on the command line could not be parsed.
    #[error("Invalid vertex: {0}")]
    InvalidVertex(String),

    /// JSON rendering failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type for digraph-walk operations.
pub type GraphResult<T> = Result<T, GraphError>;
