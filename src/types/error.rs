//! Error types for the labelgraph library.

use thiserror::Error;

use super::{EdgeId, VertexId};

/// All errors that can occur in the labelgraph library.
///
/// Not-found conditions are returned, never panicked on: an operation that
/// references a handle absent from the graph reports it as a value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// Vertex handle not present in the graph.
    #[error("Vertex {0} not found")]
    VertexNotFound(VertexId),

    /// Edge handle not present in the graph.
    #[error("Edge {0} not found")]
    EdgeNotFound(EdgeId),

    /// The given vertex is not an endpoint of the given edge.
    #[error("Vertex {vertex} is not an endpoint of edge {edge}")]
    NotAnEndpoint { edge: EdgeId, vertex: VertexId },

    /// JSON serialization failed (CLI output path only).
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Convenience result type for labelgraph operations.
pub type GraphResult<T> = Result<T, GraphError>;
