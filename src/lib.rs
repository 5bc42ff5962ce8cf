//! labelgraph — in-memory undirected labeled graph.
//!
//! Vertices and edges carry mutable string names and are addressed by
//! stable handles. The graph exposes the classic ADT operations (insert,
//! remove, adjacency, incidence, rename) plus breadth-first traversal,
//! reachability, and connectivity queries.

pub mod cli;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use graph::{all_connected, all_reachable, bfs_components, bfs_from, GraphBuilder, LabelGraph};
pub use types::{Edge, EdgeId, GraphError, GraphResult, Vertex, VertexId};
