//! In-memory graph operations — the core data structure.

pub mod builder;
pub mod label_graph;
pub mod traversal;

pub use builder::GraphBuilder;
pub use label_graph::LabelGraph;
pub use traversal::{all_connected, all_reachable, bfs_components, bfs_from};
