//! Vertex handles and the core vertex struct.

use serde::Serialize;

/// Handle identifying a vertex within one graph.
///
/// Handles carry identity, not value: two vertices with the same name are
/// distinct unless their handles are equal. IDs are assigned from a
/// monotonic per-graph counter and never reused, so the handle of a removed
/// vertex permanently resolves to not-found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct VertexId(pub u64);

impl std::fmt::Display for VertexId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "v{}", self.0)
    }
}

/// A named node in the graph. The name is mutable and not required to be
/// unique; identity lives in the handle.
#[derive(Debug, Clone, Serialize)]
pub struct Vertex {
    id: VertexId,
    name: String,
}

impl Vertex {
    /// Create a vertex with the given handle and name.
    pub fn new(id: VertexId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// The vertex handle.
    pub fn id(&self) -> VertexId {
        self.id
    }

    /// The current name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replace the name unconditionally. No uniqueness check.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }
}

impl std::fmt::Display for Vertex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Vertex {}", self.name)
    }
}
