//! Edge handles and the core edge struct.

use serde::Serialize;

use super::VertexId;

/// Handle identifying an edge within one graph. Same identity rules as
/// [`VertexId`]: monotonic, never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct EdgeId(pub u64);

impl std::fmt::Display for EdgeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "e{}", self.0)
    }
}

/// A named undirected connection between exactly two vertex handles.
///
/// The endpoint pair is fixed at creation and never reordered or mutated;
/// only the name changes afterwards. The pair keeps the order given at
/// creation for iteration and display, but adjacency logic treats it as
/// unordered.
#[derive(Debug, Clone, Serialize)]
pub struct Edge {
    id: EdgeId,
    name: String,
    endpoints: [VertexId; 2],
}

impl Edge {
    /// Create an edge with endpoints `(v, w)` in that order.
    pub fn new(id: EdgeId, name: impl Into<String>, v: VertexId, w: VertexId) -> Self {
        Self {
            id,
            name: name.into(),
            endpoints: [v, w],
        }
    }

    /// The edge handle.
    pub fn id(&self) -> EdgeId {
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

    /// The endpoint pair in creation order. Returns a copy; mutating it
    /// cannot affect the edge.
    pub fn endpoints(&self) -> [VertexId; 2] {
        self.endpoints
    }

    /// True if `v` is one of the two endpoints.
    pub fn is_endpoint(&self, v: VertexId) -> bool {
        self.endpoints[0] == v || self.endpoints[1] == v
    }

    /// The endpoint opposite `v`, or `None` when `v` is not an endpoint.
    /// On a self-loop the opposite of `v` is `v`.
    pub fn opposite(&self, v: VertexId) -> Option<VertexId> {
        if self.endpoints[0] == v {
            Some(self.endpoints[1])
        } else if self.endpoints[1] == v {
            Some(self.endpoints[0])
        } else {
            None
        }
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Edge {}, connecting {} and {}",
            self.name, self.endpoints[0], self.endpoints[1]
        )
    }
}
