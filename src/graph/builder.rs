//! Fluent API for building LabelGraph instances.

use crate::types::{Edge, EdgeId, Vertex, VertexId};

use super::LabelGraph;

/// Fluent builder for constructing a LabelGraph from pre-declared vertices
/// and edges.
pub struct GraphBuilder {
    vertices: Vec<Vertex>,
    edges: Vec<Edge>,
    next_vertex_id: u64,
    next_edge_id: u64,
}

impl GraphBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            edges: Vec::new(),
            next_vertex_id: 0,
            next_edge_id: 0,
        }
    }

    /// Declare a vertex, returning its handle for later linking.
    pub fn add_vertex(&mut self, name: impl Into<String>) -> VertexId {
        let id = VertexId(self.next_vertex_id);
        self.next_vertex_id += 1;
        self.vertices.push(Vertex::new(id, name));
        id
    }

    /// Declare an edge between two previously declared vertices. Permissive
    /// like [`LabelGraph::insert_edge`]: endpoints are not validated.
    pub fn link(&mut self, v: VertexId, w: VertexId, name: impl Into<String>) -> &mut Self {
        let id = EdgeId(self.next_edge_id);
        self.next_edge_id += 1;
        self.edges.push(Edge::new(id, name, v, w));
        self
    }

    /// Build the final LabelGraph.
    pub fn build(self) -> LabelGraph {
        LabelGraph::from_parts(self.vertices, self.edges)
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
