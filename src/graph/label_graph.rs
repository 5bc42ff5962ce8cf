//! Core graph structure — vertex and edge collections plus the ADT operations.

use std::fmt;

use log::{debug, trace};

use crate::types::{Edge, EdgeId, GraphError, GraphResult, Vertex, VertexId};

/// An undirected labeled graph.
///
/// Owns its vertex and edge collections in insertion order. Lookups and
/// adjacency queries are linear scans over those collections; that O(E)
/// behavior is the intended baseline, not an accident.
///
/// Edge insertion is permissive: endpoints are not checked for membership,
/// and self-loops and parallel edges are accepted silently. Consistency
/// between the two collections is maintained by cascading deletion in
/// [`remove_vertex`](LabelGraph::remove_vertex) instead of upfront
/// validation.
pub struct LabelGraph {
    /// All vertices, insertion order.
    vertices: Vec<Vertex>,
    /// All edges, insertion order.
    edges: Vec<Edge>,
    /// Next vertex ID. Monotonic, never reused.
    next_vertex_id: u64,
    /// Next edge ID. Monotonic, never reused.
    next_edge_id: u64,
}

impl LabelGraph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            edges: Vec::new(),
            next_vertex_id: 0,
            next_edge_id: 0,
        }
    }

    /// Assemble a graph from pre-built collections (used by the builder).
    /// ID counters resume past the largest handle seen.
    pub fn from_parts(vertices: Vec<Vertex>, edges: Vec<Edge>) -> Self {
        let next_vertex_id = vertices.iter().map(|v| v.id().0 + 1).max().unwrap_or(0);
        let next_edge_id = edges.iter().map(|e| e.id().0 + 1).max().unwrap_or(0);
        Self {
            vertices,
            edges,
            next_vertex_id,
            next_edge_id,
        }
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Resolve a vertex handle (immutable).
    pub fn get_vertex(&self, id: VertexId) -> Option<&Vertex> {
        // Fast path: while no vertex has been removed, IDs are positional
        let idx = id.0 as usize;
        if idx < self.vertices.len() && self.vertices[idx].id() == id {
            return Some(&self.vertices[idx]);
        }
        // Fallback: linear scan (needed after remove_vertex)
        self.vertices.iter().find(|v| v.id() == id)
    }

    fn get_vertex_mut(&mut self, id: VertexId) -> Option<&mut Vertex> {
        let idx = id.0 as usize;
        if idx < self.vertices.len() && self.vertices[idx].id() == id {
            return Some(&mut self.vertices[idx]);
        }
        self.vertices.iter_mut().find(|v| v.id() == id)
    }

    /// Resolve an edge handle (immutable).
    pub fn get_edge(&self, id: EdgeId) -> Option<&Edge> {
        let idx = id.0 as usize;
        if idx < self.edges.len() && self.edges[idx].id() == id {
            return Some(&self.edges[idx]);
        }
        self.edges.iter().find(|e| e.id() == id)
    }

    fn get_edge_mut(&mut self, id: EdgeId) -> Option<&mut Edge> {
        let idx = id.0 as usize;
        if idx < self.edges.len() && self.edges[idx].id() == id {
            return Some(&mut self.edges[idx]);
        }
        self.edges.iter_mut().find(|e| e.id() == id)
    }

    /// All vertices in insertion order.
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// All edges in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Vertex handles in insertion order.
    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.vertices.iter().map(|v| v.id())
    }

    /// Edge handles in insertion order.
    pub fn edge_ids(&self) -> impl Iterator<Item = EdgeId> + '_ {
        self.edges.iter().map(|e| e.id())
    }

    /// Insert a new vertex with the given name. Always succeeds.
    pub fn insert_vertex(&mut self, name: impl Into<String>) -> VertexId {
        let id = VertexId(self.next_vertex_id);
        self.next_vertex_id += 1;
        let vertex = Vertex::new(id, name);
        debug!("insert vertex {} ({})", id, vertex.name());
        self.vertices.push(vertex);
        id
    }

    /// Insert a new edge with endpoints `(v, w)` in that order.
    ///
    /// Permissive by contract: no check that `v` or `w` belong to this
    /// graph, no check for self-loops or parallel edges.
    pub fn insert_edge(&mut self, v: VertexId, w: VertexId, name: impl Into<String>) -> EdgeId {
        let id = EdgeId(self.next_edge_id);
        self.next_edge_id += 1;
        let edge = Edge::new(id, name, v, w);
        debug!("insert edge {} ({}): {} -- {}", id, edge.name(), v, w);
        self.edges.push(edge);
        id
    }

    /// Remove a vertex, returning its name.
    ///
    /// Every edge incident to `v` is removed first, before `v` itself is
    /// checked for membership. The ordering is deliberate and observable:
    /// edges whose endpoints mention a handle that is not a member (possible
    /// because insertion is permissive) are still purged even though the
    /// call then reports [`GraphError::VertexNotFound`].
    pub fn remove_vertex(&mut self, v: VertexId) -> GraphResult<String> {
        let before = self.edges.len();
        self.edges.retain(|e| !e.is_endpoint(v));
        if self.edges.len() != before {
            debug!(
                "remove vertex {}: cascaded {} incident edge(s)",
                v,
                before - self.edges.len()
            );
        }

        let pos = self
            .vertices
            .iter()
            .position(|vertex| vertex.id() == v)
            .ok_or(GraphError::VertexNotFound(v))?;
        let removed = self.vertices.remove(pos);
        debug!("remove vertex {} ({})", v, removed.name());
        Ok(removed.name().to_string())
    }

    /// Remove an edge, returning its name.
    pub fn remove_edge(&mut self, e: EdgeId) -> GraphResult<String> {
        let pos = self
            .edges
            .iter()
            .position(|edge| edge.id() == e)
            .ok_or(GraphError::EdgeNotFound(e))?;
        let removed = self.edges.remove(pos);
        debug!("remove edge {} ({})", e, removed.name());
        Ok(removed.name().to_string())
    }

    /// The endpoint of `e` opposite `v`.
    ///
    /// Not-found when `e` is absent from the graph, or when `v` is not one
    /// of its two endpoints. Involutive over an edge's endpoints:
    /// `opposite(e, opposite(e, v)) == v`.
    pub fn opposite(&self, e: EdgeId, v: VertexId) -> GraphResult<VertexId> {
        let edge = self.get_edge(e).ok_or(GraphError::EdgeNotFound(e))?;
        edge.opposite(v)
            .ok_or(GraphError::NotAnEndpoint { edge: e, vertex: v })
    }

    /// True iff some edge has both `v` and `w` among its endpoints.
    /// Scans the whole edge collection — O(E).
    pub fn are_adjacent(&self, v: VertexId, w: VertexId) -> bool {
        self.edges
            .iter()
            .any(|e| e.is_endpoint(v) && e.is_endpoint(w))
    }

    /// All edges incident to `v`, in edge-collection order — O(E).
    pub fn incident_edges(&self, v: VertexId) -> Vec<EdgeId> {
        self.edges
            .iter()
            .filter(|e| e.is_endpoint(v))
            .map(|e| e.id())
            .collect()
    }

    /// Neighbors of `v`: each incident edge paired with its opposite
    /// endpoint, in edge-collection order. Traversal builds on this.
    pub fn neighbors(&self, v: VertexId) -> impl Iterator<Item = (EdgeId, VertexId)> + '_ {
        self.edges
            .iter()
            .filter_map(move |e| e.opposite(v).map(|w| (e.id(), w)))
    }

    /// Rename a vertex, returning the old name.
    pub fn rename_vertex(&mut self, v: VertexId, name: impl Into<String>) -> GraphResult<String> {
        let vertex = self
            .get_vertex_mut(v)
            .ok_or(GraphError::VertexNotFound(v))?;
        let old = vertex.name().to_string();
        vertex.set_name(name);
        trace!("rename vertex {}: {} -> {}", v, old, vertex.name());
        Ok(old)
    }

    /// Rename an edge, returning the old name.
    pub fn rename_edge(&mut self, e: EdgeId, name: impl Into<String>) -> GraphResult<String> {
        let edge = self.get_edge_mut(e).ok_or(GraphError::EdgeNotFound(e))?;
        let old = edge.name().to_string();
        edge.set_name(name);
        trace!("rename edge {}: {} -> {}", e, old, edge.name());
        Ok(old)
    }

    fn vertex_label(&self, v: VertexId) -> String {
        match self.get_vertex(v) {
            Some(vertex) => vertex.name().to_string(),
            // Permissive edges may reference handles outside the graph
            None => v.to_string(),
        }
    }
}

impl Default for LabelGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for LabelGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Graph vertices:")?;
        for vertex in &self.vertices {
            writeln!(f, "  [{}] {}", vertex.id(), vertex.name())?;
        }
        writeln!(f, "Connected by edges:")?;
        for edge in &self.edges {
            let [a, b] = edge.endpoints();
            writeln!(
                f,
                "  {}: {} -- {}",
                edge.name(),
                self.vertex_label(a),
                self.vertex_label(b)
            )?;
        }
        Ok(())
    }
}
