//! Graph traversal — breadth-first search, reachability, connectivity.
//!
//! All three algorithms run breadth-first search with an explicit FIFO queue
//! and a visited set keyed by vertex handle. Both live on the stack of the
//! call; no traversal state survives between calls. A vertex is marked
//! visited at enqueue time, never at dequeue time, so it can never be
//! enqueued twice.

use std::collections::{HashSet, VecDeque};

use log::trace;

use crate::types::{GraphError, GraphResult, VertexId};

use super::LabelGraph;

/// BFS from `start` over the whole graph, returning the visit order
/// (including `start` itself).
///
/// Permissively-inserted edges may lead to handles outside the vertex
/// collection; those are visited like any other neighbor, matching the
/// reference behavior.
pub fn bfs_from(graph: &LabelGraph, start: VertexId) -> GraphResult<Vec<VertexId>> {
    if graph.get_vertex(start).is_none() {
        return Err(GraphError::VertexNotFound(start));
    }

    let mut visited: HashSet<VertexId> = HashSet::new();
    let mut order: Vec<VertexId> = Vec::new();
    let mut fifo: VecDeque<VertexId> = VecDeque::new();

    visited.insert(start);
    fifo.push_back(start);

    while let Some(vertex) = fifo.pop_front() {
        trace!("visited vertex {}", vertex);
        order.push(vertex);
        for (_, neighbor) in graph.neighbors(vertex) {
            if visited.insert(neighbor) {
                fifo.push_back(neighbor);
            }
        }
    }

    Ok(order)
}

/// BFS over the entire graph, covering disconnected components.
///
/// Seeds are taken from the vertex collection in insertion order, skipping
/// vertices already visited; each component's vertices come back in BFS
/// order, one inner `Vec` per component.
pub fn bfs_components(graph: &LabelGraph) -> Vec<Vec<VertexId>> {
    let mut visited: HashSet<VertexId> = HashSet::new();
    let mut components: Vec<Vec<VertexId>> = Vec::new();

    for seed in graph.vertex_ids() {
        if visited.contains(&seed) {
            continue;
        }

        let mut component: Vec<VertexId> = Vec::new();
        let mut fifo: VecDeque<VertexId> = VecDeque::new();
        visited.insert(seed);
        fifo.push_back(seed);

        while let Some(vertex) = fifo.pop_front() {
            trace!("visited vertex {}", vertex);
            component.push(vertex);
            for (_, neighbor) in graph.neighbors(vertex) {
                if visited.insert(neighbor) {
                    fifo.push_back(neighbor);
                }
            }
        }

        components.push(component);
    }

    components
}

/// All vertices reachable from `start`, in BFS discovery order, excluding
/// `start` itself.
pub fn all_reachable(graph: &LabelGraph, start: VertexId) -> GraphResult<Vec<VertexId>> {
    let order = bfs_from(graph, start)?;
    Ok(order.into_iter().filter(|&v| v != start).collect())
}

/// True iff every vertex is reachable from every other vertex.
///
/// The seed is deterministically the first vertex in insertion order; the
/// connectivity answer does not depend on the choice, but tests do. Empty
/// and single-vertex graphs are trivially connected.
pub fn all_connected(graph: &LabelGraph) -> bool {
    let Some(seed) = graph.vertex_ids().next() else {
        return true;
    };

    // Seed is a member, so all_reachable cannot fail here.
    let reachable: HashSet<VertexId> = match all_reachable(graph, seed) {
        Ok(vs) => vs.into_iter().collect(),
        Err(_) => return false,
    };

    graph
        .vertex_ids()
        .all(|v| v == seed || reachable.contains(&v))
}
