//! Traversal tests: BFS order, component coverage, reachability, connectivity.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use labelgraph::types::{GraphError, VertexId};
use labelgraph::{all_connected, all_reachable, bfs_components, bfs_from, GraphBuilder, LabelGraph};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// The London rail network from the original exercise: eight stations,
/// seven named lines plus the Victoria–Euston link.
fn rail_network() -> (LabelGraph, [VertexId; 8]) {
    let mut builder = GraphBuilder::new();
    let waterloo = builder.add_vertex("Waterloo");
    let paddington = builder.add_vertex("Paddington");
    let kings_cross = builder.add_vertex("Kings Cross");
    let st_pancras = builder.add_vertex("St Pancras");
    let euston = builder.add_vertex("Euston");
    let charing_cross = builder.add_vertex("Charing Cross");
    let victoria = builder.add_vertex("Victoria");
    let london_bridge = builder.add_vertex("London Bridge");

    builder
        .link(waterloo, paddington, "AB")
        .link(waterloo, kings_cross, "AC")
        .link(waterloo, charing_cross, "AF")
        .link(paddington, london_bridge, "BH")
        .link(kings_cross, st_pancras, "CD")
        .link(paddington, victoria, "BE")
        .link(victoria, kings_cross, "GC")
        .link(victoria, euston, "GE");

    (
        builder.build(),
        [
            waterloo,
            paddington,
            kings_cross,
            st_pancras,
            euston,
            charing_cross,
            victoria,
            london_bridge,
        ],
    )
}

fn names(graph: &LabelGraph, ids: &[VertexId]) -> Vec<String> {
    ids.iter()
        .map(|&v| graph.get_vertex(v).unwrap().name().to_string())
        .collect()
}

// ==================== BFS Order Tests ====================

#[test]
fn test_bfs_single_vertex() {
    let mut graph = LabelGraph::new();
    let v = graph.insert_vertex("alone");
    assert_eq!(bfs_from(&graph, v).unwrap(), vec![v]);
}

#[test]
fn test_bfs_visits_level_by_level() {
    // Diamond: a-b, a-c, b-d, c-d. The second path to d must not enqueue
    // it twice.
    let mut graph = LabelGraph::new();
    let a = graph.insert_vertex("a");
    let b = graph.insert_vertex("b");
    let c = graph.insert_vertex("c");
    let d = graph.insert_vertex("d");
    graph.insert_edge(a, b, "ab");
    graph.insert_edge(a, c, "ac");
    graph.insert_edge(b, d, "bd");
    graph.insert_edge(c, d, "cd");

    assert_eq!(bfs_from(&graph, a).unwrap(), vec![a, b, c, d]);
    assert_eq!(bfs_from(&graph, d).unwrap(), vec![d, b, c, a]);
}

#[test]
fn test_bfs_order_on_rail_network() {
    init_logging();
    let (graph, stations) = rail_network();
    let [waterloo, ..] = stations;

    let order = bfs_from(&graph, waterloo).unwrap();
    assert_eq!(
        names(&graph, &order),
        vec![
            "Waterloo",
            "Paddington",
            "Kings Cross",
            "Charing Cross",
            "London Bridge",
            "Victoria",
            "St Pancras",
            "Euston",
        ]
    );
}

#[test]
fn test_bfs_unknown_start_not_found() {
    let graph = LabelGraph::new();
    match bfs_from(&graph, VertexId(0)) {
        Err(GraphError::VertexNotFound(_)) => {}
        other => panic!("Expected VertexNotFound, got {:?}", other),
    }
}

#[test]
fn test_bfs_ignores_edges_of_other_components() {
    let mut graph = LabelGraph::new();
    let a = graph.insert_vertex("a");
    let b = graph.insert_vertex("b");
    let c = graph.insert_vertex("c");
    let d = graph.insert_vertex("d");
    graph.insert_edge(a, b, "ab");
    graph.insert_edge(c, d, "cd");

    assert_eq!(bfs_from(&graph, a).unwrap(), vec![a, b]);
    assert_eq!(bfs_from(&graph, c).unwrap(), vec![c, d]);
}

#[test]
fn test_bfs_follows_permissive_edges_to_foreign_handles() {
    let mut graph = LabelGraph::new();
    let v = graph.insert_vertex("v");
    graph.insert_vertex("w");
    let foreign = VertexId(999);
    graph.insert_edge(v, foreign, "dangling");

    assert_eq!(bfs_from(&graph, v).unwrap(), vec![v, foreign]);
    // The foreign handle itself is not a member, so it cannot seed a BFS
    match bfs_from(&graph, foreign) {
        Err(GraphError::VertexNotFound(_)) => {}
        other => panic!("Expected VertexNotFound, got {:?}", other),
    }
}

// ==================== Component Tests ====================

#[test]
fn test_components_cover_disconnected_graph() {
    let mut graph = LabelGraph::new();
    let a = graph.insert_vertex("a");
    let b = graph.insert_vertex("b");
    let c = graph.insert_vertex("c");
    let d = graph.insert_vertex("d");
    let e = graph.insert_vertex("e");
    graph.insert_edge(a, b, "ab");
    graph.insert_edge(c, d, "cd");

    let components = bfs_components(&graph);
    assert_eq!(components, vec![vec![a, b], vec![c, d], vec![e]]);
}

#[test]
fn test_components_empty_graph() {
    let graph = LabelGraph::new();
    assert!(bfs_components(&graph).is_empty());
}

#[test]
fn test_components_single_component_matches_bfs() {
    let (graph, stations) = rail_network();
    let [waterloo, ..] = stations;

    let components = bfs_components(&graph);
    assert_eq!(components.len(), 1);
    assert_eq!(components[0], bfs_from(&graph, waterloo).unwrap());
}

// ==================== Reachability & Connectivity Tests ====================

#[test]
fn test_all_reachable_excludes_start() {
    let (graph, stations) = rail_network();
    let [waterloo, ..] = stations;

    let reachable = all_reachable(&graph, waterloo).unwrap();
    assert!(!reachable.contains(&waterloo));
    assert_eq!(reachable.len(), 7);
}

#[test]
fn test_all_connected_trivial_graphs() {
    let mut graph = LabelGraph::new();
    assert!(all_connected(&graph));

    graph.insert_vertex("alone");
    assert!(all_connected(&graph));

    graph.insert_vertex("other");
    assert!(!all_connected(&graph));
}

#[test]
fn test_all_connected_with_foreign_endpoint() {
    let mut graph = LabelGraph::new();
    let v = graph.insert_vertex("v");
    graph.insert_vertex("w");
    graph.insert_edge(v, VertexId(999), "dangling");

    // The dangling edge reaches a non-member handle, not w
    assert!(!all_connected(&graph));
}

#[test]
fn test_rail_network_scenario() {
    init_logging();
    let (mut graph, stations) = rail_network();
    let [waterloo, paddington, _, st_pancras, _, charing_cross, victoria, _] = stations;

    assert!(all_connected(&graph));
    assert!(!graph.are_adjacent(st_pancras, charing_cross));
    assert!(graph.are_adjacent(paddington, victoria));

    // Charing Cross is a leaf; removing it keeps the rest connected
    assert_eq!(graph.remove_vertex(charing_cross).unwrap(), "Charing Cross");
    assert!(all_connected(&graph));

    let reachable = all_reachable(&graph, waterloo).unwrap();
    let mut reached = names(&graph, &reachable);
    reached.sort();
    assert_eq!(
        reached,
        vec![
            "Euston",
            "Kings Cross",
            "London Bridge",
            "Paddington",
            "St Pancras",
            "Victoria",
        ]
    );
}

#[test]
fn test_connectivity_restored_by_new_edge() {
    let (mut graph, stations) = rail_network();
    let [waterloo, ..] = stations;

    let brighton = graph.insert_vertex("Brighton");
    assert!(!all_connected(&graph));

    graph.insert_edge(waterloo, brighton, "AJ");
    assert!(all_connected(&graph));
}

// ==================== Randomized Consistency Tests ====================

#[test]
fn test_adjacency_incidence_consistency_on_random_graphs() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..10 {
        let mut graph = LabelGraph::new();
        let ids: Vec<VertexId> = (0..30).map(|i| graph.insert_vertex(format!("n{}", i))).collect();
        for j in 0..60 {
            let v = ids[rng.gen_range(0..ids.len())];
            let w = ids[rng.gen_range(0..ids.len())];
            graph.insert_edge(v, w, format!("e{}", j));
        }

        // areAdjacent(v, w) iff some incident edge of v has opposite w
        for &v in &ids {
            let incident = graph.incident_edges(v);
            for &w in &ids {
                let via_incidence = incident
                    .iter()
                    .any(|&e| graph.opposite(e, v).unwrap() == w);
                assert_eq!(graph.are_adjacent(v, w), via_incidence);
            }
        }

        // Opposite is involutive on every edge
        for edge in graph.edges() {
            let [a, _] = edge.endpoints();
            let other = graph.opposite(edge.id(), a).unwrap();
            assert_eq!(graph.opposite(edge.id(), other).unwrap(), a);
        }

        // Reachability never reports the start vertex
        for &v in &ids {
            assert!(!all_reachable(&graph, v).unwrap().contains(&v));
        }
    }
}
