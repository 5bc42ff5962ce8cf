//! CLI command implementations.
//!
//! The demo driver is an external caller: it exercises the graph strictly
//! through the public ADT operations and renders the results.

use crate::graph::{all_connected, all_reachable, bfs_from, GraphBuilder, LabelGraph};
use crate::types::{GraphError, GraphResult, VertexId};

/// Build the sample rail network from the original exercise: eight London
/// stations connected by seven named lines, plus Victoria–Euston.
fn build_rail_network() -> (LabelGraph, [VertexId; 8]) {
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

    let graph = builder.build();
    let stations = [
        waterloo,
        paddington,
        kings_cross,
        st_pancras,
        euston,
        charing_cross,
        victoria,
        london_bridge,
    ];
    (graph, stations)
}

fn names(graph: &LabelGraph, ids: &[VertexId]) -> Vec<String> {
    ids.iter()
        .map(|&v| match graph.get_vertex(v) {
            Some(vertex) => vertex.name().to_string(),
            None => v.to_string(),
        })
        .collect()
}

/// Walk through the ADT operations on the sample rail network.
pub fn cmd_demo(json: bool) -> GraphResult<()> {
    let (mut graph, stations) = build_rail_network();
    let [waterloo, paddington, _kings_cross, st_pancras, euston, charing_cross, victoria, _london_bridge] =
        stations;

    if !json {
        println!("{}", graph);
    }

    let brighton = graph.insert_vertex("Brighton");
    if !json {
        println!("Added Brighton to the network.");
    }

    let removed = graph.remove_vertex(charing_cross)?;
    if !json {
        println!("Removed station {}.", removed);
    }

    let adjacent = graph.are_adjacent(st_pancras, victoria);
    let adjacent2 = graph.are_adjacent(paddington, victoria);
    if !json {
        println!(
            "St Pancras and Victoria are{} adjacent.",
            if adjacent { "" } else { " not" }
        );
        println!(
            "Paddington and Victoria are{} adjacent.",
            if adjacent2 { "" } else { " not" }
        );
    }

    // Opposite endpoint on the first line out of Paddington
    if let Some(&edge) = graph.incident_edges(paddington).first() {
        let other = graph.opposite(edge, paddington)?;
        if !json {
            println!(
                "Opposite Paddington on its first line: {}.",
                names(&graph, &[other])[0]
            );
        }
    }

    let old = graph.rename_vertex(euston, "Falmer")?;
    if !json {
        println!("Renamed station {} to Falmer.", old);
    }

    let order = bfs_from(&graph, paddington)?;
    let connected_before = all_connected(&graph);
    if !json {
        println!("BFS from Paddington: {}.", names(&graph, &order).join(", "));
        println!(
            "The network is {}.",
            if connected_before {
                "connected"
            } else {
                "not connected"
            }
        );
    }

    // Brighton has no line yet; link it to Waterloo and re-check
    graph.insert_edge(waterloo, brighton, "AJ");
    let connected_after = all_connected(&graph);
    let reachable = all_reachable(&graph, waterloo)?;
    if json {
        let summary = serde_json::json!({
            "vertices": graph.vertices(),
            "edges": graph.edges(),
            "bfs_from_paddington": names(&graph, &order),
            "connected_before_brighton_link": connected_before,
            "connected_after_brighton_link": connected_after,
            "reachable_from_waterloo": names(&graph, &reachable),
        });
        let rendered = serde_json::to_string_pretty(&summary)
            .map_err(|e| GraphError::Serialization(e.to_string()))?;
        println!("{}", rendered);
    } else {
        println!("Linked Waterloo and Brighton.");
        println!(
            "The network is now {}.",
            if connected_after {
                "connected"
            } else {
                "not connected"
            }
        );
        println!("{}", graph);
    }

    Ok(())
}
