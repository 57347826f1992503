//! Hops command: BFS edge-count distances
use std::path::Path;

use graphwalk_core::error::Result;
use graphwalk_core::format::OutputFormat;
use graphwalk_core::graph::shortest_path_unweighted;

/// Execute the hops command
pub fn execute(format: OutputFormat, graph_path: &Path, start: &str) -> Result<()> {
    let graph = super::load_graph(graph_path)?;
    let result = shortest_path_unweighted(&graph, &start.to_string())?;

    match format {
        OutputFormat::Human => {
            for vertex in graph.vertices() {
                match result.path_to(vertex) {
                    Some(path) => println!("{}: {} ({})", vertex, path.length, path),
                    None => println!("{}: unreachable", vertex),
                }
            }
        }
        OutputFormat::Json => {
            let vertices: Vec<serde_json::Value> = graph
                .vertices()
                .map(|vertex| {
                    serde_json::json!({
                        "vertex": vertex,
                        "distance": result.distance(vertex),
                        "predecessor": result.predecessor(vertex),
                        "path": result.path_to(vertex).map(|p| p.vertices),
                    })
                })
                .collect();
            let output = serde_json::json!({
                "start": start,
                "vertices": vertices,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
