//! Shortest command: Dijkstra or Bellman-Ford
use std::path::Path;

use graphwalk_core::error::{Result, WalkError};
use graphwalk_core::format::OutputFormat;
use graphwalk_core::graph::{shortest_paths, Algorithm, Route};

/// Execute the shortest command
pub fn execute(
    format: OutputFormat,
    graph_path: &Path,
    source: &str,
    target: Option<&str>,
    algorithm: Algorithm,
) -> Result<()> {
    let graph = super::load_weighted_graph(graph_path)?;
    let source = source.to_string();
    let target = target.map(str::to_string);
    if let Some(target) = &target {
        if !graph.contains(target) {
            return Err(WalkError::unknown_vertex(target));
        }
    }

    let result = shortest_paths(&graph, &source, algorithm)?;

    if let Some(target) = target {
        let route = result.route_to(&target);

        match format {
            OutputFormat::Human => match &route {
                Some(route) => {
                    println!("{}", route.path);
                    println!("cost: {}", route.cost);
                }
                None => println!("no path from {} to {}", source, target),
            },
            OutputFormat::Json => {
                let output = serde_json::json!({
                    "source": source,
                    "target": target,
                    "algorithm": algorithm.to_string(),
                    "found": route.is_some(),
                    "cost": route.as_ref().map(|r| r.cost),
                    "path": route.as_ref().map(|r| r.path.vertices.clone()).unwrap_or_default(),
                });
                println!("{}", serde_json::to_string_pretty(&output)?);
            }
        }
        return Ok(());
    }

    let routes: Vec<(&String, Option<Route<String>>)> = graph
        .vertices()
        .map(|vertex| (vertex, result.route_to(vertex)))
        .collect();

    match format {
        OutputFormat::Human => {
            for (vertex, route) in &routes {
                match route {
                    Some(route) => println!("{}: {} ({})", vertex, route.cost, route.path),
                    None => println!("{}: no path", vertex),
                }
            }
        }
        OutputFormat::Json => {
            let entries: Vec<serde_json::Value> = routes
                .iter()
                .map(|(vertex, route)| {
                    serde_json::json!({
                        "vertex": vertex,
                        "cost": route.as_ref().map(|r| r.cost),
                        "path": route.as_ref().map(|r| r.path.vertices.clone()),
                    })
                })
                .collect();
            let output = serde_json::json!({
                "source": source,
                "algorithm": algorithm.to_string(),
                "routes": entries,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
