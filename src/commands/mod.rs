//! Command implementations for graphwalk

pub mod dispatch;
pub mod hops;
pub mod path;
pub mod shortest;
pub mod traverse;

use std::path::Path;
use std::time::Instant;

use graphwalk_core::document::GraphDocument;
use graphwalk_core::error::Result;
use graphwalk_core::graph::{Graph, WeightedGraph};
use graphwalk_core::trace_time;

/// Load an unweighted graph document
pub fn load_graph(path: &Path) -> Result<Graph<String>> {
    let start = Instant::now();
    let graph = GraphDocument::load(path)?.to_graph()?;
    trace_time!(start, "load_graph", vertices = graph.vertex_count());
    Ok(graph)
}

/// Load a weighted graph document
pub fn load_weighted_graph(path: &Path) -> Result<WeightedGraph<String>> {
    let start = Instant::now();
    let graph = GraphDocument::load(path)?.to_weighted_graph()?;
    trace_time!(
        start,
        "load_weighted_graph",
        vertices = graph.vertex_count(),
        edges = graph.edge_count()
    );
    Ok(graph)
}
