//! Single-source shortest-path engines for weighted graphs
//!
//! - `dijkstra`: non-negative weights, settle-once with stale-entry discard
//! - `bellman_ford`: arbitrary weights, round-based relaxation and
//!   negative-cycle detection

pub mod bellman_ford;
pub mod dijkstra;

pub use bellman_ford::bellman_ford;
pub use dijkstra::dijkstra;

use crate::error::Result;
use crate::graph::model::WeightedGraph;
use crate::graph::types::{Algorithm, ShortestPaths, Vertex};

/// Run the selected algorithm from `source`
pub fn shortest_paths<V: Vertex>(
    graph: &WeightedGraph<V>,
    source: &V,
    algorithm: Algorithm,
) -> Result<ShortestPaths<V>> {
    match algorithm {
        Algorithm::Dijkstra => dijkstra(graph, source),
        Algorithm::BellmanFord => bellman_ford(graph, source),
    }
}
