use crate::ensure_vertex;
use crate::error::{Result, WalkError};
use crate::graph::frontier::PriorityFrontier;
use crate::graph::model::WeightedGraph;
use crate::graph::types::{Distance, SearchStats, ShortestPaths, Vertex};
use crate::log_search_stats;
use std::collections::HashSet;

/// Minimum total weight from `source` to every vertex.
///
/// Entries are never decreased in place: an improved distance pushes a new
/// entry and the outdated one is dropped when popped for an already
/// finalized vertex. Weights must be non-negative; this is not checked and
/// a negative weight silently produces wrong distances. A tentative distance
/// outside the `i64` range fails with `DistanceOverflow`.
#[tracing::instrument(skip(graph), fields(source = %source, vertices = graph.vertex_count(), edges = graph.edge_count()))]
pub fn dijkstra<V: Vertex>(graph: &WeightedGraph<V>, source: &V) -> Result<ShortestPaths<V>> {
    ensure_vertex!(graph, source);

    let mut result = ShortestPaths::unreached(source, graph.vertices());
    let mut finalized: HashSet<V> = HashSet::new();
    let mut frontier = PriorityFrontier::default();
    let mut stats = SearchStats::default();

    frontier.push(0, source.clone());

    while let Some((settled, current)) = frontier.pop() {
        if !finalized.insert(current.clone()) {
            stats.stale += 1;
            tracing::trace!(vertex = %current, distance = settled, "discard_stale");
            continue;
        }

        stats.expanded += 1;
        tracing::trace!(vertex = %current, distance = settled, "finalize");

        for edge in graph.outgoing(&current) {
            if finalized.contains(&edge.target) {
                continue;
            }

            let candidate = settled
                .checked_add(edge.weight)
                .ok_or_else(|| WalkError::distance_overflow(&edge.target))?;
            if Distance::Finite(candidate) < result.distance(&edge.target) {
                result
                    .distances
                    .insert(edge.target.clone(), Distance::Finite(candidate));
                result
                    .predecessors
                    .insert(edge.target.clone(), Some(current.clone()));
                frontier.push(candidate, edge.target.clone());
                stats.relaxations += 1;
                stats.discovered += 1;
                tracing::trace!(vertex = %edge.target, via = %current, distance = candidate, "relax");
            }
        }
    }

    log_search_stats!(stats, "dijkstra");
    Ok(result)
}
