use crate::ensure_vertex;
use crate::error::{Result, WalkError};
use crate::graph::model::{Edge, WeightedGraph};
use crate::graph::types::{Distance, SearchStats, ShortestPaths, Vertex};
use crate::log_search_stats;
use std::collections::HashMap;

/// Tentative distances of reached vertices.
///
/// Every value is the weight of a walk built from at most `|V| * |E| + |E|`
/// relaxations, so `i128` holds it exactly for any in-memory graph.
type Tentative<V> = HashMap<V, i128>;

/// Distance `edge` would give its target, if that beats the current best.
/// Edges leaving unreached vertices never relax.
fn improvement<V: Vertex>(best: &Tentative<V>, edge: &Edge<V>) -> Option<i128> {
    let from = best.get(&edge.source)?;
    let candidate = from + i128::from(edge.weight);
    match best.get(&edge.target) {
        Some(current) if *current <= candidate => None,
        _ => Some(candidate),
    }
}

/// Minimum total weight from `source` under arbitrary edge weights.
///
/// Relaxes every edge in declaration order for at most `|V| - 1` rounds,
/// stopping after the first round with no update. A final pass that still
/// finds a relaxable edge means a negative cycle is reachable from `source`.
/// Sums are exact during relaxation, so extreme weights cannot hide a cycle;
/// a final distance outside the `i64` range fails with `DistanceOverflow`.
#[tracing::instrument(skip(graph), fields(source = %source, vertices = graph.vertex_count(), edges = graph.edge_count()))]
pub fn bellman_ford<V: Vertex>(graph: &WeightedGraph<V>, source: &V) -> Result<ShortestPaths<V>> {
    ensure_vertex!(graph, source);

    let mut result = ShortestPaths::unreached(source, graph.vertices());
    let mut best: Tentative<V> = HashMap::from([(source.clone(), 0)]);
    let mut stats = SearchStats::default();
    let rounds = graph.vertex_count().saturating_sub(1);

    for round in 1..=rounds {
        stats.rounds = round;
        let mut updated = false;

        for edge in graph.edges() {
            if let Some(candidate) = improvement(&best, edge) {
                tracing::trace!(
                    round,
                    from = %edge.source,
                    to = %edge.target,
                    weight = edge.weight,
                    distance = %candidate,
                    "relax"
                );
                best.insert(edge.target.clone(), candidate);
                result
                    .predecessors
                    .insert(edge.target.clone(), Some(edge.source.clone()));
                stats.relaxations += 1;
                updated = true;
            }
        }

        if !updated {
            tracing::trace!(round, "stable");
            break;
        }
    }

    if let Some(edge) = graph
        .edges()
        .iter()
        .find(|edge| improvement(&best, edge).is_some())
    {
        tracing::debug!(from = %edge.source, to = %edge.target, "negative_cycle");
        return Err(WalkError::negative_cycle(source));
    }

    for (vertex, distance) in best {
        let distance =
            i64::try_from(distance).map_err(|_| WalkError::distance_overflow(&vertex))?;
        result.distances.insert(vertex, Distance::Finite(distance));
    }

    log_search_stats!(stats, "bellman_ford");
    Ok(result)
}
