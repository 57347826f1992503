use crate::ensure_vertex;
use crate::error::{Result, WalkError};
use crate::graph::frontier::{FifoFrontier, Frontier, LifoFrontier};
use crate::graph::model::Graph;
use crate::graph::path::reconstruct_path;
use crate::graph::types::{Distance, Path, SearchStats, ShortestPaths, Strategy, Vertex};
use crate::log_search_stats;
use std::collections::{HashMap, HashSet};

/// Outcome of one exploration from a start vertex
#[derive(Debug)]
pub(crate) struct Exploration<V> {
    /// Vertices in the order they were processed
    pub order: Vec<V>,
    /// Predecessor of every processed vertex (`None` for the start)
    pub predecessors: HashMap<V, Option<V>>,
    /// Whether the exploration stopped on its target
    pub reached_target: bool,
    pub stats: SearchStats,
}

/// Visit-once loop driven by a frontier of `(vertex, predecessor)` entries.
///
/// Frontiers that mark on push (FIFO) claim a vertex when it is discovered;
/// the others (LIFO) claim it when it is popped and drop later duplicates.
/// Stops right after processing `target` when one is given.
fn explore<V, F>(graph: &Graph<V>, start: &V, mut frontier: F, target: Option<&V>) -> Exploration<V>
where
    V: Vertex,
    F: Frontier<(V, Option<V>)>,
{
    let mut visited: HashSet<V> = HashSet::new();
    let mut predecessors: HashMap<V, Option<V>> = HashMap::new();
    let mut order = Vec::new();
    let mut stats = SearchStats::default();
    let mut reached_target = false;

    if F::MARKS_ON_PUSH {
        visited.insert(start.clone());
        predecessors.insert(start.clone(), None);
    }
    frontier.push((start.clone(), None));

    while let Some((current, parent)) = frontier.pop() {
        if !F::MARKS_ON_PUSH {
            if !visited.insert(current.clone()) {
                stats.stale += 1;
                tracing::trace!(vertex = %current, "skip_visited");
                continue;
            }
            predecessors.insert(current.clone(), parent);
        }

        stats.expanded += 1;
        tracing::trace!(vertex = %current, pending = frontier.len(), "visit");
        order.push(current.clone());

        if target == Some(&current) {
            reached_target = true;
            break;
        }

        let fresh: Vec<V> = graph
            .neighbors(&current)
            .iter()
            .filter(|n| !visited.contains(*n))
            .cloned()
            .collect();

        if F::MARKS_ON_PUSH {
            for n in &fresh {
                visited.insert(n.clone());
                predecessors.insert(n.clone(), Some(current.clone()));
                tracing::trace!(vertex = %n, via = %current, "discover");
            }
        }

        stats.discovered += fresh.len();
        frontier.push_in_order(fresh.into_iter().map(|n| (n, Some(current.clone()))));
    }

    Exploration {
        order,
        predecessors,
        reached_target,
        stats,
    }
}

/// Depth-first exploration in the shape of the recursive algorithm.
///
/// Each frame is a vertex plus a cursor into its neighbor list, standing in
/// for one call frame, so deep graphs never grow the native stack. Vertices
/// are marked when their frame is opened.
fn explore_frames<V: Vertex>(graph: &Graph<V>, start: &V, target: Option<&V>) -> Exploration<V> {
    let mut visited: HashSet<V> = HashSet::new();
    let mut predecessors: HashMap<V, Option<V>> = HashMap::new();
    let mut order = Vec::new();
    let mut stats = SearchStats::default();

    visited.insert(start.clone());
    predecessors.insert(start.clone(), None);
    order.push(start.clone());
    stats.expanded += 1;
    tracing::trace!(vertex = %start, depth = 0, "visit");

    if target == Some(start) {
        return Exploration {
            order,
            predecessors,
            reached_target: true,
            stats,
        };
    }

    let mut frames: Vec<(V, usize)> = vec![(start.clone(), 0)];
    let mut reached_target = false;

    while let Some((vertex, cursor)) = frames.last_mut() {
        let Some(next) = graph.neighbors(vertex).get(*cursor) else {
            frames.pop();
            continue;
        };
        *cursor += 1;

        if !visited.insert(next.clone()) {
            continue;
        }

        let parent = vertex.clone();
        stats.discovered += 1;
        stats.expanded += 1;
        predecessors.insert(next.clone(), Some(parent));
        order.push(next.clone());
        tracing::trace!(vertex = %next, depth = frames.len(), "visit");

        if target == Some(next) {
            reached_target = true;
            break;
        }
        frames.push((next.clone(), 0));
    }

    Exploration {
        order,
        predecessors,
        reached_target,
        stats,
    }
}

fn run<V: Vertex>(
    graph: &Graph<V>,
    start: &V,
    strategy: Strategy,
    target: Option<&V>,
) -> Exploration<V> {
    let exploration = match strategy {
        Strategy::Bfs => explore(graph, start, FifoFrontier::default(), target),
        Strategy::Dfs => explore(graph, start, LifoFrontier::default(), target),
        Strategy::DfsRecursive => explore_frames(graph, start, target),
    };
    log_search_stats!(exploration.stats, "traverse");
    exploration
}

/// Visit every vertex reachable from `start` exactly once, returning the
/// visitation order.
#[tracing::instrument(skip(graph), fields(start = %start, strategy = %strategy, vertices = graph.vertex_count()))]
pub fn traverse<V: Vertex>(graph: &Graph<V>, start: &V, strategy: Strategy) -> Result<Vec<V>> {
    ensure_vertex!(graph, start);
    Ok(run(graph, start, strategy, None).order)
}

/// Edge-count distances and BFS predecessors from `start`.
/// Vertices not reachable keep [`Distance::Unreachable`].
#[tracing::instrument(skip(graph), fields(start = %start, vertices = graph.vertex_count()))]
pub fn shortest_path_unweighted<V: Vertex>(graph: &Graph<V>, start: &V) -> Result<ShortestPaths<V>> {
    ensure_vertex!(graph, start);

    let exploration = run(graph, start, Strategy::Bfs, None);
    let mut result = ShortestPaths::unreached(start, graph.vertices());

    // BFS order processes a predecessor before any vertex it discovered
    for vertex in &exploration.order {
        let parent = exploration.predecessors.get(vertex).cloned().flatten();
        let hops = match &parent {
            Some(p) => result
                .distance(p)
                .checked_extend(1)
                .ok_or_else(|| WalkError::distance_overflow(vertex))?,
            None => Distance::ZERO,
        };
        result.distances.insert(vertex.clone(), hops);
        result.predecessors.insert(vertex.clone(), parent);
    }

    Ok(result)
}

/// Find a path from `origin` to `destination`, stopping as soon as the
/// destination is reached. `None` when it is unreachable.
#[tracing::instrument(skip(graph), fields(origin = %origin, destination = %destination, strategy = %strategy))]
pub fn path_between<V: Vertex>(
    graph: &Graph<V>,
    origin: &V,
    destination: &V,
    strategy: Strategy,
) -> Result<Option<Path<V>>> {
    ensure_vertex!(graph, origin);
    ensure_vertex!(graph, destination);

    if origin == destination {
        return Ok(Some(Path::single(origin.clone())));
    }

    let exploration = run(graph, origin, strategy, Some(destination));
    if !exploration.reached_target {
        tracing::debug!("no_path");
        return Ok(None);
    }

    Ok(reconstruct_path(
        &exploration.predecessors,
        origin,
        destination,
    ))
}
