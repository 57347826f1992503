use crate::error::WalkError;
use crate::graph::path::reconstruct_path;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

/// Identity of a graph vertex: any hashable label that can be printed
pub trait Vertex: Clone + Eq + Hash + fmt::Debug + fmt::Display {}

impl<T> Vertex for T where T: Clone + Eq + Hash + fmt::Debug + fmt::Display {}

/// Best-known distance from a search source.
///
/// `Finite` orders before `Unreachable`, so the derived ordering doubles as
/// the "infinite" sentinel comparison used during relaxation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Distance {
    Finite(i64),
    #[default]
    Unreachable,
}

impl Distance {
    pub const ZERO: Distance = Distance::Finite(0);

    pub fn value(&self) -> Option<i64> {
        match self {
            Distance::Finite(d) => Some(*d),
            Distance::Unreachable => None,
        }
    }

    pub fn is_reachable(&self) -> bool {
        matches!(self, Distance::Finite(_))
    }

    /// Extend this distance by one edge; unreachable stays unreachable.
    /// `None` when the sum leaves the `i64` range.
    pub fn checked_extend(self, weight: i64) -> Option<Distance> {
        match self {
            Distance::Finite(d) => d.checked_add(weight).map(Distance::Finite),
            Distance::Unreachable => Some(Distance::Unreachable),
        }
    }
}

impl From<i64> for Distance {
    fn from(d: i64) -> Self {
        Distance::Finite(d)
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Finite(d) => write!(f, "{}", d),
            Distance::Unreachable => write!(f, "inf"),
        }
    }
}

impl Serialize for Distance {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Distance::Finite(d) => serializer.serialize_i64(*d),
            Distance::Unreachable => serializer.serialize_none(),
        }
    }
}

/// Expansion order for unweighted traversal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// FIFO frontier, layer by layer
    #[default]
    Bfs,
    /// LIFO frontier, neighbors pushed in reverse and marked on pop
    Dfs,
    /// Frame stack mirroring recursive calls, marked on expansion
    DfsRecursive,
}

impl std::str::FromStr for Strategy {
    type Err = WalkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bfs" => Ok(Strategy::Bfs),
            "dfs" => Ok(Strategy::Dfs),
            "dfs-recursive" => Ok(Strategy::DfsRecursive),
            other => Err(WalkError::unknown_value(
                "strategy",
                other,
                "bfs, dfs, dfs-recursive",
            )),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Bfs => write!(f, "bfs"),
            Strategy::Dfs => write!(f, "dfs"),
            Strategy::DfsRecursive => write!(f, "dfs-recursive"),
        }
    }
}

/// Single-source shortest-path algorithm for weighted graphs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    #[default]
    Dijkstra,
    BellmanFord,
}

impl std::str::FromStr for Algorithm {
    type Err = WalkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dijkstra" => Ok(Algorithm::Dijkstra),
            "bellman-ford" | "bellman_ford" => Ok(Algorithm::BellmanFord),
            other => Err(WalkError::unknown_value(
                "algorithm",
                other,
                "dijkstra, bellman-ford",
            )),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Dijkstra => write!(f, "dijkstra"),
            Algorithm::BellmanFord => write!(f, "bellman-ford"),
        }
    }
}

/// Ordered vertex sequence from a source to a target
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Path<V> {
    pub vertices: Vec<V>,
    /// Number of edges (`vertices.len() - 1`)
    pub length: usize,
}

impl<V> Path<V> {
    pub fn new(vertices: Vec<V>) -> Self {
        let length = vertices.len().saturating_sub(1);
        Self { vertices, length }
    }

    /// Path consisting of a lone vertex (source == target)
    pub fn single(vertex: V) -> Self {
        Self {
            vertices: vec![vertex],
            length: 0,
        }
    }
}

impl<V: fmt::Display> fmt::Display for Path<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.vertices.iter().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{}", v)?;
        }
        Ok(())
    }
}

/// A path together with its total weight
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route<V> {
    pub path: Path<V>,
    pub cost: i64,
}

/// Counters collected while a search runs, logged on completion
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Vertices taken off the frontier and expanded
    pub expanded: usize,
    /// Neighbors pushed onto the frontier
    pub discovered: usize,
    /// Successful distance improvements
    pub relaxations: usize,
    /// Frontier entries discarded because their vertex was already done
    pub stale: usize,
    /// Bellman-Ford relaxation rounds performed
    pub rounds: usize,
}

/// Distances and predecessors from one search source
#[derive(Debug, Clone)]
pub struct ShortestPaths<V: Vertex> {
    pub source: V,
    pub distances: HashMap<V, Distance>,
    pub predecessors: HashMap<V, Option<V>>,
}

impl<V: Vertex> ShortestPaths<V> {
    /// Start a result where every listed vertex is unreached except `source`
    pub(crate) fn unreached<'a, I>(source: &V, vertices: I) -> Self
    where
        I: IntoIterator<Item = &'a V>,
        V: 'a,
    {
        let mut distances = HashMap::new();
        let mut predecessors = HashMap::new();
        for v in vertices {
            distances.insert(v.clone(), Distance::Unreachable);
            predecessors.insert(v.clone(), None);
        }
        distances.insert(source.clone(), Distance::ZERO);
        Self {
            source: source.clone(),
            distances,
            predecessors,
        }
    }

    pub fn distance(&self, vertex: &V) -> Distance {
        self.distances.get(vertex).copied().unwrap_or_default()
    }

    pub fn predecessor(&self, vertex: &V) -> Option<&V> {
        self.predecessors.get(vertex).and_then(Option::as_ref)
    }

    /// Reconstruct the best-known path from the source to `target`
    pub fn path_to(&self, target: &V) -> Option<Path<V>> {
        if !self.distance(target).is_reachable() {
            return None;
        }
        reconstruct_path(&self.predecessors, &self.source, target)
    }

    /// Path plus total cost to `target`, or `None` when unreachable
    pub fn route_to(&self, target: &V) -> Option<Route<V>> {
        let cost = self.distance(target).value()?;
        let path = self.path_to(target)?;
        Some(Route { path, cost })
    }
}
