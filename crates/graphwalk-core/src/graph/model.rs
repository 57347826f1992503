//! In-memory graph representations
//!
//! [`Graph`] is an adjacency list used by BFS and DFS. [`WeightedGraph`] is an
//! edge list with per-vertex outgoing indexes used by Dijkstra and
//! Bellman-Ford. Both are append-only and remember vertex insertion order.

use crate::graph::types::Vertex;
use serde::Serialize;
use std::collections::HashMap;

/// Unweighted graph: vertex → neighbors in declaration order
#[derive(Debug, Clone)]
pub struct Graph<V> {
    order: Vec<V>,
    adjacency: HashMap<V, Vec<V>>,
}

impl<V: Vertex> Default for Graph<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Vertex> Graph<V> {
    pub fn new() -> Self {
        Self {
            order: Vec::new(),
            adjacency: HashMap::new(),
        }
    }

    /// Add `v` with no neighbors. Returns false if it was already present.
    pub fn add_vertex(&mut self, v: V) -> bool {
        if self.adjacency.contains_key(&v) {
            return false;
        }
        self.order.push(v.clone());
        self.adjacency.insert(v, Vec::new());
        true
    }

    /// Add `u -> v` (and `v -> u` when bidirectional), skipping duplicates
    pub fn add_edge(&mut self, u: V, v: V, bidirectional: bool) {
        self.add_vertex(u.clone());
        self.add_vertex(v.clone());
        Self::push_unique(&mut self.adjacency, &u, &v);
        if bidirectional {
            Self::push_unique(&mut self.adjacency, &v, &u);
        }
    }

    fn push_unique(adjacency: &mut HashMap<V, Vec<V>>, from: &V, to: &V) {
        if let Some(neighbors) = adjacency.get_mut(from) {
            if !neighbors.contains(to) {
                neighbors.push(to.clone());
            }
        }
    }

    pub fn contains(&self, v: &V) -> bool {
        self.adjacency.contains_key(v)
    }

    /// Neighbors of `v` in declaration order; empty for unknown vertices
    pub fn neighbors(&self, v: &V) -> &[V] {
        self.adjacency.get(v).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Vertices in insertion order
    pub fn vertices(&self) -> impl Iterator<Item = &V> {
        self.order.iter()
    }

    pub fn vertex_count(&self) -> usize {
        self.order.len()
    }

    /// Number of adjacency entries (an undirected edge counts twice)
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }
}

/// Directed weighted edge
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Edge<V> {
    pub source: V,
    pub target: V,
    pub weight: i64,
}

/// Weighted graph: vertex universe plus an ordered edge list
#[derive(Debug, Clone)]
pub struct WeightedGraph<V> {
    order: Vec<V>,
    outgoing: HashMap<V, Vec<usize>>,
    edges: Vec<Edge<V>>,
}

impl<V: Vertex> Default for WeightedGraph<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Vertex> WeightedGraph<V> {
    pub fn new() -> Self {
        Self {
            order: Vec::new(),
            outgoing: HashMap::new(),
            edges: Vec::new(),
        }
    }

    /// Add an isolated vertex. Returns false if it was already present.
    pub fn add_vertex(&mut self, v: V) -> bool {
        if self.outgoing.contains_key(&v) {
            return false;
        }
        self.order.push(v.clone());
        self.outgoing.insert(v, Vec::new());
        true
    }

    /// Record the directed edge `u -> v` with weight `w`.
    /// Parallel edges are kept and relaxed independently.
    pub fn add_weighted_edge(&mut self, u: V, v: V, w: i64) {
        self.add_vertex(u.clone());
        self.add_vertex(v.clone());
        let index = self.edges.len();
        if let Some(out) = self.outgoing.get_mut(&u) {
            out.push(index);
        }
        self.edges.push(Edge {
            source: u,
            target: v,
            weight: w,
        });
    }

    pub fn contains(&self, v: &V) -> bool {
        self.outgoing.contains_key(v)
    }

    /// All edges in declaration order
    pub fn edges(&self) -> &[Edge<V>] {
        &self.edges
    }

    /// Edges leaving `v` in declaration order
    pub fn outgoing(&self, v: &V) -> impl Iterator<Item = &Edge<V>> {
        self.outgoing
            .get(v)
            .into_iter()
            .flatten()
            .map(move |&i| &self.edges[i])
    }

    /// Vertices in insertion order
    pub fn vertices(&self) -> impl Iterator<Item = &V> {
        self.order.iter()
    }

    pub fn vertex_count(&self) -> usize {
        self.order.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}
