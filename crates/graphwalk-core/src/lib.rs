//! graphwalk core library
//!
//! Graph models, frontier strategies and the traversal and shortest-path
//! engines behind the `graphwalk` CLI.

pub mod config;
pub mod document;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;

pub use error::{Result, WalkError};
pub use graph::{
    bellman_ford, dijkstra, path_between, reconstruct_path, shortest_path_unweighted, traverse,
    Algorithm, Distance, Edge, Graph, Path, Route, ShortestPaths, Strategy, Vertex, WeightedGraph,
};
