//! Graph traversal and shortest-path operations
//!
//! - `model`: unweighted adjacency lists and weighted edge lists
//! - `frontier`: FIFO, LIFO and priority expansion orders
//! - `traversal`: BFS/DFS visitation, hop distances and path queries
//! - `algos`: Dijkstra and Bellman-Ford
//! - `path`: predecessor-map path reconstruction

pub mod algos;
pub mod frontier;
pub mod model;
pub mod path;
pub mod traversal;
pub mod types;

pub use algos::{bellman_ford, dijkstra, shortest_paths};
pub use model::{Edge, Graph, WeightedGraph};
pub use path::reconstruct_path;
pub use traversal::{path_between, shortest_path_unweighted, traverse};
pub use types::{Algorithm, Distance, Path, Route, SearchStats, ShortestPaths, Strategy, Vertex};
