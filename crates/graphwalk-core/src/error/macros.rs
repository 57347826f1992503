//! Error macros for graphwalk

/// Return `UnknownVertex` unless the graph contains the vertex
#[macro_export]
macro_rules! ensure_vertex {
    ($graph:expr, $vertex:expr) => {
        if !$graph.contains($vertex) {
            return Err($crate::error::WalkError::unknown_vertex($vertex));
        }
    };
}
