//! Path reconstruction from predecessor maps

use crate::graph::types::{Path, Vertex};
use std::collections::HashMap;

/// Walk predecessor links back from `target` to the root of its chain.
///
/// Returns the path (source first) only if that root is `source`; a chain
/// rooted elsewhere, an unreached target or a cyclic map yields `None`.
pub fn reconstruct_path<V: Vertex>(
    predecessors: &HashMap<V, Option<V>>,
    source: &V,
    target: &V,
) -> Option<Path<V>> {
    if source == target {
        return Some(Path::single(source.clone()));
    }

    let mut vertices = vec![target.clone()];
    let mut current = target;

    while let Some(Some(previous)) = predecessors.get(current) {
        // A chain longer than the map can only be a cycle
        if vertices.len() > predecessors.len() {
            return None;
        }
        vertices.push(previous.clone());
        current = previous;
    }

    if current != source {
        return None;
    }

    vertices.reverse();
    Some(Path::new(vertices))
}
