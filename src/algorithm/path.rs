use serde::Serialize;
use std::collections::BTreeMap;

/// A reconstructed path, or the statement that none exists.
///
/// Recomputed on demand from a predecessor map; never cached across runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Path {
    /// Ordered vertex sequence from source to target, inclusive
    Route { vertices: Vec<usize> },
    /// No path exists under the given predecessor map
    Unreachable,
}

impl Path {
    pub fn is_reachable(&self) -> bool {
        matches!(self, Path::Route { .. })
    }

    pub fn vertices(&self) -> Option<&[usize]> {
        match self {
            Path::Route { vertices } => Some(vertices),
            Path::Unreachable => None,
        }
    }
}

/// Which path(s) a caller wants reconstructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Vertex(usize),
    All,
}

/// Result of a [`Target`] query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PathQuery {
    Single(Path),
    All(BTreeMap<usize, Path>),
}

/// Walks the predecessor map backward from `target` to `source`.
///
/// `target == source` is always the single-element path, whatever the map
/// holds. A target with no predecessor entry is unreachable. A walk that
/// exhausts without reaching the source, or that runs longer than the map
/// itself (an inconsistent, cyclic map), is also unreachable rather than a
/// panic or an endless loop.
pub fn reconstruct(
    predecessors: &BTreeMap<usize, usize>,
    source: usize,
    target: usize,
) -> Path {
    if target == source {
        return Path::Route {
            vertices: vec![source],
        };
    }
    if !predecessors.contains_key(&target) {
        return Path::Unreachable;
    }

    let mut vertices = vec![target];
    let mut current = target;
    while current != source {
        match predecessors.get(&current) {
            Some(&previous) => {
                vertices.push(previous);
                current = previous;
            }
            None => return Path::Unreachable,
        }
        if vertices.len() > predecessors.len() + 1 {
            return Path::Unreachable;
        }
    }
    vertices.reverse();
    Path::Route { vertices }
}

/// Reconstructs a path per vertex in `vertices`, skipping the source itself.
pub fn reconstruct_all(
    predecessors: &BTreeMap<usize, usize>,
    vertices: &[usize],
    source: usize,
) -> BTreeMap<usize, Path> {
    vertices
        .iter()
        .filter(|&&vertex| vertex != source)
        .map(|&vertex| (vertex, reconstruct(predecessors, source, vertex)))
        .collect()
}

/// Resolves a [`Target`] selector against a predecessor map.
pub fn query(
    predecessors: &BTreeMap<usize, usize>,
    vertices: &[usize],
    source: usize,
    target: Target,
) -> PathQuery {
    match target {
        Target::Vertex(vertex) => PathQuery::Single(reconstruct(predecessors, source, vertex)),
        Target::All => PathQuery::All(reconstruct_all(predecessors, vertices, source)),
    }
}
