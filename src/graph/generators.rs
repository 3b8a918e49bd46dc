use crate::graph::edge_list::{Edge, EdgeListGraph};
use rand::prelude::*;

/// Generates a random directed graph with roughly `edge_count` edges over
/// `vertex_count` candidate vertices and weights in `1..=max_weight`.
///
/// Self-loops are skipped, so the edge count is an upper bound. Vertices that
/// end up with no incident edge do not appear in the derived vertex set.
pub fn random_graph<R: Rng>(
    vertex_count: usize,
    edge_count: usize,
    max_weight: i64,
    rng: &mut R,
) -> EdgeListGraph<i64> {
    assert!(vertex_count > 1, "need at least two vertices");
    assert!(max_weight > 0, "max_weight must be positive");

    let mut edges = Vec::with_capacity(edge_count);
    for _ in 0..edge_count {
        let from = rng.gen_range(0..vertex_count);
        let to = rng.gen_range(0..vertex_count);
        if from != to {
            edges.push(Edge::new(from, to, rng.gen_range(1..=max_weight)));
        }
    }
    EdgeListGraph::from_edges(edges)
}
