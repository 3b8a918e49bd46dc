use num_traits::PrimInt;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use std::fmt::Debug;

/// A directed weighted edge.
///
/// Weights are integers and may be negative; whether a negative weight is
/// acceptable is decided by the engine, not the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge<W> {
    pub from: usize,
    pub to: usize,
    pub weight: W,
}

impl<W> Edge<W> {
    pub fn new(from: usize, to: usize, weight: W) -> Self {
        Edge { from, to, weight }
    }
}

/// A directed graph held as an ordered edge list.
///
/// The vertex set is derived from the edges: the distinct endpoints, sorted
/// ascending. Parallel edges between the same ordered pair are kept and
/// processed independently; nothing is deduplicated. Engines rely on the edge
/// list keeping its input order, both globally and within each vertex's
/// outgoing adjacency.
#[derive(Debug, Clone)]
pub struct EdgeListGraph<W>
where
    W: PrimInt + Debug,
{
    /// Edges in input order
    edges: Vec<Edge<W>>,

    /// Distinct endpoints, ascending
    vertices: Vec<usize>,

    /// Outgoing edges per vertex, preserving input order
    outgoing: HashMap<usize, Vec<Edge<W>>>,
}

impl<W> EdgeListGraph<W>
where
    W: PrimInt + Debug,
{
    /// Builds a graph from an edge list, deriving the vertex set.
    pub fn from_edges(edges: Vec<Edge<W>>) -> Self {
        let mut endpoints = BTreeSet::new();
        let mut outgoing: HashMap<usize, Vec<Edge<W>>> = HashMap::new();
        for edge in &edges {
            endpoints.insert(edge.from);
            endpoints.insert(edge.to);
            outgoing.entry(edge.from).or_default().push(*edge);
        }
        EdgeListGraph {
            edges,
            vertices: endpoints.into_iter().collect(),
            outgoing,
        }
    }

    /// Returns the derived vertex set, sorted ascending.
    pub fn vertices(&self) -> &[usize] {
        &self.vertices
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns all edges in input order.
    pub fn edges(&self) -> &[Edge<W>] {
        &self.edges
    }

    /// Returns the outgoing edges of `vertex` in input order.
    pub fn outgoing(&self, vertex: usize) -> &[Edge<W>] {
        self.outgoing
            .get(&vertex)
            .map(|edges| edges.as_slice())
            .unwrap_or(&[])
    }

    pub fn contains_vertex(&self, vertex: usize) -> bool {
        self.vertices.binary_search(&vertex).is_ok()
    }

    /// Returns the first negative-weight edge in input order, if any.
    pub fn first_negative_edge(&self) -> Option<&Edge<W>> {
        self.edges.iter().find(|edge| edge.weight < W::zero())
    }
}
