//! sssp_trace - Single-Source Shortest Paths with a Replayable Trace
//!
//! This library computes single-source shortest paths over weighted directed
//! graphs with two engines: Bellman-Ford (edge-relaxation rounds, tolerant of
//! negative weights, with negative-cycle detection) and Dijkstra (priority
//! frontier, non-negative weights only).
//!
//! Both engines stream a typed event for every intermediate step to a
//! [`TraceSink`](trace::TraceSink), so a caller can replay or render the
//! computation step by step without the engines knowing anything about
//! presentation.

pub mod algorithm;
pub mod data_structures;
pub mod graph;
pub mod trace;

pub use algorithm::{
    bellman_ford::BellmanFord,
    dijkstra::Dijkstra,
    path::{reconstruct, reconstruct_all, Path, Target},
    ShortestPathAlgorithm, ShortestPathResult,
};
/// Re-export main types for convenient use
pub use graph::edge_list::{Edge, EdgeListGraph};
pub use trace::{NullSink, RecordingSink, TraceEvent, TraceSink};

use num_traits::PrimInt;
use std::fmt::Debug;

/// Error types for the library
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("source vertex {0} is not in the graph")]
    InvalidSource(usize),

    #[error("edge {from} -> {to} has a negative weight; Dijkstra requires non-negative weights")]
    NegativeWeightRejected { from: usize, to: usize },
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Runs Bellman-Ford from `source`, streaming trace events to `sink`.
pub fn run_bellman_ford<W>(
    graph: &EdgeListGraph<W>,
    source: usize,
    sink: &mut dyn TraceSink<W>,
) -> Result<ShortestPathResult<W>>
where
    W: PrimInt + Debug,
{
    BellmanFord::new().run(graph, source, sink)
}

/// Runs Dijkstra from `source`, streaming trace events to `sink`.
///
/// Fails with [`Error::NegativeWeightRejected`] before emitting any event if
/// the graph contains a negative-weight edge.
pub fn run_dijkstra<W>(
    graph: &EdgeListGraph<W>,
    source: usize,
    sink: &mut dyn TraceSink<W>,
) -> Result<ShortestPathResult<W>>
where
    W: PrimInt + Debug,
{
    Dijkstra::new().run(graph, source, sink)
}
