use crate::graph::edge_list::EdgeListGraph;
use crate::trace::TraceSink;
use crate::Result;
use num_traits::PrimInt;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::Debug;

/// Result of a shortest path engine run.
///
/// Maps are created fresh per run and never mutated after being returned.
/// An absent key in `distances` means the vertex is unreachable (infinite
/// distance); an absent key in `predecessors` means the vertex has no
/// predecessor. The source always has distance zero and no predecessor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortestPathResult<W> {
    /// Source vertex the run started from
    pub source: usize,

    /// Best known distance from the source per reachable vertex
    pub distances: BTreeMap<usize, W>,

    /// Predecessor in the shortest path tree per reached vertex
    pub predecessors: BTreeMap<usize, usize>,

    /// Set only by Bellman-Ford. When true the distances are not shortest
    /// path values and must not be fed to path reconstruction.
    pub has_negative_cycle: bool,
}

/// Trait for shortest path engines that stream a step trace.
pub trait ShortestPathAlgorithm<W>
where
    W: PrimInt + Debug,
{
    /// Get the name of the engine
    fn name(&self) -> &'static str;

    /// Computes shortest paths from `source` to every reachable vertex,
    /// emitting one event per intermediate step to `sink` in algorithm
    /// order.
    ///
    /// Precondition failures are returned before any event is emitted;
    /// algorithmic outcomes (negative cycle, unreachable vertices) travel in
    /// the result, never as errors.
    fn run(
        &self,
        graph: &EdgeListGraph<W>,
        source: usize,
        sink: &mut dyn TraceSink<W>,
    ) -> Result<ShortestPathResult<W>>;
}
