use num_traits::PrimInt;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Debug;

use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::Frontier;
use crate::graph::edge_list::EdgeListGraph;
use crate::trace::{TraceEvent, TraceSink};
use crate::{Error, Result};

/// Dijkstra's algorithm over a frontier that tolerates stale entries.
///
/// Every relaxation pushes a fresh (vertex, distance) entry instead of
/// decreasing a key in place; stale entries are skipped when popped. This
/// keeps the emitted trace identical to the reference behavior, so the number
/// of frontier insertions is allowed to exceed the vertex count.
#[derive(Debug, Default)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra engine instance
    pub fn new() -> Self {
        Dijkstra
    }
}

impl<W> ShortestPathAlgorithm<W> for Dijkstra
where
    W: PrimInt + Debug,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn run(
        &self,
        graph: &EdgeListGraph<W>,
        source: usize,
        sink: &mut dyn TraceSink<W>,
    ) -> Result<ShortestPathResult<W>> {
        // Checked before touching any state, and before the source check,
        // so a refusal never leaves a partial run behind.
        if let Some(edge) = graph.first_negative_edge() {
            return Err(Error::NegativeWeightRejected {
                from: edge.from,
                to: edge.to,
            });
        }
        if !graph.contains_vertex(source) {
            return Err(Error::InvalidSource(source));
        }

        let mut distances: BTreeMap<usize, W> = BTreeMap::new();
        let mut predecessors: BTreeMap<usize, usize> = BTreeMap::new();
        let mut visited: BTreeSet<usize> = BTreeSet::new();
        distances.insert(source, W::zero());

        let mut frontier = Frontier::new();
        frontier.push(source, W::zero());
        let mut fixed_count = 0usize;

        while let Some((vertex, dist)) = frontier.pop() {
            // Stale entry for an already-settled vertex
            if !visited.insert(vertex) {
                continue;
            }
            fixed_count += 1;

            // On the first pop of a vertex the popped distance is its final
            // distance: anything smaller would have been popped earlier.
            sink.emit(TraceEvent::VertexFixed {
                vertex,
                distance: dist,
            });

            for edge in graph.outgoing(vertex) {
                sink.emit(TraceEvent::EdgeExamined {
                    from: edge.from,
                    to: edge.to,
                    weight: edge.weight,
                });

                if visited.contains(&edge.to) {
                    continue;
                }
                let candidate = dist + edge.weight;
                let old_distance = distances.get(&edge.to).copied();
                if old_distance.map_or(true, |current| candidate < current) {
                    distances.insert(edge.to, candidate);
                    predecessors.insert(edge.to, edge.from);
                    frontier.push(edge.to, candidate);
                    sink.emit(TraceEvent::EdgeRelaxed {
                        from: edge.from,
                        to: edge.to,
                        old_distance,
                        new_distance: candidate,
                    });
                }
            }

            sink.emit(TraceEvent::RoundSummary {
                round: fixed_count,
                distances: distances.clone(),
                predecessors: predecessors.clone(),
            });
        }

        sink.emit(TraceEvent::FinalResult {
            distances: distances.clone(),
            predecessors: predecessors.clone(),
            has_negative_cycle: false,
        });

        Ok(ShortestPathResult {
            source,
            distances,
            predecessors,
            has_negative_cycle: false,
        })
    }
}
