use num_traits::PrimInt;
use std::collections::BTreeMap;
use std::fmt::Debug;

use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::graph::edge_list::EdgeListGraph;
use crate::trace::{TraceEvent, TraceSink};
use crate::{Error, Result};

/// Bellman-Ford: up to V-1 rounds of relaxing every edge in input order,
/// followed by one extra full pass that flags negative-cycle witnesses.
///
/// Negative edge weights are fine; a negative cycle reachable from the source
/// is reported through `has_negative_cycle` rather than as an error, and the
/// distances returned in that case are unreliable.
#[derive(Debug, Default)]
pub struct BellmanFord;

impl BellmanFord {
    /// Creates a new Bellman-Ford engine instance
    pub fn new() -> Self {
        BellmanFord
    }
}

impl<W> ShortestPathAlgorithm<W> for BellmanFord
where
    W: PrimInt + Debug,
{
    fn name(&self) -> &'static str {
        "Bellman-Ford"
    }

    fn run(
        &self,
        graph: &EdgeListGraph<W>,
        source: usize,
        sink: &mut dyn TraceSink<W>,
    ) -> Result<ShortestPathResult<W>> {
        if !graph.contains_vertex(source) {
            return Err(Error::InvalidSource(source));
        }

        let mut distances: BTreeMap<usize, W> = BTreeMap::new();
        let mut predecessors: BTreeMap<usize, usize> = BTreeMap::new();
        distances.insert(source, W::zero());

        // Rounds are 1-based; V-1 of them suffice to converge when no
        // negative cycle is reachable.
        let rounds = graph.vertex_count().saturating_sub(1);
        for round in 1..=rounds {
            sink.emit(TraceEvent::RoundStart { round });

            let mut changed = false;
            for edge in graph.edges() {
                sink.emit(TraceEvent::EdgeExamined {
                    from: edge.from,
                    to: edge.to,
                    weight: edge.weight,
                });

                let Some(&dist_from) = distances.get(&edge.from) else {
                    continue;
                };
                let candidate = dist_from + edge.weight;
                let old_distance = distances.get(&edge.to).copied();
                if old_distance.map_or(true, |current| candidate < current) {
                    // Distance and predecessor move together, always.
                    distances.insert(edge.to, candidate);
                    predecessors.insert(edge.to, edge.from);
                    changed = true;
                    sink.emit(TraceEvent::EdgeRelaxed {
                        from: edge.from,
                        to: edge.to,
                        old_distance,
                        new_distance: candidate,
                    });
                }
            }

            sink.emit(TraceEvent::RoundSummary {
                round,
                distances: distances.clone(),
                predecessors: predecessors.clone(),
            });

            // A round without a relaxation means convergence; remaining
            // rounds cannot change anything.
            if !changed {
                break;
            }
        }

        // Extra pass: any edge that still relaxes witnesses a negative
        // cycle reachable from the source.
        let mut has_negative_cycle = false;
        for edge in graph.edges() {
            if let Some(&dist_from) = distances.get(&edge.from) {
                let candidate = dist_from + edge.weight;
                let still_relaxes = distances
                    .get(&edge.to)
                    .map_or(true, |&current| candidate < current);
                if still_relaxes {
                    has_negative_cycle = true;
                    log::debug!(
                        "negative cycle witness: {} -> {} ({:?})",
                        edge.from,
                        edge.to,
                        edge.weight
                    );
                    sink.emit(TraceEvent::NegativeCycleDetected {
                        from: edge.from,
                        to: edge.to,
                        weight: edge.weight,
                    });
                }
            }
        }

        sink.emit(TraceEvent::FinalResult {
            distances: distances.clone(),
            predecessors: predecessors.clone(),
            has_negative_cycle,
        });

        Ok(ShortestPathResult {
            source,
            distances,
            predecessors,
            has_negative_cycle,
        })
    }
}
