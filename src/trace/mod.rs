//! Trace event model.
//!
//! Engines describe every intermediate step as a [`TraceEvent`] and hand it to
//! a [`TraceSink`] synchronously, in algorithm order. The engines keep no copy
//! of the stream; a sink that wants replay records the events itself (see
//! [`RecordingSink`]). Rendering, pacing, and animation are entirely the
//! sink's business.

use serde::Serialize;
use std::collections::BTreeMap;
use std::io::Write;

/// One step of an engine's progress.
///
/// `old_distance: None` means the vertex was at infinity before the
/// relaxation; absent keys in the distance maps mean the same.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TraceEvent<W> {
    /// Bellman-Ford starts relaxation round `round` (1-based).
    RoundStart { round: usize },

    /// An edge is about to be tested for relaxation.
    EdgeExamined { from: usize, to: usize, weight: W },

    /// A relaxation succeeded; distance and predecessor of `to` were updated
    /// together.
    EdgeRelaxed {
        from: usize,
        to: usize,
        old_distance: Option<W>,
        new_distance: W,
    },

    /// Snapshot after a Bellman-Ford round, or after a Dijkstra neighbor
    /// sweep (there `round` is the count of vertices fixed so far).
    RoundSummary {
        round: usize,
        distances: BTreeMap<usize, W>,
        predecessors: BTreeMap<usize, usize>,
    },

    /// Dijkstra settled `vertex` at its final distance.
    VertexFixed { vertex: usize, distance: W },

    /// The extra Bellman-Ford pass found an edge that still relaxes; the edge
    /// witnesses a negative-weight cycle reachable from the source.
    NegativeCycleDetected { from: usize, to: usize, weight: W },

    /// Terminal state of the run, emitted exactly once, last.
    FinalResult {
        distances: BTreeMap<usize, W>,
        predecessors: BTreeMap<usize, usize>,
        has_negative_cycle: bool,
    },
}

/// Consumer of trace events.
///
/// Called synchronously by the engines; in-order delivery is the only
/// contract. A sink may pace, buffer, or drop events as it sees fit without
/// affecting the computation.
pub trait TraceSink<W> {
    fn emit(&mut self, event: TraceEvent<W>);
}

/// Sink that discards every event.
#[derive(Debug, Default)]
pub struct NullSink;

impl NullSink {
    pub fn new() -> Self {
        NullSink
    }
}

impl<W> TraceSink<W> for NullSink {
    fn emit(&mut self, _event: TraceEvent<W>) {}
}

/// Sink that records the full stream in emission order, for replay or
/// inspection after the run.
#[derive(Debug, Default)]
pub struct RecordingSink<W> {
    events: Vec<TraceEvent<W>>,
}

impl<W> RecordingSink<W> {
    pub fn new() -> Self {
        RecordingSink { events: Vec::new() }
    }

    pub fn events(&self) -> &[TraceEvent<W>] {
        &self.events
    }

    pub fn into_events(self) -> Vec<TraceEvent<W>> {
        self.events
    }
}

impl<W> TraceSink<W> for RecordingSink<W> {
    fn emit(&mut self, event: TraceEvent<W>) {
        self.events.push(event);
    }
}

/// Sink that writes each event as one JSON line.
#[derive(Debug)]
pub struct JsonLinesSink<Wr> {
    writer: Wr,
}

impl<Wr: Write> JsonLinesSink<Wr> {
    pub fn new(writer: Wr) -> Self {
        JsonLinesSink { writer }
    }
}

impl<W, Wr> TraceSink<W> for JsonLinesSink<Wr>
where
    W: Serialize,
    Wr: Write,
{
    fn emit(&mut self, event: TraceEvent<W>) {
        match serde_json::to_writer(&mut self.writer, &event) {
            Ok(()) => {
                if let Err(err) = self.writer.write_all(b"\n") {
                    log::warn!("trace sink write failed: {}", err);
                }
            }
            Err(err) => log::warn!("trace sink serialization failed: {}", err),
        }
    }
}
