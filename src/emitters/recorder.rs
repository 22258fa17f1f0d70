//! Frame recorder shared by all emitters.

use std::collections::BTreeSet;

use tracing::trace;

use super::Trace;
use crate::accumulator::MetricsAccumulator;
use crate::types::{Frame, FrameKind, NodeId, Snapshot};

/// Collects frames in execution order, stamping each with the running metrics.
///
/// Counters are bumped before the frame they describe is pushed, so a frame's metrics
/// already include its own step.
#[derive(Debug, Default)]
pub(crate) struct FrameRecorder {
  frames: Vec<Frame>,
  metrics: MetricsAccumulator,
}

impl FrameRecorder {
  pub(crate) fn new() -> Self {
    Self::default()
  }

  pub(crate) fn metrics(&mut self) -> &mut MetricsAccumulator {
    &mut self.metrics
  }

  /// Pushes an array frame.
  pub(crate) fn array(
    &mut self,
    kind: FrameKind,
    values: &[i64],
    highlighted: impl IntoIterator<Item = usize>,
    annotation: impl Into<String>,
  ) {
    let snapshot = Snapshot::Array {
      values: values.to_vec(),
      highlighted: highlighted.into_iter().collect(),
    };
    self.push(kind, snapshot, annotation.into());
  }

  /// Pushes a graph frame.
  pub(crate) fn graph<'a>(
    &mut self,
    kind: FrameKind,
    frontier: Vec<NodeId>,
    highlighted: impl IntoIterator<Item = &'a str>,
    annotation: impl Into<String>,
  ) {
    let snapshot = Snapshot::Graph {
      frontier,
      highlighted: highlighted
        .into_iter()
        .map(str::to_string)
        .collect::<BTreeSet<_>>(),
    };
    self.push(kind, snapshot, annotation.into());
  }

  /// Counts a comparison and records its frame.
  pub(crate) fn compare(
    &mut self,
    values: &[i64],
    highlighted: impl IntoIterator<Item = usize>,
    annotation: impl Into<String>,
  ) {
    self.metrics.record_comparison();
    self.array(FrameKind::Compare, values, highlighted, annotation);
  }

  /// Counts a swap and records the array after it.
  pub(crate) fn swap(
    &mut self,
    values: &[i64],
    highlighted: impl IntoIterator<Item = usize>,
    annotation: impl Into<String>,
  ) {
    self.metrics.record_swap();
    self.array(FrameKind::Swap, values, highlighted, annotation);
  }

  fn push(&mut self, kind: FrameKind, snapshot: Snapshot, annotation: String) {
    let step = u32::try_from(self.frames.len() + 1).unwrap_or(u32::MAX);
    trace!(step, %kind, annotation = %annotation, "frame");
    self.frames.push(Frame {
      step,
      kind,
      snapshot,
      annotation: Some(annotation),
      metrics: self.metrics.snapshot(),
    });
  }

  pub(crate) fn finish(self) -> Trace {
    Trace {
      frames: self.frames,
      metrics: self.metrics.into_metrics(),
    }
  }
}
