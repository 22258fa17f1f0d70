//! Metrics accumulator fed synchronously by the step emitters.

use tracing::trace;

use crate::types::{Distance, Metrics, NodeId};

/// Running metrics of one run.
///
/// Counters can only be incremented, so every snapshot taken later in a run is
/// greater than or equal to every earlier one. A fresh accumulator is used per run.
#[derive(Debug, Clone, Default)]
pub struct MetricsAccumulator {
  metrics: Metrics,
}

impl MetricsAccumulator {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn record_comparison(&mut self) {
    self.metrics.comparisons += 1;
  }

  pub fn record_swap(&mut self) {
    self.metrics.swaps += 1;
  }

  pub fn record_merge(&mut self) {
    self.metrics.merges += 1;
  }

  pub fn record_write(&mut self) {
    self.metrics.writes += 1;
  }

  pub fn record_relaxation(&mut self) {
    self.metrics.relaxations += 1;
  }

  /// Appends `node` to the visit order.
  pub fn record_visit(&mut self, node: &str) {
    self.metrics.nodes_visited += 1;
    self.metrics.visited.push(node.to_string());
  }

  pub fn set_found(&mut self, found: bool) {
    self.metrics.found = Some(found);
  }

  /// Seeds every node as unreachable.
  pub fn init_distances<'a>(&mut self, nodes: impl IntoIterator<Item = &'a NodeId>) {
    for node in nodes {
      self
        .metrics
        .distances
        .insert(node.clone(), Distance::Unreachable);
    }
  }

  pub fn set_distance(&mut self, node: &str, distance: Distance) {
    trace!(node, %distance, "distance updated");
    self.metrics.distances.insert(node.to_string(), distance);
  }

  pub fn distance(&self, node: &str) -> Distance {
    self
      .metrics
      .distances
      .get(node)
      .copied()
      .unwrap_or(Distance::Unreachable)
  }

  /// Current value, as stored in a frame.
  pub fn snapshot(&self) -> Metrics {
    self.metrics.clone()
  }

  /// Terminal value.
  pub fn into_metrics(self) -> Metrics {
    self.metrics
  }
}
