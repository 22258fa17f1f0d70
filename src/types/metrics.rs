//! Counters and terminal results of a run.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{Distance, NodeId};

/// Counters plus terminal outcome fields.
///
/// Counters only grow within a run. Fields an algorithm does not use stay at their
/// defaults (zero, `None`, empty).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metrics {
  pub comparisons: u64,
  /// Swaps (bubble, selection, quick) or key placements (insertion).
  pub swaps: u64,
  /// Completed merges (merge sort).
  pub merges: u64,
  /// Array slot writes (insertion shifts and placements, merge output).
  pub writes: u64,
  /// Edges that improved a tentative distance (Dijkstra).
  pub relaxations: u64,
  pub nodes_visited: u64,
  /// Search result; `None` until the search finishes or hits.
  pub found: Option<bool>,
  /// Nodes in visit (or finalization) order.
  pub visited: Vec<NodeId>,
  /// Distance per node; every graph node is present once Dijkstra starts.
  pub distances: BTreeMap<NodeId, Distance>,
}

impl Metrics {
  /// Distance of `node`, if Dijkstra tracked it.
  pub fn distance(&self, node: &str) -> Option<Distance> {
    self.distances.get(node).copied()
  }
}
