//! Dijkstra shortest paths.

use std::cmp::Reverse;
use std::collections::{BTreeSet, BinaryHeap};

use tracing::instrument;

use super::Trace;
use super::recorder::FrameRecorder;
use crate::types::{Distance, FrameKind, Graph, NodeId};

/// Dijkstra from `start` with a binary min-heap keyed on `(distance, node id)`.
///
/// Every node starts unreachable and `start` at zero. Each node is finalized once, in
/// non-decreasing distance order with ties broken by id, producing one `Finalize` frame
/// after its outgoing edges were relaxed. Stale heap entries are skipped. The caller
/// guarantees `start` is in the graph.
#[instrument(level = "trace", skip(graph), fields(nodes = graph.node_count()))]
pub fn dijkstra(graph: &Graph, start: &str) -> Trace {
  let mut rec = FrameRecorder::new();
  rec.metrics().init_distances(graph.nodes());
  rec.metrics().set_distance(start, Distance::Finite(0));

  let mut finalized: BTreeSet<NodeId> = BTreeSet::new();
  let mut heap = BinaryHeap::from([Reverse((0u64, start.to_string()))]);

  while let Some(Reverse((dist, node))) = heap.pop() {
    if !finalized.insert(node.clone()) {
      continue;
    }
    rec.metrics().record_visit(&node);
    let mut improved = Vec::new();
    for edge in graph.neighbors(&node) {
      if finalized.contains(&edge.to) {
        continue;
      }
      let candidate = Distance::Finite(dist).plus(edge.weight);
      if candidate < rec.metrics().distance(&edge.to) {
        rec.metrics().set_distance(&edge.to, candidate);
        rec.metrics().record_relaxation();
        if let Some(d) = candidate.value() {
          heap.push(Reverse((d, edge.to.clone())));
        }
        improved.push(edge.to.as_str());
      }
    }
    let frontier = pending(&heap, &finalized);
    rec.graph(
      FrameKind::Finalize,
      frontier,
      std::iter::once(node.as_str()).chain(improved),
      format!("Visiting node {node} with current distance {dist}"),
    );
  }
  rec.finish()
}

/// Nodes still waiting in the heap, nearest first, without stale duplicates.
fn pending(heap: &BinaryHeap<Reverse<(u64, NodeId)>>, finalized: &BTreeSet<NodeId>) -> Vec<NodeId> {
  let mut entries: Vec<&(u64, NodeId)> = heap.iter().map(|entry| &entry.0).collect();
  entries.sort();
  let mut seen = BTreeSet::new();
  let mut frontier = Vec::new();
  for (_, node) in entries {
    if !finalized.contains(node) && seen.insert(node) {
      frontier.push(node.clone());
    }
  }
  frontier
}
