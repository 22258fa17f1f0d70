//! Breadth-first traversal.

use std::collections::{BTreeSet, VecDeque};

use tracing::instrument;

use super::Trace;
use super::recorder::FrameRecorder;
use crate::types::{FrameKind, Graph, NodeId};

/// Breadth-first traversal from `start`.
///
/// A node is visited when dequeued and is enqueued at most once. Each visit frame carries
/// the queue as its frontier, after the node's unseen neighbours were enqueued in edge
/// order. The caller guarantees `start` is in the graph.
#[instrument(level = "trace", skip(graph), fields(nodes = graph.node_count()))]
pub fn breadth_first_search(graph: &Graph, start: &str) -> Trace {
  let mut rec = FrameRecorder::new();
  let mut queue: VecDeque<NodeId> = VecDeque::from([start.to_string()]);
  let mut seen: BTreeSet<NodeId> = BTreeSet::from([start.to_string()]);

  while let Some(node) = queue.pop_front() {
    rec.metrics().record_visit(&node);
    let mut enqueued = Vec::new();
    for edge in graph.neighbors(&node) {
      if seen.insert(edge.to.clone()) {
        queue.push_back(edge.to.clone());
        enqueued.push(edge.to.as_str());
      }
    }
    let annotation = format!(
      "Visited {node} and enqueued its neighbors: [{}]",
      enqueued.join(", ")
    );
    rec.graph(
      FrameKind::Visit,
      queue.iter().cloned().collect(),
      [node.as_str()],
      annotation,
    );
  }
  rec.finish()
}
