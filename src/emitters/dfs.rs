//! Depth-first traversal.

use std::collections::BTreeSet;

use tracing::instrument;

use super::Trace;
use super::recorder::FrameRecorder;
use crate::types::{FrameKind, Graph, NodeId};

/// Depth-first traversal from `start` in recursive preorder.
///
/// Uses an explicit stack of `(node, next edge index)` so deep graphs cannot overflow the
/// call stack. Each visit frame carries the current path from `start` as its frontier.
/// The caller guarantees `start` is in the graph.
#[instrument(level = "trace", skip(graph), fields(nodes = graph.node_count()))]
pub fn depth_first_search(graph: &Graph, start: &str) -> Trace {
  let mut rec = FrameRecorder::new();
  let mut visited: BTreeSet<NodeId> = BTreeSet::new();
  let mut stack: Vec<(NodeId, usize)> = Vec::new();

  visit(&mut rec, &mut visited, &mut stack, start, None);
  while let Some((node, next)) = stack.last_mut() {
    let edges = graph.neighbors(node);
    let Some(offset) = edges[*next..].iter().position(|e| !visited.contains(&e.to)) else {
      stack.pop();
      continue;
    };
    let edge = &edges[*next + offset];
    // resume after this edge once the child's subtree is done
    *next += offset + 1;
    let parent = node.clone();
    visit(&mut rec, &mut visited, &mut stack, &edge.to, Some(&parent));
  }
  rec.finish()
}

fn visit(
  rec: &mut FrameRecorder,
  visited: &mut BTreeSet<NodeId>,
  stack: &mut Vec<(NodeId, usize)>,
  node: &str,
  parent: Option<&str>,
) {
  visited.insert(node.to_string());
  stack.push((node.to_string(), 0));
  rec.metrics().record_visit(node);
  let annotation = match parent {
    Some(parent) => format!("Visited {node} from {parent}"),
    None => format!("Visited {node}"),
  };
  rec.graph(
    FrameKind::Visit,
    stack.iter().map(|(n, _)| n.clone()).collect(),
    [node],
    annotation,
  );
}
