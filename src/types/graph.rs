//! Adjacency-list graph used by the traversal and shortest-path emitters.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::NodeId;

/// Directed edge to `to` with a non-negative weight (1 for unweighted graphs).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
  pub to: NodeId,
  pub weight: u64,
}

impl Edge {
  pub fn new(to: impl Into<NodeId>, weight: u64) -> Self {
    Self {
      to: to.into(),
      weight,
    }
  }
}

/// Node id → ordered outgoing edges.
///
/// Nodes iterate in lexicographic order; each node's edges keep insertion order, which
/// is the order BFS enqueues and DFS descends. Every edge target is also a node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Graph {
  adjacency: BTreeMap<NodeId, Vec<Edge>>,
}

impl Graph {
  pub fn new() -> Self {
    Self::default()
  }

  /// Adds `id` with no edges. Returns false if it already existed.
  pub fn add_node(&mut self, id: impl Into<NodeId>) -> bool {
    let id = id.into();
    if self.adjacency.contains_key(&id) {
      return false;
    }
    self.adjacency.insert(id, Vec::new());
    true
  }

  /// Adds a directed edge, creating either endpoint if missing.
  pub fn add_edge(&mut self, from: impl Into<NodeId>, to: impl Into<NodeId>, weight: u64) {
    let to = to.into();
    self.add_node(to.clone());
    self
      .adjacency
      .entry(from.into())
      .or_default()
      .push(Edge::new(to, weight));
  }

  /// Adds `a -> b` and `b -> a`, both with weight 1.
  pub fn add_undirected_edge(&mut self, a: impl Into<NodeId>, b: impl Into<NodeId>) {
    let (a, b) = (a.into(), b.into());
    self.add_edge(a.clone(), b.clone(), 1);
    self.add_edge(b, a, 1);
  }

  pub fn contains(&self, id: &str) -> bool {
    self.adjacency.contains_key(id)
  }

  /// Outgoing edges of `id`; empty for unknown nodes.
  pub fn neighbors(&self, id: &str) -> &[Edge] {
    self.adjacency.get(id).map(Vec::as_slice).unwrap_or(&[])
  }

  pub fn nodes(&self) -> impl Iterator<Item = &NodeId> {
    self.adjacency.keys()
  }

  pub fn node_count(&self) -> usize {
    self.adjacency.len()
  }

  pub fn edge_count(&self) -> usize {
    self.adjacency.values().map(Vec::len).sum()
  }

  pub fn is_empty(&self) -> bool {
    self.adjacency.is_empty()
  }

  /// True if any edge carries a weight other than 1.
  pub fn is_weighted(&self) -> bool {
    self
      .adjacency
      .values()
      .flatten()
      .any(|e| e.weight != 1)
  }
}
