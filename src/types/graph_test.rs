//! Tests for `Graph`.

use super::{Edge, Graph};

#[test]
fn add_edge_creates_both_endpoints() {
  let mut g = Graph::new();
  g.add_edge("A", "B", 3);
  assert!(g.contains("A"));
  assert!(g.contains("B"));
  assert_eq!(g.neighbors("A"), &[Edge::new("B", 3)]);
  assert!(g.neighbors("B").is_empty());
  assert_eq!(g.node_count(), 2);
  assert_eq!(g.edge_count(), 1);
}

#[test]
fn add_node_twice_is_noop() {
  let mut g = Graph::new();
  assert!(g.add_node("A"));
  g.add_edge("A", "B", 1);
  assert!(!g.add_node("A"));
  assert_eq!(g.neighbors("A").len(), 1);
}

#[test]
fn undirected_edge_goes_both_ways() {
  let mut g = Graph::new();
  g.add_undirected_edge("A", "B");
  assert_eq!(g.neighbors("A"), &[Edge::new("B", 1)]);
  assert_eq!(g.neighbors("B"), &[Edge::new("A", 1)]);
  assert!(!g.is_weighted());
}

#[test]
fn neighbors_keep_insertion_order() {
  let mut g = Graph::new();
  g.add_edge("A", "C", 1);
  g.add_edge("A", "B", 1);
  let order: Vec<_> = g.neighbors("A").iter().map(|e| e.to.as_str()).collect();
  assert_eq!(order, vec!["C", "B"]);
}

#[test]
fn nodes_iterate_sorted() {
  let mut g = Graph::new();
  g.add_node("c");
  g.add_node("a");
  g.add_node("b");
  let nodes: Vec<_> = g.nodes().cloned().collect();
  assert_eq!(nodes, vec!["a", "b", "c"]);
}

#[test]
fn unknown_node_has_no_neighbors() {
  let g = Graph::new();
  assert!(g.neighbors("nope").is_empty());
  assert!(g.is_empty());
}

#[test]
fn weighted_detection() {
  let mut g = Graph::new();
  g.add_edge("A", "B", 1);
  assert!(!g.is_weighted());
  g.add_edge("B", "C", 4);
  assert!(g.is_weighted());
}

#[test]
fn serializes_as_adjacency_map() {
  let mut g = Graph::new();
  g.add_edge("A", "B", 2);
  let json = serde_json::to_value(&g).unwrap();
  assert_eq!(
    json,
    serde_json::json!({"A": [{"to": "B", "weight": 2}], "B": []})
  );
}
