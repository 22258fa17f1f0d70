use crate::emitters::depth_first_search;
use crate::graph_parser::parse_graph;
use crate::types::{Graph, Snapshot};

#[test]
fn visits_in_preorder() {
  let graph = parse_graph(r#"{"A": ["B", "C"], "B": ["D"], "C": ["D"], "D": []}"#).unwrap();
  let trace = depth_first_search(&graph, "A");
  assert_eq!(trace.metrics.visited, vec!["A", "B", "D", "C"]);
}

#[test]
fn frontier_is_current_path() {
  let graph = parse_graph(r#"{"A": ["B", "C"], "B": ["D"], "C": [], "D": []}"#).unwrap();
  let trace = depth_first_search(&graph, "A");
  let paths: Vec<Vec<String>> = trace
    .frames
    .iter()
    .map(|f| match &f.snapshot {
      Snapshot::Graph { frontier, .. } => frontier.clone(),
      other => panic!("unexpected snapshot {other:?}"),
    })
    .collect();
  assert_eq!(
    paths,
    vec![
      vec!["A"],
      vec!["A", "B"],
      vec!["A", "B", "D"],
      vec!["A", "C"],
    ]
  );
  assert_eq!(trace.frames[3].annotation.as_deref(), Some("Visited C from A"));
}

#[test]
fn undirected_cycle_never_revisits() {
  let mut graph = Graph::new();
  graph.add_undirected_edge("A", "B");
  graph.add_undirected_edge("B", "C");
  graph.add_undirected_edge("C", "A");
  let trace = depth_first_search(&graph, "A");
  assert_eq!(trace.metrics.visited, vec!["A", "B", "C"]);
  assert_eq!(trace.metrics.nodes_visited, 3);
}

#[test]
fn long_chain_is_fully_visited() {
  let mut graph = Graph::new();
  for i in 0..2_000 {
    graph.add_edge(format!("n{i}"), format!("n{}", i + 1), 1);
  }
  let trace = depth_first_search(&graph, "n0");
  assert_eq!(trace.metrics.nodes_visited, 2_001);
}
