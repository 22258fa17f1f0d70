use crate::emitters::dijkstra;
use crate::graph_parser::parse_graph;
use crate::types::{Distance, FrameKind, Snapshot};

const WEIGHTED: &str = "{A:[(B,1),(C,4)], B:[(C,2),(D,5)], C:[(D,1)], D:[]}";

#[test]
fn shortest_distances() {
  let trace = dijkstra(&parse_graph(WEIGHTED).unwrap(), "A");
  let m = &trace.metrics;
  assert_eq!(m.distance("A"), Some(Distance::Finite(0)));
  assert_eq!(m.distance("B"), Some(Distance::Finite(1)));
  assert_eq!(m.distance("C"), Some(Distance::Finite(3)));
  assert_eq!(m.distance("D"), Some(Distance::Finite(4)));
  assert_eq!(m.visited, vec!["A", "B", "C", "D"]);
  assert_eq!(trace.count(FrameKind::Finalize), 4);
}

#[test]
fn relaxations_count_improvements() {
  // A->B, A->C, B->C (4 -> 3), B->D, C->D (6 -> 4)
  let trace = dijkstra(&parse_graph(WEIGHTED).unwrap(), "A");
  assert_eq!(trace.metrics.relaxations, 5);
  assert_eq!(trace.metrics.comparisons, 0);
}

#[test]
fn first_frame_names_start() {
  let trace = dijkstra(&parse_graph(WEIGHTED).unwrap(), "A");
  let first = &trace.frames[0];
  assert_eq!(
    first.annotation.as_deref(),
    Some("Visiting node A with current distance 0")
  );
  match &first.snapshot {
    Snapshot::Graph { frontier, .. } => assert_eq!(frontier, &["B", "C"]),
    other => panic!("unexpected snapshot {other:?}"),
  }
  assert_eq!(first.highlighted_nodes(), vec!["A", "B", "C"]);
}

#[test]
fn unreachable_nodes_stay_unreachable() {
  let graph = parse_graph(r#"{"A": [["B", 2]], "B": [], "Z": [["A", 1]]}"#).unwrap();
  let trace = dijkstra(&graph, "A");
  assert_eq!(trace.metrics.distance("Z"), Some(Distance::Unreachable));
  assert_eq!(trace.metrics.nodes_visited, 2);
}

#[test]
fn every_node_present_from_first_frame() {
  let trace = dijkstra(&parse_graph(WEIGHTED).unwrap(), "A");
  assert_eq!(trace.frames[0].metrics.distances.len(), 4);
}

#[test]
fn ties_finalize_by_id() {
  let graph = parse_graph(r#"{"S": [["Y", 1], ["X", 1]], "X": [], "Y": []}"#).unwrap();
  let trace = dijkstra(&graph, "S");
  assert_eq!(trace.metrics.visited, vec!["S", "X", "Y"]);
}

#[test]
fn zero_weight_edges() {
  let graph = parse_graph(r#"{"A": [["B", 0]], "B": [["C", 0]], "C": []}"#).unwrap();
  let trace = dijkstra(&graph, "A");
  assert_eq!(trace.metrics.distance("C"), Some(Distance::Finite(0)));
}
