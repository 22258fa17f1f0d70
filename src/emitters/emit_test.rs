use crate::emitters::emit;
use crate::error::VisualizerError;
use crate::graph_parser::parse_graph;
use crate::types::{Algorithm, Dataset, FrameKind, RunParams};

fn graph() -> Dataset {
  Dataset::Graph(parse_graph(r#"{"A": ["B"], "B": []}"#).unwrap())
}

#[test]
fn array_algorithm_rejects_graph() {
  let err = emit(Algorithm::MergeSort, &graph(), &RunParams::default()).unwrap_err();
  assert_eq!(
    err,
    VisualizerError::DatasetMismatch {
      algorithm: Algorithm::MergeSort,
      expected: "array",
      actual: "graph",
    }
  );
}

#[test]
fn graph_algorithm_rejects_array() {
  let err = emit(
    Algorithm::Dijkstra,
    &Dataset::Array(vec![1]),
    &RunParams::with_start("A"),
  )
  .unwrap_err();
  assert!(matches!(err, VisualizerError::DatasetMismatch { .. }));
}

#[test]
fn empty_array_is_rejected() {
  for algorithm in Algorithm::ALL.iter().filter(|a| !a.uses_graph()) {
    assert_eq!(
      emit(*algorithm, &Dataset::Array(vec![]), &RunParams::default()),
      Err(VisualizerError::EmptyDataset),
      "{algorithm}"
    );
  }
}

#[test]
fn binary_search_requires_sorted_input() {
  assert_eq!(
    emit(
      Algorithm::BinarySearch,
      &Dataset::Array(vec![3, 1, 2]),
      &RunParams::with_target(1)
    ),
    Err(VisualizerError::UnsortedInput)
  );
}

#[test]
fn unknown_start_node_emits_nothing() {
  for algorithm in [
    Algorithm::BreadthFirstSearch,
    Algorithm::DepthFirstSearch,
    Algorithm::Dijkstra,
  ] {
    assert_eq!(
      emit(algorithm, &graph(), &RunParams::with_start("Z")),
      Err(VisualizerError::UnknownStartNode("Z".into()))
    );
  }
}

#[test]
fn every_algorithm_emits_frames() {
  for algorithm in Algorithm::ALL {
    let (dataset, params) = if algorithm.uses_graph() {
      (graph(), RunParams::with_start("A"))
    } else {
      (Dataset::Array(vec![2, 4, 6]), RunParams::with_target(4))
    };
    let trace = emit(algorithm, &dataset, &params).unwrap();
    assert!(!trace.frames.is_empty(), "{algorithm}");
    let steps: Vec<u32> = trace.frames.iter().map(|f| f.step).collect();
    assert_eq!(steps, (1..=trace.frames.len() as u32).collect::<Vec<_>>());
    assert_eq!(
      trace.metrics.comparisons as usize,
      trace.count(FrameKind::Compare),
      "{algorithm}"
    );
  }
}

#[test]
fn emission_is_deterministic() {
  let dataset = Dataset::Array(vec![9, 1, 8, 2, 7, 3]);
  let a = emit(Algorithm::QuickSort, &dataset, &RunParams::default()).unwrap();
  let b = emit(Algorithm::QuickSort, &dataset, &RunParams::default()).unwrap();
  assert_eq!(a, b);
}

#[tokio::test]
async fn trace_streams_frames_in_order() {
  use futures::StreamExt;

  let trace = emit(
    Algorithm::BubbleSort,
    &Dataset::Array(vec![2, 1]),
    &RunParams::default(),
  )
  .unwrap();
  let expected = trace.frames.clone();
  let streamed: Vec<_> = trace.into_stream().collect().await;
  assert_eq!(streamed, expected);
}
