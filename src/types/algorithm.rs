//! The algorithms the runner knows how to record.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::VisualizerError;

/// Family an algorithm belongs to; decides which dataset it accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlgorithmFamily {
  Sorting,
  Searching,
  Graph,
}

/// One recordable algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
  BubbleSort,
  SelectionSort,
  InsertionSort,
  MergeSort,
  QuickSort,
  LinearSearch,
  BinarySearch,
  BreadthFirstSearch,
  DepthFirstSearch,
  Dijkstra,
}

impl Algorithm {
  /// Every algorithm, in menu order.
  pub const ALL: [Algorithm; 10] = [
    Algorithm::BubbleSort,
    Algorithm::SelectionSort,
    Algorithm::InsertionSort,
    Algorithm::MergeSort,
    Algorithm::QuickSort,
    Algorithm::LinearSearch,
    Algorithm::BinarySearch,
    Algorithm::BreadthFirstSearch,
    Algorithm::DepthFirstSearch,
    Algorithm::Dijkstra,
  ];

  pub fn family(self) -> AlgorithmFamily {
    match self {
      Algorithm::BubbleSort
      | Algorithm::SelectionSort
      | Algorithm::InsertionSort
      | Algorithm::MergeSort
      | Algorithm::QuickSort => AlgorithmFamily::Sorting,
      Algorithm::LinearSearch | Algorithm::BinarySearch => AlgorithmFamily::Searching,
      Algorithm::BreadthFirstSearch | Algorithm::DepthFirstSearch | Algorithm::Dijkstra => {
        AlgorithmFamily::Graph
      }
    }
  }

  /// True when the input array must be in non-decreasing order.
  pub fn requires_sorted_input(self) -> bool {
    self == Algorithm::BinarySearch
  }

  /// True for algorithms over graphs rather than arrays.
  pub fn uses_graph(self) -> bool {
    self.family() == AlgorithmFamily::Graph
  }

  /// Only sorting views keep a swap history that can be replayed.
  pub fn supports_replay(self) -> bool {
    self.family() == AlgorithmFamily::Sorting
  }

  /// Canonical kebab-case name (also accepted by [`FromStr`]).
  pub fn name(self) -> &'static str {
    match self {
      Algorithm::BubbleSort => "bubble-sort",
      Algorithm::SelectionSort => "selection-sort",
      Algorithm::InsertionSort => "insertion-sort",
      Algorithm::MergeSort => "merge-sort",
      Algorithm::QuickSort => "quick-sort",
      Algorithm::LinearSearch => "linear-search",
      Algorithm::BinarySearch => "binary-search",
      Algorithm::BreadthFirstSearch => "breadth-first-search",
      Algorithm::DepthFirstSearch => "depth-first-search",
      Algorithm::Dijkstra => "dijkstra",
    }
  }
}

impl fmt::Display for Algorithm {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

impl FromStr for Algorithm {
  type Err = VisualizerError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let normalized = s.trim().to_ascii_lowercase().replace(['_', ' '], "-");
    let algorithm = match normalized.as_str() {
      "bubble-sort" | "bubble" => Algorithm::BubbleSort,
      "selection-sort" | "selection" => Algorithm::SelectionSort,
      "insertion-sort" | "insertion" => Algorithm::InsertionSort,
      "merge-sort" | "merge" => Algorithm::MergeSort,
      "quick-sort" | "quick" | "quicksort" => Algorithm::QuickSort,
      "linear-search" | "linear" => Algorithm::LinearSearch,
      "binary-search" | "binary" => Algorithm::BinarySearch,
      "breadth-first-search" | "bfs" => Algorithm::BreadthFirstSearch,
      "depth-first-search" | "dfs" => Algorithm::DepthFirstSearch,
      "dijkstra" => Algorithm::Dijkstra,
      _ => {
        return Err(VisualizerError::InvalidInput(format!(
          "unknown algorithm '{}'",
          s.trim()
        )));
      }
    };
    Ok(algorithm)
  }
}
