//! Input of one run: an integer array or a graph.

use serde::{Deserialize, Serialize};

use super::Graph;

/// Input of one run. A run takes its own copy, so later edits never affect it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dataset {
  Array(Vec<i64>),
  Graph(Graph),
}

impl Dataset {
  pub fn as_array(&self) -> Option<&[i64]> {
    match self {
      Dataset::Array(values) => Some(values),
      Dataset::Graph(_) => None,
    }
  }

  pub fn as_graph(&self) -> Option<&Graph> {
    match self {
      Dataset::Graph(graph) => Some(graph),
      Dataset::Array(_) => None,
    }
  }

  /// Number of elements (array) or nodes (graph).
  pub fn len(&self) -> usize {
    match self {
      Dataset::Array(values) => values.len(),
      Dataset::Graph(graph) => graph.node_count(),
    }
  }

  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }

  /// Human label used in mismatch errors.
  pub fn kind_name(&self) -> &'static str {
    match self {
      Dataset::Array(_) => "array",
      Dataset::Graph(_) => "graph",
    }
  }
}

impl From<Vec<i64>> for Dataset {
  fn from(values: Vec<i64>) -> Self {
    Dataset::Array(values)
  }
}

impl From<Graph> for Dataset {
  fn from(graph: Graph) -> Self {
    Dataset::Graph(graph)
  }
}
