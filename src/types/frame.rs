//! Frames: the unit of animation.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Metrics, NodeId};

/// What happened in the step a frame records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrameKind {
  /// Two values (or a value and the search target) were compared.
  Compare,
  /// Two array slots exchanged values.
  Swap,
  /// A value moved one slot right to open a gap (insertion sort).
  Shift,
  /// A value was written into its slot (insertion sort key, merge output).
  Place,
  /// A new running minimum was found (selection sort).
  Select,
  /// Two sorted halves finished merging.
  Merge,
  /// A graph node was visited (BFS, DFS).
  Visit,
  /// A node's shortest distance became final (Dijkstra).
  Finalize,
}

impl FrameKind {
  /// True for frames after which the array order differs from the previous frame.
  pub fn changes_order(self) -> bool {
    matches!(self, FrameKind::Swap | FrameKind::Shift | FrameKind::Place)
  }
}

impl fmt::Display for FrameKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let s = match self {
      FrameKind::Compare => "compare",
      FrameKind::Swap => "swap",
      FrameKind::Shift => "shift",
      FrameKind::Place => "place",
      FrameKind::Select => "select",
      FrameKind::Merge => "merge",
      FrameKind::Visit => "visit",
      FrameKind::Finalize => "finalize",
    };
    f.write_str(s)
  }
}

/// Data-structure state at one instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Snapshot {
  /// Whole working array plus the indices under consideration.
  Array {
    values: Vec<i64>,
    highlighted: BTreeSet<usize>,
  },
  /// Pending nodes (queue, DFS path or priority set) plus the nodes under consideration.
  /// Visited order and distances travel in the frame's [`Metrics`].
  Graph {
    frontier: Vec<NodeId>,
    highlighted: BTreeSet<NodeId>,
  },
}

/// Display element of an array bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
  pub value: i64,
  pub highlighted: bool,
}

/// One immutable step of a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
  /// 1-based position in the run.
  pub step: u32,
  pub kind: FrameKind,
  pub snapshot: Snapshot,
  pub annotation: Option<String>,
  /// Running metrics right after this step.
  pub metrics: Metrics,
}

impl Frame {
  /// Array values, if this is an array frame.
  pub fn values(&self) -> Option<&[i64]> {
    match &self.snapshot {
      Snapshot::Array { values, .. } => Some(values),
      Snapshot::Graph { .. } => None,
    }
  }

  /// Highlighted array indices (empty for graph frames).
  pub fn highlighted_indices(&self) -> Vec<usize> {
    match &self.snapshot {
      Snapshot::Array { highlighted, .. } => highlighted.iter().copied().collect(),
      Snapshot::Graph { .. } => Vec::new(),
    }
  }

  /// Highlighted node ids (empty for array frames).
  pub fn highlighted_nodes(&self) -> Vec<&str> {
    match &self.snapshot {
      Snapshot::Graph { highlighted, .. } => highlighted.iter().map(String::as_str).collect(),
      Snapshot::Array { .. } => Vec::new(),
    }
  }

  /// Bars to draw for an array frame.
  pub fn elements(&self) -> Vec<Element> {
    match &self.snapshot {
      Snapshot::Array {
        values,
        highlighted,
      } => values
        .iter()
        .enumerate()
        .map(|(i, &value)| Element {
          value,
          highlighted: highlighted.contains(&i),
        })
        .collect(),
      Snapshot::Graph { .. } => Vec::new(),
    }
  }

  /// Copy of this frame with all highlights cleared (replay shows plain bars).
  pub fn without_highlights(&self) -> Frame {
    let snapshot = match &self.snapshot {
      Snapshot::Array { values, .. } => Snapshot::Array {
        values: values.clone(),
        highlighted: BTreeSet::new(),
      },
      Snapshot::Graph { frontier, .. } => Snapshot::Graph {
        frontier: frontier.clone(),
        highlighted: BTreeSet::new(),
      },
    };
    Frame {
      snapshot,
      ..self.clone()
    }
  }
}
