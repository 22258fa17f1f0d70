//! Errors raised by input validation, run setup and driver gating.
//!
//! None of them is fatal: each one is reported to the view that triggered it and the
//! view keeps its previous state.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{Algorithm, NodeId};

/// Error raised by a visualizer operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VisualizerError {
  /// Malformed or empty numeric list (or other bad scalar input).
  #[error("invalid input: {0}")]
  InvalidInput(String),
  /// Graph text could not be parsed.
  #[error("invalid graph: {0}")]
  InvalidGraph(String),
  #[error("start node '{0}' does not exist in the graph")]
  UnknownStartNode(NodeId),
  /// Start requested with nothing (or an empty array) loaded.
  #[error("no dataset loaded")]
  EmptyDataset,
  /// A run is active; the control is disabled until it completes.
  #[error("a run is already in progress")]
  RunInProgress,
  #[error("{algorithm} expects {expected} input, got {actual}")]
  DatasetMismatch {
    algorithm: Algorithm,
    expected: &'static str,
    actual: &'static str,
  },
  #[error("binary search requires input sorted in non-decreasing order")]
  UnsortedInput,
  #[error("no completed run to replay")]
  NothingToReplay,
  #[error("{0} has no replayable history")]
  ReplayUnsupported(Algorithm),
  #[error("invalid value for {key}: '{value}'")]
  InvalidConfig { key: String, value: String },
  /// The view was unmounted; it accepts no further controls or runs.
  #[error("view is unmounted")]
  Unmounted,
}

/// Category of a [`VisualizerError`], as reported to display surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
  InvalidInput,
  InvalidGraph,
  UnknownStartNode,
  EmptyDataset,
  RunInProgress,
  DatasetMismatch,
  UnsortedInput,
  NothingToReplay,
  ReplayUnsupported,
  InvalidConfig,
  Unmounted,
}

impl fmt::Display for ErrorKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let s = match self {
      ErrorKind::InvalidInput => "invalid_input",
      ErrorKind::InvalidGraph => "invalid_graph",
      ErrorKind::UnknownStartNode => "unknown_start_node",
      ErrorKind::EmptyDataset => "empty_dataset",
      ErrorKind::RunInProgress => "run_in_progress",
      ErrorKind::DatasetMismatch => "dataset_mismatch",
      ErrorKind::UnsortedInput => "unsorted_input",
      ErrorKind::NothingToReplay => "nothing_to_replay",
      ErrorKind::ReplayUnsupported => "replay_unsupported",
      ErrorKind::InvalidConfig => "invalid_config",
      ErrorKind::Unmounted => "unmounted",
    };
    f.write_str(s)
  }
}

impl VisualizerError {
  pub fn kind(&self) -> ErrorKind {
    match self {
      VisualizerError::InvalidInput(_) => ErrorKind::InvalidInput,
      VisualizerError::InvalidGraph(_) => ErrorKind::InvalidGraph,
      VisualizerError::UnknownStartNode(_) => ErrorKind::UnknownStartNode,
      VisualizerError::EmptyDataset => ErrorKind::EmptyDataset,
      VisualizerError::RunInProgress => ErrorKind::RunInProgress,
      VisualizerError::DatasetMismatch { .. } => ErrorKind::DatasetMismatch,
      VisualizerError::UnsortedInput => ErrorKind::UnsortedInput,
      VisualizerError::NothingToReplay => ErrorKind::NothingToReplay,
      VisualizerError::ReplayUnsupported(_) => ErrorKind::ReplayUnsupported,
      VisualizerError::InvalidConfig { .. } => ErrorKind::InvalidConfig,
      VisualizerError::Unmounted => ErrorKind::Unmounted,
    }
  }

  /// Errors caused by what the user typed or picked; these reach the surface as
  /// validation warnings. Gating refusals (`RunInProgress`, `Unmounted`) do not.
  pub fn is_validation(&self) -> bool {
    !matches!(
      self,
      VisualizerError::RunInProgress | VisualizerError::Unmounted
    )
  }
}
