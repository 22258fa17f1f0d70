//! A recorded run: one algorithm over one dataset snapshot.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use uuid::Uuid;

use super::{Algorithm, Dataset, Frame, FrameKind, Metrics, NodeId};
use crate::emitters;
use crate::error::VisualizerError;

/// Parameters a run needs besides the dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunParams {
  /// Value searched for by linear and binary search.
  pub target: i64,
  /// Node the graph algorithms start from.
  pub start: NodeId,
}

impl RunParams {
  pub fn with_target(target: i64) -> Self {
    Self {
      target,
      ..Self::default()
    }
  }

  pub fn with_start(start: impl Into<NodeId>) -> Self {
    Self {
      start: start.into(),
      ..Self::default()
    }
  }
}

/// One complete execution: ordered frames and terminal metrics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Run {
  pub id: Uuid,
  pub algorithm: Algorithm,
  pub params: RunParams,
  /// Snapshot of the input taken when the run was created.
  pub dataset: Dataset,
  pub frames: Vec<Frame>,
  pub metrics: Metrics,
  pub created_at: DateTime<Utc>,
}

impl Run {
  /// Records `algorithm` over a copy of `dataset`.
  ///
  /// Fails without producing frames when the dataset or parameters are unusable.
  #[instrument(level = "trace", skip(dataset))]
  pub fn record(
    algorithm: Algorithm,
    dataset: &Dataset,
    params: &RunParams,
  ) -> Result<Run, VisualizerError> {
    let trace = emitters::emit(algorithm, dataset, params)?;
    let run = Run {
      id: Uuid::new_v4(),
      algorithm,
      params: params.clone(),
      dataset: dataset.clone(),
      frames: trace.frames,
      metrics: trace.metrics,
      created_at: Utc::now(),
    };
    info!(run_id = %run.id, %algorithm, frames = run.frames.len(), "run recorded");
    Ok(run)
  }

  pub fn frame_count(&self) -> usize {
    self.frames.len()
  }

  /// Number of frames of the given kind.
  pub fn count(&self, kind: FrameKind) -> usize {
    self.frames.iter().filter(|f| f.kind == kind).count()
  }

  /// Order-changing frames with highlights cleared, for replaying a sort.
  pub fn history(&self) -> Vec<Frame> {
    self
      .frames
      .iter()
      .filter(|f| f.kind.changes_order())
      .map(Frame::without_highlights)
      .collect()
  }

  /// Array state after the last frame (the input itself if nothing moved).
  pub fn final_values(&self) -> Option<Vec<i64>> {
    self
      .frames
      .iter()
      .rev()
      .find_map(|f| f.values().map(<[i64]>::to_vec))
      .or_else(|| self.dataset.as_array().map(<[i64]>::to_vec))
  }
}
