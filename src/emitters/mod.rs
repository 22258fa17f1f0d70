//! Step emitters: each algorithm as a pure function from input to frames.
//!
//! An emitter runs the textbook algorithm on a working copy of the dataset and records
//! a [`Frame`] for every comparison, swap/placement or visit, in execution order. The
//! same input always yields the same frames and metrics, so a run can be re-emitted
//! (restarted) at will. Emitters never sleep; pacing belongs to the animation driver.

mod bfs;
mod binary_search;
mod bubble_sort;
mod dfs;
#[cfg(test)]
mod dfs_test;
mod dijkstra;
#[cfg(test)]
mod dijkstra_test;
#[cfg(test)]
mod emit_test;
mod insertion_sort;
mod linear_search;
#[cfg(test)]
mod linear_search_test;
mod merge_sort;
mod quick_sort;
mod recorder;
mod selection_sort;

use tracing::{debug, instrument};

use crate::error::VisualizerError;
use crate::generator::is_sorted;
use crate::types::{Algorithm, Dataset, Frame, FrameKind, Graph, Metrics, RunParams};

pub use bfs::breadth_first_search;
pub use binary_search::binary_search;
pub use bubble_sort::bubble_sort;
pub use dfs::depth_first_search;
pub use dijkstra::dijkstra;
pub use insertion_sort::insertion_sort;
pub use linear_search::linear_search;
pub use merge_sort::merge_sort;
pub use quick_sort::quick_sort;
pub use selection_sort::selection_sort;

/// Frames of one emission plus the terminal metrics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trace {
  pub frames: Vec<Frame>,
  pub metrics: Metrics,
}

impl Trace {
  /// Number of frames of `kind`.
  pub fn count(&self, kind: FrameKind) -> usize {
    self.frames.iter().filter(|f| f.kind == kind).count()
  }

  #[cfg(test)]
  pub(crate) fn into_stream(self) -> impl futures::Stream<Item = Frame> {
    futures::stream::iter(self.frames)
  }
}

impl IntoIterator for Trace {
  type Item = Frame;
  type IntoIter = std::vec::IntoIter<Frame>;

  fn into_iter(self) -> Self::IntoIter {
    self.frames.into_iter()
  }
}

/// Emits the frames of `algorithm` over `dataset`.
///
/// Fails before producing any frame when the dataset has the wrong shape, is empty,
/// is unsorted (binary search) or lacks the start node (graph algorithms).
#[instrument(level = "trace", skip(dataset, params), fields(len = dataset.len()))]
pub fn emit(
  algorithm: Algorithm,
  dataset: &Dataset,
  params: &RunParams,
) -> Result<Trace, VisualizerError> {
  let trace = match algorithm {
    Algorithm::BubbleSort => bubble_sort(require_array(algorithm, dataset)?),
    Algorithm::SelectionSort => selection_sort(require_array(algorithm, dataset)?),
    Algorithm::InsertionSort => insertion_sort(require_array(algorithm, dataset)?),
    Algorithm::MergeSort => merge_sort(require_array(algorithm, dataset)?),
    Algorithm::QuickSort => quick_sort(require_array(algorithm, dataset)?),
    Algorithm::LinearSearch => linear_search(require_array(algorithm, dataset)?, params.target),
    Algorithm::BinarySearch => {
      let values = require_array(algorithm, dataset)?;
      if !is_sorted(values) {
        return Err(VisualizerError::UnsortedInput);
      }
      binary_search(values, params.target)
    }
    Algorithm::BreadthFirstSearch => {
      breadth_first_search(require_start(algorithm, dataset, params)?, &params.start)
    }
    Algorithm::DepthFirstSearch => {
      depth_first_search(require_start(algorithm, dataset, params)?, &params.start)
    }
    Algorithm::Dijkstra => dijkstra(require_start(algorithm, dataset, params)?, &params.start),
  };
  debug!(%algorithm, frames = trace.frames.len(), "emitted");
  Ok(trace)
}

fn require_array(algorithm: Algorithm, dataset: &Dataset) -> Result<&[i64], VisualizerError> {
  let values = dataset
    .as_array()
    .ok_or(VisualizerError::DatasetMismatch {
      algorithm,
      expected: "array",
      actual: dataset.kind_name(),
    })?;
  if values.is_empty() {
    return Err(VisualizerError::EmptyDataset);
  }
  Ok(values)
}

fn require_start<'a>(
  algorithm: Algorithm,
  dataset: &'a Dataset,
  params: &RunParams,
) -> Result<&'a Graph, VisualizerError> {
  let graph = dataset
    .as_graph()
    .ok_or(VisualizerError::DatasetMismatch {
      algorithm,
      expected: "graph",
      actual: dataset.kind_name(),
    })?;
  if graph.is_empty() {
    return Err(VisualizerError::EmptyDataset);
  }
  if !graph.contains(&params.start) {
    return Err(VisualizerError::UnknownStartNode(params.start.clone()));
  }
  Ok(graph)
}
