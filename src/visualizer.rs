//! Per-view controller.
//!
//! A [`Visualizer`] binds one algorithm to its dataset, run parameters and speed, and
//! owns the view's [`AnimationDriver`] and [`DisplaySurface`]. Every control that changes
//! the view is refused with [`VisualizerError::RunInProgress`] while a run animates.
//! Validation failures go to the surface's `on_validation_error` and leave the view as
//! it was. Unmounting is final: the last run is discarded and every later control or
//! run fails with [`VisualizerError::Unmounted`].

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::sync::watch;
use tracing::{info, instrument, warn};

use crate::config::{VisualizerConfig, clamp_speed};
use crate::driver::{AnimationDriver, DriverState, Playback};
use crate::error::VisualizerError;
use crate::generator::{generate_random, generate_random_sorted, parse_user_input};
use crate::graph_parser::parse_graph;
use crate::surface::DisplaySurface;
use crate::types::{Algorithm, Dataset, Graph, NodeId, Run, RunParams};

/// Mutable part of a view. Never locked across an `.await`.
#[derive(Debug)]
struct ViewState {
  dataset: Option<Dataset>,
  params: RunParams,
  step_delay: Duration,
  last_run: Option<Arc<Run>>,
}

/// Controller of one algorithm view.
pub struct Visualizer {
  algorithm: Algorithm,
  config: VisualizerConfig,
  driver: AnimationDriver,
  surface: Arc<dyn DisplaySurface>,
  view: Mutex<ViewState>,
}

impl std::fmt::Debug for Visualizer {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Visualizer")
      .field("algorithm", &self.algorithm)
      .field("state", &self.driver.state())
      .finish_non_exhaustive()
  }
}

impl Visualizer {
  /// New view. Array views start with a random dataset (sorted for binary search);
  /// graph views start empty.
  pub fn new(
    algorithm: Algorithm,
    config: VisualizerConfig,
    surface: Arc<dyn DisplaySurface>,
  ) -> Self {
    let dataset = if algorithm.uses_graph() {
      None
    } else {
      random_values(algorithm, &config).ok().map(Dataset::Array)
    };
    let view = ViewState {
      dataset,
      params: RunParams::default(),
      step_delay: config.step_delay,
      last_run: None,
    };
    info!(%algorithm, "view mounted");
    Self {
      algorithm,
      config,
      driver: AnimationDriver::new(),
      surface,
      view: Mutex::new(view),
    }
  }

  pub fn algorithm(&self) -> Algorithm {
    self.algorithm
  }

  pub fn dataset(&self) -> Option<Dataset> {
    self.lock_view().dataset.clone()
  }

  pub fn params(&self) -> RunParams {
    self.lock_view().params.clone()
  }

  pub fn step_delay(&self) -> Duration {
    self.lock_view().step_delay
  }

  /// Last run that played to completion.
  pub fn last_run(&self) -> Option<Arc<Run>> {
    self.lock_view().last_run.clone()
  }

  pub fn state(&self) -> DriverState {
    self.driver.state()
  }

  pub fn subscribe_state(&self) -> watch::Receiver<DriverState> {
    self.driver.subscribe()
  }

  /// Replaces the array with fresh random values.
  pub async fn generate_random(&self) -> Result<Vec<i64>, VisualizerError> {
    let algorithm = self.algorithm;
    let config = self.config.clone();
    self
      .control("generate_random", move |view| {
        require_array_view(algorithm)?;
        let values = random_values(algorithm, &config)?;
        view.dataset = Some(Dataset::Array(values.clone()));
        Ok(values)
      })
      .await
  }

  /// Replaces the array with parsed user input (sorted for binary search).
  pub async fn set_custom_input(&self, text: &str) -> Result<Vec<i64>, VisualizerError> {
    let algorithm = self.algorithm;
    self
      .control("set_custom_input", move |view| {
        require_array_view(algorithm)?;
        let mut values = parse_user_input(text)?;
        if algorithm.requires_sorted_input() {
          values.sort_unstable();
        }
        view.dataset = Some(Dataset::Array(values.clone()));
        Ok(values)
      })
      .await
  }

  /// Replaces the graph with parsed graph text. The previous graph is kept on error.
  pub async fn set_graph_input(&self, text: &str) -> Result<(), VisualizerError> {
    let algorithm = self.algorithm;
    self
      .control("set_graph_input", move |view| {
        require_graph_view(algorithm)?;
        let graph = parse_graph(text)?;
        info!(nodes = graph.node_count(), edges = graph.edge_count(), "graph loaded");
        view.dataset = Some(Dataset::Graph(graph));
        Ok(())
      })
      .await
  }

  /// Adds an isolated node. Returns false if it already existed.
  pub async fn add_node(&self, id: &str) -> Result<bool, VisualizerError> {
    let algorithm = self.algorithm;
    self
      .control("add_node", move |view| {
        let id = node_name(id)?;
        Ok(graph_mut(algorithm, view)?.add_node(id))
      })
      .await
  }

  /// Adds a directed weighted edge, creating missing endpoints.
  pub async fn add_edge(&self, from: &str, to: &str, weight: u64) -> Result<(), VisualizerError> {
    let algorithm = self.algorithm;
    self
      .control("add_edge", move |view| {
        let (from, to) = (node_name(from)?, node_name(to)?);
        graph_mut(algorithm, view)?.add_edge(from, to, weight);
        Ok(())
      })
      .await
  }

  /// Adds an undirected unit edge between `a` and `b`.
  pub async fn connect(&self, a: &str, b: &str) -> Result<(), VisualizerError> {
    let algorithm = self.algorithm;
    self
      .control("connect", move |view| {
        let (a, b) = (node_name(a)?, node_name(b)?);
        graph_mut(algorithm, view)?.add_undirected_edge(a, b);
        Ok(())
      })
      .await
  }

  pub async fn set_target(&self, target: i64) -> Result<(), VisualizerError> {
    self
      .control("set_target", move |view| {
        view.params.target = target;
        Ok(())
      })
      .await
  }

  /// Sets the traversal start. Checked against the graph when the run starts.
  pub async fn set_start_node(&self, start: &str) -> Result<(), VisualizerError> {
    self
      .control("set_start_node", move |view| {
        view.params.start = node_name(start)?;
        Ok(())
      })
      .await
  }

  /// Sets the step delay, clamped to the speed control's range.
  pub async fn set_speed_ms(&self, ms: u64) -> Result<Duration, VisualizerError> {
    self
      .control("set_speed_ms", move |view| {
        view.step_delay = clamp_speed(ms);
        Ok(view.step_delay)
      })
      .await
  }

  /// Records a run over a snapshot of the dataset and plays it.
  ///
  /// Returns once playback completes or is abandoned. A completed run becomes
  /// [`Visualizer::last_run`].
  #[instrument(level = "trace", skip(self), fields(algorithm = %self.algorithm))]
  pub async fn start(&self) -> Result<Playback, VisualizerError> {
    let algorithm = self.algorithm;
    let prepared = self.with_view(|view| {
      let dataset = view.dataset.clone().ok_or(VisualizerError::EmptyDataset)?;
      Ok((dataset, view.params.clone(), view.step_delay))
    });
    let recorded = prepared
      .and_then(|(dataset, params, delay)| Ok((Run::record(algorithm, &dataset, &params)?, delay)));
    let (run, delay) = match recorded {
      Ok(recorded) => recorded,
      Err(e) => return Err(self.report("start", e).await),
    };

    let guard = self.driver.try_begin()?;
    let run = Arc::new(run);
    let outcome = self
      .driver
      .play_run(guard, &run, delay, self.surface.as_ref())
      .await;
    if outcome.is_completed() && !self.driver.is_closed() {
      self.lock_view().last_run = Some(run);
    }
    Ok(outcome)
  }

  /// Re-plays the order changes of the last completed sort, highlights cleared.
  #[instrument(level = "trace", skip(self), fields(algorithm = %self.algorithm))]
  pub async fn replay(&self) -> Result<Playback, VisualizerError> {
    let algorithm = self.algorithm;
    let prepared = self.with_view(|view| {
      if !algorithm.supports_replay() {
        return Err(VisualizerError::ReplayUnsupported(algorithm));
      }
      let run = view.last_run.clone().ok_or(VisualizerError::NothingToReplay)?;
      Ok((run.history(), view.step_delay))
    });
    let (history, delay) = match prepared {
      Ok(prepared) => prepared,
      Err(e) => return Err(self.report("replay", e).await),
    };

    let guard = self.driver.try_begin()?;
    Ok(
      self
        .driver
        .play_replay(guard, &history, delay, self.surface.as_ref())
        .await,
    )
  }

  /// Abandons any active playback and retires the view; no further frames reach the
  /// surface.
  pub fn unmount(&self) {
    info!(algorithm = %self.algorithm, "view unmounted");
    self.driver.close();
    self.lock_view().last_run = None;
  }

  fn lock_view(&self) -> MutexGuard<'_, ViewState> {
    self.view.lock().unwrap_or_else(PoisonError::into_inner)
  }

  /// Runs `f` on the view unless it is unmounted or a run is active.
  fn with_view<T>(
    &self,
    f: impl FnOnce(&mut ViewState) -> Result<T, VisualizerError>,
  ) -> Result<T, VisualizerError> {
    if self.driver.is_closed() {
      return Err(VisualizerError::Unmounted);
    }
    if self.driver.is_running() {
      return Err(VisualizerError::RunInProgress);
    }
    f(&mut self.lock_view())
  }

  /// A gated mutation whose validation errors are shown on the surface.
  async fn control<T>(
    &self,
    op: &'static str,
    f: impl FnOnce(&mut ViewState) -> Result<T, VisualizerError> + Send,
  ) -> Result<T, VisualizerError> {
    let result = self.with_view(f);
    match result {
      Ok(value) => Ok(value),
      Err(e) => Err(self.report(op, e).await),
    }
  }

  async fn report(&self, op: &'static str, error: VisualizerError) -> VisualizerError {
    if error.is_validation() {
      warn!(op, algorithm = %self.algorithm, error = %error, "rejected");
      self.surface.on_validation_error(&error).await;
    }
    error
  }
}

fn random_values(algorithm: Algorithm, config: &VisualizerConfig) -> Result<Vec<i64>, VisualizerError> {
  let mut rng = rand::thread_rng();
  if algorithm.requires_sorted_input() {
    generate_random_sorted(config.array_len, config.max_value, &mut rng)
  } else {
    generate_random(config.array_len, config.max_value, &mut rng)
  }
}

fn require_array_view(algorithm: Algorithm) -> Result<(), VisualizerError> {
  if algorithm.uses_graph() {
    return Err(VisualizerError::DatasetMismatch {
      algorithm,
      expected: "graph",
      actual: "array",
    });
  }
  Ok(())
}

fn require_graph_view(algorithm: Algorithm) -> Result<(), VisualizerError> {
  if !algorithm.uses_graph() {
    return Err(VisualizerError::DatasetMismatch {
      algorithm,
      expected: "array",
      actual: "graph",
    });
  }
  Ok(())
}

/// The view's graph, created empty on first edit.
fn graph_mut(algorithm: Algorithm, view: &mut ViewState) -> Result<&mut Graph, VisualizerError> {
  require_graph_view(algorithm)?;
  if !matches!(view.dataset, Some(Dataset::Graph(_))) {
    view.dataset = Some(Dataset::Graph(Graph::new()));
  }
  match &mut view.dataset {
    Some(Dataset::Graph(graph)) => Ok(graph),
    _ => Err(VisualizerError::EmptyDataset),
  }
}

fn node_name(raw: &str) -> Result<NodeId, VisualizerError> {
  let name = raw.trim();
  if name.is_empty() {
    return Err(VisualizerError::InvalidInput(
      "node name must not be empty".to_string(),
    ));
  }
  Ok(name.to_string())
}
