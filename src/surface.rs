//! Display surfaces: where frames, metrics and errors are rendered.
//!
//! The engine never draws anything itself. A view hands its [`DisplaySurface`] to the
//! animation driver, which calls it once per frame. Two surfaces ship with the crate:
//! [`ChannelSurface`] forwards every event into a bounded channel consumed as a stream
//! (the CLI prints from it), and [`RecordingSurface`] keeps an in-memory event log.

use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;
use tracing::debug;

use crate::error::{ErrorKind, VisualizerError};
use crate::types::{Frame, Metrics};

/// Receives what a view shows.
#[async_trait]
pub trait DisplaySurface: Send + Sync {
  /// Render one frame.
  async fn on_frame(&self, frame: &Frame);

  /// Refresh the metrics panel.
  async fn on_metrics_update(&self, metrics: &Metrics);

  /// The run finished; `metrics` are terminal.
  async fn on_run_complete(&self, metrics: &Metrics);

  /// Show a validation warning. The view state is unchanged.
  async fn on_validation_error(&self, error: &VisualizerError);
}

/// One call made on a surface, as a value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ViewEvent {
  Frame(Frame),
  Metrics(Metrics),
  RunComplete(Metrics),
  ValidationError { kind: ErrorKind, message: String },
}

impl ViewEvent {
  fn validation(error: &VisualizerError) -> Self {
    ViewEvent::ValidationError {
      kind: error.kind(),
      message: error.to_string(),
    }
  }
}

/// Forwards events into a bounded mpsc channel.
///
/// Sending waits when the buffer is full, so a slow consumer paces playback. Events are
/// dropped once the receiving stream is gone.
#[derive(Debug, Clone)]
pub struct ChannelSurface {
  tx: mpsc::Sender<ViewEvent>,
}

impl ChannelSurface {
  /// Surface plus the stream of its events.
  pub fn new(buffer: usize) -> (Self, ReceiverStream<ViewEvent>) {
    let (tx, rx) = mpsc::channel(buffer.max(1));
    (Self { tx }, ReceiverStream::new(rx))
  }

  async fn send(&self, event: ViewEvent) {
    if self.tx.send(event).await.is_err() {
      debug!("view event receiver dropped");
    }
  }
}

#[async_trait]
impl DisplaySurface for ChannelSurface {
  async fn on_frame(&self, frame: &Frame) {
    self.send(ViewEvent::Frame(frame.clone())).await;
  }

  async fn on_metrics_update(&self, metrics: &Metrics) {
    self.send(ViewEvent::Metrics(metrics.clone())).await;
  }

  async fn on_run_complete(&self, metrics: &Metrics) {
    self.send(ViewEvent::RunComplete(metrics.clone())).await;
  }

  async fn on_validation_error(&self, error: &VisualizerError) {
    self.send(ViewEvent::validation(error)).await;
  }
}

/// Keeps every event in memory, in call order.
#[derive(Debug, Default)]
pub struct RecordingSurface {
  events: Mutex<Vec<ViewEvent>>,
}

impl RecordingSurface {
  pub fn new() -> Self {
    Self::default()
  }

  fn push(&self, event: ViewEvent) {
    self
      .events
      .lock()
      .unwrap_or_else(PoisonError::into_inner)
      .push(event);
  }

  /// Copy of the log.
  pub fn events(&self) -> Vec<ViewEvent> {
    self
      .events
      .lock()
      .unwrap_or_else(PoisonError::into_inner)
      .clone()
  }

  pub fn frames(&self) -> Vec<Frame> {
    self
      .events()
      .into_iter()
      .filter_map(|e| match e {
        ViewEvent::Frame(frame) => Some(frame),
        _ => None,
      })
      .collect()
  }

  /// Kinds of the validation errors shown so far.
  pub fn validation_errors(&self) -> Vec<ErrorKind> {
    self
      .events()
      .into_iter()
      .filter_map(|e| match e {
        ViewEvent::ValidationError { kind, .. } => Some(kind),
        _ => None,
      })
      .collect()
  }

  /// Terminal metrics of each completed run.
  pub fn completions(&self) -> Vec<Metrics> {
    self
      .events()
      .into_iter()
      .filter_map(|e| match e {
        ViewEvent::RunComplete(metrics) => Some(metrics),
        _ => None,
      })
      .collect()
  }

  pub fn clear(&self) {
    self
      .events
      .lock()
      .unwrap_or_else(PoisonError::into_inner)
      .clear();
  }
}

#[async_trait]
impl DisplaySurface for RecordingSurface {
  async fn on_frame(&self, frame: &Frame) {
    self.push(ViewEvent::Frame(frame.clone()));
  }

  async fn on_metrics_update(&self, metrics: &Metrics) {
    self.push(ViewEvent::Metrics(metrics.clone()));
  }

  async fn on_run_complete(&self, metrics: &Metrics) {
    self.push(ViewEvent::RunComplete(metrics.clone()));
  }

  async fn on_validation_error(&self, error: &VisualizerError) {
    self.push(ViewEvent::validation(error));
  }
}
