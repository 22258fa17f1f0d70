//! Animation driver: paces recorded frames onto a display surface.
//!
//! State machine `Idle -> Running -> Idle`, published on a `watch` channel. A run is
//! admitted by [`AnimationDriver::try_begin`], which hands out a [`RunGuard`]; the guard
//! flips the state back to `Idle` when playback ends, is abandoned, or the playing
//! future is dropped. Between frames the driver sleeps for the step delay, racing the
//! sleep against [`AnimationDriver::abandon`]. [`AnimationDriver::close`] is the sticky
//! form of abandon: once closed, the driver admits no further playback.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tracing::{debug, info, instrument};

use crate::error::VisualizerError;
use crate::surface::DisplaySurface;
use crate::types::{Frame, Metrics, Run};

/// Whether a view is animating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DriverState {
  Idle,
  Running,
}

/// How a playback ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Playback {
  /// Every frame was delivered.
  Completed { frames_delivered: usize },
  /// Stopped by [`AnimationDriver::abandon`]; nothing was delivered afterwards.
  Abandoned { frames_delivered: usize },
}

impl Playback {
  pub fn frames_delivered(&self) -> usize {
    match self {
      Playback::Completed { frames_delivered } | Playback::Abandoned { frames_delivered } => {
        *frames_delivered
      }
    }
  }

  pub fn is_completed(&self) -> bool {
    matches!(self, Playback::Completed { .. })
  }
}

/// Drives one view's playback. At most one playback is active at a time.
#[derive(Debug)]
pub struct AnimationDriver {
  state: watch::Sender<DriverState>,
  /// Bumped on every abandon; a playback stops when it sees a bump.
  abandon: watch::Sender<u64>,
  closed: AtomicBool,
}

impl Default for AnimationDriver {
  fn default() -> Self {
    Self::new()
  }
}

impl AnimationDriver {
  pub fn new() -> Self {
    let (state, _) = watch::channel(DriverState::Idle);
    let (abandon, _) = watch::channel(0);
    Self {
      state,
      abandon,
      closed: AtomicBool::new(false),
    }
  }

  pub fn state(&self) -> DriverState {
    *self.state.borrow()
  }

  pub fn is_running(&self) -> bool {
    self.state() == DriverState::Running
  }

  pub fn is_closed(&self) -> bool {
    self.closed.load(Ordering::SeqCst)
  }

  /// Receiver notified on every state change.
  pub fn subscribe(&self) -> watch::Receiver<DriverState> {
    self.state.subscribe()
  }

  /// Moves `Idle -> Running`, or fails with `RunInProgress` (`Unmounted` once closed).
  pub fn try_begin(&self) -> Result<RunGuard<'_>, VisualizerError> {
    if self.is_closed() {
      return Err(VisualizerError::Unmounted);
    }
    let admitted = self.state.send_if_modified(|state| {
      if *state == DriverState::Idle {
        *state = DriverState::Running;
        true
      } else {
        false
      }
    });
    if !admitted {
      return Err(VisualizerError::RunInProgress);
    }
    Ok(RunGuard {
      driver: self,
      abandoned: self.abandon.subscribe(),
    })
  }

  /// Stops the active playback at its next suspension point. No-op when idle.
  pub fn abandon(&self) {
    if self.is_running() {
      info!("abandoning playback");
      self.abandon.send_modify(|epoch| *epoch = epoch.wrapping_add(1));
    }
  }

  /// Abandons any active playback and refuses every later one.
  pub fn close(&self) {
    if !self.closed.swap(true, Ordering::SeqCst) {
      info!("driver closed");
    }
    self.abandon.send_modify(|epoch| *epoch = epoch.wrapping_add(1));
  }

  /// Plays a recorded run: each frame followed by its metrics, then the completion
  /// event with the terminal metrics.
  #[instrument(level = "trace", skip_all, fields(run_id = %run.id, algorithm = %run.algorithm))]
  pub async fn play_run(
    &self,
    guard: RunGuard<'_>,
    run: &Run,
    delay: Duration,
    surface: &dyn DisplaySurface,
  ) -> Playback {
    info!(frames = run.frames.len(), delay_ms = delay.as_millis() as u64, "playback started");
    self
      .play(guard, &run.frames, delay, surface, Some(&run.metrics))
      .await
  }

  /// Re-plays `frames` without metrics updates or a completion event.
  #[instrument(level = "trace", skip_all, fields(frames = frames.len()))]
  pub async fn play_replay(
    &self,
    guard: RunGuard<'_>,
    frames: &[Frame],
    delay: Duration,
    surface: &dyn DisplaySurface,
  ) -> Playback {
    info!("replay started");
    self.play(guard, frames, delay, surface, None).await
  }

  async fn play(
    &self,
    mut guard: RunGuard<'_>,
    frames: &[Frame],
    delay: Duration,
    surface: &dyn DisplaySurface,
    terminal: Option<&Metrics>,
  ) -> Playback {
    let delivered = deliver(&mut guard, frames, delay, surface, terminal.is_some()).await;
    drop(guard);
    match delivered {
      Ok(frames_delivered) => {
        if let Some(metrics) = terminal {
          surface.on_run_complete(metrics).await;
        }
        info!(frames_delivered, "playback completed");
        Playback::Completed { frames_delivered }
      }
      Err(frames_delivered) => {
        info!(frames_delivered, "playback abandoned");
        Playback::Abandoned { frames_delivered }
      }
    }
  }
}

/// Proof of admission; returns the driver to `Idle` on drop.
#[derive(Debug)]
pub struct RunGuard<'a> {
  driver: &'a AnimationDriver,
  abandoned: watch::Receiver<u64>,
}

impl RunGuard<'_> {
  pub(crate) fn is_abandoned(&self) -> bool {
    self.driver.is_closed() || self.abandoned.has_changed().unwrap_or(true)
  }

  /// Awaits a surface callback unless an abandon lands first.
  async fn surface_call(&mut self, call: impl Future<Output = ()>) -> bool {
    if self.is_abandoned() {
      return false;
    }
    tokio::select! {
      biased;
      _ = self.abandoned.changed() => false,
      _ = call => true,
    }
  }

  /// Sleeps for `delay`; false if abandoned first.
  async fn pause(&mut self, delay: Duration) -> bool {
    if delay.is_zero() {
      tokio::task::yield_now().await;
      return !self.is_abandoned();
    }
    let interrupted = tokio::select! {
      _ = tokio::time::sleep(delay) => false,
      _ = self.abandoned.changed() => true,
    };
    !interrupted && !self.is_abandoned()
  }
}

impl Drop for RunGuard<'_> {
  fn drop(&mut self) {
    self.driver.state.send_replace(DriverState::Idle);
  }
}

/// Delivers frames in order. `Err` carries the count delivered before an abandon.
async fn deliver(
  guard: &mut RunGuard<'_>,
  frames: &[Frame],
  delay: Duration,
  surface: &dyn DisplaySurface,
  with_metrics: bool,
) -> Result<usize, usize> {
  for (delivered, frame) in frames.iter().enumerate() {
    if guard.is_abandoned() {
      return Err(delivered);
    }
    debug!(step = frame.step, kind = %frame.kind, "frame");
    if !guard.surface_call(surface.on_frame(frame)).await {
      return Err(delivered);
    }
    if with_metrics && !guard.surface_call(surface.on_metrics_update(&frame.metrics)).await {
      return Err(delivered + 1);
    }
    if !guard.pause(delay).await {
      return Err(delivered + 1);
    }
  }
  Ok(frames.len())
}
