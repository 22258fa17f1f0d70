//! Tests for `driver`.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::{Instant, sleep};

use crate::driver::{AnimationDriver, DriverState, Playback};
use crate::error::VisualizerError;
use crate::surface::{RecordingSurface, ViewEvent};
use crate::types::{Algorithm, Dataset, Run, RunParams};

fn bubble_run() -> Run {
  Run::record(
    Algorithm::BubbleSort,
    &Dataset::Array(vec![5, 3, 8, 1]),
    &RunParams::default(),
  )
  .unwrap()
}

#[tokio::test(start_paused = true)]
async fn delivers_every_frame_then_completes() {
  let driver = AnimationDriver::new();
  let surface = RecordingSurface::new();
  let run = bubble_run();

  let guard = driver.try_begin().unwrap();
  assert_eq!(driver.state(), DriverState::Running);
  let outcome = driver
    .play_run(guard, &run, Duration::from_millis(100), &surface)
    .await;

  assert_eq!(
    outcome,
    Playback::Completed {
      frames_delivered: run.frame_count()
    }
  );
  assert_eq!(driver.state(), DriverState::Idle);
  assert_eq!(surface.frames(), run.frames);
  assert_eq!(surface.completions(), vec![run.metrics.clone()]);
}

#[tokio::test(start_paused = true)]
async fn frame_then_metrics_then_completion() {
  let driver = AnimationDriver::new();
  let surface = RecordingSurface::new();
  let run = bubble_run();
  let guard = driver.try_begin().unwrap();
  driver.play_run(guard, &run, Duration::ZERO, &surface).await;

  let events = surface.events();
  assert_eq!(events.len(), run.frame_count() * 2 + 1);
  for (pair, frame) in events.chunks(2).zip(&run.frames) {
    assert_eq!(pair[0], ViewEvent::Frame(frame.clone()));
    if let [_, second] = pair {
      assert_eq!(second, &ViewEvent::Metrics(frame.metrics.clone()));
    }
  }
  assert_eq!(
    events.last(),
    Some(&ViewEvent::RunComplete(run.metrics.clone()))
  );
}

#[tokio::test(start_paused = true)]
async fn delay_paces_frames() {
  let driver = AnimationDriver::new();
  let surface = RecordingSurface::new();
  let run = bubble_run();
  let started = Instant::now();
  let guard = driver.try_begin().unwrap();
  driver
    .play_run(guard, &run, Duration::from_millis(250), &surface)
    .await;
  assert!(started.elapsed() >= Duration::from_millis(250) * run.frame_count() as u32);
}

#[test]
fn second_begin_is_refused() {
  let driver = AnimationDriver::new();
  let guard = driver.try_begin().unwrap();
  assert_eq!(
    driver.try_begin().unwrap_err(),
    VisualizerError::RunInProgress
  );
  drop(guard);
  assert_eq!(driver.state(), DriverState::Idle);
  assert!(driver.try_begin().is_ok());
}

#[tokio::test(start_paused = true)]
async fn abandon_stops_delivery() {
  let driver = Arc::new(AnimationDriver::new());
  let surface = Arc::new(RecordingSurface::new());
  let run = bubble_run();
  let total = run.frame_count();

  let task = {
    let driver = Arc::clone(&driver);
    let surface = Arc::clone(&surface);
    tokio::spawn(async move {
      let guard = driver.try_begin().unwrap();
      driver
        .play_run(guard, &run, Duration::from_millis(100), surface.as_ref())
        .await
    })
  };

  sleep(Duration::from_millis(150)).await;
  driver.abandon();
  let outcome = task.await.unwrap();

  assert_eq!(outcome, Playback::Abandoned { frames_delivered: 2 });
  assert_eq!(surface.frames().len(), 2);
  assert!(surface.completions().is_empty());
  assert_eq!(driver.state(), DriverState::Idle);

  sleep(Duration::from_millis(100) * total as u32).await;
  assert_eq!(surface.frames().len(), 2);
}

#[test]
fn abandon_while_idle_does_not_poison_next_run() {
  let driver = AnimationDriver::new();
  driver.abandon();
  let guard = driver.try_begin().unwrap();
  assert!(!guard.is_abandoned());
}

#[tokio::test(start_paused = true)]
async fn replay_skips_metrics_and_completion() {
  let driver = AnimationDriver::new();
  let surface = RecordingSurface::new();
  let run = bubble_run();
  let history = run.history();
  let guard = driver.try_begin().unwrap();
  let outcome = driver
    .play_replay(guard, &history, Duration::from_millis(10), &surface)
    .await;

  assert!(outcome.is_completed());
  assert_eq!(outcome.frames_delivered(), history.len());
  assert_eq!(surface.events().len(), history.len());
  assert!(surface.completions().is_empty());
}

#[tokio::test(start_paused = true)]
async fn dropping_playback_returns_to_idle() {
  let driver = AnimationDriver::new();
  let surface = RecordingSurface::new();
  let run = bubble_run();
  let guard = driver.try_begin().unwrap();
  let playback = driver.play_run(guard, &run, Duration::from_secs(1), &surface);
  let _ = tokio::time::timeout(Duration::from_millis(1500), playback).await;
  assert_eq!(driver.state(), DriverState::Idle);
  assert_eq!(surface.frames().len(), 2);
}

#[tokio::test]
async fn state_changes_are_observable() {
  let driver = AnimationDriver::new();
  let mut rx = driver.subscribe();
  assert_eq!(*rx.borrow_and_update(), DriverState::Idle);
  let guard = driver.try_begin().unwrap();
  assert!(rx.has_changed().unwrap());
  assert_eq!(*rx.borrow_and_update(), DriverState::Running);
  drop(guard);
  assert_eq!(*rx.borrow_and_update(), DriverState::Idle);
}

#[tokio::test(start_paused = true)]
async fn playback_suspends_on_step_delay() {
  use tokio_test::{assert_pending, task};

  let driver = AnimationDriver::new();
  let surface = RecordingSurface::new();
  let run = bubble_run();
  let guard = driver.try_begin().unwrap();
  let mut playback = task::spawn(driver.play_run(guard, &run, Duration::from_secs(1), &surface));

  assert_pending!(playback.poll());
  assert_eq!(surface.frames().len(), 1);
  assert_eq!(surface.events().len(), 2);
  assert_eq!(driver.state(), DriverState::Running);

  drop(playback);
  assert_eq!(driver.state(), DriverState::Idle);
}

#[test]
fn closed_driver_refuses_playback() {
  let driver = AnimationDriver::new();
  driver.close();
  assert!(driver.is_closed());
  assert_eq!(driver.try_begin().unwrap_err(), VisualizerError::Unmounted);
  assert_eq!(driver.state(), DriverState::Idle);
}

#[tokio::test(start_paused = true)]
async fn close_stops_active_playback() {
  let driver = Arc::new(AnimationDriver::new());
  let surface = Arc::new(RecordingSurface::new());
  let run = bubble_run();

  let task = {
    let driver = Arc::clone(&driver);
    let surface = Arc::clone(&surface);
    tokio::spawn(async move {
      let guard = driver.try_begin().unwrap();
      driver
        .play_run(guard, &run, Duration::from_millis(100), surface.as_ref())
        .await
    })
  };

  sleep(Duration::from_millis(50)).await;
  driver.close();
  assert_eq!(task.await.unwrap(), Playback::Abandoned { frames_delivered: 1 });
  assert_eq!(surface.frames().len(), 1);
  assert!(driver.try_begin().is_err());
}

#[tokio::test(start_paused = true)]
async fn abandon_interrupts_a_blocked_surface() {
  use futures::StreamExt;

  use crate::surface::ChannelSurface;

  let driver = Arc::new(AnimationDriver::new());
  let (surface, events) = ChannelSurface::new(1);
  let run = bubble_run();
  let first = run.frames[0].clone();

  // Nobody reads the channel: the first frame fills the buffer and its metrics block.
  let task = {
    let driver = Arc::clone(&driver);
    tokio::spawn(async move {
      let guard = driver.try_begin().unwrap();
      driver
        .play_run(guard, &run, Duration::ZERO, &surface)
        .await
    })
  };

  sleep(Duration::from_millis(10)).await;
  assert_eq!(driver.state(), DriverState::Running);
  driver.abandon();
  assert_eq!(task.await.unwrap(), Playback::Abandoned { frames_delivered: 1 });

  let received: Vec<ViewEvent> = events.collect().await;
  assert_eq!(received, vec![ViewEvent::Frame(first)]);
}
