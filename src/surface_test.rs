//! Tests for `surface`.

use futures::StreamExt;

use crate::error::{ErrorKind, VisualizerError};
use crate::surface::{ChannelSurface, DisplaySurface, RecordingSurface, ViewEvent};
use crate::types::Metrics;

#[tokio::test]
async fn recording_keeps_call_order() {
  let surface = RecordingSurface::new();
  let metrics = Metrics {
    comparisons: 3,
    ..Metrics::default()
  };
  surface.on_metrics_update(&metrics).await;
  surface
    .on_validation_error(&VisualizerError::EmptyDataset)
    .await;
  surface.on_run_complete(&metrics).await;

  let events = surface.events();
  assert_eq!(events.len(), 3);
  assert_eq!(events[0], ViewEvent::Metrics(metrics.clone()));
  assert_eq!(surface.validation_errors(), vec![ErrorKind::EmptyDataset]);
  assert_eq!(surface.completions(), vec![metrics]);
  assert!(surface.frames().is_empty());

  surface.clear();
  assert!(surface.events().is_empty());
}

#[tokio::test]
async fn channel_forwards_events() {
  let (surface, mut stream) = ChannelSurface::new(4);
  surface
    .on_validation_error(&VisualizerError::InvalidGraph("bad".into()))
    .await;
  drop(surface);

  let event = stream.next().await.unwrap();
  assert_eq!(
    event,
    ViewEvent::ValidationError {
      kind: ErrorKind::InvalidGraph,
      message: "invalid graph: bad".into(),
    }
  );
  assert!(stream.next().await.is_none());
}

#[tokio::test]
async fn channel_ignores_dropped_receiver() {
  let (surface, stream) = ChannelSurface::new(1);
  drop(stream);
  surface.on_run_complete(&Metrics::default()).await;
}

#[test]
fn events_serialize_with_tag() {
  let json = serde_json::to_value(ViewEvent::ValidationError {
    kind: ErrorKind::UnsortedInput,
    message: "m".into(),
  })
  .unwrap();
  assert_eq!(json["event"], "validation_error");
  assert_eq!(json["kind"], "unsorted_input");
}
