//! Linear search.

use tracing::instrument;

use super::Trace;
use super::recorder::FrameRecorder;

/// Checks each index in order, stopping at the first match.
///
/// The matching frame already reports `found = Some(true)`; a miss leaves `found` unset
/// on every frame and `Some(false)` in the terminal metrics.
#[instrument(level = "trace", skip(input), fields(len = input.len()))]
pub fn linear_search(input: &[i64], target: i64) -> Trace {
  let mut rec = FrameRecorder::new();
  let mut found = false;
  for (i, &value) in input.iter().enumerate() {
    found = value == target;
    if found {
      rec.metrics().set_found(true);
    }
    let verdict = if found { "found" } else { "no match" };
    rec.compare(
      input,
      [i],
      format!("Check index {i}: {value} vs target {target}, {verdict}"),
    );
    if found {
      break;
    }
  }
  if !found {
    rec.metrics().set_found(false);
  }
  rec.finish()
}
