//! Binary search over a sorted array.

use tracing::instrument;

use super::Trace;
use super::recorder::FrameRecorder;

/// Binary search on the inclusive range `[left, right]`.
///
/// Each midpoint probe is one comparison; its frame highlights the current bounds and
/// the midpoint. The caller guarantees `input` is sorted ascending.
#[instrument(level = "trace", skip(input), fields(len = input.len()))]
pub fn binary_search(input: &[i64], target: i64) -> Trace {
  let mut rec = FrameRecorder::new();
  let mut found = false;
  let mut left = 0usize;
  let mut right = input.len().checked_sub(1);

  while let Some(r) = right.filter(|&r| left <= r) {
    let mid = left + (r - left) / 2;
    let value = input[mid];
    found = value == target;
    if found {
      rec.metrics().set_found(true);
    }
    rec.compare(
      input,
      [left, mid, r],
      format!("Check middle index {mid} (range {left}..={r}): {value} vs target {target}"),
    );
    if found {
      break;
    }
    if value < target {
      left = mid + 1;
    } else {
      right = mid.checked_sub(1);
    }
  }
  if !found {
    rec.metrics().set_found(false);
  }
  rec.finish()
}
