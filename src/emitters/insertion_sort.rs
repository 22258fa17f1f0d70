//! Insertion sort.

use tracing::instrument;

use super::Trace;
use super::recorder::FrameRecorder;
use crate::types::FrameKind;

/// Insertion sort with explicit shifts.
///
/// Each evaluated `a[j-1] > key` is one comparison; every shifted element is one write
/// and a `Shift` frame; placing the key closes the pass with a `Place` frame counted as
/// one swap and one write.
#[instrument(level = "trace", skip(input), fields(len = input.len()))]
pub fn insertion_sort(input: &[i64]) -> Trace {
  let mut values = input.to_vec();
  let mut rec = FrameRecorder::new();
  for i in 1..values.len() {
    let key = values[i];
    let mut j = i;
    while j > 0 {
      rec.compare(
        &values,
        [j - 1, j],
        format!("Compare {} with key {key}", values[j - 1]),
      );
      if values[j - 1] <= key {
        break;
      }
      values[j] = values[j - 1];
      rec.metrics().record_write();
      rec.array(
        FrameKind::Shift,
        &values,
        [j - 1, j],
        format!("Shift {} right", values[j]),
      );
      j -= 1;
    }
    values[j] = key;
    rec.metrics().record_swap();
    rec.metrics().record_write();
    rec.array(
      FrameKind::Place,
      &values,
      [j],
      format!("Insert {key} at index {j}"),
    );
  }
  rec.finish()
}
