//! Selection sort.

use tracing::instrument;

use super::Trace;
use super::recorder::FrameRecorder;
use crate::types::FrameKind;

/// Selection sort: a `Select` frame each time the running minimum moves, at most one
/// swap per pass.
#[instrument(level = "trace", skip(input), fields(len = input.len()))]
pub fn selection_sort(input: &[i64]) -> Trace {
  let mut values = input.to_vec();
  let mut rec = FrameRecorder::new();
  let n = values.len();
  for i in 0..n.saturating_sub(1) {
    let mut min = i;
    for j in i + 1..n {
      rec.compare(
        &values,
        [min, j],
        format!("Compare {} with current minimum {}", values[j], values[min]),
      );
      if values[j] < values[min] {
        min = j;
        rec.array(
          FrameKind::Select,
          &values,
          [i, min],
          format!("New minimum {} at index {min}", values[min]),
        );
      }
    }
    if min != i {
      values.swap(i, min);
      rec.swap(
        &values,
        [i, min],
        format!("Move {} into position {i}", values[i]),
      );
    }
  }
  rec.finish()
}
