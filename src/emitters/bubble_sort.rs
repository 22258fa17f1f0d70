//! Bubble sort.

use tracing::instrument;

use super::Trace;
use super::recorder::FrameRecorder;

/// Bubble sort without early exit: `n(n-1)/2` comparisons, one swap per inversion.
#[instrument(level = "trace", skip(input), fields(len = input.len()))]
pub fn bubble_sort(input: &[i64]) -> Trace {
  let mut values = input.to_vec();
  let mut rec = FrameRecorder::new();
  let n = values.len();
  for pass in 0..n.saturating_sub(1) {
    for j in 0..n - 1 - pass {
      rec.compare(
        &values,
        [j, j + 1],
        format!("Compare {} and {}", values[j], values[j + 1]),
      );
      if values[j] > values[j + 1] {
        values.swap(j, j + 1);
        rec.swap(
          &values,
          [j, j + 1],
          format!("Swap {} and {}", values[j + 1], values[j]),
        );
      }
    }
  }
  rec.finish()
}
