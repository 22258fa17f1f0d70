//! Top-down merge sort.

use tracing::instrument;

use super::Trace;
use super::recorder::FrameRecorder;
use crate::types::FrameKind;

/// Merge sort over inclusive ranges, splitting at `(left + right) / 2` and merging
/// stably (ties taken from the left half).
///
/// Every output write is a `Place` frame; each finished merge adds a `Merge` frame whose
/// annotation names both halves and the result.
#[instrument(level = "trace", skip(input), fields(len = input.len()))]
pub fn merge_sort(input: &[i64]) -> Trace {
  let mut values = input.to_vec();
  let mut rec = FrameRecorder::new();
  if let Some(last) = values.len().checked_sub(1) {
    sort_range(&mut values, 0, last, &mut rec);
  }
  rec.finish()
}

fn sort_range(values: &mut [i64], left: usize, right: usize, rec: &mut FrameRecorder) {
  if left >= right {
    return;
  }
  let mid = (left + right) / 2;
  sort_range(values, left, mid, rec);
  sort_range(values, mid + 1, right, rec);
  merge(values, left, mid, right, rec);
}

fn merge(values: &mut [i64], left: usize, mid: usize, right: usize, rec: &mut FrameRecorder) {
  let lower = values[left..=mid].to_vec();
  let upper = values[mid + 1..=right].to_vec();
  let (mut i, mut j, mut k) = (0, 0, left);

  while i < lower.len() && j < upper.len() {
    // `k` is the write slot; the left candidate may already be overwritten there.
    rec.compare(
      values,
      [k, mid + 1 + j],
      format!(
        "Compare {} and {} for index {k} (right candidate at index {})",
        lower[i],
        upper[j],
        mid + 1 + j
      ),
    );
    let take = if lower[i] <= upper[j] {
      i += 1;
      lower[i - 1]
    } else {
      j += 1;
      upper[j - 1]
    };
    place(values, k, take, rec);
    k += 1;
  }
  for &value in lower[i..].iter().chain(&upper[j..]) {
    place(values, k, value, rec);
    k += 1;
  }

  rec.metrics().record_merge();
  rec.array(
    FrameKind::Merge,
    values,
    left..=right,
    format!(
      "Merged {lower:?} and {upper:?} into {:?}",
      &values[left..=right]
    ),
  );
}

fn place(values: &mut [i64], at: usize, value: i64, rec: &mut FrameRecorder) {
  values[at] = value;
  rec.metrics().record_write();
  rec.array(
    FrameKind::Place,
    values,
    [at],
    format!("Write {value} at index {at}"),
  );
}
