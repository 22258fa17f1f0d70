//! Quick sort, Lomuto partition.

use tracing::instrument;

use super::Trace;
use super::recorder::FrameRecorder;

/// Quick sort taking the last element of each range as pivot.
///
/// Every element checked against the pivot is a comparison; elements smaller than the
/// pivot are swapped into the low side (self-swaps included), and the pivot is swapped
/// into place at the end of each partition.
#[instrument(level = "trace", skip(input), fields(len = input.len()))]
pub fn quick_sort(input: &[i64]) -> Trace {
  let mut values = input.to_vec();
  let mut rec = FrameRecorder::new();
  if let Some(last) = values.len().checked_sub(1) {
    sort_range(&mut values, 0, last, &mut rec);
  }
  rec.finish()
}

fn sort_range(values: &mut [i64], low: usize, high: usize, rec: &mut FrameRecorder) {
  if low >= high {
    return;
  }
  let p = partition(values, low, high, rec);
  if p > low {
    sort_range(values, low, p - 1, rec);
  }
  sort_range(values, p + 1, high, rec);
}

fn partition(values: &mut [i64], low: usize, high: usize, rec: &mut FrameRecorder) -> usize {
  let pivot = values[high];
  let mut store = low;
  for j in low..high {
    rec.compare(
      values,
      [j, high],
      format!("Compare {} with pivot {pivot}", values[j]),
    );
    if values[j] < pivot {
      values.swap(store, j);
      rec.swap(
        values,
        [store, j],
        format!("Move {} below the pivot", values[store]),
      );
      store += 1;
    }
  }
  values.swap(store, high);
  rec.swap(
    values,
    [store, high],
    format!("Place pivot {pivot} at index {store}"),
  );
  store
}
