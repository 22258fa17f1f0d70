use crate::emitters::linear_search;

#[test]
fn stops_at_first_match() {
  let trace = linear_search(&[4, 7, 7, 1], 7);
  assert_eq!(trace.metrics.comparisons, 2);
  assert_eq!(trace.metrics.found, Some(true));
  let last = trace.frames.last().unwrap();
  assert_eq!(last.highlighted_indices(), vec![1]);
  assert_eq!(last.metrics.found, Some(true));
}

#[test]
fn miss_checks_every_index() {
  let trace = linear_search(&[4, 7, 1], 9);
  assert_eq!(trace.metrics.comparisons, 3);
  assert_eq!(trace.metrics.found, Some(false));
  assert!(trace.frames.iter().all(|f| f.metrics.found.is_none()));
}

#[test]
fn array_is_never_reordered() {
  let trace = linear_search(&[3, 1, 2], 2);
  assert!(trace.frames.iter().all(|f| f.values() == Some(&[3, 1, 2][..])));
}
