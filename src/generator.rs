//! Dataset generator: random arrays and lenient parsing of typed-in arrays.

use rand::Rng;
use tracing::{debug, instrument};

use crate::error::VisualizerError;

/// `n` integers drawn uniformly from `[0, max_value)`.
#[instrument(level = "trace", skip(rng))]
pub fn generate_random<R: Rng + ?Sized>(
  n: usize,
  max_value: i64,
  rng: &mut R,
) -> Result<Vec<i64>, VisualizerError> {
  if n == 0 {
    return Err(VisualizerError::InvalidInput(
      "array length must be at least 1".to_string(),
    ));
  }
  if max_value <= 0 {
    return Err(VisualizerError::InvalidInput(format!(
      "max value must be positive, got {max_value}"
    )));
  }
  Ok((0..n).map(|_| rng.gen_range(0..max_value)).collect())
}

/// Like [`generate_random`], in non-decreasing order (binary search input).
pub fn generate_random_sorted<R: Rng + ?Sized>(
  n: usize,
  max_value: i64,
  rng: &mut R,
) -> Result<Vec<i64>, VisualizerError> {
  let mut values = generate_random(n, max_value, rng)?;
  values.sort_unstable();
  Ok(values)
}

/// Parses `"12, 13, x, 14"` into `[12, 13, 14]`.
///
/// Tokens that are not integers are dropped; an input with no integer at all is an
/// [`VisualizerError::InvalidInput`].
#[instrument(level = "trace")]
pub fn parse_user_input(text: &str) -> Result<Vec<i64>, VisualizerError> {
  let mut dropped = 0usize;
  let values: Vec<i64> = text
    .split(',')
    .map(str::trim)
    .filter(|token| !token.is_empty())
    .filter_map(|token| match token.parse::<i64>() {
      Ok(v) => Some(v),
      Err(_) => {
        dropped += 1;
        None
      }
    })
    .collect();
  if dropped > 0 {
    debug!(dropped, "ignored non-integer tokens");
  }
  if values.is_empty() {
    return Err(VisualizerError::InvalidInput(
      "enter a comma-separated list of integers".to_string(),
    ));
  }
  Ok(values)
}

/// Returns true if `values` is in non-decreasing order.
pub fn is_sorted(values: &[i64]) -> bool {
  values.windows(2).all(|w| w[0] <= w[1])
}
