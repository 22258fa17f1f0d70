//! View configuration: animation pace and random dataset shape.
//!
//! Defaults match the original pages (500 ms per step, ten values below 100). Each
//! value can be overridden by an environment variable.

use std::time::Duration;

use tracing::instrument;

use crate::error::VisualizerError;

/// Step delay override, in milliseconds.
pub const STEP_DELAY_ENV: &str = "ALGOVIZ_STEP_DELAY_MS";
/// Length of generated random arrays.
pub const ARRAY_LEN_ENV: &str = "ALGOVIZ_ARRAY_LEN";
/// Exclusive upper bound of generated values.
pub const MAX_VALUE_ENV: &str = "ALGOVIZ_MAX_VALUE";

pub const DEFAULT_STEP_DELAY_MS: u64 = 500;
pub const DEFAULT_ARRAY_LEN: usize = 10;
pub const DEFAULT_MAX_VALUE: i64 = 100;

/// Bounds of the speed control.
pub const MIN_SPEED_MS: u64 = 100;
pub const MAX_SPEED_MS: u64 = 2000;

/// Settings a [`crate::Visualizer`] starts with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisualizerConfig {
  /// Delay between frames; read once when a run starts.
  pub step_delay: Duration,
  pub array_len: usize,
  pub max_value: i64,
}

impl Default for VisualizerConfig {
  fn default() -> Self {
    Self {
      step_delay: Duration::from_millis(DEFAULT_STEP_DELAY_MS),
      array_len: DEFAULT_ARRAY_LEN,
      max_value: DEFAULT_MAX_VALUE,
    }
  }
}

impl VisualizerConfig {
  /// Defaults overridden by `ALGOVIZ_*` environment variables.
  pub fn from_env() -> Result<Self, VisualizerError> {
    Self::from_lookup(|key| std::env::var(key).ok())
  }

  /// Defaults overridden by whatever `lookup` returns for each `ALGOVIZ_*` key.
  #[instrument(level = "trace", skip(lookup))]
  pub fn from_lookup<F>(lookup: F) -> Result<Self, VisualizerError>
  where
    F: Fn(&str) -> Option<String>,
  {
    let mut config = Self::default();
    if let Some(ms) = parse_var::<u64, _>(&lookup, STEP_DELAY_ENV)? {
      config.step_delay = Duration::from_millis(ms);
    }
    if let Some(len) = parse_var::<usize, _>(&lookup, ARRAY_LEN_ENV)? {
      if len == 0 {
        return Err(invalid(ARRAY_LEN_ENV, "0"));
      }
      config.array_len = len;
    }
    if let Some(max) = parse_var::<i64, _>(&lookup, MAX_VALUE_ENV)? {
      if max <= 0 {
        return Err(invalid(MAX_VALUE_ENV, &max.to_string()));
      }
      config.max_value = max;
    }
    Ok(config)
  }
}

/// Speed-control value clamped to [`MIN_SPEED_MS`]..=[`MAX_SPEED_MS`].
pub fn clamp_speed(ms: u64) -> Duration {
  Duration::from_millis(ms.clamp(MIN_SPEED_MS, MAX_SPEED_MS))
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Result<Option<T>, VisualizerError>
where
  T: std::str::FromStr,
  F: Fn(&str) -> Option<String>,
{
  match lookup(key) {
    None => Ok(None),
    Some(raw) => raw
      .trim()
      .parse()
      .map(Some)
      .map_err(|_| invalid(key, &raw)),
  }
}

fn invalid(key: &str, value: &str) -> VisualizerError {
  VisualizerError::InvalidConfig {
    key: key.to_string(),
    value: value.to_string(),
  }
}
