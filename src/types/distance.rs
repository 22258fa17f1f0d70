//! Shortest-path distance: a finite weight sum or unreachable.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Tentative or final distance from the start node.
///
/// Orders every finite distance before `Unreachable`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Distance {
  Finite(u64),
  Unreachable,
}

impl Distance {
  pub fn is_reachable(self) -> bool {
    matches!(self, Distance::Finite(_))
  }

  pub fn value(self) -> Option<u64> {
    match self {
      Distance::Finite(d) => Some(d),
      Distance::Unreachable => None,
    }
  }

  /// `self + weight`, staying unreachable when `self` is.
  pub fn plus(self, weight: u64) -> Distance {
    match self {
      Distance::Finite(d) => Distance::Finite(d.saturating_add(weight)),
      Distance::Unreachable => Distance::Unreachable,
    }
  }
}

impl fmt::Display for Distance {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Distance::Finite(d) => write!(f, "{d}"),
      Distance::Unreachable => write!(f, "∞"),
    }
  }
}
