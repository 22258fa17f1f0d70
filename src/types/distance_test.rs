//! Tests for `Distance`.

use super::Distance;

#[test]
fn finite_orders_before_unreachable() {
  assert!(Distance::Finite(u64::MAX) < Distance::Unreachable);
  assert!(Distance::Finite(1) < Distance::Finite(2));
}

#[test]
fn plus() {
  assert_eq!(Distance::Finite(3).plus(4), Distance::Finite(7));
  assert_eq!(Distance::Unreachable.plus(4), Distance::Unreachable);
  assert_eq!(Distance::Finite(u64::MAX).plus(1), Distance::Finite(u64::MAX));
}

#[test]
fn display() {
  assert_eq!(Distance::Finite(4).to_string(), "4");
  assert_eq!(Distance::Unreachable.to_string(), "∞");
}

#[test]
fn reachability() {
  assert!(Distance::Finite(0).is_reachable());
  assert!(!Distance::Unreachable.is_reachable());
  assert_eq!(Distance::Finite(9).value(), Some(9));
  assert_eq!(Distance::Unreachable.value(), None);
}

#[test]
fn serializes_tagged() {
  assert_eq!(
    serde_json::to_value(Distance::Finite(3)).unwrap(),
    serde_json::json!({"finite": 3})
  );
  assert_eq!(
    serde_json::to_value(Distance::Unreachable).unwrap(),
    serde_json::json!("unreachable")
  );
}
