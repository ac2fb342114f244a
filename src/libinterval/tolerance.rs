// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Tolerance-aware equality.
//!
//! Bounds are computed without directed rounding, so a chain of operations drifts by a few ulps from its closed form. `PartialEq` on `Interval` compares with `Tolerance::default()`; call `approx_eq` to choose the thresholds. The exact relations (`Contains`, `Subset`, `Overlap`) live in `set_operations`.
//!
//! Two intervals are equal when they have the same shape and their bounds match. Bounds `a` and `b` match when `a == b` (this covers equal infinities) or when both are finite and `|a - b| <= absolute + relative * max(|a|, |b|)`. A normal interval whose bounds both lie in `[-zero, zero]` is also equal to the exact point `0`.

use crate::interval::{Interval, Repr};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tolerance {
  pub absolute: f64,
  pub relative: f64,
  /// Half-width under which a normal interval is indistinguishable from the point `0`.
  pub zero: f64
}

impl Tolerance
{
  pub const DEFAULT_ABSOLUTE: f64 = 1e-9;
  pub const DEFAULT_RELATIVE: f64 = 1e-9;
  /// Covers a fourth root of a `1e-6` neighbourhood of zero (`1e-6^(1/4) ≈ 0.0316`).
  pub const DEFAULT_ZERO: f64 = 0.05;

  /// Bitwise-equal bounds, without any zero neighbourhood.
  pub fn exact() -> Tolerance {
    Tolerance { absolute: 0.0, relative: 0.0, zero: 0.0 }
  }

  pub fn bounds_match(&self, a: f64, b: f64) -> bool {
    if a == b { true }
    else if a.is_finite() && b.is_finite() {
      (a - b).abs() <= self.absolute + self.relative * a.abs().max(b.abs())
    }
    else { false }
  }

  fn is_near_zero(&self, low: f64, high: f64) -> bool {
    low.abs() <= self.zero && high.abs() <= self.zero
  }
}

impl Default for Tolerance
{
  fn default() -> Tolerance {
    Tolerance {
      absolute: Tolerance::DEFAULT_ABSOLUTE,
      relative: Tolerance::DEFAULT_RELATIVE,
      zero: Tolerance::DEFAULT_ZERO
    }
  }
}

impl Interval
{
  pub fn approx_eq(&self, other: &Interval, tolerance: &Tolerance) -> bool {
    use self::Repr::*;
    match (self.repr(), other.repr()) {
      (Undefined, Undefined) => true,
      (Normal { low: l1, high: h1 }, Normal { low: l2, high: h2 }) =>
        (tolerance.bounds_match(l1, l2) && tolerance.bounds_match(h1, h2))
        || (self.is_zero() && tolerance.is_near_zero(l2, h2))
        || (other.is_zero() && tolerance.is_near_zero(l1, h1)),
      (Inverted { low: l1, high: h1 }, Inverted { low: l2, high: h2 }) =>
        tolerance.bounds_match(l1, l2) && tolerance.bounds_match(h1, h2),
      _ => false
    }
  }
}

/// Equality under `Tolerance::default()`.
///
/// It is not transitive near zero: `[0, 0.04]` and `[0, 0.03]` both equal `0` but differ from each other, and `point(0.04) == zero()`. Use `approx_eq` with `Tolerance::exact()` when an equivalence relation is needed.
impl PartialEq for Interval
{
  fn eq(&self, other: &Interval) -> bool {
    self.approx_eq(other, &Tolerance::default())
  }
}

#[allow(non_upper_case_globals)]
#[cfg(test)]
mod tests {
  use super::*;

  const inf: f64 = std::f64::INFINITY;

  #[test]
  fn rounding_noise_is_equal() {
    let a = Interval::range(0.1 + 0.2, 1.0);
    let b = Interval::range(0.3, 1.0);
    assert_eq!(a, b);
    assert!(!a.approx_eq(&b, &Tolerance::exact()));
    assert!(Interval::range(1e12, 2e12) == Interval::range(1e12 + 1.0, 2e12));
    assert!(Interval::range(0.0, 1.0) != Interval::range(0.0, 1.001));
  }

  #[test]
  fn infinite_bounds_compare_exactly() {
    assert_eq!(Interval::range(0.0, inf), Interval::range(0.0, inf));
    assert!(Interval::point(inf) != Interval::range(1e308, inf));
    assert!(Interval::range(-inf, 0.0) != Interval::range(0.0, inf));
  }

  #[test]
  fn shapes_must_match() {
    assert!(Interval::undefined() == Interval::undefined());
    assert!(Interval::undefined() != Interval::zero());
    assert!(Interval::whole() != Interval::undefined());
    assert!(Interval::inverted_range(-1.0, 1.0) != Interval::range(-1.0, 1.0));
    assert!(Interval::inverted_range(-1.0, 1.0) == Interval::inverted_range(-1.0, 1.0 + 1e-12));
  }

  #[test]
  fn zero_neighbourhood() {
    let fourth_root = Interval::range(0.0, 1e-6f64.sqrt().sqrt());
    assert_eq!(fourth_root, Interval::zero());
    assert_eq!(Interval::zero(), fourth_root);
    assert!(Interval::range(0.0, 0.1) != Interval::zero());
    assert!(Interval::range(0.0, 0.01) != Interval::range(0.0, 0.02));

    let strict = Tolerance { zero: 1e-3, .. Tolerance::default() };
    assert!(!fourth_root.approx_eq(&Interval::zero(), &strict));
  }

  #[test]
  fn zero_neighbourhood_is_not_transitive() {
    let a = Interval::range(0.0, 0.04);
    let b = Interval::range(0.0, 0.03);
    assert_eq!(a, Interval::zero());
    assert_eq!(Interval::zero(), b);
    assert!(a != b);
    assert_eq!(Interval::point(0.04), Interval::zero());
    assert!(!Interval::point(0.04).approx_eq(&Interval::zero(), &Tolerance::exact()));
  }

  #[test]
  fn tolerance_serialization_defaults() {
    use serde_test::{assert_de_tokens, Token};
    assert_de_tokens(&Tolerance { zero: 0.5, .. Tolerance::default() }, &[
      Token::Struct { name: "Tolerance", len: 1 },
      Token::Str("zero"),
      Token::F64(0.5),
      Token::StructEnd
    ]);
  }
}
