// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Rules on extended-real bounds.
//!
//! Bounds are `f64` values restricted to the finite doubles and the two infinities. NaN never reaches a bound: constructors turn it into the undefined interval, and the operations below resolve the indeterminate forms (`∞ - ∞`, `0 · ∞`) before IEEE arithmetic would produce it.

use num_traits::{Float, Zero};
use std::cmp::Ordering;

/// Total order on bounds. NaN is not a bound, it is ordered after `+∞` only to keep the function total.
pub fn cmp(a: f64, b: f64) -> Ordering {
  a.partial_cmp(&b).unwrap_or_else(|| {
    debug_assert!(false, "NaN compared as a bound ({} vs {}).", a, b);
    a.is_nan().cmp(&b.is_nan())
  })
}

pub fn min(a: f64, b: f64) -> f64 {
  if cmp(a, b) == Ordering::Greater { b } else { a }
}

pub fn max(a: f64, b: f64) -> f64 {
  if cmp(a, b) == Ordering::Less { b } else { a }
}

/// Sum of two lower bounds. `∞ - ∞` is indeterminate and resolved to `-∞`.
pub fn add_down(a: f64, b: f64) -> f64 {
  let sum = a + b;
  if sum.is_nan() {
    trace!("indeterminate lower bound {} + {} widened to -inf", a, b);
    f64::neg_infinity()
  }
  else { sum }
}

/// Sum of two upper bounds. `∞ - ∞` is indeterminate and resolved to `+∞`.
pub fn add_up(a: f64, b: f64) -> f64 {
  let sum = a + b;
  if sum.is_nan() {
    trace!("indeterminate upper bound {} + {} widened to +inf", a, b);
    f64::infinity()
  }
  else { sum }
}

/// Product under the rule of signs, with `0 · ±∞ = 0`: a zero bound is attained by a real zero, whose product with any real is zero.
pub fn mul(a: f64, b: f64) -> f64 {
  if a.is_zero() || b.is_zero() { 0.0 }
  else { a * b }
}

/// Reciprocal of a bound. The interval layer decides what a zero divisor means, so this is never asked for `1/0`.
pub fn recip(x: f64) -> f64 {
  debug_assert!(!x.is_zero(), "The reciprocal of a zero bound must be handled by the interval operation.");
  x.recip()
}

/// Position of a Normal range relative to zero, for the rule-of-signs matrix.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Sign {
  /// `0 ≤ low`
  NonNegative,
  /// `high ≤ 0` and `low < 0`
  NonPositive,
  /// `low < 0 < high`
  Mixed
}

impl Sign
{
  pub fn of(low: f64, high: f64) -> Sign {
    debug_assert!(low <= high);
    if low >= 0.0 { Sign::NonNegative }
    else if high <= 0.0 { Sign::NonPositive }
    else { Sign::Mixed }
  }
}
