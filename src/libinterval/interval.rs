// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Closed intervals over the extended reals.
//!
//! An interval is one of three shapes:
//!
//! * a *normal* interval `[low, high]`, possibly a point, possibly unbounded on either side,
//! * an *inverted* interval `(-∞, high] ∪ [low, +∞)` with `low > high`, the two rays left once the open gap `(high, low)` is removed from the line,
//! * the *undefined* interval, the empty set.
//!
//! The inverted shape is what a reciprocal or a function crossing a pole produces: `1/[-1, 2]` is `(-∞, -1] ∪ [0.5, +∞)`, which no single closed range describes tightly.
//!
//! Constructors never fail: out-of-order bounds are swapped, NaN bounds give the undefined interval and an inverted range without gap is the whole line.
//!
//! # Examples
//!
//! ```rust
//! use interval::Interval;
//!
//! let a = Interval::range(-1.0, 2.0);
//! let inverse = a.multiplicative_inverse();
//! assert!(inverse.is_inverted());
//! assert_eq!(inverse, Interval::inverted_range(-1.0, 0.5));
//! assert_eq!(Interval::range(4.0, 1.0), Interval::range(1.0, 4.0));
//! assert!(Interval::range(-4.0, -1.0).sqrt().is_undefined());
//! ```

use crate::ops::{Range, Whole, Width};
use gcollections::kind::*;
use gcollections::ops::{Bounded, Empty, IsEmpty, IsSingleton, Singleton};
use num_traits::Float;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Error, Formatter};
use trilean::SKleene;

/// Internal shape of an interval. Every operation matches it exhaustively.
#[derive(Clone, Copy, Debug)]
pub(crate) enum Repr {
  Normal { low: f64, high: f64 },
  Inverted { low: f64, high: f64 },
  Undefined
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(from = "Wire", into = "Wire")]
pub struct Interval {
  repr: Repr
}

impl Interval
{
  /// The point interval `[x, x]`.
  pub fn point(x: f64) -> Interval {
    if x.is_nan() { Interval::undefined() }
    else { Interval::normal(x, x) }
  }

  /// The interval `[low, high]`, bounds are swapped if given in the wrong order.
  pub fn range(low: f64, high: f64) -> Interval {
    if low.is_nan() || high.is_nan() { Interval::undefined() }
    else if low > high { Interval::normal(high, low) }
    else { Interval::normal(low, high) }
  }

  /// The set `(-∞, a] ∪ [b, +∞)`. When `a >= b` the two rays cover the line and the result is `whole()`.
  pub fn inverted_range(a: f64, b: f64) -> Interval {
    if a.is_nan() || b.is_nan() { Interval::undefined() }
    else if a < b { Interval::inverted(b, a) }
    else { Interval::whole() }
  }

  pub fn undefined() -> Interval {
    Interval { repr: Repr::Undefined }
  }

  pub fn whole() -> Interval {
    Interval::normal(f64::neg_infinity(), f64::infinity())
  }

  pub fn zero() -> Interval {
    Interval::normal(0.0, 0.0)
  }

  pub(crate) fn normal(low: f64, high: f64) -> Interval {
    debug_assert!(low <= high, "Normal interval with misordered or NaN bounds [{}, {}].", low, high);
    Interval { repr: Repr::Normal { low: low, high: high } }
  }

  /// Rays `(-∞, high] ∪ [low, +∞)`.
  pub(crate) fn inverted(low: f64, high: f64) -> Interval {
    debug_assert!(low > high, "Inverted interval without gap ({}, {}).", high, low);
    Interval { repr: Repr::Inverted { low: low, high: high } }
  }

  pub(crate) fn repr(&self) -> Repr {
    self.repr
  }

  /// Lower bound. For an inverted interval, the start of the upper ray `[low, +∞)`. NaN if undefined.
  pub fn low(&self) -> f64 {
    match self.repr {
      Repr::Normal { low, .. } | Repr::Inverted { low, .. } => low,
      Repr::Undefined => f64::nan()
    }
  }

  /// Upper bound. For an inverted interval, the end of the lower ray `(-∞, high]`. NaN if undefined.
  pub fn high(&self) -> f64 {
    match self.repr {
      Repr::Normal { high, .. } | Repr::Inverted { high, .. } => high,
      Repr::Undefined => f64::nan()
    }
  }

  pub fn is_undefined(&self) -> bool {
    match self.repr {
      Repr::Undefined => true,
      _ => false
    }
  }

  pub fn is_inverted(&self) -> bool {
    match self.repr {
      Repr::Inverted { .. } => true,
      _ => false
    }
  }

  /// Exactly the point `0`. Use the tolerance comparison for "nearly zero".
  pub fn is_zero(&self) -> bool {
    match self.repr {
      Repr::Normal { low, high } => low == 0.0 && high == 0.0,
      _ => false
    }
  }

  pub fn is_whole(&self) -> bool {
    match self.repr {
      Repr::Normal { low, high } => low == f64::neg_infinity() && high == f64::infinity(),
      _ => false
    }
  }

  pub fn is_point(&self) -> bool {
    match self.repr {
      Repr::Normal { low, high } => low == high,
      _ => false
    }
  }

  /// Both bounds finite, so the interval is a bounded range.
  pub fn is_finite(&self) -> bool {
    match self.repr {
      Repr::Normal { low, high } => low.is_finite() && high.is_finite(),
      _ => false
    }
  }

  /// `0` is a member of the set.
  pub fn has_zero(&self) -> bool {
    match self.repr {
      Repr::Normal { low, high } => low <= 0.0 && 0.0 <= high,
      Repr::Inverted { low, high } => high >= 0.0 || low <= 0.0,
      Repr::Undefined => false
    }
  }

  /// Every member is strictly positive (`True`), none is (`False`), or both kinds are present (`Unknown`). The empty set answers `Unknown`.
  pub fn is_positive(&self) -> SKleene {
    match self.repr {
      Repr::Normal { low, high } =>
        if low > 0.0 { SKleene::True }
        else if high <= 0.0 { SKleene::False }
        else { SKleene::Unknown },
      Repr::Inverted { .. } | Repr::Undefined => SKleene::Unknown
    }
  }

  /// Same as `is_positive` for strictly negative members.
  pub fn is_negative(&self) -> SKleene {
    (-*self).is_positive()
  }

  /// Whether every member of `self` is strictly less than every member of `other`.
  pub fn less_than(&self, other: &Interval) -> SKleene {
    match (self.repr, other.repr) {
      (Repr::Normal { low: l1, high: h1 }, Repr::Normal { low: l2, high: h2 }) =>
        if h1 < l2 { SKleene::True }
        else if l1 >= h2 { SKleene::False }
        else { SKleene::Unknown },
      _ => SKleene::Unknown
    }
  }
}

impl Width for Interval
{
  /// `high - low` for a normal interval, `+∞` for an inverted one and `0` for the empty set.
  fn width(&self) -> f64 {
    match self.repr {
      Repr::Normal { low, high } =>
        if low == high { 0.0 }
        else { high - low },
      Repr::Inverted { .. } => f64::infinity(),
      Repr::Undefined => 0.0
    }
  }
}

impl Collection for Interval
{
  type Item = f64;
}

impl Range for Interval
{
  fn new(low: f64, high: f64) -> Interval {
    Interval::range(low, high)
  }
}

impl Whole for Interval
{
  fn whole() -> Interval {
    Interval::whole()
  }
}

impl Bounded for Interval
{
  fn lower(&self) -> f64 {
    debug_assert!(!self.is_undefined(), "Cannot access lower bound on undefined interval.");
    self.low()
  }

  fn upper(&self) -> f64 {
    debug_assert!(!self.is_undefined(), "Cannot access upper bound on undefined interval.");
    self.high()
  }
}

impl Singleton for Interval
{
  fn singleton(x: f64) -> Interval {
    Interval::point(x)
  }
}

impl Empty for Interval
{
  fn empty() -> Interval {
    Interval::undefined()
  }
}

impl IsSingleton for Interval
{
  fn is_singleton(&self) -> bool {
    self.is_point()
  }
}

impl IsEmpty for Interval
{
  fn is_empty(&self) -> bool {
    self.is_undefined()
  }
}

pub trait ToInterval
{
  fn to_interval(self) -> Interval;
}

impl ToInterval for Interval
{
  fn to_interval(self) -> Interval { self }
}

impl ToInterval for (f64, f64)
{
  fn to_interval(self) -> Interval {
    let (a, b) = self;
    Interval::range(a, b)
  }
}

impl ToInterval for ()
{
  fn to_interval(self) -> Interval {
    Interval::undefined()
  }
}

impl ToInterval for f64
{
  fn to_interval(self) -> Interval {
    Interval::point(self)
  }
}

impl From<f64> for Interval
{
  fn from(x: f64) -> Interval {
    x.to_interval()
  }
}

impl From<(f64, f64)> for Interval
{
  fn from(bounds: (f64, f64)) -> Interval {
    bounds.to_interval()
  }
}

impl Display for Interval
{
  fn fmt(&self, formatter: &mut Formatter) -> Result<(), Error> {
    match self.repr {
      Repr::Normal { low, high } => formatter.write_fmt(format_args!("[{}, {}]", low, high)),
      Repr::Inverted { low, high } => formatter.write_fmt(format_args!("(-inf, {}] U [{}, inf)", high, low)),
      Repr::Undefined => formatter.write_str("undefined")
    }
  }
}

/// Serialized form. Inverted intervals are written as the ends of their gap, in the argument order of `Interval::inverted_range`.
#[derive(Clone, Copy, Serialize, Deserialize)]
#[serde(rename = "Interval")]
enum Wire {
  Normal(f64, f64),
  Inverted(f64, f64),
  Undefined
}

impl From<Interval> for Wire
{
  fn from(i: Interval) -> Wire {
    match i.repr {
      Repr::Normal { low, high } => Wire::Normal(low, high),
      Repr::Inverted { low, high } => Wire::Inverted(high, low),
      Repr::Undefined => Wire::Undefined
    }
  }
}

impl From<Wire> for Interval
{
  fn from(wire: Wire) -> Interval {
    match wire {
      Wire::Normal(low, high) => Interval::range(low, high),
      Wire::Inverted(a, b) => Interval::inverted_range(a, b),
      Wire::Undefined => Interval::undefined()
    }
  }
}
