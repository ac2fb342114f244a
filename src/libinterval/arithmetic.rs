// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Algebraic operators: `+`, `-`, unary `-`, `*`, `/` and the multiplicative inverse.
//!
//! Every operator is total over the three shapes of both operands. Addition and negation keep the shape (an inverted sum whose gap closes becomes the whole line), the multiplicative inverse is the operator creating and removing inverted intervals, and division is multiplication by the inverse.
//!
//! ```rust
//! use interval::Interval;
//!
//! let a = Interval::range(1.0, 2.0);
//! let b = Interval::range(-1.0, 4.0);
//! assert_eq!(a + b, Interval::range(0.0, 6.0));
//! assert_eq!(a * b, Interval::range(-2.0, 8.0));
//! assert_eq!(a / b, Interval::inverted_range(-1.0, 0.25));
//! ```

use crate::interval::{Interval, Repr};
use crate::scalar::{add_down, add_up, max, min, mul, recip, Sign};
use gcollections::ops::Union;
use num_traits::{Float, Inv, One, Zero};
use std::ops::{Add, Div, Mul, Neg, Sub};

impl Interval
{
  /// `1/x` for every `x` in the set.
  ///
  /// A range straddling zero becomes an inverted interval, a zero bound sends the matching side to infinity, and the point `0` is sent to the point `+∞`, the value of the pole.
  pub fn multiplicative_inverse(&self) -> Interval {
    match self.repr() {
      Repr::Normal { low, high } =>
        if low == 0.0 && high == 0.0 { Interval::point(f64::infinity()) }
        else if low == 0.0 { Interval::normal(recip(high), f64::infinity()) }
        else if high == 0.0 { Interval::normal(f64::neg_infinity(), recip(low)) }
        else if low < 0.0 && high > 0.0 { Interval::inverted_range(recip(low), recip(high)) }
        else { Interval::normal(recip(high), recip(low)) },
      Repr::Inverted { low, high } =>
        if high < 0.0 && low > 0.0 { Interval::normal(recip(high), recip(low)) }
        else if high == 0.0 { Interval::normal(f64::neg_infinity(), recip(low)) }
        else if low == 0.0 { Interval::normal(recip(high), f64::infinity()) }
        // Zero lies inside one of the rays.
        else { Interval::inverted_range(recip(low), recip(high)) },
      Repr::Undefined => Interval::undefined()
    }
  }

  /// The two rays of an inverted interval as normal intervals, the interval itself otherwise.
  fn pieces(&self) -> [Interval; 2] {
    match self.repr() {
      Repr::Inverted { low, high } =>
        [Interval::normal(f64::neg_infinity(), high), Interval::normal(low, f64::infinity())],
      _ => [*self, Interval::undefined()]
    }
  }
}

fn mul_ranges(l1: f64, h1: f64, l2: f64, h2: f64) -> Interval {
  use crate::scalar::Sign::*;
  let (low, high) = match (Sign::of(l1, h1), Sign::of(l2, h2)) {
    (NonNegative, NonNegative) => (mul(l1, l2), mul(h1, h2)),
    (NonNegative, Mixed) => (mul(h1, l2), mul(h1, h2)),
    (NonNegative, NonPositive) => (mul(h1, l2), mul(l1, h2)),
    (Mixed, NonNegative) => (mul(l1, h2), mul(h1, h2)),
    (Mixed, Mixed) => (min(mul(l1, h2), mul(h1, l2)), max(mul(l1, l2), mul(h1, h2))),
    (Mixed, NonPositive) => (mul(h1, l2), mul(l1, l2)),
    (NonPositive, NonNegative) => (mul(l1, h2), mul(h1, l2)),
    (NonPositive, Mixed) => (mul(l1, h2), mul(l1, l2)),
    (NonPositive, NonPositive) => (mul(h1, h2), mul(l1, l2))
  };
  Interval::normal(low, high)
}

impl<'a> Neg for &'a Interval
{
  type Output = Interval;

  fn neg(self) -> Interval {
    match self.repr() {
      Repr::Normal { low, high } => Interval::normal(-high, -low),
      Repr::Inverted { low, high } => Interval::inverted(-high, -low),
      Repr::Undefined => Interval::undefined()
    }
  }
}

impl Neg for Interval
{
  type Output = Interval;

  fn neg(self) -> Interval {
    -&self
  }
}

impl<'a, 'b> Add<&'b Interval> for &'a Interval
{
  type Output = Interval;

  fn add(self, other: &Interval) -> Interval {
    use crate::interval::Repr::*;
    match (self.repr(), other.repr()) {
      (Undefined, _) | (_, Undefined) => Interval::undefined(),
      (Normal { low: l1, high: h1 }, Normal { low: l2, high: h2 }) =>
        Interval::normal(add_down(l1, l2), add_up(h1, h2)),
      // Each ray is shifted by the range, the gap shrinks by its width.
      (Inverted { low: gap_high, high: gap_low }, Normal { low, high })
    | (Normal { low, high }, Inverted { low: gap_high, high: gap_low }) =>
        Interval::inverted_range(add_up(gap_low, high), add_down(gap_high, low)),
      (Inverted { .. }, Inverted { .. }) => Interval::whole()
    }
  }
}

forward_all_binop!(impl Add for Interval, add);

impl<'a, 'b> Sub<&'b Interval> for &'a Interval
{
  type Output = Interval;

  fn sub(self, other: &Interval) -> Interval {
    self + &(-other)
  }
}

forward_all_binop!(impl Sub for Interval, sub);

impl<'a, 'b> Mul<&'b Interval> for &'a Interval
{
  type Output = Interval;

  /// Rule of signs on normal ranges. An inverted operand is split into its two rays and the partial products are united.
  fn mul(self, other: &Interval) -> Interval {
    use crate::interval::Repr::*;
    match (self.repr(), other.repr()) {
      (Undefined, _) | (_, Undefined) => Interval::undefined(),
      (Normal { low: l1, high: h1 }, Normal { low: l2, high: h2 }) => mul_ranges(l1, h1, l2, h2),
      _ => {
        let mut product = Interval::undefined();
        for a in self.pieces().iter() {
          for b in other.pieces().iter() {
            if let (Normal { low: l1, high: h1 }, Normal { low: l2, high: h2 }) = (a.repr(), b.repr()) {
              product = product.union(&mul_ranges(l1, h1, l2, h2));
            }
          }
        }
        product
      }
    }
  }
}

forward_all_binop!(impl Mul for Interval, mul);

impl<'a, 'b> Div<&'b Interval> for &'a Interval
{
  type Output = Interval;

  /// `self * (1 / other)`. The indeterminate `0 / 0` is undefined.
  fn div(self, other: &Interval) -> Interval {
    if self.is_zero() && other.is_zero() {
      Interval::undefined()
    }
    else {
      self * &other.multiplicative_inverse()
    }
  }
}

forward_all_binop!(impl Div for Interval, div);

impl Inv for Interval
{
  type Output = Interval;

  fn inv(self) -> Interval {
    self.multiplicative_inverse()
  }
}

impl<'a> Inv for &'a Interval
{
  type Output = Interval;

  fn inv(self) -> Interval {
    self.multiplicative_inverse()
  }
}

impl Zero for Interval
{
  fn zero() -> Interval {
    Interval::zero()
  }

  fn is_zero(&self) -> bool {
    Interval::is_zero(self)
  }
}

impl One for Interval
{
  fn one() -> Interval {
    Interval::point(1.0)
  }
}
