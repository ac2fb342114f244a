// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Named intervals.
//!
//! The multiples of π are points at the nearest `f64`, they are not enclosures of the real constant.

use crate::interval::Interval;
use num_traits::{Float, FloatConst};

pub fn zero() -> Interval {
  Interval::zero()
}

pub fn one() -> Interval {
  Interval::point(1.0)
}

pub fn whole() -> Interval {
  Interval::whole()
}

pub fn undefined() -> Interval {
  Interval::undefined()
}

pub fn pi() -> Interval {
  Interval::point(f64::PI())
}

pub fn pi_half() -> Interval {
  Interval::point(f64::FRAC_PI_2())
}

pub fn two_pi() -> Interval {
  Interval::point(2.0 * f64::PI())
}

/// The point `+∞`, reciprocal of `zero()`.
pub fn positive_infinity() -> Interval {
  Interval::point(f64::infinity())
}

pub fn negative_infinity() -> Interval {
  Interval::point(f64::neg_infinity())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn classification() {
    assert!(zero().is_zero());
    assert!(one().is_point());
    assert!(whole().is_whole());
    assert!(undefined().is_undefined());
    assert!(!positive_infinity().is_finite());
    assert!(positive_infinity().is_point());
    assert!(!negative_infinity().has_zero());
  }

  #[test]
  fn multiples_of_pi() {
    assert_eq!(pi_half() + pi_half(), pi());
    assert_eq!(pi() * Interval::point(2.0), two_pi());
    assert_eq!(pi().sin(), zero());
    assert_eq!(pi_half().cos(), zero());
  }

  #[test]
  fn reciprocals_of_zero_and_infinity() {
    assert_eq!(zero().multiplicative_inverse(), positive_infinity());
    assert_eq!(positive_infinity().multiplicative_inverse(), zero());
    assert_eq!(negative_infinity().multiplicative_inverse(), zero());
    assert_eq!(one() / zero(), positive_infinity());
  }
}
