// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Evaluation of piecewise monotonic functions on intervals.
//!
//! A function is described by a `Monotonic` value: its scalar evaluation, its closed domain, its period (if any) and its critical points. Between two consecutive critical points the function is monotonic, so its image on an interval is spanned by the values at the interval bounds and the one-sided limits at the critical points it crosses. A critical point whose two limits agree is an extremum; otherwise it is a pole, where the function jumps between infinities and the image may split into two rays.
//!
//! ```rust
//! use interval::Interval;
//!
//! // tan crosses its pole at π/2: the image is two rays.
//! let image = Interval::range(1.0, 2.0).tan();
//! assert_eq!(image, Interval::inverted_range(2.0f64.tan(), 1.0f64.tan()));
//! ```

use crate::interval::{Interval, Repr};
use crate::scalar::{cmp, max, min};
use gcollections::ops::Union;

#[derive(Clone, Copy, Debug)]
pub struct Critical {
  /// Abscissa, an offset in `[0, period)` for periodic functions.
  pub at: f64,
  /// Limit of the function when approaching `at` from the left.
  pub left: f64,
  /// Limit of the function when approaching `at` from the right.
  pub right: f64
}

impl Critical
{
  pub const fn extremum(at: f64, value: f64) -> Critical {
    Critical { at: at, left: value, right: value }
  }

  pub const fn pole(at: f64, left: f64, right: f64) -> Critical {
    Critical { at: at, left: left, right: right }
  }

  pub fn is_pole(&self) -> bool {
    self.left != self.right
  }
}

pub struct Monotonic {
  pub name: &'static str,
  pub eval: fn(f64) -> f64,
  /// Closed domain `[d0, d1]`, operands are clipped to it.
  pub domain: (f64, f64),
  pub period: Option<f64>,
  /// Sorted by abscissa.
  pub critical: &'static [Critical],
  /// Direction of the first monotonic piece.
  pub increasing: bool,
  /// Image of the whole domain.
  pub range: fn() -> Interval
}

impl Monotonic
{
  pub fn apply(&self, x: &Interval) -> Interval {
    match x.repr() {
      Repr::Undefined => Interval::undefined(),
      Repr::Normal { low, high } => self.apply_range(low, high),
      Repr::Inverted { low, high } =>
        if self.is_single_piece() { self.apply_rays(low, high) }
        else {
          self.apply_range(f64::NEG_INFINITY, high)
            .union(&self.apply_range(low, f64::INFINITY))
        }
    }
  }

  fn is_single_piece(&self) -> bool {
    self.period.is_none() && self.critical.is_empty()
  }

  fn apply_range(&self, low: f64, high: f64) -> Interval {
    let (d0, d1) = self.domain;
    let low = max(low, d0);
    let high = min(high, d1);
    if low > high {
      return Interval::undefined();
    }
    if low == high {
      let y = (self.eval)(low);
      return if y.is_nan() { self.fallback(low, high) }
        else { Interval::point(y) };
    }
    if let Some(period) = self.period {
      if !low.is_finite() || !high.is_finite() || high - low >= period {
        return self.fallback(low, high);
      }
    }
    self.walk(low, high)
  }

  /// Union of the images of the monotonic pieces of `[low, high]`, left to right.
  fn walk(&self, low: f64, high: f64) -> Interval {
    let first = (self.eval)(low);
    let last = (self.eval)(high);
    if first.is_nan() || last.is_nan() {
      return self.fallback(low, high);
    }
    let slack = self.slack(low, high);
    let mut image = Interval::undefined();
    let mut piece = (first, first);
    for (at, c) in self.critical_points(low - slack, high + slack) {
      if c.is_pole() {
        // Near a bound the computed abscissa cannot place the pole, the branch of the bound value does.
        let near_low = at - low <= slack;
        let near_high = high - at <= slack;
        let crossed =
          (!near_low || first.signum() == c.left.signum())
          && (!near_high || last.signum() == c.right.signum());
        if crossed {
          piece = extend(piece, c.left);
          image = image.union(&Interval::range(piece.0, piece.1));
          piece = (c.right, c.right);
        }
      }
      else {
        piece = extend(piece, c.left);
      }
    }
    piece = extend(piece, last);
    image.union(&Interval::range(piece.0, piece.1))
  }

  /// Error bound on a periodic abscissa `at + k * period` computed near `[low, high]`. Aperiodic abscissae are exact.
  fn slack(&self, low: f64, high: f64) -> f64 {
    match self.period {
      Some(_) => 8.0 * f64::EPSILON * max(low.abs(), high.abs()),
      None => 0.0
    }
  }

  /// Critical points inside `[low, high]` with their abscissa, in increasing order.
  fn critical_points(&self, low: f64, high: f64) -> Vec<(f64, Critical)> {
    let mut points: Vec<(f64, Critical)> = match self.period {
      None => self.critical.iter()
        .filter(|c| low <= c.at && c.at <= high)
        .map(|c| (c.at, *c))
        .collect(),
      // The window is narrower than two periods. The neighbouring periods absorb a quotient rounded across an integer.
      Some(period) => self.critical.iter()
        .flat_map(|c| {
          let at = c.at + ((low - c.at) / period).ceil() * period;
          vec![(at - period, *c), (at, *c), (at + period, *c)]
        })
        .filter(|&(at, _)| low <= at && at <= high)
        .collect()
    };
    points.sort_by(|a, b| cmp(a.0, b.0));
    points
  }

  /// Two-ray operand `(-∞, high] ∪ [low, +∞)` of a function with a single monotonic piece. Each ray is clamped into the domain and the shape is kept.
  fn apply_rays(&self, low: f64, high: f64) -> Interval {
    let (d0, d1) = self.domain;
    let lower_ray_in = high >= d0;
    let upper_ray_in = low <= d1;
    if !lower_ray_in && !upper_ray_in {
      Interval::undefined()
    }
    else if (upper_ray_in && low <= d0) || (lower_ray_in && high >= d1) {
      self.apply_range(d0, d1)
    }
    else {
      let a = (self.eval)(clamp(high, d0, d1));
      let b = (self.eval)(clamp(low, d0, d1));
      if self.increasing { Interval::inverted_range(a, b) }
      else { Interval::inverted_range(b, a) }
    }
  }

  fn fallback(&self, low: f64, high: f64) -> Interval {
    trace!("{} over [{}, {}] widened to its full range", self.name, low, high);
    (self.range)()
  }
}

fn extend(piece: (f64, f64), y: f64) -> (f64, f64) {
  (min(piece.0, y), max(piece.1, y))
}

fn clamp(x: f64, low: f64, high: f64) -> f64 {
  max(low, min(x, high))
}

#[allow(non_upper_case_globals)]
#[cfg(test)]
mod tests {
  use super::*;

  const inf: f64 = std::f64::INFINITY;

  static TRIANGLE_CRITICAL: [Critical; 2] = [
    Critical::extremum(1.0, 1.0),
    Critical::extremum(3.0, -1.0)
  ];

  fn unit() -> Interval {
    Interval::range(-1.0, 1.0)
  }

  fn cube_image() -> Interval {
    Interval::range(-2.0, 2.0)
  }

  fn triangle(x: f64) -> f64 {
    let t = x.rem_euclid(4.0);
    if t <= 1.0 { t }
    else if t <= 3.0 { 2.0 - t }
    else { t - 4.0 }
  }

  static TRIANGLE: Monotonic = Monotonic {
    name: "triangle",
    eval: triangle,
    domain: (-inf, inf),
    period: Some(4.0),
    critical: &TRIANGLE_CRITICAL,
    increasing: true,
    range: unit
  };

  static STEP_CRITICAL: [Critical; 1] = [Critical::pole(0.0, inf, -inf)];

  fn step(x: f64) -> f64 {
    -1.0 / x
  }

  static RECIPROCAL: Monotonic = Monotonic {
    name: "-1/x",
    eval: step,
    domain: (-inf, inf),
    period: None,
    critical: &STEP_CRITICAL,
    increasing: true,
    range: Interval::whole
  };

  static CUBE: Monotonic = Monotonic {
    name: "cube root",
    eval: f64::cbrt,
    domain: (-8.0, 8.0),
    period: None,
    critical: &[],
    increasing: true,
    range: cube_image
  };

  #[test]
  fn periodic_pieces() {
    assert_eq!(TRIANGLE.apply(&Interval::range(0.0, 0.5)), Interval::range(0.0, 0.5));
    assert_eq!(TRIANGLE.apply(&Interval::range(0.5, 2.0)), Interval::range(0.0, 1.0));
    assert_eq!(TRIANGLE.apply(&Interval::range(0.5, 3.5)), Interval::range(-1.0, 1.0));
    assert_eq!(TRIANGLE.apply(&Interval::range(4.5, 6.0)), Interval::range(0.0, 1.0));
    assert_eq!(TRIANGLE.apply(&Interval::range(-3.5, -2.0)), Interval::range(0.0, 1.0));
  }

  #[test]
  fn period_exceeded_is_full_range() {
    assert_eq!(TRIANGLE.apply(&Interval::range(0.1, 4.2)), Interval::range(-1.0, 1.0));
    assert_eq!(TRIANGLE.apply(&Interval::range(0.0, inf)), Interval::range(-1.0, 1.0));
    assert_eq!(TRIANGLE.apply(&Interval::inverted_range(-1.0, 1.0)), Interval::range(-1.0, 1.0));
    assert_eq!(TRIANGLE.apply(&Interval::point(inf)), Interval::range(-1.0, 1.0));
  }

  #[test]
  fn crossing_a_pole_splits_the_image() {
    assert_eq!(RECIPROCAL.apply(&Interval::range(-1.0, 2.0)), Interval::inverted_range(-0.5, 1.0));
    assert_eq!(RECIPROCAL.apply(&Interval::range(1.0, 2.0)), Interval::range(-1.0, -0.5));
    // Pole on the lower bound, the bound value is right of it.
    assert_eq!(RECIPROCAL.apply(&Interval::range(0.0, 2.0)), Interval::range(-inf, -0.5));
  }

  #[test]
  fn domain_clipping() {
    assert_eq!(CUBE.apply(&Interval::range(-27.0, 1.0)), Interval::range(-2.0, 1.0));
    assert!(CUBE.apply(&Interval::range(9.0, 10.0)).is_undefined());
    assert_eq!(CUBE.apply(&Interval::range(8.0, 10.0)), Interval::point(2.0));
  }

  #[test]
  fn rays_of_single_piece_functions() {
    assert_eq!(CUBE.apply(&Interval::inverted_range(-1.0, 1.0)), Interval::inverted_range(-1.0, 1.0));
    assert_eq!(CUBE.apply(&Interval::inverted_range(-27.0, 1.0)), Interval::inverted_range(-2.0, 1.0));
    assert_eq!(CUBE.apply(&Interval::inverted_range(-27.0, -8.0)), Interval::range(-2.0, 2.0));
    assert!(CUBE.apply(&Interval::inverted_range(-9.0, 9.0)).is_undefined());
    assert!(CUBE.apply(&Interval::undefined()).is_undefined());
  }
}
