// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Exact set relations and sound set constructions on intervals.
//!
//! `Contains`, `Subset`, `Overlap` and `Disjoint` are exact: no tolerance is applied, so they are the ones to use for visibility or pruning decisions. `Union` and `Intersection` return the tightest interval of the three shapes that contains the true set; when the true set has more holes than an inverted interval can express, the widest hole is kept.

use crate::interval::{Interval, Repr};
use crate::ops::Hull;
use crate::scalar::{max, min};
use gcollections::ops::{Contains, Disjoint, Intersection, Overlap, Subset, Union};

impl Contains for Interval
{
  fn contains(&self, value: &f64) -> bool {
    let x = *value;
    match self.repr() {
      Repr::Normal { low, high } => low <= x && x <= high,
      Repr::Inverted { low, high } => x <= high || x >= low,
      Repr::Undefined => false
    }
  }
}

impl Subset for Interval
{
  fn is_subset(&self, other: &Interval) -> bool {
    use self::Repr::*;
    match (self.repr(), other.repr()) {
      (Undefined, _) => true,
      (_, Undefined) => false,
      (Normal { low: l1, high: h1 }, Normal { low: l2, high: h2 }) => l2 <= l1 && h1 <= h2,
      (Normal { low: l, high: h }, Inverted { low: gap_high, high: gap_low }) => h <= gap_low || l >= gap_high,
      (Inverted { .. }, Normal { .. }) => other.is_whole(),
      (Inverted { low: l1, high: h1 }, Inverted { low: l2, high: h2 }) => h1 <= h2 && l1 >= l2
    }
  }
}

impl Overlap for Interval
{
  fn overlap(&self, other: &Interval) -> bool {
    use self::Repr::*;
    match (self.repr(), other.repr()) {
      (Undefined, _) | (_, Undefined) => false,
      (Normal { low: l1, high: h1 }, Normal { low: l2, high: h2 }) => l1 <= h2 && l2 <= h1,
      (Normal { low: l, high: h }, Inverted { low: gap_high, high: gap_low })
    | (Inverted { low: gap_high, high: gap_low }, Normal { low: l, high: h }) => l <= gap_low || h >= gap_high,
      // Both contain the lower ray near -∞.
      (Inverted { .. }, Inverted { .. }) => true
    }
  }
}

impl Disjoint for Interval
{
  fn is_disjoint(&self, other: &Interval) -> bool {
    !self.overlap(other)
  }
}

impl Union for Interval
{
  type Output = Interval;

  fn union(&self, other: &Interval) -> Interval {
    use self::Repr::*;
    match (self.repr(), other.repr()) {
      (Undefined, _) => *other,
      (_, Undefined) => *self,
      (Normal { low: l1, high: h1 }, Normal { low: l2, high: h2 }) => union_ranges(l1, h1, l2, h2),
      (Normal { low: l, high: h }, Inverted { low: gap_high, high: gap_low })
    | (Inverted { low: gap_high, high: gap_low }, Normal { low: l, high: h }) =>
        fill_gap(gap_low, gap_high, l, h),
      (Inverted { low: l1, high: h1 }, Inverted { low: l2, high: h2 }) =>
        Interval::inverted_range(max(h1, h2), min(l1, l2))
    }
  }
}

fn union_ranges(l1: f64, h1: f64, l2: f64, h2: f64) -> Interval {
  if l1 <= h2 && l2 <= h1 {
    return Interval::normal(min(l1, l2), max(h1, h2));
  }
  let ((lo_l, lo_h), (hi_l, hi_h)) =
    if h1 < l2 { ((l1, h1), (l2, h2)) }
    else { ((l2, h2), (l1, h1)) };
  if lo_l == f64::NEG_INFINITY && hi_h == f64::INFINITY {
    Interval::inverted_range(lo_h, hi_l)
  }
  else {
    Interval::normal(lo_l, hi_h)
  }
}

/// Union of the rays around the gap `(gap_low, gap_high)` with `[l, h]`.
fn fill_gap(gap_low: f64, gap_high: f64, l: f64, h: f64) -> Interval {
  if h <= gap_low || l >= gap_high {
    Interval::inverted_range(gap_low, gap_high)
  }
  else if l <= gap_low && h >= gap_high {
    Interval::whole()
  }
  else if l <= gap_low {
    Interval::inverted_range(h, gap_high)
  }
  else if h >= gap_high {
    Interval::inverted_range(gap_low, l)
  }
  // `[l, h]` splits the gap in two, the widest part is kept.
  else if l - gap_low >= gap_high - h {
    Interval::inverted_range(gap_low, l)
  }
  else {
    Interval::inverted_range(h, gap_high)
  }
}

impl Intersection for Interval
{
  type Output = Interval;

  fn intersection(&self, other: &Interval) -> Interval {
    use self::Repr::*;
    match (self.repr(), other.repr()) {
      (Undefined, _) | (_, Undefined) => Interval::undefined(),
      (Normal { low: l1, high: h1 }, Normal { low: l2, high: h2 }) => meet(l1, h1, l2, h2),
      (Normal { low: l, high: h }, Inverted { low: gap_high, high: gap_low })
    | (Inverted { low: gap_high, high: gap_low }, Normal { low: l, high: h }) => {
        let below = meet(l, h, f64::NEG_INFINITY, gap_low);
        let above = meet(l, h, gap_high, f64::INFINITY);
        below.union(&above)
      }
      (Inverted { low: l1, high: h1 }, Inverted { low: l2, high: h2 }) => {
        let rays = Interval::inverted_range(min(h1, h2), max(l1, l2));
        let middle = meet(f64::NEG_INFINITY, h1, l2, f64::INFINITY)
          .union(&meet(l1, f64::INFINITY, f64::NEG_INFINITY, h2));
        rays.union(&middle)
      }
    }
  }
}

fn meet(l1: f64, h1: f64, l2: f64, h2: f64) -> Interval {
  let low = max(l1, l2);
  let high = min(h1, h2);
  if low <= high { Interval::normal(low, high) }
  else { Interval::undefined() }
}

impl Hull for Interval
{
  type Output = Interval;

  /// Smallest connected interval containing both operands.
  fn hull(&self, other: &Interval) -> Interval {
    use self::Repr::*;
    match (self.repr(), other.repr()) {
      (Undefined, Undefined) => Interval::undefined(),
      (Inverted { .. }, _) | (_, Inverted { .. }) => Interval::whole(),
      (Undefined, Normal { .. }) => *other,
      (Normal { .. }, Undefined) => *self,
      (Normal { low: l1, high: h1 }, Normal { low: l2, high: h2 }) =>
        Interval::normal(min(l1, l2), max(h1, h2))
    }
  }
}

#[allow(non_upper_case_globals)]
#[cfg(test)]
mod tests {
  use super::*;
  use crate::interval::ToInterval;

  const inf: f64 = std::f64::INFINITY;

  fn gap(a: f64, b: f64) -> Interval {
    Interval::inverted_range(a, b)
  }

  fn test_binary_op_sym<F>(test_id: String, a: Interval, b: Interval, op: F, expected: Interval) where
    F: Fn(&Interval, &Interval) -> Interval
  {
    let result = op(&a, &b);
    assert!(result == expected,
      "{} | {} op {} = {}, expected {}.", test_id, a, b, result, expected);
    let result = op(&b, &a);
    assert!(result == expected,
      "{} (sym) | {} op {} = {}, expected {}.", test_id, b, a, result, expected);
  }

  #[test]
  fn test_contains() {
    let cases = vec![
      (Interval::undefined(), vec![], vec![-1.0, 0.0, 1.0, inf]),
      ((1.0, 2.0).to_interval(), vec![1.0, 1.5, 2.0], vec![0.0, 2.5, -inf, inf]),
      (gap(-1.0, 1.0), vec![-1.0, 1.0, -5.0, 5.0, inf, -inf], vec![0.0, 0.5, -0.99]),
      (Interval::whole(), vec![-inf, 0.0, inf], vec![std::f64::NAN])
    ];
    for (i, inside, outside) in cases {
      for x in &inside {
        assert!(i.contains(x), "{} is not contained inside {}, but it should.", x, i);
      }
      for x in &outside {
        assert!(!i.contains(x), "{} is contained inside {}, but it should not.", x, i);
      }
    }
  }

  #[test]
  fn test_subset() {
    let cases = vec![
      (1, Interval::undefined(), Interval::undefined(), true),
      (2, Interval::undefined(), Interval::range(0.0, 1.0), true),
      (3, Interval::range(0.0, 1.0), Interval::undefined(), false),
      (4, Interval::range(0.0, 1.0), Interval::range(-1.0, 1.0), true),
      (5, Interval::range(-1.0, 1.0), Interval::range(0.0, 1.0), false),
      (6, Interval::range(2.0, inf), gap(-1.0, 1.0), true),
      (7, Interval::range(0.0, 2.0), gap(-1.0, 1.0), false),
      (8, gap(-1.0, 1.0), Interval::whole(), true),
      (9, gap(-1.0, 1.0), Interval::range(-1e300, 1e300), false),
      (10, gap(-2.0, 2.0), gap(-1.0, 1.0), true),
      (11, gap(-1.0, 1.0), gap(-2.0, 2.0), false)
    ];
    for (id, a, b, expected) in cases {
      assert_eq!(a.is_subset(&b), expected, "test #{} of subset: {} in {}", id, a, b);
    }
  }

  #[test]
  fn test_overlap() {
    let cases = vec![
      (1, Interval::undefined(), Interval::whole(), false),
      (2, Interval::range(0.0, 1.0), Interval::range(1.0, 2.0), true),
      (3, Interval::range(0.0, 1.0), Interval::range(1.5, 2.0), false),
      (4, Interval::range(-0.5, 0.5), gap(-1.0, 1.0), false),
      (5, Interval::range(-0.5, 1.0), gap(-1.0, 1.0), true),
      (6, gap(-1.0, 1.0), gap(5.0, 6.0), true)
    ];
    for (id, a, b, expected) in cases {
      assert_eq!(a.overlap(&b), expected, "test #{} of overlap", id);
      assert_eq!(b.overlap(&a), expected, "test #{} of overlap (sym)", id);
      assert_eq!(a.is_disjoint(&b), !expected, "test #{} of disjoint", id);
    }
  }

  #[test]
  fn test_union() {
    // The first number is the test id, the two intervals are the operands and the expected result is last.
    let sym_cases = vec![
      // identity tests
      (1, Interval::undefined(), Interval::undefined(), Interval::undefined()),
      (2, Interval::undefined(), Interval::range(1.0, 2.0), Interval::range(1.0, 2.0)),
      (3, Interval::undefined(), gap(1.0, 2.0), gap(1.0, 2.0)),
      // normal tests
      (4, Interval::range(1.0, 2.0), Interval::range(2.0, 3.0), Interval::range(1.0, 3.0)),
      (5, Interval::range(1.0, 2.0), Interval::range(5.0, 6.0), Interval::range(1.0, 6.0)),
      (6, Interval::range(-inf, -1.0), Interval::range(1.0, inf), gap(-1.0, 1.0)),
      (7, Interval::range(-inf, 1.0), Interval::range(1.0, inf), Interval::whole()),
      (8, Interval::range(-inf, -1.0), Interval::range(1.0, 2.0), Interval::range(-inf, 2.0)),
      // gap tests
      (9, gap(-1.0, 1.0), Interval::range(-3.0, -2.0), gap(-1.0, 1.0)),
      (10, gap(-1.0, 1.0), Interval::range(-2.0, 0.0), gap(0.0, 1.0)),
      (11, gap(-1.0, 1.0), Interval::range(0.5, 3.0), gap(-1.0, 0.5)),
      (12, gap(-1.0, 1.0), Interval::range(-1.0, 1.0), Interval::whole()),
      (13, gap(-1.0, 3.0), Interval::range(0.0, 0.5), gap(0.5, 3.0)),
      (14, gap(-3.0, 1.0), Interval::range(0.0, 0.5), gap(-3.0, 0.0)),
      (15, gap(-1.0, 1.0), gap(0.0, 2.0), gap(0.0, 1.0)),
      (16, gap(-1.0, 0.0), gap(0.0, 2.0), Interval::whole()),
    ];

    for (id, a, b, expected) in sym_cases {
      test_binary_op_sym(format!("test #{} of union", id), a, b, |x, y| x.union(y), expected);
    }
  }

  #[test]
  fn test_intersection() {
    let sym_cases = vec![
      (1, Interval::undefined(), Interval::whole(), Interval::undefined()),
      (2, Interval::range(1.0, 3.0), Interval::range(2.0, 4.0), Interval::range(2.0, 3.0)),
      (3, Interval::range(1.0, 2.0), Interval::range(3.0, 4.0), Interval::undefined()),
      (4, Interval::range(-0.5, 0.5), gap(-1.0, 1.0), Interval::undefined()),
      (5, Interval::range(0.0, 5.0), gap(-1.0, 1.0), Interval::range(1.0, 5.0)),
      (6, Interval::range(-2.0, 2.0), gap(-1.0, 1.0), Interval::range(-2.0, 2.0)),
      (7, Interval::whole(), gap(-1.0, 1.0), gap(-1.0, 1.0)),
      (8, gap(-1.0, 1.0), gap(-2.0, 0.0), gap(-2.0, 1.0)),
      (9, gap(-1.0, 1.0), gap(2.0, 3.0), gap(-1.0, 1.0)),
    ];

    for (id, a, b, expected) in sym_cases {
      test_binary_op_sym(format!("test #{} of intersection", id), a, b, |x, y| x.intersection(y), expected);
    }
  }
}
