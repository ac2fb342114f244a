// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Elementary functions on intervals.
//!
//! Every function is a `Monotonic` descriptor evaluated by the same walk over its monotonic pieces. Periodic functions give up on operands at least one period wide, or unbounded, and answer their full range.

use crate::interval::Interval;
use crate::monotonic::{Critical, Monotonic};
use std::f64::consts::{FRAC_PI_2, PI};

const INF: f64 = std::f64::INFINITY;
const TAU: f64 = 2.0 * PI;
const THREE_FRAC_PI_2: f64 = PI + FRAC_PI_2;

fn unit_range() -> Interval {
  Interval::range(-1.0, 1.0)
}

fn outside_unit() -> Interval {
  Interval::inverted_range(-1.0, 1.0)
}

fn non_negative() -> Interval {
  Interval::range(0.0, INF)
}

static SIN: Monotonic = Monotonic {
  name: "sin",
  eval: f64::sin,
  domain: (-INF, INF),
  period: Some(TAU),
  critical: &[
    Critical::extremum(FRAC_PI_2, 1.0),
    Critical::extremum(THREE_FRAC_PI_2, -1.0)
  ],
  increasing: true,
  range: unit_range
};

static COS: Monotonic = Monotonic {
  name: "cos",
  eval: f64::cos,
  domain: (-INF, INF),
  period: Some(TAU),
  critical: &[
    Critical::extremum(0.0, 1.0),
    Critical::extremum(PI, -1.0)
  ],
  increasing: false,
  range: unit_range
};

static TAN: Monotonic = Monotonic {
  name: "tan",
  eval: f64::tan,
  domain: (-INF, INF),
  period: Some(PI),
  critical: &[Critical::pole(FRAC_PI_2, INF, -INF)],
  increasing: true,
  range: Interval::whole
};

fn cot(x: f64) -> f64 {
  x.cos() / x.sin()
}

static COT: Monotonic = Monotonic {
  name: "cot",
  eval: cot,
  domain: (-INF, INF),
  period: Some(PI),
  critical: &[Critical::pole(0.0, -INF, INF)],
  increasing: false,
  range: Interval::whole
};

fn sec(x: f64) -> f64 {
  1.0 / x.cos()
}

static SEC: Monotonic = Monotonic {
  name: "sec",
  eval: sec,
  domain: (-INF, INF),
  period: Some(TAU),
  critical: &[
    Critical::extremum(0.0, 1.0),
    Critical::pole(FRAC_PI_2, INF, -INF),
    Critical::extremum(PI, -1.0),
    Critical::pole(THREE_FRAC_PI_2, -INF, INF)
  ],
  increasing: true,
  range: outside_unit
};

fn csc(x: f64) -> f64 {
  1.0 / x.sin()
}

static CSC: Monotonic = Monotonic {
  name: "csc",
  eval: csc,
  domain: (-INF, INF),
  period: Some(TAU),
  critical: &[
    Critical::pole(0.0, -INF, INF),
    Critical::extremum(FRAC_PI_2, 1.0),
    Critical::pole(PI, INF, -INF),
    Critical::extremum(THREE_FRAC_PI_2, -1.0)
  ],
  increasing: false,
  range: outside_unit
};

static SQRT: Monotonic = Monotonic {
  name: "sqrt",
  eval: f64::sqrt,
  domain: (0.0, INF),
  period: None,
  critical: &[],
  increasing: true,
  range: non_negative
};

static EXP: Monotonic = Monotonic {
  name: "exp",
  eval: f64::exp,
  domain: (-INF, INF),
  period: None,
  critical: &[],
  increasing: true,
  range: non_negative
};

static LN: Monotonic = Monotonic {
  name: "ln",
  eval: f64::ln,
  domain: (0.0, INF),
  period: None,
  critical: &[],
  increasing: true,
  range: Interval::whole
};

static ABS: Monotonic = Monotonic {
  name: "abs",
  eval: f64::abs,
  domain: (-INF, INF),
  period: None,
  critical: &[Critical::extremum(0.0, 0.0)],
  increasing: false,
  range: non_negative
};

fn square(x: f64) -> f64 {
  x * x
}

static SQUARE: Monotonic = Monotonic {
  name: "square",
  eval: square,
  domain: (-INF, INF),
  period: None,
  critical: &[Critical::extremum(0.0, 0.0)],
  increasing: false,
  range: non_negative
};

impl Interval
{
  /// Square root. Members below zero are dropped: `sqrt([-1, 4]) = [0, 2]` and `sqrt([-4, -1])` is undefined.
  ///
  /// The point `+∞`, the reciprocal of `0`, has the root `[0, +∞]`.
  pub fn sqrt(&self) -> Interval {
    if self.is_point() && self.low() == INF {
      non_negative()
    }
    else {
      SQRT.apply(self)
    }
  }

  pub fn sin(&self) -> Interval {
    SIN.apply(self)
  }

  pub fn cos(&self) -> Interval {
    COS.apply(self)
  }

  /// Tangent. An operand crossing a pole `π/2 + kπ` gives two rays, or the whole line if it crosses more than one.
  pub fn tan(&self) -> Interval {
    TAN.apply(self)
  }

  /// Cotangent, with poles at `kπ`.
  pub fn cot(&self) -> Interval {
    COT.apply(self)
  }

  /// Secant `1/cos`, its image is always inside `(-∞, -1] ∪ [1, +∞)`.
  pub fn sec(&self) -> Interval {
    SEC.apply(self)
  }

  /// Cosecant `1/sin`.
  pub fn csc(&self) -> Interval {
    CSC.apply(self)
  }

  pub fn exp(&self) -> Interval {
    EXP.apply(self)
  }

  /// Natural logarithm on `[0, +∞]`, with `ln(0) = -∞`.
  pub fn ln(&self) -> Interval {
    LN.apply(self)
  }

  pub fn abs(&self) -> Interval {
    ABS.apply(self)
  }

  pub fn square(&self) -> Interval {
    SQUARE.apply(self)
  }
}
