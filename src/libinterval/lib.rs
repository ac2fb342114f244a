// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at

//     http://www.apache.org/licenses/LICENSE-2.0

// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! This library proposes interval arithmetic over the extended reals: bounds are `f64` values that may be infinite, and an interval may be *inverted*, the union of two rays `(-∞, a] ∪ [b, +∞)`. Inverted intervals keep division by an interval containing zero, and functions crossing a pole, from collapsing to the whole line.
//!
//! Every operation is total and sound: the result contains the image of every member of the operands, and the empty set is the `undefined` interval rather than an error. Bounds are computed in round-to-nearest, equality is tolerance based (see the [tolerance module](tolerance/index.html)).
//!
//! # Examples
//!
//! ```rust
//! use interval::Interval;
//!
//! let x = Interval::range(-1e-6, 1e-6);
//! assert_eq!(x.multiplicative_inverse().sqrt(), Interval::inverted_range(0.0, 1000.0));
//! assert_eq!(x.sqrt().sqrt(), Interval::zero());
//! ```
//!
//! For more examples see the [interval module](interval/index.html), the [arithmetic module](arithmetic/index.html) or the [transcendental module](transcendental/index.html).
//!
//! # References
//! * [Boost Interval Arithmetic Library](http://www.boost.org/doc/libs/1_57_0/libs/numeric/interval/doc/interval.html)
//! * T. Hickey, Q. Ju, M. H. van Emden, *Interval arithmetic: from principles to implementation*, J. ACM 48(5), 2001.
//!

#[macro_use]
extern crate log;

#[macro_use]
mod macros;

pub mod scalar;
pub mod interval;
pub mod ops;
pub mod arithmetic;
pub mod set_operations;
pub mod tolerance;
pub mod monotonic;
pub mod transcendental;
pub mod constants;

pub use crate::interval::{Interval, ToInterval};
pub use crate::tolerance::Tolerance;
