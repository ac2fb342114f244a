// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

// Inspired by the macros from the BigUint impl. (doc.rust-lang.org/num/src/num/bigint.rs.html#235-280)
// The operation itself is implemented once on `&T op &T`, the macros forward the by-value flavours to it.
macro_rules! forward_val_val_binop {
  (impl $imp:ident for $res:ty, $method:ident) => {
    impl $imp<$res> for $res {
      type Output = $res;

      fn $method(self, other: $res) -> $res {
        (&self).$method(&other)
      }
    }
  }
}

macro_rules! forward_ref_val_binop {
  (impl $imp:ident for $res:ty, $method:ident) => {
    impl<'a> $imp<$res> for &'a $res {
      type Output = $res;

      fn $method(self, other: $res) -> $res {
        self.$method(&other)
      }
    }
  }
}

macro_rules! forward_val_ref_binop {
  (impl $imp:ident for $res:ty, $method:ident) => {
    impl<'b> $imp<&'b $res> for $res {
      type Output = $res;

      fn $method(self, other: &$res) -> $res {
        (&self).$method(other)
      }
    }
  }
}

macro_rules! forward_all_binop {
  (impl $imp:ident for $res:ty, $method:ident) => {
    forward_val_val_binop!(impl $imp for $res, $method);
    forward_ref_val_binop!(impl $imp for $res, $method);
    forward_val_ref_binop!(impl $imp for $res, $method);
  };
}
