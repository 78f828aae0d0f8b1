//! Operators for [`Int`].
//!
//! All of these go through the integer's own operators, so overflow, division
//! by zero and oversized shifts behave exactly as they would on a plain `T`.

use crate::{ByteOrder, Int, Primitive};
use core::{
  cmp::Ordering,
  ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div, DivAssign,
    Mul, MulAssign, Neg, Not, Rem, RemAssign, Shl, ShlAssign, Shr, ShrAssign, Sub, SubAssign,
  },
};

macro_rules! impl_arith {
  ($($tr:ident $method:ident $atr:ident $amethod:ident $op:tt),+ $(,)?) => {
    $(
      impl<T: Primitive, O: ByteOrder> $tr<T> for Int<T, O> {
        type Output = T;
        #[inline]
        fn $method(self, rhs: T) -> T {
          self.value() $op rhs
        }
      }
      impl<T: Primitive, O: ByteOrder, O2: ByteOrder> $tr<Int<T, O2>> for Int<T, O> {
        type Output = T;
        #[inline]
        fn $method(self, rhs: Int<T, O2>) -> T {
          self.value() $op rhs.value()
        }
      }
      impl<T: Primitive, O: ByteOrder> $atr<T> for Int<T, O> {
        #[inline]
        fn $amethod(&mut self, rhs: T) {
          self.store(self.value() $op rhs)
        }
      }
      impl<T: Primitive, O: ByteOrder, O2: ByteOrder> $atr<Int<T, O2>> for Int<T, O> {
        #[inline]
        fn $amethod(&mut self, rhs: Int<T, O2>) {
          self.store(self.value() $op rhs.value())
        }
      }
    )+
  };
}
impl_arith! {
  Add add AddAssign add_assign +,
  Sub sub SubAssign sub_assign -,
  Mul mul MulAssign mul_assign *,
  Div div DivAssign div_assign /,
  Rem rem RemAssign rem_assign %,
}

// Any integer type may be the shift amount, like on the primitives.
macro_rules! impl_shift {
  ($($t:ty),+ $(,)?) => {
    $(
      impl_shift!(@rhs $t => u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
    )+
  };
  (@rhs $t:ty => $($r:ty),+) => {
    $(
      impl<O: ByteOrder> Shl<$r> for Int<$t, O> {
        type Output = $t;
        #[inline]
        fn shl(self, rhs: $r) -> $t {
          self.value() << rhs
        }
      }
      impl<O: ByteOrder> Shr<$r> for Int<$t, O> {
        type Output = $t;
        #[inline]
        fn shr(self, rhs: $r) -> $t {
          self.value() >> rhs
        }
      }
      impl<O: ByteOrder> ShlAssign<$r> for Int<$t, O> {
        #[inline]
        fn shl_assign(&mut self, rhs: $r) {
          self.store(self.value() << rhs)
        }
      }
      impl<O: ByteOrder> ShrAssign<$r> for Int<$t, O> {
        #[inline]
        fn shr_assign(&mut self, rhs: $r) {
          self.store(self.value() >> rhs)
        }
      }
    )+
  };
}
impl_shift!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

macro_rules! impl_shift_by_int {
  ($($tr:ident $method:ident $atr:ident $amethod:ident $op:tt),+ $(,)?) => {
    $(
      impl<T: Primitive, O: ByteOrder, O2: ByteOrder> $tr<Int<T, O2>> for Int<T, O> {
        type Output = T;
        #[inline]
        fn $method(self, rhs: Int<T, O2>) -> T {
          self.value() $op rhs.value()
        }
      }
      impl<T: Primitive, O: ByteOrder, O2: ByteOrder> $atr<Int<T, O2>> for Int<T, O> {
        #[inline]
        fn $amethod(&mut self, rhs: Int<T, O2>) {
          self.store(self.value() $op rhs.value())
        }
      }
    )+
  };
}
impl_shift_by_int! {
  Shl shl ShlAssign shl_assign <<,
  Shr shr ShrAssign shr_assign >>,
}

// Both sides share a layout, so the bits can be combined as stored.
macro_rules! impl_bitwise {
  ($($tr:ident $method:ident $atr:ident $amethod:ident $op:tt),+ $(,)?) => {
    $(
      impl<T: Primitive, O: ByteOrder> $tr for Int<T, O> {
        type Output = Self;
        #[inline]
        fn $method(self, rhs: Self) -> Self {
          Self::from_raw(self.raw() $op rhs.raw())
        }
      }
      impl<T: Primitive, O: ByteOrder> $tr<T> for Int<T, O> {
        type Output = T;
        #[inline]
        fn $method(self, rhs: T) -> T {
          self.value() $op rhs
        }
      }
      impl<T: Primitive, O: ByteOrder> $atr for Int<T, O> {
        #[inline]
        fn $amethod(&mut self, rhs: Self) {
          *self = *self $op rhs;
        }
      }
      impl<T: Primitive, O: ByteOrder> $atr<T> for Int<T, O> {
        #[inline]
        fn $amethod(&mut self, rhs: T) {
          *self = *self $op Self::new(rhs);
        }
      }
    )+
  };
}
impl_bitwise! {
  BitAnd bitand BitAndAssign bitand_assign &,
  BitOr bitor BitOrAssign bitor_assign |,
  BitXor bitxor BitXorAssign bitxor_assign ^,
}

impl<T: Primitive, O: ByteOrder> Not for Int<T, O> {
  type Output = Self;
  #[inline]
  fn not(self) -> Self {
    Self::from_raw(!self.raw())
  }
}

impl<T: Primitive + Neg<Output = T>, O: ByteOrder> Neg for Int<T, O> {
  type Output = T;
  #[inline]
  fn neg(self) -> T {
    -self.value()
  }
}

impl<T: Primitive, O: ByteOrder> Int<T, O> {
  /// Adds one in place, then gives back `self` (like prefix `++`).
  #[inline]
  pub fn increment(&mut self) -> &mut Self {
    *self += T::ONE;
    self
  }

  /// Subtracts one in place, then gives back `self` (like prefix `--`).
  #[inline]
  pub fn decrement(&mut self) -> &mut Self {
    *self -= T::ONE;
    self
  }

  /// Adds one in place and returns the value from before (like postfix `++`).
  #[inline]
  pub fn post_increment(&mut self) -> T {
    let prev = self.value();
    self.store(prev + T::ONE);
    prev
  }

  /// Subtracts one in place and returns the value from before (like postfix
  /// `--`).
  #[inline]
  pub fn post_decrement(&mut self) -> T {
    let prev = self.value();
    self.store(prev - T::ONE);
    prev
  }
}

// Compound assignment from a narrower plain integer. The pairs are the
// lossless ones, so `Int<u32> += 3_u16` works and `Int<u16> += 3_u32` doesn't.
macro_rules! impl_widening_assign {
  ($($src:ty => $($dst:ty),+;)+) => {
    $(
      impl_widening_assign!(@each $src => $($dst),+);
    )+
  };
  (@each $src:ty => $($dst:ty),+) => {
    $(
      impl_widening_assign!(@op $src => $dst,
        AddAssign add_assign +, SubAssign sub_assign -, MulAssign mul_assign *,
        DivAssign div_assign /, RemAssign rem_assign %,
        BitAndAssign bitand_assign &, BitOrAssign bitor_assign |,
        BitXorAssign bitxor_assign ^
      );
    )+
  };
  (@op $src:ty => $dst:ty, $($atr:ident $amethod:ident $op:tt),+) => {
    $(
      impl<O: ByteOrder> $atr<$src> for Int<$dst, O> {
        #[inline]
        fn $amethod(&mut self, rhs: $src) {
          self.store(self.value() $op <$dst>::from(rhs))
        }
      }
    )+
  };
}
impl_widening_assign! {
  u8 => u16, u32, u64, u128, usize, i16, i32, i64, i128, isize;
  u16 => u32, u64, u128, usize, i32, i64, i128;
  u32 => u64, u128, i64, i128;
  u64 => u128, i128;
  i8 => i16, i32, i64, i128, isize;
  i16 => i32, i64, i128, isize;
  i32 => i64, i128;
  i64 => i128;
}

// A plain integer on the left hand side.
macro_rules! impl_primitive_lhs {
  ($($t:ty),+ $(,)?) => {
    $(
      impl_primitive_lhs!(@op $t,
        Add add +, Sub sub -, Mul mul *, Div div /, Rem rem %,
        BitAnd bitand &, BitOr bitor |, BitXor bitxor ^, Shl shl <<, Shr shr >>
      );
      impl<O: ByteOrder> PartialEq<Int<$t, O>> for $t {
        #[inline]
        fn eq(&self, other: &Int<$t, O>) -> bool {
          *self == other.value()
        }
      }
      impl<O: ByteOrder> PartialOrd<Int<$t, O>> for $t {
        #[inline]
        fn partial_cmp(&self, other: &Int<$t, O>) -> Option<Ordering> {
          Some(self.cmp(&other.value()))
        }
      }
    )+
  };
  (@op $t:ty, $($tr:ident $method:ident $op:tt),+) => {
    $(
      impl<O: ByteOrder> $tr<Int<$t, O>> for $t {
        type Output = $t;
        #[inline]
        fn $method(self, rhs: Int<$t, O>) -> $t {
          self $op rhs.value()
        }
      }
    )+
  };
}
impl_primitive_lhs!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
