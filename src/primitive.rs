//! The integer types that can be stored in an [`Int`](crate::Int).

use bytemuck::Pod;
use core::{
  fmt::{Binary, Debug, Display, LowerHex, Octal, UpperHex},
  hash::Hash,
  num::ParseIntError,
  ops::{Add, BitAnd, BitOr, BitXor, Div, Mul, Not, Rem, Shl, Shr, Sub},
  str::FromStr,
};

mod sealed {
  pub trait Sealed {}
}

/// A fixed width primitive integer.
///
/// Implemented for all of the signed and unsigned integer types in `core`.
/// This trait is sealed.
///
/// The operator bounds are exactly the ones the primitives already have, so
/// `Int<T, O>` can forward to them without changing any overflow behavior.
pub trait Primitive:
  Pod
  + Debug
  + Display
  + LowerHex
  + UpperHex
  + Binary
  + Octal
  + Default
  + Eq
  + Ord
  + Hash
  + Send
  + Sync
  + FromStr<Err = ParseIntError>
  + Add<Output = Self>
  + Sub<Output = Self>
  + Mul<Output = Self>
  + Div<Output = Self>
  + Rem<Output = Self>
  + BitAnd<Output = Self>
  + BitOr<Output = Self>
  + BitXor<Output = Self>
  + Not<Output = Self>
  + Shl<Self, Output = Self>
  + Shr<Self, Output = Self>
  + sealed::Sealed
{
  /// `0`
  const ZERO: Self;
  /// `1`
  const ONE: Self;
  /// Width in bits.
  const BITS: u32;
  /// If the type is signed.
  const SIGNED: bool;

  /// Reverses the byte order.
  #[must_use]
  fn swap_bytes(self) -> Self;
}

macro_rules! impl_primitive {
  ($signed:literal => $($t:ty),+ $(,)?) => {
    $(
      impl sealed::Sealed for $t {}
      impl Primitive for $t {
        const ZERO: Self = 0;
        const ONE: Self = 1;
        const BITS: u32 = <$t>::BITS;
        const SIGNED: bool = $signed;
        #[inline]
        fn swap_bytes(self) -> Self {
          <$t>::swap_bytes(self)
        }
      }
    )+
  };
}
impl_primitive!(false => u8, u16, u32, u64, u128, usize);
impl_primitive!(true => i8, i16, i32, i64, i128, isize);

/// A conversion that keeps only the low bits of the source.
///
/// This is the `as` cast between integers: the source is truncated to the
/// width of `To` (or sign/zero extended if `To` is wider) and the bits are
/// reinterpreted with the signedness of `To`. Nothing is checked, nothing
/// panics. Every pair of primitives implements this, which is exactly why it
/// is kept separate from `From`.
pub trait TruncatingCast<To: Primitive>: Primitive {
  /// Converts with `as` semantics.
  #[must_use]
  fn truncating_cast(self) -> To;
}

macro_rules! impl_truncating_cast {
  ($($src:ty),+ $(,)?) => {
    $(
      impl_truncating_cast!(@to $src => u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
    )+
  };
  (@to $src:ty => $($dst:ty),+) => {
    $(
      impl TruncatingCast<$dst> for $src {
        #[inline]
        #[allow(clippy::unnecessary_cast)]
        fn truncating_cast(self) -> $dst {
          self as $dst
        }
      }
    )+
  };
}
impl_truncating_cast!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
