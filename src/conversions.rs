//! Converting between integer types and byte orders.
//!
//! There are three ways to turn one value into another, and which one you
//! reach for says how much risk you accept.
//!
//! ## Lossless: `From` / `Into`
//!
//! Changing only the byte order never loses anything, and neither does
//! widening into a type that can hold every value of the source. For those,
//! `From` is implemented: between the two orders of the same `T`, from any
//! `U` into `Int<T, _>`, from any `Int<U, _>` into `Int<T, _>`, and from
//! `Int<U, _>` back into a plain `T`. A pair `(U, T)` counts as lossless
//! exactly when the standard library has `From<U> for T`, which means the
//! target dependent pairs such as `u32` to `usize` are left out.
//!
//! [`Int::from_int`], [`Int::set`] and [`Int::set_int`] are the generic forms
//! of the same rule.
//!
//! ```
//! use endian_int::{BigEndian, Int, LittleEndian};
//! let a = Int::<u16, LittleEndian>::new(0x1234);
//! let b: Int<u32, BigEndian> = a.into();
//! let c: Int<u16, BigEndian> = a.into();
//! let d: u64 = b.into();
//! assert_eq!(b.value(), 0x1234);
//! assert_eq!(c.value(), 0x1234);
//! assert_eq!(d, 0x1234);
//! ```
//!
//! A narrowing conversion through these paths doesn't compile:
//!
//! ```compile_fail
//! use endian_int::{Int, NativeEndian};
//! let a = Int::<u32, NativeEndian>::new(0x1234_5678);
//! let b: Int<u16, NativeEndian> = a.into();
//! ```
//!
//! ```compile_fail
//! use endian_int::{Int, NativeEndian};
//! let mut dest = Int::<u16, NativeEndian>::default();
//! dest.set(0x1234_5678_u32);
//! ```
//!
//! ```compile_fail
//! use endian_int::{BigEndian, Int, LittleEndian};
//! let a = Int::<u32, BigEndian>::new(1);
//! let _b = Int::<u16, LittleEndian>::from_int(a);
//! ```
//!
//! ```compile_fail
//! use endian_int::{Int, NativeEndian};
//! let _b: Int<i16, NativeEndian> = Int::from(7_u16);
//! ```
//!
//! The compound assignment operators follow the same rule for a plain integer
//! on the right: `Int<u32, _> += 3_u16` widens, a wider operand is rejected.
//!
//! ```
//! use endian_int::{BigEndian, Int};
//! let mut a = Int::<u32, BigEndian>::new(2);
//! a += 3_u16;
//! a |= 0x80_u8;
//! assert_eq!(a.value(), 0x85);
//! ```
//!
//! ```compile_fail
//! use endian_int::{Int, NativeEndian};
//! let mut a = Int::<u16, NativeEndian>::new(1);
//! a += 7_u32;
//! ```
//!
//! ## Checked: [`Int::try_new`] / [`Int::try_from_int`]
//!
//! These accept any pair of types and check the actual value at run time. A
//! value that fits is converted exactly, anything else is
//! [`IntError::OutOfRange`]. They never truncate.
//!
//! ```
//! use endian_int::{Int, IntError, NativeEndian};
//! let small = Int::<u16, NativeEndian>::try_new(300_u32);
//! let big = Int::<u16, NativeEndian>::try_new(70_000_u32);
//! assert_eq!(small.map(|x| x.value()), Ok(300));
//! assert_eq!(big, Err(IntError::OutOfRange));
//! ```
//!
//! ## Truncating: [`Int::truncate`] / [`narrow_cast`]
//!
//! The one place where bits may be dropped. This keeps the low bits of the
//! value and reinterprets them as the destination type, exactly like `as`.
//!
//! ```
//! use endian_int::{BigEndian, Int};
//! let a = Int::<u32, BigEndian>::new(0x1234_5678);
//! assert_eq!(a.truncate::<u16>().value(), 0x5678);
//! assert_eq!(a.truncate::<i8>().value(), 0x78);
//! ```

use crate::{ByteOrder, Int, IntError, NativeEndian, Primitive, TruncatingCast};

impl<T: Primitive, O: ByteOrder> Int<T, O> {
  /// Converts from another `Int` whose type always fits in `T`.
  ///
  /// Either order is accepted on either side.
  #[inline]
  #[must_use]
  pub fn from_int<U: Primitive, O2: ByteOrder>(other: Int<U, O2>) -> Self
  where
    T: From<U>,
  {
    Self::new(T::from(other.value()))
  }

  /// Stores a new value of any type that always fits in `T`.
  #[inline]
  pub fn set<U>(&mut self, value: U)
  where
    T: From<U>,
  {
    self.store(T::from(value))
  }

  /// Stores the value of another `Int` whose type always fits in `T`.
  #[inline]
  pub fn set_int<U: Primitive, O2: ByteOrder>(&mut self, other: Int<U, O2>)
  where
    T: From<U>,
  {
    self.store(T::from(other.value()))
  }

  /// Makes a value from any integer, checking that it fits.
  ///
  /// ## Failure
  /// * [`IntError::OutOfRange`] if `T` can't hold `value`.
  #[inline]
  pub fn try_new<U>(value: U) -> Result<Self, IntError>
  where
    T: TryFrom<U>,
  {
    T::try_from(value).map(Self::new).map_err(|_| IntError::OutOfRange)
  }

  /// Converts from any other `Int`, checking that the value fits.
  ///
  /// ## Failure
  /// * [`IntError::OutOfRange`] if `T` can't hold the value of `other`.
  #[inline]
  pub fn try_from_int<U: Primitive, O2: ByteOrder>(other: Int<U, O2>) -> Result<Self, IntError>
  where
    T: TryFrom<U>,
  {
    Self::try_new(other.value())
  }

  /// Keeps the low bits of the value as a `U`, with `as` semantics.
  ///
  /// The result is stored in the same order as `self`.
  #[inline]
  #[must_use]
  pub fn truncate<U: Primitive>(self) -> Int<U, O>
  where
    T: TruncatingCast<U>,
  {
    Int::new(self.value().truncating_cast())
  }
}

/// Keeps the low bits of the value as a native order `U`.
///
/// This is [`Int::truncate`] followed by a cast to [`NativeEndian`]. The
/// result is native order even when `U` is `T`, so a foreign order value
/// comes back with its bytes reordered. Use [`Int::truncate`] to keep the
/// source order.
///
/// ```
/// use endian_int::{narrow_cast, Int, NonNativeEndian};
/// let x = Int::<u32, NonNativeEndian>::new(0x1234_5678);
/// let y = narrow_cast::<u32, _, _>(x);
/// assert_eq!(y.value(), x.value());
/// assert_eq!(y.raw(), x.raw().swap_bytes());
/// ```
#[inline]
#[must_use]
pub fn narrow_cast<U: Primitive, T: TruncatingCast<U>, O: ByteOrder>(
  x: Int<T, O>,
) -> Int<U, NativeEndian> {
  x.truncate::<U>().cast_order()
}

macro_rules! impl_same_type {
  ($($t:ty),+ $(,)?) => {
    $(
      impl<O: ByteOrder> From<$t> for Int<$t, O> {
        #[inline]
        fn from(value: $t) -> Self {
          Self::new(value)
        }
      }
      impl<O: ByteOrder> From<Int<$t, O>> for $t {
        #[inline]
        fn from(x: Int<$t, O>) -> Self {
          x.value()
        }
      }
    )+
  };
}
impl_same_type!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

macro_rules! impl_lossless {
  ($($src:ty => $($dst:ty),+;)+) => {
    $(
      impl_lossless!(@each $src => $($dst),+);
    )+
  };
  (@each $src:ty => $($dst:ty),+) => {
    $(
      impl<O: ByteOrder> From<$src> for Int<$dst, O> {
        #[inline]
        fn from(value: $src) -> Self {
          Self::new(<$dst>::from(value))
        }
      }
      impl<O: ByteOrder, O2: ByteOrder> From<Int<$src, O2>> for Int<$dst, O> {
        #[inline]
        fn from(x: Int<$src, O2>) -> Self {
          Self::from_int(x)
        }
      }
      impl<O: ByteOrder> From<Int<$src, O>> for $dst {
        #[inline]
        fn from(x: Int<$src, O>) -> Self {
          <$dst>::from(x.value())
        }
      }
    )+
  };
}
// Mirrors the integer `From` impls in `core`.
impl_lossless! {
  u8 => u16, u32, u64, u128, usize, i16, i32, i64, i128, isize;
  u16 => u32, u64, u128, usize, i32, i64, i128;
  u32 => u64, u128, i64, i128;
  u64 => u128, i128;
  i8 => i16, i32, i64, i128, isize;
  i16 => i32, i64, i128, isize;
  i32 => i64, i128;
  i64 => i128;
}
