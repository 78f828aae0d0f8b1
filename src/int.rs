use crate::{
  parser_helpers::try_pull_pod, BigEndian, ByteOrder, Endian, IntError, LittleEndian, NativeEndian,
  Primitive,
};
use bytemuck::{Pod, Zeroable};
use core::{
  cmp::Ordering,
  fmt::{Binary, Debug, Display, Formatter, LowerHex, Octal, UpperHex},
  hash::{Hash, Hasher},
  marker::PhantomData,
  str::FromStr,
};

/// An integer of type `T` stored in the byte order `O`.
///
/// The bytes of the value are kept in memory in the order named by the tag,
/// which makes this type suitable as a field of a `repr(C)` struct that is
/// laid directly over file or packet data. The tag is zero-sized, so an
/// `Int<T, O>` has exactly the size and alignment of `T`.
///
/// ```
/// use endian_int::{BigEndian, Int, LittleEndian};
/// let le = Int::<u32, LittleEndian>::new(0x1234_5678);
/// let be = Int::<u32, BigEndian>::new(0x1234_5678);
/// assert_eq!(le.as_bytes(), &[0x78, 0x56, 0x34, 0x12]);
/// assert_eq!(be.as_bytes(), &[0x12, 0x34, 0x56, 0x78]);
/// assert_eq!(le.value(), be.value());
/// assert_eq!(le.truncate::<u16>().value(), 0x5678);
/// ```
///
/// Arithmetic on an `Int` produces a plain `T`: once the value has been
/// computed it's no longer "bytes in some order", so you have to say which
/// order you want when storing it again. Bitwise operations between two
/// values of the same order don't need any reordering and keep the tag.
#[repr(transparent)]
pub struct Int<T: Primitive, O: ByteOrder = NativeEndian> {
  raw: T,
  order: PhantomData<O>,
}

// Safety: `repr(transparent)` over a `Pod` integer, the tag is a ZST.
unsafe impl<T: Primitive, O: ByteOrder> Zeroable for Int<T, O> {}
unsafe impl<T: Primitive, O: ByteOrder> Pod for Int<T, O> {}

impl<T: Primitive, O: ByteOrder> Int<T, O> {
  /// Makes a value from a native integer.
  #[inline]
  #[must_use]
  pub fn new(value: T) -> Self {
    Self::from_raw(Self::encode(value))
  }

  /// Makes a value from storage that is already in order `O`.
  #[inline]
  #[must_use]
  pub const fn from_raw(raw: T) -> Self {
    Self { raw, order: PhantomData }
  }

  #[inline]
  fn encode(value: T) -> T {
    if O::ENDIAN.is_native() {
      value
    } else {
      value.swap_bytes()
    }
  }

  /// Reads the storage as if it were in order `e`.
  #[inline]
  fn read_as(self, e: Endian) -> T {
    if O::ENDIAN == e {
      self.raw
    } else {
      self.raw.swap_bytes()
    }
  }

  /// The value as a native integer.
  #[inline]
  #[must_use]
  pub fn value(self) -> T {
    self.read_as(Endian::NATIVE)
  }

  /// The value in big-endian form (same as `value().to_be()`).
  #[inline]
  #[must_use]
  pub fn big(self) -> T {
    self.read_as(Endian::Big)
  }

  /// The value in little-endian form (same as `value().to_le()`).
  #[inline]
  #[must_use]
  pub fn little(self) -> T {
    self.read_as(Endian::Little)
  }

  /// The stored bits, without any reordering.
  #[inline]
  #[must_use]
  pub fn raw(self) -> T {
    self.raw
  }

  /// Mutable access to the stored bits.
  ///
  /// Anything written here is taken to already be in order `O`.
  #[inline]
  #[must_use]
  pub fn raw_mut(&mut self) -> &mut T {
    &mut self.raw
  }

  /// The stored bytes, in memory order.
  #[inline]
  #[must_use]
  pub fn as_bytes(&self) -> &[u8] {
    bytemuck::bytes_of(self)
  }

  /// Reads a value off the front of `bytes`, returning the rest.
  ///
  /// The bytes are taken to be in order `O`. The slice doesn't need to be
  /// aligned.
  #[inline]
  pub fn from_bytes(bytes: &[u8]) -> Result<(Self, &[u8]), IntError> {
    try_pull_pod(bytes)
  }

  /// Views a byte slice as a slice of values in order `O`.
  ///
  /// ## Failure
  /// * The slice length must be a multiple of the size of `T`.
  /// * The slice must be aligned for `T`.
  #[inline]
  pub fn slice_from_bytes(bytes: &[u8]) -> Result<&[Self], IntError> {
    Ok(bytemuck::try_cast_slice(bytes)?)
  }

  /// Views a slice of values as its bytes.
  #[inline]
  #[must_use]
  pub fn slice_as_bytes(values: &[Self]) -> &[u8] {
    bytemuck::cast_slice(values)
  }

  #[inline]
  pub(crate) fn store(&mut self, value: T) {
    self.raw = Self::encode(value);
  }

  /// Reverses the stored bytes and flips the tag.
  ///
  /// The value is unchanged, only where its bytes sit in memory. Doing this
  /// twice gives back the original type and bits.
  #[inline]
  #[must_use]
  pub fn swap_order(self) -> Int<T, O::Flip> {
    Int::from_raw(self.raw.swap_bytes())
  }

  /// The same value, stored in order `O2`.
  ///
  /// When `O2` is `O` this is a plain copy.
  #[inline]
  #[must_use]
  pub fn cast_order<O2: ByteOrder>(self) -> Int<T, O2> {
    Int::new(self.value())
  }

  /// If the value is zero.
  #[inline]
  #[must_use]
  pub fn is_zero(self) -> bool {
    self.raw == T::ZERO
  }
}

/// Direct memory access, only for values stored in the target's byte order.
///
/// A pointer into a foreign-order value would let native reads and writes
/// through it silently see the wrong number, so these don't exist for
/// [`NonNativeEndian`](crate::NonNativeEndian) values.
///
/// ```compile_fail
/// use endian_int::{Int, NonNativeEndian};
/// let x = Int::<u32, NonNativeEndian>::new(5);
/// let _p = x.as_ptr();
/// ```
impl<T: Primitive> Int<T, NativeEndian> {
  /// A pointer to the stored integer.
  #[inline]
  #[must_use]
  pub const fn as_ptr(&self) -> *const T {
    &self.raw as *const T
  }

  /// A mutable pointer to the stored integer.
  #[inline]
  #[must_use]
  pub fn as_mut_ptr(&mut self) -> *mut T {
    &mut self.raw as *mut T
  }

  /// The stored integer.
  #[inline]
  #[must_use]
  pub const fn as_native(&self) -> &T {
    &self.raw
  }

  /// The stored integer, mutably.
  #[inline]
  #[must_use]
  pub fn as_native_mut(&mut self) -> &mut T {
    &mut self.raw
  }
}

impl<T: Primitive, O: ByteOrder> Clone for Int<T, O> {
  #[inline]
  fn clone(&self) -> Self {
    *self
  }
}
impl<T: Primitive, O: ByteOrder> Copy for Int<T, O> {}

impl<T: Primitive, O: ByteOrder> Default for Int<T, O> {
  #[inline]
  fn default() -> Self {
    Self::from_raw(T::ZERO)
  }
}

impl<T: Primitive, O: ByteOrder> Debug for Int<T, O> {
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    let name = match O::ENDIAN {
      Endian::Little => "IntLE",
      Endian::Big => "IntBE",
    };
    f.debug_tuple(name).field(&self.value()).finish()
  }
}

macro_rules! impl_fmt_via_value {
  ($($tr:ident),+) => {
    $(
      impl<T: Primitive, O: ByteOrder> $tr for Int<T, O> {
        #[inline]
        fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
          $tr::fmt(&self.value(), f)
        }
      }
    )+
  };
}
impl_fmt_via_value!(Display, LowerHex, UpperHex, Binary, Octal);

// Within one order, equal bits and equal values are the same thing.
impl<T: Primitive, O: ByteOrder> PartialEq for Int<T, O> {
  #[inline]
  fn eq(&self, other: &Self) -> bool {
    self.raw == other.raw
  }
}
impl<T: Primitive, O: ByteOrder> Eq for Int<T, O> {}

impl<T: Primitive, O: ByteOrder> PartialEq<T> for Int<T, O> {
  #[inline]
  fn eq(&self, other: &T) -> bool {
    self.value() == *other
  }
}

impl<T: Primitive, O: ByteOrder> PartialOrd for Int<T, O> {
  #[inline]
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}
impl<T: Primitive, O: ByteOrder> Ord for Int<T, O> {
  #[inline]
  fn cmp(&self, other: &Self) -> Ordering {
    self.value().cmp(&other.value())
  }
}
impl<T: Primitive, O: ByteOrder> PartialOrd<T> for Int<T, O> {
  #[inline]
  fn partial_cmp(&self, other: &T) -> Option<Ordering> {
    Some(self.value().cmp(other))
  }
}

/// Hashes the stored bits.
///
/// Equal values of the same order hash the same. A little-endian and a
/// big-endian value with the same number generally do *not*, so put a
/// [`cast_order`](Int::cast_order) in front of lookups that start from the
/// other order.
impl<T: Primitive, O: ByteOrder> Hash for Int<T, O> {
  #[inline]
  fn hash<H: Hasher>(&self, state: &mut H) {
    self.raw.hash(state)
  }
}

macro_rules! impl_cross_order {
  ($a:ty, $b:ty) => {
    impl<T: Primitive> From<Int<T, $a>> for Int<T, $b> {
      #[inline]
      fn from(x: Int<T, $a>) -> Self {
        x.swap_order()
      }
    }
    impl<T: Primitive> PartialEq<Int<T, $a>> for Int<T, $b> {
      #[inline]
      fn eq(&self, other: &Int<T, $a>) -> bool {
        self.value() == other.value()
      }
    }
    impl<T: Primitive> PartialOrd<Int<T, $a>> for Int<T, $b> {
      #[inline]
      fn partial_cmp(&self, other: &Int<T, $a>) -> Option<Ordering> {
        Some(self.value().cmp(&other.value()))
      }
    }
  };
}
impl_cross_order!(LittleEndian, BigEndian);
impl_cross_order!(BigEndian, LittleEndian);

impl<T: Primitive, O: ByteOrder> From<Int<T, O>> for bool {
  #[inline]
  fn from(x: Int<T, O>) -> Self {
    !x.is_zero()
  }
}

impl<T: Primitive, O: ByteOrder> FromStr for Int<T, O> {
  type Err = IntError;
  #[inline]
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Ok(Self::new(s.parse::<T>()?))
  }
}
