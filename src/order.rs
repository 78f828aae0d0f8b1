//! Byte order tags.
//!
//! A byte order is named at the type level with one of the zero-sized marker
//! types [`LittleEndian`] or [`BigEndian`]. The [`NativeEndian`] and
//! [`NonNativeEndian`] aliases resolve to one of those two at compile time, so
//! "native" is never a third order: `Int<u32, NativeEndian>` *is* either
//! `Int<u32, LittleEndian>` or `Int<u32, BigEndian>`.
//!
//! The [`Endian`] enum is the value-level mirror of the tags, used when code
//! needs to branch on an order.

use core::{fmt::Debug, hash::Hash, ops::Not};

/// A byte order, as a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Endian {
  /// The least significant byte is at the lowest address.
  Little,
  /// The most significant byte is at the lowest address.
  Big,
}
impl Endian {
  /// The byte order of the target.
  #[cfg(target_endian = "little")]
  pub const NATIVE: Self = Self::Little;
  /// The byte order of the target.
  #[cfg(target_endian = "big")]
  pub const NATIVE: Self = Self::Big;

  /// The opposite byte order.
  ///
  /// This is its own inverse: `e.flip().flip() == e` for both orders.
  #[inline]
  #[must_use]
  pub const fn flip(self) -> Self {
    match self {
      Self::Little => Self::Big,
      Self::Big => Self::Little,
    }
  }

  /// If this is the byte order of the target.
  #[inline]
  #[must_use]
  pub const fn is_native(self) -> bool {
    matches!((self, Self::NATIVE), (Self::Little, Self::Little) | (Self::Big, Self::Big))
  }
}
impl Not for Endian {
  type Output = Self;
  #[inline]
  fn not(self) -> Self {
    self.flip()
  }
}

mod sealed {
  pub trait Sealed {}
  impl Sealed for super::LittleEndian {}
  impl Sealed for super::BigEndian {}
}

/// A byte order tag type.
///
/// This trait is sealed, the only implementors are [`LittleEndian`] and
/// [`BigEndian`].
pub trait ByteOrder:
  Debug + Clone + Copy + Default + PartialEq + Eq + PartialOrd + Ord + Hash + Send + Sync + 'static + sealed::Sealed
{
  /// The order this tag names.
  const ENDIAN: Endian;

  /// The tag for the opposite order.
  ///
  /// Flipping twice always lands back on `Self`.
  type Flip: ByteOrder<Flip = Self>;
}

/// Marker for little-endian storage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LittleEndian;
impl ByteOrder for LittleEndian {
  const ENDIAN: Endian = Endian::Little;
  type Flip = BigEndian;
}

/// Marker for big-endian storage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BigEndian;
impl ByteOrder for BigEndian {
  const ENDIAN: Endian = Endian::Big;
  type Flip = LittleEndian;
}

/// Network byte order.
pub type NetworkEndian = BigEndian;

/// The tag matching the target's byte order.
#[cfg(target_endian = "little")]
pub type NativeEndian = LittleEndian;
/// The tag matching the target's byte order.
#[cfg(target_endian = "big")]
pub type NativeEndian = BigEndian;

/// The tag opposite to the target's byte order.
#[cfg(target_endian = "little")]
pub type NonNativeEndian = BigEndian;
/// The tag opposite to the target's byte order.
#[cfg(target_endian = "big")]
pub type NonNativeEndian = LittleEndian;
