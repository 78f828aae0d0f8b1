use bytemuck::PodCastError;
use core::{
  fmt::{Display, Formatter},
  num::{ParseIntError, TryFromIntError},
};

/// An error from the `endian_int` crate.
///
/// Only the run time checked paths can fail. Narrowing conversions through
/// `From` are rejected by the compiler instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntError {
  /// The value doesn't fit in the destination type.
  OutOfRange,

  /// Failed to parse the text given.
  Parse,

  /// The byte slice is shorter than the value being read.
  NotEnoughBytes,

  /// The byte slice has the wrong length or alignment to be viewed as values.
  Layout,
}
impl From<TryFromIntError> for IntError {
  #[inline]
  fn from(_: TryFromIntError) -> Self {
    Self::OutOfRange
  }
}
impl From<ParseIntError> for IntError {
  #[inline]
  fn from(_: ParseIntError) -> Self {
    Self::Parse
  }
}
impl From<PodCastError> for IntError {
  #[inline]
  fn from(_: PodCastError) -> Self {
    Self::Layout
  }
}

impl Display for IntError {
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    f.write_str(match self {
      Self::OutOfRange => "value out of range for the destination type",
      Self::Parse => "could not parse an integer",
      Self::NotEnoughBytes => "not enough bytes for the value",
      Self::Layout => "byte slice has the wrong length or alignment",
    })
  }
}

#[cfg(feature = "std")]
#[cfg_attr(docs_rs, doc(cfg(feature = "std")))]
impl std::error::Error for IntError {}
