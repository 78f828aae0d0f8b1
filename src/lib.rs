#![no_std]
#![cfg_attr(docs_rs, feature(doc_cfg))]
#![warn(missing_docs)]

//! Integers whose byte order is part of their type.
//!
//! Binary formats (file headers, network packets, on-disk records) fix the
//! byte order of every field. [`Int<T, O>`](Int) lets you write that order
//! down in the type of the field:
//!
//! ```
//! use endian_int::{U16BE, U32BE};
//!
//! #[derive(Clone, Copy, bytemuck::Zeroable, bytemuck::Pod)]
//! #[repr(C)]
//! struct RecordHeader {
//!   kind: U16BE,
//!   flags: U16BE,
//!   length: U32BE,
//! }
//!
//! let bytes = [0x00, 0x02, 0x80, 0x00, 0x00, 0x00, 0x01, 0x00];
//! let header: RecordHeader = bytemuck::pod_read_unaligned(&bytes);
//! assert_eq!(header.kind.value(), 2);
//! assert_eq!(header.flags.value(), 0x8000);
//! assert_eq!(header.length.value(), 256);
//! ```
//!
//! The value has exactly the size and alignment of the plain integer, and is
//! [`Pod`](bytemuck::Pod), so a struct of them can be read from and written to
//! a byte buffer with no conversion step. The bytes only get reordered when
//! you actually look at the number.
//!
//! * [`order`] has the byte order tags.
//! * [`conversions`] between widths and orders are split into lossless
//!   (`From`), checked (`try_new`), and truncating (`truncate`).
//! * Operators work like they do on the plain integer. Arithmetic gives back a
//!   plain integer, bitwise ops between same-order values keep the order.

#[cfg(feature = "std")]
extern crate std;

pub mod order;
pub use order::*;

pub mod primitive;
pub use primitive::*;

mod int;
pub use int::*;

pub mod conversions;
pub use conversions::*;

mod ops;

mod error;
pub use error::*;

mod parser_helpers;

/// A signed integer stored big-endian.
pub type BigInt<T = i32> = Int<T, BigEndian>;
/// A signed integer stored little-endian.
pub type LilInt<T = i32> = Int<T, LittleEndian>;
/// An unsigned integer stored big-endian.
pub type BigUint<T = u32> = Int<T, BigEndian>;
/// An unsigned integer stored little-endian.
pub type LilUint<T = u32> = Int<T, LittleEndian>;

/// A `u16` stored as big-endian bytes.
pub type U16BE = Int<u16, BigEndian>;
/// A `u16` stored as little-endian bytes.
pub type U16LE = Int<u16, LittleEndian>;
/// A `u32` stored as big-endian bytes.
pub type U32BE = Int<u32, BigEndian>;
/// A `u32` stored as little-endian bytes.
pub type U32LE = Int<u32, LittleEndian>;
/// A `u64` stored as big-endian bytes.
pub type U64BE = Int<u64, BigEndian>;
/// A `u64` stored as little-endian bytes.
pub type U64LE = Int<u64, LittleEndian>;
/// An `i16` stored as big-endian bytes.
pub type I16BE = Int<i16, BigEndian>;
/// An `i16` stored as little-endian bytes.
pub type I16LE = Int<i16, LittleEndian>;
/// An `i32` stored as big-endian bytes.
pub type I32BE = Int<i32, BigEndian>;
/// An `i32` stored as little-endian bytes.
pub type I32LE = Int<i32, LittleEndian>;
/// An `i64` stored as big-endian bytes.
pub type I64BE = Int<i64, BigEndian>;
/// An `i64` stored as little-endian bytes.
pub type I64LE = Int<i64, LittleEndian>;
