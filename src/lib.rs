//! Bitwise combination of bit arrays over arbitrary, unaligned bit ranges.
//!
//! This crate computes AND, OR, XOR and AND-NOT between two bit arrays,
//! restricted to a range of bit positions `[offset, offset + n)`, and writes
//! the result into a destination array without disturbing any bit outside
//! that range. Ranges may start and end anywhere inside a word.
//!
//! A bit array is a slice of unsigned words (`u8` through `u128`, or
//! `usize`). Bit `i` lives in word `i / W::BITS`, at bit `i % W::BITS`
//! counting from the least significant bit.
//!
//! # Features
//!
//! - **One range walk, four operators**: [`combine_and`], [`combine_or`],
//!   [`combine_xor`] and [`combine_andnot`] share a single routine that
//!   masks the partial words at each end and overwrites whole words in
//!   between
//! - **Any word width** through the [`Word`] trait
//! - **In-place forms** ([`and_assign`] and friends) for when the destination
//!   is also a source
//! - **Checked entry points** ([`try_combine`]) that report a [`RangeError`]
//!   instead of panicking
//! - **[`BitArray`]**, a fixed-length owned bit array whose range operations
//!   are validated against its length
//! - **Serialization support** via serde (optional)
//! - **`no_std` support** with `alloc`
//!
//! # Examples
//!
//! ```
//! use bitop_range::{combine_and, combine_xor};
//!
//! let a1 = [0xFFFF_FFFFu32, 0xFFFF_FFFF];
//! let a2 = [0x0000_0000u32, 0x0000_0005];
//! let mut dest = [0u32; 2];
//!
//! // Bits 29..35 cross the word boundary
//! combine_and(&a1, &a2, 29, 6, &mut dest);
//! assert_eq!(dest, [0, 0b101]);
//!
//! // A zero-length range touches nothing
//! combine_xor(&a1, &a2, 17, 0, &mut dest);
//! assert_eq!(dest, [0, 0b101]);
//! ```
//!
//! # Preconditions
//!
//! The raw slice functions trust the caller to size the slices: every
//! operand must hold at least `offset + n` bits. A violation panics through
//! slice indexing; it never reads or writes out of bounds.

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

// Module declarations
mod array;
mod checked;
mod error;
mod iter;
mod macros;
mod op;
pub mod range;
mod set_ops;
mod traits;
pub mod word;

#[cfg(feature = "serde")]
mod ser;

// Re-exports
pub use array::BitArray;
pub use checked::{try_combine, try_combine_assign};
pub use error::{Operand, ParseBitArrayError, ParseBitOpError, RangeError};
pub use iter::Ones;
pub use op::BitOp;
pub use range::{
    and_assign, andnot_assign, combine, combine_and, combine_andnot, combine_assign,
    combine_assign_with, combine_or, combine_with, combine_xor, fill_range, or_assign, xor_assign,
};
pub use word::Word;
