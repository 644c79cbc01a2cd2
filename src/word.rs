//! Storage word abstraction.
//!
//! A bit array is a slice of [`Word`]s. Bit `i` of the array lives in word
//! `i / W::BITS` at bit position `i % W::BITS`, counting from the least
//! significant bit.

use core::{
    fmt,
    hash::Hash,
    ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not, Shl, Shr},
};

use crate::macros::impl_word;

mod sealed {
    pub trait Sealed {}
}

/// An unsigned machine word used as bit array storage.
///
/// Implemented for `u8`, `u16`, `u32`, `u64`, `u128` and `usize`. The trait
/// is sealed: other crates can use it as a bound but cannot implement it.
///
/// ```compile_fail
/// struct Nibble(u8);
/// impl bitop_range::word::sealed::Sealed for Nibble {}
/// ```
pub trait Word:
    sealed::Sealed
    + Copy
    + Eq
    + Hash
    + Default
    + fmt::Debug
    + fmt::Binary
    + BitAnd<Output = Self>
    + BitAndAssign
    + BitOr<Output = Self>
    + BitOrAssign
    + BitXor<Output = Self>
    + BitXorAssign
    + Not<Output = Self>
    + Shl<u32, Output = Self>
    + Shr<u32, Output = Self>
    + Send
    + Sync
    + 'static
{
    /// Number of bits in the word.
    const BITS: usize;
    /// The word with no bits set.
    const ZERO: Self;
    /// The word with only bit 0 set.
    const ONE: Self;
    /// The word with every bit set.
    const ONES: Self;

    /// Returns a word with the `n` low-order bits set.
    ///
    /// `n` must be in `0..=BITS`. `low_mask(BITS)` is all ones and is computed
    /// without shifting by the full word width.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitop_range::Word;
    ///
    /// assert_eq!(u32::low_mask(0), 0);
    /// assert_eq!(u32::low_mask(3), 0b111);
    /// assert_eq!(u32::low_mask(32), u32::MAX);
    /// ```
    fn low_mask(n: usize) -> Self;

    /// Number of set bits.
    fn count_ones(self) -> u32;

    /// Number of zero bits below the lowest set bit (`BITS` for zero).
    fn trailing_zeros(self) -> u32;

    /// Number of zero bits above the highest set bit (`BITS` for zero).
    fn leading_zeros(self) -> u32;

    /// Returns a word with `n` contiguous bits set, starting at bit `offset`.
    ///
    /// Requires `offset + n <= BITS`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitop_range::Word;
    ///
    /// assert_eq!(u8::span_mask(2, 3), 0b0001_1100);
    /// assert_eq!(u8::span_mask(0, 8), 0xFF);
    /// assert_eq!(u8::span_mask(5, 0), 0);
    /// ```
    #[inline(always)]
    fn span_mask(offset: usize, n: usize) -> Self {
        debug_assert!(offset + n <= Self::BITS, "span exceeds word width");
        if n == 0 {
            return Self::ZERO;
        }
        // n >= 1 here, so offset < BITS and the shift is in range
        Self::low_mask(n) << offset as u32
    }

    /// Splits a linear bit index into `(word_index, bit_in_word)`.
    #[inline(always)]
    fn bitpos(idx: usize) -> (usize, usize) {
        (idx / Self::BITS, idx % Self::BITS)
    }

    /// Number of words needed to hold `bits` bits.
    #[inline(always)]
    fn words_for(bits: usize) -> usize {
        bits.div_ceil(Self::BITS)
    }

    /// Returns `true` if bit `bit` (`< BITS`) is set.
    #[inline(always)]
    fn is_set(self, bit: usize) -> bool {
        (self >> bit as u32) & Self::ONE != Self::ZERO
    }

    /// Replaces the bits selected by `mask` with the corresponding bits of
    /// `value`, leaving the rest of `self` untouched.
    #[inline(always)]
    fn merge(self, value: Self, mask: Self) -> Self {
        (self & !mask) | (value & mask)
    }
}

impl_word!(u8, u16, u32, u64, u128, usize);
