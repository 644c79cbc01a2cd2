//! Trait implementations for `BitArray`.

use alloc::boxed::Box;
use core::{
    fmt::{self, Write},
    ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Index},
    str::FromStr,
};

use crate::{BitArray, error::ParseBitArrayError, op::BitOp, word::Word};

impl<W: Word> AsRef<[W]> for BitArray<W> {
    fn as_ref(&self) -> &[W] {
        self.as_words()
    }
}

impl<W: Word> From<BitArray<W>> for Box<[W]> {
    fn from(bits: BitArray<W>) -> Self {
        bits.into_words()
    }
}

impl<W: Word> Index<usize> for BitArray<W> {
    type Output = bool;

    /// Returns a reference to the value of bit `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitop_range::BitArray;
    ///
    /// let bits = BitArray::<u8>::from_positions([5], 8);
    /// assert!(bits[5]);
    /// assert!(!bits[0]);
    /// ```
    fn index(&self, index: usize) -> &Self::Output {
        if self.get(index) { &true } else { &false }
    }
}

impl<W: Word> fmt::Display for BitArray<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Binary::fmt(self, f)
    }
}

impl<W: Word> fmt::Binary for BitArray<W> {
    /// Formats the array as exactly `len` binary digits, most significant
    /// bit first. The alternate form adds a `0b` prefix.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitop_range::BitArray;
    ///
    /// let bits = BitArray::<u8>::from_positions([0, 2, 9], 10);
    /// assert_eq!(format!("{bits:b}"), "1000000101");
    /// assert_eq!(format!("{bits:#b}"), "0b1000000101");
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str("0b")?;
        }
        for i in (0..self.len()).rev() {
            f.write_char(if self.get(i) { '1' } else { '0' })?;
        }
        Ok(())
    }
}

impl<W: Word> FromStr for BitArray<W> {
    type Err = ParseBitArrayError;

    /// Parses a binary string into a [`BitArray`] with one bit per digit.
    ///
    /// The input may start with `0b` and may contain `_` separators. The
    /// rightmost digit is bit 0. An empty string, or a bare `0b`, is the
    /// zero-length array, matching what [`Display`](fmt::Display) prints
    /// for it.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseBitArrayError`] if the string contains a character
    /// other than `0`, `1` or `_`, or has separators but no digits.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitop_range::BitArray;
    ///
    /// let bits: BitArray<u8> = "0b1_0000_0101".parse()?;
    /// assert_eq!(bits.len(), 9);
    /// assert!(bits.get(0));
    /// assert!(!bits.get(1));
    /// assert!(bits.get(2));
    /// assert!(bits.get(8));
    ///
    /// let empty: BitArray<u8> = "".parse()?;
    /// assert!(empty.is_empty());
    /// # Ok::<(), bitop_range::ParseBitArrayError>(())
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix("0b").unwrap_or(s);
        let prefix = s.len() - digits.len();

        let mut len = 0;
        for (pos, ch) in digits.char_indices() {
            match ch {
                '0' | '1' => len += 1,
                '_' => {}
                _ => {
                    return Err(ParseBitArrayError::InvalidChar {
                        ch,
                        pos: prefix + pos,
                    });
                }
            }
        }
        if len == 0 && !digits.is_empty() {
            return Err(ParseBitArrayError::NoDigits);
        }

        let mut bits = Self::new(len);
        let mut i = 0;
        for b in digits.bytes().rev() {
            match b {
                b'1' => {
                    bits.set(i, true);
                    i += 1;
                }
                b'0' => i += 1,
                _ => {}
            }
        }
        Ok(bits)
    }
}

// ============================================================================
// Bitwise Operator Implementations
// ============================================================================
//
// Whole-array operators require equal lengths and panic otherwise.

impl<W: Word> BitAndAssign<&Self> for BitArray<W> {
    /// # Examples
    ///
    /// ```
    /// use bitop_range::BitArray;
    ///
    /// let mut a: BitArray<u8> = "1100".parse().unwrap();
    /// let b: BitArray<u8> = "1010".parse().unwrap();
    /// a &= &b;
    /// assert_eq!(a.to_string(), "1000");
    /// ```
    fn bitand_assign(&mut self, rhs: &Self) {
        self.apply_all(BitOp::And, rhs);
    }
}

impl<W: Word> BitOrAssign<&Self> for BitArray<W> {
    fn bitor_assign(&mut self, rhs: &Self) {
        self.apply_all(BitOp::Or, rhs);
    }
}

impl<W: Word> BitXorAssign<&Self> for BitArray<W> {
    fn bitxor_assign(&mut self, rhs: &Self) {
        self.apply_all(BitOp::Xor, rhs);
    }
}

impl<W: Word> BitAnd for &BitArray<W> {
    type Output = BitArray<W>;

    #[inline]
    fn bitand(self, rhs: Self) -> Self::Output {
        let mut result = self.clone();
        result &= rhs;
        result
    }
}

impl<W: Word> BitOr for &BitArray<W> {
    type Output = BitArray<W>;

    #[inline]
    fn bitor(self, rhs: Self) -> Self::Output {
        let mut result = self.clone();
        result |= rhs;
        result
    }
}

impl<W: Word> BitXor for &BitArray<W> {
    type Output = BitArray<W>;

    #[inline]
    fn bitxor(self, rhs: Self) -> Self::Output {
        let mut result = self.clone();
        result ^= rhs;
        result
    }
}
