//! Range combination operations for `BitArray`.

use crate::{
    BitArray,
    error::{Operand, RangeError},
    op::BitOp,
    range::{combine, combine_assign, fill_range},
    word::Word,
};

impl<W: Word> BitArray<W> {
    /// Updates `self` to `op(self, other)` over `[offset, offset + n)`.
    ///
    /// Bits outside the range are left as they are. The range is checked
    /// against both arrays before anything is written.
    ///
    /// # Errors
    ///
    /// Returns a [`RangeError`] naming `self` as [`Operand::Dest`] or `other`
    /// as [`Operand::Second`] if the range does not fit.
    pub fn apply_range(
        &mut self,
        op: BitOp,
        other: &Self,
        offset: usize,
        n: usize,
    ) -> Result<(), RangeError> {
        self.check_range(Operand::Dest, offset, n)?;
        other.check_range(Operand::Second, offset, n)?;
        combine_assign(op, &mut self.words, &other.words, offset, n);
        Ok(())
    }

    /// `self &= other` over `[offset, offset + n)`.
    ///
    /// # Errors
    ///
    /// See [`apply_range`](Self::apply_range).
    ///
    /// # Examples
    ///
    /// ```
    /// # use bitop_range::BitArray;
    /// let mut a = BitArray::<u8>::full(16);
    /// let b = BitArray::<u8>::new(16);
    ///
    /// a.and_range(&b, 6, 4)?;
    /// assert_eq!(a.as_words(), &[0b0011_1111, 0b1111_1100]);
    /// # Ok::<(), bitop_range::RangeError>(())
    /// ```
    #[inline]
    pub fn and_range(&mut self, other: &Self, offset: usize, n: usize) -> Result<(), RangeError> {
        self.apply_range(BitOp::And, other, offset, n)
    }

    /// `self |= other` over `[offset, offset + n)`.
    ///
    /// # Errors
    ///
    /// See [`apply_range`](Self::apply_range).
    #[inline]
    pub fn or_range(&mut self, other: &Self, offset: usize, n: usize) -> Result<(), RangeError> {
        self.apply_range(BitOp::Or, other, offset, n)
    }

    /// `self ^= other` over `[offset, offset + n)`.
    ///
    /// # Errors
    ///
    /// See [`apply_range`](Self::apply_range).
    #[inline]
    pub fn xor_range(&mut self, other: &Self, offset: usize, n: usize) -> Result<(), RangeError> {
        self.apply_range(BitOp::Xor, other, offset, n)
    }

    /// Clears the bits of `self` that are set in `other`, over
    /// `[offset, offset + n)`.
    ///
    /// # Errors
    ///
    /// See [`apply_range`](Self::apply_range).
    ///
    /// # Examples
    ///
    /// ```
    /// # use bitop_range::BitArray;
    /// let mut present = BitArray::<u32>::from_positions([1, 2, 3, 40, 41], 48);
    /// let removed = BitArray::<u32>::from_positions([2, 41], 48);
    ///
    /// present.andnot_range(&removed, 0, 48)?;
    /// assert_eq!(present.iter_ones().collect::<Vec<_>>(), vec![1, 3, 40]);
    /// # Ok::<(), bitop_range::RangeError>(())
    /// ```
    #[inline]
    pub fn andnot_range(&mut self, other: &Self, offset: usize, n: usize) -> Result<(), RangeError> {
        self.apply_range(BitOp::AndNot, other, offset, n)
    }

    /// Writes `op(a1, a2)` into `self` over `[offset, offset + n)`.
    ///
    /// # Errors
    ///
    /// Returns a [`RangeError`] naming the first operand (in the order `a1`,
    /// `a2`, `self`) the range does not fit.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bitop_range::{BitArray, BitOp};
    /// let a1 = BitArray::<u32>::from_positions([29, 30, 33], 40);
    /// let a2 = BitArray::<u32>::from_positions([30, 31, 32], 40);
    /// let mut dest = BitArray::<u32>::full(40);
    ///
    /// dest.combine_range(BitOp::Xor, &a1, &a2, 29, 6)?;
    /// assert_eq!(dest.count_ones_range(29, 6)?, 4); // 29, 31, 32, 33
    /// assert_eq!(dest.count_ones(), 40 - 2);
    /// # Ok::<(), bitop_range::RangeError>(())
    /// ```
    pub fn combine_range(
        &mut self,
        op: BitOp,
        a1: &Self,
        a2: &Self,
        offset: usize,
        n: usize,
    ) -> Result<(), RangeError> {
        a1.check_range(Operand::First, offset, n)?;
        a2.check_range(Operand::Second, offset, n)?;
        self.check_range(Operand::Dest, offset, n)?;
        combine(op, &a1.words, &a2.words, offset, n, &mut self.words);
        Ok(())
    }

    /// Sets every bit in `[offset, offset + n)` to `value`.
    ///
    /// # Errors
    ///
    /// Returns a [`RangeError`] if the range does not fit in the array.
    pub fn set_range(&mut self, offset: usize, n: usize, value: bool) -> Result<(), RangeError> {
        self.check_range(Operand::Dest, offset, n)?;
        fill_range(&mut self.words, offset, n, value);
        Ok(())
    }

    /// Applies `op` across the full length of both arrays.
    ///
    /// # Panics
    ///
    /// Panics if the lengths differ.
    pub(crate) fn apply_all(&mut self, op: BitOp, other: &Self) {
        assert_eq!(
            self.len, other.len,
            "bit arrays of length {} and {} cannot be combined",
            self.len, other.len
        );
        combine_assign(op, &mut self.words, &other.words, 0, self.len);
    }
}
