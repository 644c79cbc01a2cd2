//! `BitArray` struct and core implementation.

use alloc::{boxed::Box, vec};

use crate::{
    error::{Operand, RangeError},
    iter::Ones,
    word::Word,
};

/// A fixed-length bit array backed by a boxed slice of words.
///
/// # Overview
///
/// `BitArray` owns `len` bits stored in `W::words_for(len)` words. Its length
/// is set at construction and never changes. All range operations are
/// validated against `len` and report a [`RangeError`] instead of touching
/// memory outside the array.
///
/// # Invariants
///
/// Bits at positions `>= len` in the last word are always zero. Every
/// constructor masks them and no operation can set them, so equality,
/// hashing and [`count_ones`](Self::count_ones) can work on whole words.
///
/// # Examples
///
/// ```
/// use bitop_range::BitArray;
///
/// let mut ports = BitArray::<u32>::new(40);
/// ports.set(3, true);
/// ports.set(35, true);
///
/// let mut link_up = BitArray::<u32>::new(40);
/// link_up.set_range(0, 8, true)?;
///
/// // Keep only the ports in 0..8 that have link
/// ports.and_range(&link_up, 0, 8)?;
/// assert!(ports.get(3));
/// assert!(ports.get(35)); // outside the range, untouched
/// # Ok::<(), bitop_range::RangeError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BitArray<W: Word = u64> {
    pub(crate) words: Box<[W]>,
    pub(crate) len: usize,
}

impl<W: Word> BitArray<W> {
    /// Creates a bit array of `len` bits, all clear.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bitop_range::BitArray;
    /// let bits = BitArray::<u8>::new(10);
    /// assert_eq!(bits.len(), 10);
    /// assert_eq!(bits.as_words().len(), 2);
    /// assert_eq!(bits.count_ones(), 0);
    /// ```
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            words: vec![W::ZERO; W::words_for(len)].into_boxed_slice(),
            len,
        }
    }

    /// Creates a bit array of `len` bits, all set.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bitop_range::BitArray;
    /// let bits = BitArray::<u8>::full(10);
    /// assert_eq!(bits.count_ones(), 10);
    /// assert_eq!(bits.as_words(), &[0xFF, 0b11]);
    /// ```
    #[must_use]
    pub fn full(len: usize) -> Self {
        let mut words = vec![W::ONES; W::words_for(len)].into_boxed_slice();
        Self::mask_tail(&mut words, len);
        Self { words, len }
    }

    /// Wraps existing words as a bit array of `len` bits.
    ///
    /// Bits beyond `len` in the last word are cleared.
    ///
    /// # Panics
    ///
    /// Panics if `words` does not hold exactly `W::words_for(len)` words.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bitop_range::BitArray;
    /// let bits = BitArray::<u8>::from_words(vec![0xFF, 0xFF], 12);
    /// assert_eq!(bits.as_words(), &[0xFF, 0x0F]);
    /// ```
    #[must_use]
    pub fn from_words(words: impl Into<Box<[W]>>, len: usize) -> Self {
        let mut words = words.into();
        assert_eq!(
            words.len(),
            W::words_for(len),
            "{len} bits need {} words",
            W::words_for(len)
        );
        Self::mask_tail(&mut words, len);
        Self { words, len }
    }

    /// Creates a bit array of `len` bits with the given positions set.
    ///
    /// # Panics
    ///
    /// Panics if any position is `>= len`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bitop_range::BitArray;
    /// let bits = BitArray::<u16>::from_positions([1, 4, 17], 20);
    /// assert_eq!(bits.iter_ones().collect::<Vec<_>>(), vec![1, 4, 17]);
    /// ```
    #[must_use]
    pub fn from_positions(positions: impl IntoIterator<Item = usize>, len: usize) -> Self {
        let mut bits = Self::new(len);
        for pos in positions {
            bits.set(pos, true);
        }
        bits
    }

    /// Clears every bit of the last word at or beyond `len`.
    pub(crate) fn mask_tail(words: &mut [W], len: usize) {
        let (wi, bi) = W::bitpos(len);
        if bi != 0 {
            words[wi] &= W::low_mask(bi);
        }
    }

    /// Number of bits in the array.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the array holds no bits.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The backing words, least significant bits first.
    #[inline]
    #[must_use]
    pub fn as_words(&self) -> &[W] {
        &self.words
    }

    /// Consumes the array, returning its words.
    #[must_use]
    pub fn into_words(self) -> Box<[W]> {
        self.words
    }

    /// Returns the value of bit `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= len`.
    #[inline]
    #[must_use]
    pub fn get(&self, i: usize) -> bool {
        assert!(i < self.len, "bit index {i} out of range for length {}", self.len);
        let (wi, bi) = W::bitpos(i);
        self.words[wi].is_set(bi)
    }

    /// Sets bit `i` to `value`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= len`.
    #[inline]
    pub fn set(&mut self, i: usize, value: bool) {
        assert!(i < self.len, "bit index {i} out of range for length {}", self.len);
        let (wi, bi) = W::bitpos(i);
        let mask = W::ONE << bi as u32;
        if value {
            self.words[wi] |= mask;
        } else {
            self.words[wi] &= !mask;
        }
    }

    /// Flips bit `i`, returning its new value.
    ///
    /// # Panics
    ///
    /// Panics if `i >= len`.
    pub fn toggle(&mut self, i: usize) -> bool {
        assert!(i < self.len, "bit index {i} out of range for length {}", self.len);
        let (wi, bi) = W::bitpos(i);
        self.words[wi] ^= W::ONE << bi as u32;
        self.words[wi].is_set(bi)
    }

    /// Clears every bit.
    pub fn clear(&mut self) {
        self.words.fill(W::ZERO);
    }

    /// Number of set bits.
    #[must_use]
    pub fn count_ones(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Number of clear bits.
    #[must_use]
    pub fn count_zeros(&self) -> usize {
        self.len - self.count_ones()
    }

    /// Counts the set bits in `[offset, offset + n)`.
    ///
    /// # Errors
    ///
    /// Returns a [`RangeError`] if the range does not fit in the array.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bitop_range::BitArray;
    /// let bits = BitArray::<u8>::from_positions([1, 3, 5, 7, 9], 12);
    /// assert_eq!(bits.count_ones_range(0, 4)?, 2); // bits 1 and 3
    /// assert_eq!(bits.count_ones_range(3, 7)?, 4); // bits 3, 5, 7 and 9
    /// assert!(bits.count_ones_range(8, 5).is_err());
    /// # Ok::<(), bitop_range::RangeError>(())
    /// ```
    pub fn count_ones_range(&self, offset: usize, n: usize) -> Result<usize, RangeError> {
        self.check_range(Operand::First, offset, n)?;
        if n == 0 {
            return Ok(0);
        }

        let (beg_wi, beg_bi) = W::bitpos(offset);
        let (end_wi, end_bi) = W::bitpos(offset + n);
        let words = &self.words;

        if beg_wi == end_wi {
            let mask = W::span_mask(beg_bi, n);
            return Ok((words[beg_wi] & mask).count_ones() as usize);
        }

        // First word (partial), middle words (full), last word (partial)
        let mut count = (words[beg_wi] & !W::low_mask(beg_bi)).count_ones() as usize;
        count += words[beg_wi + 1..end_wi]
            .iter()
            .map(|w| w.count_ones() as usize)
            .sum::<usize>();
        if end_bi > 0 {
            count += (words[end_wi] & W::low_mask(end_bi)).count_ones() as usize;
        }
        Ok(count)
    }

    /// Iterates the indices of set bits in ascending order.
    #[must_use]
    pub fn iter_ones(&self) -> Ones<'_, W> {
        Ones::new(&self.words)
    }

    /// Verifies that `[offset, offset + n)` lies inside this array, blaming
    /// `operand` if it does not.
    pub(crate) fn check_range(
        &self,
        operand: Operand,
        offset: usize,
        n: usize,
    ) -> Result<(), RangeError> {
        let end = offset
            .checked_add(n)
            .ok_or(RangeError::Overflow { offset, n })?;
        if end > self.len {
            return Err(RangeError::OutOfBounds {
                operand,
                end,
                capacity: self.len,
            });
        }
        Ok(())
    }
}

impl<W: Word> Default for BitArray<W> {
    fn default() -> Self {
        Self::new(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn test_new_and_full() {
        let empty = BitArray::<u32>::new(70);
        assert_eq!(empty.as_words().len(), 3);
        assert_eq!(empty.count_ones(), 0);
        assert_eq!(empty.count_zeros(), 70);

        let full = BitArray::<u32>::full(70);
        assert_eq!(full.as_words(), &[u32::MAX, u32::MAX, 0b11_1111]);
        assert_eq!(full.count_ones(), 70);

        let aligned = BitArray::<u32>::full(64);
        assert_eq!(aligned.as_words(), &[u32::MAX, u32::MAX]);
    }

    #[test]
    fn test_default_is_empty() {
        let bits = BitArray::<u64>::default();
        assert!(bits.is_empty());
        assert!(bits.as_words().is_empty());
        assert_eq!(bits.iter_ones().count(), 0);
    }

    #[test]
    #[should_panic(expected = "10 bits need 2 words")]
    fn test_from_words_wrong_count() {
        let _ = BitArray::<u8>::from_words(vec![0; 3], 10);
    }

    #[test]
    fn test_get_set_toggle() {
        let mut bits = BitArray::<u16>::new(20);
        bits.set(0, true);
        bits.set(19, true);
        assert!(bits.get(0));
        assert!(bits.get(19));
        assert!(!bits.get(10));

        assert!(bits.toggle(10));
        assert!(!bits.toggle(0));
        assert_eq!(bits.iter_ones().collect::<Vec<_>>(), vec![10, 19]);

        bits.set(19, false);
        assert_eq!(bits.count_ones(), 1);

        bits.clear();
        assert_eq!(bits.count_ones(), 0);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_get_out_of_range() {
        let bits = BitArray::<u64>::new(64);
        let _ = bits.get(64);
    }

    #[test]
    fn test_count_ones_range_edges() {
        let bits = BitArray::<u8>::full(24);
        assert_eq!(bits.count_ones_range(0, 0), Ok(0));
        assert_eq!(bits.count_ones_range(24, 0), Ok(0));
        assert_eq!(bits.count_ones_range(0, 24), Ok(24));
        assert_eq!(bits.count_ones_range(7, 2), Ok(2));
        assert_eq!(bits.count_ones_range(8, 8), Ok(8));
        assert_eq!(bits.count_ones_range(3, 5), Ok(5));
        assert_eq!(
            bits.count_ones_range(20, 5),
            Err(RangeError::OutOfBounds {
                operand: Operand::First,
                end: 25,
                capacity: 24
            })
        );
    }
}
