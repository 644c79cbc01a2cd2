//! Iteration over set bits.

use core::iter::FusedIterator;

use crate::word::Word;

/// An iterator over the indices of set bits in a word slice.
///
/// This iterator is double-ended, allowing iteration from both the beginning
/// and end. It skips over words that contain no set bits.
///
/// # Examples
///
/// ```
/// use bitop_range::Ones;
///
/// let words = [0b1001u16, 0, 0b10];
///
/// let indices: Vec<_> = Ones::new(&words).collect();
/// assert_eq!(indices, vec![0, 3, 33]);
///
/// let rev_indices: Vec<_> = Ones::new(&words).rev().collect();
/// assert_eq!(rev_indices, vec![33, 3, 0]);
/// ```
#[derive(Debug, Clone)]
pub struct Ones<'a, W: Word> {
    words: &'a [W],
    pos: usize,  // current bit position (forward)
    rpos: usize, // one past the current bit position (reverse)
}

impl<'a, W: Word> Ones<'a, W> {
    /// Creates an iterator over every set bit of `words`.
    #[must_use]
    pub fn new(words: &'a [W]) -> Self {
        Self {
            words,
            pos: 0,
            rpos: words.len() * W::BITS,
        }
    }
}

impl<W: Word> Iterator for Ones<'_, W> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        while self.pos < self.rpos {
            let (mut wi, bi) = W::bitpos(self.pos);

            let word = self.words[wi] >> bi as u32;
            if word == W::ZERO {
                wi += 1;
                while wi < self.words.len() && self.words[wi] == W::ZERO {
                    wi += 1;
                }
                self.pos = wi * W::BITS;
                continue;
            }

            let result = self.pos + word.trailing_zeros() as usize;
            if result >= self.rpos {
                self.pos = self.rpos;
                return None;
            }
            self.pos = result + 1;
            return Some(result);
        }

        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.len();
        (n, Some(n))
    }
}

impl<W: Word> ExactSizeIterator for Ones<'_, W> {
    fn len(&self) -> usize {
        if self.pos >= self.rpos {
            return 0;
        }

        let (wmin, bmin) = W::bitpos(self.pos);
        let (wmax, bmax) = W::bitpos(self.rpos);

        if wmin == wmax {
            let mask = W::span_mask(bmin, bmax - bmin);
            return (self.words[wmin] & mask).count_ones() as usize;
        }

        let mut count = (self.words[wmin] & !W::low_mask(bmin)).count_ones() as usize;
        count += self.words[wmin + 1..wmax]
            .iter()
            .map(|&w| w.count_ones() as usize)
            .sum::<usize>();
        if bmax > 0 {
            count += (self.words[wmax] & W::low_mask(bmax)).count_ones() as usize;
        }
        count
    }
}

impl<W: Word> FusedIterator for Ones<'_, W> {}

impl<W: Word> DoubleEndedIterator for Ones<'_, W> {
    fn next_back(&mut self) -> Option<Self::Item> {
        while self.rpos > self.pos {
            let (wi, bi) = W::bitpos(self.rpos - 1);

            // Only bits up to and including `bi`
            let masked = self.words[wi] & W::low_mask(bi + 1);
            if masked == W::ZERO {
                self.rpos = wi * W::BITS;
                continue;
            }

            let highest = W::BITS - 1 - masked.leading_zeros() as usize;
            let result = wi * W::BITS + highest;
            if result < self.pos {
                self.rpos = self.pos;
                return None;
            }
            self.rpos = result;
            return Some(result);
        }

        None
    }
}
