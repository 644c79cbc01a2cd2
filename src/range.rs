//! Bitwise combination of two bit arrays over an arbitrary bit range.
//!
//! Every function here takes a range descriptor `(offset, n)` naming the bits
//! `[offset, offset + n)`. The range does not need to be word aligned: the
//! first and last words it touches are updated through a mask, words fully
//! inside it are overwritten directly, and every bit outside it is left as it
//! was.
//!
//! These are the raw entry points. They do not validate the range; a range
//! that runs past the end of any slice panics on slice indexing. Use
//! [`try_combine`](crate::try_combine) or [`BitArray`](crate::BitArray) for
//! validated access.
//!
//! # Examples
//!
//! ```
//! use bitop_range::combine_or;
//!
//! let a1 = [0b0000_1111u8, 0];
//! let a2 = [0b1111_0000u8, 0xFF];
//! let mut dest = [0u8; 2];
//!
//! // bits 6..10 straddle the two words
//! combine_or(&a1, &a2, 6, 4, &mut dest);
//! assert_eq!(dest, [0b1100_0000, 0b0000_0011]);
//! ```

use crate::{op::BitOp, word::Word};

/// Walks the words covering `[offset, offset + n)` and stores
/// `word(index, old)` into each, masked to the range.
///
/// `word` receives the word index and the current destination word and
/// returns the fully combined word; masking is applied here. Each
/// destination word is read once and written once, in ascending order.
#[inline(always)]
fn walk<W: Word>(dest: &mut [W], offset: usize, n: usize, mut word: impl FnMut(usize, W) -> W) {
    if n == 0 {
        return;
    }

    let (mut wi, bit) = W::bitpos(offset);
    let wremain = W::BITS - bit;

    if n <= wremain {
        let mask = W::span_mask(bit, n);
        let old = dest[wi];
        dest[wi] = old.merge(word(wi, old), mask);
        return;
    }

    // Leading partial word, from `bit` to the top of the word
    let mask = W::span_mask(bit, wremain);
    let old = dest[wi];
    dest[wi] = old.merge(word(wi, old), mask);
    wi += 1;
    let mut n = n - wremain;

    // Interior words are entirely inside the range
    let full = n / W::BITS;
    let end = wi + full;
    for (i, d) in dest[wi..end].iter_mut().enumerate() {
        *d = word(wi + i, *d);
    }
    wi = end;
    n -= full * W::BITS;

    if n > 0 {
        let mask = W::low_mask(n);
        let old = dest[wi];
        dest[wi] = old.merge(word(wi, old), mask);
    }
}

/// Writes `op(a1, a2)` into `dest` over `[offset, offset + n)`, word by word.
///
/// This is the routine the four operator functions instantiate. `op` is
/// applied to whole words; only the bits inside the range reach `dest`.
/// With `n == 0` nothing is read or written.
///
/// # Panics
///
/// Panics if `offset + n` exceeds the bit length of `a1`, `a2` or `dest`.
///
/// # Examples
///
/// ```
/// use bitop_range::combine_with;
///
/// let a1 = [0xFFFF_FFFFu32];
/// let a2 = [0x0000_FFFFu32];
/// let mut dest = [0u32];
///
/// // NAND over bits 8..24
/// combine_with(&a1, &a2, 8, 16, &mut dest, |a, b| !(a & b));
/// assert_eq!(dest[0], 0x00FF_0000);
/// ```
#[inline]
pub fn combine_with<W, F>(a1: &[W], a2: &[W], offset: usize, n: usize, dest: &mut [W], op: F)
where
    W: Word,
    F: Fn(W, W) -> W,
{
    walk(dest, offset, n, |i, _| op(a1[i], a2[i]));
}

/// Sets `dest` to `a1 & a2` over `[offset, offset + n)`.
///
/// # Panics
///
/// Panics if `offset + n` exceeds the bit length of any operand.
#[inline]
pub fn combine_and<W: Word>(a1: &[W], a2: &[W], offset: usize, n: usize, dest: &mut [W]) {
    combine_with(a1, a2, offset, n, dest, |a, b| a & b);
}

/// Sets `dest` to `a1 | a2` over `[offset, offset + n)`.
///
/// # Panics
///
/// Panics if `offset + n` exceeds the bit length of any operand.
#[inline]
pub fn combine_or<W: Word>(a1: &[W], a2: &[W], offset: usize, n: usize, dest: &mut [W]) {
    combine_with(a1, a2, offset, n, dest, |a, b| a | b);
}

/// Sets `dest` to `a1 ^ a2` over `[offset, offset + n)`.
///
/// # Panics
///
/// Panics if `offset + n` exceeds the bit length of any operand.
#[inline]
pub fn combine_xor<W: Word>(a1: &[W], a2: &[W], offset: usize, n: usize, dest: &mut [W]) {
    combine_with(a1, a2, offset, n, dest, |a, b| a ^ b);
}

/// Sets `dest` to `a1 & !a2` over `[offset, offset + n)`: the bits of `a1`
/// with every bit set in `a2` removed.
///
/// # Panics
///
/// Panics if `offset + n` exceeds the bit length of any operand.
///
/// # Examples
///
/// ```
/// use bitop_range::combine_andnot;
///
/// let a1 = [0b1111_1111u8];
/// let a2 = [0b0101_0101u8];
/// let mut dest = [0u8];
///
/// combine_andnot(&a1, &a2, 0, 4, &mut dest);
/// assert_eq!(dest[0], 0b0000_1010);
/// ```
#[inline]
pub fn combine_andnot<W: Word>(a1: &[W], a2: &[W], offset: usize, n: usize, dest: &mut [W]) {
    combine_with(a1, a2, offset, n, dest, |a, b| a & !b);
}

/// Dispatches to the operator function for `op`.
///
/// The operator is resolved once per call, not once per word.
///
/// # Panics
///
/// Panics if `offset + n` exceeds the bit length of any operand.
pub fn combine<W: Word>(op: BitOp, a1: &[W], a2: &[W], offset: usize, n: usize, dest: &mut [W]) {
    match op {
        BitOp::And => combine_and(a1, a2, offset, n, dest),
        BitOp::Or => combine_or(a1, a2, offset, n, dest),
        BitOp::Xor => combine_xor(a1, a2, offset, n, dest),
        BitOp::AndNot => combine_andnot(a1, a2, offset, n, dest),
    }
}

/// Updates `dest` in place to `op(dest, src)` over `[offset, offset + n)`.
///
/// This is the form to use when the destination is also the first source.
/// Each destination word is read in full before it is written.
///
/// # Panics
///
/// Panics if `offset + n` exceeds the bit length of `dest` or `src`.
#[inline]
pub fn combine_assign_with<W, F>(dest: &mut [W], src: &[W], offset: usize, n: usize, op: F)
where
    W: Word,
    F: Fn(W, W) -> W,
{
    walk(dest, offset, n, |i, old| op(old, src[i]));
}

/// `dest &= src` over `[offset, offset + n)`.
#[inline]
pub fn and_assign<W: Word>(dest: &mut [W], src: &[W], offset: usize, n: usize) {
    combine_assign_with(dest, src, offset, n, |a, b| a & b);
}

/// `dest |= src` over `[offset, offset + n)`.
#[inline]
pub fn or_assign<W: Word>(dest: &mut [W], src: &[W], offset: usize, n: usize) {
    combine_assign_with(dest, src, offset, n, |a, b| a | b);
}

/// `dest ^= src` over `[offset, offset + n)`.
#[inline]
pub fn xor_assign<W: Word>(dest: &mut [W], src: &[W], offset: usize, n: usize) {
    combine_assign_with(dest, src, offset, n, |a, b| a ^ b);
}

/// `dest &= !src` over `[offset, offset + n)`.
#[inline]
pub fn andnot_assign<W: Word>(dest: &mut [W], src: &[W], offset: usize, n: usize) {
    combine_assign_with(dest, src, offset, n, |a, b| a & !b);
}

/// Dispatches to the in-place operator function for `op`.
///
/// # Panics
///
/// Panics if `offset + n` exceeds the bit length of `dest` or `src`.
pub fn combine_assign<W: Word>(op: BitOp, dest: &mut [W], src: &[W], offset: usize, n: usize) {
    match op {
        BitOp::And => and_assign(dest, src, offset, n),
        BitOp::Or => or_assign(dest, src, offset, n),
        BitOp::Xor => xor_assign(dest, src, offset, n),
        BitOp::AndNot => andnot_assign(dest, src, offset, n),
    }
}

/// Sets every bit of `dest` in `[offset, offset + n)` to `value`.
///
/// # Panics
///
/// Panics if `offset + n` exceeds the bit length of `dest`.
#[inline]
pub fn fill_range<W: Word>(dest: &mut [W], offset: usize, n: usize, value: bool) {
    let fill = if value { W::ONES } else { W::ZERO };
    walk(dest, offset, n, |_, _| fill);
}
