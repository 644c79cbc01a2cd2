//! Bounds-checked range combination.
//!
//! The functions in [`range`](crate::range) index straight into the caller's
//! slices. The wrappers here validate the range against every operand first
//! and report a [`RangeError`] instead of panicking; on error nothing is
//! written.

use crate::{
    error::{Operand, RangeError},
    op::BitOp,
    range::{combine, combine_assign},
    word::Word,
};

/// Returns the exclusive end of `[offset, offset + n)` once every operand is
/// known to hold it.
fn validate<W: Word>(
    offset: usize,
    n: usize,
    operands: &[(Operand, &[W])],
) -> Result<usize, RangeError> {
    let end = offset
        .checked_add(n)
        .ok_or(RangeError::Overflow { offset, n })?;

    for &(operand, words) in operands {
        let capacity = words.len().saturating_mul(W::BITS);
        if end > capacity {
            return Err(RangeError::OutOfBounds {
                operand,
                end,
                capacity,
            });
        }
    }

    Ok(end)
}

/// Validated form of [`combine`](crate::combine).
///
/// A zero-length range succeeds without inspecting the operands.
///
/// # Errors
///
/// Returns [`RangeError::Overflow`] if `offset + n` overflows, or
/// [`RangeError::OutOfBounds`] naming the first operand (in the order `a1`,
/// `a2`, `dest`) too short to hold `offset + n` bits.
///
/// # Examples
///
/// ```
/// use bitop_range::{BitOp, Operand, RangeError, try_combine};
///
/// let a1 = [0xFFu8; 2];
/// let a2 = [0x0Fu8; 2];
/// let mut dest = [0u8; 1];
///
/// try_combine(BitOp::AndNot, &a1, &a2, 2, 4, &mut dest)?;
/// assert_eq!(dest[0], 0b0011_0000);
///
/// let err = try_combine(BitOp::Or, &a1, &a2, 4, 8, &mut dest).unwrap_err();
/// assert_eq!(
///     err,
///     RangeError::OutOfBounds { operand: Operand::Dest, end: 12, capacity: 8 }
/// );
/// # Ok::<(), RangeError>(())
/// ```
pub fn try_combine<W: Word>(
    op: BitOp,
    a1: &[W],
    a2: &[W],
    offset: usize,
    n: usize,
    dest: &mut [W],
) -> Result<(), RangeError> {
    if n == 0 {
        return Ok(());
    }

    validate(
        offset,
        n,
        &[
            (Operand::First, a1),
            (Operand::Second, a2),
            (Operand::Dest, &*dest),
        ],
    )?;
    combine(op, a1, a2, offset, n, dest);
    Ok(())
}

/// Validated form of [`combine_assign`](crate::combine_assign).
///
/// # Errors
///
/// As [`try_combine`], with `dest` checked before `src`. `dest` is reported
/// as [`Operand::Dest`] and `src` as [`Operand::Second`].
pub fn try_combine_assign<W: Word>(
    op: BitOp,
    dest: &mut [W],
    src: &[W],
    offset: usize,
    n: usize,
) -> Result<(), RangeError> {
    if n == 0 {
        return Ok(());
    }

    validate(
        offset,
        n,
        &[(Operand::Dest, &*dest), (Operand::Second, src)],
    )?;
    combine_assign(op, dest, src, offset, n);
    Ok(())
}
