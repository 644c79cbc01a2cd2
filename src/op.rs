//! The binary operators a range combination can apply.

use core::{fmt, str::FromStr};

use crate::{error::ParseBitOpError, word::Word};

/// A bitwise binary operator applied between two bit arrays.
///
/// With the `serde` feature the operator serializes as its [`name`]. It
/// deserializes from the same names and aliases [`FromStr`] accepts, but
/// case-sensitively.
///
/// [`name`]: Self::name
///
/// # Examples
///
/// ```
/// use bitop_range::BitOp;
///
/// assert_eq!(BitOp::And.apply(0b1100u8, 0b1010), 0b1000);
/// assert_eq!(BitOp::Or.apply(0b1100u8, 0b1010), 0b1110);
/// assert_eq!(BitOp::Xor.apply(0b1100u8, 0b1010), 0b0110);
/// assert_eq!(BitOp::AndNot.apply(0b1100u8, 0b1010), 0b0100);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum BitOp {
    /// `a & b`
    And,
    /// `a | b`
    Or,
    /// `a ^ b`
    Xor,
    /// `a & !b`: the bits of the first operand with those of the second
    /// cleared.
    #[cfg_attr(feature = "serde", serde(alias = "and_not", alias = "remove"))]
    AndNot,
}

impl BitOp {
    /// All operators, in declaration order.
    pub const ALL: [Self; 4] = [Self::And, Self::Or, Self::Xor, Self::AndNot];

    /// Combines two words.
    #[inline(always)]
    #[must_use]
    pub fn apply<W: Word>(self, a: W, b: W) -> W {
        match self {
            Self::And => a & b,
            Self::Or => a | b,
            Self::Xor => a ^ b,
            Self::AndNot => a & !b,
        }
    }

    /// Combines two single bits.
    #[inline]
    #[must_use]
    pub const fn apply_bit(self, a: bool, b: bool) -> bool {
        match self {
            Self::And => a & b,
            Self::Or => a | b,
            Self::Xor => a ^ b,
            Self::AndNot => a & !b,
        }
    }

    /// Lowercase name of the operator.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::And => "and",
            Self::Or => "or",
            Self::Xor => "xor",
            Self::AndNot => "andnot",
        }
    }
}

impl fmt::Display for BitOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BitOp {
    type Err = ParseBitOpError;

    /// Parses an operator name, ignoring ASCII case.
    ///
    /// Accepts `and`, `or`, `xor`, `andnot`, and the aliases `and_not` and
    /// `remove` for AND-NOT.
    ///
    /// # Errors
    ///
    /// Returns [`ParseBitOpError`] for any other input.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitop_range::BitOp;
    ///
    /// assert_eq!("XOR".parse::<BitOp>()?, BitOp::Xor);
    /// assert_eq!("remove".parse::<BitOp>()?, BitOp::AndNot);
    /// assert!("nand".parse::<BitOp>().is_err());
    /// # Ok::<(), bitop_range::ParseBitOpError>(())
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        const NAMES: [(&str, BitOp); 6] = [
            ("and", BitOp::And),
            ("or", BitOp::Or),
            ("xor", BitOp::Xor),
            ("andnot", BitOp::AndNot),
            ("and_not", BitOp::AndNot),
            ("remove", BitOp::AndNot),
        ];

        NAMES
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(s))
            .map(|&(_, op)| op)
            .ok_or_else(|| ParseBitOpError { name: s.into() })
    }
}
