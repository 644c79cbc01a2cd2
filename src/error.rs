//! Error types.

use alloc::string::String;
use core::fmt;

/// Identifies which operand of a range combination failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operand {
    /// The first (left-hand) source array.
    First,
    /// The second (right-hand) source array.
    Second,
    /// The destination array.
    Dest,
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::First => "first source",
            Self::Second => "second source",
            Self::Dest => "destination",
        })
    }
}

/// Errors reported by the bounds-checked range operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RangeError {
    /// `offset + n` does not fit in a `usize`.
    Overflow {
        /// Starting bit of the range
        offset: usize,
        /// Number of bits in the range
        n: usize,
    },

    /// The range ends past the last bit of an operand.
    OutOfBounds {
        /// The operand that is too short
        operand: Operand,
        /// Exclusive end of the requested range, in bits
        end: usize,
        /// Number of bits the operand holds
        capacity: usize,
    },
}

impl fmt::Display for RangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Overflow { offset, n } => {
                write!(f, "bit range of {n} bits at offset {offset} overflows usize")
            }
            Self::OutOfBounds {
                operand,
                end,
                capacity,
            } => {
                write!(
                    f,
                    "bit range ending at {end} exceeds {operand} holding {capacity} bits"
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for RangeError {}

/// Error returned when parsing an unknown operator name into a
/// [`BitOp`](crate::BitOp).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseBitOpError {
    /// The rejected input
    pub name: String,
}

impl fmt::Display for ParseBitOpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown bit operator '{}', expected one of: and, or, xor, andnot",
            self.name
        )
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseBitOpError {}

/// Errors that can occur when parsing a binary string into a
/// [`BitArray`](crate::BitArray).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseBitArrayError {
    /// Invalid character found in the binary string.
    InvalidChar {
        /// The invalid character found
        ch: char,
        /// The byte position of the invalid character
        pos: usize,
    },

    /// `_` separators with no binary digits between them.
    NoDigits,
}

impl fmt::Display for ParseBitArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidChar { ch, pos } => {
                write!(
                    f,
                    "invalid character '{ch}' at position {pos} in binary string"
                )
            }
            Self::NoDigits => write!(f, "binary string has separators but no digits"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseBitArrayError {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_range_error_display() {
        let err = RangeError::OutOfBounds {
            operand: Operand::Dest,
            end: 70,
            capacity: 64,
        };
        assert_eq!(
            err.to_string(),
            "bit range ending at 70 exceeds destination holding 64 bits"
        );

        let err = RangeError::Overflow {
            offset: usize::MAX,
            n: 2,
        };
        assert!(err.to_string().contains("overflows"));
    }

    #[test]
    fn test_parse_error_display() {
        let err = ParseBitArrayError::InvalidChar { ch: 'x', pos: 3 };
        assert_eq!(
            err.to_string(),
            "invalid character 'x' at position 3 in binary string"
        );
        assert_eq!(
            ParseBitArrayError::NoDigits.to_string(),
            "binary string has separators but no digits"
        );
    }
}
