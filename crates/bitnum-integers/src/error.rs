//! Error types for integer operations.

use thiserror::Error;

/// Errors raised by fallible `BigInt` operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BigIntError {
    /// A right shift asked for more bits than the value holds.
    #[error("cannot shift right by {shift} bits: value has only {bit_len} bits")]
    ShiftOutOfRange {
        /// Requested shift amount.
        shift: usize,
        /// Bit length of the value being shifted.
        bit_len: usize,
    },

    /// The value does not fit in the requested native integer type.
    #[error("value does not fit in {0}")]
    OutOfRange(&'static str),
}

/// Errors raised while parsing a `BigInt` from text.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseBigIntError {
    /// The input had no digits.
    #[error("cannot parse integer from empty string")]
    Empty,

    /// The input contained a character that is not a digit in the radix.
    #[error("invalid digit {digit:?} at position {position}")]
    InvalidDigit {
        /// The offending character.
        digit: char,
        /// Byte offset of the offending character.
        position: usize,
    },

    /// Only base 2 and base 10 are supported.
    #[error("unsupported radix {0}: only 2 and 10 are supported")]
    UnsupportedRadix(u32),
}
