//! Error types for parsing and arithmetic.

use thiserror::Error;

/// Errors that can occur when parsing a decimal string into a
/// [`BigInt`](crate::BigInt).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseBigIntError {
    /// The input contained no digits after trimming whitespace and an
    /// optional sign.
    #[error("empty input")]
    Empty,

    /// A character other than an ASCII decimal digit followed the sign.
    #[error("invalid digit {ch:?} at offset {offset}")]
    InvalidDigit {
        /// The offending character.
        ch: char,
        /// Byte offset of the character within the digit run.
        offset: usize,
    },
}

/// Division or modulus by a value with zero magnitude.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("division by zero")]
pub struct DivideByZeroError;
