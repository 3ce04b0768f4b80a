use thiserror::Error;

use crate::error::{CoerceError, ParseError};

/// Represents all errors that can occur while evaluating an engine operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// `/`, `%` or `%%` with a zero divisor.
    #[error("division by zero")]
    DivisionByZero,
    /// `**` with a negative exponent, which has no integer result.
    #[error("exponent {exponent} is negative")]
    NegativeExponent {
        /// The exponent.
        exponent: i64,
    },
    /// A comparison operand that is not exactly an `i32`, `u32` or `i64`.
    #[error("operand {operand} cannot be compared exactly as a 64-bit integer")]
    UnsafeOperand {
        /// The rejected operand.
        operand: String,
    },
    /// The template could not be read.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// An operand could not be coerced.
    #[error(transparent)]
    Coerce(#[from] CoerceError),
}
