use std::fmt;

use thiserror::Error;

use crate::{
    value::kind::Kind,
    width::{Bound, Target},
};

/// Coarse classification of a coercion failure.
///
/// Messages are free to change; these categories are what callers should
/// match on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The input is not a number, bigint or string.
    InvalidArgumentType,
    /// The input has an accepted type but an excluded value (null, NaN,
    /// infinity, negative zero).
    InvalidArgumentValue,
    /// The input is well formed but outside the target range.
    RangeExceeded,
    /// A float has a fractional part or lies beyond the safe-integer range.
    NonIntegralOrImprecise,
    /// A string is not the canonical rendering of a number.
    MalformedString,
}

/// Why a string was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StringErrorKind {
    /// `""`.
    Empty,
    /// Only whitespace.
    Blank,
    /// Whitespace anywhere in an otherwise non-blank string.
    UnexpectedWhitespace,
    /// Exactly `"-0"`.
    NegativeZero,
    /// A leading `+` (other than `"+0"` for integers).
    UnexpectedPlusSign,
    /// A `0` followed by more characters, which also covers radix prefixes.
    UnexpectedLeadingZero,
    /// Anything that does not re-render to itself.
    Malformed,
}

impl fmt::Display for StringErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "is empty"),
            Self::Blank => write!(f, "is blank"),
            Self::UnexpectedWhitespace => write!(f, "contains whitespace"),
            Self::NegativeZero => write!(f, "is negative zero; write \"0\" instead"),
            Self::UnexpectedPlusSign => write!(f, "has a leading plus sign"),
            Self::UnexpectedLeadingZero => write!(f, "has a leading zero"),
            Self::Malformed => write!(f, "is not a canonical base-10 number"),
        }
    }
}

/// Represents every way a coercion can fail.
///
/// Each variant carries the coercer that failed, so the rendered message
/// starts with its name, for example
/// `coerce_i32(): 2147483648 exceeds the maximum of the 32-bit signed integer`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoerceError {
    /// The input kind cannot be coerced at all.
    #[error("{target}: expected a number, bigint or string but found {found}")]
    InvalidArgumentType {
        /// The failing coercer.
        target: Target,
        /// Kind of the rejected input.
        found:  Kind,
    },
    /// The input was `null`.
    #[error("{target}: missing argument")]
    MissingArgument {
        /// The failing coercer.
        target: Target,
    },
    /// The input was `NaN`.
    #[error("{target}: NaN is not a valid argument")]
    NotANumber {
        /// The failing coercer.
        target: Target,
    },
    /// The input was the float `-0`.
    #[error("{target}: negative zero is not a valid argument; use 0")]
    NegativeZero {
        /// The failing coercer.
        target: Target,
    },
    /// The input was `Infinity` or `-Infinity`.
    #[error("{target}: {value} is not finite")]
    NonFinite {
        /// The failing coercer.
        target: Target,
        /// The rejected input.
        value:  String,
    },
    /// The input lies outside the target range.
    #[error("{target}: {value} exceeds the {bound} of the {}", .target.describe())]
    RangeExceeded {
        /// The failing coercer.
        target: Target,
        /// The bound that was crossed.
        bound:  Bound,
        /// The rejected input.
        value:  String,
    },
    /// A float with a fractional part, or too large to be exact.
    #[error("{target}: {value} is not an exact integer; round it explicitly before coercing")]
    NonIntegral {
        /// The failing coercer.
        target: Target,
        /// The rejected input.
        value:  String,
    },
    /// A string that is not the canonical rendering of a number.
    #[error("{target}: string {input:?} {kind}")]
    InvalidString {
        /// The failing coercer.
        target: Target,
        /// The classification of the failure.
        kind:   StringErrorKind,
        /// The rejected input.
        input:  String,
    },
}

impl CoerceError {
    /// Maps the error onto the coarse taxonomy.
    ///
    /// # Example
    /// ```
    /// use strictnum::{coerce::coerce_i32, error::ErrorKind};
    ///
    /// let err = coerce_i32(123.5).unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::NonIntegralOrImprecise);
    ///
    /// let err = coerce_i32(-0.0).unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::InvalidArgumentValue);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArgumentType { .. } => ErrorKind::InvalidArgumentType,
            Self::MissingArgument { .. }
            | Self::NotANumber { .. }
            | Self::NegativeZero { .. }
            | Self::NonFinite { .. } => ErrorKind::InvalidArgumentValue,
            Self::RangeExceeded { .. } => ErrorKind::RangeExceeded,
            Self::NonIntegral { .. } => ErrorKind::NonIntegralOrImprecise,
            Self::InvalidString { .. } => ErrorKind::MalformedString,
        }
    }

    /// The string classification, if a string was refused for its format.
    #[must_use]
    pub const fn string_kind(&self) -> Option<StringErrorKind> {
        match self {
            Self::InvalidString { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    /// The coercer that failed.
    #[must_use]
    pub const fn target(&self) -> Target {
        match self {
            Self::InvalidArgumentType { target, .. }
            | Self::MissingArgument { target }
            | Self::NotANumber { target }
            | Self::NegativeZero { target }
            | Self::NonFinite { target, .. }
            | Self::RangeExceeded { target, .. }
            | Self::NonIntegral { target, .. }
            | Self::InvalidString { target, .. } => *target,
        }
    }

    /// The crossed bound of a range failure.
    #[must_use]
    pub const fn bound(&self) -> Option<Bound> {
        match self {
            Self::RangeExceeded { bound, .. } => Some(*bound),
            _ => None,
        }
    }
}
