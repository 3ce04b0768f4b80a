//! # strictnum
//!
//! strictnum converts loosely-typed numeric input (floats, arbitrary-precision
//! integers and decimal strings) into fixed-width integers and floats without
//! ever truncating, rounding or wrapping silently. A conversion either
//! returns the exact value or fails with an error saying why.
//!
//! It also provides `I64`, a wrapping signed 64-bit integer engine with a
//! small operator template language (`"1024 << 10"`, `"~5"`, `"-1 < 0"`).
//!
//! ```
//! use strictnum::{coerce::coerce_i32, engine::I64, error::ErrorKind};
//!
//! assert_eq!(coerce_i32("2147483647"), Ok(2_147_483_647));
//! assert_eq!(coerce_i32("2147483648").unwrap_err().kind(), ErrorKind::RangeExceeded);
//! assert_eq!(I64::eval("1024 << 10"), Ok(1_048_576));
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Defines the operators and templates of the 64-bit engine.
///
/// This module declares the operator enums and the `Template` tree produced
/// by the engine's parser and consumed by its evaluator.
pub mod ast;
/// Strict coercion functions.
///
/// One coercer per target type, each with non-failing variants, all built on
/// the validation guards.
///
/// # Responsibilities
/// - Dispatch on the input kind and reject unsupported kinds.
/// - Short-circuit the most common literal values.
/// - Truncate floats with the native rule of the target width and verify
///   nothing was lost.
/// - Parse strings strictly as base-10 and verify they round-trip.
pub mod coerce;
/// Named boundary values for fixed-width integers and floats.
pub mod constants;
/// The wrapping signed 64-bit integer engine and its template language.
pub mod engine;
/// Provides the error types of the crate.
///
/// This module defines the errors raised by coercers and by the 64-bit
/// engine. Coercion errors carry the failing coercer and the offending input,
/// and classify themselves into a small, stable taxonomy.
pub mod error;
/// Validation guards shared by the coercers.
///
/// # Responsibilities
/// - Check integer, float and bigint values against width ranges.
/// - Verify that strings are the canonical rendering of their value.
/// - Verify that float truncation is lossless.
pub mod guard;
/// General numeric utilities.
///
/// This module provides the bit-level helpers used throughout the crate:
/// native truncation rules, 64-bit wrapping of bigints, safe-integer checks
/// and the canonical rendering of floats.
pub mod util;
/// The dynamic input type and its classification.
pub mod value;
/// Integer widths and their boundaries.
pub mod width;

pub use coerce::{
    Coerce, coerce_f64, coerce_i8, coerce_i16, coerce_i32, coerce_i64, coerce_u8, coerce_u16,
    coerce_u32, coerce_u64,
};
pub use engine::I64;
pub use error::{CoerceError, ErrorKind, ParseError, RuntimeError, StringErrorKind};
pub use value::{core::Value, kind::Kind};
pub use width::{Bound, IntWidth, Target};
