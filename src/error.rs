/// Coercion errors.
///
/// Defines the failures a coercer can report, together with the coarse
/// [`ErrorKind`] taxonomy callers match on and the finer string
/// classification [`StringErrorKind`].
pub mod coerce_error;
/// Parsing errors.
///
/// Defines the errors raised while reading an operator template of the 64-bit
/// engine, before anything is evaluated.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the errors raised while evaluating an engine operation, such as
/// division by zero or comparing an operand that cannot be compared exactly.
pub mod runtime_error;

pub use coerce_error::{CoerceError, ErrorKind, StringErrorKind};
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
