/// The 64-bit operations.
///
/// Declares the `I64` engine and its arithmetic, bitwise, shift, rotation,
/// bit-counting and comparison operations, all wrapping to 64 bits.
pub mod ops;
/// Tokenizes operator templates.
///
/// Converts template text into a sequence of tokens: operands and the
/// arithmetic, bitwise, shift and comparison operators.
pub mod lexer;
/// Parses operator templates.
///
/// Turns template text into a [`Template`](crate::ast::Template), checking its
/// shape and classifying its operator.
pub mod parser;
/// Evaluates operator templates.
///
/// Dispatches parsed templates, and operators given as text, to the `I64`
/// operations, resolving operands with the strict `i64` coercer.
pub mod evaluator;

pub use ops::{EvalResult, I64};
