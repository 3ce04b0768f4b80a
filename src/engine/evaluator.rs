use tracing::trace;

use crate::{
    ast::{BinaryOperator, ComparisonOperator, InfixOperator, Template, UnaryOperator},
    coerce::coerce_i64,
    engine::{
        ops::{EvalResult, I64},
        parser::{parse_infix_operator, parse_prefix_operator, parse_template},
    },
    error::{ParseError, RuntimeError},
    guard::range::in_range,
    util::num::{f64_to_i128_exact, is_negative_zero},
    value::core::Value,
    width::IntWidth,
};

/// Resolves a comparison operand, accepting only values that compare
/// exactly: a float holding an `i32` or `u32` value, a bigint in the `i64`
/// range, or a string accepted by `coerce_i64`.
fn comparable(value: &Value) -> EvalResult<i64> {
    let exact = match value {
        Value::Number(n) if !is_negative_zero(*n) => {
            f64_to_i128_exact(*n).filter(|&i| i >= IntWidth::I32.min() && i <= IntWidth::U32.max())
                                 .and_then(|i| i64::try_from(i).ok())
        },
        Value::BigInt(n) if in_range(IntWidth::I64, n) => coerce_i64(n).ok(),
        Value::String(s) => coerce_i64(s.as_str()).ok(),
        _ => None,
    };

    exact.ok_or_else(|| RuntimeError::UnsafeOperand { operand: value.to_string() })
}

impl I64 {
    /// Applies an infix operator to two engine values.
    pub fn binary(operator: BinaryOperator, x: i64, y: i64) -> EvalResult<i64> {
        match operator {
            BinaryOperator::Add => Ok(Self::add(x, y)),
            BinaryOperator::Sub => Ok(Self::sub(x, y)),
            BinaryOperator::Mul => Ok(Self::mul(x, y)),
            BinaryOperator::Div => Self::div(x, y),
            BinaryOperator::Rem => Self::rem(x, y),
            BinaryOperator::Mod => Self::modulo(x, y),
            BinaryOperator::Pow => Self::pow(x, y),
            BinaryOperator::And => Ok(Self::and(x, y)),
            BinaryOperator::Or => Ok(Self::or(x, y)),
            BinaryOperator::Xor => Ok(Self::xor(x, y)),
            BinaryOperator::Shl => Ok(Self::shl(x, y)),
            BinaryOperator::Shr => Ok(Self::shr(x, y)),
            BinaryOperator::ShrUnsigned => Ok(Self::shr_unsigned(x, y)),
        }
    }

    /// Applies a prefix operator to an engine value.
    #[must_use]
    pub const fn unary(operator: UnaryOperator, x: i64) -> i64 {
        match operator {
            UnaryOperator::Negate => x.wrapping_neg(),
            UnaryOperator::Plus => x,
            UnaryOperator::Not => Self::not(x),
        }
    }

    /// Compares two values with a comparison operator.
    ///
    /// Both operands must compare exactly as 64-bit integers; anything else
    /// fails with [`RuntimeError::UnsafeOperand`].
    ///
    /// # Example
    /// ```
    /// use num_bigint::BigInt;
    /// use strictnum::{ast::ComparisonOperator, engine::ops::I64};
    ///
    /// assert_eq!(I64::compare(ComparisonOperator::Less, 4_294_967_295.0, BigInt::from(i64::MAX)),
    ///            Ok(true));
    /// assert_eq!(I64::compare(ComparisonOperator::StrictEqual, "12", 12.0), Ok(true));
    /// assert!(I64::compare(ComparisonOperator::Equal, 0.5, 0.5).is_err());
    /// ```
    pub fn compare(operator: ComparisonOperator,
                   lhs: impl Into<Value>,
                   rhs: impl Into<Value>)
                   -> EvalResult<bool> {
        let x = comparable(&lhs.into())?;
        let y = comparable(&rhs.into())?;

        Ok(match operator {
               ComparisonOperator::Less => x < y,
               ComparisonOperator::Greater => x > y,
               ComparisonOperator::LessEqual => x <= y,
               ComparisonOperator::GreaterEqual => x >= y,
               ComparisonOperator::Equal | ComparisonOperator::StrictEqual => x == y,
               ComparisonOperator::NotEqual | ComparisonOperator::StrictNotEqual => x != y,
           })
    }

    /// Applies an infix operator given as text, such as `" + "`, to two
    /// values coerced with `coerce_i64`.
    ///
    /// # Example
    /// ```
    /// use strictnum::engine::ops::I64;
    ///
    /// assert_eq!(I64::apply_binary(" + ", I64::MAX, 1), Ok(I64::MIN));
    /// assert_eq!(I64::apply_binary("%%", "-7", "3"), Ok(2));
    /// assert!(I64::apply_binary(" ", 1, 2).is_err());
    /// assert!(I64::apply_binary(" < ", 1, 2).is_err());
    /// ```
    pub fn apply_binary(operator: &str,
                        x: impl Into<Value>,
                        y: impl Into<Value>)
                        -> EvalResult<i64> {
        let symbol = operator.trim();
        match parse_infix_operator(symbol, operator)? {
            InfixOperator::Arithmetic(op) => {
                let (x, y) = (coerce_i64(x)?, coerce_i64(y)?);
                trace!(%op, x, y, "applying binary operator");
                Self::binary(op, x, y)
            },
            InfixOperator::Comparison(op) => {
                Err(ParseError::ExpectedArithmetic { operator: op.to_string() }.into())
            },
        }
    }

    /// Applies a prefix operator given as text, such as `"~"`, to a value
    /// coerced with `coerce_i64`.
    pub fn apply_unary(operator: &str, x: impl Into<Value>) -> EvalResult<i64> {
        let op = parse_prefix_operator(operator.trim(), operator)?;
        let x = coerce_i64(x)?;
        trace!(%op, x, "applying unary operator");
        Ok(Self::unary(op, x))
    }

    /// Applies a comparison operator given as text, such as `" <= "`.
    pub fn apply_comparison(operator: &str,
                            lhs: impl Into<Value>,
                            rhs: impl Into<Value>)
                            -> EvalResult<bool> {
        match parse_infix_operator(operator.trim(), operator)? {
            InfixOperator::Comparison(op) => Self::compare(op, lhs, rhs),
            InfixOperator::Arithmetic(op) => {
                Err(ParseError::ExpectedComparison { operator: op.to_string() }.into())
            },
        }
    }

    /// Evaluates a parsed arithmetic template.
    pub fn eval_template(template: &Template) -> EvalResult<i64> {
        trace!(%template, "evaluating template");
        match template {
            Template::Literal(operand) => Ok(coerce_i64(operand.as_str())?),
            Template::Unary { operator, operand } => {
                Ok(Self::unary(*operator, coerce_i64(operand.as_str())?))
            },
            Template::Binary { lhs, operator, rhs } => {
                Self::binary(*operator, coerce_i64(lhs.as_str())?, coerce_i64(rhs.as_str())?)
            },
            Template::Comparison { operator, .. } => {
                Err(ParseError::ExpectedArithmetic { operator: operator.to_string() }.into())
            },
        }
    }

    /// Evaluates a parsed comparison template.
    pub fn test_template(template: &Template) -> EvalResult<bool> {
        trace!(%template, "testing template");
        match template {
            Template::Comparison { lhs, operator, rhs } => {
                Self::compare(*operator, lhs.as_str(), rhs.as_str())
            },
            Template::Binary { operator, .. } => {
                Err(ParseError::ExpectedComparison { operator: operator.to_string() }.into())
            },
            Template::Unary { operator, .. } => {
                Err(ParseError::ExpectedComparison { operator: operator.to_string() }.into())
            },
            Template::Literal(_) => {
                Err(ParseError::ExpectedComparison { operator: String::new() }.into())
            },
        }
    }

    /// Parses and evaluates an arithmetic template.
    ///
    /// Operands are coerced strictly with `coerce_i64`, so out-of-range or
    /// non-canonical operands fail rather than wrap; results of the operation
    /// itself always wrap to 64 bits.
    ///
    /// # Parameters
    /// - `source`: A template such as `"1024 << 10"`, `"~5"` or `"- 3"`.
    ///
    /// # Returns
    /// - `Ok(i64)`: The wrapped result.
    /// - `Err(RuntimeError::Parse)`: If the template cannot be read, or is a
    ///   comparison.
    /// - `Err(RuntimeError::Coerce)`: If an operand is not a valid `i64`.
    /// - `Err(RuntimeError)`: On division by zero or a negative exponent.
    ///
    /// # Example
    /// ```
    /// use strictnum::engine::ops::I64;
    ///
    /// assert_eq!(I64::eval("1024 << 10"), Ok(1_048_576));
    /// assert_eq!(I64::eval("9223372036854775807 + 1"), Ok(I64::MIN));
    /// assert_eq!(I64::eval("1_000 * 3"), Ok(3000));
    /// assert_eq!(I64::eval("~0"), Ok(-1));
    /// assert!(I64::eval("1 / 0").is_err());
    /// assert!(I64::eval("1 < 2").is_err());
    /// ```
    pub fn eval(source: &str) -> EvalResult<i64> {
        Self::eval_template(&parse_template(source)?)
    }

    /// Parses and evaluates a comparison template.
    ///
    /// # Example
    /// ```
    /// use strictnum::engine::ops::I64;
    ///
    /// assert_eq!(I64::test("-1 < 0"), Ok(true));
    /// assert_eq!(I64::test("5 !== 5"), Ok(false));
    /// assert!(I64::test("1 + 2").is_err());
    /// ```
    pub fn test(source: &str) -> EvalResult<bool> {
        Self::test_template(&parse_template(source)?)
    }
}

#[cfg(test)]
mod tests {
    use num_bigint::BigInt;

    use super::*;
    use crate::error::CoerceError;

    #[test]
    fn every_binary_operator_dispatches() {
        let cases = [("7 + 3", 10),
                     ("7 - 10", -3),
                     ("7 * 3", 21),
                     ("-7 / 2", -3),
                     ("-7 % 3", -1),
                     ("-7 %% 3", 2),
                     ("2 ** 10", 1024),
                     ("6 & -3", 4),
                     ("13 | -8", -3),
                     ("12 ^ -5", -9),
                     ("5 << -2", 1),
                     ("-5 >> 2", -2),
                     ("-1 >>> 63", 1)];

        for (source, expected) in cases {
            assert_eq!(I64::eval(source), Ok(expected), "{source}");
        }
    }

    #[test]
    fn unary_operators_wrap() {
        assert_eq!(I64::eval("-9223372036854775808"), Ok(I64::MIN));
        assert_eq!(I64::eval("- -9223372036854775808"), Ok(I64::MIN));
        assert_eq!(I64::eval("+7"), Ok(7));
        assert_eq!(I64::eval("~ 94981987261387596"), Ok(-94_981_987_261_387_597));
    }

    #[test]
    fn operands_are_coerced_strictly() {
        let err = I64::eval("9223372036854775808 + 0").unwrap_err();
        assert!(matches!(err, RuntimeError::Coerce(CoerceError::RangeExceeded { .. })));

        let err = I64::eval("0x10 + 1").unwrap_err();
        assert!(matches!(err, RuntimeError::Coerce(CoerceError::InvalidString { .. })));
    }

    #[test]
    fn every_comparison_operator_dispatches() {
        let cases = [("1 < 2", true),
                     ("2 > 1", true),
                     ("2 <= 2", true),
                     ("1 >= 2", false),
                     ("3 == 3", true),
                     ("3 != 3", false),
                     ("3 === 3", true),
                     ("3 !== 4", true)];

        for (source, expected) in cases {
            assert_eq!(I64::test(source), Ok(expected), "{source}");
        }
    }

    #[test]
    fn unsafe_operands_are_refused() {
        assert!(matches!(I64::compare(ComparisonOperator::Equal, 1.5, 1),
                         Err(RuntimeError::UnsafeOperand { .. })));
        assert!(matches!(I64::compare(ComparisonOperator::Equal, 4_294_967_296.0, 1),
                         Err(RuntimeError::UnsafeOperand { .. })));
        assert!(matches!(I64::compare(ComparisonOperator::Equal, -0.0, 0),
                         Err(RuntimeError::UnsafeOperand { .. })));
        assert!(matches!(I64::compare(ComparisonOperator::Less, BigInt::from(u64::MAX), 0),
                         Err(RuntimeError::UnsafeOperand { .. })));
        assert!(matches!(I64::test("abc < 1"), Err(RuntimeError::UnsafeOperand { .. })));
        assert_eq!(I64::compare(ComparisonOperator::Less, -2_147_483_648.0, 4_294_967_295.0),
                   Ok(true));
    }

    #[test]
    fn evaluators_reject_each_others_templates() {
        assert!(matches!(I64::eval("1 <= 2"),
                         Err(RuntimeError::Parse(ParseError::ExpectedArithmetic { .. }))));
        assert!(matches!(I64::test("5"),
                         Err(RuntimeError::Parse(ParseError::ExpectedComparison { .. }))));
        assert!(matches!(I64::apply_comparison(" + ", 1, 2),
                         Err(RuntimeError::Parse(ParseError::ExpectedComparison { .. }))));
    }

    #[test]
    fn tokenized_forms() {
        assert_eq!(I64::apply_unary("~", 0), Ok(-1));
        assert_eq!(I64::apply_unary(" - ", BigInt::from(5)), Ok(-5));
        assert_eq!(I64::apply_comparison(" >= ", "10", 10), Ok(true));
        assert!(matches!(I64::apply_binary(" ? ", 1, 2),
                         Err(RuntimeError::Parse(ParseError::UnknownOperator { .. }))));
    }
}
