use num_bigint::BigInt;
use num_traits::ToPrimitive;
use tracing::debug;

use crate::{
    coerce::core::{Coerce, CoerceResult},
    error::{CoerceError, StringErrorKind},
    guard::{range::assert_safe_integer, string::validate_float_string},
    value::core::Value,
    width::Target,
};

fn from_bigint(value: &BigInt) -> CoerceResult<f64> {
    assert_safe_integer(value)?;
    // Every safe integer is exactly representable.
    value.to_f64().ok_or_else(|| CoerceError::NonIntegral { target: Target::F64,
                                                            value:  value.to_string(), })
}

fn from_string(s: &str) -> CoerceResult<f64> {
    match s {
        "NaN" => return Ok(f64::NAN),
        "Infinity" => return Ok(f64::INFINITY),
        "-Infinity" => return Ok(f64::NEG_INFINITY),
        _ => {},
    }

    let parsed = s.parse::<f64>().ok();
    validate_float_string(s, parsed)?;
    parsed.ok_or_else(|| CoerceError::InvalidString { target: Target::F64,
                                                      kind:   StringErrorKind::Malformed,
                                                      input:  s.to_string(), })
}

/// Runs the float pipeline.
pub(crate) fn coerce_float(value: &Value) -> CoerceResult<f64> {
    let target = Target::F64;

    let result = match value {
        Value::Null => Err(CoerceError::MissingArgument { target }),
        Value::Number(n) => Ok(*n),
        Value::BigInt(n) => from_bigint(n),
        Value::String(s) => from_string(s),
        other => Err(CoerceError::InvalidArgumentType { target,
                                                        found: other.kind() }),
    };

    if let Err(err) = &result {
        debug!(coercer = %target, input = %value, %err, "coercion rejected");
    }
    result
}

impl Coerce for f64 {
    fn coerce_from(value: &Value) -> CoerceResult<Self> {
        coerce_float(value)
    }
}

/// Coerces a value to a 64-bit float.
///
/// Floats are already the target representation and pass through unchanged,
/// `NaN`, infinities and `-0` included. Bigints must lie in the safe-integer
/// range so that the conversion is exact. Strings must be spelled exactly as
/// the number they denote renders (`"0.5"`, `"1e+21"`, `"-Infinity"`).
///
/// # Parameters
/// - `value`: A float, bigint or string, or anything convertible to
///   [`Value`].
///
/// # Returns
/// - `Ok(f64)`: The exact value.
/// - `Err(CoerceError)`: On an unsupported kind, a bigint beyond `2^53 - 1`
///   in magnitude, or a non-canonical string.
///
/// # Example
/// ```
/// use num_bigint::BigInt;
/// use strictnum::{coerce::coerce_f64, error::ErrorKind};
///
/// assert_eq!(coerce_f64("0.5"), Ok(0.5));
/// assert_eq!(coerce_f64("-Infinity"), Ok(f64::NEG_INFINITY));
/// assert_eq!(coerce_f64(BigInt::from(9_007_199_254_740_991i64)), Ok(9_007_199_254_740_991.0));
/// assert!(coerce_f64(f64::NAN).unwrap().is_nan());
///
/// let err = coerce_f64(BigInt::from(9_007_199_254_740_992i64)).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::RangeExceeded);
///
/// let err = coerce_f64("1.50").unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::MalformedString);
/// ```
pub fn coerce_f64(value: impl Into<Value>) -> CoerceResult<f64> {
    coerce_float(&value.into())
}
