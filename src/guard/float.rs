use crate::{
    error::CoerceError,
    util::num::{f64_to_i128_exact, fround, is_safe_integer, render_f64},
    value::core::Value,
    width::{Bound, IntWidth, Target},
};

/// Validates that truncating `original` to `width` produced `truncated`
/// without losing anything.
///
/// `truncated` is the result of the width's native truncation rule (for
/// example `original | 0` for `i32`), widened to `i128`.
///
/// # Returns
/// - `Ok(())`: If `truncated` is exactly `original`.
/// - `Err(CoerceError::NotANumber | NonFinite)`: For `NaN` and infinities.
/// - `Err(CoerceError::RangeExceeded)`: If `original` is a safe integer that
///   does not fit `width`.
/// - `Err(CoerceError::NonIntegral)`: If `original` has a fractional part or
///   lies beyond the safe-integer range.
///
/// # Example
/// ```
/// use strictnum::{
///     error::ErrorKind,
///     guard::float::validate_float_to_int,
///     util::num::to_int32,
///     width::IntWidth,
/// };
///
/// assert!(validate_float_to_int(IntWidth::I32, 123.0, to_int32(123.0).into()).is_ok());
///
/// let err = validate_float_to_int(IntWidth::I32, 123.5, to_int32(123.5).into()).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::NonIntegralOrImprecise);
///
/// let big = 2_147_483_648.0;
/// let err = validate_float_to_int(IntWidth::I32, big, to_int32(big).into()).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::RangeExceeded);
/// ```
pub fn validate_float_to_int(width: IntWidth,
                             original: f64,
                             truncated: i128)
                             -> Result<(), CoerceError> {
    let target = Target::Int(width);

    if f64_to_i128_exact(original) == Some(truncated) {
        return Ok(());
    }
    if original.is_nan() {
        return Err(CoerceError::NotANumber { target });
    }
    if original.is_infinite() {
        return Err(CoerceError::NonFinite { target,
                                            value: render_f64(original) });
    }
    if is_safe_integer(original) {
        let bound = if original < 0.0 { Bound::Min } else { Bound::Max };
        return Err(CoerceError::RangeExceeded { target,
                                                bound,
                                                value: render_f64(original) });
    }

    Err(CoerceError::NonIntegral { target,
                                   value: render_f64(original) })
}

/// Returns `true` for a float that a 32-bit float holds exactly, so that
/// rounding it to single precision changes nothing, not even the sign of
/// zero. `NaN` and the infinities qualify.
///
/// # Example
/// ```
/// use strictnum::{guard::float::is_f32, value::core::Value};
///
/// assert!(is_f32(&Value::from(0.5)));
/// assert!(is_f32(&Value::from(-0.0)));
/// assert!(!is_f32(&Value::from(0.1)));
/// assert!(!is_f32(&Value::from("0.5")));
/// ```
#[must_use]
pub fn is_f32(value: &Value) -> bool {
    match value {
        Value::Number(n) => n.is_nan() || fround(*n).to_bits() == n.to_bits(),
        _ => false,
    }
}

/// Returns `true` for any float.
#[must_use]
pub const fn is_f64(value: &Value) -> bool {
    matches!(value, Value::Number(_))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::ErrorKind,
        util::num::{to_int64, to_uint32},
    };

    #[test]
    fn unsigned_truncation_of_negative_values_is_a_range_error() {
        let err = validate_float_to_int(IntWidth::U32, -1.0, to_uint32(-1.0).into()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::RangeExceeded);
        assert_eq!(err.bound(), Some(Bound::Min));
    }

    #[test]
    fn beyond_safe_range_is_imprecise() {
        let huge = 9_223_372_036_854_775_808.0;
        let err = validate_float_to_int(IntWidth::I64, huge, to_int64(huge).into()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NonIntegralOrImprecise);
    }

    #[test]
    fn exact_large_floats_pass_for_64_bit_widths() {
        let two_60 = 1_152_921_504_606_846_976.0;
        assert!(validate_float_to_int(IntWidth::I64, two_60, to_int64(two_60).into()).is_ok());
    }

    #[test]
    fn single_precision_membership() {
        assert!(is_f32(&Value::from(16_777_216.0)));
        assert!(!is_f32(&Value::from(16_777_217.0)));
        assert!(is_f32(&Value::from(f64::NEG_INFINITY)));
        assert!(is_f32(&Value::from(f64::NAN)));
        assert!(is_f32(&Value::from(f32::MIN_POSITIVE)));
        assert!(!is_f32(&Value::from(1e39)));
        assert!(!is_f32(&Value::from(f64::MIN_POSITIVE)));
        assert!(!is_f32(&Value::bigint(1)));
        assert!(is_f64(&Value::from(0.1)));
        assert!(!is_f64(&Value::bigint(1)));
    }

    #[test]
    fn infinity_is_not_finite() {
        let inf = f64::INFINITY;
        let err = validate_float_to_int(IntWidth::I32, inf, 0).unwrap_err();
        assert_eq!(err.to_string(), "coerce_i32(): Infinity is not finite");
    }
}
