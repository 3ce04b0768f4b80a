use num_bigint::{BigInt, Sign};
use num_traits::ToPrimitive;
use tracing::debug;

use crate::{
    coerce::core::{Coerce, CoerceResult},
    error::{CoerceError, StringErrorKind},
    guard::{
        float::validate_float_to_int, range::assert_in_range, string::validate_integer_string,
    },
    util::num::{f64_to_i128_exact, is_negative_zero, to_int32, to_int64, to_uint32, to_uint64},
    value::core::Value,
    width::{Bound, IntWidth, Target},
};

/// A native integer type produced by the strict integer pipeline.
pub(crate) trait FixedWidth: Copy + TryFrom<i128> + Into<i128> {
    /// The width whose range and truncation rule apply.
    const WIDTH: IntWidth;

    /// Truncates a float with the width's native rule, keeping the low bits.
    fn truncate(value: f64) -> Self;
}

macro_rules! fixed_width {
    ($t:ty, $width:ident, |$v:ident| $truncate:expr) => {
        impl FixedWidth for $t {
            const WIDTH: IntWidth = IntWidth::$width;

            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            fn truncate($v: f64) -> Self {
                $truncate
            }
        }

        impl Coerce for $t {
            fn coerce_from(value: &Value) -> CoerceResult<Self> {
                coerce_integer(value)
            }
        }
    };
}

fixed_width!(i8, I8, |v| to_int32(v) as i8);
fixed_width!(u8, U8, |v| to_uint32(v) as u8);
fixed_width!(i16, I16, |v| to_int32(v) as i16);
fixed_width!(u16, U16, |v| to_uint32(v) as u16);
fixed_width!(i32, I32, |v| to_int32(v));
fixed_width!(u32, U32, |v| to_uint32(v));
fixed_width!(i64, I64, |v| to_int64(v));
fixed_width!(u64, U64, |v| to_uint64(v));

/// Recognizes `0`, `1`, `-1` and the exact bounds of the width without running
/// the full pipeline.
///
/// Returns `None` whenever the full pipeline has to decide, including `-0`
/// and `-1` for unsigned widths, so a hit never differs from what the full
/// pipeline would return.
fn fast_path<T>(value: &Value) -> Option<T>
    where T: FixedWidth
{
    let (min, max) = (T::WIDTH.min(), T::WIDTH.max());
    let is_hot = |i: i128| (-1..=1).contains(&i) || i == min || i == max;

    let hit = match value {
        Value::Number(n) if is_negative_zero(*n) => None,
        Value::Number(n) => f64_to_i128_exact(*n).filter(|&i| is_hot(i)),
        Value::BigInt(n) => n.to_i128().filter(|&i| is_hot(i)),
        Value::String(s) => match s.as_str() {
            "0" | "+0" => Some(0),
            "1" => Some(1),
            "-1" => Some(-1),
            s if s == T::WIDTH.min_str() => Some(min),
            s if s == T::WIDTH.max_str() => Some(max),
            _ => None,
        },
        _ => None,
    };

    hit.and_then(|i| T::try_from(i).ok())
}

/// Narrows an in-range bigint to the native type.
fn narrow<T>(value: &BigInt) -> CoerceResult<T>
    where T: FixedWidth
{
    assert_in_range(T::WIDTH, value)?;
    value.to_i128()
         .and_then(|i| T::try_from(i).ok())
         .ok_or_else(|| {
             let bound = if value.sign() == Sign::Minus { Bound::Min } else { Bound::Max };
             CoerceError::RangeExceeded { target: Target::Int(T::WIDTH),
                                          bound,
                                          value: value.to_string() }
         })
}

/// Parses a string strictly and narrows it.
fn from_string<T>(s: &str) -> CoerceResult<T>
    where T: FixedWidth
{
    let parsed = s.parse::<BigInt>().ok();
    validate_integer_string(T::WIDTH, s, parsed.as_ref())?;
    parsed.map_or_else(|| {
                           Err(CoerceError::InvalidString { target: Target::Int(T::WIDTH),
                                                            kind:   StringErrorKind::Malformed,
                                                            input:  s.to_string(), })
                       },
                       |value| narrow(&value))
}

/// The pipeline without fast paths.
fn full_path<T>(value: &Value) -> CoerceResult<T>
    where T: FixedWidth
{
    let width = T::WIDTH;
    let target = Target::Int(width);

    match value {
        Value::Null => Err(CoerceError::MissingArgument { target }),
        Value::Number(n) if n.is_nan() => Err(CoerceError::NotANumber { target }),
        Value::Number(n) if is_negative_zero(*n) => Err(CoerceError::NegativeZero { target }),
        Value::Number(n) => {
            let truncated = T::truncate(*n);
            validate_float_to_int(width, *n, truncated.into())?;
            Ok(truncated)
        },
        Value::BigInt(n) => narrow(n),
        Value::String(s) => from_string(s),
        other => Err(CoerceError::InvalidArgumentType { target,
                                                        found: other.kind() }),
    }
}

/// Runs the strict integer pipeline for `T`.
pub(crate) fn coerce_integer<T>(value: &Value) -> CoerceResult<T>
    where T: FixedWidth
{
    if let Some(hit) = fast_path(value) {
        return Ok(hit);
    }

    let result = full_path(value);
    if let Err(err) = &result {
        debug!(coercer = %err.target(), input = %value, %err, "coercion rejected");
    }
    result
}

/// Coerces a value to an 8-bit signed integer.
pub fn coerce_i8(value: impl Into<Value>) -> CoerceResult<i8> {
    coerce_integer(&value.into())
}

/// Coerces a value to an 8-bit unsigned integer.
pub fn coerce_u8(value: impl Into<Value>) -> CoerceResult<u8> {
    coerce_integer(&value.into())
}

/// Coerces a value to a 16-bit signed integer.
pub fn coerce_i16(value: impl Into<Value>) -> CoerceResult<i16> {
    coerce_integer(&value.into())
}

/// Coerces a value to a 16-bit unsigned integer.
pub fn coerce_u16(value: impl Into<Value>) -> CoerceResult<u16> {
    coerce_integer(&value.into())
}

/// Coerces a value to a 32-bit signed integer.
///
/// Floats must be integral and within range, bigints within range, and
/// strings the canonical base-10 rendering of an in-range integer. Nothing
/// is ever rounded or wrapped.
///
/// # Parameters
/// - `value`: A float, bigint or string, or anything convertible to
///   [`Value`].
///
/// # Returns
/// - `Ok(i32)`: The exact value.
/// - `Err(CoerceError)`: See [`CoerceError::kind`] for the categories.
///
/// # Example
/// ```
/// use num_bigint::{BigInt, Sign};
/// use strictnum::{coerce::coerce_i32, error::ErrorKind};
///
/// assert_eq!(coerce_i32(2_147_483_647.0), Ok(2_147_483_647));
/// assert_eq!(coerce_i32("-2147483648"), Ok(-2_147_483_648));
/// assert_eq!(coerce_i32(BigInt::from(-5)), Ok(-5));
///
/// let err = coerce_i32("2147483648").unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::RangeExceeded);
///
/// let err = coerce_i32("0123").unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::MalformedString);
/// ```
pub fn coerce_i32(value: impl Into<Value>) -> CoerceResult<i32> {
    coerce_integer(&value.into())
}

/// Coerces a value to a 32-bit unsigned integer.
///
/// # Example
/// ```
/// use num_bigint::{BigInt, Sign};
/// use strictnum::coerce::coerce_u32;
///
/// assert_eq!(coerce_u32(BigInt::from(4_294_967_295u32)), Ok(4_294_967_295));
/// assert!(coerce_u32(-1.0).is_err());
/// ```
pub fn coerce_u32(value: impl Into<Value>) -> CoerceResult<u32> {
    coerce_integer(&value.into())
}

/// Coerces a value to a 64-bit signed integer.
///
/// Floats are accepted only when they are exactly integral and the
/// truncation to 64 bits keeps them intact, so every float beyond `2^53`
/// that is not an exact integer is rejected as imprecise.
///
/// # Example
/// ```
/// use strictnum::coerce::coerce_i64;
///
/// assert_eq!(coerce_i64("-9223372036854775808"), Ok(i64::MIN));
/// assert_eq!(coerce_i64(i64::MAX), Ok(i64::MAX));
/// assert!(coerce_i64("9223372036854775808").is_err());
/// ```
pub fn coerce_i64(value: impl Into<Value>) -> CoerceResult<i64> {
    coerce_integer(&value.into())
}

/// Coerces a value to a 64-bit unsigned integer.
pub fn coerce_u64(value: impl Into<Value>) -> CoerceResult<u64> {
    coerce_integer(&value.into())
}
