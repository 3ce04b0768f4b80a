use num_bigint::{BigInt, Sign};

use crate::constants::F64_MAX_SAFE_INTEGER;

/// `2^127`; finite floats at or beyond this magnitude no longer fit an `i128`.
const I128_LIMIT: f64 = 170_141_183_460_469_231_731_687_303_715_884_105_728.0;

/// Returns `true` if `value` is an integer within the safe-integer range.
///
/// ## Example
/// ```
/// use strictnum::util::num::is_safe_integer;
///
/// assert!(is_safe_integer(9_007_199_254_740_991.0));
/// assert!(!is_safe_integer(9_007_199_254_740_992.0));
/// assert!(!is_safe_integer(1.5));
/// assert!(!is_safe_integer(f64::INFINITY));
/// ```
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn is_safe_integer(value: f64) -> bool {
    // 2^53 - 1 is exact in f64.
    let limit = F64_MAX_SAFE_INTEGER as f64;
    value.is_finite() && value.trunc() == value && value.abs() <= limit
}

/// Returns `true` only for `-0.0`.
#[must_use]
pub fn is_negative_zero(value: f64) -> bool {
    value == 0.0 && value.is_sign_negative()
}

/// Converts an integral `f64` to `i128` without loss.
///
/// ## Returns
/// - `Some(i128)` if `value` is finite, has no fractional part and fits.
/// - `None` otherwise.
#[allow(clippy::cast_possible_truncation)]
#[must_use]
pub fn f64_to_i128_exact(value: f64) -> Option<i128> {
    if !value.is_finite() || value.trunc() != value || value.abs() >= I128_LIMIT {
        return None;
    }
    Some(value as i128)
}

/// Truncates toward zero and keeps the low 128 bits.
///
/// Non-finite input maps to zero. Floats at or above `2^127` in magnitude
/// are multiples of `2^75`, so their low 64 bits are zero and returning zero
/// keeps every narrower truncation exact.
#[allow(clippy::cast_possible_truncation)]
fn truncate_bits(value: f64) -> i128 {
    if !value.is_finite() {
        return 0;
    }
    let truncated = value.trunc();
    if truncated.abs() >= I128_LIMIT {
        return 0;
    }
    truncated as i128
}

/// Reinterprets the truncated float as a 32-bit signed integer, keeping the
/// low 32 bits (`value | 0`).
///
/// ## Example
/// ```
/// use strictnum::util::num::to_int32;
///
/// assert_eq!(to_int32(2_147_483_648.0), -2_147_483_648);
/// assert_eq!(to_int32(-1.9), -1);
/// assert_eq!(to_int32(f64::NAN), 0);
/// ```
#[allow(clippy::cast_possible_truncation)]
#[must_use]
pub fn to_int32(value: f64) -> i32 {
    truncate_bits(value) as i32
}

/// Reinterprets the truncated float as a 32-bit unsigned integer, keeping
/// the low 32 bits (`value >>> 0`).
///
/// ## Example
/// ```
/// use strictnum::util::num::to_uint32;
///
/// assert_eq!(to_uint32(-1.0), 4_294_967_295);
/// assert_eq!(to_uint32(4_294_967_296.0), 0);
/// ```
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
#[must_use]
pub fn to_uint32(value: f64) -> u32 {
    truncate_bits(value) as u32
}

/// Reinterprets the truncated float as a 64-bit signed integer
/// (`asIntN(64, value)`).
#[allow(clippy::cast_possible_truncation)]
#[must_use]
pub fn to_int64(value: f64) -> i64 {
    truncate_bits(value) as i64
}

/// Reinterprets the truncated float as a 64-bit unsigned integer
/// (`asUintN(64, value)`).
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
#[must_use]
pub fn to_uint64(value: f64) -> u64 {
    truncate_bits(value) as u64
}

/// Rounds to the nearest 32-bit float, ties to even (`Math.fround`).
///
/// ## Example
/// ```
/// use strictnum::util::num::fround;
///
/// assert_eq!(fround(0.5), 0.5);
/// assert_eq!(fround(0.1), 0.100_000_001_490_116_12);
/// assert_eq!(fround(1e39), f64::INFINITY);
/// ```
#[allow(clippy::cast_possible_truncation)]
#[must_use]
pub fn fround(value: f64) -> f64 {
    f64::from(value as f32)
}

/// Keeps the low 64 bits of an arbitrary-precision integer as an unsigned
/// bit pattern.
fn low_u64(value: &BigInt) -> u64 {
    let low = value.iter_u64_digits().next().unwrap_or(0);
    match value.sign() {
        Sign::Minus => low.wrapping_neg(),
        Sign::NoSign | Sign::Plus => low,
    }
}

/// Interprets the low 64 bits of `value` as a two's-complement signed
/// integer, discarding all higher bits.
///
/// ## Example
/// ```
/// use num_bigint::BigInt;
/// use strictnum::util::num::as_int64;
///
/// let past_max = BigInt::from(i64::MAX) + 1;
/// assert_eq!(as_int64(&past_max), i64::MIN);
/// assert_eq!(as_int64(&BigInt::from(-1)), -1);
/// ```
#[allow(clippy::cast_possible_wrap)]
#[must_use]
pub fn as_int64(value: &BigInt) -> i64 {
    low_u64(value) as i64
}

/// Interprets the low 64 bits of `value` as an unsigned integer.
#[must_use]
pub fn as_uint64(value: &BigInt) -> u64 {
    low_u64(value)
}

/// Renders a float the way `Number.prototype.toString` does.
///
/// The digits are the shortest representation that round-trips. Plain
/// notation is used for decimal exponents in `-7 < n <= 21`, exponent
/// notation (`1e+21`, `1.5e-7`) otherwise. Zero renders as `0` regardless
/// of its sign.
///
/// ## Example
/// ```
/// use strictnum::util::num::render_f64;
///
/// assert_eq!(render_f64(0.5), "0.5");
/// assert_eq!(render_f64(1e21), "1e+21");
/// assert_eq!(render_f64(123_456.0), "123456");
/// assert_eq!(render_f64(1.5e-7), "1.5e-7");
/// assert_eq!(render_f64(-0.0), "0");
/// assert_eq!(render_f64(f64::NEG_INFINITY), "-Infinity");
/// ```
#[must_use]
pub fn render_f64(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }
    if value.is_infinite() {
        let rendered = if value > 0.0 { "Infinity" } else { "-Infinity" };
        return rendered.to_string();
    }

    let sign = if value < 0.0 { "-" } else { "" };
    let scientific = format!("{:e}", value.abs());
    let (mantissa, exponent) = scientific.split_once('e').unwrap_or((scientific.as_str(), "0"));
    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    let exponent: i64 = exponent.parse().unwrap_or(0);

    #[allow(clippy::cast_possible_wrap)]
    let k = digits.len() as i64;
    let n = exponent + 1;

    let body = if k <= n && n <= 21 {
        let zeros = usize::try_from(n - k).unwrap_or(0);
        format!("{digits}{}", "0".repeat(zeros))
    } else if 0 < n && n <= 21 {
        let split = usize::try_from(n).unwrap_or(0);
        format!("{}.{}", &digits[..split], &digits[split..])
    } else if -6 < n && n <= 0 {
        let zeros = usize::try_from(-n).unwrap_or(0);
        format!("0.{}{digits}", "0".repeat(zeros))
    } else {
        let e = n - 1;
        let e_sign = if e < 0 { '-' } else { '+' };
        let (head, tail) = digits.split_at(1);
        if tail.is_empty() {
            format!("{head}e{e_sign}{}", e.unsigned_abs())
        } else {
            format!("{head}.{tail}e{e_sign}{}", e.unsigned_abs())
        }
    };

    format!("{sign}{body}")
}
