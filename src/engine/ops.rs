use std::cmp::Ordering;

use num_bigint::BigInt;

use crate::{
    coerce::{CoerceResult, coerce_i64},
    error::RuntimeError,
    guard::range::is_width,
    util::num::as_int64,
    value::core::Value,
    width::IntWidth,
};

/// The result of an engine operation.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// The wrapping signed 64-bit integer engine.
///
/// Every operation behaves like exact integer arithmetic followed by keeping
/// the low 64 bits as a two's-complement value, so overflow wraps instead of
/// failing. The only failures are a zero divisor and a negative exponent.
///
/// `I64` carries no state; hold one wherever the engine is needed.
///
/// # Example
/// ```
/// use strictnum::engine::ops::I64;
///
/// assert_eq!(I64::add(I64::MAX, 1), I64::MIN);
/// assert_eq!(I64::shl(1024, 10), 1_048_576);
/// assert_eq!(I64::modulo(-7, 3), Ok(2));
/// assert_eq!(I64::rem(-7, 3), Ok(-1));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct I64;

impl I64 {
    /// `-2^63`
    pub const MIN: i64 = i64::MIN;
    /// `2^63 - 1`
    pub const MAX: i64 = i64::MAX;

    /// Wrapping addition.
    #[must_use]
    pub const fn add(x: i64, y: i64) -> i64 {
        x.wrapping_add(y)
    }

    /// Wrapping subtraction.
    #[must_use]
    pub const fn sub(x: i64, y: i64) -> i64 {
        x.wrapping_sub(y)
    }

    /// Wrapping multiplication.
    #[must_use]
    pub const fn mul(x: i64, y: i64) -> i64 {
        x.wrapping_mul(y)
    }

    /// Division truncating toward zero. `MIN / -1` wraps to `MIN`.
    pub const fn div(x: i64, y: i64) -> EvalResult<i64> {
        if y == 0 {
            return Err(RuntimeError::DivisionByZero);
        }
        Ok(x.wrapping_div(y))
    }

    /// Remainder with the sign of the dividend.
    pub const fn rem(x: i64, y: i64) -> EvalResult<i64> {
        if y == 0 {
            return Err(RuntimeError::DivisionByZero);
        }
        Ok(x.wrapping_rem(y))
    }

    /// Modulo with the sign of the divisor.
    ///
    /// # Example
    /// ```
    /// use strictnum::engine::ops::I64;
    ///
    /// assert_eq!(I64::modulo(7, -3), Ok(-2));
    /// assert_eq!(I64::modulo(-7, -3), Ok(-1));
    /// assert_eq!(I64::modulo(6, 3), Ok(0));
    /// ```
    pub const fn modulo(x: i64, y: i64) -> EvalResult<i64> {
        if y == 0 {
            return Err(RuntimeError::DivisionByZero);
        }
        let r = x.wrapping_rem(y);
        // Opposite signs cannot overflow.
        if r != 0 && (r < 0) != (y < 0) {
            Ok(r + y)
        } else {
            Ok(r)
        }
    }

    /// Wrapping exponentiation by squaring.
    ///
    /// # Example
    /// ```
    /// use strictnum::engine::ops::I64;
    ///
    /// assert_eq!(I64::pow(3, 4), Ok(81));
    /// assert_eq!(I64::pow(2, 64), Ok(0));
    /// assert_eq!(I64::pow(2, 63), Ok(I64::MIN));
    /// assert!(I64::pow(2, -1).is_err());
    /// ```
    pub const fn pow(base: i64, exponent: i64) -> EvalResult<i64> {
        if exponent < 0 {
            return Err(RuntimeError::NegativeExponent { exponent });
        }

        let mut result: i64 = 1;
        let mut base = base;
        let mut exponent = exponent;
        while exponent > 0 {
            if exponent & 1 == 1 {
                result = result.wrapping_mul(base);
            }
            base = base.wrapping_mul(base);
            exponent >>= 1;
        }
        Ok(result)
    }

    /// Bitwise and.
    #[must_use]
    pub const fn and(x: i64, y: i64) -> i64 {
        x & y
    }

    /// Bitwise or.
    #[must_use]
    pub const fn or(x: i64, y: i64) -> i64 {
        x | y
    }

    /// Bitwise exclusive or.
    #[must_use]
    pub const fn xor(x: i64, y: i64) -> i64 {
        x ^ y
    }

    /// Bitwise complement, `-x - 1`.
    #[must_use]
    pub const fn not(x: i64) -> i64 {
        !x
    }

    /// Shifts left by `shift`, or arithmetically right by `-shift` when it
    /// is negative. Shifts of 64 or more clear every bit, or fill with the
    /// sign when shifting right.
    ///
    /// # Example
    /// ```
    /// use strictnum::engine::ops::I64;
    ///
    /// assert_eq!(I64::shl(5, -2), 1);
    /// assert_eq!(I64::shl(1, 63), I64::MIN);
    /// assert_eq!(I64::shl(1, 64), 0);
    /// ```
    #[must_use]
    pub const fn shl(x: i64, shift: i64) -> i64 {
        if shift >= 0 {
            shift_left(x, shift.unsigned_abs())
        } else {
            shift_right(x, shift.unsigned_abs())
        }
    }

    /// Shifts arithmetically right by `shift`, or left by `-shift` when it is
    /// negative.
    ///
    /// # Example
    /// ```
    /// use strictnum::engine::ops::I64;
    ///
    /// assert_eq!(I64::shr(-5, 2), -2);
    /// assert_eq!(I64::shr(5, -2), 20);
    /// assert_eq!(I64::shr(-1, 100), -1);
    /// ```
    #[must_use]
    pub const fn shr(x: i64, shift: i64) -> i64 {
        if shift >= 0 {
            shift_right(x, shift.unsigned_abs())
        } else {
            shift_left(x, shift.unsigned_abs())
        }
    }

    /// Shifts the unsigned bit pattern right by `shift`, filling with zeros,
    /// or left by `-shift` when it is negative.
    ///
    /// # Example
    /// ```
    /// use strictnum::engine::ops::I64;
    ///
    /// assert_eq!(I64::shr_unsigned(-1, 60), 15);
    /// assert_eq!(I64::shr_unsigned(-1, 64), 0);
    /// assert_eq!(I64::shr_unsigned(3, -1), 6);
    /// ```
    #[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss, clippy::cast_possible_truncation)]
    #[must_use]
    pub const fn shr_unsigned(x: i64, shift: i64) -> i64 {
        if shift < 0 {
            return shift_left(x, shift.unsigned_abs());
        }
        if shift >= 64 {
            return 0;
        }
        ((x as u64) >> (shift as u32)) as i64
    }

    /// Rotates left by `shift` modulo 64.
    ///
    /// # Example
    /// ```
    /// use strictnum::engine::ops::I64;
    ///
    /// assert_eq!(I64::rotl(I64::MIN, 1), 1);
    /// assert_eq!(I64::rotl(1, 65), 2);
    /// assert_eq!(I64::rotl(1, -1), I64::MIN);
    /// ```
    #[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss, clippy::cast_possible_truncation)]
    #[must_use]
    pub const fn rotl(x: i64, shift: i64) -> i64 {
        (x as u64).rotate_left((shift & 63) as u32) as i64
    }

    /// Rotates right by `shift` modulo 64.
    #[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss, clippy::cast_possible_truncation)]
    #[must_use]
    pub const fn rotr(x: i64, shift: i64) -> i64 {
        (x as u64).rotate_right((shift & 63) as u32) as i64
    }

    /// Counts leading zero bits; 64 for zero.
    #[must_use]
    pub fn clz(x: i64) -> i64 {
        i64::from(x.leading_zeros())
    }

    /// Counts trailing zero bits; 64 for zero.
    #[must_use]
    pub fn ctz(x: i64) -> i64 {
        i64::from(x.trailing_zeros())
    }

    /// Counts set bits in the two's-complement pattern.
    #[must_use]
    pub fn popcnt(x: i64) -> i64 {
        i64::from(x.count_ones())
    }

    /// Wrapping absolute value. `abs(MIN)` is `MIN`.
    #[must_use]
    pub const fn abs(x: i64) -> i64 {
        x.wrapping_abs()
    }

    /// The smaller of two values.
    #[must_use]
    pub fn min(x: i64, y: i64) -> i64 {
        x.min(y)
    }

    /// The larger of two values.
    #[must_use]
    pub fn max(x: i64, y: i64) -> i64 {
        x.max(y)
    }

    /// Three-way comparison; `Ordering as i8` gives `-1`, `0` or `1`.
    #[must_use]
    pub fn cmp(x: i64, y: i64) -> Ordering {
        x.cmp(&y)
    }

    /// Keeps the low 64 bits of an arbitrary-precision integer.
    ///
    /// # Example
    /// ```
    /// use num_bigint::BigInt;
    /// use strictnum::engine::ops::I64;
    ///
    /// assert_eq!(I64::wrap(&(BigInt::from(I64::MAX) + 1)), I64::MIN);
    /// assert_eq!(I64::wrap(&BigInt::from(-3)), -3);
    /// ```
    #[must_use]
    pub fn wrap(value: &BigInt) -> i64 {
        as_int64(value)
    }

    /// Returns `true` only for a bigint within the 64-bit signed range.
    ///
    /// # Example
    /// ```
    /// use num_bigint::BigInt;
    /// use strictnum::{engine::ops::I64, value::core::Value};
    ///
    /// assert!(I64::is_i64(&Value::from(i64::MIN)));
    /// assert!(!I64::is_i64(&Value::bigint(BigInt::from(u64::MAX))));
    /// assert!(!I64::is_i64(&Value::from(5.0)));
    /// ```
    #[must_use]
    pub fn is_i64(value: &Value) -> bool {
        is_width(IntWidth::I64, value)
    }

    /// Returns `true` only for a bigint within the 64-bit unsigned range.
    ///
    /// # Example
    /// ```
    /// use num_bigint::BigInt;
    /// use strictnum::{engine::ops::I64, value::core::Value};
    ///
    /// assert!(I64::is_u64(&Value::bigint(BigInt::from(u64::MAX))));
    /// assert!(!I64::is_u64(&Value::bigint(-1)));
    /// ```
    #[must_use]
    pub fn is_u64(value: &Value) -> bool {
        is_width(IntWidth::U64, value)
    }

    /// Returns `true` for a bigint that is a signed or unsigned 64-bit value,
    /// that is, within `[-2^63, 2^64 - 1]`.
    #[must_use]
    pub fn is_64_bit(value: &Value) -> bool {
        Self::is_i64(value) || Self::is_u64(value)
    }

    /// Strictly coerces a value into the engine's domain.
    pub fn from_value(value: impl Into<Value>) -> CoerceResult<i64> {
        coerce_i64(value)
    }
}

#[allow(clippy::cast_possible_truncation)]
const fn shift_left(x: i64, amount: u64) -> i64 {
    if amount >= 64 { 0 } else { x.wrapping_shl(amount as u32) }
}

#[allow(clippy::cast_possible_truncation)]
const fn shift_right(x: i64, amount: u64) -> i64 {
    if amount >= 64 {
        if x < 0 { -1 } else { 0 }
    } else {
        x >> amount as u32
    }
}
