use num_bigint::BigInt;

use crate::{
    constants::F64_MAX_SAFE_INTEGER,
    error::CoerceError,
    util::num::{f64_to_i128_exact, is_negative_zero, render_f64},
    value::core::Value,
    width::{Bound, IntWidth, Target},
};

/// A value that can be checked against the range of an [`IntWidth`].
pub trait RangeCheck {
    /// Returns the bound the value crosses, or `None` if it is in range.
    fn violated_bound(&self, width: IntWidth) -> Option<Bound>;

    /// Renders the value for an error message.
    fn render(&self) -> String;
}

impl RangeCheck for i128 {
    fn violated_bound(&self, width: IntWidth) -> Option<Bound> {
        if *self < width.min() {
            Some(Bound::Min)
        } else if *self > width.max() {
            Some(Bound::Max)
        } else {
            None
        }
    }

    fn render(&self) -> String {
        self.to_string()
    }
}

macro_rules! range_check_via_i128 {
    ($($t:ty),*) => {
        $(
            impl RangeCheck for $t {
                fn violated_bound(&self, width: IntWidth) -> Option<Bound> {
                    i128::from(*self).violated_bound(width)
                }

                fn render(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

range_check_via_i128!(i32, u32, i64, u64);

impl RangeCheck for f64 {
    /// A float is in range when it is finite and both its floor and ceiling
    /// lie inside the width. `NaN` is reported against the maximum.
    #[allow(clippy::cast_precision_loss)]
    fn violated_bound(&self, width: IntWidth) -> Option<Bound> {
        // Both limits are zero or a power of two, so they are exact floats.
        let min = width.min() as f64;
        let past_max = (width.max() + 1) as f64;

        if self.is_nan() {
            Some(Bound::Max)
        } else if self.floor() < min {
            Some(Bound::Min)
        } else if self.ceil() >= past_max {
            Some(Bound::Max)
        } else {
            None
        }
    }

    fn render(&self) -> String {
        render_f64(*self)
    }
}

impl RangeCheck for BigInt {
    fn violated_bound(&self, width: IntWidth) -> Option<Bound> {
        if *self < BigInt::from(width.min()) {
            Some(Bound::Min)
        } else if *self > BigInt::from(width.max()) {
            Some(Bound::Max)
        } else {
            None
        }
    }

    fn render(&self) -> String {
        self.to_string()
    }
}

/// Returns `true` if `value` lies within the inclusive range of `width`.
///
/// # Example
/// ```
/// use num_bigint::BigInt;
/// use strictnum::{guard::range::in_range, width::IntWidth};
///
/// assert!(in_range(IntWidth::I32, &2_147_483_647i64));
/// assert!(!in_range(IntWidth::I32, &2_147_483_648i64));
/// assert!(in_range(IntWidth::U64, &BigInt::from(u64::MAX)));
/// assert!(!in_range(IntWidth::U32, &-0.5));
/// assert!(!in_range(IntWidth::I64, &f64::INFINITY));
/// ```
#[must_use]
pub fn in_range<T>(width: IntWidth, value: &T) -> bool
    where T: RangeCheck + ?Sized
{
    value.violated_bound(width).is_none()
}

/// Returns `true` if `value` is already an exact value of `width`, without
/// any conversion.
///
/// Widths of up to 32 bits hold floats that are integral, in range and not
/// `-0`. The 64-bit widths hold bigints in range. Strings never qualify.
///
/// # Example
/// ```
/// use num_bigint::BigInt;
/// use strictnum::{guard::range::is_width, value::core::Value, width::IntWidth};
///
/// assert!(is_width(IntWidth::U8, &Value::from(255.0)));
/// assert!(!is_width(IntWidth::U8, &Value::from(256.0)));
/// assert!(!is_width(IntWidth::I32, &Value::from(-0.0)));
/// assert!(!is_width(IntWidth::I32, &Value::from("5")));
/// assert!(is_width(IntWidth::U64, &Value::bigint(BigInt::from(u64::MAX))));
/// assert!(!is_width(IntWidth::I64, &Value::from(5.0)));
/// ```
#[must_use]
pub fn is_width(width: IntWidth, value: &Value) -> bool {
    match value {
        Value::Number(n) if width.bits() <= 32 && !is_negative_zero(*n) => {
            f64_to_i128_exact(*n).is_some_and(|i| in_range(width, &i))
        },
        Value::BigInt(n) if width.bits() == 64 => in_range(width, n),
        _ => false,
    }
}

/// Fails with [`CoerceError::RangeExceeded`] naming the crossed bound if
/// `value` lies outside the range of `width`.
///
/// # Example
/// ```
/// use strictnum::{guard::range::assert_in_range, width::{Bound, IntWidth}};
///
/// assert!(assert_in_range(IntWidth::U32, &4_294_967_295u64).is_ok());
///
/// let err = assert_in_range(IntWidth::U32, &-1i64).unwrap_err();
/// assert_eq!(err.bound(), Some(Bound::Min));
/// ```
pub fn assert_in_range<T>(width: IntWidth, value: &T) -> Result<(), CoerceError>
    where T: RangeCheck + ?Sized
{
    match value.violated_bound(width) {
        None => Ok(()),
        Some(bound) => Err(CoerceError::RangeExceeded { target: Target::Int(width),
                                                        bound,
                                                        value: value.render() }),
    }
}

/// Fails unless `value` lies within the safe-integer range of a 64-bit float,
/// `[-(2^53 - 1), 2^53 - 1]`.
pub fn assert_safe_integer(value: &BigInt) -> Result<(), CoerceError> {
    let limit = BigInt::from(F64_MAX_SAFE_INTEGER);
    let bound = if *value > limit {
        Some(Bound::Max)
    } else if *value < -limit {
        Some(Bound::Min)
    } else {
        None
    };

    bound.map_or(Ok(()), |bound| {
             Err(CoerceError::RangeExceeded { target: Target::F64,
                                              bound,
                                              value: value.to_string() })
         })
}
