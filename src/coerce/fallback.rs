use tracing::debug;

use crate::{coerce::core::Coerce, value::core::Value};

/// Coerces `value` into `T`, returning `fallback` on any failure.
///
/// # Example
/// ```
/// use strictnum::coerce::safe_coerce;
///
/// assert_eq!(safe_coerce::<u8>("255", 0), 255);
/// assert_eq!(safe_coerce::<u8>("256", 0), 0);
/// ```
pub fn safe_coerce<T>(value: impl Into<Value>, fallback: T) -> T
    where T: Coerce
{
    safe_coerce_with(value, |_| fallback)
}

/// Coerces `value` into `T`, calling `fallback` with the original input on
/// any failure.
///
/// The fallback runs only when coercion fails.
///
/// # Example
/// ```
/// use strictnum::{coerce::safe_coerce_with, value::core::Value};
///
/// let clamp = |original: &Value| match original {
///     Value::Number(n) if *n > 0.0 => i8::MAX,
///     _ => i8::MIN,
/// };
/// assert_eq!(safe_coerce_with(1000.0, clamp), 127);
/// assert_eq!(safe_coerce_with(-1000.0, clamp), -128);
/// assert_eq!(safe_coerce_with(12.0, clamp), 12);
/// ```
pub fn safe_coerce_with<T, F>(value: impl Into<Value>, fallback: F) -> T
    where T: Coerce,
          F: FnOnce(&Value) -> T
{
    let value = value.into();
    T::coerce_from(&value).unwrap_or_else(|err| {
                              debug!(%err, "using fallback");
                              fallback(&value)
                          })
}

macro_rules! safe_variants {
    ($($t:ty => $plain:ident, $with:ident;)*) => {
        $(
            #[doc = concat!("Non-failing `", stringify!($t), "` coercion with a fallback value.")]
            pub fn $plain(value: impl Into<Value>, fallback: $t) -> $t {
                safe_coerce(value, fallback)
            }

            #[doc = concat!("Non-failing `", stringify!($t), "` coercion with a fallback function of the original input.")]
            pub fn $with<F>(value: impl Into<Value>, fallback: F) -> $t
                where F: FnOnce(&Value) -> $t
            {
                safe_coerce_with(value, fallback)
            }
        )*
    };
}

safe_variants! {
    i8 => safe_coerce_i8, safe_coerce_i8_with;
    u8 => safe_coerce_u8, safe_coerce_u8_with;
    i16 => safe_coerce_i16, safe_coerce_i16_with;
    u16 => safe_coerce_u16, safe_coerce_u16_with;
    i32 => safe_coerce_i32, safe_coerce_i32_with;
    u32 => safe_coerce_u32, safe_coerce_u32_with;
    i64 => safe_coerce_i64, safe_coerce_i64_with;
    u64 => safe_coerce_u64, safe_coerce_u64_with;
    f64 => safe_coerce_f64, safe_coerce_f64_with;
}
