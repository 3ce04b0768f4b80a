use crate::{error::CoerceError, value::core::Value};

/// The result of a coercion.
pub type CoerceResult<T> = Result<T, CoerceError>;

/// A type that a [`Value`] can be strictly coerced into.
///
/// Implemented for `i8`, `u8`, `i16`, `u16`, `i32`, `u32`, `i64`, `u64` and
/// `f64`; each implementation is the matching `coerce_*` function.
pub trait Coerce: Sized {
    /// Coerces `value` into `Self`, failing on any loss of information.
    fn coerce_from(value: &Value) -> CoerceResult<Self>;
}

impl Value {
    /// Coerces the value into `T`.
    ///
    /// # Example
    /// ```
    /// use strictnum::value::core::Value;
    ///
    /// let v = Value::from("4294967295");
    /// assert_eq!(v.coerce::<u32>(), Ok(4_294_967_295));
    /// assert!(v.coerce::<i32>().is_err());
    /// assert_eq!(v.coerce::<f64>(), Ok(4_294_967_295.0));
    /// ```
    pub fn coerce<T>(&self) -> CoerceResult<T>
        where T: Coerce
    {
        T::coerce_from(self)
    }
}
