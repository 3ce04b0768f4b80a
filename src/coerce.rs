/// The `Coerce` trait.
///
/// Gives generic call sites a single entry point, `value.coerce::<T>()`, for
/// every supported target type.
pub mod core;
/// Strict integer coercers.
///
/// One function per width, all sharing a single pipeline: argument checks,
/// fast paths, negative zero rejection, then the float, bigint or string
/// path with its round-trip guard.
pub mod integer;
/// The strict float coercer.
///
/// Floats pass through unchanged; bigints must be safe integers; strings must
/// be the canonical rendering of the number they parse to.
pub mod float;
/// Non-failing variants of every coercer.
///
/// Each runs the same validation and substitutes a fallback, either a value
/// or a function of the original input, when it fails.
pub mod fallback;

pub use self::core::{Coerce, CoerceResult};
pub use fallback::{
    safe_coerce, safe_coerce_f64, safe_coerce_f64_with, safe_coerce_i8, safe_coerce_i8_with,
    safe_coerce_i16, safe_coerce_i16_with, safe_coerce_i32, safe_coerce_i32_with, safe_coerce_i64,
    safe_coerce_i64_with, safe_coerce_u8, safe_coerce_u8_with, safe_coerce_u16,
    safe_coerce_u16_with, safe_coerce_u32, safe_coerce_u32_with, safe_coerce_u64,
    safe_coerce_u64_with, safe_coerce_with,
};
pub use float::coerce_f64;
pub use integer::{
    coerce_i8, coerce_i16, coerce_i32, coerce_i64, coerce_u8, coerce_u16, coerce_u32, coerce_u64,
};
