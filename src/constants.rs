//! Named boundary values for the fixed-width numeric types.
//!
//! Integer bounds that fit in a float are exposed as the native type; the
//! 64-bit bounds stay integers because they are not exactly representable as
//! `f64`.

/// The minimum value for an 8-bit signed integer.
pub const I8_MIN: i8 = i8::MIN;
/// The maximum value for an 8-bit signed integer.
pub const I8_MAX: i8 = i8::MAX;
/// The minimum value for an 8-bit unsigned integer.
pub const U8_MIN: u8 = u8::MIN;
/// The maximum value for an 8-bit unsigned integer.
pub const U8_MAX: u8 = u8::MAX;

/// The minimum value for a 16-bit signed integer.
pub const I16_MIN: i16 = i16::MIN;
/// The maximum value for a 16-bit signed integer.
pub const I16_MAX: i16 = i16::MAX;
/// The minimum value for a 16-bit unsigned integer.
pub const U16_MIN: u16 = u16::MIN;
/// The maximum value for a 16-bit unsigned integer.
pub const U16_MAX: u16 = u16::MAX;

/// The minimum value for a 32-bit signed integer (`-2^31`).
pub const I32_MIN: i32 = i32::MIN;
/// The maximum value for a 32-bit signed integer (`2^31 - 1`).
pub const I32_MAX: i32 = i32::MAX;
/// The minimum value for a 32-bit unsigned integer.
pub const U32_MIN: u32 = u32::MIN;
/// The maximum value for a 32-bit unsigned integer (`2^32 - 1`).
pub const U32_MAX: u32 = u32::MAX;

/// The minimum value for a 64-bit signed integer (`-2^63`).
pub const I64_MIN: i64 = i64::MIN;
/// The maximum value for a 64-bit signed integer (`2^63 - 1`).
pub const I64_MAX: i64 = i64::MAX;
/// The minimum value for a 64-bit unsigned integer.
pub const U64_MIN: u64 = u64::MIN;
/// The maximum value for a 64-bit unsigned integer (`2^64 - 1`).
pub const U64_MAX: u64 = u64::MAX;

/// The most negative finite 32-bit float.
pub const F32_MIN: f32 = f32::MIN;
/// The largest finite 32-bit float.
pub const F32_MAX: f32 = f32::MAX;
/// The smallest positive normal 32-bit float.
pub const F32_MIN_NORMAL_VALUE: f32 = f32::MIN_POSITIVE;
/// The smallest integer below which 32-bit floats skip integers (`-(2^24 - 1)`).
pub const F32_MIN_SAFE_INTEGER: i32 = -16_777_215;
/// The largest integer every smaller integer of which a 32-bit float
/// represents exactly (`2^24 - 1`).
pub const F32_MAX_SAFE_INTEGER: i32 = 16_777_215;
/// Machine epsilon for 32-bit floats.
pub const F32_EPSILON: f32 = f32::EPSILON;

/// The most negative finite 64-bit float.
pub const F64_MIN: f64 = f64::MIN;
/// The largest finite 64-bit float.
pub const F64_MAX: f64 = f64::MAX;
/// The smallest positive normal 64-bit float.
pub const F64_MIN_NORMAL_VALUE: f64 = f64::MIN_POSITIVE;
/// `-(2^53 - 1)`, the lower end of the safe-integer range.
pub const F64_MIN_SAFE_INTEGER: i64 = -9_007_199_254_740_991;
/// `2^53 - 1`, the upper end of the safe-integer range.
pub const F64_MAX_SAFE_INTEGER: i64 = 9_007_199_254_740_991;
/// Machine epsilon for 64-bit floats.
pub const F64_EPSILON: f64 = f64::EPSILON;
