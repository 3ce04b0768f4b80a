/// The dynamic input value accepted by every coercer.
///
/// Defines the `Value` sum type and its conversions from Rust primitives,
/// arbitrary-precision integers and strings.
pub mod core;
/// Kind tags for classifying values.
///
/// Maps every `Value` onto a small closed set of tags used in error messages
/// and for dispatch.
pub mod kind;
