use std::fmt::Debug;

use num_bigint::BigInt;
use strictnum::{
    Bound, CoerceError, ErrorKind, StringErrorKind, Value,
    coerce::{
        coerce_f64, coerce_i8, coerce_i16, coerce_i32, coerce_i64, coerce_u8, coerce_u16,
        coerce_u32, coerce_u64, safe_coerce, safe_coerce_f64, safe_coerce_i32,
        safe_coerce_i32_with, safe_coerce_i64, safe_coerce_u32, safe_coerce_u64,
    },
    constants::*,
};

fn assert_kind<T: Debug>(result: Result<T, CoerceError>, kind: ErrorKind) {
    match result {
        Ok(v) => panic!("Coercion succeeded with {v:?} but was expected to fail with {kind:?}"),
        Err(e) => assert_eq!(e.kind(), kind, "{e}"),
    }
}

fn assert_string_kind<T: Debug>(result: Result<T, CoerceError>, kind: StringErrorKind) {
    match result {
        Ok(v) => panic!("Coercion succeeded with {v:?} but was expected to fail with {kind:?}"),
        Err(e) => assert_eq!(e.string_kind(), Some(kind), "{e}"),
    }
}

#[test]
fn i32_range_boundaries_are_exact() {
    assert_eq!(coerce_i32(2_147_483_647.0), Ok(I32_MAX));
    assert_eq!(coerce_i32(-2_147_483_648.0), Ok(I32_MIN));
    assert_kind(coerce_i32(2_147_483_648.0), ErrorKind::RangeExceeded);
    assert_kind(coerce_i32(-2_147_483_649.0), ErrorKind::RangeExceeded);

    assert_eq!(coerce_i32(BigInt::from(I32_MAX)), Ok(I32_MAX));
    assert_kind(coerce_i32(BigInt::from(2_147_483_648i64)), ErrorKind::RangeExceeded);

    assert_eq!(coerce_i32("2147483647"), Ok(I32_MAX));
    assert_kind(coerce_i32("2147483648"), ErrorKind::RangeExceeded);
    assert_kind(coerce_i32("-2147483649"), ErrorKind::RangeExceeded);
}

#[test]
fn range_errors_name_the_bound() {
    let err = coerce_i32("-2147483649").unwrap_err();
    assert_eq!(err.bound(), Some(Bound::Min));
    assert!(err.to_string().contains("minimum"));

    let err = coerce_u32(4_294_967_296.0).unwrap_err();
    assert_eq!(err.bound(), Some(Bound::Max));
    assert!(err.to_string().starts_with("coerce_u32(): "));
}

#[test]
fn u32_range_boundaries_are_exact() {
    assert_eq!(coerce_u32(BigInt::from(4_294_967_295u32)), Ok(U32_MAX));
    assert_eq!(coerce_u32(4_294_967_295.0), Ok(U32_MAX));
    assert_eq!(coerce_u32("0"), Ok(U32_MIN));
    assert_kind(coerce_u32(-1.0), ErrorKind::RangeExceeded);
    assert_kind(coerce_u32("-1"), ErrorKind::RangeExceeded);
    assert_kind(coerce_u32(BigInt::from(-1)), ErrorKind::RangeExceeded);
    assert_kind(coerce_u32("4294967296"), ErrorKind::RangeExceeded);
}

#[test]
fn i64_and_u64_boundaries_are_exact() {
    assert_eq!(coerce_i64("9223372036854775807"), Ok(I64_MAX));
    assert_eq!(coerce_i64(BigInt::from(I64_MIN)), Ok(I64_MIN));
    assert_eq!(coerce_i64(-9_223_372_036_854_775_808.0), Ok(I64_MIN));
    assert_kind(coerce_i64(BigInt::from(I64_MAX) + 1), ErrorKind::RangeExceeded);
    assert_kind(coerce_i64("-9223372036854775809"), ErrorKind::RangeExceeded);

    assert_eq!(coerce_u64("18446744073709551615"), Ok(U64_MAX));
    assert_eq!(coerce_u64(BigInt::from(U64_MAX)), Ok(U64_MAX));
    assert_kind(coerce_u64(BigInt::from(U64_MAX) + 1), ErrorKind::RangeExceeded);
    assert_kind(coerce_u64(-1.0), ErrorKind::RangeExceeded);
}

#[test]
fn large_floats_beyond_the_safe_range_are_imprecise() {
    // 2^63 and 2^64 are exact floats, but not exact 64-bit integers.
    assert_kind(coerce_i64(9_223_372_036_854_775_808.0), ErrorKind::NonIntegralOrImprecise);
    assert_kind(coerce_u64(18_446_744_073_709_551_616.0), ErrorKind::NonIntegralOrImprecise);
    assert_eq!(coerce_u64(9_223_372_036_854_775_808.0), Ok(1 << 63));
}

#[test]
fn negative_zero_is_rejected() {
    assert_kind(coerce_i32(-0.0), ErrorKind::InvalidArgumentValue);
    assert_kind(coerce_u32(-0.0), ErrorKind::InvalidArgumentValue);
    assert_kind(coerce_i64(-0.0), ErrorKind::InvalidArgumentValue);
    assert_kind(coerce_u64(-0.0), ErrorKind::InvalidArgumentValue);
    assert_eq!(coerce_i32(0.0), Ok(0));
}

#[test]
fn fractions_are_rejected() {
    assert_kind(coerce_i32(123.5), ErrorKind::NonIntegralOrImprecise);
    assert_eq!(coerce_i32(123.0), Ok(123));
    assert_kind(coerce_u32(0.1), ErrorKind::NonIntegralOrImprecise);
    assert_kind(coerce_i64(-1.5), ErrorKind::NonIntegralOrImprecise);
}

#[test]
fn invalid_values_and_types() {
    assert_kind(coerce_i32(Value::Null), ErrorKind::InvalidArgumentValue);
    assert_kind(coerce_i32(None::<i32>), ErrorKind::InvalidArgumentValue);
    assert_kind(coerce_i32(f64::NAN), ErrorKind::InvalidArgumentValue);
    assert_kind(coerce_i32(f64::INFINITY), ErrorKind::InvalidArgumentValue);
    assert_kind(coerce_u64(f64::NEG_INFINITY), ErrorKind::InvalidArgumentValue);

    assert_kind(coerce_i32(true), ErrorKind::InvalidArgumentType);
    assert_kind(coerce_u32(Value::Object), ErrorKind::InvalidArgumentType);
    assert_kind(coerce_i64(Value::Array(vec![Value::from(1)])), ErrorKind::InvalidArgumentType);
    assert_kind(coerce_u64(Value::Function), ErrorKind::InvalidArgumentType);
    assert_kind(coerce_f64(Value::Symbol("x".into())), ErrorKind::InvalidArgumentType);

    let err = coerce_i32(Value::Other("Date".into())).unwrap_err();
    assert!(err.to_string().ends_with("found Date"), "{err}");
}

#[test]
fn string_strictness() {
    assert_string_kind(coerce_i32("0123"), StringErrorKind::UnexpectedLeadingZero);
    assert_string_kind(coerce_i32("0x7B"), StringErrorKind::UnexpectedLeadingZero);
    assert_string_kind(coerce_i32("-0"), StringErrorKind::NegativeZero);
    assert_eq!(coerce_i32("+0"), Ok(0));
    assert_eq!(coerce_u32("+0"), Ok(0));
    assert_string_kind(coerce_i32("+1"), StringErrorKind::UnexpectedPlusSign);
    assert_string_kind(coerce_i32(""), StringErrorKind::Empty);
    assert_string_kind(coerce_i32("  "), StringErrorKind::Blank);
    assert_string_kind(coerce_i32("12 "), StringErrorKind::UnexpectedWhitespace);
    assert_string_kind(coerce_i32("1e3"), StringErrorKind::Malformed);
    assert_string_kind(coerce_i32("12.0"), StringErrorKind::Malformed);
    assert_string_kind(coerce_u64("1_000"), StringErrorKind::Malformed);
    assert_string_kind(coerce_i64("--1"), StringErrorKind::Malformed);
}

#[test]
fn narrow_widths() {
    assert_eq!(coerce_i8("127"), Ok(I8_MAX));
    assert_eq!(coerce_u8(BigInt::from(255)), Ok(U8_MAX));
    assert_eq!(coerce_i16(-32_768.0), Ok(I16_MIN));
    assert_eq!(coerce_u16("65535"), Ok(U16_MAX));
    assert_kind(coerce_i8("128"), ErrorKind::RangeExceeded);
    assert_kind(coerce_u8(256.0), ErrorKind::RangeExceeded);
    assert_kind(coerce_u16(-1.0), ErrorKind::RangeExceeded);
}

#[test]
fn f64_coercion() {
    assert_eq!(coerce_f64(1.5), Ok(1.5));
    assert_eq!(coerce_f64("-0.25"), Ok(-0.25));
    assert_eq!(coerce_f64("1e-7"), Ok(1e-7));
    assert_eq!(coerce_f64(BigInt::from(F64_MIN_SAFE_INTEGER)), Ok(-9_007_199_254_740_991.0));
    assert_kind(coerce_f64(BigInt::from(F64_MAX_SAFE_INTEGER) + 1), ErrorKind::RangeExceeded);
    assert_string_kind(coerce_f64("+1"), StringErrorKind::UnexpectedPlusSign);
    assert_string_kind(coerce_f64("+0"), StringErrorKind::UnexpectedPlusSign);
    assert_string_kind(coerce_f64("-0"), StringErrorKind::NegativeZero);
    assert_string_kind(coerce_f64("01.5"), StringErrorKind::UnexpectedLeadingZero);
    assert_string_kind(coerce_f64(".5"), StringErrorKind::Malformed);
    assert_string_kind(coerce_f64("1.50"), StringErrorKind::Malformed);
    assert_string_kind(coerce_f64("0e0"), StringErrorKind::Malformed);
    assert_string_kind(coerce_f64(" 1"), StringErrorKind::UnexpectedWhitespace);
}

#[test]
fn safe_variants_fall_back() {
    assert_eq!(safe_coerce_i32("2147483648", -1), -1);
    assert_eq!(safe_coerce_i32("2147483647", -1), I32_MAX);
    assert_eq!(safe_coerce_u32(-0.0, 9), 9);
    assert_eq!(safe_coerce_i64(true, 0), 0);
    assert_eq!(safe_coerce_u64("0123", 1), 1);
    assert_eq!(safe_coerce_f64("1.50", 0.0), 0.0);

    let doubled = safe_coerce_i32_with(1.5, |original| match original {
                      Value::Number(n) => (n * 2.0) as i32,
                      _ => 0,
                  });
    assert_eq!(doubled, 3);
}

#[test]
fn generic_coercion_matches_the_named_functions() {
    let value = Value::from("65535");
    assert_eq!(value.coerce::<u16>(), coerce_u16("65535"));
    assert_eq!(value.coerce::<i16>(), coerce_i16("65535"));
    assert_eq!(safe_coerce::<i16>(value, 0), 0);
}

#[test]
fn end_to_end_scenario() {
    assert_eq!(coerce_i32("2147483647"), Ok(2_147_483_647));
    assert_kind(coerce_i32("2147483648"), ErrorKind::RangeExceeded);
    assert_eq!(coerce_u32(BigInt::from(4_294_967_295u32)), Ok(4_294_967_295));
}
