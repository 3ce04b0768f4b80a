//! Property-based tests for the coercers and the 64-bit engine.
//!
//! Operations of the engine are checked against arbitrary-precision reference
//! arithmetic followed by a 64-bit wrap.

use num_bigint::BigInt;
use proptest::prelude::*;
use strictnum::{
    ErrorKind, I64,
    coerce::{coerce_f64, coerce_i32, coerce_i64, coerce_u32, coerce_u64, safe_coerce_i32},
    util::num::render_f64,
};

fn shift_amount() -> impl Strategy<Value = i64> {
    -140i64..140
}

proptest! {
    #[test]
    fn i32_strings_round_trip(n in any::<i32>()) {
        let coerced = coerce_i32(n.to_string());
        prop_assert_eq!(coerced.clone(), Ok(n));
        prop_assert_eq!(coerce_i32(n.to_string()).map(|v| v.to_string()), Ok(n.to_string()));
        prop_assert_eq!(coerce_i32(f64::from(n)), coerced);
    }

    #[test]
    fn u32_floats_are_exact(n in any::<u32>()) {
        prop_assert_eq!(coerce_u32(f64::from(n)), Ok(n));
        prop_assert_eq!(coerce_u32(BigInt::from(n)), Ok(n));
    }

    #[test]
    fn i64_and_u64_strings_round_trip(x in any::<i64>(), y in any::<u64>()) {
        prop_assert_eq!(coerce_i64(x.to_string()), Ok(x));
        prop_assert_eq!(coerce_u64(y.to_string()), Ok(y));
    }

    #[test]
    fn fractional_floats_are_always_rejected(n in -1.0e9f64..1.0e9) {
        prop_assume!(n.fract() != 0.0);
        let err = coerce_i32(n).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::NonIntegralOrImprecise);
    }

    #[test]
    fn leading_zeros_are_always_rejected(digits in "[0-9]{1,9}") {
        let padded = format!("0{digits}");
        let err = coerce_i64(padded.as_str()).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::MalformedString);
    }

    #[test]
    fn safe_variant_returns_value_or_fallback(s in "\\PC{0,12}", fallback in any::<i32>()) {
        let safe = safe_coerce_i32(s.as_str(), fallback);
        match coerce_i32(s.as_str()) {
            Ok(v) => prop_assert_eq!(safe, v),
            Err(_) => prop_assert_eq!(safe, fallback),
        }
    }

    #[test]
    fn finite_floats_round_trip_through_their_rendering(x in any::<f64>()) {
        prop_assume!(x.is_finite());
        prop_assert_eq!(coerce_f64(render_f64(x)), Ok(x));
    }

    #[test]
    fn arithmetic_wraps_like_unbounded_integers(x in any::<i64>(), y in any::<i64>()) {
        let (bx, by) = (BigInt::from(x), BigInt::from(y));
        prop_assert_eq!(I64::add(x, y), I64::wrap(&(&bx + &by)));
        prop_assert_eq!(I64::sub(x, y), I64::wrap(&(&bx - &by)));
        prop_assert_eq!(I64::mul(x, y), I64::wrap(&(&bx * &by)));
    }

    #[test]
    fn shifts_match_unbounded_shifts(x in any::<i64>(), s in shift_amount()) {
        let bx = BigInt::from(x);
        let amount = usize::try_from(s.unsigned_abs()).unwrap();
        let (left, right) = (&bx << amount, &bx >> amount);

        let (expected_shl, expected_shr) = if s >= 0 {
            (I64::wrap(&left), I64::wrap(&right))
        } else {
            (I64::wrap(&right), I64::wrap(&left))
        };
        prop_assert_eq!(I64::shl(x, s), expected_shl);
        prop_assert_eq!(I64::shr(x, s), expected_shr);
    }

    #[test]
    fn modulo_takes_the_sign_of_the_divisor(x in any::<i64>(), y in any::<i64>()) {
        prop_assume!(y != 0 && y != -1);
        let m = I64::modulo(x, y).unwrap();
        let r = I64::rem(x, y).unwrap();
        prop_assert!(m == 0 || (m < 0) == (y < 0));
        prop_assert!(r == 0 || (r < 0) == (x < 0));
        prop_assert!(m.unsigned_abs() < y.unsigned_abs());
        prop_assert_eq!(BigInt::from(x) - BigInt::from(r), BigInt::from(x / y) * BigInt::from(y));
    }

    #[test]
    fn rotations_are_inverse(x in any::<i64>(), s in shift_amount()) {
        prop_assert_eq!(I64::rotr(I64::rotl(x, s), s), x);
        prop_assert_eq!(I64::popcnt(I64::rotl(x, s)), I64::popcnt(x));
    }

    #[test]
    fn templates_agree_with_operations(x in any::<i64>(), y in 0i64..64) {
        prop_assert_eq!(I64::eval(&format!("{x} + {y}")), Ok(I64::add(x, y)));
        prop_assert_eq!(I64::eval(&format!("{x} >>> {y}")), Ok(I64::shr_unsigned(x, y)));
        prop_assert_eq!(I64::test(&format!("{x} <= {y}")), Ok(x <= y));
    }
}
