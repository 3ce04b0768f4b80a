use num_bigint::BigInt;

use crate::{
    error::{CoerceError, StringErrorKind},
    guard::range::assert_in_range,
    util::num::render_f64,
    width::{IntWidth, Target},
};

/// Checks the format rules shared by integer and float strings: emptiness,
/// whitespace, `"-0"` and a leading `+`.
///
/// `allow_plus_zero` accepts the literal `"+0"`, which integer coercers allow
/// and the float coercer does not.
fn check_common(original: &str, allow_plus_zero: bool) -> Result<bool, StringErrorKind> {
    if original.is_empty() {
        return Err(StringErrorKind::Empty);
    }
    if original.chars().all(char::is_whitespace) {
        return Err(StringErrorKind::Blank);
    }
    if original.chars().any(char::is_whitespace) {
        return Err(StringErrorKind::UnexpectedWhitespace);
    }
    if original == "-0" {
        return Err(StringErrorKind::NegativeZero);
    }
    if original == "+0" && allow_plus_zero {
        return Ok(true);
    }
    if original.starts_with('+') {
        return Err(StringErrorKind::UnexpectedPlusSign);
    }
    Ok(false)
}

/// Validates that `original` is the canonical base-10 rendering of `parsed`
/// and that the value fits `width`.
///
/// `parsed` is the result of parsing `original` as an arbitrary-precision
/// integer, or `None` if that failed.
///
/// # Parameters
/// - `width`: The target integer width.
/// - `original`: The string as the caller passed it.
/// - `parsed`: The parsed value, if any.
///
/// # Returns
/// - `Ok(())`: If the string round-trips and the value is in range.
/// - `Err(CoerceError::InvalidString)`: If the format is rejected, classified
///   by the first rule that fails.
/// - `Err(CoerceError::RangeExceeded)`: If the string is canonical but the
///   value does not fit.
///
/// # Example
/// ```
/// use num_bigint::BigInt;
/// use strictnum::{
///     error::StringErrorKind,
///     guard::string::validate_integer_string,
///     width::IntWidth,
/// };
///
/// let parsed = BigInt::from(123);
/// assert!(validate_integer_string(IntWidth::I32, "123", Some(&parsed)).is_ok());
///
/// let err = validate_integer_string(IntWidth::I32, "0123", Some(&parsed)).unwrap_err();
/// assert_eq!(err.string_kind(), Some(StringErrorKind::UnexpectedLeadingZero));
/// ```
pub fn validate_integer_string(width: IntWidth,
                               original: &str,
                               parsed: Option<&BigInt>)
                               -> Result<(), CoerceError> {
    let reject = |kind| CoerceError::InvalidString { target: Target::Int(width),
                                                     kind,
                                                     input: original.to_string() };

    if check_common(original, true).map_err(reject)? {
        return Ok(());
    }

    let digits = original.strip_prefix('-').unwrap_or(original);
    if digits.len() > 1 && digits.starts_with('0') {
        return Err(reject(StringErrorKind::UnexpectedLeadingZero));
    }

    match parsed {
        Some(value) if value.to_string() == original => assert_in_range(width, value),
        _ => Err(reject(StringErrorKind::Malformed)),
    }
}

/// Validates that `original` is exactly how `parsed` renders as a number.
///
/// The `"NaN"`, `"Infinity"` and `"-Infinity"` literals are expected to be
/// handled by the caller. A leading zero may only be followed by a decimal
/// point or an exponent, so `"01"` and `"00.5"` are leading-zero errors while
/// `"0.5"` is accepted and `"0e0"` is left to the round-trip check.
/// Non-canonical spellings such as `"1.50"`, `".5"`, `"1e3"` or `"0e0"` are
/// malformed.
///
/// # Example
/// ```
/// use strictnum::{error::StringErrorKind, guard::string::validate_float_string};
///
/// assert!(validate_float_string("0.5", Some(0.5)).is_ok());
/// assert!(validate_float_string("1e+21", Some(1e21)).is_ok());
///
/// let err = validate_float_string("1.50", Some(1.5)).unwrap_err();
/// assert_eq!(err.string_kind(), Some(StringErrorKind::Malformed));
/// ```
pub fn validate_float_string(original: &str, parsed: Option<f64>) -> Result<(), CoerceError> {
    let reject = |kind| CoerceError::InvalidString { target: Target::F64,
                                                     kind,
                                                     input: original.to_string() };

    check_common(original, false).map_err(reject)?;

    let digits = original.strip_prefix('-').unwrap_or(original);
    if digits.starts_with('0') && digits.len() > 1 && !digits[1..].starts_with(['.', 'e', 'E']) {
        return Err(reject(StringErrorKind::UnexpectedLeadingZero));
    }

    match parsed {
        Some(value) if render_f64(value) == original => Ok(()),
        _ => Err(reject(StringErrorKind::Malformed)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::ErrorKind, width::Bound};

    fn kind_of(original: &str) -> Option<StringErrorKind> {
        let parsed = original.parse::<BigInt>().ok();
        let result = validate_integer_string(IntWidth::I32, original, parsed.as_ref());
        result.err().and_then(|e| e.string_kind())
    }

    #[test]
    fn format_rules_apply_in_order() {
        assert_eq!(kind_of(""), Some(StringErrorKind::Empty));
        assert_eq!(kind_of(" \t"), Some(StringErrorKind::Blank));
        assert_eq!(kind_of(" 1"), Some(StringErrorKind::UnexpectedWhitespace));
        assert_eq!(kind_of("1 2"), Some(StringErrorKind::UnexpectedWhitespace));
        assert_eq!(kind_of("-0"), Some(StringErrorKind::NegativeZero));
        assert_eq!(kind_of("+1"), Some(StringErrorKind::UnexpectedPlusSign));
        assert_eq!(kind_of("0123"), Some(StringErrorKind::UnexpectedLeadingZero));
        assert_eq!(kind_of("-01"), Some(StringErrorKind::UnexpectedLeadingZero));
        assert_eq!(kind_of("0x1F"), Some(StringErrorKind::UnexpectedLeadingZero));
        assert_eq!(kind_of("0b101"), Some(StringErrorKind::UnexpectedLeadingZero));
        assert_eq!(kind_of("1_000"), Some(StringErrorKind::Malformed));
        assert_eq!(kind_of("12abc"), Some(StringErrorKind::Malformed));
        assert_eq!(kind_of("-"), Some(StringErrorKind::Malformed));
        assert_eq!(kind_of("1.0"), Some(StringErrorKind::Malformed));
    }

    #[test]
    fn plus_zero_is_accepted() {
        assert_eq!(kind_of("+0"), None);
        assert_eq!(kind_of("0"), None);
    }

    #[test]
    fn canonical_but_out_of_range_is_a_range_error() {
        let parsed = BigInt::from(2_147_483_648i64);
        let err = validate_integer_string(IntWidth::I32, "2147483648", Some(&parsed)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::RangeExceeded);
        assert_eq!(err.bound(), Some(Bound::Max));
    }

    #[test]
    fn float_strings_must_round_trip() {
        let check = |s: &str| {
            let result = validate_float_string(s, s.parse().ok());
            result.err().and_then(|e| e.string_kind())
        };

        assert_eq!(check("0.5"), None);
        assert_eq!(check("-1.25"), None);
        assert_eq!(check("1e-7"), None);
        assert_eq!(check("123"), None);
        assert_eq!(check("0"), None);
        assert_eq!(check("+0"), Some(StringErrorKind::UnexpectedPlusSign));
        assert_eq!(check("-0"), Some(StringErrorKind::NegativeZero));
        assert_eq!(check("01"), Some(StringErrorKind::UnexpectedLeadingZero));
        assert_eq!(check("00.5"), Some(StringErrorKind::UnexpectedLeadingZero));
        assert_eq!(check("0e0"), Some(StringErrorKind::Malformed));
        assert_eq!(check("-0E1"), Some(StringErrorKind::Malformed));
        assert_eq!(check(".5"), Some(StringErrorKind::Malformed));
        assert_eq!(check("1e3"), Some(StringErrorKind::Malformed));
        assert_eq!(check("inf"), Some(StringErrorKind::Malformed));
        assert_eq!(check("9007199254740993"), Some(StringErrorKind::Malformed));
    }
}
