//! Tests for the scalar rules: `S`, `N`, `BOOL`, `NULL`.

use untag_core::scalar::{transform_bool, transform_null, transform_number, transform_string};
use untag_core::{InvalidValue, NativeValue};

fn string(s: &str) -> NativeValue {
    NativeValue::String(s.to_string())
}

// ============================================================================
// S
// ============================================================================

#[test]
fn string_is_trimmed() {
    assert_eq!(transform_string("  hi  "), Ok(string("hi")));
    assert_eq!(transform_string("\thello world\n"), Ok(string("hello world")));
}

#[test]
fn string_inner_whitespace_is_kept() {
    assert_eq!(transform_string(" a  b "), Ok(string("a  b")));
}

#[test]
fn string_empty_is_invalid() {
    assert_eq!(transform_string(""), Err(InvalidValue::EmptyString));
}

#[test]
fn string_whitespace_only_is_invalid() {
    assert_eq!(transform_string(" \t\r\n "), Err(InvalidValue::EmptyString));
}

#[test]
fn string_unicode_is_preserved() {
    assert_eq!(transform_string(" caf\u{e9} "), Ok(string("caf\u{e9}")));
}

#[test]
fn string_rfc3339_utc_becomes_epoch_seconds() {
    assert_eq!(
        transform_string("2023-01-15T10:00:00Z"),
        Ok(NativeValue::Integer(1673776800))
    );
}

#[test]
fn string_rfc3339_with_offset_is_normalized_to_utc() {
    // 12:00 at +02:00 is 10:00 UTC
    assert_eq!(
        transform_string("2023-01-15T12:00:00+02:00"),
        Ok(NativeValue::Integer(1673776800))
    );
}

#[test]
fn string_rfc3339_fraction_is_discarded() {
    assert_eq!(
        transform_string("2023-01-15T10:00:00.999Z"),
        Ok(NativeValue::Integer(1673776800))
    );
}

#[test]
fn string_rfc3339_is_recognized_after_trimming() {
    assert_eq!(
        transform_string("  2023-01-15T10:00:00Z "),
        Ok(NativeValue::Integer(1673776800))
    );
}

#[test]
fn string_rfc3339_before_epoch_is_negative() {
    assert_eq!(
        transform_string("1969-12-31T23:59:00Z"),
        Ok(NativeValue::Integer(-60))
    );
}

#[test]
fn string_date_without_time_stays_text() {
    assert_eq!(transform_string("2023-01-15"), Ok(string("2023-01-15")));
}

#[test]
fn string_datetime_without_offset_stays_text() {
    assert_eq!(
        transform_string("2023-01-15T10:00:00"),
        Ok(string("2023-01-15T10:00:00"))
    );
}

#[test]
fn string_datetime_with_space_separator_stays_text() {
    assert_eq!(
        transform_string("2023-01-15 10:00:00Z"),
        Ok(string("2023-01-15 10:00:00Z"))
    );
}

#[test]
fn string_datetime_with_lowercase_markers_stays_text() {
    assert_eq!(
        transform_string("2023-01-15t10:00:00z"),
        Ok(string("2023-01-15t10:00:00z"))
    );
    assert_eq!(
        transform_string("2023-01-15T10:00:00z"),
        Ok(string("2023-01-15T10:00:00z"))
    );
}

#[test]
fn string_leap_second_stays_text() {
    assert_eq!(
        transform_string("2016-12-31T23:59:60Z"),
        Ok(string("2016-12-31T23:59:60Z"))
    );
}

#[test]
fn string_rfc3339_negative_offset() {
    // 05:00 at -05:00 is 10:00 UTC
    assert_eq!(
        transform_string("2023-01-15T05:00:00-05:00"),
        Ok(NativeValue::Integer(1673776800))
    );
}

#[test]
fn string_numeric_text_stays_text() {
    assert_eq!(transform_string("42"), Ok(string("42")));
}

// ============================================================================
// N
// ============================================================================

#[test]
fn number_leading_zeros() {
    assert_eq!(transform_number("007"), Ok(NativeValue::Number(7.0)));
}

#[test]
fn number_decimal() {
    assert_eq!(transform_number("2.75"), Ok(NativeValue::Number(2.75)));
}

#[test]
fn number_signs_and_exponents() {
    assert_eq!(transform_number("+4"), Ok(NativeValue::Number(4.0)));
    assert_eq!(transform_number("-1.5e3"), Ok(NativeValue::Number(-1500.0)));
    assert_eq!(transform_number("2E-2"), Ok(NativeValue::Number(0.02)));
}

#[test]
fn number_is_trimmed() {
    assert_eq!(transform_number("  12 \n"), Ok(NativeValue::Number(12.0)));
}

#[test]
fn number_text_is_invalid() {
    assert_eq!(
        transform_number("abc"),
        Err(InvalidValue::Number("abc".to_string()))
    );
}

#[test]
fn number_empty_is_invalid() {
    assert_eq!(transform_number("  "), Err(InvalidValue::Number(String::new())));
}

#[test]
fn number_non_finite_is_invalid() {
    assert!(transform_number("inf").is_err());
    assert!(transform_number("-Infinity").is_err());
    assert!(transform_number("NaN").is_err());
}

#[test]
fn number_overflow_is_invalid() {
    assert!(transform_number("1e400").is_err());
}

#[test]
fn number_with_trailing_garbage_is_invalid() {
    assert!(transform_number("12px").is_err());
    assert!(transform_number("1,000").is_err());
}

// ============================================================================
// BOOL
// ============================================================================

#[test]
fn bool_truthy_tokens() {
    for token in ["1", "t", "T", "true", "TRUE", "True", " tRuE "] {
        assert_eq!(
            transform_bool(token),
            Ok(NativeValue::Bool(true)),
            "{token:?} should be true"
        );
    }
}

#[test]
fn bool_falsy_tokens() {
    for token in ["0", "f", "F", "false", "FALSE", "False", "\tfalse\n"] {
        assert_eq!(
            transform_bool(token),
            Ok(NativeValue::Bool(false)),
            "{token:?} should be false"
        );
    }
}

#[test]
fn bool_other_text_is_invalid() {
    assert_eq!(
        transform_bool("yes"),
        Err(InvalidValue::Bool("yes".to_string()))
    );
    assert!(transform_bool("").is_err());
    assert!(transform_bool("2").is_err());
    assert!(transform_bool("on").is_err());
}

// ============================================================================
// NULL
// ============================================================================

#[test]
fn null_truthy_tokens_give_null() {
    for token in ["1", "t", "true", "TRUE", " True "] {
        assert_eq!(transform_null(token), Ok(NativeValue::Null), "{token:?}");
    }
}

#[test]
fn null_falsy_tokens_are_invalid() {
    for token in ["0", "f", "false", "FALSE"] {
        assert!(transform_null(token).is_err(), "{token:?} should be rejected");
    }
}

#[test]
fn null_other_text_is_invalid() {
    assert_eq!(
        transform_null(" Nope "),
        Err(InvalidValue::Null("nope".to_string()))
    );
    assert!(transform_null("").is_err());
}
