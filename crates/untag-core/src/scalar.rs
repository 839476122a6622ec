//! Rules for the string-encoded scalar discriminators (`S`, `N`, `BOOL`, `NULL`).
//!
//! Every rule takes the raw wire string, trims surrounding whitespace, and
//! either produces a [`NativeValue`] or rejects the input with
//! [`InvalidValue`].

use chrono::{DateTime, Timelike};

use crate::error::InvalidValue;
use crate::types::NativeValue;

/// Lowercased tokens read as `true` by `BOOL` and as a null marker by `NULL`.
pub const TRUTHY: [&str; 3] = ["1", "t", "true"];

/// Lowercased tokens read as `false` by `BOOL`.
pub const FALSY: [&str; 3] = ["0", "f", "false"];

/// `S`: trimmed text, or Unix epoch seconds when the text is an RFC 3339
/// timestamp.
///
/// ```
/// use untag_core::scalar::transform_string;
/// use untag_core::NativeValue;
///
/// assert_eq!(transform_string("  hi  "), Ok(NativeValue::String("hi".into())));
/// assert_eq!(
///     transform_string("2023-01-15T10:00:00Z"),
///     Ok(NativeValue::Integer(1673776800))
/// );
/// ```
pub fn transform_string(s: &str) -> Result<NativeValue, InvalidValue> {
    let s = s.trim();
    if s.is_empty() {
        return Err(InvalidValue::EmptyString);
    }
    match parse_timestamp(s) {
        Some(secs) => Ok(NativeValue::Integer(secs)),
        None => Ok(NativeValue::String(s.to_string())),
    }
}

/// Epoch seconds for `YYYY-MM-DDTHH:MM:SS[.frac](Z|±HH:MM)`.
///
/// Narrower than chrono's RFC 3339 parser: the separator must be an
/// uppercase `T`, the zone an uppercase `Z` or a numeric offset, and leap
/// seconds (`:60`) are not timestamps.
fn parse_timestamp(s: &str) -> Option<i64> {
    let bytes = s.as_bytes();
    if bytes.get(10) != Some(&b'T') {
        return None;
    }
    let zone_ok = match bytes.last() {
        Some(b'Z') => true,
        Some(_) if bytes.len() >= 6 => {
            let zone = &bytes[bytes.len() - 6..];
            matches!(zone[0], b'+' | b'-') && zone[3] == b':'
        }
        _ => false,
    };
    if !zone_ok {
        return None;
    }
    let ts = DateTime::parse_from_rfc3339(s).ok()?;
    // chrono folds `:60` into second 59 with an overflowing nanosecond.
    if ts.nanosecond() >= 1_000_000_000 {
        return None;
    }
    Some(ts.timestamp())
}

/// `N`: a finite 64-bit float. Integer literals become floats too
/// (`"007"` is `7.0`, written to JSON as `7`).
pub fn transform_number(s: &str) -> Result<NativeValue, InvalidValue> {
    let s = s.trim();
    match s.parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(NativeValue::Number(n)),
        _ => Err(InvalidValue::Number(s.to_string())),
    }
}

/// `BOOL`: one of the truthy or falsy tokens, case-insensitive.
pub fn transform_bool(s: &str) -> Result<NativeValue, InvalidValue> {
    let token = s.trim().to_lowercase();
    if TRUTHY.contains(&token.as_str()) {
        Ok(NativeValue::Bool(true))
    } else if FALSY.contains(&token.as_str()) {
        Ok(NativeValue::Bool(false))
    } else {
        Err(InvalidValue::Bool(token))
    }
}

/// `NULL`: a truthy token yields null.
///
/// A falsy token is rejected like any other text, so `{"NULL": "false"}`
/// drops the entry instead of producing a non-null value.
pub fn transform_null(s: &str) -> Result<NativeValue, InvalidValue> {
    let token = s.trim().to_lowercase();
    if TRUTHY.contains(&token.as_str()) {
        Ok(NativeValue::Null)
    } else {
        Err(InvalidValue::Null(token))
    }
}
