//! Lenient integer parsing for query string values.
//!
//! Query values are coerced the way loosely-typed clients expect: leading
//! whitespace and an optional sign are accepted, then the longest run of
//! digits is read and anything after it is ignored. A `0x`/`0X` prefix
//! switches to hexadecimal digits.

/// Parse the leading integer of `input`.
///
/// Returns `None` when no digits follow the optional sign and radix prefix,
/// or when the value does not fit in an `i64`.
///
/// # Examples
/// ```ignore
/// assert_eq!(parse_leading_int(" 42"), Some(42));
/// assert_eq!(parse_leading_int("3abc"), Some(3));
/// assert_eq!(parse_leading_int("abc"), None);
/// ```
pub fn parse_leading_int(input: &str) -> Option<i64> {
    let trimmed = input.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let (radix, rest) = match rest.get(..2) {
        Some("0x") | Some("0X") => (16, &rest[2..]),
        _ => (10, rest),
    };

    let digits_end = rest
        .find(|c: char| !c.is_digit(radix))
        .unwrap_or(rest.len());
    let digits = &rest[..digits_end];
    if digits.is_empty() {
        return None;
    }

    let magnitude = i64::from_str_radix(digits, radix).ok()?;
    Some(if negative { -magnitude } else { magnitude })
}
