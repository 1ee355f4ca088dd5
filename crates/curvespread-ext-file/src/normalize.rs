//! Conversion of human-formatted terms and yields to numbers.
//!
//! Source files carry values such as `"30 years"` and `"1.5%"`. These helpers
//! strip the unit, trim whitespace and parse the remainder as `f64`.

use crate::error::{FileError, FileResult};

/// Parses a term in years.
///
/// Accepts a bare number or a number followed by `year`/`years` in any case.
/// The term must be finite and positive.
///
/// ```rust
/// use curvespread_ext_file::normalize_term;
///
/// assert_eq!(normalize_term("30 years").unwrap(), 30.0);
/// assert_eq!(normalize_term(" 1 Year ").unwrap(), 1.0);
/// assert_eq!(normalize_term("2.5").unwrap(), 2.5);
/// assert!(normalize_term("0 years").is_err());
/// ```
pub fn normalize_term(text: &str) -> FileResult<f64> {
    let trimmed = text.trim();
    let number = strip_suffix_ignore_case(trimmed, "years")
        .or_else(|| strip_suffix_ignore_case(trimmed, "year"))
        .unwrap_or(trimmed);

    let term = parse_number(text, number)?;
    if term <= 0.0 {
        return Err(FileError::invalid_number(text, "term must be positive"));
    }
    Ok(term)
}

/// Parses a yield in percent.
///
/// Accepts a bare number or a number followed by `%`. Negative yields are
/// allowed.
///
/// ```rust
/// use curvespread_ext_file::normalize_yield;
///
/// assert_eq!(normalize_yield("1.5%").unwrap(), 1.5);
/// assert_eq!(normalize_yield("-0.25 %").unwrap(), -0.25);
/// ```
pub fn normalize_yield(text: &str) -> FileResult<f64> {
    let trimmed = text.trim();
    let number = trimmed.strip_suffix('%').unwrap_or(trimmed);
    parse_number(text, number)
}

fn parse_number(text: &str, number: &str) -> FileResult<f64> {
    let number = number.trim();
    if number.is_empty() {
        return Err(FileError::invalid_number(text, "empty value"));
    }

    let value: f64 = number
        .parse()
        .map_err(|_| FileError::invalid_number(text, "not a number"))?;

    if !value.is_finite() {
        return Err(FileError::invalid_number(text, "not finite"));
    }
    Ok(value)
}

fn strip_suffix_ignore_case<'a>(s: &'a str, suffix: &str) -> Option<&'a str> {
    let split = s.len().checked_sub(suffix.len())?;
    if s.is_char_boundary(split) && s[split..].eq_ignore_ascii_case(suffix) {
        Some(&s[..split])
    } else {
        None
    }
}
