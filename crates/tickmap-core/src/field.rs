//! Single-field validators used by the record factory.

use crate::{FieldError, Identifier};

/// Characters dropped from the front of numeric fields.
const LEADING_WHITESPACE: &[char] = &[' ', '\t', '\n', '\r', '\u{8}'];

pub fn validate_identifier(text: &str) -> Result<Identifier, FieldError> {
    Identifier::parse(text)
}

/// Parse an unsigned decimal integer into `i64`.
///
/// Signs and digit separators are rejected, as is anything that does not fit
/// in a signed 64-bit value.
pub fn parse_non_negative_integer(text: &str) -> Result<i64, FieldError> {
    let digits = ltrim(text);
    check_charset(digits, false)?;
    digits.parse::<i64>().map_err(|_| FieldError::Overflow {
        value: digits.to_owned(),
    })
}

/// Parse a non-negative decimal made of digits and `.`.
///
/// The charset check admits any number of dots; `1.2.3` and `.` are refused
/// by the conversion itself as [`FieldError::MalformedDecimal`].
pub fn parse_non_negative_decimal(text: &str) -> Result<f64, FieldError> {
    let digits = ltrim(text);
    check_charset(digits, true)?;
    let value = digits
        .parse::<f64>()
        .map_err(|_| FieldError::MalformedDecimal {
            value: digits.to_owned(),
        })?;
    if !value.is_finite() {
        return Err(FieldError::Overflow {
            value: digits.to_owned(),
        });
    }
    Ok(value)
}

fn ltrim(text: &str) -> &str {
    text.trim_start_matches(LEADING_WHITESPACE)
}

fn check_charset(digits: &str, allow_dot: bool) -> Result<(), FieldError> {
    if digits.is_empty() {
        return Err(FieldError::EmptyNumber);
    }
    for (index, ch) in digits.chars().enumerate() {
        if !(ch.is_ascii_digit() || (allow_dot && ch == '.')) {
            return Err(FieldError::InvalidDigit { ch, index });
        }
    }
    Ok(())
}
