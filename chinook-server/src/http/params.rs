//! Path parameter parsing
//!
//! Ids accept any integer literal notation: an optional sign, then
//! `0x`/`0o`/`0b` prefixes, a bare leading `0` for octal, or plain decimal.
//! Underscores may separate digits or follow a base prefix.

use axum::extract::path::ErrorKind;
use axum::extract::rejection::PathRejection;
use axum::extract::Path;
use thiserror::Error;

use super::error::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IntParseError {
    #[error("cannot parse integer from empty string")]
    Empty,
    #[error("invalid digit found in string")]
    InvalidDigit,
    #[error("misplaced digit separator")]
    Separator,
    #[error("number out of range for a 64-bit integer")]
    OutOfRange,
}

/// Parse an id path segment, naming `field` in the 400 response on failure.
pub fn parse_id(field: &'static str, raw: &str) -> Result<i64, ApiError> {
    parse_int(raw).map_err(|e| ApiError::InvalidParam {
        field,
        reason: e.to_string(),
    })
}

/// Read one id from the request path.
///
/// A segment axum cannot extract (not UTF-8 once percent-decoded) is an
/// `InvalidParam` like any other malformed id.
pub fn path_id(
    field: &'static str,
    path: Result<Path<String>, PathRejection>,
) -> Result<i64, ApiError> {
    let Path(raw) = path.map_err(|rejection| path_rejection(&[field], rejection))?;
    parse_id(field, &raw)
}

/// Read two ids from the request path, in route order.
pub fn path_ids(
    fields: [&'static str; 2],
    path: Result<Path<(String, String)>, PathRejection>,
) -> Result<(i64, i64), ApiError> {
    let Path((first, second)) = path.map_err(|rejection| path_rejection(&fields, rejection))?;
    Ok((parse_id(fields[0], &first)?, parse_id(fields[1], &second)?))
}

fn path_rejection(fields: &[&'static str], rejection: PathRejection) -> ApiError {
    let (key, reason) = match &rejection {
        PathRejection::FailedToDeserializePathParams(e) => match e.kind() {
            ErrorKind::InvalidUtf8InPathParam { key } => {
                (Some(key.as_str()), "invalid UTF-8 in path segment".to_string())
            }
            _ => (None, e.body_text()),
        },
        _ => (None, rejection.body_text()),
    };

    let field = key
        .and_then(|key| fields.iter().copied().find(|field| *field == key))
        .or_else(|| fields.first().copied())
        .unwrap_or("id");
    tracing::debug!(field, %rejection, "Rejected path parameter");
    ApiError::InvalidParam { field, reason }
}

pub fn parse_int(raw: &str) -> Result<i64, IntParseError> {
    if raw.is_empty() {
        return Err(IntParseError::Empty);
    }

    let (negative, body) = match raw.as_bytes()[0] {
        b'-' => (true, &raw[1..]),
        b'+' => (false, &raw[1..]),
        _ => (false, raw),
    };

    let (radix, digits, prefixed) = split_radix(body);
    let digits = strip_separators(digits, prefixed)?;
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Err(IntParseError::InvalidDigit);
    }

    // Digits are validated, so the only failure left is overflow.
    let magnitude = u64::from_str_radix(&digits, radix).map_err(|_| IntParseError::OutOfRange)?;
    let value = if negative {
        0i64.checked_sub_unsigned(magnitude)
    } else {
        i64::try_from(magnitude).ok()
    };
    value.ok_or(IntParseError::OutOfRange)
}

fn split_radix(body: &str) -> (u32, &str, bool) {
    let bytes = body.as_bytes();
    if bytes.len() >= 2 && bytes[0] == b'0' {
        match bytes[1] {
            b'x' | b'X' => return (16, &body[2..], true),
            b'o' | b'O' => return (8, &body[2..], true),
            b'b' | b'B' => return (2, &body[2..], true),
            _ => return (8, &body[1..], true),
        }
    }
    (10, body, false)
}

fn strip_separators(digits: &str, prefixed: bool) -> Result<String, IntParseError> {
    if !digits.contains('_') {
        return Ok(digits.to_string());
    }

    let mut groups = digits.split('_');
    let first = groups.next().unwrap_or_default();
    if first.is_empty() && !prefixed {
        return Err(IntParseError::Separator);
    }

    let mut cleaned = first.to_string();
    for group in groups {
        if group.is_empty() {
            return Err(IntParseError::Separator);
        }
        cleaned.push_str(group);
    }
    Ok(cleaned)
}
