//! German phone number validation and E.164 normalization.
//!
//! Owner phone numbers are accepted in common German notations
//! (`+49…`, `0049…`, `0…` with spaces, slashes, dashes or parentheses)
//! and stored canonically as `+49` followed by the national number.

use crate::error::AppError;
use regex::Regex;
use serde_json::json;
use std::sync::LazyLock;

/// Characters allowed as grouping noise inside a phone number.
static SEPARATORS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\s\-/().]").unwrap());

/// Plausible length range for a German national significant number.
const NSN_MIN: usize = 5;
const NSN_MAX: usize = 11;

/// Normalizes a German phone number to E.164 (`+49…`).
///
/// Accepted prefixes: `+49`, `0049`, or a single leading `0` (national
/// notation). Anything else, including other country codes, is rejected.
///
/// # Errors
///
/// Returns [`AppError::Validation`] when the number is not a plausible
/// German phone number.
pub fn normalize_de_phone(input: &str) -> Result<String, AppError> {
    let stripped = SEPARATORS.replace_all(input.trim(), "");

    let national = if let Some(rest) = stripped.strip_prefix("+49") {
        rest.to_string()
    } else if let Some(rest) = stripped.strip_prefix("0049") {
        rest.to_string()
    } else if stripped.starts_with('+') {
        return Err(AppError::bad_request(
            "Invalid phone number for Germany",
            json!({ "phone_number": input }),
        ));
    } else if let Some(rest) = stripped.strip_prefix('0') {
        rest.to_string()
    } else {
        return Err(AppError::bad_request(
            "Phone number could not be validated",
            json!({ "phone_number": input }),
        ));
    };

    if national.is_empty()
        || national.starts_with('0')
        || !national.bytes().all(|b| b.is_ascii_digit())
        || !(NSN_MIN..=NSN_MAX).contains(&national.len())
    {
        return Err(AppError::bad_request(
            "Invalid phone number for Germany",
            json!({ "phone_number": input }),
        ));
    }

    Ok(format!("+49{national}"))
}
