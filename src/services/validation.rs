use std::sync::OnceLock;

use regex::Regex;
use serde_json::Value;

use crate::models::{BookingRequest, ValidationReport};

/// Longest free-text value kept after sanitizing, in characters.
pub const MAX_FIELD_CHARS: usize = 1000;

fn email_regex() -> Option<&'static Regex> {
    static EMAIL_REGEX: OnceLock<Option<Regex>> = OnceLock::new();
    EMAIL_REGEX
        .get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok())
        .as_ref()
}

/// Syntactic `local@domain.tld` check. No DNS lookups.
pub fn is_valid_email(email: &str) -> bool {
    email_regex().is_some_and(|re| re.is_match(email))
}

/// Strips `<` and `>`, trims, and caps the result at [`MAX_FIELD_CHARS`].
///
/// Whitespace exposed by the cap is trimmed too, so sanitizing an already
/// sanitized value returns it unchanged.
pub fn sanitize_string(s: &str) -> String {
    let stripped: String = s.chars().filter(|c| *c != '<' && *c != '>').collect();
    let capped: String = stripped.trim().chars().take(MAX_FIELD_CHARS).collect();
    capped.trim_end().to_string()
}

/// Like [`sanitize_string`], but anything other than a JSON string yields `""`.
pub fn sanitize_value(value: &Value) -> String {
    match value {
        Value::String(s) => sanitize_string(s),
        _ => String::new(),
    }
}

pub fn sanitize_field(field: Option<&str>) -> String {
    field.map(sanitize_string).unwrap_or_default()
}

/// A form field counts as provided when it holds a non-empty string.
pub fn is_present(field: Option<&str>) -> bool {
    field.is_some_and(|s| !s.is_empty())
}

fn has_min_chars(field: Option<&str>, min: usize) -> bool {
    field.is_some_and(|s| s.trim().chars().count() >= min)
}

/// Checks every booking form rule and reports all failures at once.
pub fn validate_booking_data(request: &BookingRequest) -> ValidationReport {
    let mut errors = Vec::new();

    if !has_min_chars(request.name.as_deref(), 2) {
        errors.push("Name must be at least 2 characters".to_string());
    }

    if !request.email.as_deref().is_some_and(is_valid_email) {
        errors.push("Invalid email address".to_string());
    }

    if !has_min_chars(request.phone.as_deref(), 10) {
        errors.push("Phone number must be at least 10 digits".to_string());
    }

    if !is_present(request.service.as_deref()) {
        errors.push("Please select a service".to_string());
    }

    if !is_present(request.preferred_date.as_deref()) {
        errors.push("Please select a date".to_string());
    }

    if !is_present(request.preferred_time.as_deref()) {
        errors.push("Please select a time".to_string());
    }

    ValidationReport::from_errors(errors)
}
