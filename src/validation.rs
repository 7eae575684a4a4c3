use lazy_static::lazy_static;
use regex::Regex;

use crate::error::ApiError;

pub const MAX_SEARCH_LEN: usize = 50;

lazy_static! {
    static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    // Letters, digits, whitespace and the handful of characters that appear
    // in names and email addresses. Everything else is rejected before the
    // term gets anywhere near a LIKE predicate.
    static ref SEARCH_RE: Regex = Regex::new(r"^[a-zA-Z0-9\s@._-]+$").unwrap();
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Required text field: present and non-empty after trimming.
pub fn require_text(field: &str, value: Option<&str>) -> Result<String, ApiError> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(ApiError::Validation(format!(
            "Invalid {field}. Must be a non-empty string."
        ))),
    }
}

/// Required numeric field, strictly positive.
pub fn require_positive(field: &str, value: Option<f64>) -> Result<f64, ApiError> {
    value
        .filter(|n| n.is_finite() && *n > 0.0)
        .ok_or_else(|| {
            ApiError::Validation(format!("Invalid {field}. Must be a positive number."))
        })
}

/// Same rule for numbers arriving as multipart form text.
pub fn require_positive_text(field: &str, value: Option<&str>) -> Result<f64, ApiError> {
    require_positive(field, value.and_then(|v| v.trim().parse::<f64>().ok()))
}

/// Path identifier: a positive integer or nothing.
pub fn parse_workout_id(raw: &str) -> Result<i64, ApiError> {
    raw.trim()
        .parse::<i64>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| {
            ApiError::Validation("Invalid workout ID. Must be a positive integer.".into())
        })
}

/// Admin search term: non-empty, bounded length, allow-listed charset.
/// Returns the trimmed term; the caller wraps it in wildcards afterwards.
pub fn sanitize_search_term(raw: &str) -> Result<String, ApiError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ApiError::Validation(
            "Invalid search query. Must be a non-empty string.".into(),
        ));
    }
    if raw.len() > MAX_SEARCH_LEN {
        return Err(ApiError::Validation(
            "Search query too long. Max 50 characters allowed.".into(),
        ));
    }
    if !SEARCH_RE.is_match(raw) {
        return Err(ApiError::Validation(
            "Search query contains invalid characters.".into(),
        ));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_format() {
        assert!(is_valid_email("a@x.com"));
        assert!(is_valid_email("first.last@sub.domain.org"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("a b@x.com"));
        assert!(!is_valid_email("a@x"));
        assert!(!is_valid_email("@x.com"));
    }

    #[test]
    fn text_fields_must_be_non_empty() {
        assert_eq!(require_text("workout_type", Some("  Running ")).unwrap(), "Running");
        let err = require_text("workout_type", Some("   ")).unwrap_err();
        assert_eq!(err.to_string(), "Invalid workout_type. Must be a non-empty string.");
        assert!(require_text("workout_type", None).is_err());
    }

    #[test]
    fn numeric_fields_must_be_strictly_positive() {
        assert_eq!(require_positive("duration", Some(30.0)).unwrap(), 30.0);
        assert!(require_positive("duration", Some(0.0)).is_err());
        assert!(require_positive("duration", Some(-5.0)).is_err());
        assert!(require_positive("duration", Some(f64::NAN)).is_err());
        assert!(require_positive("duration", Some(f64::INFINITY)).is_err());
        let err = require_positive("calories_burned", None).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid calories_burned. Must be a positive number."
        );
    }

    #[test]
    fn numeric_form_text_is_parsed() {
        assert_eq!(require_positive_text("duration", Some("45")).unwrap(), 45.0);
        assert_eq!(require_positive_text("duration", Some(" 2.5 ")).unwrap(), 2.5);
        assert!(require_positive_text("duration", Some("abc")).is_err());
        assert!(require_positive_text("duration", Some("-1")).is_err());
        assert!(require_positive_text("duration", None).is_err());
    }

    #[test]
    fn workout_id_must_be_positive_integer() {
        assert_eq!(parse_workout_id("42").unwrap(), 42);
        assert!(parse_workout_id("0").is_err());
        assert!(parse_workout_id("-3").is_err());
        assert!(parse_workout_id("3.5").is_err());
        assert!(parse_workout_id("abc").is_err());
        let err = parse_workout_id("").unwrap_err();
        assert_eq!(err.to_string(), "Invalid workout ID. Must be a positive integer.");
    }

    #[test]
    fn search_term_allows_names_and_emails() {
        assert_eq!(sanitize_search_term("alice").unwrap(), "alice");
        assert_eq!(sanitize_search_term(" a@x.com ").unwrap(), "a@x.com");
        assert_eq!(sanitize_search_term("John Smith-Jones_2").unwrap(), "John Smith-Jones_2");
    }

    #[test]
    fn search_term_rejects_pattern_injection() {
        for bad in ["%", "a;b", "o'brien", "x%y", "DROP;", "a\"b"] {
            let err = sanitize_search_term(bad).unwrap_err();
            assert_eq!(
                err.to_string(),
                "Search query contains invalid characters.",
                "expected rejection for {bad:?}"
            );
        }
    }

    #[test]
    fn search_term_length_and_emptiness() {
        assert!(sanitize_search_term("   ").is_err());
        let long = "a".repeat(MAX_SEARCH_LEN + 1);
        let err = sanitize_search_term(&long).unwrap_err();
        assert_eq!(err.to_string(), "Search query too long. Max 50 characters allowed.");
        let max = "a".repeat(MAX_SEARCH_LEN);
        assert!(sanitize_search_term(&max).is_ok());
    }
}
