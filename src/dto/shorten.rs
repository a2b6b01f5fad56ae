//! DTOs for the link shortening endpoint.

use chrono::Duration;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::AppError;

/// Request to shorten a URL.
#[derive(Debug, Deserialize)]
pub struct ShortenRequest {
    /// The destination URL. Stored verbatim; no validation or normalization.
    pub url: String,

    /// Optional expiry selector: `"never"` or a whole number of seconds.
    /// Omitting the field means the link never expires.
    #[serde(default)]
    pub expiry: Option<String>,
}

/// Response containing the issued short link.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub short_url: String,
    pub code: String,
}

/// Parses the expiry selector into a time-to-live.
///
/// `None` and `"never"` (case-insensitive) mean the link never expires.
/// Any other value must parse as a whole number of seconds; zero and
/// negative values are accepted and produce an already-expired link.
///
/// # Errors
///
/// Returns a 400 validation error when the value is neither `"never"` nor
/// a parseable integer.
pub fn parse_expiry(raw: Option<&str>) -> Result<Option<Duration>, AppError> {
    let Some(raw) = raw else {
        return Ok(None);
    };

    let trimmed = raw.trim();
    if trimmed.eq_ignore_ascii_case("never") {
        return Ok(None);
    }

    let seconds: i64 = trimmed.parse().map_err(|_| {
        AppError::bad_request(
            "expiry must be 'never' or a whole number of seconds",
            json!({ "field": "expiry", "value": raw }),
        )
    })?;

    Ok(Some(Duration::seconds(seconds)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_expiry_means_never() {
        assert_eq!(parse_expiry(None).unwrap(), None);
    }

    #[test]
    fn test_never_keyword_is_case_insensitive() {
        assert_eq!(parse_expiry(Some("never")).unwrap(), None);
        assert_eq!(parse_expiry(Some("NEVER")).unwrap(), None);
        assert_eq!(parse_expiry(Some("Never")).unwrap(), None);
    }

    #[test]
    fn test_seconds_parse_to_duration() {
        assert_eq!(
            parse_expiry(Some("3600")).unwrap(),
            Some(Duration::seconds(3600))
        );
    }

    #[test]
    fn test_zero_and_negative_seconds_are_accepted() {
        assert_eq!(parse_expiry(Some("0")).unwrap(), Some(Duration::seconds(0)));
        assert_eq!(
            parse_expiry(Some("-5")).unwrap(),
            Some(Duration::seconds(-5))
        );
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored() {
        assert_eq!(
            parse_expiry(Some("  60 ")).unwrap(),
            Some(Duration::seconds(60))
        );
        assert_eq!(parse_expiry(Some(" never ")).unwrap(), None);
    }

    #[test]
    fn test_fractional_seconds_are_rejected() {
        assert!(parse_expiry(Some("1.5")).is_err());
    }

    #[test]
    fn test_garbage_is_rejected() {
        assert!(parse_expiry(Some("abc")).is_err());
        assert!(parse_expiry(Some("")).is_err());
    }
}
