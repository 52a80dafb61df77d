//! Input validation and sanitization for inbound requests.
//!
//! This module provides:
//! - Search phrase validation (count and length limits, control characters)
//! - Photo payload extraction (data URL prefix, base64 check)

use std::sync::LazyLock;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use regex::Regex;
use serde_json::Value;
use tracing::warn;

/// Maximum number of search phrases per request.
pub const MAX_SEARCH_QUERIES: usize = 25;

/// Maximum search phrase length, in characters.
pub const MAX_QUERY_LENGTH: usize = 200;

/// Browser data URL prefix, e.g. `data:image/jpeg;base64,`.
static DATA_URL_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^data:image/[a-zA-Z0-9.+-]+;base64,").unwrap());

/// Result of search phrase validation.
#[derive(Debug, PartialEq)]
pub enum QueryValidationResult {
    /// Phrases are valid; sanitized copies in request order.
    Valid(Vec<String>),
    /// Field missing or not an array.
    Missing,
    /// An entry is not a string.
    NotAString(usize),
    /// More phrases than allowed.
    TooMany(usize),
    /// A phrase exceeds the maximum length.
    TooLong(usize),
}

impl QueryValidationResult {
    /// Convert to Result for easy error handling.
    pub fn into_result(self) -> Result<Vec<String>, String> {
        match self {
            Self::Valid(phrases) => Ok(phrases),
            Self::Missing => Err("No search queries provided".to_string()),
            Self::NotAString(index) => {
                Err(format!("Search query at position {} must be a string", index))
            }
            Self::TooMany(count) => Err(format!(
                "Too many search queries ({}), at most {} allowed",
                count, MAX_SEARCH_QUERIES
            )),
            Self::TooLong(index) => Err(format!(
                "Search query at position {} exceeds {} characters",
                index, MAX_QUERY_LENGTH
            )),
        }
    }
}

/// Validate the raw `searchQueries` field of a search request.
pub fn validate_search_queries(value: Option<&Value>) -> QueryValidationResult {
    let Some(Value::Array(items)) = value else {
        return QueryValidationResult::Missing;
    };

    if items.len() > MAX_SEARCH_QUERIES {
        return QueryValidationResult::TooMany(items.len());
    }

    let mut phrases = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let Some(raw) = item.as_str() else {
            return QueryValidationResult::NotAString(index);
        };
        let phrase = sanitize_query(raw);
        if phrase.chars().count() > MAX_QUERY_LENGTH {
            return QueryValidationResult::TooLong(index);
        }
        phrases.push(phrase);
    }

    QueryValidationResult::Valid(phrases)
}

/// Strip control characters and surrounding whitespace from a phrase.
pub fn sanitize_query(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_control())
        .collect::<String>()
        .trim()
        .to_string()
}

/// Extract the base64 body of a photo payload.
///
/// Accepts either a data URL or bare base64. Whitespace inside the payload
/// is dropped before the decode check.
pub fn extract_image_base64(input: &str) -> Result<String, String> {
    let trimmed = input.trim();
    let body = match DATA_URL_PREFIX.find(trimmed) {
        Some(prefix) => &trimmed[prefix.end()..],
        None => trimmed,
    };

    let body: String = body.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    if body.is_empty() {
        return Err("No image data provided".to_string());
    }

    if let Err(e) = STANDARD.decode(&body) {
        warn!(error = %e, "Rejected photo payload");
        return Err("Image data is not valid base64".to_string());
    }

    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_valid_queries_sanitized() {
        let value = json!(["  dinosaur songs\u{0007} for kids ", "counting"]);
        assert_eq!(
            validate_search_queries(Some(&value)),
            QueryValidationResult::Valid(vec![
                "dinosaur songs for kids".to_string(),
                "counting".to_string()
            ])
        );
    }

    #[test]
    fn test_missing_or_wrong_shape() {
        assert_eq!(validate_search_queries(None), QueryValidationResult::Missing);
        assert_eq!(
            validate_search_queries(Some(&json!("dinosaurs"))),
            QueryValidationResult::Missing
        );
        assert_eq!(
            validate_search_queries(Some(&Value::Null)),
            QueryValidationResult::Missing
        );
    }

    #[test]
    fn test_empty_array_is_valid() {
        assert_eq!(
            validate_search_queries(Some(&json!([]))),
            QueryValidationResult::Valid(vec![])
        );
    }

    #[test]
    fn test_non_string_entry() {
        assert_eq!(
            validate_search_queries(Some(&json!(["ok", 42]))),
            QueryValidationResult::NotAString(1)
        );
    }

    #[test]
    fn test_limits() {
        let many: Vec<String> = (0..=MAX_SEARCH_QUERIES).map(|i| format!("q{}", i)).collect();
        assert_eq!(
            validate_search_queries(Some(&json!(many))),
            QueryValidationResult::TooMany(MAX_SEARCH_QUERIES + 1)
        );

        let long = "a".repeat(MAX_QUERY_LENGTH + 1);
        assert_eq!(
            validate_search_queries(Some(&json!([long]))),
            QueryValidationResult::TooLong(0)
        );
        assert!(matches!(
            validate_search_queries(Some(&json!(["a".repeat(MAX_QUERY_LENGTH)]))),
            QueryValidationResult::Valid(_)
        ));
    }

    #[test]
    fn test_extract_data_url() {
        assert_eq!(
            extract_image_base64("data:image/jpeg;base64,/9j/4AAQ").unwrap(),
            "/9j/4AAQ"
        );
        assert_eq!(extract_image_base64("data:image/png;base64,AAAA").unwrap(), "AAAA");
    }

    #[test]
    fn test_extract_bare_base64() {
        assert_eq!(extract_image_base64(" AAAA\nAAAA ").unwrap(), "AAAAAAAA");
    }

    #[test]
    fn test_extract_rejects() {
        assert!(extract_image_base64("").is_err());
        assert!(extract_image_base64("data:image/jpeg;base64,").is_err());
        assert!(extract_image_base64("not base64 at all!").is_err());
    }
}
