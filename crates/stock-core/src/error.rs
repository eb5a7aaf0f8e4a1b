//! Client Errors
//!
//! Every user action converts these into a feedback notice; none are fatal.

use serde_json::Value;
use thiserror::Error;

/// Fallback text when a failure carries nothing printable
pub const UNKNOWN_ERROR: &str = "Unknown error";

pub type StockResult<T> = Result<T, StockError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StockError {
    /// Rejected locally, before any network call
    #[error("{0}")]
    Validation(String),
    /// Non-2xx response or transport failure
    #[error("{0}")]
    Remote(String),
    /// A submission is already in flight
    #[error("A submission is already in progress")]
    Busy,
}

impl StockError {
    /// Map a non-success HTTP response to an error.
    ///
    /// The body text is surfaced as-is when it has content.
    pub fn from_response(status: u16, body: &str) -> Self {
        let body = body.trim();
        if body.is_empty() {
            StockError::Remote(format!("Request failed (HTTP {})", status))
        } else {
            StockError::Remote(body.to_string())
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, StockError::Validation(_))
    }
}

/// Best-effort text for a thrown value that is neither an error nor a string
pub fn describe_unknown(value: &Value) -> String {
    match value {
        Value::String(s) if !s.is_empty() => s.clone(),
        Value::Object(map) => match map.get("message") {
            Some(Value::String(msg)) if !msg.is_empty() => msg.clone(),
            _ => serde_json::to_string(value).unwrap_or_else(|_| UNKNOWN_ERROR.to_string()),
        },
        Value::Null | Value::String(_) => UNKNOWN_ERROR.to_string(),
        other => serde_json::to_string(other).unwrap_or_else(|_| UNKNOWN_ERROR.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_response_uses_body() {
        let err = StockError::from_response(404, "Item introuvable");
        assert_eq!(err, StockError::Remote("Item introuvable".to_string()));
    }

    #[test]
    fn test_from_response_blank_body_falls_back() {
        let err = StockError::from_response(500, "  \n");
        assert_eq!(err.to_string(), "Request failed (HTTP 500)");
    }

    #[test]
    fn test_describe_unknown() {
        assert_eq!(describe_unknown(&json!("boom")), "boom");
        assert_eq!(describe_unknown(&json!({"message": "bad gateway"})), "bad gateway");
        assert_eq!(describe_unknown(&json!({"code": 3})), r#"{"code":3}"#);
        assert_eq!(describe_unknown(&json!(42)), "42");
        assert_eq!(describe_unknown(&Value::Null), UNKNOWN_ERROR);
        assert_eq!(describe_unknown(&json!("")), UNKNOWN_ERROR);
    }

    #[test]
    fn test_validation_display_is_message() {
        let err = StockError::Validation("Name and DLC are required.".to_string());
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "Name and DLC are required.");
    }
}
