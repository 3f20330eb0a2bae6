//! Error types for the client.
//!
//! All public APIs return `Result<T, Error>` where `Error` is defined here.
//! Vendor-side rejections carry a structured [`ErrorResult`] decoded from
//! the error body; transport and decode failures stay unstructured.

use serde_json::{Map, Value};
use std::fmt;
use thiserror::Error;

/// Message used when a vendor error body carries none.
const UNKNOWN_ERROR: &str = "Unknown error";

/// The main error type for the crate.
#[derive(Error, Debug)]
pub enum Error {
    /// Transport-level failure: connection, TLS, or a timeout that survived
    /// the retry budget. The request never produced a (status, body) pair.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// A base URL that did not parse.
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Invalid client construction input.
    #[error("configuration error: {message}")]
    Config {
        /// What was wrong with the configuration.
        message: String,
    },

    /// The vendor rejected the request with a non-success status.
    #[error("API error: {0}")]
    Api(ErrorResult),

    /// The response body did not match the declared shape. Usually means
    /// the vendor changed their schema.
    #[error("failed to decode response: {message}")]
    Decode {
        /// What failed to decode, and against which shape.
        message: String,
    },
}

impl Error {
    /// Create a config error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a decode error.
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// The structured vendor error, when that is what this is.
    pub fn as_api(&self) -> Option<&ErrorResult> {
        match self {
            Self::Api(result) => Some(result),
            _ => None,
        }
    }
}

/// Result type alias for the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Structured error decoded from a non-success response body.
///
/// Built exactly once per failed call and surfaced as [`Error::Api`]; it is
/// never decoded further and never nested inside a response object. Top-level
/// fields beyond the documented four are kept in an extra map, reachable via
/// [`get`](Self::get).
#[derive(Debug, Clone)]
pub struct ErrorResult {
    status: u16,
    reason: Option<String>,
    message: String,
    kind: Option<String>,
    detail: Option<Value>,
    extra: Map<String, Value>,
}

impl ErrorResult {
    /// Build from the transport status and the raw error body, if any.
    /// An absent or non-object body yields all-default fields.
    pub(crate) fn from_response(status: u16, body: Option<Value>) -> Self {
        let mut fields = match body {
            Some(Value::Object(map)) => map,
            _ => Map::new(),
        };
        let reason = take_string(&mut fields, "reason");
        let message =
            take_string(&mut fields, "message").unwrap_or_else(|| UNKNOWN_ERROR.to_owned());
        let kind = take_string(&mut fields, "type");
        let detail = match fields.remove("detail") {
            Some(Value::Null) | None => None,
            Some(value) => Some(value),
        };
        Self {
            status,
            reason,
            message,
            kind,
            detail,
            extra: fields,
        }
    }

    /// HTTP status code that routed the response here.
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Machine-readable reason code, e.g. `notFound`.
    pub fn reason(&self) -> Option<&str> {
        self.reason.as_deref()
    }

    /// Human-readable message; a fixed placeholder when the body had none.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Vendor error type tag (the JSON `type` key).
    pub fn kind(&self) -> Option<&str> {
        self.kind.as_deref()
    }

    /// Free-form structured context, verbatim.
    pub fn detail(&self) -> Option<&Value> {
        self.detail.as_ref()
    }

    /// Any additional top-level field from the raw error body.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.extra.get(name)
    }
}

impl fmt::Display for ErrorResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {}", self.status)?;
        if let Some(reason) = &self.reason {
            write!(f, " ({reason})")?;
        }
        write!(f, ": {}", self.message)
    }
}

/// Remove `key` if it holds a string; anything else stays put so it lands in
/// the extra map instead.
fn take_string(map: &mut Map<String, Value>, key: &str) -> Option<String> {
    match map.remove(key) {
        Some(Value::String(value)) => Some(value),
        Some(other) => {
            map.insert(key.to_owned(), other);
            None
        }
        None => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_display() {
        let err = Error::config("bad base URL");
        assert_eq!(err.to_string(), "configuration error: bad base URL");

        let err = Error::decode("field clan of ClanWar expected an object, got a string");
        assert_eq!(
            err.to_string(),
            "failed to decode response: field clan of ClanWar expected an object, got a string"
        );
    }

    #[test]
    fn test_error_result_from_full_body() {
        let result = ErrorResult::from_response(
            404,
            Some(json!({
                "reason": "notFound",
                "message": "Clan not found",
                "type": "client",
                "detail": {"tag": "#ABC"}
            })),
        );
        assert_eq!(result.status(), 404);
        assert_eq!(result.reason(), Some("notFound"));
        assert_eq!(result.message(), "Clan not found");
        assert_eq!(result.kind(), Some("client"));
        assert_eq!(result.detail(), Some(&json!({"tag": "#ABC"})));
        assert_eq!(result.to_string(), "HTTP 404 (notFound): Clan not found");
    }

    #[test]
    fn test_error_result_defaults_on_empty_body() {
        let result = ErrorResult::from_response(503, None);
        assert_eq!(result.status(), 503);
        assert_eq!(result.reason(), None);
        assert_eq!(result.message(), "Unknown error");
        assert_eq!(result.kind(), None);
        assert_eq!(result.detail(), None);
        assert_eq!(result.to_string(), "HTTP 503: Unknown error");
    }

    #[test]
    fn test_error_result_defaults_on_non_object_body() {
        let result = ErrorResult::from_response(500, Some(json!("internal error")));
        assert_eq!(result.message(), "Unknown error");
    }

    #[test]
    fn test_error_result_preserves_extra_fields() {
        let result = ErrorResult::from_response(
            429,
            Some(json!({
                "reason": "requestThrottled",
                "retryAfter": 12
            })),
        );
        assert_eq!(result.reason(), Some("requestThrottled"));
        assert_eq!(result.get("retryAfter"), Some(&json!(12)));
        assert_eq!(result.get("missing"), None);
    }

    #[test]
    fn test_error_result_non_string_reason_becomes_extra() {
        let result = ErrorResult::from_response(400, Some(json!({"reason": 7})));
        assert_eq!(result.reason(), None);
        assert_eq!(result.get("reason"), Some(&json!(7)));
    }

    #[test]
    fn test_as_api() {
        let err = Error::Api(ErrorResult::from_response(404, None));
        assert_eq!(err.as_api().map(ErrorResult::status), Some(404));
        assert!(Error::config("x").as_api().is_none());
    }
}
