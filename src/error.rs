//! API Error Taxonomy
//!
//! Failures keep their backend shape: the platform returns a `detail` body
//! that is either a plain message or a list of validation entries, and the
//! client forwards it untranslated. A 401 is a distinct tagged outcome so the
//! session coordinator can react without the transport layer carrying side
//! effects.

use serde::Deserialize;
use thiserror::Error;

/// Client-side error surface for every domain call
#[derive(Error, Debug)]
pub enum ApiError {
    /// Connection, DNS, or protocol failure below the HTTP layer
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// 401 from any endpoint – session is no longer valid
    #[error("unauthorized")]
    Unauthorized,

    /// Non-success status with the backend's own detail body
    #[error("HTTP {status}: {detail}")]
    Status { status: u16, detail: ErrorDetail },

    /// Response body did not match the expected shape
    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Token storage I/O failure
    #[error("token storage: {0}")]
    Storage(#[from] std::io::Error),
}

/// Backend `detail` field: a message string or structured validation entries
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ErrorDetail {
    Message(String),
    Validation(Vec<FieldError>),
}

/// One validation failure entry: {msg, type}
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct FieldError {
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Error response envelope: {"detail": ...}
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: ErrorDetail,
}

impl std::fmt::Display for ErrorDetail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorDetail::Message(msg) => f.write_str(msg),
            ErrorDetail::Validation(fields) => {
                let joined = fields
                    .iter()
                    .map(|e| e.msg.as_str())
                    .collect::<Vec<_>>()
                    .join("; ");
                f.write_str(&joined)
            }
        }
    }
}

impl ErrorDetail {
    /// Parse an error response body, falling back to the raw text when the
    /// backend (or a proxy in front of it) returned something unstructured.
    pub fn from_body(body: &str) -> Self {
        match serde_json::from_str::<ErrorBody>(body) {
            Ok(parsed) => parsed.detail,
            Err(_) => ErrorDetail::Message(body.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_plain_message() {
        let detail = ErrorDetail::from_body(r#"{"detail": "Incorrect email or password."}"#);
        assert_eq!(
            detail,
            ErrorDetail::Message("Incorrect email or password.".to_string())
        );
        assert_eq!(detail.to_string(), "Incorrect email or password.");
    }

    #[test]
    fn test_detail_validation_list() {
        let body = r#"{"detail": [
            {"msg": "field required", "type": "missing"},
            {"msg": "value is not a valid email address", "type": "value_error"}
        ]}"#;
        let detail = ErrorDetail::from_body(body);
        match &detail {
            ErrorDetail::Validation(fields) => {
                assert_eq!(fields.len(), 2);
                assert_eq!(fields[0].kind, "missing");
            }
            other => panic!("expected validation list, got {:?}", other),
        }
        assert_eq!(
            detail.to_string(),
            "field required; value is not a valid email address"
        );
    }

    #[test]
    fn test_detail_unstructured_body_falls_back_to_raw_text() {
        let detail = ErrorDetail::from_body("<html>502 Bad Gateway</html>");
        assert_eq!(
            detail,
            ErrorDetail::Message("<html>502 Bad Gateway</html>".to_string())
        );
    }
}
