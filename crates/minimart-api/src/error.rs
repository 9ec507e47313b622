//! # API Error Types
//!
//! Failures at the HTTP boundary. Everything the backend reports comes
//! back as a typed error with the human-readable message the server put in
//! its `{ "message": ... }` body, so the view layer can show it verbatim
//! (the backend localizes its own messages).

use thiserror::Error;

/// Errors from the remote backend boundary.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never completed (connection refused, TLS, timeout).
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// 401 from the backend - the session token is missing or expired.
    #[error("unauthorized - session token missing or expired")]
    Unauthorized,

    /// Any other non-success status, with the message extracted from the
    /// response body.
    #[error("backend returned {status}: {message}")]
    Backend { status: u16, message: String },

    /// The response body did not match the expected shape.
    #[error("response decode failed: {0}")]
    Decode(String),
}

/// Convenience type alias for Results with ApiError.
pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    /// Builds a `Backend` error from a status and raw body.
    ///
    /// The backend wraps its errors as `{ "message": "..." }`; when the
    /// body is not of that shape the raw text is kept so nothing is lost.
    pub(crate) fn backend(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|v| v.get("message")?.as_str().map(str::to_owned))
            .unwrap_or_else(|| {
                let trimmed = body.trim();
                if trimmed.is_empty() {
                    "no response body".to_string()
                } else {
                    trimmed.to_string()
                }
            });

        ApiError::Backend { status, message }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_message_extraction() {
        let err = ApiError::backend(400, r#"{"message":"Không đủ tồn kho"}"#);
        assert_eq!(
            err.to_string(),
            "backend returned 400: Không đủ tồn kho"
        );
    }

    #[test]
    fn test_backend_falls_back_to_raw_body() {
        let err = ApiError::backend(500, "Internal Server Error");
        assert!(err.to_string().contains("Internal Server Error"));

        let err = ApiError::backend(502, "   ");
        assert!(err.to_string().contains("no response body"));
    }
}
