//! Error types for the portfolio client
//!
//! HTTP failures surface as [`ApiError`], which carries the status and a
//! machine-readable code so callers can branch without parsing text. The
//! crate-wide [`Error`] wraps it together with the failures that happen
//! before a status exists (transport) or after it (decoding).

use senwork_transport::TransportError;
use thiserror::Error;

/// Result type alias for operations that can fail with a client error.
pub type Result<T> = std::result::Result<T, Error>;

/// Message used when a failed response has no body.
pub const DEFAULT_ERROR_MESSAGE: &str = "请求失败";

/// A failed API call.
///
/// Displays as its message alone, so a server that answers `Server Error`
/// produces an error whose `to_string()` is exactly that.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ApiError {
    /// Human-readable message
    pub message: String,
    /// HTTP status code, when the failure came from a response
    pub status_code: Option<u16>,
    /// Machine-readable code such as `HTTP_500`
    pub code: Option<String>,
}

impl ApiError {
    /// Create an error with only a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status_code: None,
            code: None,
        }
    }

    /// Set the status code.
    pub fn with_status(mut self, status: u16) -> Self {
        self.status_code = Some(status);
        self
    }

    /// Set the error code.
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Build the error for a non-2xx response.
    ///
    /// The body text becomes the message; an empty body falls back to
    /// [`DEFAULT_ERROR_MESSAGE`]. The code is `HTTP_<status>`.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = if body.is_empty() {
            DEFAULT_ERROR_MESSAGE
        } else {
            body
        };
        Self::new(message)
            .with_status(status)
            .with_code(format!("HTTP_{status}"))
    }
}

/// Main error type for the portfolio client.
#[derive(Debug, Error)]
pub enum Error {
    /// The server answered with a non-2xx status.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The request never produced a response.
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// A 2xx response body was not valid JSON for the expected type.
    #[error("Failed to decode response: {0}")]
    Decode(#[source] serde_json::Error),

    /// A request body could not be encoded.
    #[error("Serialization error: {0}")]
    Serialization(#[source] serde_json::Error),

    /// Invalid URL provided.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Input rejected before sending.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Configuration could not be loaded or is inconsistent.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// The HTTP status, for errors that came from a response.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::Api(err) => err.status_code,
            _ => None,
        }
    }

    /// The machine-readable code, for errors that came from a response.
    pub fn code(&self) -> Option<&str> {
        match self {
            Error::Api(err) => err.code.as_deref(),
            _ => None,
        }
    }

    /// The API error, if this is one.
    pub fn as_api_error(&self) -> Option<&ApiError> {
        match self {
            Error::Api(err) => Some(err),
            _ => None,
        }
    }

    /// Whether the server answered with a 5xx status.
    pub fn is_server_error(&self) -> bool {
        self.status_code().is_some_and(|status| status >= 500)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_api_error_fields() {
        let error = ApiError::new("错误信息").with_status(400).with_code("BAD_REQUEST");
        assert_eq!(error.message, "错误信息");
        assert_eq!(error.status_code, Some(400));
        assert_eq!(error.code.as_deref(), Some("BAD_REQUEST"));
        assert_eq!(error.to_string(), "错误信息");
    }

    #[test]
    fn test_from_status_uses_body() {
        let error = ApiError::from_status(500, "Server Error");
        assert_eq!(error.message, "Server Error");
        assert_eq!(error.status_code, Some(500));
        assert_eq!(error.code.as_deref(), Some("HTTP_500"));
    }

    #[test]
    fn test_from_status_empty_body_uses_default() {
        let error = ApiError::from_status(404, "");
        assert_eq!(error.message, DEFAULT_ERROR_MESSAGE);
        assert_eq!(error.code.as_deref(), Some("HTTP_404"));
    }

    #[test]
    fn test_api_variant_is_transparent() {
        let error: Error = ApiError::from_status(502, "Bad Gateway").into();
        assert_eq!(error.to_string(), "Bad Gateway");
        assert_eq!(error.status_code(), Some(502));
        assert_eq!(error.code(), Some("HTTP_502"));
        assert!(error.is_server_error());
        assert_matches!(error.as_api_error(), Some(ApiError { status_code: Some(502), .. }));
    }

    #[test]
    fn test_non_api_errors_have_no_status() {
        let error: Error = TransportError::Timeout.into();
        assert_eq!(error.status_code(), None);
        assert_eq!(error.code(), None);
        assert!(error.as_api_error().is_none());
        assert!(!error.is_server_error());
        assert_eq!(error.to_string(), "Transport error: Timeout");
    }
}
