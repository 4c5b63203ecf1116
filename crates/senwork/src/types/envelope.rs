//! The response envelope shared by every endpoint

use serde::{Deserialize, Serialize};

/// `{ success, data?, message?, error? }` wrapper around every response body.
///
/// By convention `success` implies `data` and `!success` implies `error`, but
/// the server does not guarantee it; use [`ApiResponse::is_success`] and
/// [`ApiResponse::is_error`] to check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the server handled the request
    pub success: bool,

    /// Payload
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,

    /// Human-readable message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Error description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    /// A successful envelope carrying `data`.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
            error: None,
        }
    }

    /// A failed envelope carrying `error`.
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: None,
            error: Some(error.into()),
        }
    }

    /// `success` is set and `data` is present.
    pub fn is_success(&self) -> bool {
        self.success && self.data.is_some()
    }

    /// `success` is clear and `error` is present.
    pub fn is_error(&self) -> bool {
        !self.success && self.error.is_some()
    }

    /// The payload of a successful envelope.
    pub fn into_data(self) -> Option<T> {
        if self.success { self.data } else { None }
    }
}
