//! Structured request logging
//!
//! Every call made by [`crate::Client::fetch_api`] is logged through this
//! layer: the outgoing request at `debug`, a 2xx response at `debug`, and a
//! non-2xx response or a transport failure at `warn`.

use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Outgoing request details
#[derive(Debug, Clone)]
pub struct RequestMetadata {
    /// HTTP method
    pub method: String,
    /// Endpoint path relative to the base URL
    pub path: String,
    /// Request body size in bytes
    pub body_size: Option<usize>,
}

impl RequestMetadata {
    /// Describe a request.
    pub fn new(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
            body_size: None,
        }
    }

    /// Set the request body size
    pub fn with_body_size(mut self, size: usize) -> Self {
        self.body_size = Some(size);
        self
    }

    /// Log the request being sent
    pub fn log_request(&self) {
        debug!(
            method = %self.method,
            path = %self.path,
            body_size = self.body_size,
            "Sending API request"
        );
    }

    /// Log a request that never produced a response
    pub fn log_transport_failure(&self, elapsed: Duration, error: &dyn std::error::Error) {
        warn!(
            method = %self.method,
            path = %self.path,
            elapsed_ms = elapsed.as_millis(),
            error = %error,
            "API request failed before a response arrived"
        );
    }
}

/// Received response details
#[derive(Debug, Clone)]
pub struct ResponseMetadata {
    /// HTTP status code
    pub status: u16,
    /// Response body size in bytes
    pub body_size: usize,
    /// Time from send to full body
    pub elapsed: Duration,
}

impl ResponseMetadata {
    /// Describe a response.
    pub fn new(status: u16, body_size: usize, elapsed: Duration) -> Self {
        Self {
            status,
            body_size,
            elapsed,
        }
    }

    /// Whether the status is 2xx.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Log a 2xx response
    pub fn log_success(&self, request: &RequestMetadata) {
        debug!(
            method = %request.method,
            path = %request.path,
            status = self.status,
            elapsed_ms = self.elapsed.as_millis(),
            body_size = self.body_size,
            "API request succeeded"
        );
    }

    /// Log a non-2xx response
    pub fn log_error(&self, request: &RequestMetadata, message: &str) {
        warn!(
            method = %request.method,
            path = %request.path,
            status = self.status,
            elapsed_ms = self.elapsed.as_millis(),
            error = %message,
            "API request returned an error status"
        );
    }

    /// Log a 2xx body that did not decode
    pub fn log_decode_failure(&self, request: &RequestMetadata, error: &serde_json::Error) {
        warn!(
            method = %request.method,
            path = %request.path,
            status = self.status,
            body_size = self.body_size,
            error = %error,
            "API response body did not decode"
        );
    }
}

/// Timer for measuring request duration
#[derive(Debug)]
pub struct RequestTimer {
    start: Instant,
}

impl RequestTimer {
    /// Start a new timer
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Get elapsed duration
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

/// Install a global `fmt` subscriber filtered by `RUST_LOG`.
///
/// Falls back to `senwork=info` when `RUST_LOG` is unset. Does nothing if a
/// global subscriber is already installed, so it is safe to call more than
/// once.
#[cfg(feature = "trace")]
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("senwork=info,senwork_core=info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}
