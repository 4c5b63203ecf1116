//! Transport error types

use std::fmt;

/// Result type for transport operations
pub type Result<T> = std::result::Result<T, TransportError>;

/// Errors that can occur before a response status is available
#[derive(Debug)]
pub enum TransportError {
    /// Request could not be built or the response could not be read
    Http(String),

    /// Connection error
    Connection(String),

    /// Timeout error
    Timeout,

    /// Unsupported or malformed HTTP method
    InvalidMethod(String),

    /// Generic transport error
    Other(String),
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http(msg) => write!(f, "HTTP error: {}", msg),
            Self::Connection(msg) => write!(f, "Connection error: {}", msg),
            Self::Timeout => write!(f, "Timeout"),
            Self::InvalidMethod(method) => write!(f, "Unsupported HTTP method: {}", method),
            Self::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for TransportError {}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_connect() {
            Self::Connection(err.to_string())
        } else {
            Self::Http(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(TransportError::Timeout.to_string(), "Timeout");
        assert_eq!(
            TransportError::Connection("refused".to_string()).to_string(),
            "Connection error: refused"
        );
        assert_eq!(
            TransportError::InvalidMethod("BR EW".to_string()).to_string(),
            "Unsupported HTTP method: BR EW"
        );
        assert_eq!(TransportError::Other("x".to_string()).to_string(), "x");
    }
}
