//! HTTP transport layer for the senwork portfolio client
//!
//! Provides a trait-based transport abstraction so the client can run over a
//! real HTTP connection in production and over an in-memory double in tests.
//!
//! # Architecture
//!
//! - **Transport trait**: Generic interface for any transport implementation
//! - **HTTP transport**: REST client via reqwest
//! - **Error handling**: One error type for connection-level failures
//!
//! Status codes are not interpreted here. A 500 response is a successful
//! transport round-trip; mapping it to an API error is the caller's job.
//!
//! # Usage
//!
//! ```ignore
//! use senwork_transport::{HttpRequest, HttpTransport, Transport};
//!
//! let transport = HttpTransport::new()?;
//! let request = HttpRequest::new("GET", "http://localhost:8080/api/about");
//! let response = transport.send_http(request).await?;
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod http;
pub mod traits;

// Re-export commonly used types
pub use error::{Result, TransportError};
pub use http::{HttpTransport, HttpTransportConfig};
pub use traits::{HttpRequest, HttpResponse, Transport};
