//! # senwork
//!
//! Typed async client for the senwork portfolio API supporting:
//! - One method per resource (profile, skills, services, experience, projects, contact)
//! - Runtime shape guards for untyped JSON
//! - Per-endpoint loading flags
//! - Settle-all batch requests
//! - Retry with exponential backoff
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use senwork::Client;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Client::new()?;
//!
//!     let skills = client.get_skills().await?;
//!     for skill in skills.data.unwrap_or_default() {
//!         println!("{} {}%", skill.name, skill.proficiency);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Guards
//!
//! ```rust
//! use senwork::guards::parse_guarded;
//! use senwork::types::Skill;
//! use serde_json::json;
//!
//! let body = json!({
//!     "success": true,
//!     "data": [{"name": "Go", "category": "Backend", "proficiency": 95}]
//! });
//! let skills: Vec<Skill> = parse_guarded(&body).unwrap();
//! assert_eq!(skills[0].proficiency, 95);
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

// Re-export commonly used types
pub use client::{Client, ClientBuilder, RequestOptions};
pub use config::{ClientConfig, DEFAULT_BASE_URL, RetryConfig};
pub use error::{ApiError, Error, Result};
pub use loading::{LoadingGuard, LoadingTracker};
pub use senwork_core::batch::{BatchFailure, BatchResult};
pub use types::*;

// Module declarations
pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod guards;
pub mod loading;
pub mod observability;
pub mod types;
pub mod validation;

// Re-export key dependencies for convenience
pub use async_trait::async_trait;
pub use senwork_transport::{HttpRequest, HttpResponse, Transport, TransportError};
pub use serde_json::Value as JsonValue;

/// Prelude module for common imports
///
/// # Examples
///
/// ```rust
/// use senwork::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        ApiError, BatchResult, Client, ClientConfig, Error, LoadingTracker, RequestOptions,
        Result, RetryConfig,
        guards::{Guard, parse_api_response, parse_guarded},
        types::{
            AboutInfo, ApiResponse, ContactForm, Experience, Project, Service, ServiceCategory,
            Skill,
        },
    };
}

/// Crate version, automatically updated from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod mock;

#[cfg(test)]
mod property_tests;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert_eq!(VERSION, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_default_base_url() {
        assert_eq!(DEFAULT_BASE_URL, "http://localhost:8080/api");
    }
}
