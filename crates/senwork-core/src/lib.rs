#![deny(unsafe_code)]
#![warn(missing_docs)]

//! Core abstractions for the senwork client crates.
//!
//! This crate holds the runtime pieces that do not depend on HTTP:
//!
//! - **Retry** via the `BackoffStrategy` trait
//!   - Strict exponential backoff, no jitter, no cap
//!   - Overridable retry predicate
//! - **Batch settlement** via `batch_fetch`
//!   - Runs every request concurrently and waits for all of them
//!   - Splits the outcome into ordered successes and indexed failures
//!
//! # Examples
//!
//! Using the prelude for convenient imports:
//!
//! ```rust
//! use senwork_core::prelude::*;
//! use std::time::Duration;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let backoff = ExponentialBackoff::builder()
//!     .max_attempts(3)
//!     .initial_delay(Duration::from_millis(100))
//!     .build();
//!
//! let result = backoff.execute(|| async {
//!     Ok::<_, std::io::Error>(42)
//! }).await?;
//! # Ok(())
//! # }
//! ```

pub mod batch;
pub mod retry;

/// Convenient re-exports of commonly used items.
///
/// ```rust
/// use senwork_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::batch::{BatchFailure, BatchResult, batch_fetch};
    pub use crate::retry::{BackoffStrategy, ExponentialBackoff, ExponentialBackoffBuilder};
}
