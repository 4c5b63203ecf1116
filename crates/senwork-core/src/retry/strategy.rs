//! The retry strategy trait.

use async_trait::async_trait;
use std::error::Error;
use std::future::Future;
use std::time::Duration;

/// A strategy for retrying failed operations with backoff.
///
/// Implementations decide how many attempts an operation gets, how long to
/// wait between them, and which errors are worth another try.
///
/// # Examples
///
/// ```rust
/// use senwork_core::retry::{BackoffStrategy, ExponentialBackoff};
/// use std::time::Duration;
/// use std::sync::atomic::{AtomicU32, Ordering};
/// use std::sync::Arc;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let backoff = ExponentialBackoff::builder()
///     .max_attempts(3)
///     .initial_delay(Duration::from_millis(100))
///     .build();
///
/// let attempts = Arc::new(AtomicU32::new(0));
/// let result = backoff.execute(|| {
///     let attempts = Arc::clone(&attempts);
///     async move {
///         let current = attempts.fetch_add(1, Ordering::SeqCst);
///         if current < 2 {
///             Err(std::io::Error::other("retry me"))
///         } else {
///             Ok(42)
///         }
///     }
/// }).await?;
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait BackoffStrategy: Send + Sync {
    /// Execute an operation with retry logic.
    ///
    /// The operation is called until it succeeds, [`should_retry`] rejects an
    /// error, or [`max_attempts`] calls have failed. Only the last error is
    /// returned; earlier ones are dropped.
    ///
    /// [`should_retry`]: BackoffStrategy::should_retry
    /// [`max_attempts`]: BackoffStrategy::max_attempts
    async fn execute<F, Fut, T, E>(&self, operation: F) -> Result<T, E>
    where
        F: Fn() -> Fut + Send + Sync,
        Fut: Future<Output = Result<T, E>> + Send,
        T: Send,
        E: Error + Send + Sync + 'static;

    /// Determine if an error is retryable.
    ///
    /// The default retries everything.
    ///
    /// # Parameters
    /// - `error`: The error to evaluate
    /// - `attempt`: Number of attempts made so far, the failed one included
    fn should_retry(&self, error: &dyn Error, attempt: u32) -> bool {
        let _ = (error, attempt);
        true
    }

    /// Delay to wait after the `attempt`-th failure (0-indexed).
    ///
    /// `next_delay(0)` is slept between the first and second attempts.
    /// `None` means retry immediately.
    fn next_delay(&self, attempt: u32) -> Option<Duration>;

    /// Total number of attempts, the first one included.
    ///
    /// With `max_attempts() == 3` the operation runs at most three times.
    fn max_attempts(&self) -> u32;
}
