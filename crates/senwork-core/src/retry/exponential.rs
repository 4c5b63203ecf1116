//! Exponential backoff.

use super::strategy::BackoffStrategy;
use async_trait::async_trait;
use std::error::Error;
use std::future::Future;
use std::time::Duration;

/// Exponential backoff with a bounded number of attempts.
///
/// The wait after the `n`-th failure (0-indexed) is
/// `initial_delay * multiplier^n`. There is no jitter and no upper cap, so the
/// sequence of waits is fully determined by the configuration.
///
/// # Mathematical Formula
///
/// ```text
/// delay(n) = initial_delay * (multiplier ^ n)
/// ```
///
/// # Examples
///
/// ```rust
/// use senwork_core::retry::{BackoffStrategy, ExponentialBackoff};
/// use std::time::Duration;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// // Default configuration (max_attempts=3, initial=1s, multiplier=2.0)
/// let backoff = ExponentialBackoff::default();
///
/// // Custom configuration
/// let backoff = ExponentialBackoff::builder()
///     .max_attempts(5)
///     .initial_delay(Duration::from_millis(100))
///     .multiplier(1.5)
///     .build();
///
/// let result = backoff.execute(|| async {
///     Ok::<_, std::io::Error>(42)
/// }).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ExponentialBackoff {
    max_attempts: u32,
    initial_delay: Duration,
    multiplier: f64,
}

impl ExponentialBackoff {
    /// Create a new builder for configuring exponential backoff.
    pub fn builder() -> ExponentialBackoffBuilder {
        ExponentialBackoffBuilder::default()
    }

    /// The wait before the second attempt.
    pub fn initial_delay(&self) -> Duration {
        self.initial_delay
    }

    /// Factor applied to the wait after every failure.
    pub fn multiplier(&self) -> f64 {
        self.multiplier
    }
}

impl Default for ExponentialBackoff {
    /// Defaults:
    /// - `max_attempts`: 3
    /// - `initial_delay`: 1s
    /// - `multiplier`: 2.0 (doubles each time)
    fn default() -> Self {
        ExponentialBackoffBuilder::default().build()
    }
}

#[async_trait]
impl BackoffStrategy for ExponentialBackoff {
    async fn execute<F, Fut, T, E>(&self, operation: F) -> Result<T, E>
    where
        F: Fn() -> Fut + Send + Sync,
        Fut: Future<Output = Result<T, E>> + Send,
        T: Send,
        E: Error + Send + Sync + 'static,
    {
        let mut attempts = 0;
        loop {
            match operation().await {
                Ok(result) => return Ok(result),
                Err(err) => {
                    attempts += 1;
                    if attempts >= self.max_attempts || !self.should_retry(&err, attempts) {
                        return Err(err);
                    }

                    let delay = self.next_delay(attempts - 1);

                    #[cfg(feature = "tracing")]
                    tracing::warn!(
                        attempt = attempts,
                        max_attempts = self.max_attempts,
                        delay_ms = delay.map(|d| d.as_millis()),
                        error = %err,
                        "Attempt failed, retrying"
                    );

                    if let Some(delay) = delay {
                        tokio::time::sleep(delay).await;
                    }
                }
            }
        }
    }

    fn next_delay(&self, attempt: u32) -> Option<Duration> {
        let exponent = i32::try_from(attempt).unwrap_or(i32::MAX);
        let secs = self.initial_delay.as_secs_f64() * self.multiplier.powi(exponent);
        // Overflow saturates; tokio clamps far-future deadlines.
        Some(Duration::try_from_secs_f64(secs).unwrap_or(Duration::MAX))
    }

    fn max_attempts(&self) -> u32 {
        self.max_attempts
    }
}

/// Builder for configuring `ExponentialBackoff`.
///
/// # Examples
///
/// ```rust
/// use senwork_core::retry::ExponentialBackoff;
/// use std::time::Duration;
///
/// let backoff = ExponentialBackoff::builder()
///     .max_attempts(5)
///     .initial_delay(Duration::from_millis(100))
///     .multiplier(2.0)
///     .build();
/// ```
#[derive(Debug, Default)]
pub struct ExponentialBackoffBuilder {
    max_attempts: Option<u32>,
    initial_delay: Option<Duration>,
    multiplier: Option<f64>,
}

impl ExponentialBackoffBuilder {
    /// Set the total number of attempts, the first one included.
    ///
    /// Zero is raised to one: the operation always runs at least once.
    ///
    /// Default: 3
    pub fn max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = Some(max_attempts.max(1));
        self
    }

    /// Set the delay before the second attempt.
    ///
    /// Default: 1s
    pub fn initial_delay(mut self, delay: Duration) -> Self {
        self.initial_delay = Some(delay);
        self
    }

    /// Set the exponential multiplier.
    ///
    /// Negative and NaN values are treated as zero.
    ///
    /// Default: 2.0
    pub fn multiplier(mut self, multiplier: f64) -> Self {
        self.multiplier = Some(multiplier.max(0.0));
        self
    }

    /// Build the `ExponentialBackoff` instance.
    ///
    /// Uses default values for any unset parameters.
    pub fn build(self) -> ExponentialBackoff {
        ExponentialBackoff {
            max_attempts: self.max_attempts.unwrap_or(3),
            initial_delay: self.initial_delay.unwrap_or(Duration::from_secs(1)),
            multiplier: self.multiplier.unwrap_or(2.0),
        }
    }
}
