//! Settle-all batch execution.
//!
//! [`batch_fetch`] starts every request at once and waits until each one has
//! either succeeded or failed. A failure never cancels its siblings; it is
//! recorded next to the position it came from.

use futures::future::join_all;
use std::future::Future;

/// A request that failed inside a batch.
#[derive(Debug)]
pub struct BatchFailure<E> {
    /// Synthetic label `request-<index>`, where `index` is the 0-based
    /// position in the original request list.
    pub endpoint: String,
    /// The error the request failed with.
    pub error: E,
}

/// Outcome of a batch: successes in input order plus every failure.
#[derive(Debug)]
pub struct BatchResult<T, E> {
    /// Successful values, ordered by their position in the request list.
    pub success: Vec<T>,
    /// Failed requests, ordered by their position in the request list.
    pub failed: Vec<BatchFailure<E>>,
}

impl<T, E> BatchResult<T, E> {
    /// `true` when no request failed.
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }

    /// Number of requests that were run.
    pub fn len(&self) -> usize {
        self.success.len() + self.failed.len()
    }

    /// `true` when the batch was empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T, E> Default for BatchResult<T, E> {
    fn default() -> Self {
        Self {
            success: Vec::new(),
            failed: Vec::new(),
        }
    }
}

/// Run every request concurrently and partition the settled results.
///
/// Each element of `requests` is a thunk producing the request future. All
/// thunks are invoked up front, then the futures are polled together until
/// every one has finished. Result order follows input order, not completion
/// order.
///
/// # Examples
///
/// ```rust
/// use senwork_core::batch::batch_fetch;
/// use std::future::Future;
/// use std::pin::Pin;
///
/// # async fn example() {
/// type Request = Box<dyn FnOnce() -> Pin<Box<dyn Future<Output = Result<u32, String>>>>>;
///
/// let requests: Vec<Request> = vec![
///     Box::new(|| Box::pin(async { Ok(1) })),
///     Box::new(|| Box::pin(async { Err("boom".to_string()) })),
///     Box::new(|| Box::pin(async { Ok(3) })),
/// ];
///
/// let result = batch_fetch(requests).await;
/// assert_eq!(result.success, vec![1, 3]);
/// assert_eq!(result.failed[0].endpoint, "request-1");
/// # }
/// ```
pub async fn batch_fetch<I, F, Fut, T, E>(requests: I) -> BatchResult<T, E>
where
    I: IntoIterator<Item = F>,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    let settled = join_all(requests.into_iter().map(|request| request())).await;

    let mut result = BatchResult::default();
    for (index, outcome) in settled.into_iter().enumerate() {
        match outcome {
            Ok(value) => result.success.push(value),
            Err(error) => result.failed.push(BatchFailure {
                endpoint: format!("request-{index}"),
                error,
            }),
        }
    }

    #[cfg(feature = "tracing")]
    tracing::info!(
        succeeded = result.success.len(),
        failed = result.failed.len(),
        "Batch settled"
    );

    result
}
