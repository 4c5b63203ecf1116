//! Per-endpoint loading flags
//!
//! A [`LoadingTracker`] maps an endpoint path to an advisory busy flag that a
//! UI can poll to show a spinner. It is not a lock: two overlapping calls on
//! the same path both set the flag and both clear it.
//!
//! Endpoint methods hold a [`LoadingGuard`] for the duration of a request.
//! The guard clears its flag when dropped, so the flag resets on success, on
//! error, and when the request future is dropped mid-flight.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::trace;

/// Shared map from endpoint path to busy flag.
///
/// Clones share the same map. Unseen endpoints read as idle.
#[derive(Debug, Clone, Default)]
pub struct LoadingTracker {
    states: Arc<RwLock<HashMap<String, bool>>>,
}

impl LoadingTracker {
    /// Create an empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `endpoint` is busy. `false` for endpoints never seen.
    pub fn get(&self, endpoint: &str) -> bool {
        self.states
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(endpoint)
            .copied()
            .unwrap_or(false)
    }

    /// Set the flag for `endpoint`.
    pub fn set(&self, endpoint: &str, loading: bool) {
        trace!(endpoint, loading, "Loading state changed");
        self.states
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(endpoint.to_string(), loading);
    }

    /// Endpoints currently flagged busy, sorted.
    pub fn busy_endpoints(&self) -> Vec<String> {
        let mut busy: Vec<String> = self
            .states
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|(_, loading)| **loading)
            .map(|(endpoint, _)| endpoint.clone())
            .collect();
        busy.sort();
        busy
    }

    /// Whether any endpoint is busy.
    pub fn any_loading(&self) -> bool {
        self.states
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .any(|loading| *loading)
    }

    /// Flag `endpoint` busy until the returned guard is dropped.
    #[must_use = "the flag is cleared as soon as the guard is dropped"]
    pub fn track(&self, endpoint: impl Into<String>) -> LoadingGuard {
        let endpoint = endpoint.into();
        self.set(&endpoint, true);
        LoadingGuard {
            tracker: self.clone(),
            endpoint,
        }
    }
}

/// Clears a loading flag on drop.
#[derive(Debug)]
pub struct LoadingGuard {
    tracker: LoadingTracker,
    endpoint: String,
}

impl LoadingGuard {
    /// The endpoint this guard holds.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        self.tracker.set(&self.endpoint, false);
    }
}
