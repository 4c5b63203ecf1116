//! Configuration for the portfolio client

use http::HeaderMap;
use senwork_core::retry::ExponentialBackoff;
use std::time::Duration;

/// Default API base URL.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";

const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for the portfolio client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL that endpoint paths are appended to
    pub base_url: String,

    /// Headers sent with every request
    pub default_headers: HeaderMap,

    /// Whole-request timeout. `None` waits indefinitely.
    pub timeout: Option<Duration>,

    /// TCP connect timeout
    pub connect_timeout: Duration,

    /// Retry policy used by [`crate::Client::fetch_with_retry`] when no
    /// explicit policy is given
    pub retry: RetryConfig,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            default_headers: HeaderMap::new(),
            timeout: None,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            retry: RetryConfig::default(),
        }
    }
}

impl ClientConfig {
    /// Create a configuration pointing at `base_url`.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Load configuration from environment variables.
    ///
    /// A `.env` file in the working directory is read first, if present.
    /// This will look for:
    /// - `SENWORK_API_BASE_URL` for the API base URL
    /// - `SENWORK_API_TIMEOUT` for the request timeout (in seconds)
    /// - `SENWORK_API_CONNECT_TIMEOUT` for the connect timeout (in seconds)
    /// - `SENWORK_RETRY_MAX_ATTEMPTS` for the total number of attempts
    /// - `SENWORK_RETRY_DELAY_MS` for the first retry delay (in milliseconds)
    /// - `SENWORK_RETRY_BACKOFF` for the delay multiplier
    ///
    /// Unset variables keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` when a numeric variable is set but does not
    /// parse.
    #[cfg(feature = "env")]
    pub fn from_env() -> crate::Result<Self> {
        use std::env;

        // A missing .env file is not an error
        let _ = dotenvy::dotenv();

        let mut config = Self::default();

        if let Ok(base_url) = env::var("SENWORK_API_BASE_URL") {
            config.base_url = base_url;
        }

        if let Some(secs) = parse_var::<u64>("SENWORK_API_TIMEOUT")? {
            config.timeout = Some(Duration::from_secs(secs));
        }

        if let Some(secs) = parse_var::<u64>("SENWORK_API_CONNECT_TIMEOUT")? {
            config.connect_timeout = Duration::from_secs(secs);
        }

        if let Some(max_attempts) = parse_var::<u32>("SENWORK_RETRY_MAX_ATTEMPTS")? {
            config.retry.max_attempts = max_attempts;
        }

        if let Some(millis) = parse_var::<u64>("SENWORK_RETRY_DELAY_MS")? {
            config.retry.delay = Duration::from_millis(millis);
        }

        if let Some(backoff) = parse_var::<f64>("SENWORK_RETRY_BACKOFF")? {
            config.retry.backoff = backoff;
        }

        Ok(config)
    }

    /// Merge this configuration with another, with the other taking precedence.
    ///
    /// Only values that differ from the defaults are taken from `other`.
    /// Default headers are combined, `other` winning on conflicts.
    pub fn merge(mut self, other: ClientConfig) -> Self {
        if other.base_url != DEFAULT_BASE_URL {
            self.base_url = other.base_url;
        }
        for (key, value) in other.default_headers.iter() {
            self.default_headers.insert(key.clone(), value.clone());
        }
        if other.timeout.is_some() {
            self.timeout = other.timeout;
        }
        if other.connect_timeout != DEFAULT_CONNECT_TIMEOUT {
            self.connect_timeout = other.connect_timeout;
        }
        if other.retry != RetryConfig::default() {
            self.retry = other.retry;
        }

        self
    }
}

#[cfg(feature = "env")]
fn parse_var<T: std::str::FromStr>(name: &str) -> crate::Result<Option<T>> {
    match std::env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| crate::Error::Config(format!("{name} has an invalid value: '{raw}'"))),
        Err(_) => Ok(None),
    }
}

/// Retry policy for [`crate::Client::fetch_with_retry`].
///
/// Waits `delay`, then `delay * backoff`, then `delay * backoff²`, and so on
/// between attempts. There is no jitter and no upper bound on the wait.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RetryConfig {
    /// Total number of attempts, the first one included. Zero sends nothing
    /// and fails.
    pub max_attempts: u32,

    /// Wait before the second attempt
    pub delay: Duration,

    /// Factor applied to the wait after each further failure
    pub backoff: f64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            delay: Duration::from_millis(1000),
            backoff: 2.0,
        }
    }
}

impl RetryConfig {
    /// Build the backoff strategy for this policy.
    pub fn to_backoff(&self) -> ExponentialBackoff {
        ExponentialBackoff::builder()
            .max_attempts(self.max_attempts)
            .initial_delay(self.delay)
            .multiplier(self.backoff)
            .build()
    }
}

impl From<RetryConfig> for ExponentialBackoff {
    fn from(config: RetryConfig) -> Self {
        config.to_backoff()
    }
}
