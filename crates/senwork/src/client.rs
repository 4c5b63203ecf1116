//! Main client implementation for the portfolio API

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use http::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use http::Method;
use senwork_core::batch::{self, BatchResult};
use senwork_core::retry::BackoffStrategy;
use senwork_transport::{HttpRequest, HttpTransport, HttpTransportConfig, Transport};
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    config::{ClientConfig, RetryConfig},
    error::{ApiError, Error, Result},
    loading::LoadingTracker,
    observability::{RequestMetadata, RequestTimer, ResponseMetadata},
};

const MAX_ATTEMPTS_REACHED: &str = "Maximum retry attempts reached";

/// Client for the portfolio API.
///
/// Cloning is cheap; clones share the transport and the loading tracker.
///
/// # Example
///
/// ```rust,no_run
/// use senwork::Client;
///
/// # async fn example() -> senwork::Result<()> {
/// let client = Client::builder()
///     .base_url("http://localhost:8080/api")
///     .build()?;
///
/// let about = client.get_about().await?;
/// if let Some(info) = about.data {
///     println!("{} - {}", info.name, info.title);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    transport: Arc<dyn Transport>,
    base_url: String,
    default_headers: HeaderMap,
    loading: LoadingTracker,
    retry: RetryConfig,
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.inner.base_url)
            .field("transport", &self.inner.transport.name())
            .finish_non_exhaustive()
    }
}

impl Client {
    /// Create a client for the default base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP transport cannot be initialised.
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    /// Create a new client builder for advanced configuration.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /// Create a client from a configuration object, using the reqwest
    /// transport and a fresh loading tracker.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidUrl` if the base URL does not parse or is not
    /// http(s), and `Error::Transport` if the HTTP client cannot be built.
    pub fn from_config(config: ClientConfig) -> Result<Self> {
        Self::builder().config(config).build()
    }

    /// Base URL with any trailing slash removed.
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    /// The loading tracker shared by this client's endpoint methods.
    pub fn loading(&self) -> &LoadingTracker {
        &self.inner.loading
    }

    /// Whether a call to `endpoint` is in flight.
    pub fn loading_state(&self, endpoint: &str) -> bool {
        self.inner.loading.get(endpoint)
    }

    /// Retry policy configured for this client.
    pub fn retry_config(&self) -> RetryConfig {
        self.inner.retry
    }

    /// Send a request to `base_url + path` and decode the JSON reply.
    ///
    /// Headers are layered: `content-type: application/json` first, then the
    /// client's default headers, then those in `options`. Later layers win and
    /// names compare case-insensitively.
    ///
    /// The body of a 2xx reply is decoded into `T` as is; no shape check is
    /// applied.
    ///
    /// # Errors
    ///
    /// - `Error::Api` for a non-2xx status, with the body text as message
    ///   (or `请求失败` when empty) and code `HTTP_<status>`
    /// - `Error::Transport` when no response arrived
    /// - `Error::Decode` when a 2xx body is not valid JSON for `T`
    /// - `Error::InvalidRequest` for a header that is not valid HTTP
    pub async fn fetch_api<T>(&self, path: &str, options: RequestOptions) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.inner.base_url, path);
        let mut metadata = RequestMetadata::new(options.method.as_str(), path);

        let mut request = HttpRequest::new(options.method.as_str(), url);
        request.headers = self.merge_headers(&options.headers)?;
        if let Some(body) = options.body {
            metadata = metadata.with_body_size(body.len());
            request = request.with_body(body);
        }

        metadata.log_request();
        let timer = RequestTimer::start();

        let response = match self.inner.transport.send_http(request).await {
            Ok(response) => response,
            Err(err) => {
                metadata.log_transport_failure(timer.elapsed(), &err);
                return Err(err.into());
            }
        };

        let response_metadata =
            ResponseMetadata::new(response.status, response.body.len(), timer.elapsed());

        if !response.is_success() {
            let body = response.text().unwrap_or_default();
            let error = ApiError::from_status(response.status, &body);
            response_metadata.log_error(&metadata, &error.message);
            return Err(error.into());
        }

        match serde_json::from_slice(&response.body) {
            Ok(value) => {
                response_metadata.log_success(&metadata);
                Ok(value)
            }
            Err(err) => {
                response_metadata.log_decode_failure(&metadata, &err);
                Err(Error::Decode(err))
            }
        }
    }

    /// GET `path`, retrying every failure with exponential backoff.
    ///
    /// Waits `retry.delay` after the first failure and multiplies the wait by
    /// `retry.backoff` after each further one. Gives up after
    /// `retry.max_attempts` attempts and returns the last error.
    ///
    /// With `max_attempts` of zero no request is sent.
    ///
    /// # Errors
    ///
    /// Returns the error of the final attempt, or `Error::InvalidRequest`
    /// when `max_attempts` is zero.
    pub async fn fetch_with_retry<T>(&self, path: &str, retry: RetryConfig) -> Result<T>
    where
        T: DeserializeOwned + Send,
    {
        if retry.max_attempts == 0 {
            return Err(Error::InvalidRequest(MAX_ATTEMPTS_REACHED.to_string()));
        }

        retry
            .to_backoff()
            .execute(|| self.fetch_api::<T>(path, RequestOptions::get()))
            .await
    }

    /// Run requests concurrently and collect every outcome.
    ///
    /// See [`senwork_core::batch::batch_fetch`]. Never fails; failures are
    /// reported in [`BatchResult::failed`] labelled `request-<index>`.
    pub async fn batch_fetch<I, F, Fut, T>(&self, requests: I) -> BatchResult<T, Error>
    where
        I: IntoIterator<Item = F>,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        batch::batch_fetch(requests).await
    }

    fn merge_headers(&self, extra: &[(String, String)]) -> Result<HashMap<String, String>> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        for (name, value) in &self.inner.default_headers {
            headers.insert(name.clone(), value.clone());
        }

        for (name, value) in extra {
            let (name, value) = parse_header(name, value)?;
            headers.insert(name, value);
        }

        headers
            .iter()
            .map(|(name, value)| {
                let name = name.as_str();
                value
                    .to_str()
                    .map(|value| (name.to_string(), value.to_string()))
                    .map_err(|_| Error::InvalidRequest(format!("header '{name}' is not valid text")))
            })
            .collect()
    }
}

fn parse_header(name: &str, value: &str) -> Result<(HeaderName, HeaderValue)> {
    let header_name = HeaderName::from_bytes(name.as_bytes())
        .map_err(|_| Error::InvalidRequest(format!("invalid header name '{name}'")))?;
    let header_value = HeaderValue::from_str(value)
        .map_err(|_| Error::InvalidRequest(format!("invalid value for header '{name}'")))?;
    Ok((header_name, header_value))
}

/// Per-request options for [`Client::fetch_api`].
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// HTTP method, GET by default
    pub method: Method,
    /// Extra headers, applied after the client's defaults
    pub headers: Vec<(String, String)>,
    /// Raw request body
    pub body: Option<Vec<u8>>,
}

impl RequestOptions {
    /// A plain GET.
    pub fn get() -> Self {
        Self::default()
    }

    /// A POST whose body is `body` encoded as JSON.
    ///
    /// # Errors
    ///
    /// Returns `Error::Serialization` if `body` cannot be encoded.
    pub fn post_json<B: Serialize + ?Sized>(body: &B) -> Result<Self> {
        let body = serde_json::to_vec(body).map_err(Error::Serialization)?;
        Ok(Self {
            method: Method::POST,
            body: Some(body),
            ..Self::default()
        })
    }

    /// Set the method.
    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Add a header. Validated when the request is sent.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Set a raw body.
    pub fn body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = Some(body.into());
        self
    }
}

/// Builder for creating a configured Client.
#[derive(Default)]
pub struct ClientBuilder {
    config: ClientConfig,
    transport: Option<Arc<dyn Transport>>,
    loading: Option<LoadingTracker>,
    invalid_header: Option<String>,
}

impl ClientBuilder {
    /// Replace the whole configuration.
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the base URL for the API.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config.base_url = base_url.into();
        self
    }

    /// Add a header sent with every request.
    ///
    /// An invalid name or value is reported by [`ClientBuilder::build`].
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let (name, value) = (name.into(), value.into());
        match parse_header(&name, &value) {
            Ok((name, value)) => {
                self.config.default_headers.insert(name, value);
            }
            Err(_) => {
                self.invalid_header.get_or_insert(name);
            }
        }
        self
    }

    /// Set the whole-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = Some(timeout);
        self
    }

    /// Set the connect timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.config.connect_timeout = timeout;
        self
    }

    /// Set the default retry policy.
    pub fn retry(mut self, retry: RetryConfig) -> Self {
        self.config.retry = retry;
        self
    }

    /// Use a custom transport instead of reqwest.
    ///
    /// Timeouts are then the transport's concern and the configured ones are
    /// ignored.
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Share an existing loading tracker.
    pub fn loading(mut self, loading: LoadingTracker) -> Self {
        self.loading = Some(loading);
        self
    }

    /// Build the client with the configured options.
    ///
    /// # Errors
    ///
    /// - `Error::InvalidRequest` if a header passed to
    ///   [`ClientBuilder::header`] was invalid
    /// - `Error::InvalidUrl` if the base URL does not parse or is not http(s)
    /// - `Error::Transport` if the reqwest client cannot be built
    pub fn build(self) -> Result<Client> {
        if let Some(name) = self.invalid_header {
            return Err(Error::InvalidRequest(format!("invalid header '{name}'")));
        }

        let base_url = validate_base_url(&self.config.base_url)?;

        let transport: Arc<dyn Transport> = match self.transport {
            Some(transport) => transport,
            None => Arc::new(HttpTransport::with_config(HttpTransportConfig {
                timeout: self.config.timeout,
                connect_timeout: self.config.connect_timeout,
                ..HttpTransportConfig::default()
            })?),
        };

        tracing::debug!(
            base_url = %base_url,
            transport = transport.name(),
            "Portfolio client created"
        );

        Ok(Client {
            inner: Arc::new(ClientInner {
                transport,
                base_url,
                default_headers: self.config.default_headers,
                loading: self.loading.unwrap_or_default(),
                retry: self.config.retry,
            }),
        })
    }
}

fn validate_base_url(raw: &str) -> Result<String> {
    let parsed = Url::parse(raw).map_err(|e| Error::InvalidUrl(format!("{raw}: {e}")))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(Error::InvalidUrl(format!(
            "{raw}: scheme must be http or https"
        )));
    }
    Ok(raw.strip_suffix('/').unwrap_or(raw).to_string())
}
