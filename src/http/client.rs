//! HTTP request executor
//!
//! Sends one authenticated GET, checks the status and decodes the JSON body.

use super::rate_limit::{RateLimiter, RateLimiterConfig};
use crate::auth::{Authenticator, Credentials};
use crate::error::{Error, Result};
use crate::types::{JsonValue, QueryParams};
use reqwest::{Client, Method, Response};
use std::time::Duration;
use tracing::{debug, warn};

/// `Accept` header sent with every request; pins the API version
pub const ACCEPT: &str = "application/json; version=1.0";

/// `Content-Type` header sent with every request
pub const CONTENT_TYPE: &str = "application/json";

/// Connect and read timeouts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeouts {
    /// Time allowed to establish the connection
    pub connect: Duration,
    /// Time allowed between reads of the response
    pub read: Duration,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            connect: Duration::from_secs(3),
            read: Duration::from_millis(3050),
        }
    }
}

impl Timeouts {
    /// Create timeouts from explicit durations
    pub fn new(connect: Duration, read: Duration) -> Self {
        Self { connect, read }
    }

    /// Upper bound for a whole single-shot exchange such as the login POST
    pub fn total(&self) -> Duration {
        self.connect + self.read
    }
}

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Base URL for relative request paths
    pub base_url: Option<String>,
    /// Connect/read timeouts
    pub timeouts: Timeouts,
    /// Rate limiter configuration
    pub rate_limit: Option<RateLimiterConfig>,
    /// User agent string
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            timeouts: Timeouts::default(),
            rate_limit: None,
            user_agent: format!("pgdata-client/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl HttpClientConfig {
    /// Create a new config builder
    pub fn builder() -> HttpClientConfigBuilder {
        HttpClientConfigBuilder::default()
    }
}

/// Builder for HTTP client config
#[derive(Default)]
pub struct HttpClientConfigBuilder {
    config: HttpClientConfig,
}

impl HttpClientConfigBuilder {
    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = Some(url.into());
        self
    }

    /// Set connect/read timeouts
    pub fn timeouts(mut self, timeouts: Timeouts) -> Self {
        self.config.timeouts = timeouts;
        self
    }

    /// Set rate limiter
    pub fn rate_limit(mut self, config: RateLimiterConfig) -> Self {
        self.config.rate_limit = Some(config);
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Build the config
    pub fn build(self) -> HttpClientConfig {
        self.config
    }
}

/// Configuration for a single request
#[derive(Debug, Clone, Default)]
pub struct RequestConfig {
    /// Query parameters
    pub query: QueryParams,
    /// Override the whole-request timeout
    pub timeout: Option<Duration>,
}

impl RequestConfig {
    /// Create a new request config
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a request config carrying `params`
    pub fn with_query(params: QueryParams) -> Self {
        Self {
            query: params,
            timeout: None,
        }
    }

    /// Add a query parameter
    #[must_use]
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(key.into(), value.into());
        self
    }

    /// Set timeout
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// HTTP client for the service
pub struct HttpClient {
    client: Client,
    config: HttpClientConfig,
    authenticator: Option<Authenticator>,
    rate_limiter: Option<RateLimiter>,
}

impl HttpClient {
    /// Create a new HTTP client with custom configuration
    pub fn with_config(config: HttpClientConfig) -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(config.timeouts.connect)
            .read_timeout(config.timeouts.read)
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| Error::config(format!("Failed to build HTTP client: {e}")))?;

        let rate_limiter = config.rate_limit.as_ref().map(RateLimiter::new);

        Ok(Self {
            client,
            config,
            authenticator: None,
            rate_limiter,
        })
    }

    /// Create a client that signs every request with `credentials`.
    ///
    /// The login endpoint is resolved against `config.base_url`, which is
    /// therefore required.
    pub fn with_auth(config: HttpClientConfig, credentials: Credentials) -> Result<Self> {
        let base_url = config
            .base_url
            .clone()
            .ok_or_else(|| Error::config("A base URL is required for authentication"))?;
        let login_timeout = config.timeouts.total();

        let mut client = Self::with_config(config)?;
        client.authenticator = Some(Authenticator::new(
            credentials,
            &base_url,
            client.client.clone(),
            login_timeout,
        ));
        Ok(client)
    }

    /// Get the authenticator, if any
    pub fn authenticator(&self) -> Option<&Authenticator> {
        self.authenticator.as_ref()
    }

    /// Get the client configuration
    pub fn config(&self) -> &HttpClientConfig {
        &self.config
    }

    /// Make a GET request and check its status
    pub async fn get(&self, url: &str, config: RequestConfig) -> Result<Response> {
        let full_url = self.build_url(url);

        if let Some(ref limiter) = self.rate_limiter {
            limiter.wait().await;
        }

        let mut req = self
            .client
            .request(Method::GET, &full_url)
            .header("Accept", ACCEPT)
            .header("Content-Type", CONTENT_TYPE);

        if !config.query.is_empty() {
            req = req.query(&config.query);
        }

        if let Some(timeout) = config.timeout {
            req = req.timeout(timeout);
        }

        if let Some(ref auth) = self.authenticator {
            req = auth.apply(req).await?;
        }

        debug!("GET {} {:?}", full_url, config.query);
        let response = req.send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("GET {} returned {}", full_url, status.as_u16());
            return Err(Error::http_status(status.as_u16(), body));
        }

        Ok(response)
    }

    /// Make a GET request and parse the JSON body
    pub async fn get_json(&self, url: &str, config: RequestConfig) -> Result<JsonValue> {
        let response = self.get(url, config).await?;
        let body = response.text().await?;
        serde_json::from_str(&body)
            .map_err(|e| Error::decode(format!("Response body is not valid JSON: {e}")))
    }

    /// Check if rate limiting is enabled
    pub fn has_rate_limiter(&self) -> bool {
        self.rate_limiter.is_some()
    }

    /// Build full URL from path
    pub(crate) fn build_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }

        match &self.config.base_url {
            Some(base) => {
                let base = base.trim_end_matches('/');
                let path = path.trim_start_matches('/');
                format!("{base}/{path}")
            }
            None => path.to_string(),
        }
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("config", &self.config)
            .field("has_authenticator", &self.authenticator.is_some())
            .field("has_rate_limiter", &self.rate_limiter.is_some())
            .finish_non_exhaustive()
    }
}
