//! Client construction

use crate::auth::Credentials;
use crate::error::{Error, Result};
use crate::http::{HttpClientConfig, RateLimiterConfig, Timeouts};
use url::Url;

/// Validated settings for a [`super::PgDataClient`]
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// `<host>:<port>` with trailing slashes removed from host
    base_url: String,
    credentials: Credentials,
    timeouts: Timeouts,
    rate_limit: Option<RateLimiterConfig>,
    user_agent: Option<String>,
}

impl ClientConfig {
    /// Create a config from a host, a port and credentials.
    ///
    /// Exactly one of `token`, or `username` together with `password`, must
    /// be supplied.
    pub fn new(
        host: &str,
        port: u16,
        token: Option<String>,
        username: Option<String>,
        password: Option<String>,
    ) -> Result<Self> {
        let credentials = Credentials::from_parts(token, username, password)?;
        Self::with_credentials(host, port, credentials)
    }

    /// Create a config from already-validated credentials
    pub fn with_credentials(host: &str, port: u16, credentials: Credentials) -> Result<Self> {
        let host = host.trim_end_matches('/');
        if host.is_empty() {
            return Err(Error::config("Host must not be empty"));
        }

        let base_url = format!("{host}:{port}");
        let parsed = Url::parse(&base_url)?;
        if parsed.cannot_be_a_base() {
            return Err(Error::config(format!("Host is not a base URL: {host}")));
        }

        Ok(Self {
            base_url,
            credentials,
            timeouts: Timeouts::default(),
            rate_limit: None,
            user_agent: None,
        })
    }

    /// Set connect/read timeouts
    #[must_use]
    pub fn with_timeouts(mut self, timeouts: Timeouts) -> Self {
        self.timeouts = timeouts;
        self
    }

    /// Throttle requests client-side
    #[must_use]
    pub fn with_rate_limit(mut self, rate_limit: RateLimiterConfig) -> Self {
        self.rate_limit = Some(rate_limit);
        self
    }

    /// Override the user agent
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Service root, e.g. `https://pgdata.example:443`
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn timeouts(&self) -> Timeouts {
        self.timeouts
    }

    /// HTTP client configuration derived from these settings
    pub fn http_config(&self) -> HttpClientConfig {
        let mut builder = HttpClientConfig::builder()
            .base_url(&self.base_url)
            .timeouts(self.timeouts);
        if let Some(rate_limit) = &self.rate_limit {
            builder = builder.rate_limit(rate_limit.clone());
        }
        if let Some(user_agent) = &self.user_agent {
            builder = builder.user_agent(user_agent);
        }
        builder.build()
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("credentials", &self.credentials)
            .field("timeouts", &self.timeouts)
            .field("rate_limit", &self.rate_limit)
            .finish_non_exhaustive()
    }
}
