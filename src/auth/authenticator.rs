//! Authenticator implementation
//!
//! Resolves the bearer token and applies it to outgoing requests.

use super::types::{Credentials, LoginRequest, LoginResponse};
use crate::error::{Error, Result};
use crate::http::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, RequestBuilder};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

/// Path of the username/password exchange endpoint
pub const LOGIN_PATH: &str = "/api-token-auth/";

/// Authenticator handles token resolution and request signing
pub struct Authenticator {
    /// Configured credentials
    credentials: Credentials,
    /// Full URL of the login endpoint
    login_url: String,
    /// Token obtained through login; stays `None` until a login succeeds
    cached_token: Arc<RwLock<Option<String>>>,
    /// HTTP client for the login request
    http_client: Client,
    /// Timeout for the login request
    timeout: Duration,
}

impl Authenticator {
    /// Create an authenticator for the service rooted at `base_url`
    pub fn new(
        credentials: Credentials,
        base_url: &str,
        http_client: Client,
        timeout: Duration,
    ) -> Self {
        Self {
            credentials,
            login_url: format!("{}{LOGIN_PATH}", base_url.trim_end_matches('/')),
            cached_token: Arc::new(RwLock::new(None)),
            http_client,
            timeout,
        }
    }

    /// Return the bearer token, logging in on first use.
    ///
    /// A pre-issued token is returned without any network call. A login
    /// token is fetched once; later calls reuse it. On failure nothing is
    /// cached, so the next call tries again.
    pub async fn token(&self) -> Result<String> {
        let (username, password) = match &self.credentials {
            Credentials::Token(token) => return Ok(token.clone()),
            Credentials::Login { username, password } => (username, password),
        };

        {
            let cached = self.cached_token.read().await;
            if let Some(token) = cached.as_ref() {
                debug!("Reusing cached token");
                return Ok(token.clone());
            }
        }

        let mut cached = self.cached_token.write().await;

        // Another task may have logged in while we waited for the lock
        if let Some(token) = cached.as_ref() {
            return Ok(token.clone());
        }

        let token = self.login(username, password).await?;
        *cached = Some(token.clone());
        Ok(token)
    }

    /// Attach the `Authorization: Token <value>` header
    pub async fn apply(&self, req: RequestBuilder) -> Result<RequestBuilder> {
        let token = self.token().await?;
        Ok(req.header("Authorization", format!("Token {token}")))
    }

    /// Whether a token is available without a network call
    pub async fn is_resolved(&self) -> bool {
        match &self.credentials {
            Credentials::Token(_) => true,
            Credentials::Login { .. } => self.cached_token.read().await.is_some(),
        }
    }

    /// Exchange username and password for a token
    async fn login(&self, username: &str, password: &str) -> Result<String> {
        debug!("POST {}", self.login_url);

        let response = self
            .http_client
            .post(&self.login_url)
            .header("Accept", ACCEPT)
            .header("Content-Type", CONTENT_TYPE)
            .json(&LoginRequest { username, password })
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| Error::auth(format!("Login request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            warn!("POST {} returned {}", self.login_url, status);
            return Err(Error::auth(format!(
                "Login request failed with status {status}: {body}"
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| Error::auth(format!("Failed to read login response: {e}")))?;
        let parsed: LoginResponse = serde_json::from_str(&body)
            .map_err(|e| Error::auth(format!("Login response is not valid JSON: {e}")))?;

        let token = parsed
            .token
            .filter(|t| !t.is_empty())
            .ok_or_else(|| Error::auth("Login response has no token field"))?;

        info!(username, "Obtained API token");
        Ok(token)
    }

    /// Get the configured credentials
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Get the login endpoint URL
    pub fn login_url(&self) -> &str {
        &self.login_url
    }
}

impl std::fmt::Debug for Authenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Authenticator")
            .field("credentials", &self.credentials)
            .field("login_url", &self.login_url)
            .finish_non_exhaustive()
    }
}
