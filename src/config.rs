//! File-based settings for the command-line client
//!
//! ```yaml
//! host: https://pgdata.example
//! port: 443
//! username: alice
//! password: secret
//! read_timeout_ms: 10000
//! ```
//!
//! Values given on the command line (or through `PGDATA_*` environment
//! variables) override the file field by field.

use crate::client::ClientConfig;
use crate::error::{Error, Result};
use crate::http::{RateLimiterConfig, Timeouts};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Default port when neither file nor flags name one
pub const DEFAULT_PORT: u16 = 443;

/// Connection settings before validation
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    #[serde(default)]
    pub host: Option<String>,
    #[serde(default)]
    pub port: Option<u16>,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub connect_timeout_ms: Option<u64>,
    #[serde(default)]
    pub read_timeout_ms: Option<u64>,
    #[serde(default)]
    pub requests_per_second: Option<u32>,
}

impl Settings {
    /// Load settings from a YAML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::config(format!("Config file not found: {}", path.display()))
            } else {
                Error::Io(e)
            }
        })?;
        Self::from_yaml_str(&content)
    }

    /// Parse settings from YAML text
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Overlay `other` on top of `self`; fields set in `other` win
    #[must_use]
    pub fn merge(self, other: Settings) -> Self {
        Self {
            host: other.host.or(self.host),
            port: other.port.or(self.port),
            token: other.token.or(self.token),
            username: other.username.or(self.username),
            password: other.password.or(self.password),
            connect_timeout_ms: other.connect_timeout_ms.or(self.connect_timeout_ms),
            read_timeout_ms: other.read_timeout_ms.or(self.read_timeout_ms),
            requests_per_second: other.requests_per_second.or(self.requests_per_second),
        }
    }

    /// Validate into a client configuration
    pub fn into_client_config(self) -> Result<ClientConfig> {
        let host = self
            .host
            .ok_or_else(|| Error::config("Missing host (set it in the config file or use --host)"))?;
        let port = self.port.unwrap_or(DEFAULT_PORT);

        let defaults = Timeouts::default();
        let timeouts = Timeouts::new(
            self.connect_timeout_ms
                .map_or(defaults.connect, Duration::from_millis),
            self.read_timeout_ms
                .map_or(defaults.read, Duration::from_millis),
        );

        let mut config = ClientConfig::new(&host, port, self.token, self.username, self.password)?
            .with_timeouts(timeouts);
        if let Some(rps) = self.requests_per_second {
            config = config.with_rate_limit(RateLimiterConfig::per_second(rps));
        }
        Ok(config)
    }
}
