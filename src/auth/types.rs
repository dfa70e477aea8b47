//! Auth configuration types

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// How the client authenticates against the service.
///
/// Exactly one form is ever held, so "token and login" or "neither" cannot
/// be represented past construction.
#[derive(Clone, PartialEq, Eq)]
pub enum Credentials {
    /// Pre-issued API token, used as-is
    Token(String),

    /// Username/password exchanged for a token at the login endpoint
    Login {
        /// Username
        username: String,
        /// Password
        password: String,
    },
}

impl Credentials {
    /// Create token credentials
    pub fn token(token: impl Into<String>) -> Self {
        Self::Token(token.into())
    }

    /// Create login credentials
    pub fn login(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self::Login {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Build credentials from optional parts.
    ///
    /// Succeeds only when either `token` alone, or `username` and `password`
    /// together, are supplied. Empty strings count as absent.
    pub fn from_parts(
        token: Option<String>,
        username: Option<String>,
        password: Option<String>,
    ) -> Result<Self> {
        let token = token.filter(|t| !t.is_empty());
        let username = username.filter(|u| !u.is_empty());
        let password = password.filter(|p| !p.is_empty());

        match (token, username, password) {
            (Some(token), None, None) => Ok(Self::Token(token)),
            (None, Some(username), Some(password)) => Ok(Self::Login { username, password }),
            (Some(_), _, _) => Err(Error::config(
                "Provide either a token or a username and password, not both",
            )),
            (None, Some(_), None) => Err(Error::config("Username given without a password")),
            (None, None, Some(_)) => Err(Error::config("Password given without a username")),
            (None, None, None) => Err(Error::config(
                "Missing credentials: provide a token or a username and password",
            )),
        }
    }

    /// Whether a login exchange is needed before the first request
    pub fn needs_login(&self) -> bool {
        matches!(self, Self::Login { .. })
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Token(_) => f.debug_tuple("Token").field(&"<redacted>").finish(),
            Self::Login { username, .. } => f
                .debug_struct("Login")
                .field("username", username)
                .field("password", &"<redacted>")
                .finish(),
        }
    }
}

/// Body of the login POST
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// Login endpoint response
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    /// Issued token; absent when the server rejects the exchange without an error status
    #[serde(default)]
    pub token: Option<String>,
}
