//! Error types for the pgdata client
//!
//! Every public API returns `Result<T, Error>`. Variants group into four
//! categories (configuration, authentication, request, decode) exposed
//! through [`Error::kind`].

use thiserror::Error;

/// The main error type for the pgdata client
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ============================================================================
    // Authentication Errors
    // ============================================================================
    #[error("Authentication failed: {message}")]
    Auth { message: String },

    // ============================================================================
    // Request Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    // ============================================================================
    // Decode Errors
    // ============================================================================
    #[error("Failed to decode response: {message}")]
    Decode { message: String },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Coarse error category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Invalid construction arguments or conflicting filters
    Configuration,
    /// Login exchange failed or returned no token
    Authentication,
    /// Transport failure or non-success HTTP status
    Request,
    /// Response body was not valid JSON or missed expected fields
    Decode,
    /// Local file access
    Io,
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an auth error
    pub fn auth(message: impl Into<String>) -> Self {
        Self::Auth {
            message: message.into(),
        }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Create a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Category this error belongs to
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Config { .. } | Error::InvalidUrl(_) | Error::Yaml(_) => {
                ErrorKind::Configuration
            }
            Error::Auth { .. } => ErrorKind::Authentication,
            Error::Http(_) | Error::HttpStatus { .. } => ErrorKind::Request,
            Error::Decode { .. } => ErrorKind::Decode,
            Error::Io(_) => ErrorKind::Io,
        }
    }

    /// HTTP status code, if the server answered with a non-success status
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::HttpStatus { status, .. } => Some(*status),
            Error::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        if e.is_io() {
            Self::Io(e.into())
        } else {
            Self::decode(e.to_string())
        }
    }
}

/// Result type alias for the pgdata client
pub type Result<T> = std::result::Result<T, Error>;
