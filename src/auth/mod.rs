//! Authentication module
//!
//! Supports: pre-issued token, username/password login exchange
//!
//! The `Authenticator` resolves a bearer token once and caches it for the
//! lifetime of the client. Every request carries it as `Authorization: Token <value>`.

mod authenticator;
mod types;

pub use authenticator::{Authenticator, LOGIN_PATH};
pub use types::{Credentials, LoginRequest, LoginResponse};
