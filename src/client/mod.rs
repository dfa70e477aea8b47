//! Client and session
//!
//! ```rust,ignore
//! use pgdata_client::{ClientConfig, PgDataClient};
//!
//! let config = ClientConfig::new("https://pgdata.example", 443, Some(token), None, None)?;
//! let client = PgDataClient::new(config)?;
//!
//! let session = client.session().await?;
//! let systems = session.get_systems(None, None).await?;
//! ```
//!
//! Opening a [`Session`] resolves the API token (logging in if needed).
//! Dropping it performs no network action.

mod session;
mod types;

pub use session::{PgDataClient, Session};
pub use types::ClientConfig;

#[cfg(test)]
mod tests;
