// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # pgdata client
//!
//! Async client for the pgdata energy-data service: locations, PV systems,
//! generation/irradiation/weather time series and utility statements.
//!
//! ## Features
//!
//! - **Two credential forms**: a pre-issued token, or username/password exchanged once for a token
//! - **Transparent pagination**: follows `next` links and returns whole collections
//! - **Typed arguments**: dates and date-times rendered as ISO-8601 range bounds
//! - **Optional typed records**: serde models for every resource
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pgdata_client::{ClientConfig, PgDataClient, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = ClientConfig::new(
//!         "https://pgdata.example",
//!         443,
//!         Some("av89DF23nalkfn3".to_string()),
//!         None,
//!         None,
//!     )?;
//!     let client = PgDataClient::new(config)?;
//!
//!     let session = client.session().await?;
//!     let systems = session.get_systems(None, Some("osaka")).await?;
//!     println!("{} systems", systems.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  Session accessors: get_systems(), get_irradiation_daily()…  │
//! └──────────────────────────────────────────────────────────────┘
//!                               │ ResourceQuery (path + params)
//! ┌──────────────┬──────────────┴───────────┬───────────────────┐
//! │  Resources   │  Pagination              │  HTTP             │
//! ├──────────────┼──────────────────────────┼───────────────────┤
//! │ Path catalog │ Follow `next` links      │ Fixed headers     │
//! │ ISO ranges   │ Concatenate `results`    │ Connect/read t/o  │
//! │ Filters      │ All-or-nothing           │ Token auth        │
//! └──────────────┴──────────────────────────┴───────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Token resolution
pub mod auth;

/// HTTP request executor
pub mod http;

/// Next-link pagination
pub mod pagination;

/// Resource paths and query mapping
pub mod resources;

/// Client and scoped session
pub mod client;

/// Typed record models
pub mod models;

/// File and command-line settings
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use auth::Credentials;
pub use client::{ClientConfig, PgDataClient, Session};
pub use error::{Error, ErrorKind, Result};
pub use resources::{Resource, ResourceQuery, SystemFilter};
pub use types::*;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
