//! Resource catalog
//!
//! Maps each collection the service exposes to its path and turns typed
//! accessor arguments into query parameters. Nothing here touches the
//! network; [`crate::client::Session`] runs the resulting queries.

mod catalog;
mod query;
mod timestamp;

pub use catalog::Resource;
pub use query::{ResourceQuery, SystemFilter};
pub use timestamp::IsoDateTime;
