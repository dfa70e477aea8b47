//! Pagination module
//!
//! Every collection endpoint answers with `{"results": [...], "next": url|null}`.
//! The `Paginator` follows `next` links until the server signals exhaustion
//! and returns all pages' results as one ordered `Vec`.
//!
//! Once a `next` link is followed the initial query parameters are dropped:
//! the link already encodes the filters.

mod paginator;
mod types;

pub use paginator::Paginator;
pub use types::{Page, PageState, PaginationStats};
