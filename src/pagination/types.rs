//! Pagination types
//!
//! Page extraction and the per-query state machine.

use crate::error::{Error, Result};
use crate::types::{JsonValue, QueryParams, Record};

/// One page of a collection response
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    /// Records on this page, in server order
    pub results: Vec<Record>,
    /// Link to the following page; `None` once the collection is exhausted
    pub next: Option<String>,
}

impl Page {
    /// Extract `results` and `next` from a response body.
    ///
    /// Both fields must be present. `next` may be `null`; an empty string is
    /// treated the same as `null`.
    pub fn from_json(body: JsonValue) -> Result<Self> {
        let JsonValue::Object(mut map) = body else {
            return Err(Error::decode("Expected a JSON object page"));
        };

        let results = match map.remove("results") {
            Some(JsonValue::Array(records)) => records,
            Some(other) => {
                return Err(Error::decode(format!(
                    "Field 'results' must be an array, got {other}"
                )))
            }
            None => return Err(Error::decode("Page is missing the 'results' field")),
        };

        let next = match map.remove("next") {
            Some(JsonValue::Null) => None,
            Some(JsonValue::String(url)) if url.is_empty() => None,
            Some(JsonValue::String(url)) => Some(url),
            Some(other) => {
                return Err(Error::decode(format!(
                    "Field 'next' must be a string or null, got {other}"
                )))
            }
            None => return Err(Error::decode("Page is missing the 'next' field")),
        };

        Ok(Self { results, next })
    }

    /// Whether this is the final page
    pub fn is_last(&self) -> bool {
        self.next.is_none()
    }
}

/// Where a paginated collection stands.
///
/// `Fetching` loops onto itself while pages carry a `next` link and moves to
/// `Exhausted` on the first page without one. Failures leave the loop via
/// `Err` and discard everything collected so far.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageState {
    /// The next request to issue
    Fetching {
        /// URL to request
        url: String,
        /// Query parameters; only the first request carries any
        params: QueryParams,
    },
    /// The server signalled the end of the collection
    Exhausted,
}

impl PageState {
    /// Initial state for a query
    pub fn start(url: impl Into<String>, params: QueryParams) -> Self {
        Self::Fetching {
            url: url.into(),
            params,
        }
    }

    /// Transition after a page has been fetched
    #[must_use]
    pub fn advance(self, next: Option<String>) -> Self {
        match (self, next) {
            (Self::Fetching { .. }, Some(url)) => Self::Fetching {
                url,
                params: QueryParams::new(),
            },
            _ => Self::Exhausted,
        }
    }

    /// Check if the collection has been fully read
    pub fn is_exhausted(&self) -> bool {
        matches!(self, Self::Exhausted)
    }
}

/// Counters for a finished collection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaginationStats {
    /// Pages fetched
    pub pages: u32,
    /// Records accumulated
    pub records: u64,
}

impl PaginationStats {
    /// Record a fetched page
    pub fn add_page(&mut self, records: usize) {
        self.pages += 1;
        self.records += records as u64;
    }
}
