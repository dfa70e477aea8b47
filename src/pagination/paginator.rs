//! Next-link paginator

use super::types::{Page, PageState, PaginationStats};
use crate::error::{Error, Result};
use crate::http::{HttpClient, RequestConfig};
use crate::types::{QueryParams, Record};
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Drives the HTTP client across every page of a collection
#[derive(Debug, Clone, Copy)]
pub struct Paginator<'a> {
    client: &'a HttpClient,
    timeout: Option<Duration>,
}

impl<'a> Paginator<'a> {
    /// Create a paginator over `client`
    pub fn new(client: &'a HttpClient) -> Self {
        Self {
            client,
            timeout: None,
        }
    }

    /// Override the per-request timeout for every page
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Fetch every page starting at `url` and concatenate their results.
    ///
    /// Any failure aborts the whole collection; no partial results are
    /// returned.
    pub async fn collect(&self, url: &str, params: QueryParams) -> Result<Vec<Record>> {
        self.collect_with_stats(url, params)
            .await
            .map(|(records, _)| records)
    }

    /// Like [`Paginator::collect`], also returning page/record counters
    pub async fn collect_with_stats(
        &self,
        url: &str,
        params: QueryParams,
    ) -> Result<(Vec<Record>, PaginationStats)> {
        let mut records = Vec::new();
        let mut stats = PaginationStats::default();
        let mut state = PageState::start(url, params);

        while let PageState::Fetching { url, params } = &state {
            let mut config = RequestConfig::with_query(params.clone());
            if let Some(timeout) = self.timeout {
                config = config.timeout(timeout);
            }

            let body = self.client.get_json(url, config).await?;
            let page = Page::from_json(body)?;
            let next = page
                .next
                .as_deref()
                .map(|next| self.resolve_next(url, next))
                .transpose()?;

            stats.add_page(page.results.len());
            debug!(
                page = stats.pages,
                records = page.results.len(),
                has_next = next.is_some(),
                "Fetched page"
            );

            records.extend(page.results);
            state = state.advance(next);
        }

        debug!(
            pages = stats.pages,
            records = stats.records,
            "Collection exhausted"
        );
        Ok((records, stats))
    }

    /// Resolve a `next` link against the URL of the page that returned it
    fn resolve_next(&self, current: &str, next: &str) -> Result<String> {
        match Url::parse(next) {
            Ok(absolute) => Ok(absolute.into()),
            Err(url::ParseError::RelativeUrlWithoutBase) => {
                let base = Url::parse(&self.client.build_url(current)).map_err(|e| {
                    Error::decode(format!("Cannot resolve next link '{next}': {e}"))
                })?;
                base.join(next)
                    .map(String::from)
                    .map_err(|e| Error::decode(format!("Invalid next link '{next}': {e}")))
            }
            Err(e) => Err(Error::decode(format!("Invalid next link '{next}': {e}"))),
        }
    }
}
