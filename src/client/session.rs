//! Client session and resource accessors

use super::types::ClientConfig;
use crate::error::Result;
use crate::http::HttpClient;
use crate::pagination::Paginator;
use crate::resources::{IsoDateTime, ResourceQuery, SystemFilter};
use crate::types::Record;
use chrono::NaiveDate;
use std::time::Duration;
use tracing::{debug, trace};

/// Client for the pgdata service
#[derive(Debug)]
pub struct PgDataClient {
    http: HttpClient,
    config: ClientConfig,
}

impl PgDataClient {
    /// Create a client. No network traffic happens until a session is opened.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http = HttpClient::with_auth(config.http_config(), config.credentials().clone())?;
        Ok(Self { http, config })
    }

    /// Open a session, resolving the API token first.
    ///
    /// With username/password credentials the first call logs in; the token
    /// is reused by every later session of this client.
    pub async fn session(&self) -> Result<Session<'_>> {
        if let Some(auth) = self.http.authenticator() {
            auth.token().await?;
        }
        debug!(base_url = self.config.base_url(), "Session opened");
        Ok(Session {
            client: self,
            timeout: None,
        })
    }

    /// Get the client configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Get the underlying HTTP client
    pub fn http(&self) -> &HttpClient {
        &self.http
    }
}

/// An authenticated view of a [`PgDataClient`].
///
/// Every accessor fetches all pages of its collection before returning.
#[derive(Debug)]
pub struct Session<'a> {
    client: &'a PgDataClient,
    timeout: Option<Duration>,
}

impl Session<'_> {
    /// Use `timeout` for every request made through this session
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Run any catalog query
    pub async fn fetch(&self, query: ResourceQuery) -> Result<Vec<Record>> {
        let mut paginator = Paginator::new(&self.client.http);
        if let Some(timeout) = self.timeout {
            paginator = paginator.with_timeout(timeout);
        }
        paginator.collect(query.path(), query.params).await
    }

    /// All locations
    pub async fn get_locations(&self) -> Result<Vec<Record>> {
        self.fetch(ResourceQuery::locations()).await
    }

    /// System details, optionally for one system ID or matching a search term.
    ///
    /// Supplying both `system_id` and `search` is a configuration error and
    /// no request is made.
    pub async fn get_systems(
        &self,
        system_id: Option<&str>,
        search: Option<&str>,
    ) -> Result<Vec<Record>> {
        let filter =
            SystemFilter::from_options(system_id.map(String::from), search.map(String::from))?;
        self.get_systems_filtered(filter).await
    }

    /// System details for a prepared filter
    pub async fn get_systems_filtered(&self, filter: SystemFilter) -> Result<Vec<Record>> {
        self.fetch(ResourceQuery::systems(filter)).await
    }

    /// Daily gross generation in kWh, both dates inclusive
    pub async fn get_gross_daily_kwh(
        &self,
        system_id: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<Record>> {
        self.fetch(ResourceQuery::gross_kwh_daily(system_id, start_date, end_date))
            .await
    }

    pub async fn get_irradiation_sources(&self) -> Result<Vec<Record>> {
        self.fetch(ResourceQuery::irradiation_sources()).await
    }

    pub async fn get_pvout_sources(&self) -> Result<Vec<Record>> {
        self.fetch(ResourceQuery::pvout_sources()).await
    }

    pub async fn get_wind_sources(&self) -> Result<Vec<Record>> {
        self.fetch(ResourceQuery::wind_sources()).await
    }

    pub async fn get_temperature_sources(&self) -> Result<Vec<Record>> {
        self.fetch(ResourceQuery::temperature_sources()).await
    }

    /// Daily irradiation in kWh/m² with long-term averages
    pub async fn get_irradiation_daily(
        &self,
        source: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<Record>> {
        self.fetch(ResourceQuery::irradiation_daily(source, start_date, end_date))
            .await
    }

    /// Hourly irradiation in kWh/m² with long-term averages
    pub async fn get_irradiation_hourly(
        &self,
        source: &str,
        start: impl IsoDateTime,
        end: impl IsoDateTime,
    ) -> Result<Vec<Record>> {
        self.fetch(ResourceQuery::irradiation_hourly(source, start, end))
            .await
    }

    pub async fn get_utility_footprint(&self) -> Result<Vec<Record>> {
        self.fetch(ResourceQuery::utility_footprint()).await
    }

    /// Revenue statements (energy bought from the plant by the utility)
    pub async fn get_util_revenues(
        &self,
        system_id: &str,
        period_year: Option<i32>,
        period_month: Option<u32>,
    ) -> Result<Vec<Record>> {
        self.fetch(ResourceQuery::utility_revenues(
            system_id,
            period_year,
            period_month,
        ))
        .await
    }

    /// Expense statements (energy bought from the utility by the plant)
    pub async fn get_util_expenses(
        &self,
        system_id: &str,
        period_year: Option<i32>,
        period_month: Option<u32>,
    ) -> Result<Vec<Record>> {
        self.fetch(ResourceQuery::utility_expenses(
            system_id,
            period_year,
            period_month,
        ))
        .await
    }

    /// Daily generation forecasts in kWh
    pub async fn get_pvout_daily(
        &self,
        source: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<Record>> {
        self.fetch(ResourceQuery::pvout_daily(source, start_date, end_date))
            .await
    }

    /// Hourly generation forecasts in kWh
    pub async fn get_pvout_hourly(
        &self,
        source: &str,
        start: impl IsoDateTime,
        end: impl IsoDateTime,
    ) -> Result<Vec<Record>> {
        self.fetch(ResourceQuery::pvout_hourly(source, start, end))
            .await
    }

    /// Hourly wind speed and direction
    pub async fn get_wind_hourly(
        &self,
        source: &str,
        start: impl IsoDateTime,
        end: impl IsoDateTime,
    ) -> Result<Vec<Record>> {
        self.fetch(ResourceQuery::wind_hourly(source, start, end))
            .await
    }

    /// Hourly temperature in degrees Celsius
    pub async fn get_temperature_hourly(
        &self,
        source: &str,
        start: impl IsoDateTime,
        end: impl IsoDateTime,
    ) -> Result<Vec<Record>> {
        self.fetch(ResourceQuery::temperature_hourly(source, start, end))
            .await
    }
}

impl Drop for Session<'_> {
    fn drop(&mut self) {
        trace!("Session closed");
    }
}
