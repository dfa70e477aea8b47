//! Accessor argument mapping

use super::catalog::Resource;
use super::timestamp::{iso_date, IsoDateTime};
use crate::error::{Error, Result};
use crate::types::QueryParams;
use chrono::NaiveDate;

/// Which systems to list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SystemFilter {
    /// Every system
    #[default]
    All,
    /// A single system by ID
    Id(String),
    /// Systems whose ID, canonical name or group name match the term
    Search(String),
}

impl SystemFilter {
    /// Build a filter from optional arguments; setting both is an error.
    /// Empty strings count as absent.
    pub fn from_options(system_id: Option<String>, search: Option<String>) -> Result<Self> {
        let system_id = system_id.filter(|id| !id.is_empty());
        let search = search.filter(|term| !term.is_empty());

        match (system_id, search) {
            (Some(_), Some(_)) => Err(Error::config(
                "system_id and search are mutually exclusive",
            )),
            (Some(id), None) => Ok(Self::Id(id)),
            (None, Some(term)) => Ok(Self::Search(term)),
            (None, None) => Ok(Self::All),
        }
    }
}

/// A resource together with the query parameters of the first request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceQuery {
    /// Collection to read
    pub resource: Resource,
    /// Query parameters; unset filters are absent
    pub params: QueryParams,
}

impl ResourceQuery {
    /// Query a resource without filters
    pub fn new(resource: Resource) -> Self {
        Self {
            resource,
            params: QueryParams::new(),
        }
    }

    /// Add a parameter
    #[must_use]
    pub fn param(mut self, key: &str, value: impl ToString) -> Self {
        self.params.insert(key.to_string(), value.to_string());
        self
    }

    /// Add a parameter only when `value` is set
    #[must_use]
    pub fn param_opt(self, key: &str, value: Option<impl ToString>) -> Self {
        match value {
            Some(value) => self.param(key, value),
            None => self,
        }
    }

    /// Path of the resource
    pub fn path(&self) -> &'static str {
        self.resource.path()
    }

    // ------------------------------------------------------------------------
    // Catalog
    // ------------------------------------------------------------------------

    pub fn locations() -> Self {
        Self::new(Resource::Locations)
    }

    pub fn systems(filter: SystemFilter) -> Self {
        let query = Self::new(Resource::Systems);
        match filter {
            SystemFilter::All => query,
            SystemFilter::Id(id) => query.param("system_id", id),
            SystemFilter::Search(term) => query.param("search", term),
        }
    }

    /// Daily gross generation for one system, both dates inclusive
    pub fn gross_kwh_daily(system_id: &str, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self::new(Resource::GrossKwhDaily)
            .param("system_id", system_id)
            .param("ts__gte", iso_date(start_date))
            .param("ts__lte", iso_date(end_date))
    }

    pub fn irradiation_sources() -> Self {
        Self::new(Resource::IrradiationSources)
    }

    pub fn pvout_sources() -> Self {
        Self::new(Resource::PvoutSources)
    }

    pub fn wind_sources() -> Self {
        Self::new(Resource::WindSources)
    }

    pub fn temperature_sources() -> Self {
        Self::new(Resource::TemperatureSources)
    }

    pub fn irradiation_daily(source: &str, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self::daily(Resource::IrradiationDaily, source, start_date, end_date)
    }

    pub fn irradiation_hourly(
        source: &str,
        start: impl IsoDateTime,
        end: impl IsoDateTime,
    ) -> Self {
        Self::hourly(Resource::IrradiationHourly, source, &start, &end)
    }

    pub fn utility_footprint() -> Self {
        Self::new(Resource::UtilityFootprint)
    }

    /// Revenue statements, optionally limited to one billing year and/or month
    pub fn utility_revenues(
        system_id: &str,
        period_year: Option<i32>,
        period_month: Option<u32>,
    ) -> Self {
        Self::statements(Resource::UtilityRevenues, system_id, period_year, period_month)
    }

    /// Expense statements, optionally limited to one billing year and/or month
    pub fn utility_expenses(
        system_id: &str,
        period_year: Option<i32>,
        period_month: Option<u32>,
    ) -> Self {
        Self::statements(Resource::UtilityExpenses, system_id, period_year, period_month)
    }

    pub fn pvout_daily(source: &str, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self::daily(Resource::PvoutDaily, source, start_date, end_date)
    }

    pub fn pvout_hourly(source: &str, start: impl IsoDateTime, end: impl IsoDateTime) -> Self {
        Self::hourly(Resource::PvoutHourly, source, &start, &end)
    }

    pub fn wind_hourly(source: &str, start: impl IsoDateTime, end: impl IsoDateTime) -> Self {
        Self::hourly(Resource::WindHourly, source, &start, &end)
    }

    pub fn temperature_hourly(
        source: &str,
        start: impl IsoDateTime,
        end: impl IsoDateTime,
    ) -> Self {
        Self::hourly(Resource::TemperatureHourly, source, &start, &end)
    }

    fn daily(resource: Resource, source: &str, start: NaiveDate, end: NaiveDate) -> Self {
        Self::new(resource)
            .param("source", source)
            .param("ts__gte", iso_date(start))
            .param("ts__lte", iso_date(end))
    }

    fn hourly(
        resource: Resource,
        source: &str,
        start: &dyn IsoDateTime,
        end: &dyn IsoDateTime,
    ) -> Self {
        Self::new(resource)
            .param("source", source)
            .param("ts__gte", start.iso_datetime())
            .param("ts__lte", end.iso_datetime())
    }

    fn statements(
        resource: Resource,
        system_id: &str,
        period_year: Option<i32>,
        period_month: Option<u32>,
    ) -> Self {
        Self::new(resource)
            .param("system_id", system_id)
            .param_opt("period_year", period_year)
            .param_opt("period_month", period_month)
    }
}
