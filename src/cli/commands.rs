//! CLI commands and argument parsing

use crate::config::Settings;
use crate::error::Result;
use crate::resources::{ResourceQuery, SystemFilter};
use crate::types::OutputFormat;
use chrono::{NaiveDate, NaiveDateTime};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// pgdata energy-data client
#[derive(Parser, Debug)]
#[command(name = "pgdata")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Settings file (YAML)
    #[arg(short, long, global = true, env = "PGDATA_CONFIG")]
    pub config: Option<PathBuf>,

    /// Service URL including scheme, e.g. https://pgdata.example
    #[arg(long, global = true, env = "PGDATA_HOST")]
    pub host: Option<String>,

    /// Service port [default: 443]
    #[arg(long, global = true, env = "PGDATA_PORT")]
    pub port: Option<u16>,

    /// Pre-issued API token
    #[arg(long, global = true, env = "PGDATA_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Username for the login exchange
    #[arg(long, global = true, env = "PGDATA_USERNAME")]
    pub username: Option<String>,

    /// Password for the login exchange
    #[arg(long, global = true, env = "PGDATA_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Connection settings given on the command line
    pub fn settings_overrides(&self) -> Settings {
        Settings {
            host: self.host.clone(),
            port: self.port,
            token: self.token.clone(),
            username: self.username.clone(),
            password: self.password.clone(),
            ..Settings::default()
        }
    }
}

/// Source and inclusive date range
#[derive(Args, Debug, Clone)]
pub struct DateRange {
    /// Data source key
    #[arg(long)]
    pub source: String,
    /// First day (YYYY-MM-DD)
    #[arg(long)]
    pub start: NaiveDate,
    /// Last day (YYYY-MM-DD)
    #[arg(long)]
    pub end: NaiveDate,
}

/// Source and inclusive date-time range
#[derive(Args, Debug, Clone)]
pub struct TimeRange {
    /// Data source key
    #[arg(long)]
    pub source: String,
    /// First hour (YYYY-MM-DDTHH:MM:SS)
    #[arg(long)]
    pub start: NaiveDateTime,
    /// Last hour (YYYY-MM-DDTHH:MM:SS)
    #[arg(long)]
    pub end: NaiveDateTime,
}

/// System and optional billing period
#[derive(Args, Debug, Clone)]
pub struct StatementArgs {
    /// System ID
    #[arg(long)]
    pub system_id: String,
    /// Billing period year
    #[arg(long)]
    pub period_year: Option<i32>,
    /// Billing period month (1-12)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
    pub period_month: Option<u32>,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List locations
    Locations,

    /// List PV systems
    Systems {
        /// Only this system
        #[arg(long)]
        system_id: Option<String>,
        /// Filter by system ID, canonical name or group name
        #[arg(long)]
        search: Option<String>,
    },

    /// Daily gross generation (kWh) of one system
    GrossKwhDaily {
        /// System ID
        #[arg(long)]
        system_id: String,
        /// First day (YYYY-MM-DD)
        #[arg(long)]
        start: NaiveDate,
        /// Last day (YYYY-MM-DD)
        #[arg(long)]
        end: NaiveDate,
    },

    /// List irradiation data sources
    IrradiationSources,

    /// List generation forecast sources
    PvoutSources,

    /// List wind data sources
    WindSources,

    /// List temperature data sources
    TemperatureSources,

    /// Daily irradiation (kWh/m²)
    IrradiationDaily(DateRange),

    /// Hourly irradiation (kWh/m²)
    IrradiationHourly(TimeRange),

    /// List utility regions
    UtilityFootprint,

    /// Utility revenue statements
    UtilityRevenue(StatementArgs),

    /// Utility expense statements
    UtilityExpense(StatementArgs),

    /// Daily generation forecasts (kWh)
    PvoutDaily(DateRange),

    /// Hourly generation forecasts (kWh)
    PvoutHourly(TimeRange),

    /// Hourly wind measurements
    WindHourly(TimeRange),

    /// Hourly temperature (°C)
    TemperatureHourly(TimeRange),
}

impl Commands {
    /// The catalog query this command runs
    pub fn to_query(&self) -> Result<ResourceQuery> {
        let query = match self {
            Commands::Locations => ResourceQuery::locations(),
            Commands::Systems { system_id, search } => ResourceQuery::systems(
                SystemFilter::from_options(system_id.clone(), search.clone())?,
            ),
            Commands::GrossKwhDaily {
                system_id,
                start,
                end,
            } => ResourceQuery::gross_kwh_daily(system_id, *start, *end),
            Commands::IrradiationSources => ResourceQuery::irradiation_sources(),
            Commands::PvoutSources => ResourceQuery::pvout_sources(),
            Commands::WindSources => ResourceQuery::wind_sources(),
            Commands::TemperatureSources => ResourceQuery::temperature_sources(),
            Commands::IrradiationDaily(r) => {
                ResourceQuery::irradiation_daily(&r.source, r.start, r.end)
            }
            Commands::IrradiationHourly(r) => {
                ResourceQuery::irradiation_hourly(&r.source, r.start, r.end)
            }
            Commands::UtilityFootprint => ResourceQuery::utility_footprint(),
            Commands::UtilityRevenue(s) => {
                ResourceQuery::utility_revenues(&s.system_id, s.period_year, s.period_month)
            }
            Commands::UtilityExpense(s) => {
                ResourceQuery::utility_expenses(&s.system_id, s.period_year, s.period_month)
            }
            Commands::PvoutDaily(r) => ResourceQuery::pvout_daily(&r.source, r.start, r.end),
            Commands::PvoutHourly(r) => ResourceQuery::pvout_hourly(&r.source, r.start, r.end),
            Commands::WindHourly(r) => ResourceQuery::wind_hourly(&r.source, r.start, r.end),
            Commands::TemperatureHourly(r) => {
                ResourceQuery::temperature_hourly(&r.source, r.start, r.end)
            }
        };
        Ok(query)
    }
}
