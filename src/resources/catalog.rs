//! Resource paths

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// A collection exposed by the service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Locations,
    Systems,
    GrossKwhDaily,
    IrradiationSources,
    PvoutSources,
    WindSources,
    TemperatureSources,
    IrradiationDaily,
    IrradiationHourly,
    UtilityFootprint,
    UtilityRevenues,
    UtilityExpenses,
    PvoutDaily,
    PvoutHourly,
    WindHourly,
    TemperatureHourly,
}

impl Resource {
    /// Every resource, in catalog order
    pub const ALL: [Resource; 16] = [
        Resource::Locations,
        Resource::Systems,
        Resource::GrossKwhDaily,
        Resource::IrradiationSources,
        Resource::PvoutSources,
        Resource::WindSources,
        Resource::TemperatureSources,
        Resource::IrradiationDaily,
        Resource::IrradiationHourly,
        Resource::UtilityFootprint,
        Resource::UtilityRevenues,
        Resource::UtilityExpenses,
        Resource::PvoutDaily,
        Resource::PvoutHourly,
        Resource::WindHourly,
        Resource::TemperatureHourly,
    ];

    /// Path relative to the service root
    pub fn path(self) -> &'static str {
        match self {
            Resource::Locations => "/api/locations",
            Resource::Systems => "/api/systems",
            Resource::GrossKwhDaily => "/api/gross-kwh-daily",
            Resource::IrradiationSources => "/api/irradiation-source",
            Resource::PvoutSources => "/api/pvout-source",
            Resource::WindSources => "/api/wind-source",
            Resource::TemperatureSources => "/api/temperature-source",
            Resource::IrradiationDaily => "/api/irradiation-daily",
            Resource::IrradiationHourly => "/api/irradiation-hourly",
            Resource::UtilityFootprint => "/api/utility-footprint",
            Resource::UtilityRevenues => "/api/utility-revenue",
            Resource::UtilityExpenses => "/api/utility-expense",
            Resource::PvoutDaily => "/api/pvout-daily",
            Resource::PvoutHourly => "/api/pvout-hourly",
            Resource::WindHourly => "/api/wind-hourly",
            Resource::TemperatureHourly => "/api/temperature-hourly",
        }
    }

    /// Short name, the last path segment
    pub fn name(self) -> &'static str {
        self.path().trim_start_matches("/api/")
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Resource {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Resource::ALL
            .into_iter()
            .find(|r| r.name() == s)
            .ok_or_else(|| Error::config(format!("Unknown resource: {s}")))
    }
}
