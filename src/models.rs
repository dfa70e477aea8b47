//! Typed record models
//!
//! Accessors return untyped [`Record`]s. When the caller wants structs,
//! [`decode_records`] converts a result set into any of the models below.

use crate::error::{Error, Result};
use crate::types::Record;
use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Convert a result set into typed records
pub fn decode_records<T: DeserializeOwned>(records: Vec<Record>) -> Result<Vec<T>> {
    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            serde_json::from_value(record)
                .map_err(|e| Error::decode(format!("Record {index}: {e}")))
        })
        .collect()
}

// ============================================================================
// Sites and systems
// ============================================================================

/// `/api/locations`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: String,
    #[serde(default)]
    pub prefecture: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub altitude: Option<f64>,
}

/// `/api/systems`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct System {
    pub system_id: String,
    #[serde(default)]
    pub canonical_name: Option<String>,
    #[serde(default)]
    pub capacity_dc: Option<f64>,
    #[serde(default)]
    pub capacity_ac: Option<f64>,
    /// Interconnection date
    #[serde(default)]
    pub interconnection: Option<NaiveDate>,
    #[serde(default)]
    pub group_name: Option<String>,
    /// Location ID
    #[serde(default)]
    pub location: Option<String>,
    /// Utility footprint name
    #[serde(default)]
    pub utility: Option<String>,
}

/// `/api/gross-kwh-daily`: generation measured at the inverter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrossDailyKwh {
    pub system_id: String,
    pub ts: NaiveDate,
    pub value: f64,
}

/// `/api/utility-footprint`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UtilityFootprint {
    pub name: String,
}

/// `/api/utility-revenue` and `/api/utility-expense`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UtilityStatement {
    pub system_id: String,
    #[serde(default)]
    pub contract_id: Option<String>,
    pub amt_kwh: f64,
    pub amt_jpy: f64,
    #[serde(default)]
    pub tax_jpy: Option<f64>,
    #[serde(default)]
    pub period_start_date: Option<i64>,
    #[serde(default)]
    pub period_end_date: Option<i64>,
    pub period_year: i32,
    pub period_month: u32,
    #[serde(default)]
    pub memo: Option<String>,
}

// ============================================================================
// Data sources
// ============================================================================

/// `/api/irradiation-source`, `/api/wind-source`, `/api/temperature-source`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasurementSource {
    pub key: String,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub altitude: Option<f64>,
    #[serde(default)]
    pub description: Option<String>,
}

pub type IrradiationSource = MeasurementSource;
pub type WindSource = MeasurementSource;
pub type TemperatureSource = MeasurementSource;

/// `/api/pvout-source`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PvoutSource {
    pub key: String,
    #[serde(default)]
    pub description: Option<String>,
}

// ============================================================================
// Time series
// ============================================================================

/// `/api/irradiation-daily` and `/api/irradiation-hourly`, in kWh/m².
///
/// `ts` is a date for daily and a date-time for hourly series, so it is kept
/// as text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IrradiationReading {
    pub source: String,
    pub ts: String,
    pub value: f64,
    /// Long-term average for the same calendar position
    #[serde(default)]
    pub lta: Option<f64>,
}

/// `/api/pvout-daily` and `/api/pvout-hourly`, in kWh
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PvoutForecast {
    pub source: String,
    pub ts: String,
    pub value: f64,
    #[serde(default)]
    pub memo: Option<String>,
}

/// `/api/wind-hourly`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindReading {
    pub source: String,
    pub ts: String,
    pub wind_speed: f64,
    pub wind_direction: f64,
    #[serde(default)]
    pub memo: Option<String>,
}

/// `/api/temperature-hourly`, in °C
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemperatureReading {
    pub source: String,
    pub ts: String,
    pub value: f64,
    #[serde(default)]
    pub memo: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use serde_json::json;

    #[test]
    fn test_decode_systems() {
        let records = vec![json!({
            "system_id": "S-1",
            "canonical_name": "Osaka Bay 1",
            "capacity_dc": 1250.0,
            "capacity_ac": 990.0,
            "interconnection": "2019-04-01",
            "group_name": "Kansai",
            "location": "LOC-7",
            "utility": "KEPCO"
        })];

        let systems: Vec<System> = decode_records(records).unwrap();
        assert_eq!(systems[0].system_id, "S-1");
        assert_eq!(
            systems[0].interconnection,
            NaiveDate::from_ymd_opt(2019, 4, 1)
        );
    }

    #[test]
    fn test_decode_statement_with_missing_optionals() {
        let records = vec![json!({
            "system_id": "S-1",
            "amt_kwh": 10500.0,
            "amt_jpy": 378000.0,
            "period_year": 2023,
            "period_month": 4
        })];

        let statements: Vec<UtilityStatement> = decode_records(records).unwrap();
        assert_eq!(statements[0].period_month, 4);
        assert!(statements[0].memo.is_none());
    }

    #[test]
    fn test_decode_reports_record_index() {
        let records = vec![
            json!({"name": "TEPCO"}),
            json!({"label": "missing name"}),
        ];

        let err = decode_records::<UtilityFootprint>(records).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Decode);
        assert!(err.to_string().contains("Record 1"));
    }
}
