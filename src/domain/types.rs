//! Shared domain types.
//!
//! `Query` is what a caller asks for, `Record` is one row of what the EIA
//! returns. Both are plain data: construction and validation live in
//! `crate::query`, response parsing lives in `crate::data::envelope`.

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Maximum page size accepted by the EIA v2 API.
pub const MAX_LIMIT: u32 = 5000;

/// Temporal granularity of the requested data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Monthly,
    #[default]
    Annual,
}

impl Frequency {
    pub fn as_str(self) -> &'static str {
        match self {
            Frequency::Monthly => "monthly",
            Frequency::Annual => "annual",
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Frequency {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "monthly" => Ok(Frequency::Monthly),
            "annual" => Ok(Frequency::Annual),
            other => Err(AppError::validation(format!(
                "frequency must be 'monthly' or 'annual', got '{other}'"
            ))),
        }
    }
}

/// Consumption process codes understood by the `process` facet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Process {
    #[serde(rename = "VCS")]
    Commercial,
    #[serde(rename = "VDV")]
    VehicleFuel,
    #[serde(rename = "VRS")]
    Residential,
    #[serde(rename = "VGT")]
    DeliveredToConsumers,
    #[serde(rename = "VEU")]
    ElectricPower,
    #[serde(rename = "VIN")]
    Industrial,
    #[serde(rename = "VGP")]
    PipelineFuel,
    #[serde(rename = "VGL")]
    LeaseAndPlantFuel,
}

impl Process {
    pub const ALL: [Process; 8] = [
        Process::Commercial,
        Process::VehicleFuel,
        Process::Residential,
        Process::DeliveredToConsumers,
        Process::ElectricPower,
        Process::Industrial,
        Process::PipelineFuel,
        Process::LeaseAndPlantFuel,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Process::Commercial => "VCS",
            Process::VehicleFuel => "VDV",
            Process::Residential => "VRS",
            Process::DeliveredToConsumers => "VGT",
            Process::ElectricPower => "VEU",
            Process::Industrial => "VIN",
            Process::PipelineFuel => "VGP",
            Process::LeaseAndPlantFuel => "VGL",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Process::Commercial => "Commercial Consumption",
            Process::VehicleFuel => "Vehicle Fuel Consumption",
            Process::Residential => "Residential Consumption",
            Process::DeliveredToConsumers => "Delivered to Consumers",
            Process::ElectricPower => "Electric Power Consumption",
            Process::Industrial => "Industrial Consumption",
            Process::PipelineFuel => "Pipeline Fuel Consumption",
            Process::LeaseAndPlantFuel => "Lease and Plant Fuel Consumption",
        }
    }
}

impl FromStr for Process {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_ascii_uppercase();
        Process::ALL
            .into_iter()
            .find(|p| p.code() == code)
            .ok_or_else(|| {
                let known: Vec<&str> = Process::ALL.iter().map(|p| p.code()).collect();
                AppError::validation(format!(
                    "unknown process '{}', expected one of {}",
                    s.trim(),
                    known.join(", ")
                ))
            })
    }
}

/// Field name to upstream wire name.
///
/// Order here is the order fields appear in a normalized request.
pub const FIELD_ALIASES: [(&str, &str); 8] = [
    ("frequency", "frequency"),
    ("start_date", "start"),
    ("end_date", "end"),
    ("filter_by_area", "duoarea"),
    ("filter_by_process", "process"),
    ("filter_by_series", "series"),
    ("limit", "length"),
    ("offset", "offset"),
];

/// Look up the wire name of a query field.
pub fn wire_name(field: &str) -> Option<&'static str> {
    FIELD_ALIASES
        .iter()
        .find(|(name, _)| *name == field)
        .map(|(_, alias)| *alias)
}

/// A validated natural-gas query.
///
/// Built by `Query::from_args`; immutable afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pub frequency: Frequency,
    /// `YYYY` or `YYYY-MM`.
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    /// Comma-separated area codes (e.g. `SCA,STX`).
    pub filter_by_area: Option<String>,
    pub filter_by_process: Option<Process>,
    /// Comma-separated series ids.
    pub filter_by_series: Option<String>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

impl Query {
    /// Serialize every set field under its wire name, in `FIELD_ALIASES` order.
    pub fn wire_fields(&self) -> Vec<(&'static str, String)> {
        FIELD_ALIASES
            .iter()
            .filter_map(|(name, alias)| self.field(name).map(|v| (*alias, v)))
            .collect()
    }

    fn field(&self, name: &str) -> Option<String> {
        match name {
            "frequency" => Some(self.frequency.to_string()),
            "start_date" => self.start_date.clone(),
            "end_date" => self.end_date.clone(),
            "filter_by_area" => self.filter_by_area.clone(),
            "filter_by_process" => self.filter_by_process.map(|p| p.code().to_string()),
            "filter_by_series" => self.filter_by_series.clone(),
            "limit" => self.limit.map(|v| v.to_string()),
            "offset" => self.offset.map(|v| v.to_string()),
            _ => None,
        }
    }
}

/// Numeric value or an upstream sentinel string.
///
/// The EIA quotes most numbers (`"1234.5"`); those are parsed. Anything that
/// is not a finite number (`"W"` for withheld, `"NA"`) is kept verbatim.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RecordValue {
    Number(f64),
    Text(String),
}

impl RecordValue {
    pub fn from_text(raw: String) -> Self {
        match raw.trim().parse::<f64>() {
            Ok(v) if v.is_finite() => RecordValue::Number(v),
            _ => RecordValue::Text(raw),
        }
    }
}

impl<'de> Deserialize<'de> for RecordValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(f64),
            Text(String),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Number(v) => RecordValue::Number(v),
            Raw::Text(s) => RecordValue::from_text(s),
        })
    }
}

impl fmt::Display for RecordValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordValue::Number(v) => write!(f, "{v}"),
            RecordValue::Text(s) => f.write_str(s),
        }
    }
}

/// One row of EIA natural-gas survey data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Always a string: `"2023-01"` for monthly rows, `"2023"` for annual ones.
    #[serde(deserialize_with = "period_as_string")]
    pub period: String,
    #[serde(rename(deserialize = "duoarea"), default)]
    pub area: String,
    #[serde(rename(deserialize = "area-name"), default)]
    pub area_name: String,
    #[serde(default)]
    pub product: String,
    #[serde(rename(deserialize = "product-name"), default)]
    pub product_name: String,
    #[serde(default)]
    pub process: String,
    #[serde(rename(deserialize = "process-name"), default)]
    pub process_name: String,
    #[serde(default)]
    pub series: String,
    #[serde(rename(deserialize = "series-description"), default)]
    pub series_description: String,
    #[serde(default)]
    pub value: Option<RecordValue>,
    #[serde(default)]
    pub units: String,
}

fn period_as_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(de::Error::custom(format!(
            "period must be a string or an integer, got {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn frequency_parses_case_insensitively() {
        assert_eq!("Monthly".parse::<Frequency>().unwrap(), Frequency::Monthly);
        assert_eq!(" annual ".parse::<Frequency>().unwrap(), Frequency::Annual);
        assert!("weekly".parse::<Frequency>().is_err());
        assert_eq!(Frequency::default(), Frequency::Annual);
    }

    #[test]
    fn process_codes_round_trip_through_from_str() {
        for p in Process::ALL {
            assert_eq!(p.code().parse::<Process>().unwrap(), p);
        }
        assert_eq!("vrs".parse::<Process>().unwrap(), Process::Residential);
        let err = "XYZ".parse::<Process>().unwrap_err();
        assert!(err.to_string().contains("VCS"));
    }

    #[test]
    fn wire_fields_skip_unset_and_use_aliases() {
        let q = Query {
            filter_by_area: Some("SCA".into()),
            limit: Some(10),
            ..Query::default()
        };
        assert_eq!(
            q.wire_fields(),
            vec![
                ("frequency", "annual".to_string()),
                ("duoarea", "SCA".to_string()),
                ("length", "10".to_string()),
            ]
        );
        assert_eq!(wire_name("filter_by_series"), Some("series"));
        assert_eq!(wire_name("api_key"), None);
    }

    #[test]
    fn record_period_is_stringified() {
        let rec: Record = serde_json::from_value(json!({
            "period": 2020,
            "duoarea": "NUS",
            "area-name": "U.S.",
            "value": 12.5,
            "units": "MMCF"
        }))
        .unwrap();
        assert_eq!(rec.period, "2020");
        assert_eq!(rec.area, "NUS");
        assert_eq!(rec.area_name, "U.S.");
        assert_eq!(rec.value, Some(RecordValue::Number(12.5)));
        assert_eq!(rec.product, "");
    }

    #[test]
    fn record_value_keeps_sentinels_and_parses_quoted_numbers() {
        let rec: Record = serde_json::from_value(json!({"period": "2023-01", "value": "W"})).unwrap();
        assert_eq!(rec.value, Some(RecordValue::Text("W".into())));

        let rec: Record = serde_json::from_value(json!({"period": "2023-01", "value": "1234.5"})).unwrap();
        assert_eq!(rec.value, Some(RecordValue::Number(1234.5)));

        let rec: Record = serde_json::from_value(json!({"period": "2023-01", "value": null})).unwrap();
        assert_eq!(rec.value, None);
    }

    #[test]
    fn record_requires_period() {
        let res: Result<Record, _> = serde_json::from_value(json!({"value": 1}));
        assert!(res.is_err());
    }

    #[test]
    fn record_serializes_snake_case() {
        let rec: Record = serde_json::from_value(json!({
            "period": "2021",
            "series-description": "Total consumption",
            "value": 3
        }))
        .unwrap();
        let out = serde_json::to_value(&rec).unwrap();
        assert_eq!(out["series_description"], "Total consumption");
        assert_eq!(out["value"], 3.0);
    }
}
