use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

/// One row of the source dataset, exactly as read. Untrusted input: no
/// invariants hold at this stage.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRecord {
    pub dt: String,

    #[serde(rename = "AverageTemperature")]
    pub average_temperature: String,

    #[serde(rename = "AverageTemperatureUncertainty")]
    pub average_temperature_uncertainty: String,

    #[serde(rename = "City")]
    pub city: String,

    #[serde(rename = "Country")]
    pub country: String,

    #[serde(rename = "Latitude")]
    pub latitude: String,

    #[serde(rename = "Longitude")]
    pub longitude: String,
}

/// A row after lenient coercion: unparseable dates and temperatures have
/// become absent, coordinates are signed decimal degrees or absent.
#[derive(Debug, Clone)]
pub struct CleanRecord {
    pub date: Option<NaiveDate>,
    pub average_temperature: Option<f64>,
    pub average_temperature_uncertainty: Option<f64>,
    pub city: String,
    pub country: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// A row that survived filtering: every required field is present and the
/// date lies inside the historical window. Uncertainty stays optional; the
/// source treats it as a nullable measurement.
#[derive(Debug, Clone, Validate)]
pub struct ValidRecord {
    pub date: NaiveDate,
    pub average_temperature: f64,
    pub average_temperature_uncertainty: Option<f64>,
    pub city: String,
    pub country: String,

    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,

    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
}
