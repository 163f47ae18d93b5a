use chrono::NaiveDate;
use serde::Serialize;

/// The mean observation for one (period, city, country) group. Serialized
/// field names follow the source dataset so the rendering consumer sees a
/// familiar schema; `period_start` is the internal ordering key.
#[derive(Debug, Clone, Serialize)]
pub struct AggregatedRecord {
    #[serde(skip)]
    pub period_start: NaiveDate,

    pub period_label: String,

    #[serde(rename = "City")]
    pub city: String,

    #[serde(rename = "Country")]
    pub country: String,

    #[serde(rename = "AverageTemperature")]
    pub average_temperature: f64,

    #[serde(rename = "AverageTemperatureUncertainty")]
    pub average_temperature_uncertainty: Option<f64>,

    #[serde(rename = "Latitude")]
    pub latitude: f64,

    #[serde(rename = "Longitude")]
    pub longitude: f64,
}

/// Global color range over the aggregated temperature column. Absent when
/// the consumer is expected to derive per-period ranges itself.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ColorRange {
    pub min: f64,
    pub max: f64,
}

impl ColorRange {
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}
