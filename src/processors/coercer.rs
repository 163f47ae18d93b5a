use crate::error::Result;
use crate::models::{CleanRecord, RawRecord};
use crate::utils::constants::DATE_FORMAT;
use crate::utils::coordinates::parse_coordinate;
use chrono::NaiveDate;
use rayon::prelude::*;

/// Converts raw textual fields into typed values.
///
/// Dates and temperatures coerce leniently: a value that does not parse
/// becomes absent, because the dataset carries sparse historical gaps.
/// Coordinates go through the hemisphere-aware normalizer, whose failures
/// are fatal.
pub struct FieldCoercer;

impl FieldCoercer {
    pub fn new() -> Self {
        Self
    }

    /// Coerce all rows. Row order is preserved; rows are independent, so the
    /// work is spread across the current rayon pool.
    pub fn coerce_all(&self, records: Vec<RawRecord>) -> Result<Vec<CleanRecord>> {
        records
            .into_par_iter()
            .map(|record| self.coerce(record))
            .collect()
    }

    pub fn coerce(&self, record: RawRecord) -> Result<CleanRecord> {
        Ok(CleanRecord {
            date: parse_date(&record.dt),
            average_temperature: parse_temperature(&record.average_temperature),
            average_temperature_uncertainty: parse_temperature(
                &record.average_temperature_uncertainty,
            ),
            latitude: parse_coordinate(&record.latitude)?,
            longitude: parse_coordinate(&record.longitude)?,
            city: record.city.trim().to_string(),
            country: record.country.trim().to_string(),
        })
    }
}

impl Default for FieldCoercer {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).ok()
}

/// Lenient float parse. Non-finite parses (a textual "NaN" or "inf") count
/// as absent; they would otherwise poison every mean they touch.
fn parse_temperature(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}
