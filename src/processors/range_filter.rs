use crate::error::{ProcessingError, Result};
use crate::models::{CleanRecord, ValidRecord};
use crate::utils::constants::{CLAMP_END, CLAMP_START};
use chrono::NaiveDate;
use tracing::debug;
use validator::Validate;

/// Retains only rows eligible to become ValidRecords.
///
/// A row is dropped when any required field is absent, when its coordinates
/// fall outside the valid degree ranges, or when its date lies outside the
/// fixed historical window. The window is pipeline policy, not user input.
pub struct RangeFilter {
    start: NaiveDate,
    end: NaiveDate,
}

impl RangeFilter {
    pub fn new() -> Self {
        Self {
            start: CLAMP_START,
            end: CLAMP_END,
        }
    }

    pub fn filter(&self, records: Vec<CleanRecord>) -> Result<Vec<ValidRecord>> {
        let total = records.len();

        let valid: Vec<ValidRecord> = records
            .into_iter()
            .filter_map(|record| self.to_valid(record))
            .collect();

        debug!(kept = valid.len(), dropped = total - valid.len(), "range filter");

        if valid.is_empty() {
            return Err(ProcessingError::EmptyDataset);
        }

        Ok(valid)
    }

    fn to_valid(&self, record: CleanRecord) -> Option<ValidRecord> {
        let date = record.date?;
        let average_temperature = record.average_temperature?;
        let latitude = record.latitude?;
        let longitude = record.longitude?;

        if record.city.is_empty() || record.country.is_empty() {
            return None;
        }

        if date < self.start || date > self.end {
            return None;
        }

        let valid = ValidRecord {
            date,
            average_temperature,
            average_temperature_uncertainty: record.average_temperature_uncertainty,
            city: record.city,
            country: record.country,
            latitude,
            longitude,
        };

        valid.validate().ok()?;

        Some(valid)
    }
}

impl Default for RangeFilter {
    fn default() -> Self {
        Self::new()
    }
}
