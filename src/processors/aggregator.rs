use crate::error::{ProcessingError, Result};
use crate::models::{AggregatedRecord, ValidRecord};
use crate::processors::binning::TemporalBinner;
use chrono::NaiveDate;
use std::collections::HashMap;

/// Groups valid records by (period label, city, country) and reduces each
/// group to its arithmetic means.
///
/// Temperature means are rounded to one decimal, ties to even. Output is
/// sorted by period start, then city, then country; consumers iterating the
/// sequence observe monotonically increasing time regardless of input order.
pub struct Aggregator;

impl Aggregator {
    pub fn new() -> Self {
        Self
    }

    pub fn aggregate(
        &self,
        binner: &TemporalBinner,
        records: &[ValidRecord],
    ) -> Result<Vec<AggregatedRecord>> {
        let mut groups: HashMap<(String, String, String), GroupAccumulator> = HashMap::new();

        for record in records {
            let period = binner.bin(record.date);
            groups
                .entry((period.label, record.city.clone(), record.country.clone()))
                .or_insert_with(|| GroupAccumulator::new(period.start))
                .add(record);
        }

        if groups.is_empty() {
            return Err(ProcessingError::EmptyAggregate);
        }

        let mut aggregated: Vec<AggregatedRecord> = groups
            .into_iter()
            .map(|((label, city, country), acc)| acc.into_record(label, city, country))
            .collect();

        aggregated.sort_by(|a, b| {
            a.period_start
                .cmp(&b.period_start)
                .then_with(|| a.city.cmp(&b.city))
                .then_with(|| a.country.cmp(&b.country))
        });

        Ok(aggregated)
    }
}

impl Default for Aggregator {
    fn default() -> Self {
        Self::new()
    }
}

struct GroupAccumulator {
    period_start: NaiveDate,
    temperature_sum: f64,
    uncertainty_sum: f64,
    uncertainty_count: usize,
    latitude_sum: f64,
    longitude_sum: f64,
    count: usize,
}

impl GroupAccumulator {
    fn new(period_start: NaiveDate) -> Self {
        Self {
            period_start,
            temperature_sum: 0.0,
            uncertainty_sum: 0.0,
            uncertainty_count: 0,
            latitude_sum: 0.0,
            longitude_sum: 0.0,
            count: 0,
        }
    }

    fn add(&mut self, record: &ValidRecord) {
        self.temperature_sum += record.average_temperature;
        self.latitude_sum += record.latitude;
        self.longitude_sum += record.longitude;
        self.count += 1;

        // Uncertainty mean skips absent values
        if let Some(uncertainty) = record.average_temperature_uncertainty {
            self.uncertainty_sum += uncertainty;
            self.uncertainty_count += 1;
        }
    }

    fn into_record(self, period_label: String, city: String, country: String) -> AggregatedRecord {
        let n = self.count as f64;

        let uncertainty = if self.uncertainty_count > 0 {
            Some(round_to_tenth(
                self.uncertainty_sum / self.uncertainty_count as f64,
            ))
        } else {
            None
        };

        AggregatedRecord {
            period_start: self.period_start,
            period_label,
            city,
            country,
            average_temperature: round_to_tenth(self.temperature_sum / n),
            average_temperature_uncertainty: uncertainty,
            latitude: self.latitude_sum / n,
            longitude: self.longitude_sum / n,
        }
    }
}

/// Round to one decimal place, ties to even.
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round_ties_even() / 10.0
}
