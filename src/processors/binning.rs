use chrono::{Datelike, NaiveDate};
use clap::ValueEnum;
use serde::Serialize;

/// Temporal bucket width for aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
pub enum Granularity {
    Yearly,
    Monthly,
}

impl Granularity {
    pub fn label(&self) -> &'static str {
        match self {
            Granularity::Yearly => "Yearly",
            Granularity::Monthly => "Monthly",
        }
    }
}

/// A temporal bucket: its first day and its display label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Period {
    pub start: NaiveDate,
    pub label: String,
}

/// Maps each timestamp to its coarser period. Pure function of the date and
/// the configured granularity; no cross-row state.
pub struct TemporalBinner {
    granularity: Granularity,
}

impl TemporalBinner {
    pub fn new(granularity: Granularity) -> Self {
        Self { granularity }
    }

    pub fn bin(&self, date: NaiveDate) -> Period {
        match self.granularity {
            Granularity::Yearly => Period {
                start: NaiveDate::from_ymd_opt(date.year(), 1, 1)
                    .expect("first day of year is a valid date"),
                label: date.year().to_string(),
            },
            Granularity::Monthly => Period {
                start: NaiveDate::from_ymd_opt(date.year(), date.month(), 1)
                    .expect("first day of month is a valid date"),
                label: format!("{:04}-{:02}", date.year(), date.month()),
            },
        }
    }
}
