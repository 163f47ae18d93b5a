use std::collections::BTreeSet;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ProcessingError>;

#[derive(Error, Debug)]
pub enum ProcessingError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("No dataset found in '{dir}': expected at least one .csv file")]
    NoDatasetFound { dir: String },

    #[error("Missing columns in dataset: {0:?}")]
    MissingColumns(BTreeSet<String>),

    #[error("Invalid coordinate format: '{0}'")]
    InvalidCoordinate(String),

    #[error("No records remain within 1743-01-01..=2013-12-31")]
    EmptyDataset,

    #[error("Aggregation produced no groups")]
    EmptyAggregate,

    #[error("Configuration error: {0}")]
    Config(String),
}
