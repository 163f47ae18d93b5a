use crate::error::{ProcessingError, Result};
use crate::models::RawRecord;
use crate::utils::constants::REQUIRED_COLUMNS;
use std::collections::{BTreeSet, HashSet};
use std::path::Path;
use tracing::info;

/// Reads the raw dataset and enforces the schema contract.
///
/// The header row is checked against the required column set before any row
/// is parsed; a schema mismatch reports exactly which columns are missing.
pub struct DatasetReader;

impl DatasetReader {
    pub fn new() -> Self {
        Self
    }

    /// Read every row of the dataset file.
    pub fn read_records(&self, path: &Path) -> Result<Vec<RawRecord>> {
        let mut reader = csv::Reader::from_path(path)?;

        self.validate_schema(reader.headers()?)?;

        let mut records = Vec::new();
        for result in reader.deserialize() {
            let record: RawRecord = result?;
            records.push(record);
        }

        info!(rows = records.len(), "read dataset {}", path.display());
        Ok(records)
    }

    /// Set difference of required columns against the header row.
    fn validate_schema(&self, headers: &csv::StringRecord) -> Result<()> {
        let present: HashSet<&str> = headers.iter().collect();

        let missing: BTreeSet<String> = REQUIRED_COLUMNS
            .iter()
            .filter(|column| !present.contains(**column))
            .map(|column| column.to_string())
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ProcessingError::MissingColumns(missing))
        }
    }
}

impl Default for DatasetReader {
    fn default() -> Self {
        Self::new()
    }
}
