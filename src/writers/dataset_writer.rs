use crate::error::{ProcessingError, Result};
use crate::models::AggregatedRecord;
use crate::processors::PipelineOutput;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Writes the pipeline output for the rendering collaborator.
///
/// JSON carries the full payload (records, color range, granularity label,
/// source file name); CSV carries the aggregated record table only. The
/// format follows the output file's extension.
pub struct DatasetWriter;

impl DatasetWriter {
    pub fn new() -> Self {
        Self
    }

    pub fn write(&self, output: &PipelineOutput, path: &Path) -> Result<()> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => self.write_json(output, path),
            Some("csv") => self.write_csv(&output.records, path),
            other => Err(ProcessingError::Config(format!(
                "Unsupported output format: '{}'",
                other.unwrap_or("")
            ))),
        }
    }

    pub fn write_json(&self, output: &PipelineOutput, path: &Path) -> Result<()> {
        let file = File::create(path)?;
        serde_json::to_writer_pretty(BufWriter::new(file), output)?;
        Ok(())
    }

    pub fn write_csv(&self, records: &[AggregatedRecord], path: &Path) -> Result<()> {
        let mut writer = csv::Writer::from_path(path)?;

        for record in records {
            writer.serialize(record)?;
        }

        writer.flush()?;
        Ok(())
    }
}

impl Default for DatasetWriter {
    fn default() -> Self {
        Self::new()
    }
}
