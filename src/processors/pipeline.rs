use crate::error::{ProcessingError, Result};
use crate::models::{AggregatedRecord, ColorRange};
use crate::processors::aggregator::Aggregator;
use crate::processors::binning::{Granularity, TemporalBinner};
use crate::processors::coercer::FieldCoercer;
use crate::processors::color_scale::ColorRangeComputer;
use crate::processors::range_filter::RangeFilter;
use crate::readers::{DatasetLocator, DatasetReader};
use crate::utils::progress::ProgressReporter;
use serde::Serialize;
use std::path::Path;
use tracing::info;

/// Everything the rendering collaborator consumes: the ordered aggregate
/// sequence, the color range, the resolved granularity, and the name of the
/// file the run was built from.
#[derive(Debug, Clone, Serialize)]
pub struct PipelineOutput {
    pub source_file: String,
    pub granularity: Granularity,
    pub color_range: Option<ColorRange>,
    pub records: Vec<AggregatedRecord>,
}

/// Runs the full transformation: locate, validate schema, coerce, filter,
/// bin, aggregate, derive the color range.
///
/// Each stage consumes its predecessor's output and owns it exclusively;
/// there is no shared mutable state and no partial-success mode. Row
/// coercion runs on a bounded rayon pool sized by `max_workers`.
pub struct TemperaturePipeline {
    granularity: Granularity,
    use_global_scale: bool,
    max_workers: usize,
}

impl TemperaturePipeline {
    pub fn new(granularity: Granularity) -> Self {
        Self {
            granularity,
            use_global_scale: true,
            max_workers: num_cpus::get(),
        }
    }

    pub fn with_global_scale(mut self, use_global_scale: bool) -> Self {
        self.use_global_scale = use_global_scale;
        self
    }

    pub fn with_max_workers(mut self, max_workers: usize) -> Self {
        self.max_workers = max_workers;
        self
    }

    /// Locate the dataset in `data_dir` and run the pipeline over it.
    pub fn run(&self, data_dir: &Path, progress: Option<&ProgressReporter>) -> Result<PipelineOutput> {
        if let Some(p) = progress {
            p.set_message("Locating dataset...");
        }

        let dataset = DatasetLocator::new().locate(data_dir)?;
        self.run_file(&dataset, progress)
    }

    /// Run the pipeline over a specific dataset file.
    pub fn run_file(
        &self,
        dataset: &Path,
        progress: Option<&ProgressReporter>,
    ) -> Result<PipelineOutput> {
        info!("processing {}", dataset.display());

        if let Some(p) = progress {
            p.set_message("Reading dataset...");
        }
        let raw = DatasetReader::new().read_records(dataset)?;

        if let Some(p) = progress {
            p.set_message("Coercing fields...");
        }
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.max_workers)
            .build()
            .map_err(|e| ProcessingError::Config(e.to_string()))?;
        let clean = pool.install(|| FieldCoercer::new().coerce_all(raw))?;

        if let Some(p) = progress {
            p.set_message("Filtering to the historical window...");
        }
        let valid = RangeFilter::new().filter(clean)?;

        if let Some(p) = progress {
            p.set_message("Aggregating...");
        }
        let binner = TemporalBinner::new(self.granularity);
        let records = Aggregator::new().aggregate(&binner, &valid)?;

        let color_range = ColorRangeComputer::new(self.use_global_scale).compute(&records);

        info!(
            valid_rows = valid.len(),
            groups = records.len(),
            "pipeline complete"
        );

        let source_file = dataset
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| dataset.display().to_string());

        Ok(PipelineOutput {
            source_file,
            granularity: self.granularity,
            color_range,
            records,
        })
    }
}
