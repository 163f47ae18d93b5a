pub mod aggregator;
pub mod binning;
pub mod cache;
pub mod coercer;
pub mod color_scale;
pub mod pipeline;
pub mod range_filter;

pub use aggregator::Aggregator;
pub use binning::{Granularity, Period, TemporalBinner};
pub use cache::{FileFingerprint, PipelineCache};
pub use coercer::FieldCoercer;
pub use color_scale::ColorRangeComputer;
pub use pipeline::{PipelineOutput, TemperaturePipeline};
pub use range_filter::RangeFilter;
