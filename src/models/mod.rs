pub mod aggregate;
pub mod record;

pub use aggregate::{AggregatedRecord, ColorRange};
pub use record::{CleanRecord, RawRecord, ValidRecord};
