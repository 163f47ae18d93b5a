use crate::models::{AggregatedRecord, ColorRange};

/// Derives the global color range over the aggregated temperature column.
///
/// With global scaling the same (min, max) applies to every period, keeping
/// color intensity comparable across time. Without it the computer returns
/// nothing and the consumer renormalizes per period.
pub struct ColorRangeComputer {
    use_global_scale: bool,
}

impl ColorRangeComputer {
    pub fn new(use_global_scale: bool) -> Self {
        Self { use_global_scale }
    }

    pub fn compute(&self, records: &[AggregatedRecord]) -> Option<ColorRange> {
        if !self.use_global_scale {
            return None;
        }

        let mut temperatures = records.iter().map(|r| r.average_temperature);
        let first = temperatures.next()?;

        let (min, max) = temperatures.fold((first, first), |(min, max), t| {
            (min.min(t), max.max(t))
        });

        Some(ColorRange { min, max })
    }
}
