pub mod csv_reader;
pub mod dataset_locator;

pub use csv_reader::DatasetReader;
pub use dataset_locator::DatasetLocator;
