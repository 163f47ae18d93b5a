pub mod constants;
pub mod coordinates;
pub mod filename;
pub mod progress;

pub use constants::*;
pub use coordinates::parse_coordinate;
pub use filename::generate_default_output_filename;
pub use progress::ProgressReporter;
