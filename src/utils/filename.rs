use chrono::{Datelike, Local};
use std::path::PathBuf;

/// Generate default output filename with format: citytemp-aggregated-{YYMMDD}.json
pub fn generate_default_output_filename() -> PathBuf {
    let now = Local::now();
    let year = now.year() % 100; // Get last 2 digits of year
    let month = now.month();
    let day = now.day();

    let filename = format!("citytemp-aggregated-{:02}{:02}{:02}.json", year, month, day);
    PathBuf::from("output").join(filename)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_default_output_filename() {
        let filename = generate_default_output_filename();
        let filename_str = filename.to_string_lossy();

        assert!(filename_str.starts_with("output/"));

        let parts: Vec<&str> = filename_str.split('/').collect();
        assert_eq!(parts.len(), 2);

        let file_part = parts[1];
        assert!(file_part.starts_with("citytemp-aggregated-"));
        assert!(file_part.ends_with(".json"));
    }
}
