use chrono::NaiveDate;

/// Column names the source dataset must carry
pub const REQUIRED_COLUMNS: [&str; 7] = [
    "dt",
    "AverageTemperature",
    "AverageTemperatureUncertainty",
    "City",
    "Country",
    "Latitude",
    "Longitude",
];

/// File extension recognised by the dataset locator
pub const DATASET_EXTENSION: &str = "csv";

/// Historical observation window (inclusive), fixed pipeline policy
pub const CLAMP_START: NaiveDate = match NaiveDate::from_ymd_opt(1743, 1, 1) {
    Some(date) => date,
    None => panic!("invalid clamp start"),
};
pub const CLAMP_END: NaiveDate = match NaiveDate::from_ymd_opt(2013, 12, 31) {
    Some(date) => date,
    None => panic!("invalid clamp end"),
};

/// Date format of the `dt` column
pub const DATE_FORMAT: &str = "%Y-%m-%d";
