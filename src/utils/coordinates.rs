use crate::error::{ProcessingError, Result};

/// Parse a coordinate field into signed decimal degrees.
///
/// The field may be a plain decimal number or a hemisphere-suffixed string
/// as found in historical city datasets (`"45.50N"`, `"23.17S"`). `S` and
/// `W` negate the value. An empty field is absent, not an error; any other
/// unparseable value is.
///
/// # Examples
/// ```
/// use citytemp_processor::utils::coordinates::parse_coordinate;
///
/// assert_eq!(parse_coordinate("48.85N").unwrap(), Some(48.85));
/// assert_eq!(parse_coordinate("23.17S").unwrap(), Some(-23.17));
/// assert_eq!(parse_coordinate("-0.1278").unwrap(), Some(-0.1278));
/// assert_eq!(parse_coordinate("").unwrap(), None);
/// ```
pub fn parse_coordinate(raw: &str) -> Result<Option<f64>> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return Ok(None);
    }

    match trimmed.chars().last() {
        Some(suffix @ ('N' | 'S' | 'E' | 'W')) => {
            let sign = if matches!(suffix, 'S' | 'W') { -1.0 } else { 1.0 };

            // Suffix is a single ASCII character, so the byte slice is safe
            let value = trimmed[..trimmed.len() - 1]
                .trim()
                .parse::<f64>()
                .map_err(|_| ProcessingError::InvalidCoordinate(raw.to_string()))?;

            Ok(Some(sign * value))
        }
        _ => trimmed
            .parse::<f64>()
            .map(Some)
            .map_err(|_| ProcessingError::InvalidCoordinate(raw.to_string())),
    }
}
