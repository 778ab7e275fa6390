use std::fmt;

/// Coordinate axis that failed range validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Latitude,
    Longitude,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Latitude => f.write_str("Latitude"),
            Axis::Longitude => f.write_str("Longitude"),
        }
    }
}

/// Error type for digipin-rs operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DigipinError {
    /// The coordinate lies outside the codec's bounding region.
    #[error("{axis} out of range: {value}")]
    OutOfRange { axis: Axis, value: f64 },
    /// The code does not hold exactly ten symbols once separators are removed.
    #[error("Invalid DIGIPIN length: expected 10 symbols, found {0}")]
    InvalidLength(usize),
    /// The code contains a character outside the grid alphabet.
    #[error("Invalid DIGIPIN character: {0:?}")]
    InvalidSymbol(char),
    /// A bounding region is empty, inverted or not finite.
    #[error("Invalid bounding region: {0}")]
    InvalidRegion(String),
    /// File I/O or serialization error.
    #[error("IO error: {0}")]
    IoError(String),
    /// CSV parsing or reading error.
    #[error("CSV error: {0}")]
    CsvError(String),
    /// Failed to parse geometry from string (GeoJSON or WKT).
    #[error("Geometry parse error: {0}")]
    GeometryParseError(String),
}

impl DigipinError {
    pub(crate) fn latitude(value: f64) -> Self {
        DigipinError::OutOfRange {
            axis: Axis::Latitude,
            value,
        }
    }

    pub(crate) fn longitude(value: f64) -> Self {
        DigipinError::OutOfRange {
            axis: Axis::Longitude,
            value,
        }
    }
}
