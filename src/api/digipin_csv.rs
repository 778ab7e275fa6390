use crate::api::cell::DigipinCell;
use crate::core::codec::DigipinCodec;
use crate::geom::format::GeometryFormat;
use crate::geom::parse::parse_points;
use crate::util::error::DigipinError;
use std::collections::HashSet;
use std::fs::File;
use std::path::Path;
use tracing::{debug, info, warn};

/// Name of the code column written by [`csv_to_digipin_csv`].
pub const DIGIPIN_COLUMN: &str = "digipin";
/// Name of the optional cell geometry column.
pub const DIGIPIN_GEOMETRY_COLUMN: &str = "digipin_geometry";

/// For the type of location source in the file
enum SourceIndices {
    Geometry(usize),
    Coordinates { lon_idx: usize, lat_idx: usize },
}

/// Specifies how to extract location data from CSV rows.
#[derive(Debug, Clone)]
pub enum CoordinateSource {
    /// A single column containing WKT or GeoJSON geometry
    GeometryColumn(String),
    /// Separate longitude and latitude columns
    CoordinateColumns { lon_column: String, lat_column: String },
}

/// Configuration for CSV to DIGIPIN conversion.
#[derive(Debug, Clone)]
pub struct CsvDigipinConfig {
    pub source: CoordinateSource,
    pub exclude_columns: Vec<String>,
    pub include_cell_geometry: Option<GeometryFormat>,
    pub skip_invalid: bool,
    pub codec: DigipinCodec,
}

impl CsvDigipinConfig {
    /// Create config for a CSV with a geometry column (WKT or GeoJSON).
    ///
    /// # Example
    /// ```
    /// use digipin::CsvDigipinConfig;
    ///
    /// let config = CsvDigipinConfig::new("geometry");
    /// ```
    pub fn new(geometry_column: impl Into<String>) -> Self {
        Self::with_source(CoordinateSource::GeometryColumn(geometry_column.into()))
    }

    /// Create config for a CSV with separate longitude/latitude columns.
    ///
    /// # Example
    /// ```
    /// use digipin::CsvDigipinConfig;
    ///
    /// let config = CsvDigipinConfig::from_coords("Longitude", "Latitude");
    /// ```
    pub fn from_coords(lon_column: impl Into<String>, lat_column: impl Into<String>) -> Self {
        Self::with_source(CoordinateSource::CoordinateColumns {
            lon_column: lon_column.into(),
            lat_column: lat_column.into(),
        })
    }

    fn with_source(source: CoordinateSource) -> Self {
        Self {
            source,
            exclude_columns: Vec::new(),
            include_cell_geometry: None,
            skip_invalid: false,
            codec: DigipinCodec::default(),
        }
    }

    pub fn exclude(mut self, columns: Vec<String>) -> Self {
        self.exclude_columns = columns;
        self
    }

    /// Include the cell polygon in output.
    pub fn with_cell_geometry(mut self, format: GeometryFormat) -> Self {
        self.include_cell_geometry = Some(format);
        self
    }

    /// Skip rows that cannot be encoded instead of failing the whole file.
    pub fn skip_invalid(mut self, skip: bool) -> Self {
        self.skip_invalid = skip;
        self
    }

    pub fn codec(mut self, codec: DigipinCodec) -> Self {
        self.codec = codec;
        self
    }
}

/// Configuration for decoding a CSV column of codes.
#[derive(Debug, Clone)]
pub struct CsvDecodeConfig {
    pub code_column: String,
    pub skip_invalid: bool,
    pub codec: DigipinCodec,
}

impl CsvDecodeConfig {
    pub fn new(code_column: impl Into<String>) -> Self {
        Self {
            code_column: code_column.into(),
            skip_invalid: false,
            codec: DigipinCodec::default(),
        }
    }

    pub fn skip_invalid(mut self, skip: bool) -> Self {
        self.skip_invalid = skip;
        self
    }

    pub fn codec(mut self, codec: DigipinCodec) -> Self {
        self.codec = codec;
        self
    }
}

pub trait CsvToDigipin {
    fn to_digipin_csv(
        &self,
        output_path: impl AsRef<Path>,
        config: &CsvDigipinConfig,
    ) -> Result<ConversionSummary, DigipinError>;

    fn decode_digipin_csv(
        &self,
        output_path: impl AsRef<Path>,
        config: &CsvDecodeConfig,
    ) -> Result<ConversionSummary, DigipinError>;
}

impl<P: AsRef<Path>> CsvToDigipin for P {
    fn to_digipin_csv(
        &self,
        output_path: impl AsRef<Path>,
        config: &CsvDigipinConfig,
    ) -> Result<ConversionSummary, DigipinError> {
        csv_to_digipin_csv(self, output_path, config)
    }

    fn decode_digipin_csv(
        &self,
        output_path: impl AsRef<Path>,
        config: &CsvDecodeConfig,
    ) -> Result<ConversionSummary, DigipinError> {
        csv_decode_digipin(self, output_path, config)
    }
}

/// Row counts from a conversion run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConversionSummary {
    pub rows_read: usize,
    pub rows_written: usize,
    pub rows_skipped: usize,
}

fn column_index(headers: &csv::StringRecord, name: &str) -> Result<usize, DigipinError> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| DigipinError::CsvError(format!("Column '{}' not found", name)))
}

fn field<'r>(record: &'r csv::StringRecord, idx: usize) -> Result<&'r str, DigipinError> {
    record
        .get(idx)
        .map(str::trim)
        .ok_or_else(|| DigipinError::CsvError(format!("Missing column at index {}", idx)))
}

fn parse_coordinate(value: &str, name: &str) -> Result<f64, DigipinError> {
    value
        .parse()
        .map_err(|_| DigipinError::CsvError(format!("Invalid {}: '{}'", name, value)))
}

fn open_reader(path: impl AsRef<Path>) -> Result<csv::Reader<File>, DigipinError> {
    let file = File::open(path).map_err(|e| DigipinError::IoError(e.to_string()))?;
    Ok(csv::Reader::from_reader(file))
}

fn create_writer(path: impl AsRef<Path>) -> Result<csv::Writer<File>, DigipinError> {
    let file = File::create(path).map_err(|e| DigipinError::IoError(e.to_string()))?;
    Ok(csv::Writer::from_writer(file))
}

fn read_cells(
    record: &csv::StringRecord,
    source: &SourceIndices,
    codec: &DigipinCodec,
) -> Result<Vec<DigipinCell>, DigipinError> {
    match source {
        SourceIndices::Geometry(idx) => {
            parse_points(field(record, *idx)?)?
                .iter()
                .map(|pt| DigipinCell::from_wgs84_with(codec, pt))
                .collect()
        }
        SourceIndices::Coordinates { lon_idx, lat_idx } => {
            let lon = parse_coordinate(field(record, *lon_idx)?, "longitude")?;
            let lat = parse_coordinate(field(record, *lat_idx)?, "latitude")?;
            Ok(vec![DigipinCell::from_lat_lon_with(codec, lat, lon)?])
        }
    }
}

// ============================================================================
// CSV Conversion
// ============================================================================

/// Converts a CSV file with geometry or coordinate columns to a CSV file with DIGIPINs.
///
/// Streams output to minimize memory usage for large files. The source
/// columns are replaced by a leading `digipin` column.
///
/// # Example with geometry column (WKT or GeoJSON)
///
/// ```no_run
/// use digipin::{csv_to_digipin_csv, CsvDigipinConfig, GeometryFormat};
///
/// let config = CsvDigipinConfig::new("geometry")
///     .exclude(vec!["notes".into()])
///     .with_cell_geometry(GeometryFormat::Wkt);
///
/// csv_to_digipin_csv("input.csv", "output.csv", &config).unwrap();
/// ```
///
/// # Example with coordinate columns
///
/// ```no_run
/// use digipin::{csv_to_digipin_csv, CsvDigipinConfig};
///
/// let config = CsvDigipinConfig::from_coords("Longitude", "Latitude").skip_invalid(true);
///
/// csv_to_digipin_csv("post_offices.csv", "output.csv", &config).unwrap();
/// ```
pub fn csv_to_digipin_csv(
    csv_path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
    config: &CsvDigipinConfig,
) -> Result<ConversionSummary, DigipinError> {
    let csv_path = csv_path.as_ref();
    info!(input = %csv_path.display(), "encoding CSV to DIGIPIN");

    let mut reader = open_reader(csv_path)?;
    let headers = reader
        .headers()
        .map_err(|e| DigipinError::CsvError(e.to_string()))?
        .clone();

    // Source columns never reach the output
    let (source_indices, mut exclude_indices) = match &config.source {
        CoordinateSource::GeometryColumn(col) => {
            let idx = column_index(&headers, col)?;
            (SourceIndices::Geometry(idx), HashSet::from([idx]))
        }
        CoordinateSource::CoordinateColumns {
            lon_column,
            lat_column,
        } => {
            let lon_idx = column_index(&headers, lon_column)?;
            let lat_idx = column_index(&headers, lat_column)?;
            (
                SourceIndices::Coordinates { lon_idx, lat_idx },
                HashSet::from([lon_idx, lat_idx]),
            )
        }
    };

    for col_name in &config.exclude_columns {
        if let Some(idx) = headers.iter().position(|h| h == col_name) {
            exclude_indices.insert(idx);
        }
    }

    let mut writer = create_writer(output_path)?;

    let mut header_row: Vec<&str> = vec![DIGIPIN_COLUMN];
    if config.include_cell_geometry.is_some() {
        header_row.push(DIGIPIN_GEOMETRY_COLUMN);
    }
    for (i, h) in headers.iter().enumerate() {
        if !exclude_indices.contains(&i) {
            header_row.push(h);
        }
    }
    writer
        .write_record(&header_row)
        .map_err(|e| DigipinError::CsvError(e.to_string()))?;

    let mut summary = ConversionSummary::default();

    for (line, result) in reader.records().enumerate() {
        let record = result.map_err(|e| DigipinError::CsvError(e.to_string()))?;
        summary.rows_read += 1;

        let cells = match read_cells(&record, &source_indices, &config.codec) {
            Ok(cells) => cells,
            Err(e) if config.skip_invalid => {
                warn!(row = line + 1, error = %e, "skipping row");
                summary.rows_skipped += 1;
                continue;
            }
            Err(e) => return Err(e),
        };
        debug!(row = line + 1, cells = cells.len(), "encoded row");

        for cell in cells {
            let mut row: Vec<String> = vec![cell.code.to_string()];

            if let Some(format) = config.include_cell_geometry {
                row.push(format.render(&cell.to_polygon()));
            }

            for (i, value) in record.iter().enumerate() {
                if !exclude_indices.contains(&i) {
                    row.push(value.to_string());
                }
            }
            writer
                .write_record(&row)
                .map_err(|e| DigipinError::CsvError(e.to_string()))?;
            summary.rows_written += 1;
        }
    }

    writer
        .flush()
        .map_err(|e| DigipinError::CsvError(e.to_string()))?;

    info!(
        read = summary.rows_read,
        written = summary.rows_written,
        skipped = summary.rows_skipped,
        "finished encoding"
    );
    Ok(summary)
}

/// Appends `latitude` and `longitude` columns decoded from a code column.
///
/// ```no_run
/// use digipin::{csv_decode_digipin, CsvDecodeConfig};
///
/// let config = CsvDecodeConfig::new("digipin");
/// csv_decode_digipin("codes.csv", "positions.csv", &config).unwrap();
/// ```
pub fn csv_decode_digipin(
    csv_path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
    config: &CsvDecodeConfig,
) -> Result<ConversionSummary, DigipinError> {
    let csv_path = csv_path.as_ref();
    info!(input = %csv_path.display(), "decoding DIGIPIN CSV");

    let mut reader = open_reader(csv_path)?;
    let headers = reader
        .headers()
        .map_err(|e| DigipinError::CsvError(e.to_string()))?
        .clone();
    let code_idx = column_index(&headers, &config.code_column)?;

    let mut writer = create_writer(output_path)?;
    let mut header_row: Vec<&str> = headers.iter().collect();
    header_row.extend(["latitude", "longitude"]);
    writer
        .write_record(&header_row)
        .map_err(|e| DigipinError::CsvError(e.to_string()))?;

    let mut summary = ConversionSummary::default();

    for (line, result) in reader.records().enumerate() {
        let record = result.map_err(|e| DigipinError::CsvError(e.to_string()))?;
        summary.rows_read += 1;

        let decoded = field(&record, code_idx).and_then(|code| config.codec.decode(code));
        let (lat, lon) = match decoded {
            Ok(position) => position,
            Err(e) if config.skip_invalid => {
                warn!(row = line + 1, error = %e, "skipping row");
                summary.rows_skipped += 1;
                continue;
            }
            Err(e) => return Err(e),
        };

        let mut row: Vec<String> = record.iter().map(str::to_string).collect();
        row.push(lat.to_string());
        row.push(lon.to_string());
        writer
            .write_record(&row)
            .map_err(|e| DigipinError::CsvError(e.to_string()))?;
        summary.rows_written += 1;
    }

    writer
        .flush()
        .map_err(|e| DigipinError::CsvError(e.to_string()))?;

    info!(
        read = summary.rows_read,
        written = summary.rows_written,
        skipped = summary.rows_skipped,
        "finished decoding"
    );
    Ok(summary)
}
