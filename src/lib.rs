//! # digipin-rs
//!
//! DIGIPIN splits a fixed region over India into a 4x4 grid, ten times over,
//! and names the resulting cell with one symbol per level. There are currently
//! three main entry points.
//!
//! ### 1. `encode` / `decode` - The Code Itself
//!
//! ```
//! # fn main() -> Result<(), digipin::DigipinError> {
//! let code = digipin::encode(28.6139, 77.2090)?;
//! println!("{}", code); // 39J-438-TJC7
//!
//! let (lat, lon) = digipin::decode("39J-438-TJC7")?;
//! # Ok(())
//! # }
//! ```
//!
//! ### 2. `DigipinCell` - Code Plus Cell Geometry
//!
//! ```
//! use digipin::DigipinCell;
//!
//! # fn main() -> Result<(), digipin::DigipinError> {
//! let cell = DigipinCell::from_wgs84(&(77.5946, 12.9716))?;
//! println!("{} -> {}", cell.code, cell.maps_url());
//! let polygon = cell.to_polygon();
//! # Ok(())
//! # }
//! ```
//!
//! ### 3. `CsvToDigipin` - CSV File Conversion
//!
//! Convert CSV files with coordinate columns or a geometry column (WKT or GeoJSON):
//!
//! ```no_run
//! use digipin::{CsvDigipinConfig, CsvToDigipin, GeometryFormat};
//!
//! let config = CsvDigipinConfig::from_coords("Longitude", "Latitude")
//!     .with_cell_geometry(GeometryFormat::GeoJson)
//!     .skip_invalid(true);
//!
//! "input.csv".to_digipin_csv("output.csv", &config).unwrap();
//! ```
//!

pub mod api;
pub mod core;
pub mod geom;
pub mod util;

pub use crate::api::{
    ConversionSummary, CoordinateSource, CsvDecodeConfig, CsvDigipinConfig, CsvToDigipin,
    DigipinCell, csv_decode_digipin, csv_to_digipin_csv,
};
pub use crate::core::{
    BoundingRegion, CODE_LENGTH, DIGIPIN_GRID, DigipinCode, DigipinCodec, GridPosition, GridTable,
    INDIA_BOUNDS, LevelStep, SEPARATOR, decode, encode,
};
pub use crate::geom::{GeometryFormat, parse_geometry, parse_points};
pub use crate::util::{Axis, Coordinate, DigipinError};

pub use geo_types;
