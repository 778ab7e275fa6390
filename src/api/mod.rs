pub mod cell;
pub mod digipin_csv;

pub use cell::DigipinCell;
pub use digipin_csv::{
    ConversionSummary, CoordinateSource, CsvDecodeConfig, CsvDigipinConfig, CsvToDigipin,
    DIGIPIN_COLUMN, DIGIPIN_GEOMETRY_COLUMN, csv_decode_digipin, csv_to_digipin_csv,
};
