pub mod format;
pub mod parse;

pub use format::{GeometryFormat, polygon_to_geojson, polygon_to_wkt};
pub use parse::{encodable_points, parse_geojson, parse_geometry, parse_points, parse_wkt};
