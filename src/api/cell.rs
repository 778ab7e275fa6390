use crate::core::code::DigipinCode;
use crate::core::codec::DigipinCodec;
use crate::core::constants::DECIMAL_PLACES;
use crate::core::region::BoundingRegion;
use crate::util::coord::{Coordinate, round_to};
use crate::util::error::DigipinError;
use geo_types::{Point, Polygon, Rect};
use serde::Serialize;

/// A DIGIPIN together with the level-10 cell it names.
///
/// `center` holds the decoded position (rounded to six decimals) with
/// x = longitude and y = latitude.
///
/// # Example
///
/// ```
/// use digipin::DigipinCell;
///
/// # fn main() -> Result<(), digipin::DigipinError> {
/// let cell = DigipinCell::from_lat_lon(28.6139, 77.2090)?;
/// assert_eq!(cell.code.to_string(), "39J-438-TJC7");
/// assert_eq!(cell.latitude(), 28.613901);
///
/// let polygon = cell.to_polygon();
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DigipinCell {
    /// The ten symbol code
    pub code: DigipinCode,
    /// Extent of the level-10 cell
    pub bounds: BoundingRegion,
    /// Decoded centre of the cell
    #[serde(serialize_with = "serialize_point")]
    pub center: Point<f64>,
}

fn serialize_point<S: serde::Serializer>(
    point: &Point<f64>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    use serde::ser::SerializeStruct;
    let mut state = serializer.serialize_struct("Point", 2)?;
    state.serialize_field("latitude", &point.y())?;
    state.serialize_field("longitude", &point.x())?;
    state.end()
}

impl DigipinCell {
    /// Create a cell from a latitude/longitude pair.
    pub fn from_lat_lon(lat: f64, lon: f64) -> Result<Self, DigipinError> {
        Self::from_lat_lon_with(&DigipinCodec::INDIA, lat, lon)
    }

    pub fn from_lat_lon_with(
        codec: &DigipinCodec,
        lat: f64,
        lon: f64,
    ) -> Result<Self, DigipinError> {
        let code = codec.encode(lat, lon)?;
        Self::from_code_with(codec, code.as_str())
    }

    /// Create a cell from WGS84 coordinates (x = longitude, y = latitude).
    ///
    /// # Example
    /// ```
    /// use digipin::DigipinCell;
    /// use geo_types::Point;
    ///
    /// # fn main() -> Result<(), digipin::DigipinError> {
    /// // From (lon, lat) tuple
    /// let cell = DigipinCell::from_wgs84(&(77.5946, 12.9716))?;
    /// // From Point
    /// let same = DigipinCell::from_wgs84(&Point::new(77.5946, 12.9716))?;
    /// assert_eq!(cell, same);
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_wgs84(coord: &impl Coordinate) -> Result<Self, DigipinError> {
        Self::from_lat_lon(coord.lat(), coord.lon())
    }

    pub fn from_wgs84_with(
        codec: &DigipinCodec,
        coord: &impl Coordinate,
    ) -> Result<Self, DigipinError> {
        Self::from_lat_lon_with(codec, coord.lat(), coord.lon())
    }

    /// Create a cell from a code, with or without separators.
    pub fn from_code(code: &str) -> Result<Self, DigipinError> {
        Self::from_code_with(&DigipinCodec::INDIA, code)
    }

    pub fn from_code_with(codec: &DigipinCodec, code: &str) -> Result<Self, DigipinError> {
        let code = codec.parse(code)?;
        let bounds = codec.cell_bounds(code.as_str())?;
        let (lat, lon) = bounds.center();

        Ok(Self {
            code,
            bounds,
            center: Point::new(
                round_to(lon, DECIMAL_PLACES),
                round_to(lat, DECIMAL_PLACES),
            ),
        })
    }

    pub fn latitude(&self) -> f64 {
        self.center.y()
    }

    pub fn longitude(&self) -> f64 {
        self.center.x()
    }

    /// Whether `coord` (x = longitude, y = latitude) lies inside this cell.
    pub fn contains(&self, coord: &impl Coordinate) -> bool {
        self.bounds.contains(coord.lat(), coord.lon())
    }

    pub fn to_rect(&self) -> Rect<f64> {
        self.bounds.to_rect()
    }

    /// Converts this cell to a rectangular polygon in lon/lat.
    pub fn to_polygon(&self) -> Polygon<f64> {
        self.bounds.to_polygon()
    }

    /// Google Maps search link for the cell centre.
    pub fn maps_url(&self) -> String {
        format!(
            "https://www.google.com/maps/search/?api=1&query={},{}",
            self.latitude(),
            self.longitude()
        )
    }
}
