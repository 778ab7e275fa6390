use crate::core::constants::GRID_SIZE;
use crate::core::grid::GridPosition;
use crate::util::error::DigipinError;
use geo_types::{Polygon, Rect, coord};
use serde::Serialize;

const DIVISIONS: f64 = GRID_SIZE as f64;
const LAST_INDEX: f64 = DIVISIONS - 1.0;

/// An axis-aligned latitude/longitude rectangle.
///
/// Always non-empty: `min_lat < max_lat` and `min_lon < max_lon`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoundingRegion {
    min_lat: f64,
    max_lat: f64,
    min_lon: f64,
    max_lon: f64,
}

impl BoundingRegion {
    pub(crate) const fn from_raw(min_lat: f64, max_lat: f64, min_lon: f64, max_lon: f64) -> Self {
        Self {
            min_lat,
            max_lat,
            min_lon,
            max_lon,
        }
    }

    /// Creates a region, rejecting non-finite, empty or inverted bounds.
    ///
    /// # Example
    /// ```
    /// use digipin::BoundingRegion;
    ///
    /// let region = BoundingRegion::new(2.5, 38.5, 63.5, 99.5).unwrap();
    /// assert_eq!(region.center(), (20.5, 81.5));
    /// assert!(BoundingRegion::new(38.5, 2.5, 63.5, 99.5).is_err());
    /// ```
    pub fn new(
        min_lat: f64,
        max_lat: f64,
        min_lon: f64,
        max_lon: f64,
    ) -> Result<Self, DigipinError> {
        if ![min_lat, max_lat, min_lon, max_lon].iter().all(|v| v.is_finite()) {
            return Err(DigipinError::InvalidRegion(
                "Bounds must be finite".to_string(),
            ));
        }
        if min_lat >= max_lat {
            return Err(DigipinError::InvalidRegion(format!(
                "min_lat {min_lat} must be below max_lat {max_lat}"
            )));
        }
        if min_lon >= max_lon {
            return Err(DigipinError::InvalidRegion(format!(
                "min_lon {min_lon} must be below max_lon {max_lon}"
            )));
        }
        Ok(Self::from_raw(min_lat, max_lat, min_lon, max_lon))
    }

    pub fn min_lat(&self) -> f64 {
        self.min_lat
    }

    pub fn max_lat(&self) -> f64 {
        self.max_lat
    }

    pub fn min_lon(&self) -> f64 {
        self.min_lon
    }

    pub fn max_lon(&self) -> f64 {
        self.max_lon
    }

    /// Height of one grid band at this level.
    pub fn lat_div(&self) -> f64 {
        (self.max_lat - self.min_lat) / DIVISIONS
    }

    /// Width of one grid band at this level.
    pub fn lon_div(&self) -> f64 {
        (self.max_lon - self.min_lon) / DIVISIONS
    }

    pub fn contains_lat(&self, lat: f64) -> bool {
        (self.min_lat..=self.max_lat).contains(&lat)
    }

    pub fn contains_lon(&self, lon: f64) -> bool {
        (self.min_lon..=self.max_lon).contains(&lon)
    }

    /// Inclusive containment test. NaN is never contained.
    pub fn contains(&self, lat: f64, lon: f64) -> bool {
        self.contains_lat(lat) && self.contains_lon(lon)
    }

    /// Centre of the region as `(lat, lon)`.
    pub fn center(&self) -> (f64, f64) {
        (
            (self.min_lat + self.max_lat) / 2.0,
            (self.min_lon + self.max_lon) / 2.0,
        )
    }

    /// Selects the grid cell holding `(lat, lon)` and returns it with the narrowed region.
    ///
    /// Points on the northern or eastern edge fall into the last band. The
    /// new `max_lon` is derived from the already narrowed `min_lon`.
    pub fn narrow_to(&self, lat: f64, lon: f64) -> (GridPosition, Self) {
        let lat_div = self.lat_div();
        let lon_div = self.lon_div();

        let row = 3 - ((lat - self.min_lat) / lat_div).floor() as i64;
        let col = ((lon - self.min_lon) / lon_div).floor() as i64;
        let position = GridPosition::clamped(row, col);

        let row = position.row() as f64;
        let col = position.col() as f64;

        let max_lat = self.min_lat + lat_div * (DIVISIONS - row);
        let min_lat = self.min_lat + lat_div * (LAST_INDEX - row);
        let min_lon = self.min_lon + lon_div * col;
        let max_lon = min_lon + lon_div;

        (position, Self::from_raw(min_lat, max_lat, min_lon, max_lon))
    }

    /// The sub-rectangle at `position`, measured from the northern edge.
    pub fn subcell(&self, position: GridPosition) -> Self {
        let lat_div = self.lat_div();
        let lon_div = self.lon_div();
        let row = position.row() as f64;
        let col = position.col() as f64;

        Self::from_raw(
            self.max_lat - lat_div * (row + 1.0),
            self.max_lat - lat_div * row,
            self.min_lon + lon_div * col,
            self.min_lon + lon_div * (col + 1.0),
        )
    }

    /// The region as a `geo_types::Rect` with x = longitude, y = latitude.
    pub fn to_rect(&self) -> Rect<f64> {
        Rect::new(
            coord! { x: self.min_lon, y: self.min_lat },
            coord! { x: self.max_lon, y: self.max_lat },
        )
    }

    pub fn to_polygon(&self) -> Polygon<f64> {
        self.to_rect().to_polygon()
    }
}
