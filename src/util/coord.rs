use geo_types::{Coord, Point};

/// A WGS84 position with `x` as longitude and `y` as latitude.
///
/// Implemented for `(f64, f64)` tuples in `(lon, lat)` order, `geo_types::Point`
/// and `geo_types::Coord`.
pub trait Coordinate {
    fn x(&self) -> f64;
    fn y(&self) -> f64;

    fn lon(&self) -> f64 {
        self.x()
    }

    fn lat(&self) -> f64 {
        self.y()
    }
}

impl Coordinate for (f64, f64) {
    fn x(&self) -> f64 { self.0 }
    fn y(&self) -> f64 { self.1 }
}

impl Coordinate for Point<f64> {
    fn x(&self) -> f64 { Point::x(*self) }
    fn y(&self) -> f64 { Point::y(*self) }
}

impl Coordinate for Coord<f64> {
    fn x(&self) -> f64 { self.x }
    fn y(&self) -> f64 { self.y }
}

/// Rounds `value` to `places` decimal places, half away from zero.
pub(crate) fn round_to(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (value * scale).round() / scale
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo_types::coord;

    #[test]
    fn test_coordinate_trait_tuple() {
        let tuple = (77.2090, 28.6139);
        assert_eq!(tuple.lon(), 77.2090);
        assert_eq!(tuple.lat(), 28.6139);
    }

    #[test]
    fn test_coordinate_trait_point() {
        let point = Point::new(77.2090, 28.6139);
        assert_eq!(point.x(), 77.2090);
        assert_eq!(Coordinate::lat(&point), 28.6139);
    }

    #[test]
    fn test_coordinate_trait_coord() {
        let c = coord! { x: 72.8777, y: 19.0760 };
        assert_eq!(c.lon(), 72.8777);
        assert_eq!(c.lat(), 19.0760);
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(28.613_901_138_305_664, 6), 28.613901);
        assert_eq!(round_to(77.208_997_726_440_43, 6), 77.208998);
        assert_eq!(round_to(2.5, 6), 2.5);
    }
}
