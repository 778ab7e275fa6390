use crate::util::error::DigipinError;
use geo::Centroid;
use geo_types::{Geometry, Point};
use geojson::GeoJson;
use wkt::Wkt;

fn parse_error(message: impl ToString) -> DigipinError {
    DigipinError::GeometryParseError(message.to_string())
}

/// Parses a location string, reading it as GeoJSON when it starts with `{`
/// and as WKT otherwise. Coordinates are WGS84 longitude/latitude.
pub fn parse_geometry(s: &str) -> Result<Geometry<f64>, DigipinError> {
    match s.trim() {
        json if json.starts_with('{') => parse_geojson(json),
        text => parse_wkt(text),
    }
}

/// Parses a GeoJSON geometry, or the geometry of a single feature.
pub fn parse_geojson(s: &str) -> Result<Geometry<f64>, DigipinError> {
    let geometry = match s.parse::<GeoJson>().map_err(parse_error)? {
        GeoJson::Geometry(geometry) => geometry,
        GeoJson::Feature(feature) => feature
            .geometry
            .ok_or_else(|| parse_error("feature has no geometry"))?,
        GeoJson::FeatureCollection(_) => {
            return Err(parse_error(
                "expected one location, found a FeatureCollection",
            ));
        }
    };
    Geometry::try_from(geometry).map_err(parse_error)
}

pub fn parse_wkt(s: &str) -> Result<Geometry<f64>, DigipinError> {
    let wkt = s.parse::<Wkt<f64>>().map_err(parse_error)?;
    Geometry::try_from(wkt).map_err(|_| parse_error("WKT has no geo-types equivalent"))
}

fn collect_points(geom: Geometry<f64>) -> Vec<Point<f64>> {
    match geom {
        Geometry::Point(pt) => vec![pt],
        Geometry::MultiPoint(mp) => mp.0,
        Geometry::GeometryCollection(gc) => gc.0.into_iter().flat_map(collect_points).collect(),
        other => other.centroid().into_iter().collect(),
    }
}

/// Positions to encode for a location: every point of a (multi)point,
/// collections flattened, the centroid of any other shape.
///
/// Fails when nothing is left to encode, e.g. `MULTIPOINT EMPTY`.
pub fn encodable_points(geom: Geometry<f64>) -> Result<Vec<Point<f64>>, DigipinError> {
    let points = collect_points(geom);
    if points.is_empty() {
        return Err(parse_error("geometry has no encodable point"));
    }
    Ok(points)
}

/// [`parse_geometry`] followed by [`encodable_points`].
pub fn parse_points(s: &str) -> Result<Vec<Point<f64>>, DigipinError> {
    parse_geometry(s).and_then(encodable_points)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_geojson_point() -> Result<(), DigipinError> {
        let json = r#"{"type":"Point","coordinates":[77.209,28.6139]}"#;
        let geom = parse_geometry(json)?;
        match geom {
            Geometry::Point(pt) => {
                assert!((pt.x() - 77.209).abs() < 0.001);
                assert!((pt.y() - 28.6139).abs() < 0.001);
            }
            _ => panic!("Expected Point"),
        }
        Ok(())
    }

    #[test]
    fn test_parse_geojson_feature() -> Result<(), DigipinError> {
        let json = r#"{"type":"Feature","properties":{},
            "geometry":{"type":"Point","coordinates":[72.8777,19.076]}}"#;
        let geom = parse_geometry(json)?;
        assert!(matches!(geom, Geometry::Point(_)));
        Ok(())
    }

    #[test]
    fn test_parse_geojson_feature_collection_rejected() {
        let json = r#"{"type":"FeatureCollection","features":[]}"#;
        assert!(matches!(
            parse_geometry(json),
            Err(DigipinError::GeometryParseError(_))
        ));
    }

    #[test]
    fn test_parse_wkt_point() -> Result<(), DigipinError> {
        let geom = parse_geometry("POINT(77.5946 12.9716)")?;
        match geom {
            Geometry::Point(pt) => {
                assert!((pt.x() - 77.5946).abs() < 0.001);
                assert!((pt.y() - 12.9716).abs() < 0.001);
            }
            _ => panic!("Expected Point"),
        }
        Ok(())
    }

    #[test]
    fn test_parse_garbage() {
        assert!(parse_geometry("not a geometry").is_err());
    }

    #[test]
    fn test_polygon_encodes_at_centroid() -> Result<(), DigipinError> {
        let points = parse_points("POLYGON((77 28, 78 28, 78 29, 77 29, 77 28))")?;

        assert_eq!(points.len(), 1);
        assert!((points[0].x() - 77.5).abs() < 1e-9);
        assert!((points[0].y() - 28.5).abs() < 1e-9);
        Ok(())
    }

    #[test]
    fn test_collection_points_flattened() -> Result<(), DigipinError> {
        let points = parse_points(concat!(
            "GEOMETRYCOLLECTION(POINT(77.209 28.6139),",
            "MULTIPOINT((72.8777 19.076),(77.5946 12.9716)))"
        ))?;
        assert_eq!(points.len(), 3);
        assert!((points[2].y() - 12.9716).abs() < 1e-9);
        Ok(())
    }

    #[test]
    fn test_empty_geometry_has_no_points() {
        for empty in ["MULTIPOINT EMPTY", "GEOMETRYCOLLECTION EMPTY"] {
            assert_eq!(
                parse_points(empty),
                Err(DigipinError::GeometryParseError(
                    "geometry has no encodable point".to_string()
                ))
            );
        }
    }
}
