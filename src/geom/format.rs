use geo_types::Polygon;
use wkt::ToWkt;

/// Output format for cell polygon geometries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryFormat {
    /// Well-Known Text format (e.g., "POLYGON((...))")
    Wkt,
    /// GeoJSON format
    GeoJson,
}

impl GeometryFormat {
    pub fn render(self, polygon: &Polygon<f64>) -> String {
        match self {
            GeometryFormat::Wkt => polygon_to_wkt(polygon),
            GeometryFormat::GeoJson => polygon_to_geojson(polygon),
        }
    }
}

pub fn polygon_to_wkt(polygon: &Polygon<f64>) -> String {
    polygon.wkt_string()
}

pub fn polygon_to_geojson(polygon: &Polygon<f64>) -> String {
    geojson::Geometry::from(polygon).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::INDIA_BOUNDS;

    #[test]
    fn test_polygon_to_wkt() {
        let wkt = polygon_to_wkt(&INDIA_BOUNDS.to_polygon());
        assert!(wkt.starts_with("POLYGON"));
        assert!(wkt.contains("63.5 2.5"));
    }

    #[test]
    fn test_polygon_to_geojson() {
        let json = GeometryFormat::GeoJson.render(&INDIA_BOUNDS.to_polygon());
        assert!(json.contains("\"Polygon\""));
        assert!(json.contains("99.5"));
    }
}
