use geojson::{Geometry, PolygonType, Value};

use crate::types::SphericalTrapezium;

/// Closed lon/lat ring around the given edges, counter-clockwise.
fn ring(south: f64, west: f64, north: f64, east: f64) -> PolygonType {
    vec![vec![vec![west, south],
              vec![east, south],
              vec![east, north],
              vec![west, north],
              vec![west, south]]]
}

impl SphericalTrapezium {
    /// Express the rectangle as GeoJSON. A rectangle that crosses the antimeridian becomes a
    /// MultiPolygon split at ±180°, since GeoJSON consumers read longitudes linearly.
    pub fn to_geometry(&self) -> Geometry {
        let south = self.south_west.lat;
        let north = self.north_east.lat;
        let west = self.south_west.lon;
        let east = self.north_east.lon;
        if self.wraps_antimeridian() {
            Geometry::new(Value::MultiPolygon(vec![ring(south, west, north, 180.0),
                                                   ring(south, -180.0, north, east)]))
        } else {
            Geometry::new(Value::Polygon(ring(south, west, north, east)))
        }
    }
}

impl From<SphericalTrapezium> for Geometry {
    fn from(b: SphericalTrapezium) -> Geometry {
        b.to_geometry()
    }
}
