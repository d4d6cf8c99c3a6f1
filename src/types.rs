use num::ToPrimitive;

use crate::util::{is_valid_coordinate, EARTH_MEAN_RADIUS};

/// A point on the sphere, in degrees.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    /// Unchecked; see `is_valid`.
    pub fn new(lat: f64, lon: f64) -> Coordinate {
        Coordinate { lat: lat, lon: lon }
    }

    /// Build a coordinate from any numeric pair. Returns None if either value does not convert
    /// to f64 or the resulting coordinate is not valid.
    pub fn from_lat_lon<N: ToPrimitive>(lat: N, lon: N) -> Option<Coordinate> {
        let c = Coordinate::new(lat.to_f64()?, lon.to_f64()?);
        if c.is_valid() {
            Some(c)
        } else {
            None
        }
    }

    /// Finite, latitude in [-90, 90] and longitude in [-180, 180].
    pub fn is_valid(&self) -> bool {
        is_valid_coordinate(self.lat, self.lon)
    }
}

/// Rectangle in lat/lon space specified by two corners.
///
/// ```text
///  -   NE
///
///  SW   -
/// ```
///
/// `south_west.lat <= north_east.lat` always holds for computed rectangles. Longitudes are not
/// ordered: `south_west.lon > north_east.lon` means the rectangle crosses the antimeridian.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct SphericalTrapezium {
    pub south_west: Coordinate,
    pub north_east: Coordinate,
}

/// The value every entry point returns when no rectangle could be computed.
pub const INVALID: Option<SphericalTrapezium> = None;

impl SphericalTrapezium {
    /// Rectangle with the given minimum and maximum corners.
    pub fn new(south_west: Coordinate, north_east: Coordinate) -> SphericalTrapezium {
        SphericalTrapezium {
            south_west: south_west,
            north_east: north_east,
        }
    }

    /// Whether the rectangle crosses the ±180° meridian.
    pub fn wraps_antimeridian(&self) -> bool {
        self.south_west.lon > self.north_east.lon
    }

    /// Membership test. When the rectangle wraps, a longitude is inside if it lies east of the
    /// western edge or west of the eastern edge.
    pub fn contains(&self, c: &Coordinate) -> bool {
        if c.lat < self.south_west.lat || c.lat > self.north_east.lat {
            return false;
        }
        if self.wraps_antimeridian() {
            c.lon >= self.south_west.lon || c.lon <= self.north_east.lon
        } else {
            c.lon >= self.south_west.lon && c.lon <= self.north_east.lon
        }
    }

    /// Latitude covered, in degrees.
    pub fn lat_span(&self) -> f64 {
        self.north_east.lat - self.south_west.lat
    }

    /// Longitude covered, in degrees, going east from the western edge.
    pub fn lon_span(&self) -> f64 {
        let span = self.north_east.lon - self.south_west.lon;
        if self.wraps_antimeridian() {
            span + 360.0
        } else {
            span
        }
    }
}

/// A radius search: every point within `distance` meters of `center` on a sphere of `radius`
/// meters.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistanceQuery {
    pub center: Coordinate,
    pub distance: f64,
    #[serde(default = "default_radius")]
    pub radius: f64,
}

fn default_radius() -> f64 {
    EARTH_MEAN_RADIUS
}

impl DistanceQuery {
    /// Query on the Earth's mean radius.
    pub fn new(center: Coordinate, distance: f64) -> DistanceQuery {
        DistanceQuery {
            center: center,
            distance: distance,
            radius: EARTH_MEAN_RADIUS,
        }
    }

    pub fn with_radius(self, radius: f64) -> DistanceQuery {
        DistanceQuery { radius: radius, ..self }
    }

    /// Evaluate the query. Invalid input gives None.
    pub fn bounds(&self) -> Option<SphericalTrapezium> {
        crate::bounds_from_coordinate_with_radius(self.center, self.distance, self.radius)
    }
}
