extern crate geojson;
extern crate num;
extern crate rayon;
extern crate serde_json;
#[macro_use]
extern crate serde_derive;
#[macro_use]
extern crate log;
extern crate thiserror;

use rayon::prelude::*;

mod types;
pub use crate::types::*;
mod error;
pub use crate::error::{BoundsError, BoundsResult};
mod geometry;
pub mod util;
pub use crate::util::EARTH_MEAN_RADIUS;

/// Compute the bounding rectangle of everything within `distance` meters of `center`, using the
/// Earth's mean radius. Returns None for an invalid center or a negative distance.
pub fn bounds_from_coordinate(center: Coordinate, distance: f64) -> Option<SphericalTrapezium> {
    bounds_from_coordinate_with_radius(center, distance, EARTH_MEAN_RADIUS)
}

/// Like `bounds_from_coordinate`, on a sphere of the given radius in meters.
pub fn bounds_from_coordinate_with_radius(center: Coordinate,
                                          distance: f64,
                                          radius: f64)
                                          -> Option<SphericalTrapezium> {
    try_bounds(center, distance, radius).ok()
}

/// Compute the bounding rectangle, reporting why the input was rejected.
pub fn try_bounds(center: Coordinate,
                  distance: f64,
                  radius: f64)
                  -> BoundsResult<SphericalTrapezium> {
    util::spherical_bounds(center, distance, radius).map_err(|e| {
        debug!("no bounds for {:?} at {} m: {}", center, distance, e);
        e
    })
}

/// Bounding rectangles for many centers at the same distance, computed in parallel. The output
/// lines up with `centers`.
pub fn bounds_many(centers: &[Coordinate], distance: f64) -> Vec<Option<SphericalTrapezium>> {
    centers.par_iter().map(|&c| bounds_from_coordinate(c, distance)).collect()
}

/// Sequential version of `bounds_many`.
pub fn bounds_many_slow(centers: &[Coordinate],
                        distance: f64)
                        -> Vec<Option<SphericalTrapezium>> {
    centers.iter().map(|&c| bounds_from_coordinate(c, distance)).collect()
}

/// `BoundingCoordinates` fixes a valid center coordinate and computes bounds around it for any
/// number of distances.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawBoundingCoordinates")]
pub struct BoundingCoordinates {
    center: Coordinate,
}

/// Unchecked form read by serde; converted through `BoundingCoordinates::new`.
#[derive(Deserialize)]
struct RawBoundingCoordinates {
    center: Coordinate,
}

impl ::std::convert::TryFrom<RawBoundingCoordinates> for BoundingCoordinates {
    type Error = BoundsError;

    fn try_from(raw: RawBoundingCoordinates) -> BoundsResult<BoundingCoordinates> {
        let c = raw.center;
        BoundingCoordinates::new(c).ok_or(BoundsError::InvalidCoordinate {
            lat: c.lat,
            lon: c.lon,
        })
    }
}

impl BoundingCoordinates {
    /// Returns None if the center is not a valid coordinate.
    pub fn new(center: Coordinate) -> Option<BoundingCoordinates> {
        if center.is_valid() {
            Some(BoundingCoordinates { center: center })
        } else {
            debug!("rejecting invalid center {:?}", center);
            None
        }
    }

    pub fn center(&self) -> Coordinate {
        self.center
    }

    /// Bounds for `distance` meters on the Earth. None if the distance is negative.
    pub fn bounds_with_distance(&self, distance: f64) -> Option<SphericalTrapezium> {
        self.bounds_with_distance_and_radius(distance, EARTH_MEAN_RADIUS)
    }

    /// Bounds for `distance` meters on a sphere of `radius` meters. None if either is negative.
    pub fn bounds_with_distance_and_radius(&self,
                                           distance: f64,
                                           radius: f64)
                                           -> Option<SphericalTrapezium> {
        bounds_from_coordinate_with_radius(self.center, distance, radius)
    }
}
