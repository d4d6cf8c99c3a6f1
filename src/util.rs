use std::f64::consts::{FRAC_PI_2, PI};

use crate::error::{BoundsError, BoundsResult};
use crate::types::{Coordinate, SphericalTrapezium};

/// Mean radius of the Earth, in meters.
pub const EARTH_MEAN_RADIUS: f64 = 6_371_000.0;

/// Check that both values are finite and within [-90, 90] latitude and [-180, 180] longitude.
pub fn is_valid_coordinate(lat: f64, lon: f64) -> bool {
    lat.is_finite() && lon.is_finite() && lat >= -90.0 && lat <= 90.0 && lon >= -180.0 &&
    lon <= 180.0
}

/// Compute the smallest lat/lon rectangle containing every point of the sphere whose
/// great-circle distance from `center` is at most `distance`. Both `distance` and `radius` are
/// in meters.
///
/// See http://JanMatuschek.de/LatitudeLongitudeBoundingCoordinates for the derivation.
pub fn spherical_bounds(center: Coordinate,
                        distance: f64,
                        radius: f64)
                        -> BoundsResult<SphericalTrapezium> {
    if !center.is_valid() {
        return Err(BoundsError::InvalidCoordinate {
            lat: center.lat,
            lon: center.lon,
        });
    }
    // Negated comparisons so NaN is rejected too.
    if !(distance >= 0.0) {
        return Err(BoundsError::NegativeDistance(distance));
    }
    if !(radius >= 0.0) {
        return Err(BoundsError::NegativeRadius(radius));
    }
    if distance == 0.0 {
        return Ok(SphericalTrapezium::new(center, center));
    }

    // Angular radius of the cap.
    let rad_dist = distance / radius;
    let rad_lat = center.lat.to_radians();
    let rad_lon = center.lon.to_radians();

    let min_lat = rad_lat - rad_dist;
    let max_lat = rad_lat + rad_dist;

    let bounds = if min_lat > -FRAC_PI_2 && max_lat < FRAC_PI_2 {
        let delta_lon = (rad_dist.sin() / rad_lat.cos()).asin();
        let mut min_lon = rad_lon - delta_lon;
        if min_lon < -PI {
            min_lon += 2.0 * PI;
        }
        let mut max_lon = rad_lon + delta_lon;
        if max_lon > PI {
            max_lon -= 2.0 * PI;
        }
        trace!("bounded longitude, delta {} rad", delta_lon);
        SphericalTrapezium::new(Coordinate::new(min_lat.to_degrees(), min_lon.to_degrees()),
                                Coordinate::new(max_lat.to_degrees(), max_lon.to_degrees()))
    } else {
        // A pole is inside the cap (or on its edge): every meridian passes through it.
        trace!("cap contains a pole, using full longitude range");
        SphericalTrapezium::new(Coordinate::new(::num::clamp(min_lat.to_degrees(), -90.0, 90.0),
                                                -180.0),
                                Coordinate::new(::num::clamp(max_lat.to_degrees(), -90.0, 90.0),
                                                180.0))
    };

    let sw = bounds.south_west;
    let ne = bounds.north_east;
    if [sw.lat, sw.lon, ne.lat, ne.lon].iter().all(|v| v.is_finite()) {
        Ok(bounds)
    } else {
        Err(BoundsError::NonFinite)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validity() {
        assert!(is_valid_coordinate(0.0, 0.0));
        assert!(is_valid_coordinate(90.0, 180.0));
        assert!(is_valid_coordinate(-90.0, -180.0));
        assert!(!is_valid_coordinate(90.0001, 0.0));
        assert!(!is_valid_coordinate(0.0, -180.0001));
        assert!(!is_valid_coordinate(::std::f64::NAN, 0.0));
        assert!(!is_valid_coordinate(0.0, ::std::f64::INFINITY));
    }

    #[test]
    fn rejects_bad_input() {
        let c = Coordinate::new(0.0, 0.0);
        assert_eq!(spherical_bounds(Coordinate::new(95.0, 0.0), 1.0, EARTH_MEAN_RADIUS),
                   Err(BoundsError::InvalidCoordinate { lat: 95.0, lon: 0.0 }));
        assert_eq!(spherical_bounds(c, -1.0, EARTH_MEAN_RADIUS),
                   Err(BoundsError::NegativeDistance(-1.0)));
        assert_eq!(spherical_bounds(c, 1.0, -1.0),
                   Err(BoundsError::NegativeRadius(-1.0)));
        match spherical_bounds(c, ::std::f64::NAN, EARTH_MEAN_RADIUS) {
            Err(BoundsError::NegativeDistance(d)) => assert!(d.is_nan()),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn zero_distance_is_degenerate() {
        for &(lat, lon) in &[(0.0, 0.0), (90.0, 10.0), (-90.0, -180.0), (45.0, 180.0)] {
            let c = Coordinate::new(lat, lon);
            let b = spherical_bounds(c, 0.0, EARTH_MEAN_RADIUS).unwrap();
            assert_eq!(b.south_west, c);
            assert_eq!(b.north_east, c);
        }
        let c = Coordinate::new(1.0, 1.0);
        assert!(spherical_bounds(c, 0.0, 0.0).is_ok());
    }

    #[test]
    fn zero_radius_covers_globe() {
        let b = spherical_bounds(Coordinate::new(10.0, 10.0), 1.0, 0.0).unwrap();
        assert_eq!(b.south_west, Coordinate::new(-90.0, -180.0));
        assert_eq!(b.north_east, Coordinate::new(90.0, 180.0));
    }

    #[test]
    fn infinite_distance_covers_globe() {
        let b = spherical_bounds(Coordinate::new(-45.0, 120.0), ::std::f64::INFINITY,
                                 EARTH_MEAN_RADIUS)
            .unwrap();
        assert_eq!(b.south_west, Coordinate::new(-90.0, -180.0));
        assert_eq!(b.north_east, Coordinate::new(90.0, 180.0));
    }

    #[test]
    fn nan_angular_radius_is_non_finite() {
        let inf = ::std::f64::INFINITY;
        assert_eq!(spherical_bounds(Coordinate::new(0.0, 0.0), inf, inf),
                   Err(BoundsError::NonFinite));
    }

    #[test]
    fn exact_pole_contact_takes_full_range() {
        // Cap from the equator reaching exactly the north pole.
        let b = spherical_bounds(Coordinate::new(0.0, 30.0), FRAC_PI_2, 1.0).unwrap();
        assert_eq!(b.south_west.lon, -180.0);
        assert_eq!(b.north_east.lon, 180.0);
        assert_eq!(b.north_east.lat, 90.0);
        assert_eq!(b.south_west.lat, -90.0);
    }

    #[test]
    fn south_pole() {
        let b = spherical_bounds(Coordinate::new(-89.5, 45.0), 100_000.0, EARTH_MEAN_RADIUS)
            .unwrap();
        assert_eq!(b.south_west.lat, -90.0);
        assert_eq!(b.south_west.lon, -180.0);
        assert_eq!(b.north_east.lon, 180.0);
        assert!(b.north_east.lat > -89.5);
    }

    #[test]
    fn wraps_west_of_antimeridian() {
        let b = spherical_bounds(Coordinate::new(0.0, -179.9), 50_000.0, EARTH_MEAN_RADIUS)
            .unwrap();
        assert!(b.wraps_antimeridian());
        assert!(b.south_west.lon > 179.0);
        assert!(b.north_east.lon < -179.0);
    }
}
