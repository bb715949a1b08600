//! Deterministic geographic point generators.
//!
//! Every function here returns the same points on every call, so failures
//! reproduce exactly and tests never depend on a random seed.

use proj_common::validity::all_valid_longitude_latitude;

/// Points spread over the continental United States.
///
/// Covers the interior of a typical CONUS forecast grid: the four corners,
/// the center, and a handful of cities. Suitable for Lambert and Albers
/// setups with standard parallels in the 25-50 degree band.
///
/// # Example
///
/// ```
/// use test_utils::conus_sample_points;
///
/// let points = conus_sample_points();
/// assert!(points.iter().all(|&(lon, _)| (-130.0..=-60.0).contains(&lon)));
/// ```
pub fn conus_sample_points() -> Vec<(f64, f64)> {
    let points = vec![
        (-124.5, 48.4), // Pacific Northwest corner
        (-117.1, 32.7),
        (-104.9, 39.7),
        (-96.0, 39.0), // typical grid center
        (-90.1, 29.9),
        (-87.6, 41.9),
        (-78.7268, 35.9611),
        (-71.1, 42.4),
        (-80.2, 25.8), // Florida corner
        (-66.9, 44.8),
    ];
    debug_assert!(all_valid_longitude_latitude(&points));
    points
}

/// Points in the southern hemisphere mid-latitudes.
///
/// Exercises the southern-cone branch of the conics (negative cone
/// constant) and southern polar stereographic setups. Includes a point on
/// the far side of the antimeridian from an Australian central meridian.
pub fn southern_sample_points() -> Vec<(f64, f64)> {
    let points = vec![
        (133.9, -23.7),
        (151.2, -33.9),
        (115.9, -31.9),
        (174.8, -36.8),
        (-70.7, -33.4),
        (-58.4, -34.6),
        (18.4, -33.9),
        (-175.2, -21.1), // across the antimeridian from 140E
    ];
    debug_assert!(all_valid_longitude_latitude(&points));
    points
}

/// High-latitude points for polar-aspect testing.
///
/// All latitudes are poleward of 55 degrees in the requested hemisphere;
/// longitudes sweep the full circle.
pub fn polar_sample_points(north: bool) -> Vec<(f64, f64)> {
    let sign = if north { 1.0 } else { -1.0 };
    let points: Vec<(f64, f64)> = [
        (-45.0, 70.0),
        (0.0, 82.5),
        (60.0, 66.6),
        (135.0, 58.0),
        (180.0, 75.0),
        (-120.0, 61.3),
        (-90.0, 89.0),
    ]
    .iter()
    .map(|&(lon, lat)| (lon, sign * lat))
    .collect();
    debug_assert!(all_valid_longitude_latitude(&points));
    points
}

/// A coarse global graticule.
///
/// Longitude every `lon_step` degrees in `[-180, 180)`, latitude every
/// `lat_step` degrees in `[-80, 80]`. Poles are excluded on purpose; the
/// singularity handling there is covered by dedicated tests.
///
/// # Panics
///
/// Panics if either step is not strictly positive.
pub fn graticule_points(lon_step: f64, lat_step: f64) -> Vec<(f64, f64)> {
    assert!(lon_step > 0.0 && lat_step > 0.0, "steps must be positive");
    let mut points = Vec::new();
    let mut lat = -80.0;
    while lat <= 80.0 {
        let mut lon = -180.0;
        while lon < 180.0 {
            points.push((lon, lat));
            lon += lon_step;
        }
        lat += lat_step;
    }
    debug_assert!(all_valid_longitude_latitude(&points));
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_sets_are_valid_and_deterministic() {
        assert_eq!(conus_sample_points(), conus_sample_points());
        assert!(all_valid_longitude_latitude(&conus_sample_points()));
        assert!(all_valid_longitude_latitude(&southern_sample_points()));
        assert!(all_valid_longitude_latitude(&polar_sample_points(true)));
        assert!(all_valid_longitude_latitude(&polar_sample_points(false)));
    }

    #[test]
    fn test_polar_points_respect_hemisphere() {
        assert!(polar_sample_points(true).iter().all(|&(_, lat)| lat > 55.0));
        assert!(polar_sample_points(false).iter().all(|&(_, lat)| lat < -55.0));
    }

    #[test]
    fn test_graticule_bounds() {
        let points = graticule_points(30.0, 20.0);
        assert!(!points.is_empty());
        assert!(points
            .iter()
            .all(|&(lon, lat)| (-180.0..180.0).contains(&lon) && (-80.0..=80.0).contains(&lat)));
    }
}
