//! Reference projection fixtures.
//!
//! Each fixture pairs a fixed projector setup with one geographic point and
//! its independently computed planar coordinates, so forward tests can pin
//! absolute values instead of relying on round trips alone (a round trip
//! cannot see an axis-orientation or scale-convention mistake).

/// A known-good forward projection result for a fixed projector setup.
///
/// Angles are degrees, axes and expected coordinates meters; false offsets
/// are zero for every fixture.
#[derive(Debug, Clone, Copy)]
pub struct ReferenceProjection {
    pub major_semiaxis: f64,
    pub minor_semiaxis: f64,
    /// Lower/upper standard parallels for the conics; the secant latitude
    /// in both slots for stereographic setups.
    pub standard_parallels: (f64, f64),
    pub central_longitude: f64,
    pub central_latitude: f64,
    pub longitude: f64,
    pub latitude: f64,
    pub expected_x: f64,
    pub expected_y: f64,
}

/// Spherical 30/60 Lambert cone over CONUS.
pub fn conus_lambert_reference() -> ReferenceProjection {
    ReferenceProjection {
        major_semiaxis: 6370000.0,
        minor_semiaxis: 6370000.0,
        standard_parallels: (30.0, 60.0),
        central_longitude: -100.0,
        central_latitude: 40.0,
        longitude: -78.7268,
        latitude: 35.9611,
        expected_x: 1852180.851293,
        expected_y: -189978.517654,
    }
}

/// EPSG:5070-style Albers Equal-Area over CONUS.
pub fn conus_albers_reference() -> ReferenceProjection {
    ReferenceProjection {
        major_semiaxis: 6378137.0,
        minor_semiaxis: 6356752.3,
        standard_parallels: (29.5, 45.5),
        central_longitude: -96.0,
        central_latitude: 23.0,
        longitude: -78.7268,
        latitude: 35.9611,
        expected_x: 1535480.134265,
        expected_y: 1574311.082678,
    }
}

/// EPSG:3413-style north polar stereographic (true scale at 70N).
pub fn arctic_stereographic_reference() -> ReferenceProjection {
    ReferenceProjection {
        major_semiaxis: 6378137.0,
        minor_semiaxis: 6356752.3,
        standard_parallels: (70.0, 70.0),
        central_longitude: -45.0,
        central_latitude: 90.0,
        longitude: -150.0,
        latitude: 60.0,
        expected_x: -3209926.335592,
        expected_y: 860097.169385,
    }
}

/// EPSG:3031-style south polar stereographic (true scale at 71S).
///
/// The point sits due east of the central meridian, pinning the easting
/// sign of the southern aspect.
pub fn antarctic_stereographic_reference() -> ReferenceProjection {
    ReferenceProjection {
        major_semiaxis: 6378137.0,
        minor_semiaxis: 6356752.3,
        standard_parallels: (-71.0, -71.0),
        central_longitude: 0.0,
        central_latitude: -90.0,
        longitude: 90.0,
        latitude: -75.0,
        expected_x: 1638783.241839,
        expected_y: 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proj_common::validity::is_valid_longitude_latitude;

    #[test]
    fn test_fixture_points_are_valid() {
        for fixture in [
            conus_lambert_reference(),
            conus_albers_reference(),
            arctic_stereographic_reference(),
            antarctic_stereographic_reference(),
        ] {
            assert!(is_valid_longitude_latitude(fixture.longitude, fixture.latitude));
            assert!(fixture.expected_x.is_finite() && fixture.expected_y.is_finite());
        }
    }
}
