//! Planet ellipsoid model and the reference ellipsoid table.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::fuzzy::about_equal;
use crate::validity::is_valid_ellipsoid;

/// Oblate-spheroid approximation of the planet, defined by its semiaxes in
/// meters.
///
/// Weather-model grids describe their planet in dataset metadata as either a
/// true ellipsoid (WGS84, GRS80, Clarke 1866) or a fixed-radius sphere; both
/// are represented here with `major_semiaxis == minor_semiaxis` marking the
/// spherical case.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ellipsoid {
    /// Equatorial semiaxis (meters).
    pub major_semiaxis: f64,
    /// Polar semiaxis (meters).
    pub minor_semiaxis: f64,
}

/// WGS84 reference ellipsoid.
pub const WGS84: Ellipsoid = Ellipsoid::from_axes(6378137.0, 6356752.3);

/// GRS80 reference ellipsoid.
pub const GRS80: Ellipsoid = Ellipsoid::from_axes(6378137.0, 6356752.31414);

/// Clarke 1866 reference ellipsoid (NAD27 datums).
pub const CLARKE_1866: Ellipsoid = Ellipsoid::from_axes(6378206.4, 6356583.8);

/// Mean-Earth sphere used by GRIB-encoded NWP grids (HRRR, NAM, GFS).
pub const SPHERE_6371229: Ellipsoid = Ellipsoid::from_axes(6371229.0, 6371229.0);

/// Round-radius sphere used by several mesoscale model grids.
pub const SPHERE_6370000: Ellipsoid = Ellipsoid::from_axes(6370000.0, 6370000.0);

impl Ellipsoid {
    /// Build an ellipsoid without validation. Used for the constant table;
    /// external callers go through [`Ellipsoid::new`].
    pub const fn from_axes(major_semiaxis: f64, minor_semiaxis: f64) -> Self {
        Self {
            major_semiaxis,
            minor_semiaxis,
        }
    }

    /// Build a validated ellipsoid from its semiaxes in meters.
    pub fn new(major_semiaxis: f64, minor_semiaxis: f64) -> Result<Self, EllipsoidError> {
        if !is_valid_ellipsoid(major_semiaxis, minor_semiaxis) {
            return Err(EllipsoidError::InvalidAxes {
                major_semiaxis,
                minor_semiaxis,
            });
        }
        Ok(Self {
            major_semiaxis,
            minor_semiaxis,
        })
    }

    /// Build a validated sphere of the given radius in meters.
    pub fn sphere(radius: f64) -> Result<Self, EllipsoidError> {
        Self::new(radius, radius)
    }

    /// True when the two semiaxes agree within the global tolerance, so the
    /// spherical closed forms apply.
    pub fn is_sphere(&self) -> bool {
        about_equal(self.major_semiaxis, self.minor_semiaxis)
    }

    /// First eccentricity, in `[0, 1]`.
    ///
    /// Exactly zero for spheres; otherwise `sqrt(1 - (b/a)^2)`, clamped
    /// against rounding so a degenerate axis ratio can never push it above 1.
    pub fn eccentricity(&self) -> f64 {
        if self.is_sphere() {
            return 0.0;
        }
        let ratio = self.minor_semiaxis / self.major_semiaxis;
        (1.0 - ratio * ratio).sqrt().min(1.0)
    }
}

/// Ellipsoid construction failure.
#[derive(Debug, Error)]
pub enum EllipsoidError {
    #[error("invalid ellipsoid axes: major={major_semiaxis}, minor={minor_semiaxis}")]
    InvalidAxes {
        major_semiaxis: f64,
        minor_semiaxis: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_reference_table() {
        assert_eq!(WGS84.major_semiaxis, 6378137.0);
        assert_eq!(WGS84.minor_semiaxis, 6356752.3);
        assert_eq!(GRS80.major_semiaxis, 6378137.0);
        assert_eq!(GRS80.minor_semiaxis, 6356752.31414);
        assert_eq!(CLARKE_1866.major_semiaxis, 6378206.4);
        assert_eq!(CLARKE_1866.minor_semiaxis, 6356583.8);
        assert_eq!(SPHERE_6371229.major_semiaxis, 6371229.0);
        assert_eq!(SPHERE_6370000.minor_semiaxis, 6370000.0);
    }

    #[test]
    fn test_eccentricity() {
        assert_eq!(SPHERE_6371229.eccentricity(), 0.0);
        assert_relative_eq!(WGS84.eccentricity(), 0.0818192, epsilon = 1e-6);
        assert_relative_eq!(CLARKE_1866.eccentricity(), 0.0822719, epsilon = 1e-6);
        for e in [WGS84, GRS80, CLARKE_1866, SPHERE_6371229, SPHERE_6370000] {
            let ecc = e.eccentricity();
            assert!((0.0..=1.0).contains(&ecc));
            assert!(!ecc.is_nan());
        }
    }

    #[test]
    fn test_new_rejects_bad_axes() {
        assert!(Ellipsoid::new(6356752.3, 6378137.0).is_err());
        assert!(Ellipsoid::new(0.0, 0.0).is_err());
        assert!(Ellipsoid::new(f64::NAN, 6356752.3).is_err());
        assert!(Ellipsoid::new(6378137.0, 6356752.3).is_ok());
    }

    #[test]
    fn test_sphere_constructor() {
        assert_eq!(Ellipsoid::sphere(6371229.0).unwrap(), SPHERE_6371229);
        assert!(Ellipsoid::sphere(6371229.0).unwrap().is_sphere());
        assert!(Ellipsoid::sphere(0.0).is_err());
        assert!(Ellipsoid::sphere(f64::NAN).is_err());
    }

    #[test]
    fn test_is_sphere() {
        assert!(SPHERE_6370000.is_sphere());
        assert!(!WGS84.is_sphere());
    }
}
