//! Projection parameter sets and their validation rules.

use serde::{Deserialize, Serialize};

use proj_common::validity::{is_valid_latitude, is_valid_longitude};

use crate::error::{ProjectionError, ProjectionResult};

/// Parameters shared by the conic variants (Lambert, Albers).
///
/// Latitudes and longitudes are degrees, offsets are meters. The standard
/// parallels must share a hemisphere, each with magnitude in `[1, 89]`, and
/// satisfy `lower_latitude <= upper_latitude`; equal parallels select the
/// tangent-cone case.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConicParameters {
    pub lower_latitude: f64,
    pub upper_latitude: f64,
    pub central_longitude: f64,
    pub central_latitude: f64,
    pub false_easting: f64,
    pub false_northing: f64,
}

impl ConicParameters {
    /// Check every field against its contractual range.
    pub fn validate(&self) -> ProjectionResult<()> {
        if !valid_standard_parallel(self.lower_latitude)
            || !valid_standard_parallel(self.upper_latitude)
            || self.lower_latitude > self.upper_latitude
            || self.lower_latitude.signum() != self.upper_latitude.signum()
        {
            return Err(ProjectionError::InvalidStandardParallels {
                lower: self.lower_latitude,
                upper: self.upper_latitude,
            });
        }
        if !is_valid_longitude(self.central_longitude) {
            return Err(ProjectionError::InvalidCentralLongitude(
                self.central_longitude,
            ));
        }
        if !(-89.0..=89.0).contains(&self.central_latitude) {
            return Err(ProjectionError::InvalidCentralLatitude(
                self.central_latitude,
            ));
        }
        check_offset(self.false_easting)?;
        check_offset(self.false_northing)?;
        Ok(())
    }
}

/// Parameters for the stereographic variant.
///
/// A single secant (true-scale) latitude replaces the conic parallel pair.
/// The central latitude may reach the poles, which selects the polar aspect.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StereographicParameters {
    pub secant_latitude: f64,
    pub central_longitude: f64,
    pub central_latitude: f64,
    pub false_easting: f64,
    pub false_northing: f64,
}

impl StereographicParameters {
    /// Check every field against its contractual range.
    pub fn validate(&self) -> ProjectionResult<()> {
        if !is_valid_latitude(self.secant_latitude) {
            return Err(ProjectionError::InvalidSecantLatitude(self.secant_latitude));
        }
        if !is_valid_longitude(self.central_longitude) {
            return Err(ProjectionError::InvalidCentralLongitude(
                self.central_longitude,
            ));
        }
        if !is_valid_latitude(self.central_latitude) {
            return Err(ProjectionError::InvalidCentralLatitude(
                self.central_latitude,
            ));
        }
        check_offset(self.false_easting)?;
        check_offset(self.false_northing)?;
        Ok(())
    }
}

/// Standard parallels live in `[1, 89]` or `[-89, -1]` by hemisphere.
fn valid_standard_parallel(lat: f64) -> bool {
    (1.0..=89.0).contains(&lat.abs())
}

fn check_offset(v: f64) -> ProjectionResult<()> {
    if v.is_finite() {
        Ok(())
    } else {
        Err(ProjectionError::NonFiniteOffset(v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn conus() -> ConicParameters {
        ConicParameters {
            lower_latitude: 33.0,
            upper_latitude: 45.0,
            central_longitude: -96.0,
            central_latitude: 39.0,
            false_easting: 0.0,
            false_northing: 0.0,
        }
    }

    #[test]
    fn test_conic_valid() {
        assert!(conus().validate().is_ok());

        // Southern hemisphere pair.
        let southern = ConicParameters {
            lower_latitude: -60.0,
            upper_latitude: -30.0,
            central_longitude: 150.0,
            central_latitude: -40.0,
            ..conus()
        };
        assert!(southern.validate().is_ok());
    }

    #[test]
    fn test_conic_rejects_misordered_parallels() {
        let p = ConicParameters {
            lower_latitude: 45.0,
            upper_latitude: 33.0,
            ..conus()
        };
        assert!(matches!(
            p.validate(),
            Err(ProjectionError::InvalidStandardParallels { .. })
        ));
    }

    #[test]
    fn test_conic_rejects_mixed_hemispheres() {
        let p = ConicParameters {
            lower_latitude: -30.0,
            upper_latitude: 30.0,
            ..conus()
        };
        assert!(p.validate().is_err());
    }

    #[test]
    fn test_conic_rejects_out_of_band_parallel() {
        for bad in [0.5, 89.5, -0.2, -90.0] {
            let p = ConicParameters {
                lower_latitude: bad,
                upper_latitude: bad.max(1.0),
                ..conus()
            };
            assert!(p.validate().is_err(), "parallel {} accepted", bad);
        }
    }

    #[test]
    fn test_conic_rejects_bad_central_coordinates() {
        let p = ConicParameters {
            central_longitude: 200.0,
            ..conus()
        };
        assert!(matches!(
            p.validate(),
            Err(ProjectionError::InvalidCentralLongitude(_))
        ));

        let p = ConicParameters {
            central_latitude: 90.0,
            ..conus()
        };
        assert!(matches!(
            p.validate(),
            Err(ProjectionError::InvalidCentralLatitude(_))
        ));
    }

    #[test]
    fn test_conic_rejects_non_finite_offsets() {
        let p = ConicParameters {
            false_easting: f64::NAN,
            ..conus()
        };
        assert!(matches!(
            p.validate(),
            Err(ProjectionError::NonFiniteOffset(_))
        ));
    }

    #[test]
    fn test_stereographic_allows_polar_center() {
        let p = StereographicParameters {
            secant_latitude: 70.0,
            central_longitude: -45.0,
            central_latitude: 90.0,
            false_easting: 0.0,
            false_northing: 0.0,
        };
        assert!(p.validate().is_ok());
    }

    #[test]
    fn test_stereographic_rejects_bad_secant() {
        let p = StereographicParameters {
            secant_latitude: 91.0,
            central_longitude: 0.0,
            central_latitude: 90.0,
            false_easting: 0.0,
            false_northing: 0.0,
        };
        assert!(matches!(
            p.validate(),
            Err(ProjectionError::InvalidSecantLatitude(_))
        ));
    }
}
