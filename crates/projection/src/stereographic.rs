//! Polar and oblique Stereographic projection.
//!
//! A single variant covers both aspects: a central latitude within
//! tolerance of a pole selects the polar formulas, anything else the
//! oblique ones (which include the equatorial case). The secant latitude
//! sets where scale is true; for the oblique aspect it enters as a scale
//! factor relative to the projection center.

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

use tracing::trace;

use proj_common::auxiliary::{msfn, phi2, ssfn, tsfn, PROJECTION_TOLERANCE};
use proj_common::ellipsoid::Ellipsoid;
use proj_common::validity::is_valid_ellipsoid;
use proj_common::wrap_longitude;

use crate::error::{ProjectionError, ProjectionResult};
use crate::params::StereographicParameters;
use crate::support::forward_inputs;
use crate::Projector;

const NAME: &str = "stereographic";

/// Planar radii below this are treated as the projection center.
const CENTER_RHO: f64 = 1.0e-14;

/// Aspect-specific constants; which arm is active depends only on the
/// central latitude.
#[derive(Debug, Clone, Copy)]
enum Aspect {
    Polar {
        north: bool,
        /// Radius scale constant mapping the conformal auxiliary `t` to
        /// the dimensionless planar radius.
        c: f64,
    },
    Oblique {
        /// Conformal latitude of the projection center.
        sin_chi0: f64,
        cos_chi0: f64,
        /// Combined scale constant (`2 k0 m0` in Snyder's notation).
        akm1: f64,
    },
}

#[derive(Debug, Clone, Copy)]
struct DerivedTerms {
    eccentricity: f64,
    /// Central longitude in radians.
    lambda0: f64,
    aspect: Aspect,
}

/// Stereographic projector instance (polar or oblique aspect).
#[derive(Debug, Clone)]
pub struct StereographicProjector {
    ellipsoid: Ellipsoid,
    params: StereographicParameters,
    terms: DerivedTerms,
}

impl StereographicProjector {
    /// Construct from scalar inputs (axes in meters, angles in degrees,
    /// offsets in meters). A central latitude of exactly +/-90 selects the
    /// polar aspect.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        major_semiaxis: f64,
        minor_semiaxis: f64,
        secant_latitude: f64,
        central_longitude: f64,
        central_latitude: f64,
        false_easting: f64,
        false_northing: f64,
    ) -> ProjectionResult<Self> {
        let ellipsoid = Ellipsoid::new(major_semiaxis, minor_semiaxis).map_err(|_| {
            ProjectionError::InvalidEllipsoid {
                major: major_semiaxis,
                minor: minor_semiaxis,
            }
        })?;
        Self::from_parts(
            ellipsoid,
            StereographicParameters {
                secant_latitude,
                central_longitude,
                central_latitude,
                false_easting,
                false_northing,
            },
        )
    }

    /// Construct from an already-assembled ellipsoid and parameter set.
    pub fn from_parts(
        ellipsoid: Ellipsoid,
        params: StereographicParameters,
    ) -> ProjectionResult<Self> {
        if !is_valid_ellipsoid(ellipsoid.major_semiaxis, ellipsoid.minor_semiaxis) {
            return Err(ProjectionError::InvalidEllipsoid {
                major: ellipsoid.major_semiaxis,
                minor: ellipsoid.minor_semiaxis,
            });
        }
        params.validate()?;
        let mut projector = Self {
            ellipsoid,
            params,
            terms: Self::compute_terms(&ellipsoid, &params),
        };
        projector.log_and_check();
        Ok(projector)
    }

    fn compute_terms(ellipsoid: &Ellipsoid, params: &StereographicParameters) -> DerivedTerms {
        let e = ellipsoid.eccentricity();
        let es = e * e;
        let sphere = e == 0.0;
        let phi_ts = params.secant_latitude.to_radians();
        let phi0 = params.central_latitude.to_radians();
        let lambda0 = params.central_longitude.to_radians();

        let aspect = if (phi0.abs() - FRAC_PI_2).abs() < PROJECTION_TOLERANCE {
            let ts_abs = phi_ts.abs();
            let c = if (FRAC_PI_2 - ts_abs).abs() < PROJECTION_TOLERANCE {
                // True scale at the pole itself.
                if sphere {
                    2.0
                } else {
                    2.0 / ((1.0 + e).powf(1.0 + e) * (1.0 - e).powf(1.0 - e)).sqrt()
                }
            } else if sphere {
                1.0 + ts_abs.sin()
            } else {
                msfn(ts_abs.sin(), ts_abs.cos(), es) / tsfn(ts_abs, ts_abs.sin(), e)
            };
            Aspect::Polar { north: phi0 >= 0.0, c }
        } else {
            let chi0 = if sphere {
                phi0
            } else {
                2.0 * ssfn(phi0, phi0.sin(), e).atan() - FRAC_PI_2
            };
            let k0 = if (phi_ts - phi0).abs() < PROJECTION_TOLERANCE {
                1.0
            } else {
                msfn(phi_ts.sin(), phi_ts.cos(), es) / msfn(phi0.sin(), phi0.cos(), es)
            };
            Aspect::Oblique {
                sin_chi0: chi0.sin(),
                cos_chi0: chi0.cos(),
                akm1: 2.0 * k0 * phi0.cos() / (1.0 - es * phi0.sin() * phi0.sin()).sqrt(),
            }
        };

        DerivedTerms {
            eccentricity: e,
            lambda0,
            aspect,
        }
    }

    fn log_and_check(&mut self) {
        trace!(
            projection = NAME,
            aspect = ?self.terms.aspect,
            "recomputed derived terms"
        );
        debug_assert!(self.invariants_hold());
    }

    fn invariants_hold(&self) -> bool {
        let t = &self.terms;
        let aspect_ok = match t.aspect {
            Aspect::Polar { c, .. } => c.is_finite() && c > 0.0,
            Aspect::Oblique {
                sin_chi0,
                cos_chi0,
                akm1,
            } => sin_chi0.is_finite() && cos_chi0.is_finite() && akm1.is_finite(),
        };
        is_valid_ellipsoid(self.ellipsoid.major_semiaxis, self.ellipsoid.minor_semiaxis)
            && self.params.validate().is_ok()
            && (0.0..=1.0).contains(&t.eccentricity)
            && !t.lambda0.is_nan()
            && aspect_ok
    }
}

impl Projector for StereographicProjector {
    fn name(&self) -> &'static str {
        NAME
    }

    fn ellipsoid(&self) -> Ellipsoid {
        self.ellipsoid
    }

    /// The secant latitude, reported twice to fit the common shape.
    fn standard_parallels(&self) -> (f64, f64) {
        (self.params.secant_latitude, self.params.secant_latitude)
    }

    fn central_longitude(&self) -> f64 {
        self.params.central_longitude
    }

    fn central_latitude(&self) -> f64 {
        self.params.central_latitude
    }

    fn false_easting(&self) -> f64 {
        self.params.false_easting
    }

    fn false_northing(&self) -> f64 {
        self.params.false_northing
    }

    fn set_ellipsoid(
        &mut self,
        major_semiaxis: f64,
        minor_semiaxis: f64,
    ) -> ProjectionResult<()> {
        if !is_valid_ellipsoid(major_semiaxis, minor_semiaxis) {
            return Err(ProjectionError::InvalidEllipsoid {
                major: major_semiaxis,
                minor: minor_semiaxis,
            });
        }
        self.ellipsoid = Ellipsoid::from_axes(major_semiaxis, minor_semiaxis);
        self.terms = Self::compute_terms(&self.ellipsoid, &self.params);
        self.log_and_check();
        Ok(())
    }

    fn set_false_easting(&mut self, meters: f64) -> ProjectionResult<()> {
        if !meters.is_finite() {
            return Err(ProjectionError::NonFiniteOffset(meters));
        }
        self.params.false_easting = meters;
        Ok(())
    }

    fn set_false_northing(&mut self, meters: f64) -> ProjectionResult<()> {
        if !meters.is_finite() {
            return Err(ProjectionError::NonFiniteOffset(meters));
        }
        self.params.false_northing = meters;
        Ok(())
    }

    fn project(&self, longitude: f64, latitude: f64) -> (f64, f64) {
        let t = &self.terms;
        let (delta, phi) = forward_inputs(longitude, latitude, t.lambda0);
        let a = self.ellipsoid.major_semiaxis;
        let e = t.eccentricity;

        match t.aspect {
            Aspect::Polar { north, c } => {
                let sign = if north { 1.0 } else { -1.0 };
                // Fold the southern aspect onto the northern formulas. East
                // stays +x in both hemispheres; only the northing flips.
                let pa = sign * phi;
                let ts = if e == 0.0 {
                    (FRAC_PI_4 - 0.5 * pa).tan()
                } else {
                    tsfn(pa, pa.sin(), e)
                };
                let rho = c * ts;
                (
                    rho * delta.sin() * a + self.params.false_easting,
                    -sign * rho * delta.cos() * a + self.params.false_northing,
                )
            }
            Aspect::Oblique {
                sin_chi0,
                cos_chi0,
                akm1,
            } => {
                let chi = if e == 0.0 {
                    phi
                } else {
                    2.0 * ssfn(phi, phi.sin(), e).atan() - FRAC_PI_2
                };
                let (sin_chi, cos_chi) = (chi.sin(), chi.cos());
                let denom = cos_chi0 * (1.0 + sin_chi0 * sin_chi + cos_chi0 * cos_chi * delta.cos());
                let aa = akm1 / denom;
                (
                    aa * cos_chi * delta.sin() * a + self.params.false_easting,
                    aa * (cos_chi0 * sin_chi - sin_chi0 * cos_chi * delta.cos()) * a
                        + self.params.false_northing,
                )
            }
        }
    }

    fn unproject(&self, x: f64, y: f64) -> (f64, f64) {
        let t = &self.terms;
        let a = self.ellipsoid.major_semiaxis;
        let e = t.eccentricity;
        let xp = (x - self.params.false_easting) / a;
        let yp = (y - self.params.false_northing) / a;
        let rho = xp.hypot(yp);

        match t.aspect {
            Aspect::Polar { north, c } => {
                let sign = if north { 1.0 } else { -1.0 };
                if rho < CENTER_RHO {
                    return (wrap_longitude(self.params.central_longitude), sign * 90.0);
                }
                let (xa, ya) = if north { (xp, -yp) } else { (xp, yp) };
                let ts = rho / c;
                let pa = if e == 0.0 {
                    FRAC_PI_2 - 2.0 * ts.atan()
                } else {
                    phi2(ts, e)
                };
                let lon = (xa.atan2(ya) + t.lambda0).to_degrees();
                (wrap_longitude(lon), (sign * pa).to_degrees())
            }
            Aspect::Oblique {
                sin_chi0,
                cos_chi0,
                akm1,
            } => {
                let (chi, lam) = if rho < CENTER_RHO {
                    (sin_chi0.asin(), 0.0)
                } else {
                    let c2 = 2.0 * (rho * cos_chi0).atan2(akm1);
                    let (sin_c, cos_c) = (c2.sin(), c2.cos());
                    let chi =
                        (cos_c * sin_chi0 + yp * sin_c * cos_chi0 / rho).clamp(-1.0, 1.0).asin();
                    let lam = (xp * sin_c).atan2(rho * cos_chi0 * cos_c - yp * sin_chi0 * sin_c);
                    (chi, lam)
                };
                let phi = if e == 0.0 {
                    chi
                } else {
                    phi2((FRAC_PI_4 - 0.5 * chi).tan(), e)
                };
                let lon = (lam + t.lambda0).to_degrees();
                (wrap_longitude(lon), phi.to_degrees())
            }
        }
    }

    fn clone_box(&self) -> Box<dyn Projector> {
        Box::new(self.clone())
    }
}
