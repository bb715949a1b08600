//! Lambert Conformal Conic projection.
//!
//! The workhorse projection for mid-latitude NWP grids (HRRR, NAM, many
//! regional reanalyses). A cone tangent to one parallel or secant through
//! two is unrolled onto the plane; scale is true along the standard
//! parallels and conformal everywhere else.

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

use tracing::trace;

use proj_common::auxiliary::{msfn, phi2, tsfn, PROJECTION_TOLERANCE};
use proj_common::ellipsoid::Ellipsoid;
use proj_common::validity::is_valid_ellipsoid;
use proj_common::wrap_longitude;

use crate::error::{ProjectionError, ProjectionResult};
use crate::params::ConicParameters;
use crate::support::forward_inputs;
use crate::Projector;

const NAME: &str = "lambert_conformal";

/// Parameter-dependent constants cached per instance.
///
/// Recomputed on every ellipsoid or parameter mutation, never exposed.
#[derive(Debug, Clone, Copy)]
struct DerivedTerms {
    /// First eccentricity; exactly 0 selects the spherical closed forms.
    eccentricity: f64,
    /// Cone constant.
    n: f64,
    /// Scale constant (dimensionless; the semiaxis is applied at the end).
    c: f64,
    /// Radius of the central parallel, 0 when the center sits on a pole.
    rho0: f64,
    /// Central longitude in radians.
    lambda0: f64,
}

/// Lambert Conformal Conic projector instance.
#[derive(Debug, Clone)]
pub struct LambertProjector {
    ellipsoid: Ellipsoid,
    params: ConicParameters,
    terms: DerivedTerms,
}

impl LambertProjector {
    /// Construct from scalar inputs (axes in meters, angles in degrees,
    /// offsets in meters). All-or-nothing: any invalid field fails the
    /// whole construction.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        major_semiaxis: f64,
        minor_semiaxis: f64,
        lower_latitude: f64,
        upper_latitude: f64,
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
            ConicParameters {
                lower_latitude,
                upper_latitude,
                central_longitude,
                central_latitude,
                false_easting,
                false_northing,
            },
        )
    }

    /// Construct from an already-assembled ellipsoid and parameter set.
    pub fn from_parts(ellipsoid: Ellipsoid, params: ConicParameters) -> ProjectionResult<Self> {
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

    /// Derive the cone constant, scale constant and central-parallel radius.
    ///
    /// Standard parallels closer than `PROJECTION_TOLERANCE` select the
    /// tangent cone (`n = sin(lower)`); otherwise the secant cone constant
    /// solves the ratio of log scale factors at the two parallels.
    fn compute_terms(ellipsoid: &Ellipsoid, params: &ConicParameters) -> DerivedTerms {
        let e = ellipsoid.eccentricity();
        let es = e * e;
        let sphere = e == 0.0;
        let phi_l = params.lower_latitude.to_radians();
        let phi_u = params.upper_latitude.to_radians();
        let phi0 = params.central_latitude.to_radians();
        let lambda0 = params.central_longitude.to_radians();

        let n = if (phi_u - phi_l).abs() < PROJECTION_TOLERANCE {
            phi_l.sin()
        } else if sphere {
            (phi_l.cos() / phi_u.cos()).ln()
                / ((FRAC_PI_4 + 0.5 * phi_u).tan() / (FRAC_PI_4 + 0.5 * phi_l).tan()).ln()
        } else {
            let m1 = msfn(phi_l.sin(), phi_l.cos(), es);
            let m2 = msfn(phi_u.sin(), phi_u.cos(), es);
            let t1 = tsfn(phi_l, phi_l.sin(), e);
            let t2 = tsfn(phi_u, phi_u.sin(), e);
            (m1.ln() - m2.ln()) / (t1.ln() - t2.ln())
        };

        let c = if sphere {
            phi_l.cos() * (FRAC_PI_4 + 0.5 * phi_l).tan().powf(n) / n
        } else {
            let m1 = msfn(phi_l.sin(), phi_l.cos(), es);
            let t1 = tsfn(phi_l, phi_l.sin(), e);
            m1 / (n * t1.powf(n))
        };

        let rho0 = if (phi0.abs() - FRAC_PI_2).abs() < PROJECTION_TOLERANCE {
            0.0
        } else if sphere {
            c * (FRAC_PI_4 - 0.5 * phi0).tan().powf(n)
        } else {
            c * tsfn(phi0, phi0.sin(), e).powf(n)
        };

        DerivedTerms {
            eccentricity: e,
            n,
            c,
            rho0,
            lambda0,
        }
    }

    fn log_and_check(&mut self) {
        trace!(
            projection = NAME,
            n = self.terms.n,
            c = self.terms.c,
            rho0 = self.terms.rho0,
            "recomputed derived terms"
        );
        debug_assert!(self.invariants_hold());
    }

    /// Internal self-check: a false result is an implementation defect,
    /// never a runtime input error.
    fn invariants_hold(&self) -> bool {
        let t = &self.terms;
        is_valid_ellipsoid(self.ellipsoid.major_semiaxis, self.ellipsoid.minor_semiaxis)
            && self.params.validate().is_ok()
            && (0.0..=1.0).contains(&t.eccentricity)
            && !t.n.is_nan()
            && !t.c.is_nan()
            && !t.rho0.is_nan()
            && !t.lambda0.is_nan()
    }
}

impl Projector for LambertProjector {
    fn name(&self) -> &'static str {
        NAME
    }

    fn ellipsoid(&self) -> Ellipsoid {
        self.ellipsoid
    }

    fn standard_parallels(&self) -> (f64, f64) {
        (self.params.lower_latitude, self.params.upper_latitude)
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

        let ts = if t.eccentricity == 0.0 {
            (FRAC_PI_4 - 0.5 * phi).tan()
        } else {
            tsfn(phi, phi.sin(), t.eccentricity)
        };
        let rho = t.c * ts.powf(t.n);
        let theta = t.n * delta;

        let a = self.ellipsoid.major_semiaxis;
        (
            rho * theta.sin() * a + self.params.false_easting,
            (t.rho0 - rho * theta.cos()) * a + self.params.false_northing,
        )
    }

    fn unproject(&self, x: f64, y: f64) -> (f64, f64) {
        let t = &self.terms;
        let a = self.ellipsoid.major_semiaxis;
        let mut xp = (x - self.params.false_easting) / a;
        let mut yp = t.rho0 - (y - self.params.false_northing) / a;
        let mut rho = xp.hypot(yp);

        // Southern-cone orientation: flip radius and both components together.
        if t.n < 0.0 {
            rho = -rho;
            xp = -xp;
            yp = -yp;
        }

        if rho == 0.0 {
            let pole = if t.n > 0.0 { 90.0 } else { -90.0 };
            return (wrap_longitude(self.params.central_longitude), pole);
        }

        let ts = (rho / t.c).powf(1.0 / t.n);
        let phi = if t.eccentricity == 0.0 {
            FRAC_PI_2 - 2.0 * ts.atan()
        } else {
            phi2(ts, t.eccentricity)
        };
        let lon = (xp.atan2(yp) / t.n + t.lambda0).to_degrees();
        (wrap_longitude(lon), phi.to_degrees())
    }

    fn clone_box(&self) -> Box<dyn Projector> {
        Box::new(self.clone())
    }
}
