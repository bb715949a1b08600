//! Albers Equal-Area Conic projection.
//!
//! Same cone geometry and parameter contract as Lambert, but the constants
//! come from the equal-area condition: the authalic auxiliary `qsfn`
//! replaces the conformal `tsfn`, and the inverse recovers latitude through
//! the authalic solver `phi1`.

use tracing::trace;

use proj_common::auxiliary::{msfn, phi1, qsfn, PROJECTION_TOLERANCE};
use proj_common::ellipsoid::Ellipsoid;
use proj_common::validity::is_valid_ellipsoid;
use proj_common::wrap_longitude;

use crate::error::{ProjectionError, ProjectionResult};
use crate::params::ConicParameters;
use crate::support::forward_inputs;
use crate::Projector;

const NAME: &str = "albers_equal_area";

#[derive(Debug, Clone, Copy)]
struct DerivedTerms {
    eccentricity: f64,
    /// Cone constant.
    n: f64,
    /// Equal-area scale constant.
    c: f64,
    /// Radius of the central parallel (dimensionless).
    rho0: f64,
    /// Central longitude in radians.
    lambda0: f64,
}

/// Albers Equal-Area Conic projector instance.
#[derive(Debug, Clone)]
pub struct AlbersProjector {
    ellipsoid: Ellipsoid,
    params: ConicParameters,
    terms: DerivedTerms,
}

impl AlbersProjector {
    /// Construct from scalar inputs; see [`LambertProjector::new`] for the
    /// shared conic contract.
    ///
    /// [`LambertProjector::new`]: crate::LambertProjector::new
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

    /// Equal-area cone and scale constants. Tangent/secant branching policy
    /// matches Lambert.
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
            0.5 * (phi_l.sin() + phi_u.sin())
        } else {
            let m1 = msfn(phi_l.sin(), phi_l.cos(), es);
            let m2 = msfn(phi_u.sin(), phi_u.cos(), es);
            let q1 = qsfn(phi_l.sin(), e);
            let q2 = qsfn(phi_u.sin(), e);
            (m1 * m1 - m2 * m2) / (q2 - q1)
        };

        let (c, rho0) = if sphere {
            let c = phi_l.cos() * phi_l.cos() + 2.0 * n * phi_l.sin();
            (c, (c - 2.0 * n * phi0.sin()).max(0.0).sqrt() / n)
        } else {
            let m1 = msfn(phi_l.sin(), phi_l.cos(), es);
            let q1 = qsfn(phi_l.sin(), e);
            let c = m1 * m1 + n * q1;
            let q0 = qsfn(phi0.sin(), e);
            (c, (c - n * q0).max(0.0).sqrt() / n)
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

impl Projector for AlbersProjector {
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

        let q = if t.eccentricity == 0.0 {
            2.0 * phi.sin()
        } else {
            qsfn(phi.sin(), t.eccentricity)
        };
        let rho = (t.c - t.n * q).max(0.0).sqrt() / t.n;
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

        if t.n < 0.0 {
            rho = -rho;
            xp = -xp;
            yp = -yp;
        }

        if rho == 0.0 {
            let pole = if t.n > 0.0 { 90.0 } else { -90.0 };
            return (wrap_longitude(self.params.central_longitude), pole);
        }

        let q = (t.c - (rho * t.n) * (rho * t.n)) / t.n;
        let phi = if t.eccentricity == 0.0 {
            (0.5 * q).clamp(-1.0, 1.0).asin()
        } else {
            phi1(q, t.eccentricity)
        };
        let lon = (xp.atan2(yp) / t.n + t.lambda0).to_degrees();
        (wrap_longitude(lon), phi.to_degrees())
    }

    fn clone_box(&self) -> Box<dyn Projector> {
        Box::new(self.clone())
    }
}
