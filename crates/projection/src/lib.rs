//! Cartographic projections between geographic and planar grid coordinates.
//!
//! Three variants are provided behind the uniform [`Projector`] capability:
//! Lambert Conformal Conic, Albers Equal-Area Conic, and Polar/Oblique
//! Stereographic. Each instance owns an ellipsoid, a parameter set, and a
//! cache of derived terms recomputed whenever either is mutated.
//!
//! Callers validate geographic inputs with the `proj-common` predicates
//! before projecting; `project`/`unproject` themselves are total and never
//! fail over the valid domain. Inputs near a pole or the antimeridian are
//! nudged off the singularity so the round trip recovers the original
//! longitude instead of snapping to the central meridian.

use std::fmt::Debug;

pub mod albers;
pub mod error;
pub mod lambert;
pub mod params;
pub mod stereographic;

pub use albers::AlbersProjector;
pub use error::{ProjectionError, ProjectionResult};
pub use lambert::LambertProjector;
pub use params::{ConicParameters, StereographicParameters};
pub use stereographic::StereographicProjector;

use proj_common::about_equal;
use proj_common::ellipsoid::Ellipsoid;

/// Uniform operation set implemented by every projection variant.
///
/// Mutations (`set_ellipsoid`, `set_false_easting`, `set_false_northing`)
/// recompute the internal derived-term cache before returning, so a caller
/// never observes partially updated state. Disposal is ordinary drop; a
/// boxed projector releases everything when it goes out of scope.
pub trait Projector: Debug + Send + Sync {
    /// Fixed identifier of the projection variant.
    fn name(&self) -> &'static str;

    /// The ellipsoid currently in use.
    fn ellipsoid(&self) -> Ellipsoid;

    /// Standard parallels in degrees: the conics report the lower/upper
    /// pair, the stereographic variant its secant latitude twice.
    fn standard_parallels(&self) -> (f64, f64);

    fn central_longitude(&self) -> f64;
    fn central_latitude(&self) -> f64;
    fn false_easting(&self) -> f64;
    fn false_northing(&self) -> f64;

    /// Replace the ellipsoid and recompute derived terms.
    fn set_ellipsoid(&mut self, major_semiaxis: f64, minor_semiaxis: f64)
        -> ProjectionResult<()>;

    /// Replace the false easting (meters). Must be finite.
    fn set_false_easting(&mut self, meters: f64) -> ProjectionResult<()>;

    /// Replace the false northing (meters). Must be finite.
    fn set_false_northing(&mut self, meters: f64) -> ProjectionResult<()>;

    /// Forward projection: geographic degrees to planar meters.
    fn project(&self, longitude: f64, latitude: f64) -> (f64, f64);

    /// Inverse projection: planar meters to geographic degrees, longitude
    /// wrapped into `[-180, 180]`.
    fn unproject(&self, x: f64, y: f64) -> (f64, f64);

    /// Clone into a value-independent boxed instance.
    fn clone_box(&self) -> Box<dyn Projector>;
}

impl Clone for Box<dyn Projector> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// Field-wise comparison of two projectors under the global tolerance.
///
/// Same variant, and ellipsoid axes, standard parallels, central
/// longitude/latitude, and false offsets all `about_equal`; floating fields
/// need not match bit-exactly.
pub fn projectors_equal(a: &dyn Projector, b: &dyn Projector) -> bool {
    let (ae, be) = (a.ellipsoid(), b.ellipsoid());
    let (al, au) = a.standard_parallels();
    let (bl, bu) = b.standard_parallels();
    a.name() == b.name()
        && about_equal(ae.major_semiaxis, be.major_semiaxis)
        && about_equal(ae.minor_semiaxis, be.minor_semiaxis)
        && about_equal(al, bl)
        && about_equal(au, bu)
        && about_equal(a.central_longitude(), b.central_longitude())
        && about_equal(a.central_latitude(), b.central_latitude())
        && about_equal(a.false_easting(), b.false_easting())
        && about_equal(a.false_northing(), b.false_northing())
}

pub(crate) mod support {
    //! Input conditioning shared by the forward projections.

    use std::f64::consts::{FRAC_PI_2, PI};

    use proj_common::auxiliary::PROJECTION_TOLERANCE;
    use proj_common::wrap_delta;

    /// Convert geographic degrees to the radian latitude and central-meridian
    /// longitude delta the projection formulas consume.
    ///
    /// Latitude is pulled `sqrt(PROJECTION_TOLERANCE)` inside the poles and
    /// the delta the same distance inside the antimeridian, so the inverse
    /// projection recovers the original longitude instead of collapsing to
    /// the central meridian at the singular points.
    pub fn forward_inputs(longitude: f64, latitude: f64, lambda0: f64) -> (f64, f64) {
        let nudge = PROJECTION_TOLERANCE.sqrt();

        let phi = latitude
            .to_radians()
            .clamp(-(FRAC_PI_2 - nudge), FRAC_PI_2 - nudge);

        let mut delta = wrap_delta(longitude.to_radians() - lambda0);
        if delta > PI - nudge {
            delta = PI - nudge;
        } else if delta < -PI + nudge {
            delta = -PI + nudge;
        }
        (delta, phi)
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_pole_clamp() {
            let (_, phi) = forward_inputs(-100.0, 90.0, 0.0);
            assert!(phi < FRAC_PI_2);
            assert!(FRAC_PI_2 - phi < 2e-5);

            let (_, phi) = forward_inputs(-100.0, -90.0, 0.0);
            assert!(phi > -FRAC_PI_2);
        }

        #[test]
        fn test_antimeridian_pullback() {
            // 180 degrees away from the central meridian.
            let lambda0 = (-100.0_f64).to_radians();
            let (delta, _) = forward_inputs(80.0, 45.0, lambda0);
            assert!(delta < PI && delta > PI - 2e-5);
        }

        #[test]
        fn test_interior_points_untouched() {
            let lambda0 = (-100.0_f64).to_radians();
            let (delta, phi) = forward_inputs(-78.7268, 35.9611, lambda0);
            assert_eq!(phi, 35.9611_f64.to_radians());
            assert_eq!(delta, (-78.7268_f64).to_radians() - lambda0);
        }
    }
}
