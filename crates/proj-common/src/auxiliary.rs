//! Ellipsoidal auxiliary functions and the iterative latitude solvers.
//!
//! These are the conformal/authalic scale helpers shared by every conic and
//! stereographic variant. Notation follows the classical projection
//! literature: `e` is the first eccentricity, `es = e^2`, `phi` a geodetic
//! latitude in radians.

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

/// Tolerance used for singularity detection and tangent/secant branching.
pub const PROJECTION_TOLERANCE: f64 = 1.0e-10;

/// Convergence threshold for the fixed-point latitude solvers.
pub const CONVERGENCE_TOLERANCE: f64 = 1.0e-12;

/// Iteration cap for the fixed-point latitude solvers.
pub const MAXIMUM_ITERATIONS: usize = 15;

/// Parallel scale factor `m = cos(phi) / sqrt(1 - es * sin^2(phi))`.
pub fn msfn(sin_phi: f64, cos_phi: f64, es: f64) -> f64 {
    debug_assert!((0.0..=1.0).contains(&es));
    debug_assert!(es * sin_phi * sin_phi < 1.0);
    cos_phi / (1.0 - es * sin_phi * sin_phi).sqrt()
}

/// Conformal auxiliary `t = tan(pi/4 - phi/2) / ((1 - e sin phi)/(1 + e sin phi))^(e/2)`.
pub fn tsfn(phi: f64, sin_phi: f64, e: f64) -> f64 {
    debug_assert!((0.0..=1.0).contains(&e));
    let con = e * sin_phi;
    debug_assert!(con.abs() < 1.0);
    (0.5 * (FRAC_PI_2 - phi)).tan() / ((1.0 - con) / (1.0 + con)).powf(0.5 * e)
}

/// Authalic auxiliary `q`, twice the area-preserving latitude function.
///
/// For a near-zero eccentricity this degenerates to the spherical `2 sin phi`.
pub fn qsfn(sin_phi: f64, e: f64) -> f64 {
    debug_assert!((0.0..=1.0).contains(&e));
    if e < 1.0e-7 {
        return 2.0 * sin_phi;
    }
    let con = e * sin_phi;
    debug_assert!(con.abs() < 1.0);
    (1.0 - e * e)
        * (sin_phi / (1.0 - con * con) - (0.5 / e) * ((1.0 - con) / (1.0 + con)).ln())
}

/// Conformal auxiliary for the stereographic variants:
/// `tan(pi/4 + phi/2) * ((1 - e sin phi)/(1 + e sin phi))^(e/2)`.
pub fn ssfn(phi: f64, sin_phi: f64, e: f64) -> f64 {
    debug_assert!((0.0..=1.0).contains(&e));
    let con = e * sin_phi;
    debug_assert!(con.abs() < 1.0);
    (0.5 * (FRAC_PI_2 + phi)).tan() * ((1.0 - con) / (1.0 + con)).powf(0.5 * e)
}

/// Recover geodetic latitude from the authalic auxiliary `q`.
///
/// Fixed-point iteration, looping while `|dphi| >= CONVERGENCE_TOLERANCE`
/// and fewer than [`MAXIMUM_ITERATIONS`] steps have run. If the cap is
/// exhausted the last estimate is returned silently; downstream grid tooling
/// depends on always receiving an answer, so an unconverged tail estimate is
/// deliberately not an error.
pub fn phi1(q: f64, e: f64) -> f64 {
    debug_assert!(e > 0.0 && e <= 1.0, "spherical callers use the closed form");
    let es = e * e;
    let mut phi = (0.5 * q).clamp(-1.0, 1.0).asin();
    for _ in 0..MAXIMUM_ITERATIONS {
        let sin_phi = phi.sin();
        let con = e * sin_phi;
        let one = 1.0 - con * con;
        let dphi = one * one / (2.0 * phi.cos())
            * (q / (1.0 - es) - sin_phi / one + (0.5 / e) * ((1.0 - con) / (1.0 + con)).ln());
        phi += dphi;
        if dphi.abs() < CONVERGENCE_TOLERANCE {
            break;
        }
    }
    phi
}

/// Recover geodetic latitude from the conformal auxiliary `t` (the value of
/// [`tsfn`] at the sought latitude).
///
/// Same convergence and cap policy as [`phi1`].
pub fn phi2(ts: f64, e: f64) -> f64 {
    debug_assert!((0.0..=1.0).contains(&e));
    let half_e = 0.5 * e;
    let mut phi = FRAC_PI_2 - 2.0 * ts.atan();
    for _ in 0..MAXIMUM_ITERATIONS {
        let con = e * phi.sin();
        let next = FRAC_PI_2 - 2.0 * (ts * ((1.0 - con) / (1.0 + con)).powf(half_e)).atan();
        let dphi = next - phi;
        phi = next;
        if dphi.abs() < CONVERGENCE_TOLERANCE {
            break;
        }
    }
    phi
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // Eccentricities covering the sphere, the named reference ellipsoids and
    // the top of the contractual range.
    const ECCENTRICITIES: [f64; 5] = [0.0, 0.01, 0.0818192, 0.0822719, 0.1];

    #[test]
    fn test_msfn_equator_and_pole() {
        assert_relative_eq!(msfn(0.0, 1.0, 0.0066944), 1.0);
        assert_relative_eq!(msfn(1.0, 0.0, 0.0066944), 0.0);
    }

    #[test]
    fn test_tsfn_spherical_reduction() {
        // With e = 0, tsfn is plain tan(pi/4 - phi/2).
        let phi = 0.7;
        assert_relative_eq!(
            tsfn(phi, phi.sin(), 0.0),
            (FRAC_PI_4 - 0.5 * phi).tan(),
            epsilon = 1e-14
        );
    }

    #[test]
    fn test_qsfn_spherical_reduction() {
        let phi = 0.5_f64;
        assert_relative_eq!(qsfn(phi.sin(), 0.0), 2.0 * phi.sin());
        // Small eccentricities stay near the spherical value.
        assert_relative_eq!(qsfn(phi.sin(), 0.01), 2.0 * phi.sin(), epsilon = 1e-4);
    }

    #[test]
    fn test_ssfn_spherical_reduction() {
        let phi = 0.9;
        assert_relative_eq!(
            ssfn(phi, phi.sin(), 0.0),
            (FRAC_PI_4 + 0.5 * phi).tan(),
            epsilon = 1e-14
        );
    }

    #[test]
    fn test_phi2_inverts_tsfn() {
        for &e in &ECCENTRICITIES {
            let mut lat: f64 = -89.0;
            while lat <= 89.0 {
                let phi = lat.to_radians();
                let ts = tsfn(phi, phi.sin(), e);
                let recovered = phi2(ts, e);
                assert!(!recovered.is_nan(), "phi2 NaN at e={} lat={}", e, lat);
                assert_relative_eq!(recovered, phi, epsilon = 1e-10);
                lat += 7.0;
            }
        }
    }

    #[test]
    fn test_phi1_inverts_qsfn() {
        for &e in &ECCENTRICITIES[1..] {
            let mut lat: f64 = -89.0;
            while lat <= 89.0 {
                let phi = lat.to_radians();
                let q = qsfn(phi.sin(), e);
                let recovered = phi1(q, e);
                assert!(!recovered.is_nan(), "phi1 NaN at e={} lat={}", e, lat);
                assert_relative_eq!(recovered, phi, epsilon = 1e-10);
                lat += 7.0;
            }
        }
    }

    #[test]
    fn test_phi2_iteration_stays_bounded() {
        // A deliberately crude instrumented copy of the loop to confirm the
        // solver converges well inside the cap for contractual eccentricities.
        for &e in &ECCENTRICITIES {
            let phi_true = 1.2_f64;
            let ts = tsfn(phi_true, phi_true.sin(), e);
            let half_e = 0.5 * e;
            let mut phi = FRAC_PI_2 - 2.0 * ts.atan();
            let mut iterations = 0;
            for _ in 0..MAXIMUM_ITERATIONS {
                iterations += 1;
                let con = e * phi.sin();
                let next =
                    FRAC_PI_2 - 2.0 * (ts * ((1.0 - con) / (1.0 + con)).powf(half_e)).atan();
                let dphi = next - phi;
                phi = next;
                if dphi.abs() < CONVERGENCE_TOLERANCE {
                    break;
                }
            }
            assert!(iterations < MAXIMUM_ITERATIONS, "cap hit at e={}", e);
            assert_relative_eq!(phi, phi_true, epsilon = 1e-11);
        }
    }
}
