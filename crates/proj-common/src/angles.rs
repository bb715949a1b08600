//! Degree/radian conversion and longitude normalization.

use std::f64::consts::PI;

use num_traits::Float;

/// Convert degrees to radians, preserving sign.
#[inline]
pub fn radians<T: Float>(deg: T) -> T {
    deg.to_radians()
}

/// Convert radians to degrees, preserving sign.
#[inline]
pub fn degrees<T: Float>(rad: T) -> T {
    rad.to_degrees()
}

/// Normalize a longitude in degrees into `[-180, 180]`.
///
/// An internally computed raw longitude of 185 comes back as -175.
pub fn wrap_longitude(mut lon: f64) -> f64 {
    while lon > 180.0 {
        lon -= 360.0;
    }
    while lon < -180.0 {
        lon += 360.0;
    }
    lon
}

/// Normalize a longitude difference in radians into `(-PI, PI]`.
pub fn wrap_delta(mut delta: f64) -> f64 {
    while delta > PI {
        delta -= 2.0 * PI;
    }
    while delta <= -PI {
        delta += 2.0 * PI;
    }
    delta
}
