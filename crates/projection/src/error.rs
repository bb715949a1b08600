//! Error types for projector construction and mutation.

use thiserror::Error;

/// Result type alias using ProjectionError.
pub type ProjectionResult<T> = Result<T, ProjectionError>;

/// Validation failure while constructing or mutating a projector.
///
/// Construction is all-or-nothing: any of these errors means no instance was
/// produced and no partial state exists. `project`/`unproject` never return
/// errors; their edge cases are resolved by deterministic branching.
#[derive(Debug, Error)]
pub enum ProjectionError {
    #[error("invalid ellipsoid axes: major={major}, minor={minor}")]
    InvalidEllipsoid { major: f64, minor: f64 },

    #[error("invalid standard parallels: lower={lower}, upper={upper} (need same-sign degrees with 1 <= |lat| <= 89 and lower <= upper)")]
    InvalidStandardParallels { lower: f64, upper: f64 },

    #[error("central longitude out of [-180, 180]: {0}")]
    InvalidCentralLongitude(f64),

    #[error("central latitude out of range: {0}")]
    InvalidCentralLatitude(f64),

    #[error("secant latitude out of [-90, 90]: {0}")]
    InvalidSecantLatitude(f64),

    #[error("false easting/northing must be finite, got {0}")]
    NonFiniteOffset(f64),
}
