//! Shared numeric substrate for the grid-projection workspace.
//!
//! Provides tolerance-aware floating-point comparison, angle conversion,
//! coordinate validity predicates, the reference ellipsoid table, and the
//! ellipsoidal auxiliary functions and iterative latitude solvers used by
//! every projection variant.

pub mod angles;
pub mod auxiliary;
pub mod ellipsoid;
pub mod fuzzy;
pub mod validity;

pub use angles::{degrees, radians, wrap_delta, wrap_longitude};
pub use auxiliary::{
    msfn, phi1, phi2, qsfn, ssfn, tsfn, CONVERGENCE_TOLERANCE, MAXIMUM_ITERATIONS,
    PROJECTION_TOLERANCE,
};
pub use ellipsoid::{Ellipsoid, EllipsoidError};
pub use fuzzy::{about_equal, is_nan, safe_difference, safe_quotient, within_tolerance, TOLERANCE};
pub use validity::{
    all_valid_longitude_latitude, is_valid_ellipsoid, is_valid_latitude, is_valid_longitude,
    is_valid_longitude_latitude,
};
