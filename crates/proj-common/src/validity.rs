//! Validity predicates for ellipsoid axes and geographic coordinates.
//!
//! Projection constructors and grid tooling validate inputs through these
//! predicates before doing any math; `project`/`unproject` assume they hold.

/// True iff both semiaxes are finite and positive with `major >= minor`.
pub fn is_valid_ellipsoid(major_semiaxis: f64, minor_semiaxis: f64) -> bool {
    major_semiaxis.is_finite()
        && minor_semiaxis.is_finite()
        && minor_semiaxis > 0.0
        && major_semiaxis >= minor_semiaxis
}

/// True iff the longitude is finite and within `[-180, 180]` degrees.
pub fn is_valid_longitude(lon: f64) -> bool {
    (-180.0..=180.0).contains(&lon)
}

/// True iff the latitude is finite and within `[-90, 90]` degrees.
pub fn is_valid_latitude(lat: f64) -> bool {
    (-90.0..=90.0).contains(&lat)
}

/// True iff both components form a valid geographic coordinate.
pub fn is_valid_longitude_latitude(lon: f64, lat: f64) -> bool {
    is_valid_longitude(lon) && is_valid_latitude(lat)
}

/// True iff every `(lon, lat)` pair in the slice is valid.
pub fn all_valid_longitude_latitude(points: &[(f64, f64)]) -> bool {
    points
        .iter()
        .all(|&(lon, lat)| is_valid_longitude_latitude(lon, lat))
}
