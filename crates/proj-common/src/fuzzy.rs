//! Tolerance-aware floating-point comparison.
//!
//! Projected coordinates accumulate rounding error through trigonometric
//! round trips, so the rest of the workspace compares floats through
//! [`about_equal`] rather than `==`.

/// Default comparison tolerance used by [`about_equal`].
pub const TOLERANCE: f64 = 1.0e-5;

/// True iff `x` is NaN (`x != x`).
#[inline]
pub fn is_nan(x: f64) -> bool {
    x != x
}

/// Difference `x - y` that is exactly `0.0` when the operands share a bit
/// pattern.
///
/// Plain subtraction yields NaN for `inf - inf`; the bit-pattern check keeps
/// identical operands at an exact zero difference.
#[inline]
pub fn safe_difference(x: f64, y: f64) -> f64 {
    if x.to_bits() == y.to_bits() {
        0.0
    } else {
        x - y
    }
}

/// Quotient `n / d` that is exactly `1.0` when the operands share a bit
/// pattern. `d` must be nonzero.
#[inline]
pub fn safe_quotient(n: f64, d: f64) -> f64 {
    debug_assert!(d != 0.0, "safe_quotient requires a nonzero denominator");
    if n.to_bits() == d.to_bits() {
        1.0
    } else {
        n / d
    }
}

/// Compare two floats for closeness under the given tolerance.
///
/// `tol` must lie in `(0, 0.1]`. The comparison proceeds in three stages:
///
/// 1. identical bit patterns are equal (this also makes a NaN equal to an
///    identically-encoded NaN);
/// 2. when either operand is zero, or the operands already differ by no more
///    than `tol`, the absolute difference decides;
/// 3. otherwise the ratio `x / y` must fall within `[1 - tol, 1 + tol]`,
///    with non-finite ratios (overflow) rejected.
///
/// The relation is commutative but deliberately **not transitive**: a value
/// near zero is close to both `+tol` and `-tol`, which are not close to each
/// other.
pub fn within_tolerance(x: f64, y: f64, tol: f64) -> bool {
    debug_assert!(tol > 0.0 && tol <= 0.1, "tolerance out of range: {}", tol);

    if x.to_bits() == y.to_bits() {
        return true;
    }

    let diff = safe_difference(x, y).abs();
    if x == 0.0 || y == 0.0 || diff <= tol {
        return diff <= tol;
    }

    // Both operands are nonzero here, so the quotient is well defined.
    let ratio = safe_quotient(x, y);
    if !ratio.is_finite() {
        return false;
    }
    ((1.0 - tol)..=(1.0 + tol)).contains(&ratio)
}

/// [`within_tolerance`] at the fixed global [`TOLERANCE`].
#[inline]
pub fn about_equal(x: f64, y: f64) -> bool {
    within_tolerance(x, y, TOLERANCE)
}
