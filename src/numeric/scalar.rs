//! Binary scalar comparisons.
//!
//! Generic over `PartialOrd` rather than floats only. On a tie, and
//! whenever the arguments do not compare (e.g. a NaN on either side), both
//! functions return the first argument: the comparison against the second
//! argument must hold strictly for it to win.

// ============================================================================
// Scalar Comparisons
// ============================================================================

/// The larger of two values (the first on a tie or when they do not compare).
#[inline]
pub fn max<T: PartialOrd>(a: T, b: T) -> T {
    if b > a {
        b
    } else {
        a
    }
}

/// The smaller of two values (the first on a tie or when they do not compare).
#[inline]
pub fn min<T: PartialOrd>(a: T, b: T) -> T {
    if b < a {
        b
    } else {
        a
    }
}
