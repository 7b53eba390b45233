//! Pairwise combination of two sequences.
//!
//! ## Purpose
//!
//! Curried `zip_with`/`zip` and their max-length counterparts
//! `zip_longest_with`/`zip_longest`.
//!
//! ## Design notes
//!
//! * **Length policy**: `zip_with` truncates to the shorter input; there is
//!   no "missing element" value to feed the combiner, and min-length zipping
//!   is the standard-library semantics. When the max-length behavior is
//!   wanted, `zip_longest_with` makes the padding explicit by handing the
//!   combiner `Option`s: the exhausted side is `None`.
//!
//! ## Invariants
//!
//! * `zip_with(f)(xs, ys).len() == min(xs.len(), ys.len())`.
//! * `zip_longest_with(f)(xs, ys).len() == max(xs.len(), ys.len())`, and
//!   `f` receives `(Some, Some)` for exactly the first `min` indices.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// ============================================================================
// Min-Length Zipping
// ============================================================================

/// Curried elementwise combination, truncated to the shorter input.
///
/// # Examples
///
/// ```rust
/// use funkit::prelude::*;
///
/// let dots = zip_with(|a: i32, b: i32| a * b);
/// assert_eq!(dots(&[1, 2, 3], &[4, 5]), vec![4, 10]);
/// ```
#[inline]
pub fn zip_with<A, B, C, F>(f: F) -> impl Fn(&[A], &[B]) -> Vec<C>
where
    A: Clone,
    B: Clone,
    F: Fn(A, B) -> C,
{
    move |xs, ys| {
        xs.iter()
            .cloned()
            .zip(ys.iter().cloned())
            .map(|(a, b)| f(a, b))
            .collect()
    }
}

/// Pair up two sequences, truncated to the shorter input.
#[inline]
pub fn zip<A: Clone, B: Clone>(xs: &[A], ys: &[B]) -> Vec<(A, B)> {
    zip_with(|a, b| (a, b))(xs, ys)
}

// ============================================================================
// Max-Length Zipping
// ============================================================================

/// Curried elementwise combination over the longer input; the exhausted
/// side is passed to the combiner as `None`.
#[inline]
pub fn zip_longest_with<A, B, C, F>(f: F) -> impl Fn(&[A], &[B]) -> Vec<C>
where
    A: Clone,
    B: Clone,
    F: Fn(Option<A>, Option<B>) -> C,
{
    move |xs, ys| {
        let len = core::cmp::max(xs.len(), ys.len());
        (0..len)
            .map(|k| f(xs.get(k).cloned(), ys.get(k).cloned()))
            .collect()
    }
}

/// Pair up two sequences over the longer input, padding with `None`.
///
/// # Examples
///
/// ```rust
/// use funkit::prelude::*;
///
/// let pairs = zip_longest(&[1, 2, 3], &["a", "b"]);
/// assert_eq!(
///     pairs,
///     vec![(Some(1), Some("a")), (Some(2), Some("b")), (Some(3), None)]
/// );
/// ```
#[inline]
pub fn zip_longest<A: Clone, B: Clone>(xs: &[A], ys: &[B]) -> Vec<(Option<A>, Option<B>)> {
    zip_longest_with(|a, b| (a, b))(xs, ys)
}
