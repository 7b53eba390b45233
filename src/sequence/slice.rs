//! Prefix/suffix selection and element access.
//!
//! ## Purpose
//!
//! Curried `take`/`drop` (by count and by predicate) and the fallible
//! `head`/`last` accessors.
//!
//! ## Design notes
//!
//! * **Counts are `usize`**: a negative count cannot be expressed, so the
//!   "`n <= 0` yields the empty/unchanged sequence" contract collapses to
//!   `n == 0`, which the implementations handle naturally.
//! * **Explicit emptiness errors**: `head` and `last` return
//!   [`FunError::EmptyInput`] on the empty sequence instead of a sentinel.
//!
//! ## Invariants
//!
//! * `take(n)(xs).len() == min(n, xs.len())`.
//! * `take(n)(xs)` followed by `drop(n)(xs)` partitions `xs`, and the same
//!   holds for the `_while` variants with a shared predicate.
//! * `last` returns the final element, never one past it.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::primitives::errors::FunError;

// ============================================================================
// Selection by Count
// ============================================================================

/// Curried prefix: the first `n` elements, or all of them when `n` exceeds
/// the length.
#[inline]
pub fn take<T: Clone>(n: usize) -> impl Fn(&[T]) -> Vec<T> {
    move |xs| xs.iter().take(n).cloned().collect()
}

/// Curried suffix: all but the first `n` elements.
///
/// Note: under a glob import of the prelude this shadows `core::mem::drop`.
#[inline]
pub fn drop<T: Clone>(n: usize) -> impl Fn(&[T]) -> Vec<T> {
    move |xs| xs.iter().skip(n).cloned().collect()
}

// ============================================================================
// Selection by Predicate
// ============================================================================

/// Curried longest prefix on which the predicate holds.
///
/// # Examples
///
/// ```rust
/// use funkit::prelude::*;
///
/// let small = take_while(|x: &i32| *x < 3);
/// assert_eq!(small(&[1, 2, 3, 1]), vec![1, 2]);
/// ```
#[inline]
pub fn take_while<T, F>(pred: F) -> impl Fn(&[T]) -> Vec<T>
where
    T: Clone,
    F: Fn(&T) -> bool,
{
    move |xs| xs.iter().take_while(|&x| pred(x)).cloned().collect()
}

/// Curried remainder after the longest prefix on which the predicate holds.
#[inline]
pub fn drop_while<T, F>(pred: F) -> impl Fn(&[T]) -> Vec<T>
where
    T: Clone,
    F: Fn(&T) -> bool,
{
    move |xs| xs.iter().skip_while(|&x| pred(x)).cloned().collect()
}

// ============================================================================
// Element Access
// ============================================================================

/// First element of the sequence.
///
/// # Errors
///
/// Returns [`FunError::EmptyInput`] when the sequence has no elements.
#[inline]
pub fn head<T: Clone>(xs: &[T]) -> Result<T, FunError> {
    xs.first()
        .cloned()
        .ok_or(FunError::EmptyInput { operation: "head" })
}

/// Final element of the sequence.
///
/// # Errors
///
/// Returns [`FunError::EmptyInput`] when the sequence has no elements.
#[inline]
pub fn last<T: Clone>(xs: &[T]) -> Result<T, FunError> {
    xs.last()
        .cloned()
        .ok_or(FunError::EmptyInput { operation: "last" })
}
