//! Elementwise sequence transforms.
//!
//! ## Purpose
//!
//! Curried `map` and `filter`, plus `reverse`. Each produces a new `Vec`;
//! the input slice is never mutated.
//!
//! ## Invariants
//!
//! * `map` preserves length and order.
//! * `filter` preserves the relative order of kept elements.
//! * `map(identity)` is the identity on any sequence, and
//!   `map(compose2(f, g))` equals `compose2(map(f), map(g))` applied to the
//!   same input (the functor laws).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// ============================================================================
// Transforms
// ============================================================================

/// Curried elementwise transform: `map(f)(xs)` applies `f` to every element.
///
/// # Examples
///
/// ```rust
/// use funkit::prelude::*;
///
/// let lengths = map(|s: &str| s.len())(&["a", "bc", ""]);
/// assert_eq!(lengths, vec![1, 2, 0]);
/// ```
#[inline]
pub fn map<T, U, F>(f: F) -> impl Fn(&[T]) -> Vec<U>
where
    T: Clone,
    F: Fn(T) -> U,
{
    move |xs| xs.iter().cloned().map(&f).collect()
}

/// Curried filter: keeps the elements where the predicate holds.
///
/// # Examples
///
/// ```rust
/// use funkit::prelude::*;
///
/// let evens = filter(|x: &i32| x % 2 == 0)(&[1, 2, 3, 4]);
/// assert_eq!(evens, vec![2, 4]);
/// ```
#[inline]
pub fn filter<T, F>(pred: F) -> impl Fn(&[T]) -> Vec<T>
where
    T: Clone,
    F: Fn(&T) -> bool,
{
    move |xs| xs.iter().filter(|&x| pred(x)).cloned().collect()
}

/// A new sequence with the elements in reverse order; the input is
/// unmodified.
#[inline]
pub fn reverse<T: Clone>(xs: &[T]) -> Vec<T> {
    let mut out = xs.to_vec();
    out.reverse();
    out
}
