//! Folds and quantifier predicates.
//!
//! ## Purpose
//!
//! Curried left and right folds with explicit initial accumulators, plus the
//! universal (`all`) and existential (`any`) predicates.
//!
//! ## Key concepts
//!
//! * **Direction**: `foldl(f, init)` combines `f(...f(f(init, x0), x1)...)`;
//!   `foldr(f, init)` combines `f(x0, f(x1, ...f(xn, init)...))`.
//! * **Aliases**: `reduce`/`reduce_right` re-export `foldl`/`foldr` for
//!   callers who prefer those names.
//!
//! ## Invariants
//!
//! * Folding the empty sequence returns the initial accumulator unchanged.
//! * `all` is vacuously true on the empty sequence; `any` is false.

// ============================================================================
// Folds
// ============================================================================

/// Curried left fold: `foldl(f, init)(xs)` threads the accumulator from the
/// first element to the last.
///
/// # Examples
///
/// ```rust
/// use funkit::prelude::*;
///
/// let subtract_all = foldl(|acc: i32, x: i32| acc - x, 0);
/// assert_eq!(subtract_all(&[1, 2, 3]), -6);
/// assert_eq!(subtract_all(&[]), 0);
/// ```
#[inline]
pub fn foldl<T, A, F>(f: F, init: A) -> impl Fn(&[T]) -> A
where
    T: Clone,
    A: Clone,
    F: Fn(A, T) -> A,
{
    move |xs| xs.iter().cloned().fold(init.clone(), &f)
}

/// Curried right fold: `foldr(f, init)(xs)` threads the accumulator from the
/// last element to the first.
///
/// # Examples
///
/// ```rust
/// use funkit::prelude::*;
///
/// // 1 - (2 - (3 - 0))
/// assert_eq!(foldr(|x: i32, acc: i32| x - acc, 0)(&[1, 2, 3]), 2);
/// ```
#[inline]
pub fn foldr<T, A, F>(f: F, init: A) -> impl Fn(&[T]) -> A
where
    T: Clone,
    A: Clone,
    F: Fn(T, A) -> A,
{
    move |xs| {
        xs.iter()
            .cloned()
            .rev()
            .fold(init.clone(), |acc, x| f(x, acc))
    }
}

pub use self::foldl as reduce;
pub use self::foldr as reduce_right;

// ============================================================================
// Quantifiers
// ============================================================================

/// Curried universal quantifier: true iff every element satisfies the
/// predicate (vacuously true on the empty sequence).
#[inline]
pub fn all<T, F>(pred: F) -> impl Fn(&[T]) -> bool
where
    F: Fn(&T) -> bool,
{
    move |xs| xs.iter().all(|x| pred(x))
}

/// Curried existential quantifier: true iff at least one element satisfies
/// the predicate (false on the empty sequence).
#[inline]
pub fn any<T, F>(pred: F) -> impl Fn(&[T]) -> bool
where
    F: Fn(&T) -> bool,
{
    move |xs| xs.iter().any(|x| pred(x))
}
