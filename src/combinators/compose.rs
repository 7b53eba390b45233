//! Function composition.
//!
//! ## Purpose
//!
//! This module provides the composition engine: binary composition
//! ([`compose2`]), runtime variadic composition over a list of boxed stages
//! ([`compose`]), and the supporting combinators [`identity`], [`constant`],
//! and [`flip`].
//!
//! ## Design notes
//!
//! * **Two variadic forms**: the [`compose!`](crate::compose) macro composes
//!   heterogeneously-typed functions at compile time and rejects the empty
//!   invocation during parsing; the [`compose`] function composes a runtime
//!   list of same-typed stages and rejects the empty list with an explicit
//!   [`FunError::InvalidArgument`].
//! * **Associativity**: both forms reduce pairwise with [`compose2`], so
//!   `compose([f1, ..., fn])(x)` evaluates as `f1(f2(...fn(x)...))` and the
//!   last stage runs first.
//!
//! ## Invariants
//!
//! * `compose2(f, g)(x) == f(g(x))` for all unary `f`, `g`, and `x`.
//! * [`identity`] is the unit of composition: `compose2(identity, f)` and
//!   `compose2(f, identity)` both behave as `f`.
//!
//! ## Non-goals
//!
//! * No effect tracking: composed functions are assumed pure; whatever an
//!   underlying call panics with propagates unchanged.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::boxed::Box;
#[cfg(feature = "std")]
use std::boxed::Box;

// Internal dependencies
use crate::primitives::errors::FunError;

// ============================================================================
// Binary Composition
// ============================================================================

/// Compose two unary functions right-to-left.
///
/// Returns `h` such that `h(a) == f(g(a))`.
///
/// # Examples
///
/// ```rust
/// use funkit::prelude::*;
///
/// let add_then_double = compose2(|x: i32| x * 2, |x: i32| x + 1);
/// assert_eq!(add_then_double(5), 12);
/// ```
#[inline]
pub fn compose2<A, B, C>(f: impl Fn(B) -> C, g: impl Fn(A) -> B) -> impl Fn(A) -> C {
    move |a| f(g(a))
}

// ============================================================================
// Variadic Composition
// ============================================================================

/// A boxed endofunction, the unit of runtime composition.
pub type Endo<T> = Box<dyn Fn(T) -> T>;

/// Compose a runtime list of stages right-to-left.
///
/// Reduces the stages pairwise with [`compose2`], so the composed pipeline
/// applies the *last* stage first: `compose([f1, ..., fn])(x)` evaluates as
/// `f1(f2(...fn(x)...))`.
///
/// # Errors
///
/// Returns [`FunError::InvalidArgument`] when the stage list is empty.
/// Composition has no empty unit here; callers that want one can pass
/// `Box::new(identity)` explicitly.
///
/// # Examples
///
/// ```rust
/// use funkit::prelude::*;
///
/// let stages: Vec<Endo<i32>> = vec![Box::new(|x| x + 1), Box::new(|x| x * 2)];
/// let pipeline = compose(stages)?;
/// assert_eq!(pipeline(5), 11);
/// # Result::<(), FunError>::Ok(())
/// ```
pub fn compose<T: 'static>(
    stages: impl IntoIterator<Item = Endo<T>>,
) -> Result<Endo<T>, FunError> {
    stages
        .into_iter()
        .reduce(|f, g| -> Endo<T> { Box::new(compose2(f, g)) })
        .ok_or(FunError::InvalidArgument {
            operation: "compose",
            reason: "requires at least one stage",
        })
}

/// Compose a variadic list of functions right-to-left at compile time.
///
/// Desugars to nested [`compose2`] calls, so the stages may have
/// heterogeneous types as long as adjacent outputs and inputs line up:
/// `compose!(f1, f2, f3)(x) == f1(f2(f3(x)))`.
///
/// The empty invocation does not parse; composing zero functions is rejected
/// before it can become a runtime fault.
///
/// # Examples
///
/// ```rust
/// use funkit::compose;
///
/// let classify = compose!(|n: usize| n > 2, |v: Vec<i32>| v.len());
/// assert!(classify(vec![1, 2, 3]));
/// ```
#[macro_export]
macro_rules! compose {
    ($f:expr $(,)?) => {
        $f
    };
    ($f:expr, $($rest:expr),+ $(,)?) => {
        $crate::combinators::compose::compose2($f, $crate::compose!($($rest),+))
    };
}

// ============================================================================
// Supporting Combinators
// ============================================================================

/// The identity function, the unit of composition.
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// A function that ignores its input and always returns `value`.
///
/// # Examples
///
/// ```rust
/// use funkit::prelude::*;
///
/// let zeros: Vec<i32> = map(constant(0))(&[1, 2, 3]);
/// assert_eq!(zeros, vec![0, 0, 0]);
/// ```
#[inline]
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T {
    move |_| value.clone()
}

/// Swap the arguments of a binary function: `flip(f)(b, a) == f(a, b)`.
#[inline]
pub fn flip<A, B, C, F>(f: F) -> impl Fn(B, A) -> C
where
    F: Fn(A, B) -> C,
{
    move |b, a| f(a, b)
}
