//! Per-arity currying adaptors.
//!
//! ## Purpose
//!
//! This module turns fixed-arity functions into chains of single-argument
//! functions: `curry3(f)(a)(b)(c) == f(a, b, c)`.
//!
//! ## Design notes
//!
//! * **Arity in the type**: Rust carries a function's arity in its type, so
//!   the engine is a family of per-arity adaptors (`curry2`..`curry4`)
//!   rather than a single reflective entry point. Supplying more arguments
//!   than the arity does not type-check, which is the loudest possible
//!   failure for over-application.
//! * **Branch-safe partial application**: every step clones the arguments
//!   accumulated so far into the closure it returns. Two partial
//!   applications obtained from the same curried function own independent
//!   state; invoking one never corrupts the other.
//! * **Boxed links**: the chain links are `Box<dyn Fn>` because `impl Trait`
//!   cannot nest in closure return position; the outermost adaptor stays
//!   unboxed.
//!
//! ## Key concepts
//!
//! * **Zero arity**: [`curry0`] evaluates its function immediately; a
//!   nullary function has nothing to wait for.
//!
//! ## Invariants
//!
//! * `curry2(f)(a)(b) == f(a, b)` and likewise for higher arities.
//! * A partial application may be invoked any number of times, each time
//!   with fresh copies of the captured arguments.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::boxed::Box;
#[cfg(feature = "std")]
use std::boxed::Box;

// ============================================================================
// Currying Adaptors
// ============================================================================

/// Curry a nullary function: evaluates `f` immediately.
///
/// With no arguments to wait for, the curried form of a nullary function is
/// just its result. This is a deliberate, documented special case.
///
/// # Examples
///
/// ```rust
/// use funkit::prelude::*;
///
/// assert_eq!(curry0(|| 42), 42);
/// ```
#[inline]
pub fn curry0<R>(f: impl FnOnce() -> R) -> R {
    f()
}

/// Curry a binary function: `curry2(f)(a)(b) == f(a, b)`.
///
/// # Examples
///
/// ```rust
/// use funkit::prelude::*;
///
/// let add = curry2(|a: i32, b: i32| a + b);
/// let add_five = add(5);
/// assert_eq!(add_five(3), 8);
/// assert_eq!(add_five(10), 15);
/// ```
pub fn curry2<A, B, R, F>(f: F) -> impl Fn(A) -> Box<dyn Fn(B) -> R>
where
    F: Fn(A, B) -> R + Clone + 'static,
    A: Clone + 'static,
    B: 'static,
    R: 'static,
{
    move |a: A| -> Box<dyn Fn(B) -> R> {
        let f = f.clone();
        Box::new(move |b: B| f(a.clone(), b))
    }
}

/// Curry a ternary function: `curry3(f)(a)(b)(c) == f(a, b, c)`.
///
/// # Examples
///
/// ```rust
/// use funkit::prelude::*;
///
/// fn clamp(lo: i32, hi: i32, x: i32) -> i32 {
///     x.max(lo).min(hi)
/// }
///
/// let clamp_percent = curry3(clamp)(0)(100);
/// assert_eq!(clamp_percent(250), 100);
/// assert_eq!(clamp_percent(-3), 0);
/// ```
pub fn curry3<A, B, C, R, F>(f: F) -> impl Fn(A) -> Box<dyn Fn(B) -> Box<dyn Fn(C) -> R>>
where
    F: Fn(A, B, C) -> R + Clone + 'static,
    A: Clone + 'static,
    B: Clone + 'static,
    C: 'static,
    R: 'static,
{
    move |a: A| -> Box<dyn Fn(B) -> Box<dyn Fn(C) -> R>> {
        let f = f.clone();
        Box::new(move |b: B| -> Box<dyn Fn(C) -> R> {
            let f = f.clone();
            let a = a.clone();
            Box::new(move |c: C| f(a.clone(), b.clone(), c))
        })
    }
}

/// Curry a 4-ary function: `curry4(f)(a)(b)(c)(d) == f(a, b, c, d)`.
pub fn curry4<A, B, C, D, R, F>(
    f: F,
) -> impl Fn(A) -> Box<dyn Fn(B) -> Box<dyn Fn(C) -> Box<dyn Fn(D) -> R>>>
where
    F: Fn(A, B, C, D) -> R + Clone + 'static,
    A: Clone + 'static,
    B: Clone + 'static,
    C: Clone + 'static,
    D: 'static,
    R: 'static,
{
    move |a: A| -> Box<dyn Fn(B) -> Box<dyn Fn(C) -> Box<dyn Fn(D) -> R>>> {
        let f = f.clone();
        Box::new(move |b: B| -> Box<dyn Fn(C) -> Box<dyn Fn(D) -> R>> {
            let f = f.clone();
            let a = a.clone();
            Box::new(move |c: C| -> Box<dyn Fn(D) -> R> {
                let f = f.clone();
                let a = a.clone();
                let b = b.clone();
                Box::new(move |d: D| f(a.clone(), b.clone(), c.clone(), d))
            })
        })
    }
}
