//! # funkit — curried functional programming building blocks for Rust
//!
//! A small library of pure, composable helper functions: function
//! composition, per-arity currying, curried sequence traversals
//! (map/fold/filter/zip/slice), insertion-ordered mapping transforms, and
//! numeric aggregation.
//!
//! Every function is a short, independent, pure transformation. Traversal
//! helpers are curried by construction: configuration arguments come first
//! and a closure over the sequence comes back, so any helper slots directly
//! into [`compose2`](prelude::compose2) or the [`compose!`](crate::compose)
//! macro.
//!
//! ## Quick Start
//!
//! ### Curried traversal and composition
//!
//! ```rust
//! use funkit::prelude::*;
//!
//! let xs = vec![3, 1, 4, 1, 5];
//!
//! // Traversal helpers return closures over the sequence.
//! let doubled = map(|x: i32| x * 2)(&xs);
//! assert_eq!(doubled, vec![6, 2, 8, 2, 10]);
//!
//! // compose2(f, g)(x) == f(g(x))
//! let double_then_sum = compose2(|v: Vec<i32>| sum(&v), map(|x: i32| x * 2));
//! assert_eq!(double_then_sum(&xs), 28);
//! ```
//!
//! ### Currying and partial application
//!
//! ```rust
//! use funkit::prelude::*;
//!
//! fn add3(a: i32, b: i32, c: i32) -> i32 {
//!     a + b + c
//! }
//!
//! // Partial applications are independent: branching never shares state.
//! let partial = curry3(add3)(1);
//! assert_eq!(partial(2)(3), 6);
//! assert_eq!(partial(5)(5), 11);
//! ```
//!
//! ### Variadic composition
//!
//! ```rust
//! use funkit::compose;
//! use funkit::prelude::*;
//!
//! // Static form: heterogeneous types, empty invocation rejected at
//! // compile time.
//! let classify = compose!(
//!     |n: usize| if n > 2 { "long" } else { "short" },
//!     |v: Vec<i32>| v.len(),
//! );
//! assert_eq!(classify(vec![1, 2, 3]), "long");
//!
//! // Dynamic form: a runtime list of stages, guarded against emptiness.
//! let stages: Vec<Endo<i32>> = vec![Box::new(|x| x + 1), Box::new(|x| x * 2)];
//! let pipeline = compose(stages)?;
//! assert_eq!(pipeline(5), 11); // (5 * 2) + 1
//! # Result::<(), FunError>::Ok(())
//! ```
//!
//! ## Result and Error Handling
//!
//! Operations that require a non-empty input (`head`, `last`, `maximum`,
//! `minimum`) and the runtime `compose` return `Result<_, FunError>`. There
//! are no silent sentinels: an empty `maximum` is an error, never a
//! `-infinity` default.
//!
//! ```rust
//! use funkit::prelude::*;
//!
//! assert_eq!(head(&[7, 8, 9]), Ok(7));
//! assert!(head::<i32>(&[]).is_err());
//! ```
//!
//! ## Minimal Usage (no_std)
//!
//! The crate supports `no_std` environments. Disable default features to
//! remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! funkit = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - shared error types.
pub mod primitives;

// Layer 2: Combinators - composition and currying engines.
pub mod combinators;

// Layer 3: Sequence - curried traversals over slices.
pub mod sequence;

// Layer 4: Mapping - key-preserving transforms over ordered maps.
pub mod mapping;

// Layer 5: Numeric - scalar and aggregate arithmetic.
pub mod numeric;

// Standard funkit prelude.
pub mod prelude {
    pub use crate::combinators::compose::{compose, compose2, constant, flip, identity, Endo};
    pub use crate::combinators::curry::{curry0, curry2, curry3, curry4};
    pub use crate::mapping::values::{map_values, map_values_with_key};
    pub use crate::numeric::aggregate::{maximum, minimum, product, range, sum};
    pub use crate::numeric::scalar::{max, min};
    pub use crate::primitives::errors::FunError;
    pub use crate::sequence::fold::{all, any, foldl, foldr, reduce, reduce_right};
    pub use crate::sequence::slice::{drop, drop_while, head, last, take, take_while};
    pub use crate::sequence::transform::{filter, map, reverse};
    pub use crate::sequence::zip::{zip, zip_longest, zip_longest_with, zip_with};
}
