//! Layer 2: Combinators
//!
//! # Purpose
//!
//! This layer provides the composition and currying engines:
//!
//! - **Compose**: binary composition, runtime variadic composition over
//!   boxed stages, and the compile-time [`compose!`](crate::compose) macro.
//! - **Curry**: per-arity adaptors that turn an n-ary function into a chain
//!   of unary functions with branch-safe partial application.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: Numeric
//!   ↓
//! Layer 4: Mapping
//!   ↓
//! Layer 3: Sequence
//!   ↓
//! Layer 2: Combinators ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Function composition.
pub mod compose;

/// Per-arity currying adaptors.
pub mod curry;
