//! Layer 3: Sequence
//!
//! # Purpose
//!
//! This layer provides curried traversals over slices:
//!
//! - **Transform**: elementwise map, filter, reverse
//! - **Fold**: left/right folds and the `all`/`any` predicates
//! - **Slice**: prefix/suffix selection and first/last element access
//! - **Zip**: pairwise combination of two sequences
//!
//! Every helper takes its configuration arguments first and returns a
//! closure over `&[T]`, so it composes directly with the combinators layer.
//! Inputs are never mutated; outputs are freshly allocated.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: Numeric
//!   ↓
//! Layer 4: Mapping
//!   ↓
//! Layer 3: Sequence ← You are here
//!   ↓
//! Layer 2: Combinators
//!   ↓
//! Layer 1: Primitives
//! ```

/// Elementwise transforms.
pub mod transform;

/// Left and right folds, universal and existential predicates.
pub mod fold;

/// Prefix/suffix selection and element access.
pub mod slice;

/// Pairwise combination of two sequences.
pub mod zip;
