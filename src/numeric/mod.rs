//! Layer 5: Numeric
//!
//! # Purpose
//!
//! This layer provides scalar and aggregate arithmetic:
//!
//! - **Scalar**: binary `max`/`min` over anything `PartialOrd`
//! - **Aggregate**: `maximum`/`minimum`/`sum`/`product` reductions and the
//!   inclusive `range` generator
//!
//! # Architecture
//!
//! ```text
//! Layer 5: Numeric ← You are here
//!   ↓
//! Layer 4: Mapping
//!   ↓
//! Layer 3: Sequence
//!   ↓
//! Layer 2: Combinators
//!   ↓
//! Layer 1: Primitives
//! ```

/// Binary scalar comparisons.
pub mod scalar;

/// Sequence reductions and range generation.
pub mod aggregate;
