//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the shared primitives used throughout the crate. It
//! has zero internal dependencies within the crate.
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
//! Layer 2: Combinators
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Shared error types.
pub mod errors;
