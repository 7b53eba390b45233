//! Layer 4: Mapping
//!
//! # Purpose
//!
//! This layer provides key-preserving transforms over insertion-ordered
//! maps. Keys and their order survive unchanged; only values are rebuilt.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: Numeric
//!   ↓
//! Layer 4: Mapping ← You are here
//!   ↓
//! Layer 3: Sequence
//!   ↓
//! Layer 2: Combinators
//!   ↓
//! Layer 1: Primitives
//! ```

/// Value transforms over ordered maps.
pub mod values;
