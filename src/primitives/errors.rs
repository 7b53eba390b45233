//! Error types for funkit operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions a pure helper can hit: an
//! operation that needs at least one element receiving none, and a
//! structurally invalid call.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors name the operation that detected them.
//! * **Synchronous**: Every error is returned at the call site; there is no
//!   retry or recovery layer in a pure-function library.
//! * **No-std**: Variants carry `&'static str` context only, so the type is
//!   `Copy` and needs no allocator.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error`
//!   (when `std` is enabled).
//!
//! ## Invariants
//!
//! * A caller receives either a valid result or an explicit error value;
//!   no operation substitutes a silent sentinel for a failure.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for funkit operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FunError {
    /// The operation requires at least one element but received none.
    EmptyInput {
        /// Name of the operation that detected the empty input.
        operation: &'static str,
    },

    /// The call was structurally invalid (e.g. composing zero stages).
    InvalidArgument {
        /// Name of the operation that rejected the call.
        operation: &'static str,
        /// Why the call was rejected.
        reason: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for FunError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::EmptyInput { operation } => {
                write!(f, "{operation}: input sequence is empty")
            }
            Self::InvalidArgument { operation, reason } => {
                write!(f, "{operation}: {reason}")
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl std::error::Error for FunError {}
