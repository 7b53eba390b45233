//! Sequence reductions and range generation.
//!
//! ## Purpose
//!
//! Aggregations over numeric slices: extrema, sums, products, and the
//! inclusive ascending `range` generator.
//!
//! ## Design notes
//!
//! * **Identities from `num-traits`**: `sum` folds from `Zero::zero()` and
//!   `product` from `One::one()`, so both are defined and correct on the
//!   empty sequence.
//! * **Explicit emptiness errors**: `maximum`/`minimum` have no identity
//!   element, so the empty sequence is an [`FunError::EmptyInput`], never a
//!   silent infinity default.
//!
//! ## Invariants
//!
//! * `range(start, end)` is `[start, start+1, ..., end]` inclusive, and
//!   empty when `start > end`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::ops::Add;
use num_traits::{One, Zero};

// Internal dependencies
use crate::numeric::scalar::{max, min};
use crate::primitives::errors::FunError;

// ============================================================================
// Extrema
// ============================================================================

/// The largest element of a non-empty sequence.
///
/// # Errors
///
/// Returns [`FunError::EmptyInput`] when the sequence has no elements.
///
/// # Examples
///
/// ```rust
/// use funkit::prelude::*;
///
/// assert_eq!(maximum(&[3, 1, 4, 1, 5]), Ok(5));
/// assert!(maximum::<i32>(&[]).is_err());
/// ```
#[inline]
pub fn maximum<T: PartialOrd + Clone>(xs: &[T]) -> Result<T, FunError> {
    xs.iter().cloned().reduce(max).ok_or(FunError::EmptyInput {
        operation: "maximum",
    })
}

/// The smallest element of a non-empty sequence.
///
/// # Errors
///
/// Returns [`FunError::EmptyInput`] when the sequence has no elements.
#[inline]
pub fn minimum<T: PartialOrd + Clone>(xs: &[T]) -> Result<T, FunError> {
    xs.iter().cloned().reduce(min).ok_or(FunError::EmptyInput {
        operation: "minimum",
    })
}

// ============================================================================
// Folded Aggregates
// ============================================================================

/// Sum of a sequence, `Zero::zero()` on the empty one.
#[inline]
pub fn sum<T: Zero + Clone>(xs: &[T]) -> T {
    xs.iter().cloned().fold(T::zero(), |acc, x| acc + x)
}

/// Product of a sequence, `One::one()` on the empty one.
#[inline]
pub fn product<T: One + Clone>(xs: &[T]) -> T {
    xs.iter().cloned().fold(T::one(), |acc, x| acc * x)
}

// ============================================================================
// Range Generation
// ============================================================================

/// Inclusive ascending sequence `[start, start+1, ..., end]`; empty when
/// `start > end`.
///
/// # Examples
///
/// ```rust
/// use funkit::prelude::*;
///
/// assert_eq!(range(1, 5), vec![1, 2, 3, 4, 5]);
/// assert_eq!(range(5, 1), Vec::<i32>::new());
/// ```
pub fn range<T>(start: T, end: T) -> Vec<T>
where
    T: Copy + PartialOrd + Add<Output = T> + One,
{
    let mut out = Vec::new();
    if start > end {
        return out;
    }
    let mut k = start;
    // Stop before incrementing past `end`: `end` may be the type's upper
    // bound, where one more addition would overflow.
    loop {
        out.push(k);
        if k >= end {
            break;
        }
        k = k + T::one();
    }
    out
}
