//! Tests for folds and quantifier predicates.
//!
//! These tests verify foldl/foldr and all/any:
//! - Fold direction and accumulator threading
//! - Empty-sequence identities
//! - Vacuous truth for the quantifiers
//!
//! ## Test Organization
//!
//! 1. **Left Fold** - direction and empty identity
//! 2. **Right Fold** - direction and empty identity
//! 3. **Aliases** - reduce/reduce_right
//! 4. **Quantifiers** - all/any including vacuous cases

use funkit::prelude::*;

// ============================================================================
// Left Fold Tests
// ============================================================================

/// Test left fold direction.
///
/// Verifies `foldl(-, 0)([1,2,3]) == ((0-1)-2)-3`.
#[test]
fn test_foldl_direction() {
    assert_eq!(foldl(|acc: i32, x: i32| acc - x, 0)(&[1, 2, 3]), -6);
}

/// Test the left fold empty-sequence identity.
///
/// Verifies `foldl(f, acc)([]) == acc` regardless of f.
#[test]
fn test_foldl_empty_returns_accumulator() {
    assert_eq!(foldl(|acc: i32, x: i32| acc * x + 17, 7)(&[]), 7);
}

/// Test left fold with a non-Copy accumulator.
///
/// Verifies that the initial accumulator is cloned per invocation, so the
/// folder closure stays reusable.
#[test]
fn test_foldl_reusable_with_owned_accumulator() {
    let join = foldl(
        |mut acc: String, x: i32| {
            acc.push_str(&x.to_string());
            acc
        },
        String::new(),
    );

    assert_eq!(join(&[1, 2, 3]), "123");
    assert_eq!(join(&[4, 5]), "45");
}

// ============================================================================
// Right Fold Tests
// ============================================================================

/// Test right fold direction.
///
/// Verifies `foldr(-, 0)([1,2,3]) == 1-(2-(3-0))`.
#[test]
fn test_foldr_direction() {
    assert_eq!(foldr(|x: i32, acc: i32| x - acc, 0)(&[1, 2, 3]), 2);
}

/// Test the right fold empty-sequence identity.
///
/// Verifies `foldr(f, acc)([]) == acc`.
#[test]
fn test_foldr_empty_returns_accumulator() {
    assert_eq!(foldr(|x: i32, acc: i32| x + acc, 9)(&[]), 9);
}

/// Test that foldr visits elements right-to-left.
///
/// Verifies ordering by prepending into a Vec.
#[test]
fn test_foldr_builds_in_original_order() {
    let rebuild = foldr(
        |x: i32, mut acc: Vec<i32>| {
            acc.insert(0, x);
            acc
        },
        Vec::new(),
    );

    assert_eq!(rebuild(&[1, 2, 3]), vec![1, 2, 3]);
}

// ============================================================================
// Alias Tests
// ============================================================================

/// Test the reduce/reduce_right aliases.
///
/// Verifies that the aliases are the same functions.
#[test]
fn test_fold_aliases() {
    assert_eq!(reduce(|acc: i32, x: i32| acc + x, 0)(&[1, 2, 3]), 6);
    assert_eq!(reduce_right(|x: i32, acc: i32| x - acc, 0)(&[1, 2, 3]), 2);
}

// ============================================================================
// Quantifier Tests
// ============================================================================

/// Test the universal quantifier.
///
/// Verifies all-true, one-false, and the vacuous empty case.
#[test]
fn test_all() {
    let positive = all(|x: &i32| *x > 0);

    assert!(positive(&[1, 2, 3]));
    assert!(!positive(&[1, -2, 3]));
    assert!(positive(&[]));
}

/// Test the existential quantifier.
///
/// Verifies one-true, all-false, and the empty case.
#[test]
fn test_any() {
    let negative = any(|x: &i32| *x < 0);

    assert!(negative(&[1, -2, 3]));
    assert!(!negative(&[1, 2, 3]));
    assert!(!negative(&[]));
}
