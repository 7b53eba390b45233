//! Tests for the prelude module.
//!
//! These tests verify that the prelude exports the whole function surface
//! and that a realistic curried workflow needs only prelude imports.
//!
//! ## Test Organization
//!
//! 1. **Import Verification** - every export is accessible unqualified
//! 2. **Workflow** - a complete pipeline built from prelude names only

use funkit::prelude::*;

// ============================================================================
// Import Verification Tests
// ============================================================================

/// Test that the combinator exports are accessible.
///
/// Verifies compose2/compose/Endo, the currying adaptors, and the
/// supporting combinators.
#[test]
fn test_prelude_combinators() {
    let _ = compose2(|x: i32| x, |x: i32| x);
    let stage: Endo<i32> = Box::new(identity);
    let _ = compose(vec![stage]);
    let _ = constant::<_, i32>(1);
    let _ = flip(|a: i32, b: i32| a - b);

    assert_eq!(curry0(|| 0), 0);
    let _ = curry2(|a: i32, b: i32| a + b);
    let _ = curry3(|a: i32, b: i32, c: i32| a + b + c);
    let _ = curry4(|a: i32, b: i32, c: i32, d: i32| a + b + c + d);
}

/// Test that the sequence exports are accessible.
///
/// Verifies the traversal surface, including the fold aliases and the
/// zip-policy pair.
#[test]
fn test_prelude_sequence() {
    let xs = vec![1, 2, 3];

    assert_eq!(map(|x: i32| x)(&xs), xs);
    assert_eq!(filter(|_: &i32| true)(&xs), xs);
    assert_eq!(reverse(&xs), vec![3, 2, 1]);
    assert_eq!(foldl(|a: i32, x: i32| a + x, 0)(&xs), 6);
    assert_eq!(foldr(|x: i32, a: i32| x + a, 0)(&xs), 6);
    assert_eq!(reduce(|a: i32, x: i32| a + x, 0)(&xs), 6);
    assert_eq!(reduce_right(|x: i32, a: i32| x + a, 0)(&xs), 6);
    assert!(all(|x: &i32| *x > 0)(&xs));
    assert!(any(|x: &i32| *x == 2)(&xs));
    assert_eq!(take(2)(&xs), vec![1, 2]);
    assert_eq!(take_while(|x: &i32| *x < 3)(&xs), vec![1, 2]);
    assert_eq!(drop(2)(&xs), vec![3]);
    assert_eq!(drop_while(|x: &i32| *x < 3)(&xs), vec![3]);
    assert_eq!(head(&xs), Ok(1));
    assert_eq!(last(&xs), Ok(3));
    assert_eq!(zip(&xs, &xs).len(), 3);
    assert_eq!(zip_with(|a: i32, b: i32| a + b)(&xs, &xs), vec![2, 4, 6]);
    assert_eq!(zip_longest(&xs, &[1]).len(), 3);
    assert_eq!(
        zip_longest_with(|a: Option<i32>, _: Option<i32>| a)(&xs, &[]).len(),
        3
    );
}

/// Test that the mapping and numeric exports are accessible.
///
/// Verifies map_values and the numeric surface.
#[test]
fn test_prelude_mapping_numeric() {
    let mut table = indexmap::IndexMap::new();
    table.insert("k".to_string(), 2);

    assert_eq!(map_values(|v: i32| v * 2)(&table)["k"], 4);
    assert_eq!(map_values_with_key(|_: &String, v: i32| v)(&table)["k"], 2);

    assert_eq!(max(1, 2), 2);
    assert_eq!(min(1, 2), 1);
    assert_eq!(maximum(&[1, 2]), Ok(2));
    assert_eq!(minimum(&[1, 2]), Ok(1));
    assert_eq!(sum(&[1, 2]), 3);
    assert_eq!(product(&[2, 3]), 6);
    assert_eq!(range(1, 3), vec![1, 2, 3]);
}

/// Test that the error type is exported.
///
/// Verifies FunError variants are nameable from the prelude.
#[test]
fn test_prelude_error_type() {
    let err: FunError = FunError::EmptyInput { operation: "head" };

    assert_eq!(err.to_string(), "head: input sequence is empty");
}

// ============================================================================
// Workflow Tests
// ============================================================================

/// Test a complete curried workflow with prelude imports only.
///
/// Verifies that traversal, composition, and aggregation chain together.
#[test]
fn test_prelude_complete_workflow() {
    let xs = vec![1, 2, 3, 4, 5, 6];

    // Keep the evens, square them, then sum the squares.
    let sum_of_even_squares = compose2(
        |v: Vec<i32>| sum(&v),
        compose2(
            |v: Vec<i32>| map(|x: i32| x * x)(&v),
            filter(|x: &i32| x % 2 == 0),
        ),
    );

    assert_eq!(sum_of_even_squares(&xs), 56);
}
