//! Value transforms over insertion-ordered maps.
//!
//! ## Purpose
//!
//! Curried transforms over [`IndexMap`] that rebuild every value while
//! preserving the key set and its insertion order.
//!
//! ## Design notes
//!
//! * **Insertion order**: the contract requires iteration order to follow
//!   insertion order, which is exactly what `IndexMap` guarantees and what
//!   `HashMap`/`BTreeMap` do not.
//! * **Hasher-generic**: the hasher parameter `S` stays generic (bounded by
//!   `Default`) so the functions work without the `std` feature, where no
//!   default `RandomState` exists.
//!
//! ## Invariants
//!
//! * The output map has the same keys, in the same order, as the input.
//! * The input map is never mutated.

// External dependencies
use core::hash::{BuildHasher, Hash};
use indexmap::IndexMap;

// ============================================================================
// Value Transforms
// ============================================================================

/// Curried value transform: `map_values(f)(table)` applies `f` to every
/// value, preserving keys and their insertion order.
///
/// # Examples
///
/// ```rust
/// use funkit::prelude::*;
/// use indexmap::IndexMap;
///
/// let mut ages: IndexMap<&str, u32> = IndexMap::new();
/// ages.insert("ada", 36);
/// ages.insert("alan", 41);
///
/// let in_months = map_values(|age: u32| age * 12)(&ages);
/// assert_eq!(in_months["ada"], 432);
/// assert_eq!(in_months.keys().collect::<Vec<_>>(), vec![&"ada", &"alan"]);
/// ```
#[inline]
pub fn map_values<K, V, W, S, F>(f: F) -> impl Fn(&IndexMap<K, V, S>) -> IndexMap<K, W, S>
where
    K: Hash + Eq + Clone,
    V: Clone,
    S: BuildHasher + Default,
    F: Fn(V) -> W,
{
    move |table| {
        let mut out = IndexMap::with_capacity_and_hasher(table.len(), S::default());
        for (key, value) in table {
            out.insert(key.clone(), f(value.clone()));
        }
        out
    }
}

/// Curried value transform whose function also receives the key.
#[inline]
pub fn map_values_with_key<K, V, W, S, F>(
    f: F,
) -> impl Fn(&IndexMap<K, V, S>) -> IndexMap<K, W, S>
where
    K: Hash + Eq + Clone,
    V: Clone,
    S: BuildHasher + Default,
    F: Fn(&K, V) -> W,
{
    move |table| {
        let mut out = IndexMap::with_capacity_and_hasher(table.len(), S::default());
        for (key, value) in table {
            let transformed = f(key, value.clone());
            out.insert(key.clone(), transformed);
        }
        out
    }
}
