//! Key-derived grouping with deterministic insertion order, and flattening
//! back to a sequence under a caller-supplied key order.

use indexmap::IndexMap;
use std::hash::Hash;

/// A mapping from a derived key to the ordered subsequence of source elements
/// sharing that key.
///
/// Backed by [`IndexMap`] so key iteration order is the first-occurrence
/// order of each key in the source sequence, and bucket order is source
/// order. Grouping never drops or duplicates elements.
pub type Grouping<K, T> = IndexMap<K, Vec<T>>;

/// Groups `source` by the key derived from each element.
///
/// Buckets are created on first occurrence of a key; elements within a bucket
/// keep their relative source order.
///
/// ```
/// let grouping = wavebars::group_by(&[1, 2, 3, 4, 5], |n| n % 2);
/// assert_eq!(grouping[&1], vec![1, 3, 5]);
/// assert_eq!(grouping[&0], vec![2, 4]);
/// // 1 appeared first in the source, so its key iterates first.
/// assert_eq!(grouping.keys().copied().collect::<Vec<_>>(), vec![1, 0]);
/// ```
pub fn group_by<T, K, F>(source: &[T], mut key_fn: F) -> Grouping<K, T>
where
    T: Clone,
    K: Hash + Eq,
    F: FnMut(&T) -> K,
{
    let mut grouping = Grouping::new();
    for element in source {
        grouping
            .entry(key_fn(element))
            .or_insert_with(Vec::new)
            .push(element.clone());
    }
    grouping
}

/// Flattens a grouping back into a sequence, visiting buckets in `key_order`.
///
/// Keys in `key_order` absent from the grouping are skipped; buckets whose
/// key does not appear in `key_order` are silently dropped. Neither case is
/// an error.
///
/// ```
/// let grouping = wavebars::group_by(&["ant", "bee", "asp"], |w| w.as_bytes()[0]);
/// let flat = wavebars::order_by(&grouping, &[b'b', b'a', b'z']);
/// assert_eq!(flat, vec!["bee", "ant", "asp"]);
/// ```
pub fn order_by<T, K>(grouping: &Grouping<K, T>, key_order: &[K]) -> Vec<T>
where
    T: Clone,
    K: Hash + Eq,
{
    let mut out = Vec::new();
    for key in key_order {
        if let Some(bucket) = grouping.get(key) {
            out.extend_from_slice(bucket);
        }
    }
    out
}
