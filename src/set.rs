//! Membership-based set operations over generic sequences.
//!
//! These back reconciliation callers comparing a previous and a next
//! collection (e.g. deciding whether a list needs re-rendering). Membership
//! here means existence-in-sequence, not multiset cardinality: duplicate
//! counts are deliberately ignored, and only `T: PartialEq` is required of
//! element types — no hashing or ordering.

use serde::{Deserialize, Serialize};

/// The outcome of [`diff`]: what appeared and what disappeared between an
/// old and a new sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diff<T> {
    /// Elements of the new sequence absent from the old one, in new-sequence order.
    pub added: Vec<T>,
    /// Elements of the old sequence absent from the new one, in old-sequence order.
    pub removed: Vec<T>,
}

impl<T> Diff<T> {
    /// Returns true when nothing was added or removed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

/// Returns true if the sequences differ positionally: unequal lengths, or any
/// index where `a[i] != b[i]`.
///
/// ```
/// assert!(wavebars::has_order_change(&[1, 2, 3], &[1, 3, 2]));
/// assert!(!wavebars::has_order_change(&[1, 2, 3], &[1, 2, 3]));
/// ```
pub fn has_order_change<T: PartialEq>(a: &[T], b: &[T]) -> bool {
    a != b
}

/// Returns true if the sequences differ in content: unequal lengths, or any
/// element of one side that is not a member of the other.
///
/// Order and duplicate counts are ignored, so two sequences holding the same
/// values in a different order compare as equal:
///
/// ```
/// assert!(!wavebars::has_diff(&[1, 2, 3], &[3, 2, 1]));
/// assert!(wavebars::has_diff(&[1, 2, 3], &[1, 2, 4]));
/// ```
pub fn has_diff<T: PartialEq>(a: &[T], b: &[T]) -> bool {
    if a.len() != b.len() {
        return true;
    }
    b.iter().any(|x| !a.contains(x)) || a.iter().any(|x| !b.contains(x))
}

/// Computes the membership diff from `a` (old) to `b` (new).
///
/// `added` holds elements of `b` that are not members of `a`, in `b`'s order;
/// `removed` holds elements of `a` that are not members of `b`, in `a`'s
/// order. A duplicate in `b` of a value that exists anywhere in `a` is not
/// counted as added (this is not a multiset diff).
///
/// ```
/// let d = wavebars::diff(&[1, 2, 3], &[2, 3, 4]);
/// assert_eq!(d.added, vec![4]);
/// assert_eq!(d.removed, vec![1]);
/// ```
pub fn diff<T: Clone + PartialEq>(a: &[T], b: &[T]) -> Diff<T> {
    Diff {
        added: b.iter().filter(|x| !a.contains(x)).cloned().collect(),
        removed: a.iter().filter(|x| !b.contains(x)).cloned().collect(),
    }
}

/// Returns the elements of `a`, in `a`'s order, that are also members of `b`.
///
/// Naming anomaly, kept on purpose: despite the name this is an intersection
/// by membership, not a set union. The behavior is an inherited contract that
/// reconciliation callers rely on, so it is preserved exactly and flagged
/// here rather than renamed. For an actual union, see [`merge`].
///
/// ```
/// assert_eq!(wavebars::union(&[1, 2, 3], &[3, 2]), vec![2, 3]);
/// ```
pub fn union<T: Clone + PartialEq>(a: &[T], b: &[T]) -> Vec<T> {
    a.iter().filter(|x| b.contains(x)).cloned().collect()
}

/// Deduplicated union of all elements across `sequences`, in first-seen order
/// across the sequences in argument order, each scanned left to right.
///
/// ```
/// let merged = wavebars::merge(&[&[1, 2][..], &[2, 3][..], &[3, 4][..]]);
/// assert_eq!(merged, vec![1, 2, 3, 4]);
/// ```
pub fn merge<T: Clone + PartialEq>(sequences: &[&[T]]) -> Vec<T> {
    let mut out = Vec::new();
    for seq in sequences {
        for value in *seq {
            if !out.contains(value) {
                out.push(value.clone());
            }
        }
    }
    out
}
