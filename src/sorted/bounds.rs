//! Lower/upper bound primitives over a sorted slice.
//!
//! Every positional query of [`SortedCollection`](super::SortedCollection)
//! reduces to one of these two searches:
//!
//! ```text
//! keys:         [22, 28, 28, 30]
//! lower(28) ->        ^            first index with key >= 28  (1)
//! upper(28) ->                ^    first index with key >  28  (3)
//! ```
//!
//! Both are O(log n) and assume the slice is sorted non-decreasing.

use std::ops::Range;

/// First index whose key is `>= key` (`keys.len()` if none).
///
/// # Example
///
/// ```
/// use contest_kit::sorted::bounds::lower_bound;
///
/// let keys = [22, 28, 28, 30];
/// assert_eq!(lower_bound(&keys, &28), 1);
/// assert_eq!(lower_bound(&keys, &29), 3);
/// assert_eq!(lower_bound(&keys, &99), 4);
/// ```
#[inline]
pub fn lower_bound<K: Ord>(keys: &[K], key: &K) -> usize {
    keys.partition_point(|k| k < key)
}

/// First index whose key is `> key` (`keys.len()` if none).
///
/// # Example
///
/// ```
/// use contest_kit::sorted::bounds::upper_bound;
///
/// let keys = [22, 28, 28, 30];
/// assert_eq!(upper_bound(&keys, &28), 3);
/// assert_eq!(upper_bound(&keys, &21), 0);
/// ```
#[inline]
pub fn upper_bound<K: Ord>(keys: &[K], key: &K) -> usize {
    keys.partition_point(|k| k <= key)
}

/// The contiguous span of positions whose key equals `key`.
///
/// Empty (but positioned at the insertion point) when no key matches.
#[inline]
pub fn equal_range<K: Ord>(keys: &[K], key: &K) -> Range<usize> {
    let start = lower_bound(keys, key);
    // The upper bound can only lie at or after the lower bound
    let end = start + upper_bound(&keys[start..], key);
    start..end
}

// ============================================================================
// Unit Tests
// ============================================================================
