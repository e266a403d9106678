//! Sequence of records kept sorted by a derived key.
//!
//! ## Layout
//!
//! ```text
//! items: [("c","baz",22), ("b","bar",28), ("a","foo",30), ("d","hogehoge",32)]
//! keys:  [22,             28,             30,             32            ]
//! ```
//!
//! `keys` is a cached projection of `items` through the key function, so
//! binary searches compare keys directly instead of re-deriving them.
//!
//! ## Invariants
//!
//! After every public operation:
//!
//! 1. `items.len() == keys.len()`
//! 2. `keys` is sorted non-decreasing
//! 3. `keys[i] == key(&items[i])`
//! 4. Equal keys keep insertion order relative to the side they were
//!    inserted on (`insert` goes before, `insert_right` goes after)
//!
//! ## Complexity
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | Construct / replace key | O(n log n) |
//! | `index`, `find`, bounds | O(log n) |
//! | `contains`, `count` | O(log n + m) |
//! | `insert`, `insert_right`, `remove` | O(log n) + O(n) shift |
//!
//! *m = number of items sharing the query key

use std::fmt;
use std::ops::{Index, Range};

use crate::error::{Error, Result};
use crate::sorted::bounds;
use crate::sorted::{KeyFn, Relation};

/// Records sorted by a derived key.
///
/// ## Example
///
/// ```
/// use contest_kit::sorted::{Relation, SortedCollection};
///
/// let records = vec![("a", "foo", 30), ("b", "bar", 28), ("c", "baz", 22)];
/// let mut people = SortedCollection::new(records, |r: &(&str, &str, u32)| r.2);
///
/// assert_eq!(people.keys(), &[22, 28, 30]);
/// assert_eq!(people.find(Relation::Lt, &30).unwrap().0, "b");
///
/// people.insert(("d", "hogehoge", 32));
/// assert_eq!(people.index(&32), Ok(3));
/// ```
pub struct SortedCollection<T, K> {
    /// Ordering key
    key: KeyFn<T, K>,

    /// Records in non-decreasing key order
    items: Vec<T>,

    /// `keys[i] == key(&items[i])`
    keys: Vec<K>,
}

impl<T, K: Ord> SortedCollection<T, K> {
    /// Build a sorted collection from unordered items
    ///
    /// The sort is stable: items with equal keys keep their input order.
    ///
    /// # Arguments
    ///
    /// * `items` - Records in any order
    /// * `key` - Pure function deriving the ordering key
    pub fn new<I, F>(items: I, key: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: Fn(&T) -> K + Send + Sync + 'static,
    {
        Self::with_key_fn(items, KeyFn::new(key))
    }

    /// Build a sorted collection sharing an existing key function
    pub fn with_key_fn<I>(items: I, key: KeyFn<T, K>) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let (items, keys) = Self::build(items, &key);
        Self { key, items, keys }
    }

    /// Sort `items` by `key` and project the parallel key vector
    fn build<I>(items: I, key: &KeyFn<T, K>) -> (Vec<T>, Vec<K>)
    where
        I: IntoIterator<Item = T>,
    {
        let mut pairs: Vec<(K, T)> = items
            .into_iter()
            .map(|item| (key.key(&item), item))
            .collect();
        // Stable sort on the cached key only
        pairs.sort_by(|a, b| a.0.cmp(&b.0));
        pairs.into_iter().map(|(k, item)| (item, k)).unzip()
    }

    // ========================================================================
    // Key Function
    // ========================================================================

    /// Get the current key function
    #[inline]
    pub fn key_fn(&self) -> &KeyFn<T, K> {
        &self.key
    }

    /// Replace the key function
    ///
    /// Re-sorts every item unless `key` is the very same shared function
    /// as the current one. Returns whether a rebuild happened. The key type
    /// stays `K`; use [`rekey`](Self::rekey) to switch to a different one.
    ///
    /// # Example
    ///
    /// ```
    /// use contest_kit::sorted::{KeyFn, SortedCollection};
    ///
    /// let mut s = SortedCollection::new(vec![("b", 1), ("a", 2)], |r: &(&str, u32)| r.1);
    /// let current = s.key_fn().clone();
    ///
    /// assert!(!s.set_key_fn(current));
    /// assert!(s.set_key_fn(KeyFn::new(|r: &(&str, u32)| 10 - r.1)));
    /// assert_eq!(s.items(), &[("a", 2), ("b", 1)]);
    /// ```
    pub fn set_key_fn(&mut self, key: KeyFn<T, K>) -> bool {
        if key.ptr_eq(&self.key) {
            return false;
        }
        let items = std::mem::take(&mut self.items);
        let (items, keys) = Self::build(items, &key);
        self.key = key;
        self.items = items;
        self.keys = keys;
        true
    }

    /// Replace the key function with a fresh closure (always rebuilds)
    pub fn set_key<F>(&mut self, key: F)
    where
        F: Fn(&T) -> K + Send + Sync + 'static,
    {
        self.set_key_fn(KeyFn::new(key));
    }

    /// Re-sort the items under a key function of a different key type
    ///
    /// Equal new keys keep their current relative order.
    ///
    /// # Example
    ///
    /// ```
    /// use contest_kit::sorted::{KeyFn, SortedCollection};
    ///
    /// type Row = (&'static str, u32);
    ///
    /// let by_score = SortedCollection::new(vec![("b", 1), ("a", 2)], |r: &Row| r.1);
    /// let by_name = by_score.rekey(KeyFn::new(|r: &Row| r.0));
    ///
    /// assert_eq!(by_name.keys(), &["a", "b"]);
    /// ```
    pub fn rekey<K2: Ord>(self, key: KeyFn<T, K2>) -> SortedCollection<T, K2> {
        SortedCollection::with_key_fn(self.items, key)
    }

    // ========================================================================
    // Read Accessors
    // ========================================================================

    /// Items in ascending key order
    #[inline]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Cached keys, parallel to [`items`](Self::items)
    #[inline]
    pub fn keys(&self) -> &[K] {
        &self.keys
    }

    /// Number of items
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the collection is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Item at sorted position `index`, or `None` if out of range
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Item at sorted position `index`
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfBounds`] when `index >= len()`.
    pub fn item_at(&self, index: usize) -> Result<&T, K> {
        self.items.get(index).ok_or(Error::IndexOutOfBounds {
            index,
            len: self.items.len(),
        })
    }

    /// Smallest-key item
    #[inline]
    pub fn first(&self) -> Option<&T> {
        self.items.first()
    }

    /// Largest-key item
    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.items.last()
    }

    /// Iterate items in ascending key order
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Iterate items in descending key order
    #[inline]
    pub fn iter_rev(&self) -> std::iter::Rev<std::slice::Iter<'_, T>> {
        self.items.iter().rev()
    }

    // ========================================================================
    // Bounds
    // ========================================================================

    /// First position whose key is `>= key`
    #[inline]
    pub fn lower_bound(&self, key: &K) -> usize {
        bounds::lower_bound(&self.keys, key)
    }

    /// First position whose key is `> key`
    #[inline]
    pub fn upper_bound(&self, key: &K) -> usize {
        bounds::upper_bound(&self.keys, key)
    }

    /// Positions whose key equals `key`
    #[inline]
    pub fn equal_range(&self, key: &K) -> Range<usize> {
        bounds::equal_range(&self.keys, key)
    }

    // ========================================================================
    // Membership and Lookup
    // ========================================================================

    /// Check if `item` itself (by value) is stored
    ///
    /// Only the items sharing `item`'s key are compared.
    pub fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        let k = self.key.key(item);
        self.items[self.equal_range(&k)].contains(item)
    }

    /// Position of the first item whose key equals `key`
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] when no stored key equals `key`.
    pub fn index(&self, key: &K) -> Result<usize, K>
    where
        K: Clone,
    {
        let range = self.equal_range(key);
        // First key that is actually `==`, not just ordering-equal
        self.keys[range.clone()]
            .iter()
            .position(|k| k == key)
            .map(|offset| range.start + offset)
            .ok_or_else(|| not_found(None, key))
    }

    /// Number of items whose key equals `key`
    pub fn count(&self, key: &K) -> usize {
        self.keys[self.equal_range(key)]
            .iter()
            .filter(|k| *k == key)
            .count()
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Insert `item` before any items with an equal key
    pub fn insert(&mut self, item: T) {
        let k = self.key.key(&item);
        let i = self.lower_bound(&k);
        self.keys.insert(i, k);
        self.items.insert(i, item);
    }

    /// Insert `item` after any items with an equal key
    pub fn insert_right(&mut self, item: T) {
        let k = self.key.key(&item);
        let i = self.upper_bound(&k);
        self.keys.insert(i, k);
        self.items.insert(i, item);
    }

    /// Remove and return the first item whose key equals `key`
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] when no stored key equals `key`. The collection
    /// is left untouched.
    pub fn remove(&mut self, key: &K) -> Result<T, K>
    where
        K: Clone,
    {
        let i = self.index(key)?;
        self.keys.remove(i);
        Ok(self.items.remove(i))
    }

    /// Remove every item, keeping the key function
    pub fn clear(&mut self) {
        self.items.clear();
        self.keys.clear();
    }

    // ========================================================================
    // Directional Find
    // ========================================================================

    /// Find an item by relational operator
    ///
    /// | relation | returns |
    /// |----------|---------|
    /// | `Eq` | first item with key == k |
    /// | `Gt` | first item with key > k |
    /// | `Ge` | first item with key >= k |
    /// | `Lt` | last item with key < k |
    /// | `Le` | last item with key <= k |
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] carrying `relation` and `key` when nothing
    /// satisfies the relation.
    ///
    /// # Example
    ///
    /// ```
    /// use contest_kit::sorted::{Relation, SortedCollection};
    ///
    /// let s = SortedCollection::new(vec![22, 28, 30, 32], |x: &u32| *x);
    ///
    /// assert_eq!(s.find(Relation::Lt, &31), Ok(&30));
    /// assert_eq!(s.find(Relation::Le, &32), Ok(&32));
    /// assert_eq!(s.find(Relation::Gt, &22), Ok(&28));
    /// assert!(s.find(Relation::Eq, &21).is_err());
    /// ```
    pub fn find(&self, relation: Relation, key: &K) -> Result<&T, K>
    where
        K: Clone,
    {
        let found = match relation {
            Relation::Eq => {
                let i = self.lower_bound(key);
                self.keys.get(i).filter(|k| *k == key).map(|_| i)
            }
            Relation::Gt => Some(self.upper_bound(key)).filter(|&i| i < self.len()),
            Relation::Ge => Some(self.lower_bound(key)).filter(|&i| i < self.len()),
            Relation::Lt => self.lower_bound(key).checked_sub(1),
            Relation::Le => self.upper_bound(key).checked_sub(1),
        };
        found
            .map(|i| &self.items[i])
            .ok_or_else(|| not_found(Some(relation), key))
    }

    /// First item with key == `key`
    pub fn find_eq(&self, key: &K) -> Result<&T, K>
    where
        K: Clone,
    {
        self.find(Relation::Eq, key)
    }

    /// First item with key > `key`
    pub fn find_gt(&self, key: &K) -> Result<&T, K>
    where
        K: Clone,
    {
        self.find(Relation::Gt, key)
    }

    /// First item with key >= `key`
    pub fn find_ge(&self, key: &K) -> Result<&T, K>
    where
        K: Clone,
    {
        self.find(Relation::Ge, key)
    }

    /// Last item with key < `key`
    pub fn find_lt(&self, key: &K) -> Result<&T, K>
    where
        K: Clone,
    {
        self.find(Relation::Lt, key)
    }

    /// Last item with key <= `key`
    pub fn find_le(&self, key: &K) -> Result<&T, K>
    where
        K: Clone,
    {
        self.find(Relation::Le, key)
    }

    // ========================================================================
    // Copy
    // ========================================================================

    /// Independent collection with the same key function and items
    pub fn copy(&self) -> Self
    where
        T: Clone,
    {
        Self::with_key_fn(self.items.iter().cloned(), self.key.clone())
    }
}

fn not_found<K: Clone>(relation: Option<Relation>, key: &K) -> Error<K> {
    Error::NotFound {
        relation,
        key: key.clone(),
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl<T: Clone, K: Clone> Clone for SortedCollection<T, K> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            items: self.items.clone(),
            keys: self.keys.clone(),
        }
    }
}

impl<T: fmt::Debug, K> fmt::Debug for SortedCollection<T, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SortedCollection")
            .field("items", &self.items)
            .field("key", &self.key)
            .finish()
    }
}

impl<T, K> Index<usize> for SortedCollection<T, K> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if `index` is out of range, like slice indexing.
    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}

impl<'a, T, K> IntoIterator for &'a SortedCollection<T, K> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T, K: Ord> Extend<T> for SortedCollection<T, K> {
    /// Inserts each item after existing equal keys
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert_right(item);
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
