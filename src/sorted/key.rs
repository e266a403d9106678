//! Shared key-extraction function.
//!
//! ## Identity
//!
//! A `KeyFn` is an `Arc` around a closure. Clones share the same closure,
//! and [`KeyFn::ptr_eq`] tells whether two handles are the *same* function
//! object. Two separately built closures that happen to compute the same
//! mapping are never considered equal.

use std::fmt;
use std::sync::Arc;

/// A cheaply clonable `&T -> K` ordering key.
///
/// # Example
///
/// ```
/// use contest_kit::sorted::KeyFn;
///
/// let by_len: KeyFn<String, usize> = KeyFn::new(|s: &String| s.len());
/// let same = by_len.clone();
///
/// assert_eq!(by_len.key(&"hoge".to_string()), 4);
/// assert!(by_len.ptr_eq(&same));
/// assert!(!by_len.ptr_eq(&KeyFn::new(|s: &String| s.len())));
/// ```
pub struct KeyFn<T, K> {
    f: Arc<dyn Fn(&T) -> K + Send + Sync>,
}

impl<T, K> KeyFn<T, K> {
    /// Wrap a closure as a shareable key function
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&T) -> K + Send + Sync + 'static,
    {
        Self { f: Arc::new(f) }
    }

    /// Extract the key of `item`
    #[inline]
    pub fn key(&self, item: &T) -> K {
        (self.f)(item)
    }

    /// Check whether both handles point at the same closure
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.f, &other.f)
    }
}

impl<T, K> Clone for KeyFn<T, K> {
    fn clone(&self) -> Self {
        Self {
            f: Arc::clone(&self.f),
        }
    }
}

impl<T, K> fmt::Debug for KeyFn<T, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("KeyFn(..)")
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
