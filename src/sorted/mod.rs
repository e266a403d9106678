//! Sorted, key-indexed sequence.
//!
//! ## Architecture
//!
//! - **Parallel vectors**: records plus a cached key projection
//! - **Bound primitives**: lower/upper bound binary search over the keys
//! - **Pluggable key**: a shared closure that can be swapped at runtime
//!
//! ## Components
//!
//! - [`SortedCollection`]: the collection itself
//! - [`KeyFn`]: shared `&T -> K` key function with identity comparison
//! - [`Relation`]: the five operators accepted by `find`
//! - [`bounds`]: `lower_bound` / `upper_bound` / `equal_range`
//!
//! ## Example
//!
//! ```
//! use contest_kit::sorted::{Relation, SortedCollection};
//!
//! let mut s = SortedCollection::new(vec![30, 22, 32, 28], |x: &u32| *x);
//!
//! assert_eq!(s.keys(), &[22, 28, 30, 32]);
//! assert_eq!(s.find(Relation::Le, &31), Ok(&30));
//!
//! s.remove(&22).unwrap();
//! assert_eq!(s.find(Relation::Ge, &0), Ok(&28));
//! ```

pub mod bounds;
pub mod collection;
pub mod key;
pub mod relation;

pub use collection::SortedCollection;
pub use key::KeyFn;
pub use relation::Relation;
