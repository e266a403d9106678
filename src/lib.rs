//! # contest-kit
//!
//! Classic algorithm exercises, each a self-contained utility.
//!
//! ## Contents
//!
//! - **Sorted**: a sequence kept sorted by a derived key, with equality,
//!   relational and counting queries built on lower/upper bound search
//! - **Search**: binary search for the first index where a monotone
//!   predicate turns true
//! - **Graph**: directed graphs (adjacency list / matrix) with BFS
//!   distances and shortest paths
//! - **Two pointers**: a sliding-window template plus a sample solver
//!
//! ## Design Principles
//!
//! 1. **In-memory only**: no I/O, no global state
//! 2. **Synchronous**: every operation is a direct, terminating computation
//! 3. **Errors are outcomes**: an unmatched query returns an `Err`, it is
//!    never a fault

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for every module
pub mod error;

/// Sorted, key-indexed sequence
pub mod sorted;

/// Binary search over monotone predicates
pub mod search;

/// Directed graphs and breadth-first search
pub mod graph;

/// Sliding-window (two pointers) template
pub mod two_pointers;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use error::{Error, GraphError, ParseRelationError, Result};
pub use graph::{AdjacencyListGraph, AdjacencyMatrixGraph, Edge, Graph, Vertex};
pub use search::{first_true, last_true};
pub use sorted::{KeyFn, Relation, SortedCollection};
pub use two_pointers::{longest_product_at_most, SlidingWindow};
