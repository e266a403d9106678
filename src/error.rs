//! Error types for contest-kit.
//!
//! ## Taxonomy
//!
//! - [`Error`]: failures of [`SortedCollection`](crate::sorted::SortedCollection)
//!   queries and positional access. Generic over the key type so the offending
//!   key travels with the error.
//! - [`ParseRelationError`]: an operator string that is not one of `==`, `>`,
//!   `>=`, `<`, `<=`.
//! - [`GraphError`]: a BFS endpoint outside the graph, or a matrix too large
//!   to index.
//!
//! Every variant is an ordinary outcome of an unmatched query. Callers decide
//! whether to default, skip or propagate.

use thiserror::Error;

use crate::sorted::Relation;

/// Error variants for sorted collection operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error<K> {
    /// No stored key satisfies the query.
    ///
    /// `relation` is `None` for plain equality lookups (`index`, `remove`)
    /// and `Some` for directional `find` queries.
    #[error("no item found with key {} {key:?}", relation_symbol(.relation))]
    NotFound {
        /// Operator of the failed `find`, if any
        relation: Option<Relation>,
        /// The query key
        key: K,
    },

    /// A positional index was outside `[0, len)`.
    #[error("index out of bounds: {index} (len {len})")]
    IndexOutOfBounds {
        /// Requested position
        index: usize,
        /// Length at the time of the call
        len: usize,
    },
}

impl<K> Error<K> {
    /// Check if this is a `NotFound` error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }
}

fn relation_symbol(relation: &Option<Relation>) -> &'static str {
    relation.map_or("==", Relation::symbol)
}

/// A specialized Result type for sorted collection operations.
pub type Result<T, K> = std::result::Result<T, Error<K>>;

/// An unknown relational operator string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown relation operator: {0:?}")]
pub struct ParseRelationError(pub String);

/// Errors raised by graph traversals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GraphError {
    /// A start or goal vertex is not part of the graph.
    #[error("vertex {vertex} out of range for graph of size {size}")]
    VertexOutOfRange {
        /// The offending vertex
        vertex: usize,
        /// Number of vertices in the graph
        size: usize,
    },

    /// A dense matrix of `size × size` cells does not fit in `usize`.
    #[error("too many vertices for an adjacency matrix: {size}")]
    TooManyVertices {
        /// Requested number of vertices
        size: usize,
    },
}

// ============================================================================
// Unit Tests
// ============================================================================
