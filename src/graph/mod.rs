//! Minimal directed graph abstraction with breadth-first traversal.
//!
//! ## Components
//!
//! - [`Graph`]: the common interface over vertex indices `0..size()`
//! - [`AdjacencyListGraph`]: per-vertex edge lists (insertion order)
//! - [`AdjacencyMatrixGraph`]: dense `size × size` weight matrix
//! - [`bfs`]: distances and shortest paths by breadth-first search
//!
//! ## Out-of-range Vertices
//!
//! Trait methods never panic on a bad index: queries answer `None`,
//! empty or `false`, and mutations return `false`. Traversals in [`bfs`]
//! reject bad endpoints with [`GraphError`](crate::error::GraphError).
//!
//! ## Example
//!
//! ```
//! use contest_kit::graph::{bfs, AdjacencyMatrixGraph, Graph};
//!
//! let mut g = AdjacencyMatrixGraph::new(3);
//! g.add_edge(0, 1, Some(1));
//! g.add_edge(1, 2, Some(1));
//!
//! assert!(g.is_adjacent(0, 1));
//! assert_eq!(bfs::shortest_path(&g, 0, 2).unwrap(), vec![0, 1, 2]);
//! ```

pub mod bfs;
pub mod list;
pub mod matrix;

pub use list::{AdjacencyListGraph, Vertex};
pub use matrix::AdjacencyMatrixGraph;

/// A directed edge to vertex `to`, optionally weighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    /// Target vertex
    pub to: usize,
    /// Edge weight (`None` = unweighted)
    pub weight: Option<u64>,
}

impl Edge {
    /// Create a new edge
    #[inline]
    pub fn new(to: usize, weight: Option<u64>) -> Self {
        Self { to, weight }
    }
}

/// Directed graph over vertices `0..size()`.
pub trait Graph {
    /// Number of vertices
    fn size(&self) -> usize;

    /// Weight of the edge `from -> to`, if the edge exists and is weighted
    fn weight(&self, from: usize, to: usize) -> Option<u64>;

    /// Outgoing edges of `from` (empty if `from` is out of range)
    fn edges_from(&self, from: usize) -> Vec<Edge>;

    /// Add the edge `from -> to`
    ///
    /// Returns `false` if the edge already exists or an endpoint is out
    /// of range.
    fn add_edge(&mut self, from: usize, to: usize, weight: Option<u64>) -> bool;

    /// Remove the edge `from -> to`, returning whether it existed
    fn remove_edge(&mut self, from: usize, to: usize) -> bool;

    /// Check if the edge `from -> to` exists
    fn is_adjacent(&self, from: usize, to: usize) -> bool {
        self.edges_from(from).iter().any(|edge| edge.to == to)
    }

    /// Check if `vertex` is a valid index
    #[inline]
    fn contains_vertex(&self, vertex: usize) -> bool {
        vertex < self.size()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
