//! Adjacency-matrix graph.
//!
//! ## Storage
//!
//! A row-major `size × size` vector of `Option<u64>`:
//!
//! ```text
//! cell(from, to) = matrix[from * size + to]
//! None     -> no edge
//! Some(w)  -> edge with weight w (unweighted edges are stored as 0)
//! ```

use crate::error::GraphError;
use crate::graph::{Edge, Graph};

/// Directed graph stored as a dense weight matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyMatrixGraph {
    size: usize,
    matrix: Vec<Option<u64>>,
}

impl AdjacencyMatrixGraph {
    /// Create a graph of `size` vertices with no edges
    ///
    /// # Panics
    ///
    /// If `size * size` overflows `usize`. Use [`try_new`](Self::try_new)
    /// to handle that case.
    pub fn new(size: usize) -> Self {
        match Self::try_new(size) {
            Ok(graph) => graph,
            Err(err) => panic!("{err}"),
        }
    }

    /// Create a graph of `size` vertices with no edges
    ///
    /// # Errors
    ///
    /// [`GraphError::TooManyVertices`] if `size * size` overflows `usize`.
    pub fn try_new(size: usize) -> Result<Self, GraphError> {
        let cells = size
            .checked_mul(size)
            .ok_or(GraphError::TooManyVertices { size })?;
        Ok(Self {
            size,
            matrix: vec![None; cells],
        })
    }

    /// Row-major cell index, or `None` when either endpoint is out of range
    #[inline]
    fn cell(&self, from: usize, to: usize) -> Option<usize> {
        (from < self.size && to < self.size).then(|| from * self.size + to)
    }
}

impl Graph for AdjacencyMatrixGraph {
    #[inline]
    fn size(&self) -> usize {
        self.size
    }

    fn weight(&self, from: usize, to: usize) -> Option<u64> {
        self.matrix[self.cell(from, to)?]
    }

    /// Outgoing edges in ascending target order
    fn edges_from(&self, from: usize) -> Vec<Edge> {
        if from >= self.size {
            return Vec::new();
        }
        let row = &self.matrix[from * self.size..(from + 1) * self.size];
        row.iter()
            .enumerate()
            .filter_map(|(to, weight)| weight.map(|w| Edge::new(to, Some(w))))
            .collect()
    }

    fn add_edge(&mut self, from: usize, to: usize, weight: Option<u64>) -> bool {
        let Some(i) = self.cell(from, to) else {
            return false;
        };
        if self.matrix[i].is_some() {
            return false;
        }
        self.matrix[i] = Some(weight.unwrap_or(0));
        true
    }

    fn remove_edge(&mut self, from: usize, to: usize) -> bool {
        match self.cell(from, to) {
            Some(i) => self.matrix[i].take().is_some(),
            None => false,
        }
    }

    fn is_adjacent(&self, from: usize, to: usize) -> bool {
        self.cell(from, to)
            .is_some_and(|i| self.matrix[i].is_some())
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matrix_graph_new() {
        let g = AdjacencyMatrixGraph::new(4);

        assert_eq!(g.size(), 4);
        assert_eq!(g.matrix.len(), 16);
        assert!((0..4).all(|v| g.edges_from(v).is_empty()));
    }

    #[test]
    fn test_matrix_graph_try_new_rejects_overflowing_size() {
        assert_eq!(
            AdjacencyMatrixGraph::try_new(usize::MAX),
            Err(GraphError::TooManyVertices { size: usize::MAX })
        );
        assert_eq!(AdjacencyMatrixGraph::try_new(3).map(|g| g.size()), Ok(3));
    }

    #[test]
    #[should_panic(expected = "too many vertices")]
    fn test_matrix_graph_new_panics_on_overflowing_size() {
        AdjacencyMatrixGraph::new(usize::MAX);
    }

    #[test]
    fn test_matrix_graph_unweighted_edge_stored_as_zero() {
        let mut g = AdjacencyMatrixGraph::new(2);

        assert!(g.add_edge(1, 0, None));
        assert!(g.is_adjacent(1, 0));
        assert_eq!(g.weight(1, 0), Some(0));
        assert_eq!(g.edges_from(1), vec![Edge::new(0, Some(0))]);
    }

    #[test]
    fn test_matrix_graph_edges_sorted_by_target() {
        let mut g = AdjacencyMatrixGraph::new(4);
        g.add_edge(0, 3, Some(7));
        g.add_edge(0, 1, Some(5));

        assert_eq!(
            g.edges_from(0),
            vec![Edge::new(1, Some(5)), Edge::new(3, Some(7))]
        );
    }

    #[test]
    fn test_matrix_graph_self_loop() {
        let mut g = AdjacencyMatrixGraph::new(1);

        assert!(g.add_edge(0, 0, Some(1)));
        assert!(g.is_adjacent(0, 0));
        assert!(g.remove_edge(0, 0));
        assert!(!g.is_adjacent(0, 0));
    }
}
