//! Adjacency-list graph.
//!
//! Each [`Vertex`] owns its outgoing edges in insertion order, so
//! `edges_from` is a plain copy of that list.

use crate::graph::{Edge, Graph};

/// A vertex with optional payload and its outgoing edges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vertex<D> {
    /// Payload attached to the vertex
    pub data: Option<D>,
    /// Outgoing edges, at most one per target
    pub edges: Vec<Edge>,
}

impl<D> Default for Vertex<D> {
    fn default() -> Self {
        Self {
            data: None,
            edges: Vec::new(),
        }
    }
}

impl<D> Vertex<D> {
    /// Create a vertex carrying `data`
    pub fn new(data: D) -> Self {
        Self {
            data: Some(data),
            edges: Vec::new(),
        }
    }

    /// Add an edge to `to`
    ///
    /// Returns `false` (and changes nothing) if an edge to `to` already exists.
    pub fn add_edge(&mut self, to: usize, weight: Option<u64>) -> bool {
        if self.edges.iter().any(|edge| edge.to == to) {
            return false;
        }
        self.edges.push(Edge::new(to, weight));
        true
    }

    /// Remove the edge to `to`, returning whether it existed
    pub fn remove_edge(&mut self, to: usize) -> bool {
        match self.edges.iter().position(|edge| edge.to == to) {
            Some(i) => {
                self.edges.remove(i);
                true
            }
            None => false,
        }
    }
}

/// Directed graph stored as a list of [`Vertex`] values.
///
/// # Example
///
/// ```
/// use contest_kit::graph::{AdjacencyListGraph, Graph, Vertex};
///
/// let mut g = AdjacencyListGraph::new(vec![Vertex::new("tokyo"), Vertex::new("osaka")]);
/// assert!(g.add_edge(0, 1, Some(500)));
///
/// assert_eq!(g.weight(0, 1), Some(500));
/// assert_eq!(g.vertex(1).and_then(|v| v.data), Some("osaka"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyListGraph<D> {
    vertices: Vec<Vertex<D>>,
}

impl<D> AdjacencyListGraph<D> {
    /// Build a graph from existing vertices
    pub fn new(vertices: Vec<Vertex<D>>) -> Self {
        Self { vertices }
    }

    /// Build a graph of `size` payload-free vertices with no edges
    pub fn with_size(size: usize) -> Self {
        Self {
            vertices: (0..size).map(|_| Vertex::default()).collect(),
        }
    }

    /// Get a vertex by index
    #[inline]
    pub fn vertex(&self, index: usize) -> Option<&Vertex<D>> {
        self.vertices.get(index)
    }

    /// All vertices in index order
    #[inline]
    pub fn vertices(&self) -> &[Vertex<D>] {
        &self.vertices
    }
}

impl<D> Graph for AdjacencyListGraph<D> {
    #[inline]
    fn size(&self) -> usize {
        self.vertices.len()
    }

    fn weight(&self, from: usize, to: usize) -> Option<u64> {
        self.vertices
            .get(from)?
            .edges
            .iter()
            .find(|edge| edge.to == to)
            .and_then(|edge| edge.weight)
    }

    fn edges_from(&self, from: usize) -> Vec<Edge> {
        self.vertices
            .get(from)
            .map(|vertex| vertex.edges.clone())
            .unwrap_or_default()
    }

    fn add_edge(&mut self, from: usize, to: usize, weight: Option<u64>) -> bool {
        if !self.contains_vertex(to) {
            return false;
        }
        match self.vertices.get_mut(from) {
            Some(vertex) => vertex.add_edge(to, weight),
            None => false,
        }
    }

    fn remove_edge(&mut self, from: usize, to: usize) -> bool {
        match self.vertices.get_mut(from) {
            Some(vertex) => vertex.remove_edge(to),
            None => false,
        }
    }

    fn is_adjacent(&self, from: usize, to: usize) -> bool {
        self.vertices
            .get(from)
            .is_some_and(|vertex| vertex.edges.iter().any(|edge| edge.to == to))
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_add_edge_once() {
        let mut v: Vertex<()> = Vertex::default();

        assert!(v.add_edge(3, Some(2)));
        assert!(!v.add_edge(3, None));
        assert_eq!(v.edges, vec![Edge::new(3, Some(2))]);
    }

    #[test]
    fn test_vertex_remove_edge() {
        let mut v: Vertex<()> = Vertex::default();
        v.add_edge(1, None);
        v.add_edge(2, None);
        v.add_edge(3, None);

        assert!(v.remove_edge(2));
        assert!(!v.remove_edge(2));
        assert_eq!(v.edges, vec![Edge::new(1, None), Edge::new(3, None)]);
    }

    #[test]
    fn test_list_graph_keeps_insertion_order() {
        let mut g: AdjacencyListGraph<()> = AdjacencyListGraph::with_size(4);
        g.add_edge(0, 3, None);
        g.add_edge(0, 1, None);
        g.add_edge(0, 2, None);

        let targets: Vec<usize> = g.edges_from(0).iter().map(|e| e.to).collect();
        assert_eq!(targets, [3, 1, 2]);
    }

    #[test]
    fn test_list_graph_unweighted_edge() {
        let mut g: AdjacencyListGraph<()> = AdjacencyListGraph::with_size(2);
        g.add_edge(0, 1, None);

        assert!(g.is_adjacent(0, 1));
        assert_eq!(g.weight(0, 1), None);
    }
}
