//! Breadth-first traversals over any [`Graph`].
//!
//! ## Distances
//!
//! [`distances_from`] walks the graph in BFS order and fixes each vertex's
//! distance when it is first discovered. The distance is the parent's
//! distance plus the edge weight (unweighted edges count as 0). With unit
//! weights this is the hop count.
//!
//! ## Shortest Path
//!
//! [`shortest_path`] records each vertex's BFS parent and walks back from
//! the goal, giving a path with the fewest edges.

use std::collections::VecDeque;

use crate::error::GraphError;
use crate::graph::Graph;

fn check_vertex<G: Graph + ?Sized>(graph: &G, vertex: usize) -> Result<(), GraphError> {
    if graph.contains_vertex(vertex) {
        Ok(())
    } else {
        Err(GraphError::VertexOutOfRange {
            vertex,
            size: graph.size(),
        })
    }
}

/// BFS distances from `from` to every vertex
///
/// `None` marks vertices not reachable from `from`. A distance is the sum of
/// edge weights along the BFS tree (unweighted edges count 0) and saturates
/// at `u64::MAX` instead of overflowing.
///
/// # Errors
///
/// [`GraphError::VertexOutOfRange`] if `from` is not a vertex.
///
/// # Example
///
/// ```
/// use contest_kit::graph::{bfs, AdjacencyListGraph, Graph};
///
/// let mut g: AdjacencyListGraph<()> = AdjacencyListGraph::with_size(4);
/// g.add_edge(0, 1, Some(1));
/// g.add_edge(1, 2, Some(1));
///
/// assert_eq!(bfs::distances_from(&g, 0).unwrap(), vec![Some(0), Some(1), Some(2), None]);
/// ```
pub fn distances_from<G: Graph + ?Sized>(
    graph: &G,
    from: usize,
) -> Result<Vec<Option<u64>>, GraphError> {
    distances_from_until(graph, from, |_| false)
}

/// BFS distances from `from`, stopping once a dequeued vertex satisfies `stop`
///
/// Vertices discovered before the stop keep their distances; everything
/// else stays `None`. Distances saturate like [`distances_from`].
///
/// # Errors
///
/// [`GraphError::VertexOutOfRange`] if `from` is not a vertex.
pub fn distances_from_until<G, F>(
    graph: &G,
    from: usize,
    mut stop: F,
) -> Result<Vec<Option<u64>>, GraphError>
where
    G: Graph + ?Sized,
    F: FnMut(usize) -> bool,
{
    check_vertex(graph, from)?;

    let mut distances: Vec<Option<u64>> = vec![None; graph.size()];
    distances[from] = Some(0);
    let mut queue = VecDeque::from([from]);

    while let Some(node) = queue.pop_front() {
        if stop(node) {
            break;
        }
        let current = distances[node].unwrap_or(0);
        for edge in graph.edges_from(node) {
            if distances[edge.to].is_some() {
                continue;
            }
            distances[edge.to] = Some(current.saturating_add(edge.weight.unwrap_or(0)));
            queue.push_back(edge.to);
        }
    }

    Ok(distances)
}

/// Fewest-edge path from `from` to `to`, endpoints included
///
/// # Returns
///
/// * `[from]` - If `from == to`
/// * `[from, ..., to]` - If `to` is reachable
/// * `[]` - If `to` is unreachable
///
/// # Errors
///
/// [`GraphError::VertexOutOfRange`] if either endpoint is not a vertex.
pub fn shortest_path<G: Graph + ?Sized>(
    graph: &G,
    from: usize,
    to: usize,
) -> Result<Vec<usize>, GraphError> {
    check_vertex(graph, from)?;
    check_vertex(graph, to)?;

    let mut parents: Vec<Option<usize>> = vec![None; graph.size()];
    let mut visited = vec![false; graph.size()];
    visited[from] = true;
    let mut queue = VecDeque::from([from]);

    while let Some(node) = queue.pop_front() {
        if node == to {
            let mut path = vec![to];
            let mut current = to;
            while let Some(parent) = parents[current] {
                path.push(parent);
                current = parent;
            }
            path.reverse();
            return Ok(path);
        }
        for edge in graph.edges_from(node) {
            if visited[edge.to] {
                continue;
            }
            visited[edge.to] = true;
            parents[edge.to] = Some(node);
            queue.push_back(edge.to);
        }
    }

    Ok(Vec::new())
}

// ============================================================================
// Unit Tests
// ============================================================================
