//! Weighted directed graph storage
//!
//! Holds a fixed set of vertices and an adjacency list keyed by origin.
//! All validation happens at construction: endpoints must be in range
//! and weights must be finite and non-negative. The store is read-only
//! afterwards and may be shared across concurrent computations.

use crate::error::{LodestarError, Result};
use crate::graph::types::{Edge, Vertex, Weight};

/// Weighted directed graph over dense integer vertex indices.
///
/// Parallel edges are not modeled: building with two edges for the same
/// ordered pair keeps the later weight. Zero-weight edges are ordinary
/// edges; absence of an edge is absence from the adjacency list.
#[derive(Debug, Clone)]
pub struct GraphStore {
    adjacency: Vec<Vec<(Vertex, Weight)>>,
    edge_count: usize,
}

impl GraphStore {
    /// Construct a store from a vertex count and a collection of edges
    pub fn build(vertex_count: usize, edges: &[Edge]) -> Result<Self> {
        if vertex_count == 0 {
            return Err(LodestarError::invalid_graph(
                "vertex count must be positive",
            ));
        }

        let mut adjacency = vec![Vec::new(); vertex_count];
        let mut edge_count = 0;
        for edge in edges {
            if edge.from >= vertex_count {
                return Err(LodestarError::invalid_graph(format!(
                    "edge origin {} out of range (graph has {} vertices)",
                    edge.from, vertex_count
                )));
            }
            if edge.to >= vertex_count {
                return Err(LodestarError::invalid_graph(format!(
                    "edge destination {} out of range (graph has {} vertices)",
                    edge.to, vertex_count
                )));
            }
            let value = edge.weight.value();
            if !value.is_finite() || value < 0.0 {
                return Err(LodestarError::invalid_graph(format!(
                    "edge {} -> {} has invalid weight {}",
                    edge.from, edge.to, value
                )));
            }

            let neighbors = &mut adjacency[edge.from];
            match neighbors.iter_mut().find(|(to, _)| *to == edge.to) {
                Some(entry) => entry.1 = edge.weight,
                None => {
                    neighbors.push((edge.to, edge.weight));
                    edge_count += 1;
                }
            }
        }

        Ok(GraphStore {
            adjacency,
            edge_count,
        })
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Outgoing `(destination, weight)` pairs of `u`, in insertion order
    pub fn outgoing_edges(&self, u: Vertex) -> Result<&[(Vertex, Weight)]> {
        match self.adjacency.get(u) {
            Some(neighbors) => Ok(neighbors),
            None => Err(LodestarError::invalid_vertex(u, self.vertex_count())),
        }
    }
}
