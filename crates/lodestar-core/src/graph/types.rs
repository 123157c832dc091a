use serde::Serialize;

use crate::error::{LodestarError, Result};

/// A vertex is a dense integer index in `[0, vertex_count)`
pub type Vertex = usize;

/// Weight of a single edge, or a distance accumulated along a path.
/// Finiteness and non-negativity are validated when a graph is built;
/// the engine itself assumes both.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Weight(f64);

impl Weight {
    pub const ZERO: Weight = Weight(0.0);

    pub fn new(value: f64) -> Self {
        Weight(value)
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl std::ops::Add for Weight {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Weight(self.0 + other.0)
    }
}

impl From<u32> for Weight {
    fn from(value: u32) -> Self {
        Weight(f64::from(value))
    }
}

impl std::fmt::Display for Weight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Whole-number weights print without a trailing ".0"
        if self.0.fract() == 0.0 && self.0.abs() < 1e15 {
            write!(f, "{}", self.0 as i64)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// Directed weighted edge used to build a `GraphStore`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Edge {
    pub from: Vertex,
    pub to: Vertex,
    pub weight: Weight,
}

impl Edge {
    pub fn new(from: Vertex, to: Vertex, weight: f64) -> Self {
        Edge {
            from,
            to,
            weight: Weight::new(weight),
        }
    }
}

/// Extract-min strategy for the settlement loop
///
/// Both strategies produce identical output: ties on distance are broken
/// by the lowest vertex index, so settlement order is reproducible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionStrategy {
    /// Binary-heap frontier, O((V + E) log V) overall
    #[default]
    BinaryHeap,
    /// Linear scan over unsettled vertices, O(V^2 + E) overall
    LinearScan,
}

impl std::str::FromStr for SelectionStrategy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "heap" => Ok(SelectionStrategy::BinaryHeap),
            "linear" => Ok(SelectionStrategy::LinearScan),
            other => Err(format!(
                "unknown selection strategy '{}' (expected: heap, linear)",
                other
            )),
        }
    }
}

/// Options for a shortest-path computation
#[derive(Debug, Clone, Default)]
pub struct ShortestPathOptions {
    /// Extract-min strategy used by the settlement loop
    pub selection: SelectionStrategy,
}

/// Complete result of a single-source shortest-path computation.
///
/// Distances and predecessors are indexed by vertex; `None` marks a
/// vertex with no directed path from the source. The source is its own
/// predecessor. `settlement_order` lists all vertices in the order they
/// were finalized.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShortestPaths {
    pub source: Vertex,
    pub settlement_order: Vec<Vertex>,
    pub distances: Vec<Option<Weight>>,
    pub predecessors: Vec<Option<Vertex>>,
}

impl ShortestPaths {
    pub fn vertex_count(&self) -> usize {
        self.distances.len()
    }

    fn check_vertex(&self, vertex: Vertex) -> Result<()> {
        if vertex >= self.vertex_count() {
            return Err(LodestarError::invalid_vertex(vertex, self.vertex_count()));
        }
        Ok(())
    }

    /// Final distance from the source, `None` when unreachable
    pub fn distance(&self, vertex: Vertex) -> Result<Option<Weight>> {
        self.check_vertex(vertex)?;
        Ok(self.distances[vertex])
    }

    /// Predecessor on the shortest path from the source, `None` when
    /// unreachable (the source's predecessor is the source itself)
    pub fn predecessor(&self, vertex: Vertex) -> Result<Option<Vertex>> {
        self.check_vertex(vertex)?;
        Ok(self.predecessors[vertex])
    }

    pub fn is_reachable(&self, vertex: Vertex) -> Result<bool> {
        self.check_vertex(vertex)?;
        Ok(self.distances[vertex].is_some())
    }

    /// Vertices from the source to `target` inclusive, following the
    /// recorded predecessor chain
    pub fn path_to(&self, target: Vertex) -> Result<Vec<Vertex>> {
        crate::graph::path::reconstruct_path(self, target)
    }
}
