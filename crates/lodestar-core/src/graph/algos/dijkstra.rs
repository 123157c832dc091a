//! Single-source shortest paths by greedy label setting
//!
//! Settles exactly one vertex per round: the unsettled vertex with the
//! smallest tentative distance (ties broken by lowest index), then
//! relaxes its outgoing edges. A settled vertex's distance is final.
//! Unreachable vertices are settled too, after every reachable vertex,
//! in ascending index order.

use std::cmp::Ordering;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::error::{LodestarError, Result};
use crate::graph::store::GraphStore;
use crate::graph::types::{
    SelectionStrategy, ShortestPathOptions, ShortestPaths, Vertex, Weight,
};

/// Wrapper for BinaryHeap to use as min-heap (ordered by tentative
/// distance, then by vertex index so ties settle deterministically)
#[derive(Debug, Clone, Copy)]
pub struct HeapEntry {
    pub vertex: Vertex,
    pub distance: Weight,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.vertex == other.vertex && self.distance.value() == other.distance.value()
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .value()
            .partial_cmp(&other.distance.value())
            .unwrap()
            .then_with(|| self.vertex.cmp(&other.vertex))
    }
}

/// Working state for one computation, created fresh per call and
/// consumed into the returned `ShortestPaths`
struct DijkstraState {
    distances: Vec<Option<Weight>>,
    predecessors: Vec<Option<Vertex>>,
    settled: Vec<bool>,
    order: Vec<Vertex>,
    heap: BinaryHeap<Reverse<HeapEntry>>,
}

impl DijkstraState {
    fn new(vertex_count: usize, source: Vertex) -> Self {
        let mut state = Self {
            distances: vec![None; vertex_count],
            predecessors: vec![None; vertex_count],
            settled: vec![false; vertex_count],
            order: Vec::with_capacity(vertex_count),
            heap: BinaryHeap::new(),
        };
        state.distances[source] = Some(Weight::ZERO);
        state.predecessors[source] = Some(source);
        state.heap.push(Reverse(HeapEntry {
            vertex: source,
            distance: Weight::ZERO,
        }));
        state
    }

    /// Pop the unsettled vertex with the smallest tentative distance,
    /// skipping entries made stale by a later, shorter relaxation
    fn select_from_heap(&mut self) -> Option<Vertex> {
        while let Some(Reverse(HeapEntry { vertex, distance })) = self.heap.pop() {
            if self.settled[vertex] {
                continue;
            }
            match self.distances[vertex] {
                Some(best) if distance.value() > best.value() => continue,
                _ => return Some(vertex),
            }
        }
        None
    }

    /// Scan all unsettled vertices for the smallest finite distance;
    /// the strict comparison keeps the lowest index on ties
    fn select_by_scan(&self) -> Option<Vertex> {
        let mut best: Option<(Vertex, Weight)> = None;
        for vertex in 0..self.distances.len() {
            if self.settled[vertex] {
                continue;
            }
            if let Some(distance) = self.distances[vertex] {
                let improves = match best {
                    Some((_, best_distance)) => distance.value() < best_distance.value(),
                    None => true,
                };
                if improves {
                    best = Some((vertex, distance));
                }
            }
        }
        best.map(|(vertex, _)| vertex)
    }

    /// Lowest-index unsettled vertex, used once only unreachable
    /// vertices remain
    fn first_unsettled(&self) -> Option<Vertex> {
        self.settled.iter().position(|settled| !settled)
    }

    /// Tighten the tentative distance of every neighbor of `from`
    fn relax_outgoing(
        &mut self,
        graph: &GraphStore,
        from: Vertex,
        use_heap: bool,
    ) -> Result<()> {
        let Some(from_distance) = self.distances[from] else {
            // Unreachable vertex: infinity plus any weight is infinity
            return Ok(());
        };

        for &(to, weight) in graph.outgoing_edges(from)? {
            if self.settled[to] {
                continue;
            }
            let candidate = from_distance + weight;
            let improves = match self.distances[to] {
                Some(current) => candidate.value() < current.value(),
                None => true,
            };
            if improves {
                self.distances[to] = Some(candidate);
                self.predecessors[to] = Some(from);
                if use_heap {
                    self.heap.push(Reverse(HeapEntry {
                        vertex: to,
                        distance: candidate,
                    }));
                }
            }
        }

        Ok(())
    }
}

/// Compute shortest paths from `source` to every vertex of `graph`.
///
/// Runs exactly `vertex_count` settlement rounds, so every vertex
/// appears in the settlement order whether or not it is reachable.
/// Output is deterministic for a given graph and source.
#[tracing::instrument(
    skip(graph, opts),
    fields(vertices = graph.vertex_count(), source = source, selection = ?opts.selection)
)]
pub fn shortest_paths(
    graph: &GraphStore,
    source: Vertex,
    opts: &ShortestPathOptions,
) -> Result<ShortestPaths> {
    let vertex_count = graph.vertex_count();
    if source >= vertex_count {
        return Err(LodestarError::invalid_vertex(source, vertex_count));
    }

    let use_heap = opts.selection == SelectionStrategy::BinaryHeap;
    let mut state = DijkstraState::new(vertex_count, source);

    for _ in 0..vertex_count {
        let selected = match opts.selection {
            SelectionStrategy::BinaryHeap => state.select_from_heap(),
            SelectionStrategy::LinearScan => state.select_by_scan(),
        };
        // No finite distance left: settle the remaining vertices as
        // unreachable, lowest index first
        let Some(vertex) = selected.or_else(|| state.first_unsettled()) else {
            break;
        };

        state.settled[vertex] = true;
        state.order.push(vertex);
        state.relax_outgoing(graph, vertex, use_heap)?;
    }

    let reachable = state.distances.iter().filter(|d| d.is_some()).count();
    tracing::debug!(
        settled = state.order.len(),
        reachable,
        "shortest_paths_complete"
    );

    Ok(ShortestPaths {
        source,
        settlement_order: state.order,
        distances: state.distances,
        predecessors: state.predecessors,
    })
}
