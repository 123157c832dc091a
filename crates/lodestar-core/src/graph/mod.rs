//! Graph storage and shortest-path computation
//!
//! Provides the weighted directed graph store and the greedy
//! label-setting (Dijkstra) engine:
//! - Adjacency storage with construction-time validation
//! - Single-source shortest paths with recorded predecessors
//! - Path reconstruction from the predecessor chain

pub mod algos;
pub mod path;
pub mod store;
pub mod types;

pub use algos::shortest_paths;
pub use store::GraphStore;
pub use types::{
    Edge, SelectionStrategy, ShortestPathOptions, ShortestPaths, Vertex, Weight,
};
