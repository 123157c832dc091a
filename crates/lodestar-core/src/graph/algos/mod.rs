//! Graph algorithm implementations
//!
//! Contains the concrete shortest-path engine:
//! - `dijkstra`: greedy label-setting single-source shortest paths

pub mod dijkstra;

pub use dijkstra::shortest_paths;
