//! Path reconstruction from recorded predecessors

use crate::error::{LodestarError, Result};
use crate::graph::types::{ShortestPaths, Vertex};

/// Walk the predecessor chain backward from `target` and return the
/// vertices in source-to-target order, both endpoints included
pub fn reconstruct_path(paths: &ShortestPaths, target: Vertex) -> Result<Vec<Vertex>> {
    if target >= paths.vertex_count() {
        return Err(LodestarError::invalid_vertex(target, paths.vertex_count()));
    }
    if paths.distances[target].is_none() {
        return Err(LodestarError::Unreachable { target });
    }

    let mut path = vec![target];
    let mut current = target;
    while current != paths.source {
        match paths.predecessors[current] {
            Some(predecessor) => {
                path.push(predecessor);
                current = predecessor;
            }
            None => break,
        }
    }
    path.reverse();

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::algos::shortest_paths;
    use crate::graph::store::GraphStore;
    use crate::graph::types::{Edge, ShortestPathOptions};

    fn diamond() -> ShortestPaths {
        // 0 -> 1 -> 3 costs 3, 0 -> 2 -> 3 costs 4; vertex 4 isolated
        let graph = GraphStore::build(
            5,
            &[
                Edge::new(0, 1, 1.0),
                Edge::new(0, 2, 2.0),
                Edge::new(1, 3, 2.0),
                Edge::new(2, 3, 2.0),
            ],
        )
        .unwrap();
        shortest_paths(&graph, 0, &ShortestPathOptions::default()).unwrap()
    }

    #[test]
    fn test_path_endpoints_and_order() {
        let result = diamond();
        assert_eq!(result.path_to(3).unwrap(), vec![0, 1, 3]);
        assert_eq!(result.path_to(2).unwrap(), vec![0, 2]);
    }

    #[test]
    fn test_path_to_source_is_singleton() {
        let result = diamond();
        assert_eq!(result.path_to(0).unwrap(), vec![0]);
    }

    #[test]
    fn test_unreachable_target() {
        let result = diamond();
        assert!(matches!(
            result.path_to(4),
            Err(LodestarError::Unreachable { target: 4 })
        ));
    }

    #[test]
    fn test_target_out_of_range() {
        let result = diamond();
        assert!(matches!(
            result.path_to(9),
            Err(LodestarError::InvalidVertex {
                vertex: 9,
                vertex_count: 5
            })
        ));
    }
}
