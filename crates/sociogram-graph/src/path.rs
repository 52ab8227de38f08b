//! Breadth-first shortest-path search.

use crate::error::Result;
use crate::matrix::AdjacencyMatrix;
use sociogram_core::NodeId;
use std::collections::VecDeque;

/// Finds a minimum-edge-count path from `start` to `goal`.
///
/// Returns `Some([start])` when the endpoints coincide and `None` when the
/// goal is unreachable. Out-neighbors are explored in ascending id order,
/// so the returned path is deterministic. Fails with
/// [`GraphError::NodeOutOfRange`](crate::GraphError::NodeOutOfRange) when
/// either endpoint is outside the matrix.
pub fn shortest_path(
    matrix: &AdjacencyMatrix,
    start: NodeId,
    goal: NodeId,
) -> Result<Option<Vec<NodeId>>> {
    matrix.check_node(start)?;
    matrix.check_node(goal)?;

    if start == goal {
        return Ok(Some(vec![start]));
    }

    // First discovery fixes both the hop count and the reported path, so
    // nodes are marked at enqueue time and never re-expanded.
    let mut discovered = vec![false; matrix.size()];
    let mut parent: Vec<Option<NodeId>> = vec![None; matrix.size()];
    let mut queue = VecDeque::new();

    discovered[start] = true;
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        for next in matrix.out_neighbors(current) {
            if discovered[next] {
                continue;
            }
            discovered[next] = true;
            parent[next] = Some(current);

            if next == goal {
                return Ok(Some(reconstruct(&parent, goal)));
            }
            queue.push_back(next);
        }
    }

    Ok(None)
}

/// Walks the parent chain back from the goal.
fn reconstruct(parent: &[Option<NodeId>], goal: NodeId) -> Vec<NodeId> {
    let mut path = vec![goal];
    let mut current = goal;

    while let Some(prev) = parent[current] {
        path.push(prev);
        current = prev;
    }

    path.reverse();
    path
}
