//! Connectivity rankings over the adjacency matrix.
//!
//! "Leaders" are the most-followed nodes: column sums (in-degree) in a
//! directed graph, row sums in an undirected one where the matrix is
//! symmetric and the row sum is the degree. "Best followers" are the
//! most-following nodes: always row sums (out-degree). The two scoring
//! modes deliberately coincide for undirected graphs; that asymmetry is
//! inherited product behavior and must not be unified here.

use crate::error::Result;
use crate::matrix::AdjacencyMatrix;
use serde::{Deserialize, Serialize};
use sociogram_core::NodeId;

/// A connectivity ranking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ranking {
    /// Ranked node ids, best first.
    pub top: Vec<NodeId>,
    /// Score per node id, covering the whole index space `0..size`.
    pub scores: Vec<usize>,
}

impl Ranking {
    /// Ranks the `top_n` best-scoring ids, descending by score with ties
    /// broken by ascending id. Requests beyond the node count clamp to the
    /// full index space.
    fn from_scores(scores: Vec<usize>, top_n: usize) -> Self {
        let mut order: Vec<NodeId> = (0..scores.len()).collect();
        order.sort_by(|&a, &b| scores[b].cmp(&scores[a]).then_with(|| a.cmp(&b)));
        order.truncate(top_n.min(scores.len()));

        Self { top: order, scores }
    }

    /// Iterates ranked `(node, score)` pairs, best first.
    pub fn entries(&self) -> impl Iterator<Item = (NodeId, usize)> + '_ {
        self.top.iter().map(move |&node| (node, self.scores[node]))
    }
}

/// Ranks the most influential nodes.
///
/// Directed mode scores by in-degree (who is being pointed at); undirected
/// mode scores by row sum, which equals the degree on a symmetric matrix.
pub fn find_leaders(matrix: &AdjacencyMatrix, directed: bool, top_n: usize) -> Ranking {
    let scores = if directed {
        (0..matrix.size()).map(|v| matrix.in_degree(v)).collect()
    } else {
        (0..matrix.size()).map(|u| matrix.out_degree(u)).collect()
    };

    Ranking::from_scores(scores, top_n)
}

/// Ranks the nodes with the most outgoing connections.
pub fn find_best_followers(matrix: &AdjacencyMatrix, top_n: usize) -> Ranking {
    let scores = (0..matrix.size()).map(|u| matrix.out_degree(u)).collect();
    Ranking::from_scores(scores, top_n)
}

/// Everyone following `node`, in ascending id order.
///
/// Directed mode reads the node's column (who points at it); undirected
/// mode reads its row (its neighbors). Fails with
/// [`GraphError::NodeOutOfRange`](crate::GraphError::NodeOutOfRange) when
/// `node` is outside the matrix.
pub fn followers_of(matrix: &AdjacencyMatrix, node: NodeId, directed: bool) -> Result<Vec<NodeId>> {
    matrix.check_node(node)?;

    let followers = if directed {
        (0..matrix.size()).filter(|&v| matrix.get(v, node)).collect()
    } else {
        matrix.out_neighbors(node).collect()
    };

    Ok(followers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GraphError;
    use sociogram_core::EdgeList;

    fn matrix_of(directed: bool, edges: &[(NodeId, NodeId)]) -> AdjacencyMatrix {
        let mut list = EdgeList::new(directed);
        for &(u, v) in edges {
            list.push_edge(u, v);
            if !directed {
                list.push_edge(v, u);
            }
        }
        AdjacencyMatrix::build(&list).unwrap()
    }

    #[test]
    fn test_directed_leaders_use_in_degree() {
        // 1, 2 and 3 each have in-degree 1; the tie resolves to the
        // lowest id.
        let matrix = matrix_of(true, &[(1, 2), (2, 3), (3, 1)]);
        let ranking = find_leaders(&matrix, true, 1);

        assert_eq!(ranking.top, vec![1]);
        assert_eq!(ranking.scores, vec![0, 1, 1, 1]);
    }

    #[test]
    fn test_leader_with_most_incoming_wins() {
        let matrix = matrix_of(true, &[(0, 3), (1, 3), (2, 3), (3, 0)]);
        let ranking = find_leaders(&matrix, true, 2);

        assert_eq!(ranking.top, vec![3, 0]);
        assert_eq!(ranking.scores[3], 3);
    }

    #[test]
    fn test_undirected_leaders_use_degree() {
        // Star around 0: degree 3 at the center, 1 at the leaves.
        let matrix = matrix_of(false, &[(0, 1), (0, 2), (0, 3)]);
        let ranking = find_leaders(&matrix, false, 1);

        assert_eq!(ranking.top, vec![0]);
        assert_eq!(ranking.scores, vec![3, 1, 1, 1]);
    }

    #[test]
    fn test_best_followers_use_out_degree() {
        let matrix = matrix_of(true, &[(2, 0), (2, 1), (0, 1)]);
        let ranking = find_best_followers(&matrix, 2);

        assert_eq!(ranking.top, vec![2, 0]);
        assert_eq!(ranking.scores, vec![1, 0, 2]);
    }

    #[test]
    fn test_scores_descend_with_ties_by_id() {
        let matrix = matrix_of(true, &[(0, 2), (1, 2), (3, 4), (4, 3)]);
        let ranking = find_leaders(&matrix, true, 5);

        let ranked: Vec<(NodeId, usize)> = ranking.entries().collect();
        assert_eq!(ranked, vec![(2, 2), (3, 1), (4, 1), (0, 0), (1, 0)]);
    }

    #[test]
    fn test_top_n_clamps_to_node_count() {
        let matrix = matrix_of(true, &[(0, 1)]);
        let ranking = find_leaders(&matrix, true, 10);
        assert_eq!(ranking.top.len(), 2);
    }

    #[test]
    fn test_followers_of_directed_reads_column() {
        let matrix = matrix_of(true, &[(1, 0), (2, 0), (0, 2)]);
        let followers = followers_of(&matrix, 0, true).unwrap();
        assert_eq!(followers, vec![1, 2]);
    }

    #[test]
    fn test_followers_of_undirected_reads_row() {
        let matrix = matrix_of(false, &[(1, 2), (2, 3), (3, 1)]);
        let followers = followers_of(&matrix, 1, false).unwrap();
        assert_eq!(followers, vec![2, 3]);
    }

    #[test]
    fn test_followers_of_out_of_range() {
        let matrix = matrix_of(true, &[(0, 1)]);
        let result = followers_of(&matrix, 5, true);
        assert!(matches!(
            result,
            Err(GraphError::NodeOutOfRange { node: 5, size: 2 })
        ));
    }
}
