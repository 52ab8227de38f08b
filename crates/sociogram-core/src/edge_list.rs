//! The validated node/edge snapshot produced by ingestion.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A node identifier. Non-negative by construction.
pub type NodeId = usize;

/// One parsed edge-list snapshot: the node set, the edge sequence, and the
/// directedness it was read under.
///
/// The node set is the union of all endpoints seen in the input. Edges are
/// kept in input order and are not deduplicated here; the adjacency-matrix
/// build collapses duplicates idempotently. In undirected mode the reader
/// stores both orientations of every edge, so `edge_count` reports twice
/// the number of input rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdgeList {
    nodes: HashSet<NodeId>,
    edges: Vec<(NodeId, NodeId)>,
    directed: bool,
    skipped_rows: usize,
}

impl EdgeList {
    /// Creates an empty edge list for the given mode.
    pub fn new(directed: bool) -> Self {
        Self {
            nodes: HashSet::new(),
            edges: Vec::new(),
            directed,
            skipped_rows: 0,
        }
    }

    /// Appends an edge and registers both endpoints as nodes.
    pub fn push_edge(&mut self, u: NodeId, v: NodeId) {
        self.nodes.insert(u);
        self.nodes.insert(v);
        self.edges.push((u, v));
    }

    /// Counts one dropped input row.
    pub(crate) fn record_skip(&mut self) {
        self.skipped_rows += 1;
    }

    /// The set of node ids seen in the input.
    pub fn nodes(&self) -> &HashSet<NodeId> {
        &self.nodes
    }

    /// Node ids in ascending order.
    pub fn sorted_nodes(&self) -> Vec<NodeId> {
        let mut nodes: Vec<NodeId> = self.nodes.iter().copied().collect();
        nodes.sort_unstable();
        nodes
    }

    /// The edge sequence, in input order.
    pub fn edges(&self) -> &[(NodeId, NodeId)] {
        &self.edges
    }

    /// Whether the snapshot was read as a directed graph.
    pub fn directed(&self) -> bool {
        self.directed
    }

    /// The highest node id, or `None` when no nodes were seen.
    pub fn max_node(&self) -> Option<NodeId> {
        self.nodes.iter().copied().max()
    }

    /// Number of distinct nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of stored edges (both orientations in undirected mode).
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// True when no valid rows were found.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of input rows dropped as malformed.
    pub fn skipped_rows(&self) -> usize {
        self.skipped_rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_edge_registers_endpoints() {
        let mut list = EdgeList::new(true);
        list.push_edge(1, 5);

        assert_eq!(list.node_count(), 2);
        assert!(list.nodes().contains(&1));
        assert!(list.nodes().contains(&5));
        assert_eq!(list.edges(), &[(1, 5)]);
    }

    #[test]
    fn test_duplicate_edges_are_kept() {
        let mut list = EdgeList::new(true);
        list.push_edge(0, 1);
        list.push_edge(0, 1);

        assert_eq!(list.edge_count(), 2);
        assert_eq!(list.node_count(), 2);
    }

    #[test]
    fn test_max_node() {
        let mut list = EdgeList::new(true);
        assert_eq!(list.max_node(), None);

        list.push_edge(3, 7);
        list.push_edge(2, 1);
        assert_eq!(list.max_node(), Some(7));
    }

    #[test]
    fn test_empty_list() {
        let list = EdgeList::new(false);
        assert!(list.is_empty());
        assert_eq!(list.node_count(), 0);
        assert_eq!(list.edge_count(), 0);
    }

    #[test]
    fn test_sorted_nodes() {
        let mut list = EdgeList::new(true);
        list.push_edge(9, 2);
        list.push_edge(4, 9);

        assert_eq!(list.sorted_nodes(), vec![2, 4, 9]);
    }
}
