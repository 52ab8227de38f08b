//! Dense adjacency matrix.
//!
//! The matrix is the central data structure every analysis operates on.
//! It is built once from an edge-list snapshot and read-only afterwards;
//! rankings and path searches take shared references and never mutate it.

use crate::error::{GraphError, Result};
use serde::{Deserialize, Serialize};
use sociogram_core::{EdgeList, NodeId};
use tracing::debug;

/// A square 0/1 adjacency matrix.
///
/// `get(u, v)` is true iff an edge u→v exists. The matrix is sized to
/// `max(node id) + 1`, so every id in `0..size` is addressable and ids that
/// never appeared in the input simply have all-zero rows and columns.
/// Sparse, high-valued ids therefore waste space; that is a documented
/// limitation of this representation, and callers wanting a compact matrix
/// must renumber their nodes before building.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjacencyMatrix {
    size: usize,
    /// Row-major cells, 0 or 1.
    cells: Vec<u8>,
}

impl AdjacencyMatrix {
    /// Builds the matrix from an edge-list snapshot.
    ///
    /// Duplicate edges collapse to a single 1; setting an already-set cell
    /// is a no-op. Fails with [`GraphError::EmptyGraph`] when the snapshot
    /// has no nodes.
    pub fn build(edge_list: &EdgeList) -> Result<Self> {
        let max = edge_list.max_node().ok_or(GraphError::EmptyGraph)?;
        let size = max + 1;
        let mut cells = vec![0u8; size * size];

        for &(u, v) in edge_list.edges() {
            cells[u * size + v] = 1;
        }

        debug!(size, edges = edge_list.edge_count(), "built adjacency matrix");
        Ok(Self { size, cells })
    }

    /// The number of rows (and columns).
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether an edge u→v exists.
    ///
    /// # Panics
    /// Panics if either id is outside `0..size`. Query entry points bounds-
    /// check ids before indexing.
    pub fn get(&self, u: NodeId, v: NodeId) -> bool {
        self.cells[u * self.size + v] == 1
    }

    /// One row of cells.
    pub fn row(&self, u: NodeId) -> &[u8] {
        &self.cells[u * self.size..(u + 1) * self.size]
    }

    /// Iterates rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.cells.chunks(self.size)
    }

    /// Out-neighbors of `u` in ascending id order.
    pub fn out_neighbors(&self, u: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.row(u)
            .iter()
            .enumerate()
            .filter(|(_, &cell)| cell == 1)
            .map(|(v, _)| v)
    }

    /// Row sum: how many nodes `u` points at.
    pub fn out_degree(&self, u: NodeId) -> usize {
        self.row(u).iter().map(|&cell| cell as usize).sum()
    }

    /// Column sum: how many nodes point at `v`.
    pub fn in_degree(&self, v: NodeId) -> usize {
        (0..self.size)
            .map(|u| self.cells[u * self.size + v] as usize)
            .sum()
    }

    /// True when every edge has its reverse, as after an undirected build.
    pub fn is_symmetric(&self) -> bool {
        (0..self.size).all(|u| (0..u).all(|v| self.get(u, v) == self.get(v, u)))
    }

    /// Bounds-checks a caller-supplied node id.
    pub(crate) fn check_node(&self, node: NodeId) -> Result<()> {
        if node < self.size {
            Ok(())
        } else {
            Err(GraphError::NodeOutOfRange {
                node,
                size: self.size,
            })
        }
    }
}
