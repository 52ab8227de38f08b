//! Sociogram Graph - network connectivity analysis
//!
//! This crate owns the dense adjacency matrix and every analysis that runs
//! over it: leader and best-follower rankings, breadth-first shortest
//! paths, plain-text matrix export, and the combined report handed to the
//! presentation layer.
//!
//! # Architecture
//!
//! The matrix is built once from an [`EdgeList`](sociogram_core::EdgeList)
//! snapshot and is read-only afterwards. Rankings and path searches are
//! pure functions over a shared reference, so concurrent readers need no
//! locking; replacing the graph means building a fresh matrix.
//!
//! # Example
//!
//! ```
//! use sociogram_core::EdgeList;
//! use sociogram_graph::{shortest_path, AdjacencyMatrix};
//!
//! let mut list = EdgeList::new(true);
//! list.push_edge(1, 2);
//! list.push_edge(2, 3);
//!
//! let matrix = AdjacencyMatrix::build(&list).unwrap();
//! let path = shortest_path(&matrix, 1, 3).unwrap();
//!
//! assert_eq!(path, Some(vec![1, 2, 3]));
//! ```

mod analysis;
mod error;
mod export;
mod matrix;
mod path;
mod ranking;

pub use analysis::{LeaderInfo, LeaderPath, NetworkAnalysis, RenderData};
pub use error::{GraphError, Result};
pub use export::{serialize_matrix, write_matrix, MatrixFormat};
pub use matrix::AdjacencyMatrix;
pub use path::shortest_path;
pub use ranking::{find_best_followers, find_leaders, followers_of, Ranking};
