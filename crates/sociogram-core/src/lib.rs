//! Sociogram Core - Edge-list ingestion
//!
//! This crate turns row-oriented edge data (CSV or other delimited text)
//! into a validated node/edge snapshot that the analysis crates consume.
//! Bad rows are dropped with a logged warning rather than failing the run;
//! only source-level failures (I/O, undecodable input) are errors.
//!
//! # Example
//!
//! ```
//! use sociogram_core::EdgeListReader;
//!
//! let data = "id1,id2\n1,2\n2,3\n";
//! let edge_list = EdgeListReader::new().read(data.as_bytes(), true).unwrap();
//!
//! assert_eq!(edge_list.node_count(), 3);
//! assert_eq!(edge_list.edges(), &[(1, 2), (2, 3)]);
//! ```

mod edge_list;
mod error;
mod reader;

pub use edge_list::{EdgeList, NodeId};
pub use error::{ReadError, Result};
pub use reader::{parse_row, EdgeListReader, RowOutcome, SkipReason};
