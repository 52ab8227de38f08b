//! CSV-backed edge-list reading.
//!
//! Each input row is classified independently: a valid `(u, v)` pair, a
//! recognized header, or a malformed row that gets dropped with a warning.
//! The reader never fails on row content; only the source itself (I/O,
//! undecodable data) can abort a read.

use crate::edge_list::{EdgeList, NodeId};
use crate::error::Result;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::warn;

/// Header token recognized case-insensitively in a row's first field.
const HEADER_TOKEN: &str = "id1";

/// Reads row-oriented edge data into an [`EdgeList`].
///
/// Rows are decoded with a comma delimiter by default; use
/// [`with_delimiter`](Self::with_delimiter) for other separators. Row
/// lengths are not enforced: extra columns are ignored and short rows fall
/// through to the malformed-row skip path.
pub struct EdgeListReader {
    delimiter: u8,
}

impl Default for EdgeListReader {
    fn default() -> Self {
        Self::new()
    }
}

impl EdgeListReader {
    /// Creates a reader with the default comma delimiter.
    pub fn new() -> Self {
        Self { delimiter: b',' }
    }

    /// Creates a reader with a custom field delimiter.
    pub fn with_delimiter(delimiter: u8) -> Self {
        Self { delimiter }
    }

    /// Reads an edge list from a file.
    pub fn read_path<P: AsRef<Path>>(&self, path: P, directed: bool) -> Result<EdgeList> {
        let file = File::open(path)?;
        self.read(file, directed)
    }

    /// Reads an edge list from any byte source.
    ///
    /// When `directed` is false the reverse orientation of every edge is
    /// appended as well; deduplication is left to the matrix build.
    pub fn read<R: Read>(&self, input: R, directed: bool) -> Result<EdgeList> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .delimiter(self.delimiter)
            .from_reader(input);

        let mut list = EdgeList::new(directed);

        for result in rdr.records() {
            let record = result?;
            match parse_row(&record) {
                RowOutcome::Edge(u, v) => {
                    list.push_edge(u, v);
                    if !directed {
                        list.push_edge(v, u);
                    }
                }
                RowOutcome::Skip(SkipReason::BadId) => {
                    warn!("skipping invalid row: {:?}", record);
                    list.record_skip();
                }
                RowOutcome::Skip(_) => {}
            }
        }

        Ok(list)
    }
}

/// Outcome of classifying one input row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowOutcome {
    /// The row carried a valid edge.
    Edge(NodeId, NodeId),
    /// The row was dropped.
    Skip(SkipReason),
}

/// Why a row was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The row had no fields.
    Empty,
    /// The first field matched the header token.
    Header,
    /// The first two fields did not both parse as node ids.
    BadId,
}

/// Classifies a single decoded row.
pub fn parse_row(record: &csv::StringRecord) -> RowOutcome {
    let first = match record.get(0) {
        Some(field) => field,
        None => return RowOutcome::Skip(SkipReason::Empty),
    };

    if first.eq_ignore_ascii_case(HEADER_TOKEN) {
        return RowOutcome::Skip(SkipReason::Header);
    }

    let u = first.trim().parse::<NodeId>().ok();
    let v = record
        .get(1)
        .and_then(|field| field.trim().parse::<NodeId>().ok());

    match (u, v) {
        (Some(u), Some(v)) => RowOutcome::Edge(u, v),
        _ => RowOutcome::Skip(SkipReason::BadId),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(input: &str, directed: bool) -> EdgeList {
        EdgeListReader::new().read(input.as_bytes(), directed).unwrap()
    }

    #[test]
    fn test_parses_valid_rows() {
        let list = read("1,2\n2,3\n3,1\n", true);

        assert_eq!(list.sorted_nodes(), vec![1, 2, 3]);
        assert_eq!(list.edges(), &[(1, 2), (2, 3), (3, 1)]);
        assert_eq!(list.skipped_rows(), 0);
    }

    #[test]
    fn test_skips_header_row() {
        let list = read("id1,id2\n1,2\n", true);

        assert_eq!(list.edges(), &[(1, 2)]);
        // The header is recognized, not malformed.
        assert_eq!(list.skipped_rows(), 0);
    }

    #[test]
    fn test_header_is_case_insensitive() {
        let list = read("ID1,ID2\n1,2\n", true);
        assert_eq!(list.edges(), &[(1, 2)]);
    }

    #[test]
    fn test_malformed_row_is_skipped_with_count() {
        let list = read("1,2\nx,y\n2,3\n", true);

        assert_eq!(list.edges(), &[(1, 2), (2, 3)]);
        assert_eq!(list.skipped_rows(), 1);
    }

    #[test]
    fn test_short_row_is_skipped() {
        let list = read("1\n1,2\n", true);

        assert_eq!(list.edges(), &[(1, 2)]);
        assert_eq!(list.skipped_rows(), 1);
    }

    #[test]
    fn test_negative_id_is_malformed() {
        let list = read("-1,2\n", true);

        assert!(list.is_empty());
        assert_eq!(list.skipped_rows(), 1);
    }

    #[test]
    fn test_undirected_appends_reverse_edge() {
        let list = read("1,2\n", false);
        assert_eq!(list.edges(), &[(1, 2), (2, 1)]);
    }

    #[test]
    fn test_extra_columns_are_ignored() {
        let list = read("1,2,0.5,label\n", true);
        assert_eq!(list.edges(), &[(1, 2)]);
    }

    #[test]
    fn test_empty_input() {
        let list = read("", true);
        assert!(list.is_empty());
    }

    #[test]
    fn test_custom_delimiter() {
        let list = EdgeListReader::with_delimiter(b'\t')
            .read("1\t2\n".as_bytes(), true)
            .unwrap();
        assert_eq!(list.edges(), &[(1, 2)]);
    }

    #[test]
    fn test_parse_row_outcomes() {
        let edge = csv::StringRecord::from(vec!["4", "7"]);
        assert_eq!(parse_row(&edge), RowOutcome::Edge(4, 7));

        let header = csv::StringRecord::from(vec!["Id1", "Id2"]);
        assert_eq!(parse_row(&header), RowOutcome::Skip(SkipReason::Header));

        let bad = csv::StringRecord::from(vec!["seven", "7"]);
        assert_eq!(parse_row(&bad), RowOutcome::Skip(SkipReason::BadId));
    }

    #[test]
    fn test_read_path() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "id1,id2\n1,2\n2,3\n").unwrap();

        let list = EdgeListReader::new().read_path(file.path(), true).unwrap();
        assert_eq!(list.edges(), &[(1, 2), (2, 3)]);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let result = EdgeListReader::new().read_path("does/not/exist.csv", true);
        assert!(matches!(result, Err(crate::ReadError::Io(_))));
    }
}
