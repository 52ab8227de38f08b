//! Matrix serialization to plain-text formats.
//!
//! Output is generated fully in memory before any I/O; a failed write
//! surfaces as an `Io` error, never as a half-serialized matrix.

use crate::error::Result;
use crate::matrix::AdjacencyMatrix;
use std::fs;
use std::path::Path;

/// Output format for a serialized matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixFormat {
    /// Rows of space-separated integers.
    Plain,
    /// Rows of comma-separated integers.
    Delimited,
}

impl MatrixFormat {
    /// Picks the format for a destination path: `.csv` gets commas,
    /// everything else gets spaces.
    pub fn for_path<P: AsRef<Path>>(path: P) -> Self {
        match path.as_ref().extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => Self::Delimited,
            _ => Self::Plain,
        }
    }

    fn separator(self) -> &'static str {
        match self {
            Self::Plain => " ",
            Self::Delimited => ",",
        }
    }
}

/// Serializes the matrix, one row per line.
pub fn serialize_matrix(matrix: &AdjacencyMatrix, format: MatrixFormat) -> String {
    let sep = format.separator();
    let mut out = String::new();

    for row in matrix.rows() {
        let cells: Vec<String> = row.iter().map(|cell| cell.to_string()).collect();
        out.push_str(&cells.join(sep));
        out.push('\n');
    }

    out
}

/// Serializes the matrix and writes it to `path`.
pub fn write_matrix<P: AsRef<Path>>(
    matrix: &AdjacencyMatrix,
    path: P,
    format: MatrixFormat,
) -> Result<()> {
    fs::write(path, serialize_matrix(matrix, format))?;
    Ok(())
}
