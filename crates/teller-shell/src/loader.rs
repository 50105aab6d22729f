//! Claim-matrix loading from a delimited text file.
//!
//! One line per customer, comma-separated unit counts, one per
//! resource type:
//!
//! ```text
//! 0,3,2,0
//! 1,7,5,0
//! ```
//!
//! Short input is tolerated the way the original format defined it:
//! missing trailing rows and missing trailing columns default to a
//! zero claim, and columns beyond R are ignored. Only unparseable
//! tokens are errors — silence means zero, garbage does not.

use std::error::Error;
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Why the claim file could not be loaded.
#[derive(Debug)]
pub enum LoadError {
    /// The file could not be opened or read.
    Io(io::Error),
    /// A cell is not a non-negative integer.
    BadCount {
        /// 1-based line number.
        line: usize,
        /// The offending cell text.
        token: String,
    },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "could not read claim file: {e}"),
            Self::BadCount { line, token } => {
                write!(f, "line {line}: '{token}' is not a non-negative integer")
            }
        }
    }
}

impl Error for LoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::BadCount { .. } => None,
        }
    }
}

impl From<io::Error> for LoadError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

/// Load up to `customers` claim rows from a file.
pub fn load_claims(
    path: &Path,
    customers: usize,
    resources: usize,
) -> Result<Vec<Vec<u32>>, LoadError> {
    read_claims(BufReader::new(File::open(path)?), customers, resources)
}

/// Read claim rows from any buffered source. Split out from
/// [`load_claims`] so tests can feed in-memory input.
pub fn read_claims<R: BufRead>(
    reader: R,
    customers: usize,
    resources: usize,
) -> Result<Vec<Vec<u32>>, LoadError> {
    let mut claims = Vec::new();
    for (i, line) in reader.lines().enumerate().take(customers) {
        let line = line?;
        let mut row = vec![0u32; resources];
        for (cell, slot) in line.split(',').take(resources).zip(row.iter_mut()) {
            let cell = cell.trim();
            if cell.is_empty() {
                continue;
            }
            *slot = cell.parse().map_err(|_| LoadError::BadCount {
                line: i + 1,
                token: cell.to_string(),
            })?;
        }
        claims.push(row);
    }
    Ok(claims)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn read(input: &str) -> Result<Vec<Vec<u32>>, LoadError> {
        read_claims(Cursor::new(input), 5, 4)
    }

    #[test]
    fn full_matrix_loads() {
        let rows = read("0,3,2,0\n1,7,5,0\n1,3,3,1\n1,1,0,1\n0,2,1,1\n").unwrap();
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[1], vec![1, 7, 5, 0]);
        assert_eq!(rows[4], vec![0, 2, 1, 1]);
    }

    #[test]
    fn short_file_yields_fewer_rows() {
        let rows = read("1,2,3,4\n5,6,7,8\n").unwrap();
        assert_eq!(rows, vec![vec![1, 2, 3, 4], vec![5, 6, 7, 8]]);
    }

    #[test]
    fn short_rows_are_zero_padded() {
        let rows = read("1,2\n").unwrap();
        assert_eq!(rows, vec![vec![1, 2, 0, 0]]);
    }

    #[test]
    fn extra_columns_and_rows_are_ignored() {
        let rows = read("1,2,3,4,99\n0,0,0,0\n0,0,0,0\n0,0,0,0\n0,0,0,0\n7,7,7,7\n").unwrap();
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0], vec![1, 2, 3, 4]);
    }

    #[test]
    fn whitespace_around_cells_is_accepted() {
        let rows = read(" 1 , 2 ,3, 4\n").unwrap();
        assert_eq!(rows, vec![vec![1, 2, 3, 4]]);
    }

    #[test]
    fn garbage_cell_is_an_error() {
        match read("1,x,3,4\n") {
            Err(LoadError::BadCount { line: 1, token }) => assert_eq!(token, "x"),
            other => panic!("expected BadCount, got {other:?}"),
        }
    }
}
