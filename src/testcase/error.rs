//! Testcase loading errors.

use derive_more::Display;

pub type Result<T> = std::result::Result<T, Err>;

/// Errors produced while loading a testcase file.
#[derive(Debug, Display)]
pub enum Err {
    #[display(fmt = "cannot read testcase: {}", _0)]
    Io(std::io::Error),
    #[display(fmt = "testcase format is violated: first line is missing")]
    MissingVertexCount,
    #[display(fmt = "testcase format is violated: invalid vertex count '{}'", _0)]
    InvalidVertexCount(String),
    #[display(fmt = "testcase format is violated: row {} is missing", _0)]
    MissingRow(usize),
    #[display(
        fmt = "testcase format is violated: row {} has {} entries, expected {}",
        row,
        found,
        expected
    )]
    RowLength {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[display(
        fmt = "testcase format is violated: invalid entry '{}' at row {} column {}",
        token,
        row,
        col
    )]
    InvalidEntry {
        row: usize,
        col: usize,
        token: String,
    },
}

impl std::error::Error for Err {}

impl From<std::io::Error> for Err {
    fn from(e: std::io::Error) -> Self {
        Err::Io(e)
    }
}
