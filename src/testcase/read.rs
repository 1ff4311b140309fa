use super::{
    connection_matrix::ConnectionMatrix,
    error::{Err, Result},
};
use log::info;
use std::path::Path;

/// Reads and parses the testcase file at `path`.
pub fn read_matrix<P: AsRef<Path>>(path: P) -> Result<ConnectionMatrix> {
    info!("reading testcase {}...", path.as_ref().display());
    parse_matrix(&std::fs::read_to_string(path)?)
}

/// Parses the testcase format: the vertex count on the first line, then one
/// row of `n` space separated 0/1 cells per vertex.
pub fn parse_matrix(input: &str) -> Result<ConnectionMatrix> {
    let mut lines = input.lines();
    let first = lines.next().ok_or(Err::MissingVertexCount)?;
    let n: usize = first
        .trim()
        .parse()
        .map_err(|_| Err::InvalidVertexCount(first.trim().to_string()))?;
    let mut rows = Vec::with_capacity(n);
    for i in 0..n {
        let line = lines.next().ok_or(Err::MissingRow(i))?;
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() != n {
            return Err(Err::RowLength {
                row: i,
                expected: n,
                found: tokens.len(),
            });
        }
        let mut row = Vec::with_capacity(n);
        for (j, token) in tokens.iter().enumerate() {
            match token.parse::<u8>() {
                Ok(cell) if cell <= 1 => row.push(cell),
                _ => {
                    return Err(Err::InvalidEntry {
                        row: i,
                        col: j,
                        token: token.to_string(),
                    })
                }
            }
        }
        rows.push(row);
    }
    Ok(ConnectionMatrix::from_rows(rows))
}
