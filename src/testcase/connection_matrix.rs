use itertools::Itertools;

/// A square 0/1 matrix describing directed adjacency between vertices by
/// index.
///
/// Cells are stored row-major. The loader guarantees squareness and 0/1
/// cells before a matrix is constructed; the graph builder performs no
/// validation of its own.
pub struct ConnectionMatrix {
    n: usize,
    cells: Vec<u8>,
}

impl ConnectionMatrix {
    /// Builds a matrix from `n` rows of `n` cells each.
    pub fn from_rows(rows: Vec<Vec<u8>>) -> Self {
        let n = rows.len();
        debug_assert!(rows.iter().all(|row| row.len() == n));
        Self {
            n,
            cells: rows.into_iter().flatten().collect(),
        }
    }

    /// The vertex count (= number of rows = number of columns).
    pub fn n(&self) -> usize {
        self.n
    }

    pub fn get(&self, i: usize, j: usize) -> u8 {
        self.cells[i * self.n + j]
    }

    pub fn row(&self, i: usize) -> &[u8] {
        &self.cells[i * self.n..(i + 1) * self.n]
    }
}

impl std::fmt::Display for ConnectionMatrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for i in 0..self.n {
            writeln!(f, "{}", self.row(i).iter().format(" "))?;
        }
        Ok(())
    }
}
