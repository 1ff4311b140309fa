//! The testcase loader.
//!
//! Parses the textual connection matrix format consumed by the graph
//! builder. Any violation is fatal: the loader returns at the first error
//! and no partial matrix reaches the graph.

pub use connection_matrix::ConnectionMatrix;
pub use error::{Err, Result};
pub use read::{parse_matrix, read_matrix};

mod connection_matrix;
mod error;
mod read;
