//! The graph model and its traversal queries.

pub use graph::{Edge, Graph, Vertex};
pub use visit::VisitMap;

pub(crate) use display::display;

mod display;
mod graph;
mod visit;
