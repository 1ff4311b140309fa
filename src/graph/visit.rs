use crate::types::VId;

/// Visited state for graph traversals.
///
/// The map is owned by the caller rather than embedded in the graph, so a
/// finished enumeration can be [`reset`](VisitMap::reset) and run again
/// without rebuilding the topology.
pub struct VisitMap {
    visited: Vec<bool>,
}

impl VisitMap {
    /// Creates a map covering `len` vertices, all unvisited.
    pub fn new(len: usize) -> Self {
        Self {
            visited: vec![false; len],
        }
    }

    /// Marks `vid` as visited, returning `true` if it was unvisited before.
    pub fn visit(&mut self, vid: VId) -> bool {
        let seen = self.visited[vid];
        self.visited[vid] = true;
        !seen
    }

    pub fn is_visited(&self, vid: VId) -> bool {
        self.visited[vid]
    }

    /// Clears every mark.
    pub fn reset(&mut self) {
        for cell in self.visited.iter_mut() {
            *cell = false;
        }
    }

    pub fn len(&self) -> usize {
        self.visited.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visited.is_empty()
    }
}
