use crate::{
    graph::{display, VisitMap},
    testcase::ConnectionMatrix,
    types::{EId, VId},
};
use log::info;
use std::collections::VecDeque;

/// A vertex of the graph.
///
/// Adjacency is stored as edge ids into the owning graph's edge list, each
/// list in insertion order.
pub struct Vertex {
    id: VId,
    incoming: Vec<EId>,
    outgoing: Vec<EId>,
}

impl Vertex {
    pub fn id(&self) -> VId {
        self.id
    }

    pub fn incoming(&self) -> &[EId] {
        &self.incoming
    }

    pub fn outgoing(&self) -> &[EId] {
        &self.outgoing
    }

    pub fn in_deg(&self) -> usize {
        self.incoming.len()
    }

    pub fn out_deg(&self) -> usize {
        self.outgoing.len()
    }
}

/// A directed edge between two vertices.
///
/// The direction is kept for reporting; traversal treats the edge as
/// connecting both endpoints.
pub struct Edge {
    start: VId,
    end: VId,
}

impl Edge {
    pub fn start(&self) -> VId {
        self.start
    }

    pub fn end(&self) -> VId {
        self.end
    }
}

/// A graph built from a square 0/1 connection matrix.
///
/// Vertices live in an arena indexed by [`VId`]; the topology is immutable
/// after construction. Traversal state lives in a caller-owned
/// [`VisitMap`].
pub struct Graph {
    vertices: Vec<Vertex>,
    edges: Vec<Edge>,
}

impl Graph {
    /// Builds the graph from a connection matrix.
    ///
    /// Every off-diagonal cell `(i, j)` equal to 1 produces one edge
    /// `i -> j`, registered as outgoing on `i` and incoming on `j`.
    /// Diagonal cells never produce an edge. The matrix is scanned in
    /// row-major order, which fixes the insertion order of every adjacency
    /// list.
    pub fn from_matrix(matrix: &ConnectionMatrix) -> Graph {
        let n = matrix.n();
        info!("creating {} vertices...", n);
        let mut vertices: Vec<Vertex> = (0..n)
            .map(|id| Vertex {
                id,
                incoming: Vec::new(),
                outgoing: Vec::new(),
            })
            .collect();
        info!("creating edges...");
        let mut edges: Vec<Edge> = Vec::new();
        for i in 0..n {
            for j in 0..n {
                if i != j && matrix.get(i, j) == 1 {
                    let eid = edges.len();
                    edges.push(Edge { start: i, end: j });
                    vertices[i].outgoing.push(eid);
                    vertices[j].incoming.push(eid);
                }
            }
        }
        info!("created {} edges", edges.len());
        Graph { vertices, edges }
    }

    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn vertex(&self, vid: VId) -> &Vertex {
        &self.vertices[vid]
    }

    /// Returns the starting vertices of `vid`'s incoming edges, in
    /// insertion order.
    pub fn incoming_neighbors(&self, vid: VId) -> impl Iterator<Item = VId> + '_ {
        self.vertices[vid]
            .incoming
            .iter()
            .map(move |&eid| self.edges[eid].start)
    }

    /// Returns the ending vertices of `vid`'s outgoing edges, in insertion
    /// order.
    pub fn outgoing_neighbors(&self, vid: VId) -> impl Iterator<Item = VId> + '_ {
        self.vertices[vid]
            .outgoing
            .iter()
            .map(move |&eid| self.edges[eid].end)
    }

    /// Runs a breadth-first search from `start`, treating every edge as
    /// undirected.
    ///
    /// Returns the reachable vertices in discovery order, or `None` if
    /// `start` is already marked in `visited` (an earlier traversal
    /// accounted for it). Vertices are marked when discovered, before they
    /// are enqueued. Neighbors are enumerated incoming edges first, then
    /// outgoing edges.
    pub fn bfs(&self, start: VId, visited: &mut VisitMap) -> Option<Vec<VId>> {
        if !visited.visit(start) {
            return None;
        }
        let mut order = vec![start];
        let mut queue = VecDeque::new();
        queue.push_back(start);
        while let Some(current) = queue.pop_front() {
            for neighbor in self
                .incoming_neighbors(current)
                .chain(self.outgoing_neighbors(current))
            {
                if visited.visit(neighbor) {
                    order.push(neighbor);
                    queue.push_back(neighbor);
                }
            }
        }
        Some(order)
    }

    /// Enumerates the connected components, reusing the caller's visited
    /// state.
    ///
    /// Vertices already marked in `visited` are skipped, so running this
    /// again with the same map yields an empty list; call
    /// [`VisitMap::reset`] to start over.
    pub fn connected_components_in(&self, visited: &mut VisitMap) -> Vec<Vec<VId>> {
        let mut components = Vec::new();
        for vid in 0..self.vertices.len() {
            if let Some(component) = self.bfs(vid, visited) {
                components.push(component);
            }
        }
        components
    }

    /// Enumerates the connected components with a fresh visited state.
    ///
    /// Component `k` is seeded by the lowest-id vertex not reached by
    /// components `0..k`; every vertex lands in exactly one component and
    /// isolated vertices form singletons.
    pub fn connected_components(&self) -> Vec<Vec<VId>> {
        let mut visited = VisitMap::new(self.vertices.len());
        self.connected_components_in(&mut visited)
    }

    /// Returns the index of the component with the most vertices, or
    /// `None` for an empty list.
    ///
    /// Ties resolve to the lowest index: the scan starts with component 0
    /// as the maximum and only replaces it on strict inequality.
    pub fn largest_component(components: &[Vec<VId>]) -> Option<usize> {
        let mut index = 0;
        let mut max = components.first()?.len();
        for (i, component) in components.iter().enumerate().skip(1) {
            if max < component.len() {
                index = i;
                max = component.len();
            }
        }
        Some(index)
    }
}

impl std::fmt::Display for Graph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        display(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph_from(rows: Vec<Vec<u8>>) -> Graph {
        Graph::from_matrix(&ConnectionMatrix::from_rows(rows))
    }

    #[test]
    fn test_from_matrix_vertices() {
        let graph = graph_from(vec![vec![0, 1, 0], vec![1, 0, 0], vec![0, 0, 1]]);
        assert_eq!(graph.num_vertices(), 3);
        assert_eq!(
            graph.vertices().iter().map(|v| v.id()).collect::<Vec<_>>(),
            vec![0, 1, 2]
        );
    }

    #[test]
    fn test_from_matrix_edges() {
        let graph = graph_from(vec![vec![0, 1, 0], vec![1, 0, 0], vec![0, 0, 1]]);
        assert_eq!(
            graph
                .edges()
                .iter()
                .map(|e| (e.start(), e.end()))
                .collect::<Vec<_>>(),
            vec![(0, 1), (1, 0)]
        );
    }

    #[test]
    fn test_from_matrix_ignores_diagonal() {
        let graph = graph_from(vec![vec![1, 0], vec![0, 1]]);
        assert_eq!(graph.num_edges(), 0);
        assert_eq!(graph.vertex(0).out_deg(), 0);
        assert_eq!(graph.vertex(1).in_deg(), 0);
    }

    #[test]
    fn test_from_matrix_adjacency() {
        let graph = graph_from(vec![
            vec![0, 1, 1, 0],
            vec![0, 0, 0, 1],
            vec![0, 0, 0, 0],
            vec![1, 0, 0, 0],
        ]);
        assert_eq!(graph.incoming_neighbors(0).collect::<Vec<_>>(), vec![3]);
        assert_eq!(graph.outgoing_neighbors(0).collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(graph.incoming_neighbors(3).collect::<Vec<_>>(), vec![1]);
        assert_eq!(graph.outgoing_neighbors(2).count(), 0);
    }

    #[test]
    fn test_bfs_incoming_before_outgoing() {
        let graph = graph_from(vec![
            vec![0, 0, 1, 1],
            vec![1, 0, 0, 0],
            vec![0, 0, 0, 0],
            vec![0, 0, 0, 0],
        ]);
        let mut visited = VisitMap::new(graph.num_vertices());
        assert_eq!(graph.bfs(0, &mut visited), Some(vec![0, 1, 2, 3]));
    }

    #[test]
    fn test_bfs_marks_visited() {
        let graph = graph_from(vec![vec![0, 1, 0], vec![1, 0, 0], vec![0, 0, 0]]);
        let mut visited = VisitMap::new(graph.num_vertices());
        graph.bfs(0, &mut visited).unwrap();
        assert!(visited.is_visited(0));
        assert!(visited.is_visited(1));
        assert!(!visited.is_visited(2));
    }

    #[test]
    fn test_bfs_revisit_yields_none() {
        let graph = graph_from(vec![vec![0, 1, 0], vec![1, 0, 0], vec![0, 0, 0]]);
        let mut visited = VisitMap::new(graph.num_vertices());
        assert_eq!(graph.bfs(0, &mut visited), Some(vec![0, 1]));
        assert_eq!(graph.bfs(1, &mut visited), None);
        assert_eq!(graph.bfs(2, &mut visited), Some(vec![2]));
    }

    #[test]
    fn test_components_pair_and_singleton() {
        let graph = graph_from(vec![vec![0, 1, 0], vec![1, 0, 0], vec![0, 0, 1]]);
        let components = graph.connected_components();
        assert_eq!(components, vec![vec![0, 1], vec![2]]);
        assert_eq!(Graph::largest_component(&components), Some(0));
    }

    #[test]
    fn test_components_all_disconnected() {
        let graph = graph_from(vec![vec![0; 4]; 4]);
        let components = graph.connected_components();
        assert_eq!(components, vec![vec![0], vec![1], vec![2], vec![3]]);
        assert_eq!(Graph::largest_component(&components), Some(0));
    }

    #[test]
    fn test_components_fully_connected() {
        let graph = graph_from(vec![vec![0, 1, 1], vec![1, 0, 1], vec![1, 1, 0]]);
        assert_eq!(graph.connected_components(), vec![vec![0, 1, 2]]);
    }

    #[test]
    fn test_components_partition() {
        let graph = graph_from(vec![
            vec![0, 0, 0, 0, 1],
            vec![0, 0, 1, 0, 0],
            vec![0, 0, 0, 0, 0],
            vec![0, 0, 0, 0, 0],
            vec![0, 0, 0, 0, 0],
        ]);
        let components = graph.connected_components();
        let mut all: Vec<VId> = components.iter().flatten().copied().collect();
        all.sort();
        assert_eq!(all, vec![0, 1, 2, 3, 4]);
        assert!(components.iter().all(|c| !c.is_empty()));
    }

    #[test]
    fn test_components_reuse_and_reset() {
        let graph = graph_from(vec![vec![0, 1], vec![1, 0]]);
        let mut visited = VisitMap::new(graph.num_vertices());
        let first = graph.connected_components_in(&mut visited);
        assert_eq!(first, vec![vec![0, 1]]);
        assert!(graph.connected_components_in(&mut visited).is_empty());
        visited.reset();
        assert_eq!(graph.connected_components_in(&mut visited), first);
    }

    #[test]
    fn test_largest_component_tie_breaks_to_first() {
        let components = vec![vec![0, 1], vec![2], vec![3, 4]];
        assert_eq!(Graph::largest_component(&components), Some(0));
    }

    #[test]
    fn test_largest_component_strictly_greater_wins() {
        let components = vec![vec![0], vec![1, 2, 3], vec![4, 5]];
        assert_eq!(Graph::largest_component(&components), Some(1));
    }

    #[test]
    fn test_largest_component_empty() {
        assert_eq!(Graph::largest_component(&[]), None);
    }

    #[test]
    fn test_empty_graph() {
        let graph = graph_from(vec![]);
        assert_eq!(graph.num_vertices(), 0);
        assert!(graph.connected_components().is_empty());
    }

    #[test]
    fn test_display() {
        let graph = graph_from(vec![vec![0, 1, 0], vec![1, 0, 0], vec![0, 0, 1]]);
        assert_eq!(
            graph.to_string(),
            "vertices:\n\
             (id = 0, incoming edges from = [1], outgoing edges to = [1])\n\
             (id = 1, incoming edges from = [0], outgoing edges to = [0])\n\
             (id = 2, incoming edges from = [], outgoing edges to = [])\n\
             \n\
             edges:\n\
             (0 -> 1)\n\
             (1 -> 0)\n"
        );
    }
}
