use crate::graph::Graph;
use crate::types::VId;
use itertools::Itertools;

fn display_vertex(graph: &Graph, vid: VId, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    writeln!(
        f,
        "(id = {}, incoming edges from = [{}], outgoing edges to = [{}])",
        vid,
        graph.incoming_neighbors(vid).format(", "),
        graph.outgoing_neighbors(vid).format(", ")
    )
}

fn display_vertices(graph: &Graph, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    writeln!(f, "vertices:")?;
    for vertex in graph.vertices() {
        display_vertex(graph, vertex.id(), f)?;
    }
    Ok(())
}

fn display_edges(graph: &Graph, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    writeln!(f, "edges:")?;
    for edge in graph.edges() {
        writeln!(f, "({} -> {})", edge.start(), edge.end())?;
    }
    Ok(())
}

pub fn display(graph: &Graph, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    display_vertices(graph, f)?;
    writeln!(f)?;
    display_edges(graph, f)
}
