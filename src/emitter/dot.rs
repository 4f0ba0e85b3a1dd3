//! DOT export
//!
//! Writes the graph in Graphviz notation for external viewers. Nodes carry
//! a `label` attribute; edges are plain directed edges, emitted as given.

use crate::graph::Graph;

pub fn emit_dot(graph: &Graph) -> String {
    let mut out = String::from("digraph pipeline {\n");

    for node in &graph.nodes {
        let label = if node.label.is_empty() { &node.id } else { &node.label };
        out.push_str(&format!("  {} [label={}]\n", quote(&node.id), quote(label)));
    }

    for edge in &graph.edges {
        out.push_str(&format!("  {} -> {}\n", quote(&edge.source), quote(&edge.target)));
    }

    out.push_str("}\n");
    out
}

fn quote(value: &str) -> String {
    format!("\"{}\"", value.replace('\\', "\\\\").replace('"', "\\\""))
}
