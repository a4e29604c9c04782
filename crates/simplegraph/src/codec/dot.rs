//! DOT format export for Graphviz visualization.
//!
//! Emits a `strict graph` with one `--` line per adjacency-list entry, so
//! each undirected edge appears once from each endpoint. Graphviz collapses
//! the duplicates when rendering a strict graph.

use crate::config::DotOptions;
use crate::error::{GraphError, Result};
use crate::graph::{Node, SimpleGraph};

/// Export graph to DOT, labelling nodes by their `name` property.
pub fn to_dot_string(graph: &SimpleGraph) -> Result<String> {
    to_dot_string_with(graph, &DotOptions::default())
}

/// Export graph to DOT with custom options.
///
/// # Errors
///
/// Returns [`GraphError::PropertyNotFound`] if a node with at least one
/// edge lacks the label property.
pub fn to_dot_string_with(graph: &SimpleGraph, options: &DotOptions) -> Result<String> {
    let mut output = match &options.graph_name {
        Some(name) => format!("strict graph \"{}\" {{\n", escape_dot_label(name)),
        None => String::from("strict graph {\n"),
    };

    for node in graph.iter() {
        if node.neighbors().is_empty() {
            continue;
        }
        let label = node_label(node, &options.label_key)?;
        for neighbor_id in node.neighbors() {
            let neighbor = graph.get_node(neighbor_id)?;
            let neighbor_label = node_label(neighbor, &options.label_key)?;
            output.push_str(&format!("    \"{label}\" -- \"{neighbor_label}\";\n"));
        }
    }

    output.push('}');
    Ok(output)
}

fn node_label(node: &Node, key: &str) -> Result<String> {
    node.data()
        .get(key)
        .map(|value| escape_dot_label(&value.to_string()))
        .ok_or_else(|| GraphError::PropertyNotFound {
            entity_type: "node".to_string(),
            entity_id: node.id().to_string(),
            key: key.to_string(),
        })
}

/// Escape special characters for DOT labels
fn escape_dot_label(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}
