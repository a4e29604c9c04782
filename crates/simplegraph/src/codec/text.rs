//! Legacy line-based import.
//!
//! ```text
//! a
//! b
//! c
//! #
//! a b
//! b c
//! ```
//!
//! Node ids come first, one per line, then a line holding only `#`, then
//! one edge per line. An edge line connects its first and last
//! whitespace-separated tokens. Blank lines are ignored.

use crate::error::{GraphError, Result};
use crate::graph::{NodeId, PropertyMap, SimpleGraph};
use log::{debug, info};
use std::collections::HashSet;

const SEPARATOR: &str = "#";

/// Load nodes and edges from line-based text into `graph`.
///
/// Edges go through [`SimpleGraph::connect_nodes`], so a pair listed twice
/// is connected twice. Input is validated before the graph is touched.
///
/// # Returns
///
/// The number of nodes inserted.
///
/// # Errors
///
/// - [`GraphError::MalformedInput`] if the `#` line is missing or an edge line has a single token
/// - [`GraphError::DuplicateId`] if a node id repeats or already exists
/// - [`GraphError::NodeNotFound`] if an edge names an unknown node
pub fn load_from_string(graph: &mut SimpleGraph, input: &str) -> Result<usize> {
    let lines: Vec<&str> = input.lines().map(str::trim).collect();
    let separator = lines
        .iter()
        .position(|line| *line == SEPARATOR)
        .ok_or_else(|| {
            GraphError::malformed("missing '#' separator line", None::<std::io::Error>)
        })?;

    let nodes: Vec<NodeId> = lines[..separator]
        .iter()
        .filter(|line| !line.is_empty())
        .map(|line| NodeId::parse(line))
        .collect();

    let mut edges = Vec::new();
    for (offset, line) in lines[separator + 1..].iter().enumerate() {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        match tokens.as_slice() {
            [] => continue,
            [first, .., last] => edges.push((NodeId::parse(first), NodeId::parse(last))),
            [_] => {
                return Err(GraphError::malformed(
                    format!(
                        "edge on line {} needs two node ids",
                        separator + offset + 2
                    ),
                    None::<std::io::Error>,
                ))
            }
        }
    }
    debug!("Parsed {} node lines and {} edge lines", nodes.len(), edges.len());

    {
        let mut incoming = HashSet::with_capacity(nodes.len());
        for id in &nodes {
            if graph.contains(id) || !incoming.insert(id) {
                return Err(GraphError::DuplicateId {
                    node_id: id.to_string(),
                });
            }
        }
        for (first, second) in &edges {
            for end in [first, second] {
                if !incoming.contains(&end) && !graph.contains(end) {
                    return Err(GraphError::not_found(end));
                }
            }
        }
    }

    let inserted = nodes.len();
    for id in nodes {
        graph.add_node(Some(id), PropertyMap::new())?;
    }
    for (first, second) in &edges {
        graph.connect_nodes(first, second)?;
    }

    info!("Loaded {inserted} nodes and {} edges from text", edges.len());
    Ok(inserted)
}
