//! Path enumeration.
//!
//! All-simple-paths search over the undirected adjacency lists, driven by an
//! explicit work stack rather than recursion.

use crate::config::PathOptions;
use crate::error::{GraphError, Result};
use crate::graph::{Node, NodeId, SimpleGraph};
use log::{debug, trace};

/// Find every simple path from `source` to `terminal`.
///
/// Partial paths are kept on a stack and popped last-in-first-out, so the
/// result order is deterministic for a given adjacency order. A path never
/// visits the same node twice. If `source == terminal` the single one-node
/// path is returned; an unreachable terminal yields an empty vector.
///
/// The search is exponential in the worst case. Use
/// [`find_paths_with`] to bound it.
///
/// # Errors
///
/// Returns [`GraphError::NodeNotFound`] if either endpoint is missing.
pub fn find_paths<'g>(
    graph: &'g SimpleGraph,
    source: &NodeId,
    terminal: &NodeId,
) -> Result<Vec<Vec<&'g Node>>> {
    find_paths_with(graph, source, terminal, &PathOptions::unbounded())
}

/// Same as [`find_paths`], returning node ids only.
pub fn find_path_ids(
    graph: &SimpleGraph,
    source: &NodeId,
    terminal: &NodeId,
) -> Result<Vec<Vec<NodeId>>> {
    let paths = find_paths(graph, source, terminal)?;
    Ok(paths
        .into_iter()
        .map(|path| path.into_iter().map(|n| n.id.clone()).collect())
        .collect())
}

/// Bounded variant of [`find_paths`].
///
/// # Parameters
/// - `options.max_depth`: partial paths with this many nodes are not extended
/// - `options.max_paths`: finding more paths than this is an error
///
/// # Errors
///
/// Returns [`GraphError::NodeNotFound`] if either endpoint is missing, or
/// [`GraphError::PathLimitExceeded`] when `max_paths` is exceeded.
pub fn find_paths_with<'g>(
    graph: &'g SimpleGraph,
    source: &NodeId,
    terminal: &NodeId,
    options: &PathOptions,
) -> Result<Vec<Vec<&'g Node>>> {
    let start = graph.get_node(source)?;
    graph.get_node(terminal)?;
    debug!("Finding paths: {source} -> {terminal}");

    let mut found: Vec<Vec<&Node>> = Vec::new();
    let mut pending: Vec<Vec<&Node>> = vec![vec![start]];

    while let Some(path) = pending.pop() {
        let Some(last) = path.last().copied() else {
            continue;
        };

        if last.id == *terminal {
            if let Some(limit) = options.max_paths {
                if found.len() >= limit {
                    return Err(GraphError::PathLimitExceeded { limit });
                }
            }
            trace!("Found path of {} nodes", path.len());
            found.push(path);
            // every extension would revisit the terminal
            continue;
        }

        if let Some(max) = options.max_depth {
            if path.len() >= max {
                continue;
            }
        }

        for neighbor_id in &last.neighbors {
            if path.iter().any(|n| &n.id == neighbor_id) {
                continue;
            }
            let neighbor = graph.get_node(neighbor_id)?;
            let mut extended = Vec::with_capacity(path.len() + 1);
            extended.extend_from_slice(&path);
            extended.push(neighbor);
            pending.push(extended);
        }
    }

    debug!("Found {} paths: {source} -> {terminal}", found.len());
    Ok(found)
}
