//! Structured `{nodes, edges}` interchange format.
//!
//! ```text
//! {
//!   "nodes": { "1": {"name": "a"}, "2": {"name": "b"} },
//!   "edges": [[1, 2], [2, 1]]
//! }
//! ```
//!
//! `edges` lists every adjacency-list entry, so each undirected edge is
//! written twice. Loading skips a pair whose endpoints are already
//! connected, which makes a save/load round trip reproduce each edge once.

use crate::error::{GraphError, Result};
use crate::graph::{NodeId, PropertyMap, SimpleGraph};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashSet;

#[derive(Debug, Serialize, Deserialize)]
struct GraphDocument {
    #[serde(with = "node_table")]
    nodes: Vec<(NodeId, PropertyMap)>,
    edges: Vec<(NodeId, NodeId)>,
}

// `nodes` is a JSON object; keep it as an ordered list of entries so
// insertion order survives serialization.
mod node_table {
    use crate::graph::{NodeId, PropertyMap};
    use serde::de::{MapAccess, Visitor};
    use serde::{Deserializer, Serializer};
    use std::fmt;

    pub fn serialize<S>(nodes: &[(NodeId, PropertyMap)], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_map(nodes.iter().map(|(id, data)| (id, data)))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<(NodeId, PropertyMap)>, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct TableVisitor;

        impl<'de> Visitor<'de> for TableVisitor {
            type Value = Vec<(NodeId, PropertyMap)>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object mapping node ids to data objects")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry::<NodeId, PropertyMap>()? {
                    entries.push(entry);
                }
                Ok(entries)
            }
        }

        deserializer.deserialize_map(TableVisitor)
    }
}

fn to_document(graph: &SimpleGraph) -> Result<GraphDocument> {
    // a string id spelled like a canonical integer would reload as `Int`,
    // colliding with (or silently becoming) the integer id
    if let Some(node) = graph.iter().find(|node| !node.id().has_text_form()) {
        return Err(GraphError::serialization(
            format!(
                "string id \"{}\" has the same JSON key as integer id {}",
                node.id(),
                node.id()
            ),
            None::<serde_json::Error>,
        ));
    }

    let nodes = graph
        .iter()
        .map(|node| (node.id().clone(), node.data().clone()))
        .collect();
    let edges = graph
        .iter()
        .flat_map(|node| {
            node.neighbors()
                .iter()
                .map(move |neighbor| (node.id().clone(), neighbor.clone()))
        })
        .collect();
    Ok(GraphDocument { nodes, edges })
}

/// Serialize graph to a `serde_json::Value`.
///
/// # Errors
///
/// Returns [`GraphError::Serialization`] if a string id is spelled like a
/// canonical integer (`"1"`), since it could not be told apart from the
/// integer id on reload.
pub fn to_json_value(graph: &SimpleGraph) -> Result<Value> {
    serde_json::to_value(to_document(graph)?)
        .map_err(|e| GraphError::serialization("Failed to serialize graph", Some(e)))
}

/// Serialize graph to pretty-printed JSON text.
///
/// # Errors
///
/// Same as [`to_json_value`].
pub fn to_json_string(graph: &SimpleGraph) -> Result<String> {
    serde_json::to_string_pretty(&to_document(graph)?)
        .map_err(|e| GraphError::serialization("Failed to serialize graph", Some(e)))
}

/// Load a `{nodes, edges}` document from JSON text into `graph`.
///
/// Node entries keep their ids exactly. Ids may be written as integers or
/// strings; canonical decimal strings (`"7"`, not `"007"`) are read as
/// integers. The document is fully
/// validated before the graph is touched.
///
/// # Returns
///
/// The number of nodes inserted.
///
/// # Errors
///
/// - [`GraphError::MalformedInput`] if the text is not a `{nodes, edges}` object
/// - [`GraphError::DuplicateId`] if a node id repeats or already exists
/// - [`GraphError::NodeNotFound`] if an edge names an unknown node
pub fn load_from_json(graph: &mut SimpleGraph, input: &str) -> Result<usize> {
    let document: GraphDocument = serde_json::from_str(input)
        .map_err(|e| GraphError::malformed(format!("invalid graph document: {e}"), Some(e)))?;
    apply_document(graph, document)
}

/// Load a `{nodes, edges}` document from an already parsed value.
///
/// `serde_json::Value` objects are key-sorted, so node insertion order
/// follows key order rather than the original text.
pub fn load_from_json_value(graph: &mut SimpleGraph, value: Value) -> Result<usize> {
    let document: GraphDocument = serde_json::from_value(value)
        .map_err(|e| GraphError::malformed(format!("invalid graph document: {e}"), Some(e)))?;
    apply_document(graph, document)
}

fn apply_document(graph: &mut SimpleGraph, document: GraphDocument) -> Result<usize> {
    debug!(
        "Loading document: {} nodes, {} edge entries",
        document.nodes.len(),
        document.edges.len()
    );

    {
        let mut incoming = HashSet::with_capacity(document.nodes.len());
        for (id, _) in &document.nodes {
            if graph.contains(id) || !incoming.insert(id) {
                return Err(GraphError::DuplicateId {
                    node_id: id.to_string(),
                });
            }
        }
        for (first, second) in &document.edges {
            for end in [first, second] {
                if !incoming.contains(&end) && !graph.contains(end) {
                    return Err(GraphError::not_found(end));
                }
            }
        }
    }

    let inserted = document.nodes.len();
    for (id, data) in document.nodes {
        graph.add_node(Some(id), data)?;
    }

    let mut connected = 0;
    for (first, second) in &document.edges {
        if !graph.are_connected(first, second)? {
            graph.connect_nodes(first, second)?;
            connected += 1;
        }
    }

    info!("Loaded {inserted} nodes and {connected} edges from JSON");
    Ok(inserted)
}
