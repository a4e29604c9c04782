//! Main SimpleGraph interface for graph operations.

use super::property::PropertyMap;
use super::types::{Node, NodeId};
use crate::config::{DotOptions, PathOptions};
use crate::error::{GraphError, Result};
use log::{debug, trace};
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// An in-memory, unweighted, undirected graph.
///
/// The graph exclusively owns its nodes. Adjacency is kept as id lists on
/// each node and is always symmetric: if `a` lists `b`, `b` lists `a`.
#[derive(Debug, Clone, Default)]
pub struct SimpleGraph {
    // id -> node lookup, always the same key set as `order`
    nodes: HashMap<NodeId, Node>,
    // insertion order of live nodes
    order: Vec<NodeId>,
    // last auto-assigned id, 0 when none has been handed out
    last_id: u64,
}

impl SimpleGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node to the graph.
    ///
    /// When `id` is `None` the smallest positive integer not currently used
    /// as an id is assigned.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::DuplicateId`] if a node with the same id exists.
    pub fn add_node(&mut self, id: Option<NodeId>, data: PropertyMap) -> Result<&Node> {
        let id = match id {
            Some(id) => id,
            None => self.next_id(),
        };
        debug!("Adding node: id={id}");

        match self.nodes.entry(id.clone()) {
            Entry::Occupied(_) => Err(GraphError::DuplicateId {
                node_id: id.to_string(),
            }),
            Entry::Vacant(slot) => {
                self.order.push(id.clone());
                Ok(&*slot.insert(Node::new(id, data)))
            }
        }
    }

    /// Add a node with an explicit id.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::DuplicateId`] if a node with the same id exists.
    pub fn add_node_with_id(
        &mut self,
        id: impl Into<NodeId>,
        data: PropertyMap,
    ) -> Result<&Node> {
        self.add_node(Some(id.into()), data)
    }

    /// Get a node by id.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if the node doesn't exist.
    pub fn get_node(&self, id: &NodeId) -> Result<&Node> {
        self.nodes.get(id).ok_or_else(|| GraphError::not_found(id))
    }

    /// Get a mutable reference to a node by id.
    ///
    /// Only the payload is mutable from outside the crate; adjacency changes
    /// go through [`connect_nodes`](Self::connect_nodes) and friends.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if the node doesn't exist.
    pub fn get_node_mut(&mut self, id: &NodeId) -> Result<&mut Node> {
        self.nodes.get_mut(id).ok_or_else(|| GraphError::not_found(id))
    }

    /// Delete a node and every edge touching it.
    ///
    /// The id is released: [`contains`](Self::contains) reports false
    /// afterwards and auto-assignment may hand the id out again.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if the node doesn't exist.
    pub fn delete_node(&mut self, id: &NodeId) -> Result<Node> {
        debug!("Deleting node: id={id}");
        let node = self
            .nodes
            .remove(id)
            .ok_or_else(|| GraphError::not_found(id))?;

        trace!("Detaching node {id} from {} adjacency entries", node.neighbors.len());
        for neighbor_id in &node.neighbors {
            if let Some(neighbor) = self.nodes.get_mut(neighbor_id) {
                neighbor.remove_neighbor(id);
            }
        }

        self.order.retain(|n| n != id);
        Ok(node)
    }

    /// Connect two nodes with an undirected edge.
    ///
    /// No duplicate or self-loop guard: connecting the same pair twice
    /// records the adjacency twice on both sides.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if either node doesn't exist.
    pub fn connect_nodes(&mut self, first: &NodeId, second: &NodeId) -> Result<()> {
        debug!("Connecting nodes: {first} -- {second}");
        self.get_node(first)?;
        self.get_node(second)?;

        self.get_node_mut(first)?.add_neighbor(second.clone());
        self.get_node_mut(second)?.add_neighbor(first.clone());
        Ok(())
    }

    /// Remove every edge between two nodes.
    ///
    /// Disconnecting nodes that are not adjacent is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if either node doesn't exist.
    pub fn disconnect_nodes(&mut self, first: &NodeId, second: &NodeId) -> Result<()> {
        debug!("Disconnecting nodes: {first} -- {second}");
        self.get_node(first)?;
        self.get_node(second)?;

        self.get_node_mut(first)?.remove_neighbor(second);
        self.get_node_mut(second)?.remove_neighbor(first);
        Ok(())
    }

    /// Check whether `first` lists `second` as a neighbor.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if either node doesn't exist.
    pub fn are_connected(&self, first: &NodeId, second: &NodeId) -> Result<bool> {
        let a = self.get_node(first)?;
        self.get_node(second)?;
        Ok(a.neighbors.contains(second))
    }

    /// Neighbor ids of a node.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if the node doesn't exist.
    pub fn neighbors(&self, id: &NodeId) -> Result<&[NodeId]> {
        Ok(self.get_node(id)?.neighbors())
    }

    /// Check if a node with this id exists.
    pub fn contains(&self, id: &NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Get the total number of nodes in the graph.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Get the number of undirected edges, counting duplicates.
    pub fn edge_count(&self) -> usize {
        self.nodes.values().map(|n| n.neighbors.len()).sum::<usize>() / 2
    }

    /// Snapshot of all node ids, in insertion order.
    pub fn node_ids(&self) -> Vec<NodeId> {
        self.order.clone()
    }

    /// `(id, data)` pairs for every node, in insertion order.
    pub fn nodes(&self) -> Vec<(&NodeId, &PropertyMap)> {
        self.iter().map(|n| (&n.id, &n.data)).collect()
    }

    /// Iterate over nodes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Node> + '_ {
        self.order.iter().filter_map(|id| self.nodes.get(id))
    }

    /// The last id handed out by auto-assignment (0 if none yet).
    pub fn last_id(&self) -> u64 {
        self.last_id
    }

    /// Remove all nodes and reset id assignment.
    pub fn clear(&mut self) {
        debug!("Clearing graph ({} nodes)", self.nodes.len());
        self.nodes = HashMap::new();
        self.order = Vec::new();
        self.last_id = 0;
    }

    // ===== Algorithm Methods =====

    /// Enumerate every simple path from `source` to `terminal`.
    ///
    /// See [`algorithms::find_paths`](super::algorithms::find_paths).
    pub fn find_paths(&self, source: &NodeId, terminal: &NodeId) -> Result<Vec<Vec<&Node>>> {
        super::algorithms::find_paths(self, source, terminal)
    }

    /// Like [`find_paths`](Self::find_paths) but returns only ids.
    pub fn find_path_ids(&self, source: &NodeId, terminal: &NodeId) -> Result<Vec<Vec<NodeId>>> {
        super::algorithms::find_path_ids(self, source, terminal)
    }

    /// Bounded path enumeration.
    pub fn find_paths_with(
        &self,
        source: &NodeId,
        terminal: &NodeId,
        options: &PathOptions,
    ) -> Result<Vec<Vec<&Node>>> {
        super::algorithms::find_paths_with(self, source, terminal, options)
    }

    // ===== Codec Methods =====

    /// Render the graph as a Graphviz `strict graph`, labelled by `name`.
    pub fn to_dot_string(&self) -> Result<String> {
        crate::codec::to_dot_string(self)
    }

    /// Render the graph as DOT with custom options.
    pub fn to_dot_string_with(&self, options: &DotOptions) -> Result<String> {
        crate::codec::to_dot_string_with(self, options)
    }

    /// Serialize to the `{nodes, edges}` interchange value.
    pub fn to_json_value(&self) -> Result<serde_json::Value> {
        crate::codec::to_json_value(self)
    }

    /// Serialize to pretty-printed `{nodes, edges}` JSON text.
    pub fn to_json_string(&self) -> Result<String> {
        crate::codec::to_json_string(self)
    }

    /// Load nodes and edges from `{nodes, edges}` JSON text.
    ///
    /// Returns the number of nodes inserted.
    pub fn load_from_json(&mut self, input: &str) -> Result<usize> {
        crate::codec::load_from_json(self, input)
    }

    /// Load nodes and edges from an already parsed JSON value.
    pub fn load_from_json_value(&mut self, value: serde_json::Value) -> Result<usize> {
        crate::codec::load_from_json_value(self, value)
    }

    /// Load nodes and edges from the line-based `#`-separated format.
    ///
    /// Returns the number of nodes inserted.
    pub fn load_from_string(&mut self, input: &str) -> Result<usize> {
        crate::codec::load_from_string(self, input)
    }

    // Private helper methods

    fn next_id(&mut self) -> NodeId {
        let mut candidate = 1;
        while self.nodes.contains_key(&NodeId::Int(candidate)) {
            candidate += 1;
        }
        self.last_id = candidate;
        NodeId::Int(candidate)
    }
}
