//! Core graph types: node ids and nodes.

use super::property::{PropertyMap, PropertyValue};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Identifier of a node.
///
/// Auto-assigned ids are always `Int`. Caller-supplied ids may be either
/// variant; `Int(1)` and `Str("1")` can only coexist when built explicitly,
/// since text parsing maps canonical decimals to `Int`. Such a `Str` id has
/// no distinct text form, so the JSON writer refuses it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NodeId {
    /// Numeric id
    Int(u64),
    /// Free-form string id
    Str(String),
}

impl NodeId {
    /// Interpret a text token as an id.
    ///
    /// Canonical decimals (no sign, no leading zeros, fitting in a `u64`)
    /// become `Int`; anything else, `"007"` included, is kept verbatim as
    /// `Str`.
    pub fn parse(token: &str) -> Self {
        if token.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(n) = token.parse::<u64>() {
                if n.to_string() == token {
                    return NodeId::Int(n);
                }
            }
        }
        NodeId::Str(token.to_string())
    }

    /// Whether the id survives a trip through its text form unchanged.
    pub fn has_text_form(&self) -> bool {
        match self {
            NodeId::Int(_) => true,
            NodeId::Str(s) => !matches!(NodeId::parse(s), NodeId::Int(_)),
        }
    }

    /// Numeric value, if this is an integer id.
    pub fn as_int(&self) -> Option<u64> {
        match self {
            NodeId::Int(n) => Some(*n),
            NodeId::Str(_) => None,
        }
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeId::Int(n) => write!(f, "{n}"),
            NodeId::Str(s) => write!(f, "{s}"),
        }
    }
}

impl From<u64> for NodeId {
    fn from(value: u64) -> Self {
        NodeId::Int(value)
    }
}

impl From<&str> for NodeId {
    fn from(value: &str) -> Self {
        NodeId::Str(value.to_string())
    }
}

impl From<String> for NodeId {
    fn from(value: String) -> Self {
        NodeId::Str(value)
    }
}

impl Serialize for NodeId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            NodeId::Int(n) => serializer.serialize_u64(*n),
            NodeId::Str(s) => serializer.serialize_str(s),
        }
    }
}

struct NodeIdVisitor;

impl<'de> Visitor<'de> for NodeIdVisitor {
    type Value = NodeId;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a non-negative integer or a string node id")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<NodeId, E> {
        Ok(NodeId::Int(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<NodeId, E> {
        u64::try_from(v)
            .map(NodeId::Int)
            .map_err(|_| E::invalid_value(de::Unexpected::Signed(v), &self))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<NodeId, E> {
        Ok(NodeId::parse(v))
    }
}

impl<'de> Deserialize<'de> for NodeId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(NodeIdVisitor)
    }
}

/// A vertex of the graph.
///
/// Adjacency is stored as neighbor ids; the owning graph resolves them.
#[derive(Debug, Clone)]
pub struct Node {
    pub(crate) id: NodeId,
    pub(crate) data: PropertyMap,
    pub(crate) neighbors: Vec<NodeId>,
}

impl Node {
    pub(crate) fn new(id: NodeId, data: PropertyMap) -> Self {
        Self {
            id,
            data,
            neighbors: Vec::new(),
        }
    }

    /// The node's id.
    pub fn id(&self) -> &NodeId {
        &self.id
    }

    /// The caller-defined payload.
    pub fn data(&self) -> &PropertyMap {
        &self.data
    }

    /// Mutable access to the payload.
    pub fn data_mut(&mut self) -> &mut PropertyMap {
        &mut self.data
    }

    /// Adjacent node ids, in connection order. Duplicate edges appear twice.
    pub fn neighbors(&self) -> &[NodeId] {
        &self.neighbors
    }

    /// Add or update a property.
    pub fn set_property(&mut self, key: impl Into<String>, value: impl Into<PropertyValue>) {
        self.data.insert(key, value);
    }

    /// Get a property value.
    pub fn get_property(&self, key: &str) -> Option<&PropertyValue> {
        self.data.get(key)
    }

    pub(crate) fn add_neighbor(&mut self, id: NodeId) {
        self.neighbors.push(id);
    }

    pub(crate) fn remove_neighbor(&mut self, id: &NodeId) {
        self.neighbors.retain(|n| n != id);
    }
}
