//! # simplegraph
//!
//! An in-memory, unweighted, undirected graph with all-paths search and
//! DOT/JSON codecs.
//!
//! ## Core Principles
//!
//! - **Symmetric Edges**: Every mutation keeps adjacency symmetric
//! - **Arena Ownership**: The graph owns its nodes; adjacency is stored as ids
//! - **Fail Fast**: Unknown ids and malformed input are errors, never no-ops
//! - **Strings In, Strings Out**: Callers own file I/O
//!
//! ## Architecture
//!
//! ```text
//! Codecs (DOT, JSON, line text)
//!     ↓
//! Algorithms (all simple paths)
//!     ↓
//! Core Graph (nodes, ids, adjacency)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use simplegraph::{NodeId, PropertyMap, SimpleGraph};
//!
//! # fn example() -> simplegraph::Result<()> {
//! let mut graph = SimpleGraph::new();
//! let a = graph.add_node(None, PropertyMap::new().with("name", "a"))?.id().clone();
//! let b = graph.add_node(None, PropertyMap::new().with("name", "b"))?.id().clone();
//! graph.connect_nodes(&a, &b)?;
//!
//! assert_eq!(graph.find_path_ids(&a, &b)?, vec![vec![NodeId::Int(1), NodeId::Int(2)]]);
//! assert_eq!(
//!     graph.to_dot_string()?,
//!     "strict graph {\n    \"a\" -- \"b\";\n    \"b\" -- \"a\";\n}"
//! );
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod codec;
pub mod config;
pub mod error;
pub mod graph;

// Re-export main types
pub use config::{DotOptions, PathOptions};
pub use error::{GraphError, Result};
pub use graph::{Node, NodeId, PropertyMap, PropertyValue, SimpleGraph};
