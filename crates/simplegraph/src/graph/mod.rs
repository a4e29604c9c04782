//! Core graph types and operations.
//!
//! This module defines the fundamental building blocks:
//! - [`NodeId`]: Integer or string node identity
//! - [`Node`]: A vertex with a payload and an adjacency list
//! - [`SimpleGraph`]: The owning container and its operations

mod types;
mod property;
mod simplegraph;
pub mod algorithms;

pub use types::{Node, NodeId};
pub use property::{PropertyMap, PropertyValue};
pub use simplegraph::SimpleGraph;
