//! Tunables for path search and DOT output.

use serde::{Deserialize, Serialize};

/// Bounds applied to all-paths enumeration.
///
/// The search is exponential on highly connected graphs; these let callers
/// cap it. The default is unbounded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathOptions {
    /// Maximum number of nodes in a path (None = unlimited).
    /// Partial paths that reach this length without hitting the terminal
    /// are not extended further.
    pub max_depth: Option<usize>,

    /// Maximum number of paths to collect (None = unlimited).
    /// Finding one more than this fails with `PathLimitExceeded`.
    pub max_paths: Option<usize>,
}

impl PathOptions {
    /// Unbounded search.
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Search bounded by both path length and number of paths.
    pub fn bounded(max_depth: usize, max_paths: usize) -> Self {
        Self {
            max_depth: Some(max_depth),
            max_paths: Some(max_paths),
        }
    }
}

/// Options for DOT export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DotOptions {
    /// Property used as the node label. Nodes lacking it fail the export.
    pub label_key: String,
    /// Optional graph name emitted after `strict graph`
    pub graph_name: Option<String>,
}

impl Default for DotOptions {
    fn default() -> Self {
        Self {
            label_key: "name".to_string(),
            graph_name: None,
        }
    }
}
