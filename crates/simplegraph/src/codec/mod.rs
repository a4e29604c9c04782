//! Textual formats for moving graphs in and out of memory.
//!
//! Supports three formats, all as in-memory strings:
//! - **DOT**: Graphviz visualization (write-only)
//! - **JSON**: `{nodes, edges}` interchange (read/write)
//! - **Text**: legacy `#`-separated node/edge lines (read-only)

pub mod dot;
pub mod json;
pub mod text;

pub use dot::{to_dot_string, to_dot_string_with};
pub use json::{load_from_json, load_from_json_value, to_json_string, to_json_value};
pub use text::load_from_string;
