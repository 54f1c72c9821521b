//! JSON serialization of rendered trees.

use serde::Serialize;

use crate::error::{Error, Result};
use crate::model::RenderedNode;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Convert rendered units to JSON.
pub fn to_json(nodes: &[RenderedNode], format: JsonFormat) -> Result<String> {
    to_json_value(&nodes, format)
}

/// Serialize any value (a source tree, a render result) in the given format.
pub fn to_json_value<T: Serialize + ?Sized>(value: &T, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(value),
        JsonFormat::Compact => serde_json::to_string(value),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}
