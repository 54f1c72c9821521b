//! Rendering module: document trees to presentational trees, HTML, JSON and
//! plain text.

mod html;
mod json;
mod options;
mod result;
mod text;
mod tree;
pub mod visitor;

pub use html::to_html;
pub use json::{to_json, to_json_value, JsonFormat};
pub use options::{RenderOptions, DEFAULT_MAX_DEPTH};
pub use result::{RenderResult, RenderStats};
pub use text::{extract_text, plain_summary};
pub use tree::{render, render_with_options, render_with_stats, NodeRenderer};
pub use visitor::{
    CompositeVisitor, DefaultVisitor, NodeVisitor, SkipTagsVisitor, UnknownAsTextVisitor,
    UnwrapTagsVisitor, VisitorAction,
};
