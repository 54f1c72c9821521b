//! # folio
//!
//! Structured-document rendering for a personal portfolio site.
//!
//! Blog posts arrive as a parsed document tree (the `{type, attributes,
//! children}` shape produced by a Markdoc-style parser). This library turns
//! that tree into a presentational tree of HTML elements, plain text and
//! reading-time estimates, and provides the site's contact-form validation
//! and RSS feed generation.
//!
//! ## Quick Start
//!
//! ```
//! use folio::{load_str, render};
//!
//! fn main() -> folio::Result<()> {
//!     let root = load_str(
//!         r#"{"type": "document", "children": [
//!             {"type": "heading", "attributes": {"level": 1},
//!              "children": [{"type": "text", "attributes": {"content": "Hello"}}]}
//!         ]}"#,
//!     )?;
//!
//!     let html = render::to_html(&render::render(&root));
//!     assert_eq!(html, "<h1>Hello</h1>");
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Closed node model**: known node kinds are variants, anything else is
//!   kept as `Unknown` and omitted unless a visitor handles it
//! - **Output formats**: rendered trees, HTML, JSON and plain text
//! - **Visitors**: skip, unwrap or replace nodes during rendering
//! - **Contact form**: validation with honeypot suppression and a mailer seam
//! - **Feed**: RSS 2.0 generation from post front-matter

pub mod contact;
pub mod error;
pub mod feed;
pub mod model;
pub mod read_time;
pub mod render;

// Re-export commonly used types
pub use contact::{ContactConfig, ContactError, ContactForm, ContactHandler, Submission};
pub use error::{Error, Result};
pub use feed::{build_rss, FeedConfig};
pub use model::{AttrValue, Attributes, Element, HeadingLevel, Node, PostEntry, RenderedNode, Tag};
pub use read_time::{read_time, ReadTime};
pub use render::{
    extract_text, JsonFormat, NodeVisitor, RenderOptions, RenderResult, RenderStats,
    VisitorAction,
};

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use render::{CompositeVisitor, NodeRenderer, SkipTagsVisitor, UnwrapTagsVisitor};

/// Load a document tree from a JSON file.
///
/// # Example
///
/// ```no_run
/// use folio::load_file;
///
/// let root = load_file("post.json").unwrap();
/// println!("Nodes: {}", root.node_count());
/// ```
pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Node> {
    let file = File::open(path)?;
    Node::from_reader(BufReader::new(file))
}

/// Load a document tree from a JSON string.
pub fn load_str(json: &str) -> Result<Node> {
    Node::from_json(json)
}

/// Load a document tree from a reader.
pub fn load_reader<R: Read>(reader: R) -> Result<Node> {
    Node::from_reader(reader)
}

/// Render a JSON document file to HTML.
///
/// # Example
///
/// ```no_run
/// use folio::to_html;
///
/// let html = to_html("post.json").unwrap();
/// std::fs::write("post.html", html).unwrap();
/// ```
pub fn to_html<P: AsRef<Path>>(path: P) -> Result<String> {
    let root = load_file(path)?;
    Ok(render::to_html(&render::render(&root)))
}

/// Render a JSON document file to a JSON presentational tree.
pub fn to_json<P: AsRef<Path>>(path: P, format: JsonFormat) -> Result<String> {
    let root = load_file(path)?;
    render::to_json(&render::render(&root), format)
}

/// Extract the plain text of a JSON document file.
pub fn to_text<P: AsRef<Path>>(path: P) -> Result<String> {
    let root = load_file(path)?;
    Ok(extract_text(&root))
}

/// Estimate the reading time of a JSON document file.
pub fn file_read_time<P: AsRef<Path>>(path: P) -> Result<ReadTime> {
    let root = load_file(path)?;
    Ok(ReadTime::of_document(&root))
}

/// Builder for rendering with options and visitors.
///
/// # Example
///
/// ```
/// use folio::{Folio, Node};
///
/// let root = Node::document(vec![
///     Node::unknown("inline", vec![Node::text("kept")]),
///     Node::unknown("aside", vec![Node::text("dropped")]),
/// ]);
///
/// let result = Folio::new()
///     .unwrap_tags(["inline"])
///     .with_max_depth(64)
///     .render(&root);
/// assert_eq!(result.to_html(), "kept");
/// ```
pub struct Folio {
    options: RenderOptions,
    visitor: CompositeVisitor,
}

impl Folio {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self {
            options: RenderOptions::default(),
            visitor: CompositeVisitor::new(),
        }
    }

    /// Replace the render options.
    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    /// Set the maximum nesting depth.
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.options = self.options.with_max_depth(depth);
        self
    }

    /// Cap heading levels.
    pub fn with_max_heading(mut self, level: u8) -> Self {
        self.options = self.options.with_max_heading(level);
        self
    }

    /// Drop every node with one of these tags.
    pub fn skip_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.visitor = self.visitor.with_visitor(SkipTagsVisitor::new(tags));
        self
    }

    /// Render the children of these tags without a wrapper.
    pub fn unwrap_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.visitor = self.visitor.with_visitor(UnwrapTagsVisitor::new(tags));
        self
    }

    /// Add a custom visitor. Visitors are consulted in the order added.
    pub fn with_visitor<V: NodeVisitor + 'static>(mut self, visitor: V) -> Self {
        self.visitor = self.visitor.with_visitor(visitor);
        self
    }

    /// Render a document tree, collecting statistics.
    pub fn render(self, root: &Node) -> RenderResult {
        NodeRenderer::new(self.options.with_stats(true))
            .with_visitor(self.visitor)
            .render_with_stats(root)
    }

    /// Load and render a JSON document file.
    pub fn render_file<P: AsRef<Path>>(self, path: P) -> Result<RenderResult> {
        let root = load_file(path)?;
        Ok(self.render(&root))
    }
}

impl Default for Folio {
    fn default() -> Self {
        Self::new()
    }
}
