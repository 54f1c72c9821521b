//! Document tree nodes.
//!
//! The upstream parser hands over a generic `{type, attributes, children}`
//! tree. On the way in it is decoded into [`Node`], a closed sum type over the
//! node kinds the renderer understands. Missing or malformed attributes fall
//! back to defaults during decoding, and tags the renderer does not know are
//! kept verbatim in [`Node::Unknown`].

use std::io::Read;

use serde::{Deserialize, Serialize};

use super::{AttrValue, Attributes};
use crate::error::Result;

/// Heading level, always within `1..=6`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct HeadingLevel(u8);

impl HeadingLevel {
    /// Smallest (most prominent) heading level.
    pub const MIN: u8 = 1;
    /// Largest heading level.
    pub const MAX: u8 = 6;
    /// Level used when the attribute is absent or unusable.
    pub const DEFAULT: HeadingLevel = HeadingLevel(2);

    /// Create a heading level, clamping into `1..=6`.
    pub fn new(level: i64) -> Self {
        Self(level.clamp(Self::MIN as i64, Self::MAX as i64) as u8)
    }

    /// Decode a `level` attribute.
    ///
    /// Integral values are clamped; absent or non-integral values yield the
    /// default level 2.
    pub fn from_attr(value: Option<&AttrValue>) -> Self {
        value
            .and_then(AttrValue::as_integer)
            .map(Self::new)
            .unwrap_or(Self::DEFAULT)
    }

    /// The numeric level.
    pub fn get(self) -> u8 {
        self.0
    }

    /// Cap this level at `max` (itself clamped into `1..=6`).
    pub fn capped(self, max: u8) -> Self {
        Self(self.0.min(max.clamp(Self::MIN, Self::MAX)))
    }
}

impl Default for HeadingLevel {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// A node of a parsed document tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawNode", into = "RawNode")]
pub enum Node {
    /// Root sentinel; its children are the top-level blocks.
    Document { children: Vec<Node> },
    /// Paragraph of inline content.
    Paragraph { children: Vec<Node> },
    /// Section heading.
    Heading {
        level: HeadingLevel,
        children: Vec<Node>,
    },
    /// Literal text leaf.
    Text { content: String },
    /// Strong emphasis.
    Strong { children: Vec<Node> },
    /// Emphasis.
    Em { children: Vec<Node> },
    /// Hyperlink; children form the label.
    Link { href: String, children: Vec<Node> },
    /// Ordered or unordered list of items.
    List { ordered: bool, children: Vec<Node> },
    /// List item.
    Item { children: Vec<Node> },
    /// Inline code leaf.
    Code { content: String },
    /// Fenced code block leaf.
    Fence {
        content: String,
        language: Option<String>,
    },
    /// Block quotation.
    Blockquote { children: Vec<Node> },
    /// Hard line break.
    HardBreak,
    /// Thematic break.
    Hr,
    /// A node kind the renderer does not recognize.
    Unknown {
        tag: String,
        attributes: Attributes,
        children: Vec<Node>,
    },
}

impl Node {
    /// Create a document root.
    pub fn document(children: Vec<Node>) -> Self {
        Node::Document { children }
    }

    /// Create a paragraph.
    pub fn paragraph(children: Vec<Node>) -> Self {
        Node::Paragraph { children }
    }

    /// Create a heading, clamping the level into `1..=6`.
    pub fn heading(level: u8, children: Vec<Node>) -> Self {
        Node::Heading {
            level: HeadingLevel::new(level as i64),
            children,
        }
    }

    /// Create a text leaf.
    pub fn text(content: impl Into<String>) -> Self {
        Node::Text {
            content: content.into(),
        }
    }

    /// Create a strong-emphasis node.
    pub fn strong(children: Vec<Node>) -> Self {
        Node::Strong { children }
    }

    /// Create an emphasis node.
    pub fn em(children: Vec<Node>) -> Self {
        Node::Em { children }
    }

    /// Create a link.
    pub fn link(href: impl Into<String>, children: Vec<Node>) -> Self {
        Node::Link {
            href: href.into(),
            children,
        }
    }

    /// Create a list.
    pub fn list(ordered: bool, children: Vec<Node>) -> Self {
        Node::List { ordered, children }
    }

    /// Create a list item.
    pub fn item(children: Vec<Node>) -> Self {
        Node::Item { children }
    }

    /// Create an inline code leaf.
    pub fn code(content: impl Into<String>) -> Self {
        Node::Code {
            content: content.into(),
        }
    }

    /// Create a fenced code block without a language.
    pub fn fence(content: impl Into<String>) -> Self {
        Node::Fence {
            content: content.into(),
            language: None,
        }
    }

    /// Create a block quotation.
    pub fn blockquote(children: Vec<Node>) -> Self {
        Node::Blockquote { children }
    }

    /// Create a node of an unrecognized kind.
    pub fn unknown(tag: impl Into<String>, children: Vec<Node>) -> Self {
        Node::Unknown {
            tag: tag.into(),
            attributes: Attributes::new(),
            children,
        }
    }

    /// Decode a tree from a JSON string.
    ///
    /// Nesting depth is not limited at decode time; the renderer's depth guard
    /// decides how much of a deep tree is shown.
    pub fn from_json(json: &str) -> Result<Self> {
        Self::decode(serde_json::Deserializer::from_str(json))
    }

    /// Decode a tree from a JSON reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Self::decode(serde_json::Deserializer::from_reader(reader))
    }

    fn decode<'de, R>(mut de: serde_json::Deserializer<R>) -> Result<Self>
    where
        R: serde_json::de::Read<'de>,
    {
        de.disable_recursion_limit();
        let node = Node::deserialize(serde_stacker::Deserializer::new(&mut de))?;
        de.end()?;
        Ok(node)
    }

    /// The node's type tag as it appears in the source tree.
    pub fn tag(&self) -> &str {
        match self {
            Node::Document { .. } => "document",
            Node::Paragraph { .. } => "paragraph",
            Node::Heading { .. } => "heading",
            Node::Text { .. } => "text",
            Node::Strong { .. } => "strong",
            Node::Em { .. } => "em",
            Node::Link { .. } => "link",
            Node::List { .. } => "list",
            Node::Item { .. } => "item",
            Node::Code { .. } => "code",
            Node::Fence { .. } => "fence",
            Node::Blockquote { .. } => "blockquote",
            Node::HardBreak => "hardbreak",
            Node::Hr => "hr",
            Node::Unknown { tag, .. } => tag,
        }
    }

    /// Child nodes; empty for leaves.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Document { children }
            | Node::Paragraph { children }
            | Node::Heading { children, .. }
            | Node::Strong { children }
            | Node::Em { children }
            | Node::Link { children, .. }
            | Node::List { children, .. }
            | Node::Item { children }
            | Node::Blockquote { children }
            | Node::Unknown { children, .. } => children,
            Node::Text { .. }
            | Node::Code { .. }
            | Node::Fence { .. }
            | Node::HardBreak
            | Node::Hr => &[],
        }
    }

    /// Check whether this node kind is recognized by the renderer.
    pub fn is_known(&self) -> bool {
        !matches!(self, Node::Unknown { .. })
    }

    /// Total number of nodes in this subtree, including this one.
    pub fn node_count(&self) -> usize {
        1 + self.children().iter().map(Node::node_count).sum::<usize>()
    }
}

/// Wire shape of a node as produced by the upstream parser.
#[derive(Serialize, Deserialize)]
struct RawNode {
    #[serde(rename = "type")]
    tag: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    attributes: Option<Attributes>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    children: Option<Vec<Node>>,
}

fn text_attr(attributes: &Attributes, key: &str) -> Option<String> {
    attributes.get(key).and_then(AttrValue::as_text)
}

impl From<RawNode> for Node {
    fn from(raw: RawNode) -> Self {
        let attributes = raw.attributes.unwrap_or_default();
        let children = raw.children.unwrap_or_default();

        match raw.tag.as_str() {
            "document" => Node::Document { children },
            "paragraph" => Node::Paragraph { children },
            "heading" => Node::Heading {
                level: HeadingLevel::from_attr(attributes.get("level")),
                children,
            },
            "text" => Node::Text {
                content: text_attr(&attributes, "content").unwrap_or_default(),
            },
            "strong" => Node::Strong { children },
            "em" => Node::Em { children },
            "link" => Node::Link {
                href: text_attr(&attributes, "href").unwrap_or_else(|| "#".to_string()),
                children,
            },
            "list" => Node::List {
                ordered: attributes
                    .get("ordered")
                    .is_some_and(AttrValue::is_truthy),
                children,
            },
            "item" => Node::Item { children },
            "code" => Node::Code {
                content: text_attr(&attributes, "content").unwrap_or_default(),
            },
            "fence" => Node::Fence {
                content: text_attr(&attributes, "content").unwrap_or_default(),
                language: text_attr(&attributes, "language").filter(|l| !l.is_empty()),
            },
            "blockquote" => Node::Blockquote { children },
            "hardbreak" => Node::HardBreak,
            "hr" => Node::Hr,
            _ => Node::Unknown {
                tag: raw.tag,
                attributes,
                children,
            },
        }
    }
}

impl From<Node> for RawNode {
    fn from(node: Node) -> Self {
        let tag = node.tag().to_string();
        let mut attributes = Attributes::new();
        let children = match node {
            Node::Heading { level, children } => {
                attributes.insert("level".into(), AttrValue::from(level.get() as i64));
                children
            }
            Node::Text { content } | Node::Code { content } => {
                attributes.insert("content".into(), AttrValue::String(content));
                Vec::new()
            }
            Node::Fence { content, language } => {
                attributes.insert("content".into(), AttrValue::String(content));
                if let Some(language) = language {
                    attributes.insert("language".into(), AttrValue::String(language));
                }
                Vec::new()
            }
            Node::Link { href, children } => {
                attributes.insert("href".into(), AttrValue::String(href));
                children
            }
            Node::List { ordered, children } => {
                attributes.insert("ordered".into(), AttrValue::Bool(ordered));
                children
            }
            Node::Unknown {
                attributes: raw_attributes,
                children,
                ..
            } => {
                attributes = raw_attributes;
                children
            }
            Node::Document { children }
            | Node::Paragraph { children }
            | Node::Strong { children }
            | Node::Em { children }
            | Node::Item { children }
            | Node::Blockquote { children } => children,
            Node::HardBreak | Node::Hr => Vec::new(),
        };

        RawNode {
            tag,
            attributes: (!attributes.is_empty()).then_some(attributes),
            children: (!children.is_empty()).then_some(children),
        }
    }
}
