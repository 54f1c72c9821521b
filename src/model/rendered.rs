//! Presentational output of the node renderer.

use serde::{Serialize, Serializer};

use super::HeadingLevel;

/// One unit of rendered output: raw text or an element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RenderedNode {
    /// Literal text
    Text(String),
    /// A presentational element with nested content
    Element(Element),
}

impl RenderedNode {
    /// Create a text unit.
    pub fn text(content: impl Into<String>) -> Self {
        RenderedNode::Text(content.into())
    }

    /// Borrow the element, if this is one.
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            RenderedNode::Element(e) => Some(e),
            RenderedNode::Text(_) => None,
        }
    }

    /// Borrow the text, if this is a text unit.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            RenderedNode::Text(s) => Some(s),
            RenderedNode::Element(_) => None,
        }
    }

    /// Concatenated text of this unit and everything below it.
    pub fn text_content(&self) -> String {
        match self {
            RenderedNode::Text(s) => s.clone(),
            RenderedNode::Element(e) => e.text_content(),
        }
    }
}

impl From<Element> for RenderedNode {
    fn from(element: Element) -> Self {
        RenderedNode::Element(element)
    }
}

/// Element kinds the renderer produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Paragraph,
    Heading(HeadingLevel),
    Strong,
    Emphasis,
    Anchor,
    OrderedList,
    UnorderedList,
    ListItem,
    Code,
    Pre,
    Blockquote,
    LineBreak,
    ThematicBreak,
}

impl Tag {
    /// HTML element name.
    pub fn name(self) -> &'static str {
        match self {
            Tag::Paragraph => "p",
            Tag::Heading(level) => match level.get() {
                1 => "h1",
                2 => "h2",
                3 => "h3",
                4 => "h4",
                5 => "h5",
                _ => "h6",
            },
            Tag::Strong => "strong",
            Tag::Emphasis => "em",
            Tag::Anchor => "a",
            Tag::OrderedList => "ol",
            Tag::UnorderedList => "ul",
            Tag::ListItem => "li",
            Tag::Code => "code",
            Tag::Pre => "pre",
            Tag::Blockquote => "blockquote",
            Tag::LineBreak => "br",
            Tag::ThematicBreak => "hr",
        }
    }

    /// Void elements take no content and no closing tag.
    pub fn is_void(self) -> bool {
        matches!(self, Tag::LineBreak | Tag::ThematicBreak)
    }

    /// Block-level elements start on their own line in HTML output.
    pub fn is_block(self) -> bool {
        matches!(
            self,
            Tag::Paragraph
                | Tag::Heading(_)
                | Tag::OrderedList
                | Tag::UnorderedList
                | Tag::ListItem
                | Tag::Pre
                | Tag::Blockquote
                | Tag::ThematicBreak
        )
    }
}

impl Serialize for Tag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// A presentational element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Element {
    /// Element kind
    pub tag: Tag,

    /// Attributes in insertion order
    #[serde(
        skip_serializing_if = "Vec::is_empty",
        serialize_with = "serialize_attributes"
    )]
    pub attributes: Vec<(String, String)>,

    /// Nested content
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<RenderedNode>,
}

impl Element {
    /// Create an empty element.
    pub fn new(tag: Tag) -> Self {
        Self {
            tag,
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Add an attribute.
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    /// Set the element's children.
    pub fn with_children(mut self, children: Vec<RenderedNode>) -> Self {
        self.children = children;
        self
    }

    /// Look up an attribute value.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Check whether this element opens its target in a new browsing context.
    pub fn opens_new_context(&self) -> bool {
        self.attr("target") == Some("_blank")
    }

    /// Concatenated text of all descendants.
    pub fn text_content(&self) -> String {
        self.children.iter().map(RenderedNode::text_content).collect()
    }
}

fn serialize_attributes<S: Serializer>(
    attributes: &[(String, String)],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_map(attributes.iter().map(|(k, v)| (k, v)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_names() {
        assert_eq!(Tag::Heading(HeadingLevel::new(3)).name(), "h3");
        assert_eq!(Tag::Heading(HeadingLevel::new(6)).name(), "h6");
        assert_eq!(Tag::UnorderedList.name(), "ul");
        assert!(Tag::LineBreak.is_void());
        assert!(!Tag::Strong.is_void());
        assert!(Tag::Pre.is_block());
        assert!(!Tag::Anchor.is_block());
    }

    #[test]
    fn test_element_attributes() {
        let a = Element::new(Tag::Anchor)
            .with_attr("href", "https://example.com")
            .with_attr("target", "_blank");
        assert_eq!(a.attr("href"), Some("https://example.com"));
        assert_eq!(a.attr("rel"), None);
        assert!(a.opens_new_context());
    }

    #[test]
    fn test_text_content() {
        let p = Element::new(Tag::Paragraph).with_children(vec![
            RenderedNode::text("Hello "),
            Element::new(Tag::Strong)
                .with_children(vec![RenderedNode::text("world")])
                .into(),
        ]);
        assert_eq!(p.text_content(), "Hello world");
    }

    #[test]
    fn test_serialize_shape() {
        let node: RenderedNode = Element::new(Tag::Anchor)
            .with_attr("href", "/about")
            .with_children(vec![RenderedNode::text("About")])
            .into();
        let json = serde_json::to_string(&node).unwrap();
        assert_eq!(
            json,
            r#"{"tag":"a","attributes":{"href":"/about"},"children":["About"]}"#
        );

        let hr: RenderedNode = Element::new(Tag::ThematicBreak).into();
        assert_eq!(serde_json::to_string(&hr).unwrap(), r#"{"tag":"hr"}"#);
    }
}
