//! Visitor pattern for customizing document rendering.
//!
//! Visitors are consulted before each node is rendered and whenever the
//! renderer meets a node type it does not recognize. By default unknown
//! nodes produce no output; a visitor can replace them, unwrap them, or
//! drop known nodes as well.
//!
//! # Example
//!
//! ```
//! use folio::model::{Attributes, Node, RenderedNode};
//! use folio::render::visitor::{NodeVisitor, VisitorAction};
//!
//! struct FootnoteMarker;
//!
//! impl NodeVisitor for FootnoteMarker {
//!     fn visit_unknown(
//!         &mut self,
//!         tag: &str,
//!         _attributes: &Attributes,
//!         _children: &[Node],
//!     ) -> VisitorAction {
//!         if tag == "footnote" {
//!             VisitorAction::Replace(vec![RenderedNode::text("*")])
//!         } else {
//!             VisitorAction::Continue
//!         }
//!     }
//! }
//! ```

use crate::model::{Attributes, Node, RenderedNode};

use super::text::extract_text;

/// Action returned by visitor methods to control rendering behavior.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum VisitorAction {
    /// Continue with default rendering.
    #[default]
    Continue,

    /// Replace the node with custom output.
    Replace(Vec<RenderedNode>),

    /// Render the node's children in place, without a wrapper.
    Unwrap,

    /// Skip this node and its subtree (produce no output).
    Skip,
}

impl VisitorAction {
    /// Check if this action indicates the node should be skipped.
    pub fn should_skip(&self) -> bool {
        matches!(self, VisitorAction::Skip)
    }

    /// Check if this action provides replacement content.
    pub fn is_replace(&self) -> bool {
        matches!(self, VisitorAction::Replace(_))
    }

    /// Get replacement content if available.
    pub fn replacement(&self) -> Option<&[RenderedNode]> {
        match self {
            VisitorAction::Replace(nodes) => Some(nodes),
            _ => None,
        }
    }
}

/// Trait for visiting document nodes during rendering.
///
/// All methods return `VisitorAction::Continue` by default.
pub trait NodeVisitor: Send + Sync {
    /// Called before rendering any node, known or not.
    fn visit_node(&mut self, node: &Node) -> VisitorAction {
        let _ = node;
        VisitorAction::Continue
    }

    /// Called for a node whose type the renderer does not recognize.
    ///
    /// `Continue` and `Skip` both omit the node; the other actions let a
    /// visitor give unknown types a rendering.
    fn visit_unknown(
        &mut self,
        tag: &str,
        attributes: &Attributes,
        children: &[Node],
    ) -> VisitorAction {
        let _ = (tag, attributes, children);
        VisitorAction::Continue
    }
}

/// Default visitor that performs no customization.
#[derive(Debug, Clone, Default)]
pub struct DefaultVisitor;

impl DefaultVisitor {
    /// Create a new default visitor.
    pub fn new() -> Self {
        Self
    }
}

impl NodeVisitor for DefaultVisitor {}

/// Visitor that drops every node whose tag is in a list.
#[derive(Debug, Clone, Default)]
pub struct SkipTagsVisitor {
    tags: Vec<String>,
}

impl SkipTagsVisitor {
    /// Create a visitor that skips the given tags.
    pub fn new<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }
}

impl NodeVisitor for SkipTagsVisitor {
    fn visit_node(&mut self, node: &Node) -> VisitorAction {
        if self.tags.iter().any(|t| t == node.tag()) {
            VisitorAction::Skip
        } else {
            VisitorAction::Continue
        }
    }
}

/// Visitor that renders the children of listed tags without a wrapper.
///
/// Useful for container kinds such as Markdoc's `inline` that carry no
/// presentation of their own.
#[derive(Debug, Clone, Default)]
pub struct UnwrapTagsVisitor {
    tags: Vec<String>,
}

impl UnwrapTagsVisitor {
    /// Create a visitor that unwraps the given tags.
    pub fn new<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }
}

impl NodeVisitor for UnwrapTagsVisitor {
    fn visit_node(&mut self, node: &Node) -> VisitorAction {
        if self.tags.iter().any(|t| t == node.tag()) {
            VisitorAction::Unwrap
        } else {
            VisitorAction::Continue
        }
    }
}

/// Visitor that renders unknown nodes as their plain text.
#[derive(Debug, Clone, Default)]
pub struct UnknownAsTextVisitor;

impl NodeVisitor for UnknownAsTextVisitor {
    fn visit_unknown(
        &mut self,
        _tag: &str,
        _attributes: &Attributes,
        children: &[Node],
    ) -> VisitorAction {
        let text = children
            .iter()
            .map(extract_text)
            .collect::<Vec<_>>()
            .join(" ");

        if text.trim().is_empty() {
            VisitorAction::Skip
        } else {
            VisitorAction::Replace(vec![RenderedNode::Text(text)])
        }
    }
}

/// Composite visitor that chains multiple visitors.
///
/// Visitors are called in order. The first visitor that returns
/// a non-Continue action determines the result.
pub struct CompositeVisitor {
    visitors: Vec<Box<dyn NodeVisitor>>,
}

impl CompositeVisitor {
    /// Create a new composite visitor.
    pub fn new() -> Self {
        Self {
            visitors: Vec::new(),
        }
    }

    /// Add a visitor to the chain.
    pub fn with_visitor<V: NodeVisitor + 'static>(mut self, visitor: V) -> Self {
        self.visitors.push(Box::new(visitor));
        self
    }
}

impl Default for CompositeVisitor {
    fn default() -> Self {
        Self::new()
    }
}

impl NodeVisitor for CompositeVisitor {
    fn visit_node(&mut self, node: &Node) -> VisitorAction {
        for visitor in &mut self.visitors {
            let action = visitor.visit_node(node);
            if !matches!(action, VisitorAction::Continue) {
                return action;
            }
        }
        VisitorAction::Continue
    }

    fn visit_unknown(
        &mut self,
        tag: &str,
        attributes: &Attributes,
        children: &[Node],
    ) -> VisitorAction {
        for visitor in &mut self.visitors {
            let action = visitor.visit_unknown(tag, attributes, children);
            if !matches!(action, VisitorAction::Continue) {
                return action;
            }
        }
        VisitorAction::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visitor_action_default() {
        let action = VisitorAction::default();
        assert!(matches!(action, VisitorAction::Continue));
    }

    #[test]
    fn test_visitor_action_replacement() {
        assert!(VisitorAction::Continue.replacement().is_none());
        assert!(VisitorAction::Skip.replacement().is_none());
        assert!(VisitorAction::Unwrap.replacement().is_none());

        let action = VisitorAction::Replace(vec![RenderedNode::text("hello")]);
        assert!(action.is_replace());
        assert_eq!(action.replacement().unwrap()[0].as_text(), Some("hello"));
    }

    #[test]
    fn test_skip_tags_visitor() {
        let mut visitor = SkipTagsVisitor::new(["fence", "hr"]);
        assert!(visitor.visit_node(&Node::fence("x")).should_skip());
        assert!(visitor.visit_node(&Node::Hr).should_skip());
        assert_eq!(
            visitor.visit_node(&Node::text("x")),
            VisitorAction::Continue
        );
    }

    #[test]
    fn test_unwrap_tags_visitor() {
        let mut visitor = UnwrapTagsVisitor::new(["inline"]);
        let inline = Node::unknown("inline", vec![Node::text("x")]);
        assert_eq!(visitor.visit_node(&inline), VisitorAction::Unwrap);
        assert_eq!(
            visitor.visit_node(&Node::paragraph(vec![])),
            VisitorAction::Continue
        );
    }

    #[test]
    fn test_unknown_as_text_visitor() {
        let mut visitor = UnknownAsTextVisitor;
        let children = vec![Node::text("see"), Node::em(vec![Node::text("note")])];
        let action = visitor.visit_unknown("footnote", &Attributes::new(), &children);
        assert_eq!(action.replacement().unwrap()[0].as_text(), Some("see note"));

        let action = visitor.visit_unknown("footnote", &Attributes::new(), &[]);
        assert!(action.should_skip());
    }

    #[test]
    fn test_composite_visitor() {
        let mut composite = CompositeVisitor::new()
            .with_visitor(SkipTagsVisitor::new(["hr"]))
            .with_visitor(UnknownAsTextVisitor)
            .with_visitor(DefaultVisitor::new());

        assert!(composite.visit_node(&Node::Hr).should_skip());
        assert_eq!(
            composite.visit_node(&Node::text("a")),
            VisitorAction::Continue
        );

        let children = vec![Node::text("aside")];
        let action = composite.visit_unknown("callout", &Attributes::new(), &children);
        assert!(action.is_replace());
    }
}
