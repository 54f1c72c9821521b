//! Document tree to presentational tree rendering.

use crate::model::{Element, Node, RenderedNode, Tag};

use super::text::extract_text;
use super::visitor::{DefaultVisitor, NodeVisitor, VisitorAction};
use super::{RenderOptions, RenderResult, RenderStats};

/// Render a document tree with default options.
///
/// The root `document` node contributes no wrapper; only its children appear
/// in the output. Unknown node types produce nothing.
pub fn render(root: &Node) -> Vec<RenderedNode> {
    NodeRenderer::new(RenderOptions::default()).render(root)
}

/// Render a document tree with custom options.
pub fn render_with_options(root: &Node, options: &RenderOptions) -> Vec<RenderedNode> {
    NodeRenderer::new(options.clone()).render(root)
}

/// Render a document tree and collect statistics.
pub fn render_with_stats(root: &Node, options: &RenderOptions) -> RenderResult {
    let mut options = options.clone();
    options.collect_stats = true;
    NodeRenderer::new(options).render_with_stats(root)
}

/// Recursive renderer over [`Node`] trees.
pub struct NodeRenderer {
    options: RenderOptions,
    visitor: Box<dyn NodeVisitor>,
    stats: RenderStats,
    depth_warned: bool,
}

impl NodeRenderer {
    /// Create a new renderer.
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            visitor: Box::new(DefaultVisitor),
            stats: RenderStats::new(),
            depth_warned: false,
        }
    }

    /// Use a visitor to customize rendering.
    pub fn with_visitor<V: NodeVisitor + 'static>(mut self, visitor: V) -> Self {
        self.visitor = Box::new(visitor);
        self
    }

    /// Render a tree.
    pub fn render(mut self, root: &Node) -> Vec<RenderedNode> {
        let mut output = Vec::new();
        self.render_node(&mut output, root, 0);
        output
    }

    /// Render a tree and return statistics alongside the output.
    pub fn render_with_stats(mut self, root: &Node) -> RenderResult {
        self.options.collect_stats = true;
        let mut output = Vec::new();
        self.render_node(&mut output, root, 0);

        self.stats.count_text(&extract_text(root));

        RenderResult::new(output, self.stats)
    }

    fn render_node(&mut self, output: &mut Vec<RenderedNode>, node: &Node, depth: usize) {
        if let Some(max_depth) = self.options.max_depth {
            if depth > max_depth {
                if !self.depth_warned {
                    log::warn!(
                        "Document nesting exceeds {} levels; omitting deeper content",
                        max_depth
                    );
                    self.depth_warned = true;
                }
                if self.options.collect_stats {
                    self.stats.truncated_count += 1;
                }
                return;
            }
        }

        match self.visitor.visit_node(node) {
            VisitorAction::Continue => {}
            VisitorAction::Skip => return,
            VisitorAction::Replace(nodes) => {
                output.extend(nodes);
                return;
            }
            VisitorAction::Unwrap => {
                self.render_children_into(output, node.children(), depth);
                return;
            }
        }

        match node {
            Node::Document { children } => self.render_children_into(output, children, depth),
            Node::Paragraph { children } => {
                if self.options.collect_stats {
                    self.stats.paragraph_count += 1;
                }
                output.push(self.wrap(Tag::Paragraph, children, depth));
            }
            Node::Heading { level, children } => {
                if self.options.collect_stats {
                    self.stats.heading_count += 1;
                }
                let level = level.capped(self.options.max_heading_level);
                output.push(self.wrap(Tag::Heading(level), children, depth));
            }
            Node::Text { content } => output.push(RenderedNode::Text(content.clone())),
            Node::Strong { children } => output.push(self.wrap(Tag::Strong, children, depth)),
            Node::Em { children } => output.push(self.wrap(Tag::Emphasis, children, depth)),
            Node::Link { href, children } => {
                let external = self.options.is_external(href);
                if self.options.collect_stats {
                    self.stats.link_count += 1;
                    if external {
                        self.stats.external_link_count += 1;
                    }
                }

                let mut anchor = Element::new(Tag::Anchor).with_attr("href", href.as_str());
                if external {
                    anchor = anchor
                        .with_attr("target", "_blank")
                        .with_attr("rel", "noopener noreferrer");
                }
                anchor.children = self.render_children(children, depth);
                output.push(anchor.into());
            }
            Node::List { ordered, children } => {
                if self.options.collect_stats {
                    self.stats.list_count += 1;
                }
                let tag = if *ordered {
                    Tag::OrderedList
                } else {
                    Tag::UnorderedList
                };
                output.push(self.wrap(tag, children, depth));
            }
            Node::Item { children } => {
                if self.options.collect_stats {
                    self.stats.list_item_count += 1;
                }
                output.push(self.wrap(Tag::ListItem, children, depth));
            }
            Node::Code { content } => output.push(code_element(content).into()),
            Node::Fence { content, language } => {
                if self.options.collect_stats {
                    self.stats.code_block_count += 1;
                }
                let mut code = code_element(content);
                if let Some(language) = language {
                    code = code.with_attr("data-language", language.as_str());
                }
                let pre = Element::new(Tag::Pre).with_children(vec![code.into()]);
                output.push(pre.into());
            }
            Node::Blockquote { children } => {
                output.push(self.wrap(Tag::Blockquote, children, depth))
            }
            Node::HardBreak => output.push(Element::new(Tag::LineBreak).into()),
            Node::Hr => output.push(Element::new(Tag::ThematicBreak).into()),
            Node::Unknown {
                tag,
                attributes,
                children,
            } => match self.visitor.visit_unknown(tag, attributes, children) {
                VisitorAction::Replace(nodes) => output.extend(nodes),
                VisitorAction::Unwrap => self.render_children_into(output, children, depth),
                VisitorAction::Continue | VisitorAction::Skip => {
                    log::debug!("Skipping unrecognized node type `{}`", tag);
                    if self.options.collect_stats {
                        self.stats.skipped_count += 1;
                    }
                }
            },
        }
    }

    fn wrap(&mut self, tag: Tag, children: &[Node], depth: usize) -> RenderedNode {
        Element::new(tag)
            .with_children(self.render_children(children, depth))
            .into()
    }

    fn render_children(&mut self, children: &[Node], depth: usize) -> Vec<RenderedNode> {
        let mut rendered = Vec::with_capacity(children.len());
        self.render_children_into(&mut rendered, children, depth);
        rendered
    }

    fn render_children_into(
        &mut self,
        output: &mut Vec<RenderedNode>,
        children: &[Node],
        depth: usize,
    ) {
        for child in children {
            self.render_node(output, child, depth + 1);
        }
    }
}

fn code_element(content: &str) -> Element {
    Element::new(Tag::Code).with_children(vec![RenderedNode::text(content)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::visitor::{SkipTagsVisitor, UnwrapTagsVisitor};

    fn element(node: &RenderedNode) -> &Element {
        node.as_element().expect("expected an element")
    }

    #[test]
    fn test_paragraph_with_text() {
        let doc = Node::document(vec![Node::paragraph(vec![Node::text("hi")])]);
        let out = render(&doc);

        assert_eq!(out.len(), 1);
        let p = element(&out[0]);
        assert_eq!(p.tag, Tag::Paragraph);
        assert_eq!(p.children, vec![RenderedNode::text("hi")]);
    }

    #[test]
    fn test_document_without_children() {
        assert!(render(&Node::document(vec![])).is_empty());
    }

    #[test]
    fn test_heading_levels() {
        let doc = Node::document(vec![
            Node::heading(3, vec![Node::text("three")]),
            Node::Heading {
                level: Default::default(),
                children: vec![],
            },
        ]);
        let out = render(&doc);
        assert_eq!(element(&out[0]).tag.name(), "h3");
        assert_eq!(element(&out[1]).tag.name(), "h2");
    }

    #[test]
    fn test_heading_capped_by_options() {
        let doc = Node::document(vec![Node::heading(5, vec![Node::text("deep")])]);
        let options = RenderOptions::new().with_max_heading(3);
        let out = render_with_options(&doc, &options);
        assert_eq!(element(&out[0]).tag.name(), "h3");
    }

    #[test]
    fn test_external_and_internal_links() {
        let doc = Node::document(vec![Node::paragraph(vec![
            Node::link("https://example.com", vec![Node::text("ext")]),
            Node::link("/about", vec![Node::text("int")]),
        ])]);
        let out = render(&doc);
        let p = element(&out[0]);

        let external = element(&p.children[0]);
        assert_eq!(external.attr("href"), Some("https://example.com"));
        assert_eq!(external.attr("target"), Some("_blank"));
        assert_eq!(external.attr("rel"), Some("noopener noreferrer"));

        let internal = element(&p.children[1]);
        assert_eq!(internal.attr("href"), Some("/about"));
        assert_eq!(internal.attr("target"), None);
        assert_eq!(internal.attr("rel"), None);
        assert_eq!(internal.text_content(), "int");
    }

    #[test]
    fn test_lists() {
        let doc = Node::document(vec![
            Node::list(true, vec![Node::item(vec![Node::text("1")])]),
            Node::list(false, vec![Node::item(vec![Node::text("a")])]),
        ]);
        let out = render(&doc);
        assert_eq!(element(&out[0]).tag, Tag::OrderedList);
        assert_eq!(element(&out[1]).tag, Tag::UnorderedList);
        assert_eq!(element(&element(&out[0]).children[0]).tag, Tag::ListItem);
    }

    #[test]
    fn test_code_and_fence() {
        let doc = Node::document(vec![
            Node::paragraph(vec![Node::code("x + 1")]),
            Node::Fence {
                content: "fn main() {}\n".into(),
                language: Some("rust".into()),
            },
        ]);
        let out = render(&doc);

        let code = element(&element(&out[0]).children[0]);
        assert_eq!(code.tag, Tag::Code);
        assert_eq!(code.text_content(), "x + 1");

        let pre = element(&out[1]);
        assert_eq!(pre.tag, Tag::Pre);
        let inner = element(&pre.children[0]);
        assert_eq!(inner.tag, Tag::Code);
        assert_eq!(inner.attr("data-language"), Some("rust"));
        assert_eq!(inner.text_content(), "fn main() {}\n");
    }

    #[test]
    fn test_breaks_have_no_content() {
        let doc = Node::document(vec![
            Node::paragraph(vec![Node::text("a"), Node::HardBreak, Node::text("b")]),
            Node::Hr,
        ]);
        let out = render(&doc);
        let br = element(&element(&out[0]).children[1]);
        assert_eq!(br.tag, Tag::LineBreak);
        assert!(br.children.is_empty());
        assert_eq!(element(&out[1]).tag, Tag::ThematicBreak);
    }

    #[test]
    fn test_unknown_node_is_omitted_with_subtree() {
        let doc = Node::document(vec![
            Node::paragraph(vec![Node::text("before")]),
            Node::unknown("footnote", vec![Node::paragraph(vec![Node::text("x")])]),
            Node::paragraph(vec![
                Node::text("a"),
                Node::unknown("sup", vec![Node::text("1")]),
                Node::text("b"),
            ]),
        ]);
        let out = render(&doc);

        assert_eq!(out.len(), 2);
        assert_eq!(out[0].text_content(), "before");
        assert_eq!(
            element(&out[1]).children,
            vec![RenderedNode::text("a"), RenderedNode::text("b")]
        );
    }

    #[test]
    fn test_nested_inline_order_preserved() {
        let doc = Node::document(vec![Node::paragraph(vec![
            Node::text("x "),
            Node::strong(vec![Node::em(vec![Node::text("y")]), Node::text(" z")]),
            Node::text("!"),
        ])]);
        let out = render(&doc);
        assert_eq!(out[0].text_content(), "x y z!");

        let strong = element(&element(&out[0]).children[1]);
        assert_eq!(strong.tag, Tag::Strong);
        assert_eq!(element(&strong.children[0]).tag, Tag::Emphasis);
    }

    #[test]
    fn test_non_document_root_renders_itself() {
        let out = render(&Node::blockquote(vec![Node::paragraph(vec![Node::text("q")])]));
        assert_eq!(out.len(), 1);
        assert_eq!(element(&out[0]).tag, Tag::Blockquote);
    }

    #[test]
    fn test_depth_guard() {
        let mut node = Node::text("deep");
        for _ in 0..10 {
            node = Node::blockquote(vec![node]);
        }
        let doc = Node::document(vec![node]);

        let options = RenderOptions::new().with_max_depth(4);
        let result = NodeRenderer::new(options).render_with_stats(&doc);
        assert_eq!(result.nodes.len(), 1);
        assert_eq!(result.nodes[0].text_content(), "");
        assert_eq!(result.stats.truncated_count, 1);

        let options = RenderOptions::new().without_depth_limit();
        let out = render_with_options(&doc, &options);
        assert_eq!(out[0].text_content(), "deep");
    }

    #[test]
    fn test_visitor_skip_and_unwrap() {
        let doc = Node::document(vec![
            Node::paragraph(vec![Node::unknown("inline", vec![Node::text("kept")])]),
            Node::Hr,
        ]);

        let out = NodeRenderer::new(RenderOptions::default())
            .with_visitor(UnwrapTagsVisitor::new(["inline"]))
            .render(&doc);
        assert_eq!(out[0].text_content(), "kept");
        assert_eq!(out.len(), 2);

        let out = NodeRenderer::new(RenderOptions::default())
            .with_visitor(SkipTagsVisitor::new(["hr"]))
            .render(&doc);
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn test_render_with_stats() {
        let doc = Node::document(vec![
            Node::heading(1, vec![Node::text("Title here")]),
            Node::paragraph(vec![
                Node::text("Read "),
                Node::link("https://example.com", vec![Node::text("this")]),
                Node::text(" and "),
                Node::link("/that", vec![Node::text("that")]),
            ]),
            Node::unknown("callout", vec![]),
        ]);
        let result = render_with_stats(&doc, &RenderOptions::default());

        assert_eq!(result.stats.heading_count, 1);
        assert_eq!(result.stats.paragraph_count, 1);
        assert_eq!(result.stats.link_count, 2);
        assert_eq!(result.stats.external_link_count, 1);
        assert_eq!(result.stats.skipped_count, 1);
        assert_eq!(result.stats.word_count, 6);
    }
}
