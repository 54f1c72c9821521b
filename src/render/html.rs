//! HTML serialization of rendered trees.

use crate::model::{Element, RenderedNode};

/// Serialize rendered units to an HTML fragment.
///
/// Top-level block elements are separated by newlines; everything below the
/// top level is written without added whitespace.
pub fn to_html(nodes: &[RenderedNode]) -> String {
    let mut output = String::new();
    for (i, node) in nodes.iter().enumerate() {
        let is_block = node.as_element().is_some_and(|e| e.tag.is_block());
        if i > 0 && is_block && !output.ends_with('\n') {
            output.push('\n');
        }
        write_node(&mut output, node);
    }
    output
}

fn write_node(output: &mut String, node: &RenderedNode) {
    match node {
        RenderedNode::Text(text) => escape_text_into(output, text),
        RenderedNode::Element(element) => write_element(output, element),
    }
}

fn write_element(output: &mut String, element: &Element) {
    let name = element.tag.name();
    output.push('<');
    output.push_str(name);
    for (key, value) in &element.attributes {
        output.push(' ');
        output.push_str(key);
        output.push_str("=\"");
        escape_attr_into(output, value);
        output.push('"');
    }

    if element.tag.is_void() {
        output.push_str(" />");
        return;
    }

    output.push('>');
    for child in &element.children {
        write_node(output, child);
    }
    output.push_str("</");
    output.push_str(name);
    output.push('>');
}

fn escape_text_into(output: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => output.push_str("&amp;"),
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            _ => output.push(c),
        }
    }
}

fn escape_attr_into(output: &mut String, value: &str) {
    for c in value.chars() {
        match c {
            '&' => output.push_str("&amp;"),
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            '"' => output.push_str("&quot;"),
            '\'' => output.push_str("&#39;"),
            _ => output.push(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Node;
    use crate::render::render;

    #[test]
    fn test_paragraph_html() {
        let doc = Node::document(vec![Node::paragraph(vec![
            Node::text("Hello "),
            Node::strong(vec![Node::text("world")]),
        ])]);
        assert_eq!(to_html(&render(&doc)), "<p>Hello <strong>world</strong></p>");
    }

    #[test]
    fn test_blocks_on_separate_lines() {
        let doc = Node::document(vec![
            Node::heading(1, vec![Node::text("Title")]),
            Node::paragraph(vec![Node::text("Body")]),
            Node::Hr,
        ]);
        assert_eq!(
            to_html(&render(&doc)),
            "<h1>Title</h1>\n<p>Body</p>\n<hr />"
        );
    }

    #[test]
    fn test_external_link_html() {
        let doc = Node::document(vec![Node::paragraph(vec![Node::link(
            "https://example.com/?a=1&b=2",
            vec![Node::text("site")],
        )])]);
        assert_eq!(
            to_html(&render(&doc)),
            "<p><a href=\"https://example.com/?a=1&amp;b=2\" target=\"_blank\" \
             rel=\"noopener noreferrer\">site</a></p>"
        );
    }

    #[test]
    fn test_escapes_text() {
        let doc = Node::document(vec![
            Node::paragraph(vec![Node::text("1 < 2 & \"3\"")]),
            Node::fence("<script>alert('x')</script>"),
        ]);
        assert_eq!(
            to_html(&render(&doc)),
            "<p>1 &lt; 2 &amp; \"3\"</p>\n<pre><code>&lt;script&gt;alert('x')&lt;/script&gt;</code></pre>"
        );
    }

    #[test]
    fn test_lists_and_breaks() {
        let doc = Node::document(vec![Node::list(
            true,
            vec![
                Node::item(vec![Node::text("a"), Node::HardBreak, Node::text("b")]),
                Node::item(vec![Node::code("c")]),
            ],
        )]);
        assert_eq!(
            to_html(&render(&doc)),
            "<ol><li>a<br />b</li><li><code>c</code></li></ol>"
        );
    }

    #[test]
    fn test_empty() {
        assert_eq!(to_html(&[]), "");
    }
}
