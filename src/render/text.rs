//! Plain-text extraction from document trees.

use crate::model::Node;

/// Flatten a tree into plain text.
///
/// Text leaves yield their content. Every other node yields the text of its
/// children joined with a single space, whatever its kind, so block
/// boundaries collapse into spaces. Code and fence leaves keep their content
/// in an attribute rather than in text children and therefore yield nothing.
pub fn extract_text(node: &Node) -> String {
    match node {
        Node::Text { content } => content.clone(),
        other => other
            .children()
            .iter()
            .map(extract_text)
            .collect::<Vec<_>>()
            .join(" "),
    }
}

/// Single-line summary of a tree, at most `max_chars` characters.
///
/// Whitespace runs collapse to one space. Truncated summaries end with `…`,
/// which counts toward the limit.
pub fn plain_summary(node: &Node, max_chars: usize) -> String {
    let text = extract_text(node)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");

    if text.chars().count() <= max_chars {
        return text;
    }
    if max_chars == 0 {
        return String::new();
    }

    let mut summary: String = text.chars().take(max_chars - 1).collect();
    let trimmed_len = summary.trim_end().len();
    summary.truncate(trimmed_len);
    summary.push('…');
    summary
}
