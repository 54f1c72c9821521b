//! Rendering result with statistics.

use serde::Serialize;

use crate::model::RenderedNode;
use crate::read_time::ReadTime;

use super::html::to_html;

/// Result of rendering a document, including output and statistics.
#[derive(Debug, Clone, Serialize)]
pub struct RenderResult {
    /// The rendered top-level units
    pub nodes: Vec<RenderedNode>,

    /// Rendering statistics
    pub stats: RenderStats,
}

impl RenderResult {
    /// Create a new render result.
    pub fn new(nodes: Vec<RenderedNode>, stats: RenderStats) -> Self {
        Self { nodes, stats }
    }

    /// Serialize the rendered units to HTML.
    pub fn to_html(&self) -> String {
        to_html(&self.nodes)
    }

    /// Reading-time estimate from the counted words.
    pub fn read_time(&self) -> ReadTime {
        ReadTime::from_words(self.stats.word_count as usize)
    }
}

/// Statistics collected while rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RenderStats {
    /// Number of paragraphs rendered
    pub paragraph_count: u32,

    /// Number of headings rendered
    pub heading_count: u32,

    /// Number of links rendered
    pub link_count: u32,

    /// Number of links flagged as external
    pub external_link_count: u32,

    /// Number of lists rendered
    pub list_count: u32,

    /// Number of list items rendered
    pub list_item_count: u32,

    /// Number of fenced code blocks rendered
    pub code_block_count: u32,

    /// Number of unrecognized nodes omitted from the output
    pub skipped_count: u32,

    /// Number of nodes cut off by the depth guard
    pub truncated_count: u32,

    /// Whitespace-separated words in the document's text
    pub word_count: u32,
}

impl RenderStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add word counts from text.
    pub fn count_text(&mut self, text: &str) {
        self.word_count += text.split_whitespace().count() as u32;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_text() {
        let mut stats = RenderStats::new();
        stats.count_text("Hello, world! This is a test.");
        assert_eq!(stats.word_count, 6);
    }

    #[test]
    fn test_result_read_time() {
        let stats = RenderStats {
            word_count: 450,
            ..Default::default()
        };
        let result = RenderResult::new(Vec::new(), stats);
        assert_eq!(result.read_time().to_string(), "2 min read");
        assert_eq!(result.to_html(), "");
    }
}
