//! Reading-time estimation.

use std::fmt;

use crate::model::Node;
use crate::render::extract_text;

/// Assumed reading speed.
pub const WORDS_PER_MINUTE: usize = 200;

/// Estimated reading time of a piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadTime {
    /// Whitespace-separated words counted
    pub words: usize,

    /// Estimated minutes, never less than one
    pub minutes: usize,
}

impl ReadTime {
    /// Estimate from a word count.
    ///
    /// Minutes round half up, with a floor of one minute.
    pub fn from_words(words: usize) -> Self {
        let minutes = ((words + WORDS_PER_MINUTE / 2) / WORDS_PER_MINUTE).max(1);
        Self { words, minutes }
    }

    /// Estimate from text.
    pub fn estimate(text: &str) -> Self {
        Self::from_words(text.split_whitespace().count())
    }

    /// Estimate from a document tree's plain text.
    pub fn of_document(root: &Node) -> Self {
        Self::estimate(&extract_text(root))
    }
}

impl fmt::Display for ReadTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} min read", self.minutes)
    }
}

/// Reading-time label for text, e.g. `"3 min read"`.
pub fn read_time(text: &str) -> String {
    ReadTime::estimate(text).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(n: usize) -> String {
        vec!["word"; n].join(" ")
    }

    #[test]
    fn test_short_text() {
        assert_eq!(read_time("hello world"), "1 min read");
    }

    #[test]
    fn test_longer_text() {
        assert_eq!(read_time(&words(400)), "2 min read");
    }

    #[test]
    fn test_empty_and_whitespace() {
        assert_eq!(read_time(""), "1 min read");
        assert_eq!(read_time("   \n\t "), "1 min read");
    }

    #[test]
    fn test_rounds_half_up() {
        assert_eq!(read_time(&words(300)), "2 min read");
        assert_eq!(read_time(&words(299)), "1 min read");
        assert_eq!(read_time(&words(500)), "3 min read");
    }

    #[test]
    fn test_of_document() {
        let doc = Node::document(vec![
            Node::paragraph(vec![Node::text(words(250))]),
            Node::paragraph(vec![Node::text(words(250))]),
        ]);
        let estimate = ReadTime::of_document(&doc);
        assert_eq!(estimate.words, 500);
        assert_eq!(estimate.minutes, 3);
    }
}
