//! Front-matter of blog posts as supplied by the content reader.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Scalar front-matter fields of a blog post.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostEntry {
    /// URL slug
    pub slug: String,

    /// Post title
    pub title: String,

    /// Short summary shown in listings and feeds
    #[serde(default)]
    pub excerpt: String,

    /// Publication date
    #[serde(default)]
    pub date: Option<NaiveDate>,

    /// Topic tags
    #[serde(default)]
    pub tags: Vec<String>,

    /// Public path of the cover image
    #[serde(default)]
    pub cover_image: Option<String>,
}

impl PostEntry {
    /// Create an entry with a slug and title.
    pub fn new(slug: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            title: title.into(),
            ..Default::default()
        }
    }

    /// Set the excerpt.
    pub fn with_excerpt(mut self, excerpt: impl Into<String>) -> Self {
        self.excerpt = excerpt.into();
        self
    }

    /// Set the publication date.
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Publication date formatted for display, e.g. "January 5, 2024".
    pub fn display_date(&self) -> Option<String> {
        self.date.map(display_date)
    }
}

/// Format a date the way post pages show it: "January 5, 2024".
pub fn display_date(date: NaiveDate) -> String {
    format!("{} {}, {}", date.format("%B"), date.day(), date.year())
}

/// Sort posts newest first; undated posts go last, keeping their order.
pub fn sort_newest_first(posts: &mut [PostEntry]) {
    posts.sort_by(|a, b| match (a.date, b.date) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_display_date() {
        assert_eq!(display_date(date(2024, 1, 5)), "January 5, 2024");
        assert_eq!(display_date(date(2023, 12, 25)), "December 25, 2023");
    }

    #[test]
    fn test_sort_newest_first() {
        let mut posts = vec![
            PostEntry::new("old", "Old").with_date(date(2022, 3, 1)),
            PostEntry::new("undated", "Undated"),
            PostEntry::new("new", "New").with_date(date(2024, 6, 1)),
        ];
        sort_newest_first(&mut posts);

        let slugs: Vec<_> = posts.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["new", "old", "undated"]);
    }

    #[test]
    fn test_deserialize_front_matter() {
        let post: PostEntry = serde_json::from_str(
            r#"{"slug": "hello", "title": "Hello", "date": "2024-02-29", "coverImage": "/images/posts/a.png"}"#,
        )
        .unwrap();
        assert_eq!(post.date, Some(date(2024, 2, 29)));
        assert_eq!(post.cover_image.as_deref(), Some("/images/posts/a.png"));
        assert!(post.excerpt.is_empty());
        assert!(post.tags.is_empty());
    }
}
