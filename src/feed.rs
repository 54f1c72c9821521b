//! RSS 2.0 feed generation for blog posts.

use chrono::{NaiveDate, NaiveTime};

use crate::model::{sort_newest_first, PostEntry};

/// Channel-level feed settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedConfig {
    /// Site origin without a trailing slash, e.g. `https://example.com`
    pub base_url: String,

    /// Channel title
    pub title: String,

    /// Channel description
    pub description: String,

    /// Channel language tag
    pub language: String,

    /// Managing editor, e.g. `editor@example.com (Jane Doe)`
    pub managing_editor: Option<String>,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
            title: "Blog".to_string(),
            description: String::new(),
            language: "en-us".to_string(),
            managing_editor: None,
        }
    }
}

impl FeedConfig {
    /// Create a config for a site origin.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            ..Default::default()
        }
    }

    /// Set the channel title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the channel description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the channel language.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Set the managing editor.
    pub fn with_managing_editor(mut self, editor: impl Into<String>) -> Self {
        self.managing_editor = Some(editor.into());
        self
    }

    /// Public URL of a post.
    pub fn post_url(&self, slug: &str) -> String {
        format!("{}/blog/{}", self.base_url, slug)
    }

    /// Public URL of the feed itself.
    pub fn feed_url(&self) -> String {
        format!("{}/feed.xml", self.base_url)
    }
}

/// Build an RSS 2.0 document for the given posts.
///
/// Posts without a date are left out; the rest are listed newest first.
pub fn build_rss(config: &FeedConfig, posts: &[PostEntry]) -> String {
    let mut dated: Vec<PostEntry> = posts.iter().filter(|p| p.date.is_some()).cloned().collect();
    sort_newest_first(&mut dated);

    let mut out = String::new();
    out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    out.push_str("<rss version=\"2.0\" xmlns:atom=\"http://www.w3.org/2005/Atom\">\n");
    out.push_str("  <channel>\n");
    out.push_str(&format!("    <title>{}</title>\n", escape_xml(&config.title)));
    out.push_str(&format!(
        "    <link>{}/blog</link>\n",
        escape_xml(&config.base_url)
    ));
    out.push_str(&format!(
        "    <description>{}</description>\n",
        escape_xml(&config.description)
    ));
    out.push_str(&format!(
        "    <language>{}</language>\n",
        escape_xml(&config.language)
    ));
    if let Some(editor) = &config.managing_editor {
        out.push_str(&format!(
            "    <managingEditor>{}</managingEditor>\n",
            escape_xml(editor)
        ));
    }
    out.push_str(&format!(
        "    <atom:link href=\"{}\" rel=\"self\" type=\"application/rss+xml\"/>\n",
        escape_xml(&config.feed_url())
    ));

    for post in &dated {
        out.push_str(&render_item(config, post));
    }

    out.push_str("  </channel>\n");
    out.push_str("</rss>\n");

    log::debug!("Built feed with {} of {} posts", dated.len(), posts.len());
    out
}

fn render_item(config: &FeedConfig, post: &PostEntry) -> String {
    let url = escape_xml(&config.post_url(&post.slug));
    let mut item = String::new();

    item.push_str("    <item>\n");
    item.push_str(&format!("      <title>{}</title>\n", escape_xml(&post.title)));
    item.push_str(&format!("      <link>{}</link>\n", url));
    item.push_str(&format!("      <guid isPermaLink=\"true\">{}</guid>\n", url));
    item.push_str(&format!(
        "      <description>{}</description>\n",
        escape_xml(&post.excerpt)
    ));
    if let Some(date) = post.date {
        item.push_str(&format!("      <pubDate>{}</pubDate>\n", rfc1123(date)));
    }
    for tag in &post.tags {
        item.push_str(&format!("      <category>{}</category>\n", escape_xml(tag)));
    }
    item.push_str("    </item>\n");

    item
}

/// Format a date as midnight UTC in RFC 1123 form, e.g.
/// `Mon, 01 Jan 2024 00:00:00 GMT`.
pub fn rfc1123(date: NaiveDate) -> String {
    date.and_time(NaiveTime::MIN)
        .format("%a, %d %b %Y %H:%M:%S GMT")
        .to_string()
}

/// Escape `&`, `<`, `>` and `"` for XML text and attribute values.
pub fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
