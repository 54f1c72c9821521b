//! Rendering options and configuration.

/// Default recursion limit for rendering.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Options for rendering document trees.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Maximum nesting depth rendered; deeper subtrees produce no output.
    /// `None` disables the guard.
    pub max_depth: Option<usize>,

    /// Maximum heading level (1-6); deeper headings are capped
    pub max_heading_level: u8,

    /// Prefix that marks a link target as external
    pub external_prefix: String,

    /// Collect rendering statistics
    pub collect_stats: bool,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum nesting depth.
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Disable the nesting depth guard.
    pub fn without_depth_limit(mut self) -> Self {
        self.max_depth = None;
        self
    }

    /// Set the maximum heading level.
    pub fn with_max_heading(mut self, level: u8) -> Self {
        self.max_heading_level = level.clamp(1, 6);
        self
    }

    /// Set the prefix that marks links as external.
    pub fn with_external_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.external_prefix = prefix.into();
        self
    }

    /// Enable statistics collection during rendering.
    pub fn with_stats(mut self, collect: bool) -> Self {
        self.collect_stats = collect;
        self
    }

    /// Check whether a link target is external.
    pub fn is_external(&self, href: &str) -> bool {
        href.starts_with(&self.external_prefix)
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            max_depth: Some(DEFAULT_MAX_DEPTH),
            max_heading_level: 6,
            external_prefix: "http".to_string(),
            collect_stats: false,
        }
    }
}
