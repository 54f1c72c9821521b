//! folio CLI - render portfolio document trees

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use colored::Colorize;

use folio::contact::{
    ContactConfig, ContactHandler, DryRunMailer, API_KEY_VAR, CONTACT_EMAIL_VAR, FROM_EMAIL_VAR,
};
use folio::model::{sort_newest_first, PostEntry};
use folio::render::{plain_summary, to_json, to_json_value};
use folio::{build_rss, extract_text, load_file, FeedConfig, Folio, JsonFormat, ReadTime};

#[derive(Parser)]
#[command(name = "folio")]
#[command(version)]
#[command(about = "Render portfolio document trees to HTML, text, and JSON", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a document tree to HTML
    Html {
        /// Input document tree (JSON)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        #[command(flatten)]
        render: RenderArgs,
    },

    /// Extract plain text from a document tree
    Text {
        /// Input document tree (JSON)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Render a document tree to a JSON presentational tree
    Json {
        /// Input document tree (JSON)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        /// Re-emit the normalized source tree instead of the rendered one
        #[arg(long)]
        source: bool,

        #[command(flatten)]
        render: RenderArgs,
    },

    /// Show document statistics and reading time
    Info {
        /// Input document tree (JSON)
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Build an RSS feed from post front-matter
    Feed {
        /// JSON array of posts
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Site origin, e.g. https://example.com
        #[arg(long, env = "SITE_URL", default_value = "http://localhost:3000")]
        base_url: String,

        /// Channel title
        #[arg(long, default_value = "Blog")]
        title: String,

        /// Channel description
        #[arg(long, default_value = "")]
        description: String,

        /// Managing editor, e.g. "me@example.com (Me)"
        #[arg(long)]
        managing_editor: Option<String>,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// List posts newest first instead of building the feed
        #[arg(long)]
        list: bool,
    },

    /// Validate a contact form body without sending mail
    Contact {
        /// JSON request body ("-" for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Recipient address
        #[arg(long, env = "CONTACT_EMAIL", hide_env_values = true)]
        contact_email: Option<String>,

        /// Email provider API key
        #[arg(long, env = "RESEND_API_KEY", hide_env_values = true)]
        api_key: Option<String>,

        /// Sender address
        #[arg(long, env = "FROM_EMAIL")]
        from_email: Option<String>,
    },

    /// Show version information
    Version,
}

#[derive(Args)]
struct RenderArgs {
    /// Maximum heading level (1-6)
    #[arg(long, default_value = "6")]
    max_heading: u8,

    /// Maximum nesting depth
    #[arg(long, default_value_t = folio::render::DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Drop nodes with this tag (repeatable)
    #[arg(long, value_name = "TAG")]
    skip: Vec<String>,

    /// Render children of this tag without a wrapper (repeatable)
    #[arg(long, value_name = "TAG", default_values_t = vec!["inline".to_string()])]
    unwrap: Vec<String>,
}

impl RenderArgs {
    fn builder(&self) -> Folio {
        Folio::new()
            .with_max_heading(self.max_heading)
            .with_max_depth(self.max_depth)
            .skip_tags(self.skip.iter().cloned())
            .unwrap_tags(self.unwrap.iter().cloned())
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Html {
            input,
            output,
            render,
        } => cmd_html(&input, output.as_deref(), &render),
        Commands::Text { input, output } => cmd_text(&input, output.as_deref()),
        Commands::Json {
            input,
            output,
            compact,
            source,
            render,
        } => cmd_json(&input, output.as_deref(), compact, source, &render),
        Commands::Info { input } => cmd_info(&input),
        Commands::Feed {
            input,
            base_url,
            title,
            description,
            managing_editor,
            output,
            list,
        } => {
            let mut config = FeedConfig::new(base_url)
                .with_title(title)
                .with_description(description);
            if let Some(editor) = managing_editor {
                config = config.with_managing_editor(editor);
            }
            cmd_feed(&input, &config, output.as_deref(), list)
        }
        Commands::Contact {
            input,
            contact_email,
            api_key,
            from_email,
        } => {
            let config = contact_config(contact_email, api_key, from_email);
            cmd_contact(&input, config)
        }
        Commands::Version => {
            cmd_version();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn write_output(output: Option<&Path>, content: &str) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = output {
        fs::write(path, content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }
    Ok(())
}

fn cmd_html(
    input: &Path,
    output: Option<&Path>,
    render: &RenderArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let result = render.builder().render_file(input)?;
    write_output(output, &result.to_html())
}

fn cmd_text(input: &Path, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let root = load_file(input)?;
    write_output(output, &extract_text(&root))
}

fn cmd_json(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
    source: bool,
    render: &RenderArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let json = if source {
        to_json_value(&load_file(input)?, format)?
    } else {
        let result = render.builder().render_file(input)?;
        to_json(&result.nodes, format)?
    };

    write_output(output, &json)
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let root = load_file(input)?;
    let result = Folio::new().unwrap_tags(["inline"]).render(&root);
    let stats = &result.stats;
    let read_time = ReadTime::of_document(&root);

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Nodes".bold(), root.node_count());
    println!("{}: {}", "Read time".bold(), read_time);

    let summary = plain_summary(&root, 160);
    if !summary.is_empty() {
        println!("{}: {}", "Summary".bold(), summary);
    }

    println!();
    println!("{}", "Content Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "Words".bold(), read_time.words);
    println!("{}: {}", "Headings".bold(), stats.heading_count);
    println!("{}: {}", "Paragraphs".bold(), stats.paragraph_count);
    println!(
        "{}: {} ({} external)",
        "Links".bold(),
        stats.link_count,
        stats.external_link_count
    );
    println!(
        "{}: {} ({} items)",
        "Lists".bold(),
        stats.list_count,
        stats.list_item_count
    );
    println!("{}: {}", "Code blocks".bold(), stats.code_block_count);

    if stats.skipped_count > 0 {
        println!(
            "{}: {}",
            "Skipped nodes".yellow().bold(),
            stats.skipped_count
        );
    }
    if stats.truncated_count > 0 {
        println!(
            "{}: {}",
            "Truncated subtrees".yellow().bold(),
            stats.truncated_count
        );
    }

    Ok(())
}

fn cmd_feed(
    input: &Path,
    config: &FeedConfig,
    output: Option<&Path>,
    list: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let data = fs::read_to_string(input)?;
    let mut posts: Vec<PostEntry> = serde_json::from_str(&data)?;

    if list {
        sort_newest_first(&mut posts);
        for post in &posts {
            let date = post.display_date().unwrap_or_else(|| "undated".to_string());
            println!("{}  {}", date.dimmed(), post.title.bold());
            println!("    {}", config.post_url(&post.slug));
        }
        return Ok(());
    }

    write_output(output, &build_rss(config, &posts))
}

/// Build the contact configuration from flag or environment values, with the
/// same rules the library applies to the environment.
fn contact_config(
    contact_email: Option<String>,
    api_key: Option<String>,
    from_email: Option<String>,
) -> Option<ContactConfig> {
    ContactConfig::from_lookup(|key| match key {
        CONTACT_EMAIL_VAR => contact_email.clone(),
        API_KEY_VAR => api_key.clone(),
        FROM_EMAIL_VAR => from_email.clone(),
        _ => None,
    })
    .ok()
}

fn cmd_contact(
    input: &Path,
    config: Option<ContactConfig>,
) -> Result<(), Box<dyn std::error::Error>> {
    let body = if input == Path::new("-") {
        let mut buf = Vec::new();
        std::io::stdin().read_to_end(&mut buf)?;
        buf
    } else {
        fs::read(input)?
    };

    let handler = ContactHandler::new(config, DryRunMailer::new());
    let response = handler.handle(&body);

    let status = if response.is_success() {
        response.status.to_string().green().bold()
    } else {
        response.status.to_string().red().bold()
    };
    println!("{} {}", "Status".bold(), status);
    println!("{}", serde_json::to_string_pretty(&response.body)?);

    for email in handler.mailer().sent() {
        println!();
        println!("{}", "Would send".cyan().bold());
        println!("{}", "─".repeat(40).dimmed());
        println!("{}: {}", "From".bold(), email.from);
        println!("{}: {}", "To".bold(), email.to);
        println!("{}: {}", "Subject".bold(), email.subject);
        println!();
        println!("{}", email.text);
    }

    if response.is_success() {
        Ok(())
    } else {
        Err(format!("submission rejected with status {}", response.status).into())
    }
}

fn cmd_version() {
    println!("{} {}", "folio".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Portfolio document renderer");
    println!();
    println!("License: MIT");
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio::contact::DEFAULT_FROM_EMAIL;

    fn some(s: &str) -> Option<String> {
        Some(s.to_string())
    }

    #[test]
    fn test_contact_config_from_flags() {
        let config = contact_config(some("owner@example.com"), some("key"), None).unwrap();
        assert_eq!(config.contact_email, "owner@example.com");
        assert_eq!(config.api_key, "key");
        assert_eq!(config.from_email, DEFAULT_FROM_EMAIL);

        let config = contact_config(
            some("owner@example.com"),
            some("key"),
            some("me@example.com"),
        )
        .unwrap();
        assert_eq!(config.from_email, "me@example.com");
    }

    #[test]
    fn test_contact_config_blank_values_are_missing() {
        assert!(contact_config(some("owner@example.com"), some("   "), None).is_none());
        assert!(contact_config(some(""), some("key"), None).is_none());
        assert!(contact_config(None, some("key"), None).is_none());

        let config = contact_config(some("owner@example.com"), some("key"), some(" ")).unwrap();
        assert_eq!(config.from_email, DEFAULT_FROM_EMAIL);
    }
}
