//! Command-line interface for mdreader.

use clap::Parser;
use mdreader_config::PageConfig;
use std::path::PathBuf;

/// mdreader - render markdown documents to HTML.
///
/// Picks a document from a directory of `.md` files and writes it as a
/// standalone HTML page or as a bare fragment.
#[derive(Parser, Debug)]
#[command(
    name = "mdr",
    author = "mdreader Contributors",
    version,
    about = "Render markdown documents to HTML",
    after_help = "Examples:\n  \
                  mdr data_dictionary.md > page.html\n  \
                  mdr -d docs --list\n  \
                  mdr -d docs --all site/\n  \
                  cat notes.md | mdr - --fragment"
)]
pub struct Cli {
    /// Document to render, looked up in the document directory ("-" reads stdin)
    #[arg(value_name = "FILE")]
    pub file: Option<String>,

    /// Directory holding the markdown documents
    #[arg(short = 'd', long = "dir", value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Write the output to a file instead of stdout
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Render every document in the directory into OUT_DIR
    #[arg(long = "all", value_name = "OUT_DIR", conflicts_with_all = ["file", "output"])]
    pub all: Option<PathBuf>,

    /// Emit only the HTML fragment, without the page template
    #[arg(long = "fragment")]
    pub fragment: bool,

    /// List the documents in the directory and exit
    #[arg(long = "list")]
    pub list: bool,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(short = 'l', long = "loglevel", default_value = "warn")]
    pub log_level: String,

    /// Use a custom config file or inline TOML
    #[arg(short = 'c', long = "config")]
    pub config: Option<String>,

    /// Show configuration paths and exit
    #[arg(long = "paths")]
    pub show_paths: bool,
}

impl Cli {
    /// Check if we should read from stdin.
    pub fn should_read_stdin(&self) -> bool {
        self.file.as_deref() == Some("-")
    }

    /// Whether output is wrapped in the page template.
    pub fn standalone(&self, page: &PageConfig) -> bool {
        page.standalone && !self.fragment
    }
}

/// Show paths information.
pub fn show_paths() {
    use mdreader_config::Config;

    let config_path = Config::config_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(not found)".to_string());

    println!("paths:");
    println!("  config                {}", config_path);
}
