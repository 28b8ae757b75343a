//! Command-line interface for `launchpad`.
//!
//! Deployment pipelines use the binary to prerender the template page and
//! check what content a config file resolves to.
//!
//! # Examples
//!
//! ```bash
//! # Print the widget fragment after three clicks
//! launchpad --mode production render --clicks 3
//!
//! # Write dist/index.html for the wasm bundle
//! launchpad --config page.toml export --out dist
//!
//! # Show the resolved page content
//! launchpad config
//! ```

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::Model as _;
use crate::config::PageContent;
use crate::environment::{BuildMode, FixedMode, ModeSource};
use crate::page::{DEFAULT_SCRIPT, Document};
use crate::widget::CounterWidget;

/// Launchpad - deployment template page tooling.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "launchpad",
    author,
    version,
    about = "Prerender and export the launchpad template page"
)]
pub struct Cli {
    /// Page content file (TOML)
    ///
    /// Keys not present in the file keep their defaults
    #[arg(long, short = 'c', global = true, env = "LAUNCHPAD_CONFIG")]
    pub config: Option<PathBuf>,

    /// Environment mode shown on the page
    ///
    /// Defaults to the mode this binary was built with
    #[arg(long, short = 'm', global = true, env = "LAUNCHPAD_MODE")]
    pub mode: Option<String>,

    /// Enable verbose logging (repeat for more)
    #[arg(long, short = 'v', global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Print the widget markup
    Render {
        /// Number of simulated clicks before rendering
        #[arg(long, default_value_t = 0)]
        clicks: u64,
    },

    /// Write a standalone index.html
    Export {
        /// Output directory (created if missing)
        #[arg(long, short = 'o')]
        out: PathBuf,

        /// Path of the wasm bundle's JS entry point
        #[arg(long, default_value = DEFAULT_SCRIPT)]
        script: String,
    },

    /// Print the resolved page content as JSON
    Config,
}

impl Cli {
    /// Page content from `--config`, or the defaults.
    ///
    /// # Errors
    ///
    /// Fails if the config file cannot be read or parsed.
    pub fn page_content(&self) -> anyhow::Result<PageContent> {
        match &self.config {
            Some(path) => PageContent::load(path)
                .with_context(|| format!("loading page content from {}", path.display())),
            None => Ok(PageContent::default()),
        }
    }

    /// The mode source selected by the flags.
    #[must_use]
    pub fn mode_source(&self) -> Box<dyn ModeSource> {
        match &self.mode {
            Some(mode) => Box::new(FixedMode::new(mode.clone())),
            None => Box::new(BuildMode),
        }
    }

    /// Log level implied by `-v` flags.
    #[must_use]
    pub const fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

/// Install the stderr tracing subscriber. `RUST_LOG` takes precedence.
pub fn init_logging(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Run a parsed command line, writing results to `out`.
///
/// # Errors
///
/// Fails on unreadable config, missing mode, or export I/O errors.
pub fn execute(cli: &Cli, out: &mut impl Write) -> anyhow::Result<()> {
    let content = cli.page_content()?;

    match &cli.command {
        Command::Render { clicks } => {
            let mut widget = CounterWidget::with_content(content, cli.mode_source().as_ref())?;
            for _ in 0..*clicks {
                widget.on_activate();
            }
            writeln!(out, "{}", widget.view())?;
        }
        Command::Export { out: dir, script } => {
            let widget = CounterWidget::with_content(content, cli.mode_source().as_ref())?;
            let fragment = widget.render(widget.count());
            let html = Document::new(&fragment, widget.content())
                .script(script.as_str())
                .render()?;

            fs::create_dir_all(dir)
                .with_context(|| format!("creating output directory {}", dir.display()))?;
            let path = dir.join("index.html");
            fs::write(&path, html).with_context(|| format!("writing {}", path.display()))?;
            tracing::info!(path = %path.display(), mode = widget.mode(), "exported page");
            writeln!(out, "{}", path.display())?;
        }
        Command::Config => {
            let json = serde_json::to_string_pretty(&content)?;
            writeln!(out, "{json}")?;
        }
    }
    Ok(())
}
