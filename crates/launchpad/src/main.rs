#![forbid(unsafe_code)]

//! # launchpad
//!
//! Prerender and export the deployment template page.
//!
//! ## Usage
//!
//! ```bash
//! cargo run -p launchpad -- render --clicks 2
//! ```

use std::io;

use clap::Parser;
use launchpad::cli::{self, Cli};

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    cli::init_logging(args.log_level());
    tracing::debug!(?args, "starting");

    let stdout = io::stdout();
    cli::execute(&args, &mut stdout.lock())
}
