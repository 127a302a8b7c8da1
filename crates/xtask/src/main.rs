//! Development tasks for the site content
//!
//! This binary provides content utilities using the cargo-xtask pattern.
//! Run with: `cargo xtask <command>`

mod commands;
mod utils;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use commands::{Check, Features, List, Show};

/// Development tasks for the site content
#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Content tools for the site", long_about = None)]
#[command(version)]
struct Cli {
    /// Data directory holding the collections (skips discovery)
    #[arg(long, global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Directory the upward content search starts from
    #[arg(long, global = true, value_name = "DIR")]
    search_root: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// List the entries of a collection in display order
    List(List),

    /// Show a single entry by id or slug
    Show(Show),

    /// Load every collection and report content problems
    Check(Check),

    /// Print page section flags
    Features(Features),
}

fn main() -> Result<()> {
    // Load .env file if it exists (for CONTENT_DATA_DIR and other env vars)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = utils::content_config(cli.data_dir, cli.search_root);

    match cli.command {
        Command::List(cmd) => cmd.execute(&config),
        Command::Show(cmd) => cmd.execute(&config),
        Command::Check(cmd) => cmd.execute(&config),
        Command::Features(cmd) => cmd.execute(&config),
    }
}
