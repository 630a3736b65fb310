//! Barrage Player - standalone sandbox binary
//!
//! Usage:
//!   barrage-player [--config <file>] [--pattern <name>] [--fullscreen]

use anyhow::{Context, Result};
use barrage_patterns::{PatternKind, SandboxConfig};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "barrage-player")]
#[command(about = "Barrage sandbox - watch bullet patterns and tune them live")]
struct Args {
    /// Path to a sandbox config file (TOML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Pattern to start with (name or index 0-4)
    #[arg(long)]
    pattern: Option<PatternKind>,

    /// Launch in fullscreen mode
    #[arg(long)]
    fullscreen: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => SandboxConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => SandboxConfig::default(),
    };
    if let Some(pattern) = args.pattern {
        config.pattern = pattern;
    }

    barrage_player::print_controls();
    barrage_player::run(&config, args.fullscreen)
}
