//! Play command - opens the sandbox window

use anyhow::Result;
use barrage_patterns::PatternKind;
use std::path::PathBuf;

pub struct PlayArgs {
    pub config: Option<PathBuf>,
    pub pattern: Option<PatternKind>,
    pub fullscreen: bool,
}

pub fn run(args: PlayArgs) -> Result<()> {
    let config = super::load_config(args.config.as_deref(), args.pattern)?;

    println!("Starting pattern: {}", config.pattern);
    println!();
    barrage_player::print_controls();

    barrage_player::run(&config, args.fullscreen)
}
