//! Barrage CLI - command-line interface for the bullet pattern sandbox

mod commands;

use anyhow::Result;
use barrage_patterns::PatternKind;
use clap::{Parser, Subcommand};
use commands::{config, patterns, play, simulate};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "barrage")]
#[command(about = "Bullet pattern sandbox: five emitter patterns with live parameters", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the sandbox window
    Play {
        /// Path to a sandbox config file (TOML)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Pattern to start with (name or index 0-4)
        #[arg(long)]
        pattern: Option<PatternKind>,

        /// Launch in fullscreen mode
        #[arg(long)]
        fullscreen: bool,
    },

    /// Run the sandbox headless and report statistics
    Simulate {
        /// Path to a sandbox config file (TOML)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Pattern to run (name or index 0-4)
        #[arg(long)]
        pattern: Option<PatternKind>,

        /// Number of ticks to simulate
        #[arg(long, default_value = "600")]
        ticks: u64,

        /// Seconds per tick (default: one frame at the configured tick rate)
        #[arg(long)]
        dt: Option<f64>,

        /// Pointer position for the targeting pattern (e.g., "500,350")
        #[arg(long, value_parser = parse_vec2)]
        pointer: Option<[f64; 2]>,

        /// Seed for the burst pattern's speed jitter
        #[arg(long)]
        seed: Option<u64>,

        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// List the patterns and their presets
    Patterns,

    /// Print the default config, or check a config file
    Config {
        /// Config file to validate instead of printing the default
        #[arg(long)]
        check: Option<PathBuf>,
    },
}

/// Parse a comma-separated "x,y" pair
fn parse_vec2(s: &str) -> Result<[f64; 2], String> {
    let parts: Vec<&str> = s.split(',').collect();
    if parts.len() != 2 {
        return Err(format!("expected 2 comma-separated values, got {}", parts.len()));
    }
    let x: f64 = parts[0].trim().parse().map_err(|e| format!("invalid x: {}", e))?;
    let y: f64 = parts[1].trim().parse().map_err(|e| format!("invalid y: {}", e))?;
    if !x.is_finite() || !y.is_finite() {
        return Err(format!("coordinates must be finite, got {x},{y}"));
    }
    Ok([x, y])
}

fn main() -> Result<()> {
    // Logs go to stderr so `simulate --format json` stays machine-readable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            config,
            pattern,
            fullscreen,
        } => play::run(play::PlayArgs {
            config,
            pattern,
            fullscreen,
        }),
        Commands::Simulate {
            config,
            pattern,
            ticks,
            dt,
            pointer,
            seed,
            format,
        } => simulate::run(simulate::SimulateArgs {
            config,
            pattern,
            ticks,
            dt,
            pointer,
            seed,
            format,
        }),
        Commands::Patterns => patterns::run(),
        Commands::Config { check } => config::run(check.as_deref()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn parse_vec2_accepts_pairs() {
        assert_eq!(parse_vec2("500,350"), Ok([500.0, 350.0]));
        assert_eq!(parse_vec2(" -1.5 , 2 "), Ok([-1.5, 2.0]));
    }

    #[test]
    fn parse_vec2_rejects_bad_input() {
        assert!(parse_vec2("1,2,3").is_err());
        assert!(parse_vec2("1").is_err());
        assert!(parse_vec2("x,2").is_err());
        assert!(parse_vec2("inf,2").is_err());
    }

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn simulate_args_parse() {
        let cli = Cli::try_parse_from([
            "barrage",
            "simulate",
            "--pattern",
            "targeting",
            "--ticks",
            "120",
            "--pointer",
            "500,350",
            "--format",
            "json",
        ])
        .unwrap();
        match cli.command {
            Commands::Simulate {
                pattern,
                ticks,
                pointer,
                format,
                dt,
                ..
            } => {
                assert_eq!(pattern, Some(PatternKind::Targeting));
                assert_eq!(ticks, 120);
                assert_eq!(pointer, Some([500.0, 350.0]));
                assert_eq!(format, "json");
                assert_eq!(dt, None);
            }
            _ => panic!("expected simulate"),
        }
    }

    #[test]
    fn unknown_pattern_is_rejected() {
        assert!(Cli::try_parse_from(["barrage", "play", "--pattern", "laser"]).is_err());
    }
}
