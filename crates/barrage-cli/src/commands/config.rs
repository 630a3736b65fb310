//! Config command - prints the default config or checks a file

use anyhow::{Context, Result};
use barrage_patterns::SandboxConfig;
use std::path::Path;

pub fn run(check: Option<&Path>) -> Result<()> {
    match check {
        Some(path) => {
            let config = SandboxConfig::load(path)
                .with_context(|| format!("Invalid config {}", path.display()))?;
            println!("{}: ok (pattern {}, seed {})", path.display(), config.pattern, config.seed);
        }
        None => {
            let text = SandboxConfig::default()
                .to_toml_string()
                .context("Failed to serialize default config")?;
            print!("{text}");
        }
    }
    Ok(())
}
