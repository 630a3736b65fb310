//! CLI command implementations

pub mod config;
pub mod patterns;
pub mod play;
pub mod simulate;

use anyhow::{Context, Result};
use barrage_patterns::{PatternKind, SandboxConfig};
use std::path::Path;

/// Load the config file if one was given, then apply a `--pattern` override
pub fn load_config(path: Option<&Path>, pattern: Option<PatternKind>) -> Result<SandboxConfig> {
    let mut config = match path {
        Some(path) => SandboxConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => SandboxConfig::default(),
    };
    if let Some(pattern) = pattern {
        config.pattern = pattern;
    }
    Ok(config)
}
