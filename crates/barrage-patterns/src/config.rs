//! Sandbox configuration loaded from TOML

use crate::field::DEFAULT_CAPACITY;
use crate::params::ParameterSet;
use crate::pattern::PatternKind;
use crate::projectile::{DEFAULT_PROJECTILE_RADIUS, EXPIRY_RADIUS};
use barrage_core::{BarrageError, Result, Vec2};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Emitter placement and projectile size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmitterConfig {
    pub origin: Vec2,
    pub projectile_radius: f64,
}

impl Default for EmitterConfig {
    fn default() -> Self {
        Self {
            origin: Vec2::new(400.0, 350.0),
            projectile_radius: DEFAULT_PROJECTILE_RADIUS,
        }
    }
}

/// Projectile field limits
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    pub capacity: usize,
    pub expiry_radius: f64,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            expiry_radius: EXPIRY_RADIUS,
        }
    }
}

/// Player window size in logical pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 700,
        }
    }
}

/// Everything needed to build a [`Sandbox`](crate::Sandbox) and its window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SandboxConfig {
    /// Pattern selected at startup
    pub pattern: PatternKind,
    /// Seed for the Burst speed jitter
    pub seed: u64,
    /// Target frame rate; also the per-frame delta cap
    pub tick_rate: f64,
    pub emitter: EmitterConfig,
    pub field: FieldConfig,
    pub params: ParameterSet,
    pub window: WindowConfig,
}

impl Default for SandboxConfig {
    fn default() -> Self {
        Self {
            pattern: PatternKind::Circle,
            seed: 42,
            tick_rate: 60.0,
            emitter: EmitterConfig::default(),
            field: FieldConfig::default(),
            params: ParameterSet::default(),
            window: WindowConfig::default(),
        }
    }
}

impl SandboxConfig {
    /// Read and validate a config file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parse and validate a config document. Missing keys take defaults.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: SandboxConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Check every value against its allowed range
    pub fn validate(&self) -> Result<()> {
        self.params.validate()?;

        check_range("tick_rate", self.tick_rate, 1.0, 1000.0)?;
        check_range(
            "emitter.projectile_radius",
            self.emitter.projectile_radius,
            0.5,
            100.0,
        )?;
        check_range("field.expiry_radius", self.field.expiry_radius, 1.0, 1.0e6)?;
        check_range("field.capacity", self.field.capacity as f64, 1.0, 1.0e6)?;
        check_range("window.width", self.window.width as f64, 1.0, 16384.0)?;
        check_range("window.height", self.window.height as f64, 1.0, 16384.0)?;

        let Vec2 { x, y } = self.emitter.origin;
        if !x.is_finite() || !y.is_finite() {
            return Err(BarrageError::ParseError(format!(
                "emitter.origin must be finite, got [{x}, {y}]"
            )));
        }
        Ok(())
    }
}

fn check_range(field: &str, value: f64, min: f64, max: f64) -> Result<()> {
    if value >= min && value <= max {
        Ok(())
    } else {
        Err(BarrageError::out_of_range(field, min, max, value))
    }
}
