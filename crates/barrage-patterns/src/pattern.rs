//! The five spawn patterns

use crate::params::ParameterSet;
use barrage_core::{BarrageError, Color};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Geometric layout of one burst
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternKind {
    /// Even ring around the emitter, rotated by the phase angle
    #[default]
    Circle,
    /// Ring whose phase advances between bursts
    Spiral,
    /// Fan with a per-index speed ripple
    Wave,
    /// Ring with jittered speeds
    Burst,
    /// Fan centred on the pointer
    Targeting,
}

impl PatternKind {
    /// All patterns in selection order (keys 1-5)
    pub const ALL: [PatternKind; 5] = [
        PatternKind::Circle,
        PatternKind::Spiral,
        PatternKind::Wave,
        PatternKind::Burst,
        PatternKind::Targeting,
    ];

    pub fn index(self) -> usize {
        match self {
            PatternKind::Circle => 0,
            PatternKind::Spiral => 1,
            PatternKind::Wave => 2,
            PatternKind::Burst => 3,
            PatternKind::Targeting => 4,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Upper-case display name
    pub fn name(self) -> &'static str {
        match self {
            PatternKind::Circle => "CIRCLE",
            PatternKind::Spiral => "SPIRAL",
            PatternKind::Wave => "WAVE",
            PatternKind::Burst => "BURST",
            PatternKind::Targeting => "TARGETING",
        }
    }

    /// Whether the spread is split with inclusive endpoints
    /// (`spread / (count - 1)`) rather than around a full ring (`spread / count`)
    pub fn spans_inclusive(self) -> bool {
        matches!(self, PatternKind::Wave | PatternKind::Targeting)
    }

    /// Tuned starting parameters for this pattern
    pub fn preset(self) -> ParameterSet {
        match self {
            PatternKind::Circle => ParameterSet {
                count: 5,
                speed: 150.0,
                spread: 360.0,
                rotation_rate: 0.0,
                cooldown: 2.0,
            },
            PatternKind::Spiral => ParameterSet {
                count: 4,
                speed: 120.0,
                spread: 0.0,
                rotation_rate: 180.0,
                cooldown: 1.0,
            },
            PatternKind::Wave => ParameterSet {
                count: 4,
                speed: 100.0,
                spread: 60.0,
                rotation_rate: 90.0,
                cooldown: 0.5,
            },
            PatternKind::Burst => ParameterSet {
                count: 12,
                speed: 180.0,
                spread: 360.0,
                rotation_rate: 0.0,
                cooldown: 0.5,
            },
            PatternKind::Targeting => ParameterSet {
                count: 9,
                speed: 140.0,
                spread: 45.0,
                rotation_rate: 0.0,
                cooldown: 1.2,
            },
        }
    }

    /// Projectile tint used by the renderer
    pub fn color(self) -> Color {
        match self {
            PatternKind::Circle => Color::from_hex(0xFF5050),
            PatternKind::Spiral => Color::from_hex(0xC87AFF),
            PatternKind::Wave => Color::from_hex(0x4F8CFF),
            PatternKind::Burst => Color::from_hex(0xFFA132),
            PatternKind::Targeting => Color::from_hex(0xFDE047),
        }
    }
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PatternKind {
    type Err = BarrageError;

    /// Accepts a case-insensitive name or a 0-based index
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(index) = trimmed.parse::<usize>() {
            if let Some(kind) = Self::from_index(index) {
                return Ok(kind);
            }
        }
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| BarrageError::InvalidEnumValue {
                value: s.to_string(),
                allowed: Self::ALL
                    .iter()
                    .map(|kind| kind.name().to_ascii_lowercase())
                    .collect(),
            })
    }
}
