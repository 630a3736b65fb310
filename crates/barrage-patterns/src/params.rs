//! Live-adjustable emitter parameters and their slider bounds

use barrage_core::{BarrageError, Result};
use serde::{Deserialize, Serialize};

/// Inclusive range a slider can take
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamBounds {
    pub min: f64,
    pub max: f64,
}

impl ParamBounds {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

pub const COUNT_BOUNDS: ParamBounds = ParamBounds::new(1.0, 20.0);
pub const SPEED_BOUNDS: ParamBounds = ParamBounds::new(50.0, 300.0);
pub const SPREAD_BOUNDS: ParamBounds = ParamBounds::new(0.0, 360.0);
pub const ROTATION_BOUNDS: ParamBounds = ParamBounds::new(0.0, 360.0);
pub const COOLDOWN_BOUNDS: ParamBounds = ParamBounds::new(0.05, 2.0);

/// One adjustable parameter, used to drive sliders and listings generically
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamField {
    Count,
    Speed,
    Spread,
    RotationRate,
    Cooldown,
}

impl ParamField {
    pub const ALL: [ParamField; 5] = [
        ParamField::Count,
        ParamField::Speed,
        ParamField::Spread,
        ParamField::RotationRate,
        ParamField::Cooldown,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ParamField::Count => "Bullet Count",
            ParamField::Speed => "Speed",
            ParamField::Spread => "Spread",
            ParamField::RotationRate => "Rotation",
            ParamField::Cooldown => "Cooldown",
        }
    }

    /// Key used in config files and error messages
    pub fn key(self) -> &'static str {
        match self {
            ParamField::Count => "count",
            ParamField::Speed => "speed",
            ParamField::Spread => "spread",
            ParamField::RotationRate => "rotation_rate",
            ParamField::Cooldown => "cooldown",
        }
    }

    pub fn bounds(self) -> ParamBounds {
        match self {
            ParamField::Count => COUNT_BOUNDS,
            ParamField::Speed => SPEED_BOUNDS,
            ParamField::Spread => SPREAD_BOUNDS,
            ParamField::RotationRate => ROTATION_BOUNDS,
            ParamField::Cooldown => COOLDOWN_BOUNDS,
        }
    }

    pub fn is_integer(self) -> bool {
        matches!(self, ParamField::Count)
    }
}

/// The five values the emitter reads every tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParameterSet {
    /// Projectiles per burst
    pub count: u32,
    /// Base projectile speed (units/second)
    pub speed: f64,
    /// Angular spread of a burst in degrees
    pub spread: f64,
    /// Phase rotation in degrees/second
    pub rotation_rate: f64,
    /// Seconds between bursts
    pub cooldown: f64,
}

impl Default for ParameterSet {
    fn default() -> Self {
        Self {
            count: 6,
            speed: 150.0,
            spread: 360.0,
            rotation_rate: 90.0,
            cooldown: 0.5,
        }
    }
}

impl ParameterSet {
    pub fn get(&self, field: ParamField) -> f64 {
        match field {
            ParamField::Count => self.count as f64,
            ParamField::Speed => self.speed,
            ParamField::Spread => self.spread,
            ParamField::RotationRate => self.rotation_rate,
            ParamField::Cooldown => self.cooldown,
        }
    }

    /// Set a field, truncating toward zero for the integer count
    pub fn set(&mut self, field: ParamField, value: f64) {
        match field {
            ParamField::Count => self.count = value.max(0.0) as u32,
            ParamField::Speed => self.speed = value,
            ParamField::Spread => self.spread = value,
            ParamField::RotationRate => self.rotation_rate = value,
            ParamField::Cooldown => self.cooldown = value,
        }
    }

    /// Copy with every value clamped into its slider bounds
    pub fn clamped(&self) -> Self {
        let mut out = *self;
        for field in ParamField::ALL {
            let bounds = field.bounds();
            let value = self.get(field);
            // f64::clamp passes NaN through
            let value = if value.is_nan() {
                bounds.min
            } else {
                bounds.clamp(value)
            };
            out.set(field, value);
        }
        out
    }

    /// Reject any value outside its slider bounds
    pub fn validate(&self) -> Result<()> {
        for field in ParamField::ALL {
            let bounds = field.bounds();
            let value = self.get(field);
            if !bounds.contains(value) {
                return Err(BarrageError::out_of_range(
                    format!("params.{}", field.key()),
                    bounds.min,
                    bounds.max,
                    value,
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_within_bounds() {
        let params = ParameterSet::default();
        assert!(params.validate().is_ok());
        assert_eq!(params, params.clamped());
    }

    #[test]
    fn clamped_pulls_values_into_range() {
        let params = ParameterSet {
            count: 0,
            speed: 1000.0,
            spread: -10.0,
            rotation_rate: 720.0,
            cooldown: 0.0,
        };
        let c = params.clamped();
        assert_eq!(c.count, 1);
        assert_eq!(c.speed, 300.0);
        assert_eq!(c.spread, 0.0);
        assert_eq!(c.rotation_rate, 360.0);
        assert_eq!(c.cooldown, 0.05);
    }

    #[test]
    fn nan_clamps_to_minimum() {
        let params = ParameterSet {
            speed: f64::NAN,
            ..Default::default()
        };
        assert_eq!(params.clamped().speed, SPEED_BOUNDS.min);
    }

    #[test]
    fn validate_names_offending_field() {
        let params = ParameterSet {
            count: 21,
            ..Default::default()
        };
        let err = params.validate().unwrap_err();
        match err {
            BarrageError::ValueOutOfRange { field, min, max, value } => {
                assert_eq!(field, "params.count");
                assert_eq!((min, max, value), (1.0, 20.0, 21.0));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn set_truncates_count() {
        let mut params = ParameterSet::default();
        params.set(ParamField::Count, 7.9);
        assert_eq!(params.count, 7);
        params.set(ParamField::Count, -3.0);
        assert_eq!(params.count, 0);
    }

    #[test]
    fn field_table_is_consistent() {
        for field in ParamField::ALL {
            let b = field.bounds();
            assert!(b.min < b.max, "{} bounds inverted", field.label());
        }
        assert!(ParamField::Count.is_integer());
        assert!(!ParamField::Cooldown.is_integer());
    }
}
