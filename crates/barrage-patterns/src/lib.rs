//! Barrage Patterns - bullet pattern emitter and projectile field
//!
//! A `PatternEmitter` turns a `ParameterSet` into bursts of projectiles laid
//! out by one of five `PatternKind`s. Projectiles live in a capped
//! `ProjectileField` that moves and expires them. `Sandbox` sequences the
//! three as a single frame step and implements `RuntimeSystem`.

mod config;
mod emitter;
mod field;
mod params;
mod pattern;
mod projectile;
mod sandbox;
mod snapshot;

pub use config::{EmitterConfig, FieldConfig, SandboxConfig, WindowConfig};
pub use emitter::{PatternEmitter, PointerSource, BURST_SPEED_JITTER, WAVE_SPEED_RIPPLE};
pub use field::{ProjectileField, PruneStats, DEFAULT_CAPACITY};
pub use params::{
    ParamBounds, ParamField, ParameterSet, COOLDOWN_BOUNDS, COUNT_BOUNDS, ROTATION_BOUNDS,
    SPEED_BOUNDS, SPREAD_BOUNDS,
};
pub use pattern::PatternKind;
pub use projectile::{Projectile, DEFAULT_PROJECTILE_RADIUS, EXPIRY_RADIUS};
pub use sandbox::{Sandbox, SandboxEvent, SandboxStats};
pub use snapshot::{FieldSnapshot, ProjectileView};
