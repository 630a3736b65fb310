//! Read-only views of the sandbox for renderers and headless output

use crate::projectile::Projectile;
use crate::sandbox::SandboxStats;
use barrage_core::Vec2;
use serde::Serialize;

/// One projectile as a renderer sees it
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProjectileView {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f64,
}

impl From<&Projectile> for ProjectileView {
    fn from(p: &Projectile) -> Self {
        Self {
            position: p.position,
            velocity: p.velocity(),
            radius: p.radius(),
        }
    }
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, Serialize)]
pub struct FieldSnapshot {
    pub tick: u64,
    pub pattern: &'static str,
    pub origin: Vec2,
    /// Accumulated phase in degrees
    pub phase_angle: f64,
    /// Fraction of the cooldown elapsed, in [0, 1]
    pub cooldown_progress: f64,
    pub projectiles: Vec<ProjectileView>,
    pub stats: SandboxStats,
}

impl FieldSnapshot {
    pub fn projectile_count(&self) -> usize {
        self.projectiles.len()
    }
}
