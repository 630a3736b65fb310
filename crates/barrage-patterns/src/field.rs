//! Ordered, capped collection of live projectiles

use crate::projectile::{Projectile, EXPIRY_RADIUS};

/// Maximum number of projectiles kept after a prune pass
pub const DEFAULT_CAPACITY: usize = 1500;

/// What a single `prune_and_cap` pass removed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PruneStats {
    /// Removed for travelling past the expiry radius
    pub expired: usize,
    /// Removed by the capacity cap
    pub capped: usize,
}

impl PruneStats {
    pub fn total(&self) -> usize {
        self.expired + self.capped
    }
}

/// The projectile collection, kept in spawn order
pub struct ProjectileField {
    projectiles: Vec<Projectile>,
    capacity: usize,
    expiry_radius: f64,
}

impl ProjectileField {
    pub fn new(capacity: usize, expiry_radius: f64) -> Self {
        Self {
            projectiles: Vec::with_capacity(capacity),
            capacity,
            expiry_radius,
        }
    }

    /// Append to the end (spawn order)
    pub fn add(&mut self, projectile: Projectile) {
        self.projectiles.push(projectile);
    }

    /// Advance every projectile by `dt`
    pub fn advance_all(&mut self, dt: f64) {
        for p in &mut self.projectiles {
            p.advance(dt);
        }
    }

    /// Remove expired projectiles, then keep only the first `capacity`
    /// survivors in their current order.
    ///
    /// The cap drops the newest entries: earlier-indexed survivors win.
    pub fn prune_and_cap(&mut self) -> PruneStats {
        let radius = self.expiry_radius;
        for p in &mut self.projectiles {
            if p.is_beyond(radius) {
                p.active = false;
            }
        }

        let before = self.projectiles.len();
        self.projectiles.retain(|p| p.active);
        let expired = before - self.projectiles.len();

        let capped = self.projectiles.len().saturating_sub(self.capacity);
        self.projectiles.truncate(self.capacity);

        PruneStats { expired, capped }
    }

    /// Drop every projectile
    pub fn clear(&mut self) {
        self.projectiles.clear();
    }

    pub fn len(&self) -> usize {
        self.projectiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projectiles.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn as_slice(&self) -> &[Projectile] {
        &self.projectiles
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Projectile> {
        self.projectiles.iter()
    }
}

impl Default for ProjectileField {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY, EXPIRY_RADIUS)
    }
}

impl<'a> IntoIterator for &'a ProjectileField {
    type Item = &'a Projectile;
    type IntoIter = std::slice::Iter<'a, Projectile>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
