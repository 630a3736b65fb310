//! Projectile: a moving disc spawned by the emitter

use barrage_core::Vec2;

/// Distance from the emitter origin beyond which a projectile expires
pub const EXPIRY_RADIUS: f64 = 2000.0;

/// Radius given to spawned projectiles unless configured otherwise
pub const DEFAULT_PROJECTILE_RADIUS: f64 = 5.0;

/// A single projectile in the field
#[derive(Debug, Clone, PartialEq)]
pub struct Projectile {
    pub position: Vec2,
    /// Fixed at spawn
    velocity: Vec2,
    /// Fixed at spawn
    radius: f64,
    /// Emitter centre the projectile was spawned from
    origin: Vec2,
    pub active: bool,
}

impl Projectile {
    /// A fresh projectile sitting on its origin
    pub fn spawn(origin: Vec2, velocity: Vec2, radius: f64) -> Self {
        Self {
            position: origin,
            velocity,
            radius,
            origin,
            active: true,
        }
    }

    /// position += velocity * dt
    pub fn advance(&mut self, dt: f64) {
        self.position += self.velocity * dt;
    }

    /// True once the projectile is more than `EXPIRY_RADIUS` from its origin
    pub fn is_expired(&self) -> bool {
        self.is_beyond(EXPIRY_RADIUS)
    }

    /// True if the projectile is strictly farther than `radius` from its origin
    pub fn is_beyond(&self, radius: f64) -> bool {
        self.position.distance_to(&self.origin) > radius
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn speed(&self) -> f64 {
        self.velocity.length()
    }

    /// Direction of travel in radians
    pub fn heading(&self) -> f64 {
        self.velocity.angle()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_integrates_velocity() {
        let mut p = Projectile::spawn(Vec2::new(400.0, 350.0), Vec2::new(60.0, -30.0), 5.0);
        p.advance(0.5);
        assert_eq!(p.position, Vec2::new(430.0, 335.0));
        p.advance(0.0);
        assert_eq!(p.position, Vec2::new(430.0, 335.0));
        assert_eq!(p.velocity(), Vec2::new(60.0, -30.0));
    }

    #[test]
    fn expiry_boundary_is_exclusive() {
        let origin = Vec2::new(400.0, 350.0);
        let mut p = Projectile::spawn(origin, Vec2::new(1.0, 0.0), 5.0);

        p.position = origin + Vec2::new(EXPIRY_RADIUS, 0.0);
        assert!(!p.is_expired(), "exactly 2000 units away is still live");

        p.position = origin + Vec2::new(EXPIRY_RADIUS + 0.001, 0.0);
        assert!(p.is_expired());

        p.position = origin + Vec2::new(0.0, -1999.0);
        assert!(!p.is_expired());
    }

    #[test]
    fn expiry_is_measured_from_origin() {
        let origin = Vec2::new(400.0, 350.0);
        let mut p = Projectile::spawn(origin, Vec2::ZERO, 5.0);
        // Past 2000 from the window corner but only 1700 from the emitter
        p.position = Vec2::new(2100.0, 350.0);
        assert!(!p.is_expired());
    }

    #[test]
    fn speed_and_heading() {
        let p = Projectile::spawn(Vec2::ZERO, Vec2::new(0.0, 150.0), 5.0);
        assert!((p.speed() - 150.0).abs() < 1e-12);
        assert!((p.heading() - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
        assert!(p.active);
        assert_eq!(p.radius(), 5.0);
    }
}
