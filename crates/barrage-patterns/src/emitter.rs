//! Pattern emitter: phase state and the per-pattern burst algorithms

use crate::field::ProjectileField;
use crate::params::ParameterSet;
use crate::pattern::PatternKind;
use crate::projectile::{Projectile, DEFAULT_PROJECTILE_RADIUS};
use barrage_core::Vec2;
use barrage_runtime::InputState;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Burst pattern speed jitter (units/second, either direction)
pub const BURST_SPEED_JITTER: f64 = 40.0;

/// Wave pattern speed ripple amplitude (units/second)
pub const WAVE_SPEED_RIPPLE: f64 = 20.0;

/// Slack on the cooldown comparison. Summing 1/60 thirty times lands a few
/// ulps under 0.5, and that must still count as a full cooldown.
const COOLDOWN_EPSILON: f64 = 1e-9;

/// Anything that can report where the pointer is, in the emitter's space
pub trait PointerSource {
    fn pointer_position(&self) -> Vec2;
}

impl PointerSource for Vec2 {
    fn pointer_position(&self) -> Vec2 {
        *self
    }
}

impl PointerSource for InputState {
    fn pointer_position(&self) -> Vec2 {
        InputState::pointer_position(self)
    }
}

/// Spawns bursts of projectiles from a fixed origin
pub struct PatternEmitter {
    kind: PatternKind,
    /// Accumulated rotation in degrees; never wrapped, trig does that
    phase_angle: f64,
    /// Seconds since the last burst
    time_since_spawn: f64,
    origin: Vec2,
    projectile_radius: f64,
    rng: ChaCha8Rng,
}

impl PatternEmitter {
    pub fn new(origin: Vec2, projectile_radius: f64, seed: u64) -> Self {
        Self {
            kind: PatternKind::default(),
            phase_angle: 0.0,
            time_since_spawn: 0.0,
            origin,
            projectile_radius,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Switch pattern. Every projectile already in flight is discarded.
    pub fn set_pattern(&mut self, kind: PatternKind, field: &mut ProjectileField) {
        self.kind = kind;
        field.clear();
    }

    /// Advance phase and cooldown by `dt`, firing a burst when the cooldown
    /// has elapsed.
    ///
    /// Returns the number of projectiles spawned if a burst fired this tick.
    pub fn tick(
        &mut self,
        dt: f64,
        params: &ParameterSet,
        field: &mut ProjectileField,
        pointer: &dyn PointerSource,
    ) -> Option<usize> {
        self.phase_angle += params.rotation_rate * dt;
        self.time_since_spawn += dt;

        if self.time_since_spawn + COOLDOWN_EPSILON >= params.cooldown {
            let spawned = self.spawn_burst(params, field, pointer);
            // Full reset: overshoot past the cooldown is not carried over
            self.time_since_spawn = 0.0;
            Some(spawned)
        } else {
            None
        }
    }

    /// Append one burst of `params.count` projectiles to `field`.
    ///
    /// Returns how many were spawned.
    pub fn spawn_burst(
        &mut self,
        params: &ParameterSet,
        field: &mut ProjectileField,
        pointer: &dyn PointerSource,
    ) -> usize {
        let count = params.count;
        if count == 0 {
            return 0;
        }

        let step = self.angular_step(params);
        let aim = match self.kind {
            PatternKind::Targeting => self.origin.angle_to(&pointer.pointer_position()),
            _ => 0.0,
        };
        let phase_rad = self.phase_angle.to_radians();

        for i in 0..count {
            let fi = i as f64;

            let angle = match self.kind {
                PatternKind::Targeting => {
                    aim - (params.spread / 2.0).to_radians() + fi * step.to_radians()
                }
                _ => (fi * step + self.phase_angle).to_radians(),
            };

            let speed = match self.kind {
                PatternKind::Burst => {
                    params.speed + self.rng.gen_range(-BURST_SPEED_JITTER..=BURST_SPEED_JITTER)
                }
                PatternKind::Wave => params.speed + (phase_rad * 2.0 + fi).sin() * WAVE_SPEED_RIPPLE,
                _ => params.speed,
            };

            field.add(Projectile::spawn(
                self.origin,
                Vec2::from_angle(angle) * speed,
                self.projectile_radius,
            ));
        }

        count as usize
    }

    /// Degrees between neighbouring projectiles of one burst
    pub fn angular_step(&self, params: &ParameterSet) -> f64 {
        let n = params.count as f64;
        if self.kind.spans_inclusive() {
            params.spread / (n - 1.0).max(1.0)
        } else {
            params.spread / n.max(1.0)
        }
    }

    /// Fraction of the cooldown elapsed since the last burst, in [0, 1]
    pub fn cooldown_progress(&self, params: &ParameterSet) -> f64 {
        if params.cooldown <= 0.0 {
            return 1.0;
        }
        (self.time_since_spawn / params.cooldown).clamp(0.0, 1.0)
    }

    pub fn kind(&self) -> PatternKind {
        self.kind
    }

    pub fn phase_angle(&self) -> f64 {
        self.phase_angle
    }

    pub fn time_since_spawn(&self) -> f64 {
        self.time_since_spawn
    }

    pub fn origin(&self) -> Vec2 {
        self.origin
    }
}

impl Default for PatternEmitter {
    fn default() -> Self {
        Self::new(Vec2::new(400.0, 350.0), DEFAULT_PROJECTILE_RADIUS, 42)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORIGIN: Vec2 = Vec2::new(400.0, 350.0);

    fn emitter(kind: PatternKind) -> (PatternEmitter, ProjectileField) {
        let mut emitter = PatternEmitter::new(ORIGIN, 5.0, 7);
        let mut field = ProjectileField::default();
        emitter.set_pattern(kind, &mut field);
        (emitter, field)
    }

    fn params(count: u32, spread: f64) -> ParameterSet {
        ParameterSet {
            count,
            speed: 150.0,
            spread,
            rotation_rate: 0.0,
            cooldown: 0.5,
        }
    }

    /// Signed difference a - b in degrees, folded into (-180, 180]
    fn angle_diff_deg(a: f64, b: f64) -> f64 {
        let d = (a - b).rem_euclid(360.0);
        if d > 180.0 {
            d - 360.0
        } else {
            d
        }
    }

    fn headings_deg(field: &ProjectileField) -> Vec<f64> {
        field.iter().map(|p| p.heading().to_degrees()).collect()
    }

    #[test]
    fn every_pattern_spawns_exactly_count() {
        let pointer = Vec2::new(600.0, 100.0);
        for kind in PatternKind::ALL {
            for count in 1..=20 {
                let (mut e, mut field) = emitter(kind);
                let spawned = e.spawn_burst(&params(count, 360.0), &mut field, &pointer);
                assert_eq!(spawned, count as usize, "{kind} count {count}");
                assert_eq!(field.len(), count as usize, "{kind} count {count}");
                assert!(field.iter().all(|p| p.position == ORIGIN));
            }
        }
    }

    #[test]
    fn ring_patterns_split_full_circle_without_repeat() {
        for kind in [PatternKind::Circle, PatternKind::Spiral, PatternKind::Burst] {
            for n in [1u32, 3, 6, 20] {
                let (mut e, mut field) = emitter(kind);
                e.spawn_burst(&params(n, 360.0), &mut field, &ORIGIN);
                let headings = headings_deg(&field);
                let expected_step = 360.0 / n as f64;
                for (i, h) in headings.iter().enumerate() {
                    let expected = i as f64 * expected_step;
                    assert!(
                        angle_diff_deg(*h, expected).abs() < 1e-9,
                        "{kind} n={n} i={i}: {h} vs {expected}"
                    );
                }
                if n > 1 {
                    // Last one stops a full step short of wrapping onto the first
                    let gap = angle_diff_deg(headings[0], headings[n as usize - 1]);
                    assert!((gap - expected_step).abs() < 1e-9, "{kind} n={n}");
                }
            }
        }
    }

    #[test]
    fn ring_step_is_exclusive_for_partial_spread() {
        let (mut e, mut field) = emitter(PatternKind::Circle);
        e.spawn_burst(&params(4, 90.0), &mut field, &ORIGIN);
        let headings = headings_deg(&field);
        // 90 / 4 = 22.5, so the last lands at 67.5 rather than 90
        assert!(angle_diff_deg(headings[3], 67.5).abs() < 1e-9);
    }

    #[test]
    fn wave_spans_spread_inclusively() {
        for n in [2u32, 4, 7, 20] {
            let (mut e, mut field) = emitter(PatternKind::Wave);
            e.spawn_burst(&params(n, 60.0), &mut field, &ORIGIN);
            let headings = headings_deg(&field);
            let step = 60.0 / (n - 1) as f64;
            for pair in headings.windows(2) {
                assert!((angle_diff_deg(pair[1], pair[0]) - step).abs() < 1e-9);
            }
            let span = angle_diff_deg(headings[n as usize - 1], headings[0]);
            assert!((span - 60.0).abs() < 1e-9, "n={n} span={span}");
        }
    }

    #[test]
    fn targeting_spans_spread_inclusively() {
        let pointer = Vec2::new(400.0, 600.0);
        for n in [2u32, 5, 9] {
            let (mut e, mut field) = emitter(PatternKind::Targeting);
            e.spawn_burst(&params(n, 90.0), &mut field, &pointer);
            let headings = headings_deg(&field);
            let step = 90.0 / (n - 1) as f64;
            for pair in headings.windows(2) {
                assert!((angle_diff_deg(pair[1], pair[0]) - step).abs() < 1e-9);
            }
            let span = angle_diff_deg(headings[n as usize - 1], headings[0]);
            assert!((span - 90.0).abs() < 1e-9);
        }
    }

    #[test]
    fn single_projectile_never_divides_by_zero() {
        let pointer = Vec2::new(500.0, 350.0);
        for kind in PatternKind::ALL {
            for spread in [0.0, 45.0, 360.0] {
                let (mut e, mut field) = emitter(kind);
                e.spawn_burst(&params(1, spread), &mut field, &pointer);
                assert_eq!(field.len(), 1);
                let v = field.as_slice()[0].velocity();
                assert!(v.x.is_finite() && v.y.is_finite(), "{kind} spread {spread}");
                assert!(e.angular_step(&params(1, spread)).is_finite());
            }
        }
    }

    #[test]
    fn zero_count_spawns_nothing() {
        for kind in PatternKind::ALL {
            let (mut e, mut field) = emitter(kind);
            assert_eq!(e.spawn_burst(&params(0, 360.0), &mut field, &ORIGIN), 0);
            assert!(field.is_empty());
        }
    }

    #[test]
    fn set_pattern_clears_field() {
        let (mut e, mut field) = emitter(PatternKind::Circle);
        e.spawn_burst(&params(12, 360.0), &mut field, &ORIGIN);
        e.spawn_burst(&params(12, 360.0), &mut field, &ORIGIN);
        assert_eq!(field.len(), 24);

        e.set_pattern(PatternKind::Wave, &mut field);
        assert!(field.is_empty());
        assert_eq!(e.kind(), PatternKind::Wave);

        // Re-selecting the same pattern still resets
        e.spawn_burst(&params(3, 60.0), &mut field, &ORIGIN);
        e.set_pattern(PatternKind::Wave, &mut field);
        assert!(field.is_empty());
    }

    #[test]
    fn cooldown_fires_once_after_thirty_ticks() {
        let (mut e, mut field) = emitter(PatternKind::Circle);
        let p = params(6, 360.0);
        let dt = 1.0 / 60.0;

        let mut bursts = 0;
        for tick in 1..=30 {
            if e.tick(dt, &p, &mut field, &ORIGIN).is_some() {
                bursts += 1;
                assert_eq!(tick, 30, "burst fired early");
            }
        }
        assert_eq!(bursts, 1);
        assert_eq!(e.time_since_spawn(), 0.0);
        assert_eq!(field.len(), 6);
    }

    #[test]
    fn cooldown_resets_fully_instead_of_carrying_over() {
        let (mut e, mut field) = emitter(PatternKind::Circle);
        let p = params(1, 0.0);

        // Overshoot the 0.5s cooldown by 0.2s in one step
        assert_eq!(e.tick(0.7, &p, &mut field, &ORIGIN), Some(1));
        assert_eq!(e.time_since_spawn(), 0.0);
        // The overshoot is forgotten, so 0.4s later nothing fires yet
        assert_eq!(e.tick(0.4, &p, &mut field, &ORIGIN), None);
        assert!((e.time_since_spawn() - 0.4).abs() < 1e-12);
        assert!((e.cooldown_progress(&p) - 0.8).abs() < 1e-12);
    }

    #[test]
    fn phase_advances_with_rotation_rate() {
        let (mut e, mut field) = emitter(PatternKind::Spiral);
        let p = ParameterSet {
            rotation_rate: 90.0,
            cooldown: 2.0,
            ..params(4, 0.0)
        };
        for _ in 0..60 {
            e.tick(1.0 / 60.0, &p, &mut field, &ORIGIN);
        }
        assert!((e.phase_angle() - 90.0).abs() < 1e-9);

        // Negative rates are tolerated and rewind the phase
        let back = ParameterSet {
            rotation_rate: -45.0,
            ..p
        };
        e.tick(1.0, &back, &mut field, &ORIGIN);
        assert!((e.phase_angle() - 45.0).abs() < 1e-9);
    }

    #[test]
    fn spiral_bursts_follow_phase() {
        let (mut e, mut field) = emitter(PatternKind::Spiral);
        let p = ParameterSet {
            rotation_rate: 180.0,
            cooldown: 0.25,
            ..params(1, 0.0)
        };
        e.tick(0.25, &p, &mut field, &ORIGIN);
        e.tick(0.25, &p, &mut field, &ORIGIN);
        let headings = headings_deg(&field);
        assert!(angle_diff_deg(headings[0], 45.0).abs() < 1e-9);
        assert!(angle_diff_deg(headings[1], 90.0).abs() < 1e-9);
    }

    #[test]
    fn burst_speeds_stay_within_jitter() {
        let (mut e, mut field) = emitter(PatternKind::Burst);
        for _ in 0..50 {
            e.spawn_burst(&params(6, 360.0), &mut field, &ORIGIN);
        }
        assert_eq!(field.len(), 300);
        for p in &field {
            let s = p.speed();
            assert!((110.0 - 1e-9..=190.0 + 1e-9).contains(&s), "speed {s}");
        }
        // With 300 draws the speeds are not all identical
        let first = field.as_slice()[0].speed();
        assert!(field.iter().any(|p| (p.speed() - first).abs() > 1e-6));
    }

    #[test]
    fn burst_is_deterministic_for_a_seed() {
        let run = || {
            let mut e = PatternEmitter::new(ORIGIN, 5.0, 99);
            let mut field = ProjectileField::default();
            e.set_pattern(PatternKind::Burst, &mut field);
            e.spawn_burst(&params(8, 360.0), &mut field, &ORIGIN);
            field.iter().map(|p| p.speed()).collect::<Vec<_>>()
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn wave_speed_ripples_by_index() {
        let (mut e, mut field) = emitter(PatternKind::Wave);
        e.spawn_burst(&params(5, 60.0), &mut field, &ORIGIN);
        for (i, p) in field.iter().enumerate() {
            let expected = 150.0 + (i as f64).sin() * WAVE_SPEED_RIPPLE;
            assert!((p.speed() - expected).abs() < 1e-9, "i={i}");
        }
    }

    #[test]
    fn wave_ripple_travels_with_phase() {
        let (mut e, mut field) = emitter(PatternKind::Wave);
        let p = ParameterSet {
            rotation_rate: 90.0,
            cooldown: 2.0,
            ..params(5, 60.0)
        };
        assert_eq!(e.tick(0.5, &p, &mut field, &ORIGIN), None);
        assert!((e.phase_angle() - 45.0).abs() < 1e-9);

        e.spawn_burst(&p, &mut field, &ORIGIN);
        assert_eq!(field.len(), 5);
        let phase_rad = 45.0f64.to_radians();
        for (i, proj) in field.iter().enumerate() {
            let expected = 150.0 + (phase_rad * 2.0 + i as f64).sin() * WAVE_SPEED_RIPPLE;
            assert!((proj.speed() - expected).abs() < 1e-9, "i={i}");
        }
        // The first projectile sits at the crest rather than the zero crossing
        assert!((field.as_slice()[0].speed() - 170.0).abs() < 1e-9);
    }

    #[test]
    fn non_random_patterns_keep_base_speed() {
        let pointer = Vec2::new(0.0, 0.0);
        for kind in [PatternKind::Circle, PatternKind::Spiral, PatternKind::Targeting] {
            let (mut e, mut field) = emitter(kind);
            e.spawn_burst(&params(7, 120.0), &mut field, &pointer);
            assert!(field.iter().all(|p| (p.speed() - 150.0).abs() < 1e-9));
        }
    }

    #[test]
    fn targeting_fans_around_pointer() {
        let (mut e, mut field) = emitter(PatternKind::Targeting);
        let pointer = Vec2::new(500.0, 350.0);
        e.spawn_burst(&params(3, 60.0), &mut field, &pointer);

        let headings = headings_deg(&field);
        let expected = [-30.0, 0.0, 30.0];
        for (h, want) in headings.iter().zip(expected) {
            assert!(angle_diff_deg(*h, want).abs() < 1e-9, "{h} vs {want}");
        }
    }

    #[test]
    fn targeting_ignores_phase() {
        let (mut e, mut field) = emitter(PatternKind::Targeting);
        let p = ParameterSet {
            rotation_rate: 360.0,
            ..params(1, 0.0)
        };
        e.tick(0.25, &p, &mut field, &Vec2::new(400.0, 450.0));
        e.spawn_burst(&p, &mut field, &Vec2::new(400.0, 450.0));
        let h = field.as_slice()[0].heading().to_degrees();
        assert!(angle_diff_deg(h, 90.0).abs() < 1e-9);
    }

    #[test]
    fn input_state_is_a_pointer_source() {
        let mut input = InputState::new();
        input.process_mouse_move(500.0, 350.0);
        let (mut e, mut field) = emitter(PatternKind::Targeting);
        e.spawn_burst(&params(1, 0.0), &mut field, &input);
        assert!(field.as_slice()[0].heading().abs() < 1e-12);
    }
}
