//! The sandbox: parameters, emitter and field sequenced as one frame step

use crate::config::SandboxConfig;
use crate::emitter::{PatternEmitter, PointerSource};
use crate::field::{ProjectileField, PruneStats};
use crate::params::ParameterSet;
use crate::pattern::PatternKind;
use crate::snapshot::{FieldSnapshot, ProjectileView};
use barrage_core::Result;
use barrage_runtime::{EventBus, InputState, RuntimeSystem};
use serde::Serialize;

/// Something that happened during a frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SandboxEvent {
    PatternChanged { from: PatternKind, to: PatternKind },
    BurstSpawned { pattern: PatternKind, count: usize },
    ProjectilesCulled { expired: usize, capped: usize },
}

/// Running totals since the sandbox was created
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SandboxStats {
    pub ticks: u64,
    pub bursts: u64,
    pub spawned: u64,
    pub expired: u64,
    pub capped: u64,
}

pub struct Sandbox {
    params: ParameterSet,
    emitter: PatternEmitter,
    field: ProjectileField,
    events: EventBus<SandboxEvent>,
    stats: SandboxStats,
}

impl Sandbox {
    pub fn new(config: &SandboxConfig) -> Self {
        let mut field = ProjectileField::new(config.field.capacity, config.field.expiry_radius);
        let mut emitter = PatternEmitter::new(
            config.emitter.origin,
            config.emitter.projectile_radius,
            config.seed,
        );
        emitter.set_pattern(config.pattern, &mut field);

        Self {
            params: config.params.clamped(),
            emitter,
            field,
            events: EventBus::new(),
            stats: SandboxStats::default(),
        }
    }

    /// Switch pattern, discarding every projectile in flight
    pub fn select_pattern(&mut self, kind: PatternKind) {
        let from = self.emitter.kind();
        let discarded = self.field.len();
        self.emitter.set_pattern(kind, &mut self.field);
        tracing::info!(pattern = kind.name(), discarded, "pattern selected");
        self.events.push(SandboxEvent::PatternChanged { from, to: kind });
    }

    /// Load the tuned parameters for `kind` and select it
    pub fn apply_preset(&mut self, kind: PatternKind) {
        self.params = kind.preset().clamped();
        tracing::debug!(pattern = kind.name(), params = ?self.params, "preset applied");
        self.select_pattern(kind);
    }

    /// Drop every projectile without changing pattern
    pub fn clear_field(&mut self) {
        self.field.clear();
    }

    /// Run one frame: emitter tick, then move, then prune.
    ///
    /// Returns the burst size if the emitter fired this frame.
    pub fn step(&mut self, dt: f64, pointer: &dyn PointerSource) -> Option<usize> {
        self.params = self.params.clamped();

        let fired = self
            .emitter
            .tick(dt, &self.params, &mut self.field, pointer);
        if let Some(count) = fired {
            self.stats.bursts += 1;
            self.stats.spawned += count as u64;
            tracing::trace!(pattern = self.emitter.kind().name(), count, "burst");
            self.events.push(SandboxEvent::BurstSpawned {
                pattern: self.emitter.kind(),
                count,
            });
        }

        self.field.advance_all(dt);

        let PruneStats { expired, capped } = self.field.prune_and_cap();
        if expired > 0 || capped > 0 {
            self.stats.expired += expired as u64;
            self.stats.capped += capped as u64;
            if capped > 0 {
                tracing::debug!(capped, capacity = self.field.capacity(), "field over capacity");
            }
            self.events
                .push(SandboxEvent::ProjectilesCulled { expired, capped });
        }

        self.stats.ticks += 1;
        fired
    }

    /// Apply pattern, preset and clear actions pressed this frame
    pub fn apply_input(&mut self, input: &InputState) {
        if let Some(kind) = input.pattern_selected().and_then(PatternKind::from_index) {
            self.select_pattern(kind);
        }
        if input.is_action_just_pressed("preset") {
            self.apply_preset(self.emitter.kind());
        }
        if input.is_action_just_pressed("clear") {
            self.clear_field();
        }
    }

    pub fn field_snapshot(&self) -> FieldSnapshot {
        FieldSnapshot {
            tick: self.stats.ticks,
            pattern: self.current_pattern_name(),
            origin: self.emitter.origin(),
            phase_angle: self.emitter.phase_angle(),
            cooldown_progress: self.emitter.cooldown_progress(&self.params),
            projectiles: self.field.iter().map(ProjectileView::from).collect(),
            stats: self.stats,
        }
    }

    pub fn current_pattern_name(&self) -> &'static str {
        self.emitter.kind().name()
    }

    pub fn kind(&self) -> PatternKind {
        self.emitter.kind()
    }

    pub fn params(&self) -> &ParameterSet {
        &self.params
    }

    /// Mutable parameters for the slider panel; clamped again on the next step
    pub fn params_mut(&mut self) -> &mut ParameterSet {
        &mut self.params
    }

    pub fn emitter(&self) -> &PatternEmitter {
        &self.emitter
    }

    pub fn field(&self) -> &ProjectileField {
        &self.field
    }

    pub fn stats(&self) -> SandboxStats {
        self.stats
    }

    pub fn drain_events(&mut self) -> Vec<SandboxEvent> {
        self.events.drain()
    }
}

impl RuntimeSystem for Sandbox {
    fn initialize(&mut self) -> Result<()> {
        tracing::info!(
            pattern = self.current_pattern_name(),
            capacity = self.field.capacity(),
            "sandbox ready"
        );
        Ok(())
    }

    fn fixed_update(&mut self, input: &InputState, dt: f64) -> Result<()> {
        self.apply_input(input);
        self.step(dt, input);
        Ok(())
    }

    fn update(&mut self, _input: &InputState, _dt: f64) -> Result<()> {
        for event in self.events.drain() {
            tracing::trace!(?event, "sandbox event");
        }
        Ok(())
    }

    fn shutdown(&mut self) -> Result<()> {
        let s = self.stats;
        tracing::info!(
            ticks = s.ticks,
            bursts = s.bursts,
            spawned = s.spawned,
            expired = s.expired,
            capped = s.capped,
            "sandbox shut down"
        );
        Ok(())
    }

    fn name(&self) -> &str {
        "sandbox"
    }
}
