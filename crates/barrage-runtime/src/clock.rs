//! Frame clock with a capped per-frame delta

use std::time::Instant;

/// Tracks wall time between frames and hands out the frame delta
///
/// The delta is capped at one nominal frame interval, so a stalled frame
/// (window drag, breakpoint) never advances the simulation by more than
/// one frame's worth of time.
pub struct FrameClock {
    /// Total simulated time in seconds (sum of capped deltas)
    pub total_time: f64,
    /// Delta of the most recent frame in seconds
    pub delta_time: f64,
    /// Nominal frame interval (default: 1/60 second)
    pub frame_interval: f64,
    /// Frames advanced so far
    pub frame_count: u64,
    /// Last tick instant
    last_instant: Instant,
    /// Whether this is the first tick
    first_tick: bool,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self {
            total_time: 0.0,
            delta_time: 0.0,
            frame_interval: 1.0 / 60.0,
            frame_count: 0,
            last_instant: Instant::now(),
            first_tick: true,
        }
    }
}

impl FrameClock {
    /// Create a new frame clock targeting 60Hz
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a frame clock targeting a custom rate
    pub fn with_target_rate(hz: f64) -> Self {
        Self {
            frame_interval: 1.0 / hz.max(1.0),
            ..Self::default()
        }
    }

    /// Advance the clock from the wall clock. Call once per frame.
    ///
    /// Returns the frame delta in seconds.
    pub fn tick(&mut self) -> f64 {
        let now = Instant::now();

        if self.first_tick {
            self.first_tick = false;
            self.last_instant = now;
            self.delta_time = 0.0;
            return 0.0;
        }

        let elapsed = now.duration_since(self.last_instant).as_secs_f64();
        self.last_instant = now;
        self.advance_by(elapsed)
    }

    /// Advance the clock by an explicit elapsed time (seconds).
    ///
    /// Returns the capped frame delta.
    pub fn advance_by(&mut self, elapsed: f64) -> f64 {
        self.first_tick = false;
        self.delta_time = elapsed.clamp(0.0, self.frame_interval);
        self.total_time += self.delta_time;
        self.frame_count += 1;
        self.delta_time
    }

    /// Target frame rate in Hz
    pub fn target_rate(&self) -> f64 {
        1.0 / self.frame_interval
    }
}
