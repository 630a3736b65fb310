//! Runtime system trait

use crate::input::InputState;
use barrage_core::Result;

/// A system that can be ticked by the frame loop
///
/// `fixed_update` runs the simulation step for one frame (input already
/// collected), `update` runs presentation-side bookkeeping afterwards.
pub trait RuntimeSystem {
    /// Called once before the first frame
    fn initialize(&mut self) -> Result<()>;

    /// Called once per frame with the frame's delta time
    fn fixed_update(&mut self, input: &InputState, dt: f64) -> Result<()>;

    /// Called once per frame after `fixed_update`
    fn update(&mut self, input: &InputState, dt: f64) -> Result<()>;

    /// Called when the loop exits
    fn shutdown(&mut self) -> Result<()>;

    /// Human-readable name for this system
    fn name(&self) -> &str;
}
