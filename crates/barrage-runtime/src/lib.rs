//! Barrage Runtime - Frame loop infrastructure
//!
//! Provides the building blocks the sandbox loop is sequenced with:
//! - `FrameClock` - wall-clock frame timing with a capped per-frame delta
//! - `InputState` - keyboard and pointer tracking with action bindings
//! - `EventBus` - typed event queue drained once per frame
//! - `RuntimeSystem` - trait for systems ticked by the frame loop

mod clock;
mod event_bus;
mod input;
mod system;

pub use clock::FrameClock;
pub use event_bus::EventBus;
pub use input::{InputState, PATTERN_ACTIONS};
pub use system::RuntimeSystem;
