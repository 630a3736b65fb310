//! Barrage Core - Foundational types for the Barrage pattern sandbox
//!
//! This crate provides the core types that all other Barrage crates depend on:
//! - `Vec2` - Planar vector used for positions, velocities, and pointer coordinates
//! - `Color` - RGBA color shared by the sandbox palette and the renderer
//! - Error types and Result alias

mod error;
mod types;

pub use error::{BarrageError, Result};
pub use types::{Color, Vec2};
