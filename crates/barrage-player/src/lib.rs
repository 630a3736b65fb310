//! Barrage Player - windowed bullet pattern sandbox
//!
//! This crate provides the `SandboxApp` application handler, which drives a
//! `Sandbox` from a winit event loop and draws it with an egui overlay.

mod overlay;
mod render;
mod sandbox_app;

pub use overlay::OverlayAction;
pub use render::RenderContext;
pub use sandbox_app::SandboxApp;

use barrage_patterns::SandboxConfig;
use winit::event_loop::{ControlFlow, EventLoop};

/// Open the sandbox window and block until it closes
pub fn run(config: &SandboxConfig, fullscreen: bool) -> anyhow::Result<()> {
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = SandboxApp::new(config, fullscreen);
    event_loop.run_app(&mut app)?;

    Ok(())
}

/// Controls summary printed before the window opens
pub fn print_controls() {
    println!("Controls:");
    println!("  1-5      - Select pattern (circle, spiral, wave, burst, targeting)");
    println!("  P        - Load the current pattern's preset");
    println!("  C        - Clear projectiles");
    println!("  Mouse    - Aim the targeting pattern");
    println!("  Escape   - Exit");
}
