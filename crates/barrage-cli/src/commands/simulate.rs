//! Simulate command - runs the sandbox headless for a fixed number of ticks

use anyhow::{Context, Result};
use barrage_core::Vec2;
use barrage_patterns::{PatternKind, Sandbox, SandboxStats};
use barrage_runtime::{FrameClock, RuntimeSystem};
use std::path::PathBuf;

pub struct SimulateArgs {
    pub config: Option<PathBuf>,
    pub pattern: Option<PatternKind>,
    pub ticks: u64,
    pub dt: Option<f64>,
    pub pointer: Option<[f64; 2]>,
    pub seed: Option<u64>,
    pub format: String,
}

pub fn run(args: SimulateArgs) -> Result<()> {
    let json = match args.format.as_str() {
        "text" => false,
        "json" => true,
        other => anyhow::bail!("Unknown format '{other}' (expected text or json)"),
    };

    let mut config = super::load_config(args.config.as_deref(), args.pattern)?;
    if let Some(seed) = args.seed {
        config.seed = seed;
    }

    // Deltas larger than one frame are capped, as in the windowed loop
    let mut clock = FrameClock::with_target_rate(config.tick_rate);
    let requested_dt = args.dt.unwrap_or(clock.frame_interval);
    if requested_dt.is_nan() || requested_dt <= 0.0 {
        anyhow::bail!("--dt must be positive, got {requested_dt}");
    }
    if requested_dt > clock.frame_interval {
        tracing::warn!(
            requested_dt,
            cap = clock.frame_interval,
            "dt exceeds one frame at the configured tick rate and will be capped"
        );
    }

    let pointer = args
        .pointer
        .map(Vec2::from)
        .unwrap_or(config.emitter.origin + Vec2::new(100.0, 0.0));

    let mut sandbox = Sandbox::new(&config);
    sandbox.initialize().context("Failed to initialize sandbox")?;

    let report_every = (1.0 / requested_dt.min(clock.frame_interval)).round().max(1.0) as u64;
    if !json {
        println!(
            "Simulating {} for {} ticks (dt {:.4}s, pointer [{}, {}])",
            config.pattern, args.ticks, requested_dt, pointer.x, pointer.y
        );
    }

    for tick in 1..=args.ticks {
        let dt = clock.advance_by(requested_dt);
        sandbox.step(dt, &pointer);
        sandbox.drain_events();

        if !json && tick % report_every == 0 {
            print_stats_line(clock.total_time, sandbox.field().len(), sandbox.stats());
        }
    }

    sandbox.shutdown().context("Failed to shut down sandbox")?;

    if json {
        let snapshot = sandbox.field_snapshot();
        println!(
            "{}",
            serde_json::to_string_pretty(&snapshot).context("Failed to serialize snapshot")?
        );
    } else {
        println!();
        println!("Final:");
        print_stats_line(clock.total_time, sandbox.field().len(), sandbox.stats());
    }

    Ok(())
}

fn print_stats_line(time: f64, live: usize, stats: SandboxStats) {
    println!(
        "  t={:>7.2}s  live={:>5}  bursts={:>5}  spawned={:>6}  expired={:>6}  capped={:>6}",
        time, live, stats.bursts, stats.spawned, stats.expired, stats.capped
    );
}
