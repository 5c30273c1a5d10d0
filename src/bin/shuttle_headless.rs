//! Headless shuttle session driver.
//!
//! Run with: `cargo run --bin shuttle-headless [config.json]`
//!
//! Starts the simulation in independent mode (fixed-period thread),
//! scripts a few seconds of thruster and fire input at a render-like
//! cadence, and logs the ship pose from the published snapshots. This is
//! the full independent-mode path with the window, sprites and keyboard
//! replaced by a script.
//!
//! Log verbosity follows `RUST_LOG` (default `info`); set
//! `RUST_LOG=shuttle_engine=debug` to see spawn/cull/fire events.

use std::env;
use std::error::Error;
use std::thread;
use std::time::{Duration, Instant};

use tracing::info;
use tracing_subscriber::EnvFilter;

use shuttle_engine::sim::{SharedStateChannel, SimulationThread};
use shuttle_engine::{ForceCommand, SimConfig, World};

/// Render-side cadence of the scripted session.
const FRAME_PERIOD: Duration = Duration::from_millis(16);
/// Total scripted session length.
const SESSION_LENGTH: Duration = Duration::from_secs(6);

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .compact()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match env::args().nth(1) {
        Some(path) => {
            info!(path = %path, "loading config");
            SimConfig::from_json_file(path)?
        }
        None => SimConfig::default(),
    };

    let mut world = World::new(&config)?;
    // Seed the field so the session starts with something to dodge.
    for _ in 0..3 {
        world.spawn_obstacle();
    }

    let channel = SharedStateChannel::new();
    let sim = SimulationThread::spawn(world, config.tick_period(), channel.clone());

    let start = Instant::now();
    let mut last_report = Instant::now();
    let mut last_fire = Instant::now();

    while start.elapsed() < SESSION_LENGTH {
        // Scripted input: right thruster for the first half of every
        // 2 s cycle, both thrusters for the second half.
        let cycle = start.elapsed().as_secs_f32() % 2.0;
        let command = if cycle < 1.0 {
            ForceCommand::thrust(config.thrust, 0.0)
        } else {
            ForceCommand::thrust(config.thrust, config.thrust)
        };
        channel.write_command(command);

        if last_fire.elapsed() >= Duration::from_secs(1) {
            last_fire = Instant::now();
            channel.request_fire();
        }

        if last_report.elapsed() >= Duration::from_secs(1) {
            last_report = Instant::now();
            let snapshot = channel.latest();
            if let Some(pose) = snapshot.ship {
                info!(
                    tick = snapshot.tick,
                    x = pose.position.x,
                    y = pose.position.y,
                    angle = pose.angle,
                    obstacles = snapshot.obstacles.len(),
                    projectiles = snapshot.projectiles.len(),
                    "ship pose"
                );
            }
        }

        thread::sleep(FRAME_PERIOD);
    }

    let world = sim.shutdown();
    info!(ticks = world.tick(), "session finished");
    Ok(())
}
