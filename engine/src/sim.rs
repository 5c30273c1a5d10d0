//! Independent-mode scheduling: the fixed-period simulation thread and
//! the two-lock shared state channel.
//!
//! In embedded mode the caller steps [`World`](crate::world::World)
//! directly. In independent mode a dedicated thread runs the loop
//!
//! > read command snapshot -> step one fixed tick -> publish result
//! > snapshot -> sleep one period
//!
//! until the shutdown flag is observed at a tick boundary. The channel
//! keeps the command and result groups under *separate* locks so a slow
//! render-side read never blocks input writes and vice versa; each lock
//! guards a whole-struct copy, so readers never see a half-written
//! snapshot.
//!
//! The loop is deliberately best-effort soft real time: a plain sleep
//! per tick, no drift or overrun compensation. Upgrading it to a
//! deadline scheduler would change the observable timing behavior.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use tracing::{debug, info, trace};

use crate::input::ForceCommand;
use crate::world::{World, WorldSnapshot};

/// Lock-protected exchange point between the simulation thread and the
/// render/input side.
///
/// Two independent lock domains: the *command* group (thruster
/// magnitudes + fire request, written by input, drained by the sim) and
/// the *result* group (the latest world snapshot, written by the sim,
/// read by the renderer at its own cadence). Plus a cooperative
/// shutdown flag checked once per tick.
#[derive(Default)]
pub struct SharedStateChannel {
    command: Mutex<ForceCommand>,
    result: Mutex<WorldSnapshot>,
    shutdown: AtomicBool,
}

impl SharedStateChannel {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Input side: replace the thruster magnitudes, keeping any fire
    /// request that has not been consumed by the simulation yet.
    pub fn write_command(&self, command: ForceCommand) {
        let mut guard = self.command.lock().expect("command lock poisoned");
        let pending_fire = guard.fire_requested;
        *guard = command;
        guard.fire_requested |= pending_fire;
    }

    /// Input side: latch a fire request for the next tick.
    pub fn request_fire(&self) {
        self.command.lock().expect("command lock poisoned").fire_requested = true;
    }

    /// Simulation side: take an atomic snapshot of the command group at
    /// the start of a tick. The fire request is consumed, so one request
    /// produces at most one shot.
    pub fn take_command(&self) -> ForceCommand {
        let mut guard = self.command.lock().expect("command lock poisoned");
        let command = *guard;
        guard.fire_requested = false;
        command
    }

    /// Simulation side: publish the completed tick's snapshot.
    pub fn publish(&self, snapshot: WorldSnapshot) {
        *self.result.lock().expect("result lock poisoned") = snapshot;
    }

    /// Render side: copy out the most recent completed snapshot. Staleness
    /// is bounded by one simulation period.
    pub fn latest(&self) -> WorldSnapshot {
        self.result.lock().expect("result lock poisoned").clone()
    }

    /// Ask the simulation loop to stop at its next tick boundary.
    pub fn signal_shutdown(&self) {
        self.shutdown.store(true, Ordering::Relaxed);
    }

    pub fn shutdown_requested(&self) -> bool {
        self.shutdown.load(Ordering::Relaxed)
    }
}

/// Handle to the fixed-period simulation thread.
///
/// Owns the world for the thread's lifetime; dropping the handle signals
/// shutdown and joins.
pub struct SimulationThread {
    channel: Arc<SharedStateChannel>,
    thread: Option<JoinHandle<World>>,
}

impl SimulationThread {
    /// Move `world` onto a dedicated thread ticking every `period`.
    pub fn spawn(world: World, period: Duration, channel: Arc<SharedStateChannel>) -> Self {
        let loop_channel = Arc::clone(&channel);
        let thread = thread::Builder::new()
            .name("shuttle-sim".to_string())
            .spawn(move || simulation_loop(world, period, loop_channel))
            .expect("failed to spawn simulation thread");

        Self {
            channel,
            thread: Some(thread),
        }
    }

    /// Signal shutdown and wait for the loop to finish its current tick.
    /// Returns the world in its final state.
    pub fn shutdown(mut self) -> World {
        self.channel.signal_shutdown();
        self.thread
            .take()
            .expect("simulation thread already joined")
            .join()
            .expect("simulation thread panicked")
    }

    pub fn channel(&self) -> &Arc<SharedStateChannel> {
        &self.channel
    }
}

impl Drop for SimulationThread {
    fn drop(&mut self) {
        self.channel.signal_shutdown();
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

fn simulation_loop(
    mut world: World,
    period: Duration,
    channel: Arc<SharedStateChannel>,
) -> World {
    let dt = period.as_secs_f32();
    info!(period_ms = period.as_millis() as u64, "simulation thread started");

    loop {
        if channel.shutdown_requested() {
            break;
        }

        let command = channel.take_command();
        let events = world.step(dt, command);
        if events.fired.is_some() {
            debug!(tick = world.tick(), "projectile fired");
        }
        trace!(tick = world.tick(), culled = events.culled.len(), "tick complete");

        channel.publish(world.snapshot());
        thread::sleep(period);
    }

    info!(tick = world.tick(), "simulation thread stopped");
    world
}
