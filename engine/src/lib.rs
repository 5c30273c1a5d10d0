//! Shuttle Simulation Engine
//!
//! Physics and entity-lifecycle core of a 2D arcade flight simulator:
//! one twin-thruster craft under gravity, plus transient asteroids and
//! projectiles, advanced by explicit numerical integration. Rendering,
//! window setup, keyboard polling and audio are external collaborators;
//! this crate owns the equations, the lifecycle rules, and the
//! cross-thread state handoff.
//!
//! # Modules
//!
//! - [`physics`] - Rigid-body integration and the twin-thruster model
//! - [`entity`] - Ship, weapon cooldown machine, transient entities
//! - [`world`] - Bounds policies, lifecycle systems, per-tick update order
//! - [`sim`] - Fixed-period simulation thread and two-lock state channel
//! - [`input`] - The per-tick force command consumed by the core
//! - [`config`] - Session configuration, validated fail-fast
//!
//! # Scheduling modes
//!
//! ```ignore
//! use shuttle_engine::{SimConfig, World, ForceCommand};
//!
//! // Embedded: step from your own loop with a measured frame dt.
//! let mut world = World::new(&SimConfig::default())?;
//! let events = world.step(frame_dt, ForceCommand::thrust(10.0, 0.0));
//!
//! // Independent: move the world onto a fixed-period thread and talk
//! // to it through the shared channel.
//! use shuttle_engine::sim::{SharedStateChannel, SimulationThread};
//! let channel = SharedStateChannel::new();
//! let sim = SimulationThread::spawn(world, config.tick_period(), channel.clone());
//! channel.request_fire();
//! let snapshot = channel.latest();
//! let world = sim.shutdown();
//! ```

pub mod config;
pub mod entity;
pub mod input;
pub mod physics;
pub mod sim;
pub mod world;

pub use config::{ConfigError, SimConfig};
pub use entity::{EntityId, ProjectileDescriptor, Ship, Weapon, WeaponPhase};
pub use input::ForceCommand;
pub use physics::{IntegrationScheme, Pose, RigidBody, ThrusterModel};
pub use sim::{SharedStateChannel, SimulationThread};
pub use world::{Bounds, BoundsPolicy, EntityPose, World, WorldSnapshot};
