//! Physics for the shuttle simulation core.
//!
//! Custom rigid-body implementation, no external physics dependencies.
//! The governing model is a craft with two thrusters mounted at the ends
//! of a rigid arm: equal thrust translates along the nose vector, unequal
//! thrust produces differential torque.
//!
//! # Unit system
//!
//! Screen-space units throughout, y grows downward (so positive gravity
//! pulls toward the bottom of the world):
//!
//! - Distances in world units (historically pixels)
//! - Velocities in units/s
//! - Angles in radians, normalized to `[0, 2π)`
//! - Mass and inertia in arbitrary but strictly positive units
//!
//! # Submodules
//!
//! - [`body`] - Rigid-body state and the two integration schemes
//! - [`thruster`] - Twin-thruster force/torque model

pub mod body;
pub mod thruster;

pub use body::{IntegrationScheme, Pose, RigidBody};
pub use thruster::{ThrustResponse, ThrusterModel};
