//! Rigid-body kinematic state and explicit integration.
//!
//! A [`RigidBody`] holds pose and velocity state only; forces live in the
//! thruster model and are handed in per step as accelerations. Passive
//! entities (asteroids, projectiles) integrate with zero acceleration and
//! keep their spawn velocity forever.

use std::f32::consts::TAU;

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Which explicit integration scheme a body steps with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum IntegrationScheme {
    /// Semi-implicit (symplectic) Euler: velocity first, then position
    /// from the *new* velocity.
    SemiImplicitEuler,
    /// Trapezoidal position update from the average of the current and
    /// previous velocity. Noticeably smoother for large timesteps.
    #[default]
    Trapezoidal,
}

/// Position and orientation at one instant, as handed to the render side.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    /// World-space position (units)
    pub position: Vec2,
    /// Orientation in radians, in `[0, 2π)`
    pub angle: f32,
}

/// Kinematic state of a simulated body.
///
/// Previous-step velocities are retained for the trapezoidal scheme.
#[derive(Debug, Clone, Copy)]
pub struct RigidBody {
    /// World-space position (units)
    pub position: Vec2,
    /// Linear velocity (units/s)
    pub velocity: Vec2,
    /// Linear velocity at the previous step
    pub prev_velocity: Vec2,
    /// Orientation in radians, kept normalized to `[0, 2π)`
    pub angle: f32,
    /// Angular velocity (rad/s)
    pub angular_velocity: f32,
    /// Angular velocity at the previous step
    pub prev_angular_velocity: f32,
}

impl RigidBody {
    /// Create a body at rest at `position`.
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            prev_velocity: Vec2::ZERO,
            angle: 0.0,
            angular_velocity: 0.0,
            prev_angular_velocity: 0.0,
        }
    }

    /// Create a body with initial motion, e.g. a freshly spawned asteroid.
    pub fn with_motion(position: Vec2, velocity: Vec2, angle: f32, angular_velocity: f32) -> Self {
        Self {
            position,
            velocity,
            prev_velocity: velocity,
            angle: angle.rem_euclid(TAU),
            angular_velocity,
            prev_angular_velocity: angular_velocity,
        }
    }

    /// Advance the body by one step of `dt` seconds.
    ///
    /// `accel` and `angular_accel` are the net accelerations for this step
    /// (zero for passive entities). `dt` must be positive; this is a
    /// caller contract checked in debug builds only, never at runtime in
    /// the numeric path.
    ///
    /// The angle is renormalized into `[0, 2π)` after every step.
    pub fn integrate(
        &mut self,
        scheme: IntegrationScheme,
        accel: Vec2,
        angular_accel: f32,
        dt: f32,
    ) {
        debug_assert!(dt > 0.0, "integrate called with non-positive dt");

        match scheme {
            IntegrationScheme::SemiImplicitEuler => {
                self.prev_velocity = self.velocity;
                self.prev_angular_velocity = self.angular_velocity;

                self.velocity += accel * dt;
                self.position += self.velocity * dt;

                self.angular_velocity += angular_accel * dt;
                self.angle += self.angular_velocity * dt;
            }
            IntegrationScheme::Trapezoidal => {
                // Position from the velocity average, then roll the
                // previous velocity forward before applying acceleration.
                self.position += (self.velocity + self.prev_velocity) * 0.5 * dt;
                self.prev_velocity = self.velocity;
                self.velocity += accel * dt;

                self.angle += (self.angular_velocity + self.prev_angular_velocity) * 0.5 * dt;
                self.prev_angular_velocity = self.angular_velocity;
                self.angular_velocity += angular_accel * dt;
            }
        }

        self.angle = self.angle.rem_euclid(TAU);
    }

    /// Current pose for the render side.
    pub fn pose(&self) -> Pose {
        Pose {
            position: self.position,
            angle: self.angle,
        }
    }
}
