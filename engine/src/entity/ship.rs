//! The controllable shuttle.
//!
//! Composition instead of a class hierarchy: a rigid body core, the
//! thruster model, and the weapon cooldown machine. One ship exists per
//! session and is never destroyed during play.

use glam::Vec2;

use crate::entity::weapon::{ProjectileDescriptor, Weapon};
use crate::physics::{IntegrationScheme, Pose, RigidBody, ThrusterModel};

/// The player craft: rigid body + twin thrusters + weapon.
#[derive(Debug, Clone, Copy)]
pub struct Ship {
    pub body: RigidBody,
    pub thrusters: ThrusterModel,
    pub weapon: Weapon,
}

impl Ship {
    /// Create a ship at rest at `position`.
    pub fn new(position: Vec2, thrusters: ThrusterModel, weapon: Weapon) -> Self {
        Self {
            body: RigidBody::new(position),
            thrusters,
            weapon,
        }
    }

    /// Advance the ship one tick under the given thruster magnitudes.
    ///
    /// Integrates the body from the thruster response and advances the
    /// weapon cooldown. `fd`/`fe` are each zero or the fixed thrust
    /// magnitude; mapping key state to magnitudes is the input
    /// collaborator's job.
    pub fn update(&mut self, scheme: IntegrationScheme, dt: f32, fd: f32, fe: f32) {
        let response = self.thrusters.response(self.body.angle, fd, fe);
        self.body
            .integrate(scheme, response.accel, response.angular_accel, dt);
        self.weapon.tick();
    }

    /// Try to fire the weapon from the ship's current state.
    pub fn try_fire(&mut self) -> Option<ProjectileDescriptor> {
        self.weapon
            .fire(self.body.position, self.body.velocity, self.body.angle)
    }

    /// Reset the ship to rest at `position`, e.g. after a cull-policy exit.
    pub fn reset_at(&mut self, position: Vec2) {
        self.body = RigidBody::new(position);
    }

    pub fn pose(&self) -> Pose {
        self.body.pose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ship() -> Ship {
        let thrusters = ThrusterModel::new(0.2, 10.0, 0.7, 30.0).expect("valid model");
        Ship::new(Vec2::new(640.0, 360.0), thrusters, Weapon::new(10, 100.0))
    }

    #[test]
    fn test_free_fall_scenario() {
        // mass=0.2, inertia=10, gravity=30, dt=1/30, no thrust, 30 ticks
        // from rest: vertical velocity ends at ~30 units/s.
        let mut ship = ship();
        for _ in 0..30 {
            ship.update(IntegrationScheme::Trapezoidal, 1.0 / 30.0, 0.0, 0.0);
        }
        assert!((ship.body.velocity.y - 30.0).abs() < 1e-2);
        assert_eq!(ship.body.velocity.x, 0.0);
        assert_eq!(ship.body.angular_velocity, 0.0);
    }

    #[test]
    fn test_symmetric_thrust_never_spins() {
        let mut ship = ship();
        for _ in 0..90 {
            ship.update(IntegrationScheme::Trapezoidal, 1.0 / 30.0, 10.0, 10.0);
            assert_eq!(ship.body.angular_velocity, 0.0);
        }
    }

    #[test]
    fn test_asymmetric_thrust_spins_and_angle_stays_normalized() {
        let mut ship = ship();
        for _ in 0..300 {
            ship.update(IntegrationScheme::Trapezoidal, 1.0 / 30.0, 10.0, 0.0);
            assert!((0.0..std::f32::consts::TAU).contains(&ship.body.angle));
        }
        assert!(ship.body.angular_velocity > 0.0);
    }

    #[test]
    fn test_fire_uses_current_ship_state() {
        let mut ship = ship();
        ship.body.velocity = Vec2::new(10.0, 0.0);
        let shot = ship.try_fire().expect("ready weapon must fire");
        assert_eq!(shot.position, ship.body.position);
        assert!((shot.velocity.x + 10.0).abs() < 1e-6);
        assert!(ship.try_fire().is_none(), "second immediate fire must be a no-op");
    }

    #[test]
    fn test_reset_clears_motion() {
        let mut ship = ship();
        for _ in 0..30 {
            ship.update(IntegrationScheme::Trapezoidal, 1.0 / 30.0, 10.0, 0.0);
        }
        ship.reset_at(Vec2::new(640.0, 360.0));
        assert_eq!(ship.body.position, Vec2::new(640.0, 360.0));
        assert_eq!(ship.body.velocity, Vec2::ZERO);
        assert_eq!(ship.body.angular_velocity, 0.0);
    }
}
