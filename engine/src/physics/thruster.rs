//! Twin-thruster force/torque model.
//!
//! The craft carries two thrusters mounted symmetrically at the ends of a
//! rigid arm, each either off or firing at a fixed magnitude for a tick.
//! Equal thrust pushes along the body's nose vector with zero net torque;
//! unequal thrust yields differential torque with no extra translation
//! term beyond the sum.

use glam::Vec2;

use crate::config::ConfigError;

/// Net accelerations produced by one tick of thruster input.
#[derive(Debug, Clone, Copy)]
pub struct ThrustResponse {
    /// Linear acceleration, gravity included (units/s²)
    pub accel: Vec2,
    /// Angular acceleration (rad/s²)
    pub angular_accel: f32,
}

/// Mass properties and thruster geometry of the craft.
///
/// Constructed once per session; non-positive mass or inertia is a
/// configuration error caught here, never during integration.
#[derive(Debug, Clone, Copy)]
pub struct ThrusterModel {
    /// Craft mass, > 0
    pub mass: f32,
    /// Moment of inertia, > 0
    pub inertia: f32,
    /// Distance from the center of mass to each thruster
    pub arm_length: f32,
    /// Gravity acceleration, positive pulls toward +y (screen down)
    pub gravity: f32,
}

impl ThrusterModel {
    /// Validate mass properties and build the model.
    pub fn new(mass: f32, inertia: f32, arm_length: f32, gravity: f32) -> Result<Self, ConfigError> {
        if mass <= 0.0 {
            return Err(ConfigError::NonPositiveMass(mass));
        }
        if inertia <= 0.0 {
            return Err(ConfigError::NonPositiveInertia(inertia));
        }
        Ok(Self {
            mass,
            inertia,
            arm_length,
            gravity,
        })
    }

    /// Map right/left thruster magnitudes to net accelerations.
    ///
    /// `fd` and `fe` are each either zero or the configured thrust
    /// magnitude; the core does not interpret continuous throttle values.
    pub fn response(&self, angle: f32, fd: f32, fe: f32) -> ThrustResponse {
        let total = fd + fe;
        ThrustResponse {
            accel: Vec2::new(
                -angle.sin() * total / self.mass,
                -angle.cos() * total / self.mass + self.gravity,
            ),
            angular_accel: self.arm_length / self.inertia * (fd - fe),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> ThrusterModel {
        ThrusterModel::new(0.2, 10.0, 0.7, 30.0).expect("valid model")
    }

    #[test]
    fn test_rejects_non_positive_mass() {
        assert!(matches!(
            ThrusterModel::new(0.0, 10.0, 0.7, 30.0),
            Err(ConfigError::NonPositiveMass(_))
        ));
        assert!(matches!(
            ThrusterModel::new(-1.0, 10.0, 0.7, 30.0),
            Err(ConfigError::NonPositiveMass(_))
        ));
    }

    #[test]
    fn test_rejects_non_positive_inertia() {
        assert!(matches!(
            ThrusterModel::new(0.2, 0.0, 0.7, 30.0),
            Err(ConfigError::NonPositiveInertia(_))
        ));
    }

    #[test]
    fn test_symmetric_thrust_has_zero_torque() {
        let model = model();
        for magnitude in [0.0, 5.0, 10.0, 123.4] {
            for angle in [0.0, 0.5, 1.0, 3.0, 6.0] {
                let response = model.response(angle, magnitude, magnitude);
                assert_eq!(
                    response.angular_accel, 0.0,
                    "equal thrust {magnitude} at angle {angle} must not spin"
                );
            }
        }
    }

    #[test]
    fn test_asymmetric_thrust_spins() {
        let model = model();
        let response = model.response(0.0, 10.0, 0.0);
        // l/I * (Fd - Fe) = 0.7/10 * 10
        assert!((response.angular_accel - 0.7).abs() < 1e-6);

        let opposite = model.response(0.0, 0.0, 10.0);
        assert!((opposite.angular_accel + 0.7).abs() < 1e-6);
    }

    #[test]
    fn test_zero_thrust_is_pure_gravity() {
        let model = model();
        let response = model.response(1.234, 0.0, 0.0);
        assert_eq!(response.accel, Vec2::new(0.0, 30.0));
        assert_eq!(response.angular_accel, 0.0);
    }

    #[test]
    fn test_upright_thrust_opposes_gravity() {
        // At angle 0 the nose points up (-y), so thrust reduces fall.
        let model = model();
        let response = model.response(0.0, 10.0, 10.0);
        assert!((response.accel.x).abs() < 1e-6);
        // -cos(0)*20/0.2 + 30 = -100 + 30
        assert!((response.accel.y + 70.0).abs() < 1e-3);
    }
}
