//! Simulation configuration.
//!
//! Centralized configuration for the physics core, replacing the
//! hardcoded constants of the original prototype. `Default` reproduces
//! the historical session exactly (1280x720 world, 30 Hz, the 0.2 kg
//! shuttle). Configs can also be loaded from JSON.

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::physics::IntegrationScheme;
use crate::world::BoundsPolicy;

/// Central configuration for one simulation session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// World width (units)
    pub world_width: f32,
    /// World height (units)
    pub world_height: f32,
    /// Outward margin before off-screen entities are culled (units)
    pub cull_margin: f32,
    /// Fixed magnitude of one firing thruster
    pub thrust: f32,
    /// Gravity acceleration, positive pulls down-screen (units/s²)
    pub gravity: f32,
    /// Craft mass, must be > 0
    pub ship_mass: f32,
    /// Craft moment of inertia, must be > 0
    pub ship_inertia: f32,
    /// Distance from center of mass to each thruster
    pub arm_length: f32,
    /// Simulation ticks per second in independent mode, must be > 0
    pub tick_rate: f32,
    /// Ticks the weapon spends cooling after a shot
    pub cooldown_ticks: u32,
    /// Muzzle speed added along the body axis when firing
    pub projectile_speed: f32,
    /// Integration scheme used by every body in the world
    pub scheme: IntegrationScheme,
    /// Edge policy for the ship (historically Wrap; Cull resets the ship)
    pub ship_policy: BoundsPolicy,
    /// Seconds between automatic obstacle spawns; 0 disables auto-spawn
    pub obstacle_spawn_interval: f32,
    /// Cap on simultaneously live obstacles
    pub max_obstacles: usize,
    /// Cap on simultaneously live projectiles
    pub max_projectiles: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            world_width: 1280.0,
            world_height: 720.0,
            cull_margin: 20.0,
            thrust: 10.0,
            gravity: 30.0,
            ship_mass: 0.2,
            ship_inertia: 10.0,
            arm_length: 0.7,
            tick_rate: 30.0,
            cooldown_ticks: 10,
            projectile_speed: 100.0,
            scheme: IntegrationScheme::Trapezoidal,
            ship_policy: BoundsPolicy::Wrap,
            obstacle_spawn_interval: 2.5,
            max_obstacles: 8,
            max_projectiles: 32,
        }
    }
}

impl SimConfig {
    /// Load a config from a JSON file and validate it.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        let config: SimConfig = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject degenerate values before they can reach the numeric path.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ship_mass <= 0.0 {
            return Err(ConfigError::NonPositiveMass(self.ship_mass));
        }
        if self.ship_inertia <= 0.0 {
            return Err(ConfigError::NonPositiveInertia(self.ship_inertia));
        }
        if self.tick_rate <= 0.0 {
            return Err(ConfigError::NonPositiveTickRate(self.tick_rate));
        }
        if self.world_width <= 0.0 || self.world_height <= 0.0 {
            return Err(ConfigError::NonPositiveWorldSize {
                width: self.world_width,
                height: self.world_height,
            });
        }
        Ok(())
    }

    /// Length of one fixed tick in independent mode.
    pub fn tick_period(&self) -> Duration {
        Duration::from_secs_f32(1.0 / self.tick_rate)
    }

    /// Length of one fixed tick in seconds.
    pub fn dt(&self) -> f32 {
        1.0 / self.tick_rate
    }
}

// ============================================================================
// ERROR TYPE
// ============================================================================

/// Errors raised when building a simulation from configuration.
///
/// All of these fail fast at construction time; no error kind exists in
/// the pure numeric path.
#[derive(Debug)]
pub enum ConfigError {
    /// Ship mass is zero or negative.
    NonPositiveMass(f32),
    /// Ship moment of inertia is zero or negative.
    NonPositiveInertia(f32),
    /// Tick rate is zero or negative.
    NonPositiveTickRate(f32),
    /// World dimensions are zero or negative.
    NonPositiveWorldSize { width: f32, height: f32 },
    /// Standard I/O error while reading a config file.
    IoError(std::io::Error),
    /// JSON deserialization error in a config file.
    JsonError(serde_json::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::NonPositiveMass(m) => write!(f, "ship mass must be > 0, got {m}"),
            ConfigError::NonPositiveInertia(i) => {
                write!(f, "ship inertia must be > 0, got {i}")
            }
            ConfigError::NonPositiveTickRate(hz) => {
                write!(f, "tick rate must be > 0, got {hz}")
            }
            ConfigError::NonPositiveWorldSize { width, height } => {
                write!(f, "world dimensions must be > 0, got {width}x{height}")
            }
            ConfigError::IoError(e) => write!(f, "IO error: {e}"),
            ConfigError::JsonError(e) => write!(f, "JSON error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::IoError(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::JsonError(e)
    }
}
