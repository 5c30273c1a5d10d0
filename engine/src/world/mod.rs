//! World composition and the per-tick update order.
//!
//! The [`World`] owns the ship plus the obstacle and projectile systems
//! and advances them in a fixed order each tick:
//!
//! 1. apply the pending fire request (possibly enqueueing a projectile)
//! 2. integrate the ship, apply its edge policy, tick the weapon
//! 3. integrate obstacles and projectiles
//! 4. evaluate bounds for all transient entities
//! 5. compact the removal lists
//!
//! Stepping the world directly from a caller's loop with a measured
//! frame dt is the *embedded* scheduling mode; the independent
//! fixed-period mode in [`crate::sim`] drives the same [`World::step`].

pub mod bounds;
pub mod systems;

use glam::Vec2;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{ConfigError, SimConfig};
use crate::entity::transient::{EntityId, EntityIdGen};
use crate::entity::weapon::ProjectileDescriptor;
use crate::entity::{Ship, Weapon};
use crate::input::ForceCommand;
use crate::physics::{IntegrationScheme, Pose, ThrusterModel};

pub use bounds::{Bounds, BoundsPolicy, DEFAULT_CULL_MARGIN};
pub use systems::{ObstacleSystem, ProjectileSystem};

/// Identity and pose of one live transient entity, for draw iteration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EntityPose {
    pub id: EntityId,
    pub pose: Pose,
    /// Visual-only scale
    pub scale: f32,
}

/// Consistent read-only copy of everything the render side needs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorldSnapshot {
    /// Ticks completed since world creation
    pub tick: u64,
    /// Ship pose; `None` only in the zero-value snapshot before tick 1
    pub ship: Option<Pose>,
    pub obstacles: Vec<EntityPose>,
    pub projectiles: Vec<EntityPose>,
}

/// What happened during one tick, for callers that care.
#[derive(Debug, Clone, Default)]
pub struct StepEvents {
    /// The projectile created by this tick's fire request, if any
    pub fired: Option<ProjectileDescriptor>,
    /// Transient entities removed by the bounds pass
    pub culled: Vec<EntityId>,
    /// True when the Cull ship policy reset the ship this tick
    pub ship_reset: bool,
}

/// The simulation world: one ship, two transient-entity systems.
pub struct World {
    pub ship: Ship,
    pub obstacles: ObstacleSystem,
    pub projectiles: ProjectileSystem,
    bounds: Bounds,
    ship_policy: BoundsPolicy,
    scheme: IntegrationScheme,
    ids: EntityIdGen,
    rng: StdRng,
    tick: u64,
}

impl World {
    /// Build a world from a validated config.
    ///
    /// The ship starts at rest in the world center, weapon ready. Fails
    /// fast on degenerate mass properties or dimensions; nothing is
    /// checked again inside the tick loop.
    pub fn new(config: &SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let thrusters = ThrusterModel::new(
            config.ship_mass,
            config.ship_inertia,
            config.arm_length,
            config.gravity,
        )?;
        let weapon = Weapon::new(config.cooldown_ticks, config.projectile_speed);
        let center = Vec2::new(config.world_width / 2.0, config.world_height / 2.0);

        Ok(Self {
            ship: Ship::new(center, thrusters, weapon),
            obstacles: ObstacleSystem::new(config.obstacle_spawn_interval, config.max_obstacles),
            projectiles: ProjectileSystem::new(config.max_projectiles),
            bounds: Bounds::new(config.world_width, config.world_height, config.cull_margin),
            ship_policy: config.ship_policy,
            scheme: config.scheme,
            ids: EntityIdGen::default(),
            rng: StdRng::from_entropy(),
            tick: 0,
        })
    }

    /// Use a deterministic RNG seed for the obstacle spawner.
    pub fn with_rng_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Advance the world by one tick of `dt` seconds (embedded mode entry
    /// point; the independent mode calls this with the fixed period).
    ///
    /// `dt` must be positive, per the integration contract.
    pub fn step(&mut self, dt: f32, command: ForceCommand) -> StepEvents {
        let mut events = StepEvents::default();

        // 1. Pending fire request -> possibly a new projectile.
        if command.fire_requested {
            if let Some(descriptor) = self.ship.try_fire() {
                if self.projectiles.fire(descriptor, &mut self.ids).is_some() {
                    events.fired = Some(descriptor);
                }
            }
        }

        // 2. Ship integration + edge policy. The weapon ticks inside
        //    Ship::update, on the same tick a shot was fired.
        self.ship.update(self.scheme, dt, command.fd, command.fe);
        match self.ship_policy {
            BoundsPolicy::Wrap => {
                self.ship.body.position = self.bounds.wrap(self.ship.body.position);
            }
            BoundsPolicy::Cull => {
                // The ship is permanent: leaving the area resets it to the
                // world center instead of destroying it.
                let half = crate::entity::transient::OBSTACLE_HALF_EXTENT;
                if self.bounds.is_outside(self.ship.body.position, half) {
                    let center = Vec2::new(self.bounds.width / 2.0, self.bounds.height / 2.0);
                    self.ship.reset_at(center);
                    events.ship_reset = true;
                    debug!("ship left the playable area, reset to center");
                }
            }
        }

        // 3. Transient entities (obstacle auto-spawner runs here too).
        self.obstacles
            .update(self.scheme, dt, &self.bounds, &mut self.ids, &mut self.rng);
        self.projectiles.update(self.scheme, dt);

        // 4 + 5. Mark all exits, then compact.
        events.culled.extend(self.obstacles.cull(&self.bounds));
        events.culled.extend(self.projectiles.cull(&self.bounds));

        self.tick += 1;
        events
    }

    /// Spawn one obstacle immediately (stochastic factory).
    pub fn spawn_obstacle(&mut self) -> Option<EntityId> {
        self.obstacles
            .spawn_now(&self.bounds, &mut self.ids, &mut self.rng)
    }

    /// Copy out the render-facing state: ship pose plus the live entity
    /// sets with lifecycle removals already applied.
    pub fn snapshot(&self) -> WorldSnapshot {
        WorldSnapshot {
            tick: self.tick,
            ship: Some(self.ship.pose()),
            obstacles: self
                .obstacles
                .iter()
                .map(|e| EntityPose {
                    id: e.id,
                    pose: e.pose(),
                    scale: e.scale,
                })
                .collect(),
            projectiles: self
                .projectiles
                .iter()
                .map(|e| EntityPose {
                    id: e.id,
                    pose: e.pose(),
                    scale: e.scale,
                })
                .collect(),
        }
    }

    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    /// Ticks completed since world creation.
    pub fn tick(&self) -> u64 {
        self.tick
    }
}
