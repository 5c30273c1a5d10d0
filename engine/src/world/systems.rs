//! Obstacle and projectile lifecycle systems.
//!
//! Each system owns its collection of transient entities and provides
//! spawn / update / cull / iterate operations. Culling is mark-then-
//! compact: every entity is evaluated against the bounds first, removal
//! happens in a second pass, so a collection is never mutated while it
//! is being walked.

use rand::Rng;
use tracing::debug;

use crate::entity::transient::{EntityId, EntityIdGen, TransientEntity, spawn_obstacle};
use crate::entity::weapon::ProjectileDescriptor;
use crate::physics::IntegrationScheme;
use crate::world::bounds::Bounds;

/// Evaluate the bounds-exit predicate for every entity, then compact.
///
/// Returns the ids that were removed. The marks vector is filled for the
/// whole collection before any element is dropped.
fn cull_marked(entities: &mut Vec<TransientEntity>, bounds: &Bounds) -> Vec<EntityId> {
    let marks: Vec<bool> = entities
        .iter()
        .map(|e| bounds.is_outside(e.body.position, e.half_extent))
        .collect();

    let removed: Vec<EntityId> = entities
        .iter()
        .zip(&marks)
        .filter(|&(_, &marked)| marked)
        .map(|(e, _)| e.id)
        .collect();

    let mut index = 0;
    entities.retain(|_| {
        let keep = !marks[index];
        index += 1;
        keep
    });

    removed
}

/// Manages the full lifecycle of edge-spawned obstacles.
///
/// Supports an explicit spawn factory plus an optional interval
/// auto-spawner so a session keeps a steady asteroid field.
pub struct ObstacleSystem {
    obstacles: Vec<TransientEntity>,
    spawn_timer: f32,
    /// Seconds between automatic spawns; 0 disables auto-spawning.
    pub spawn_interval: f32,
    /// Maximum number of simultaneously live obstacles.
    pub max_obstacles: usize,
}

impl ObstacleSystem {
    pub fn new(spawn_interval: f32, max_obstacles: usize) -> Self {
        Self {
            obstacles: Vec::new(),
            spawn_timer: 0.0,
            spawn_interval,
            max_obstacles,
        }
    }

    /// Spawn one obstacle now, regardless of the auto-spawn timer.
    ///
    /// Returns `None` when the live cap is reached.
    pub fn spawn_now(
        &mut self,
        bounds: &Bounds,
        ids: &mut EntityIdGen,
        rng: &mut impl Rng,
    ) -> Option<EntityId> {
        if self.obstacles.len() >= self.max_obstacles {
            return None;
        }
        let obstacle = spawn_obstacle(ids.next(), bounds, rng);
        let id = obstacle.id;
        debug!(%id, position = ?obstacle.body.position, "obstacle spawned");
        self.obstacles.push(obstacle);
        Some(id)
    }

    /// Integrate all obstacles and run the interval auto-spawner.
    pub fn update(
        &mut self,
        scheme: IntegrationScheme,
        dt: f32,
        bounds: &Bounds,
        ids: &mut EntityIdGen,
        rng: &mut impl Rng,
    ) {
        if self.spawn_interval > 0.0 {
            self.spawn_timer += dt;
            if self.spawn_timer >= self.spawn_interval {
                self.spawn_timer = 0.0;
                self.spawn_now(bounds, ids, rng);
            }
        }

        for obstacle in &mut self.obstacles {
            obstacle.update(scheme, dt);
        }
    }

    /// Remove every obstacle outside the bounds. Returns the culled ids.
    pub fn cull(&mut self, bounds: &Bounds) -> Vec<EntityId> {
        let removed = cull_marked(&mut self.obstacles, bounds);
        for id in &removed {
            debug!(%id, "obstacle culled");
        }
        removed
    }

    pub fn iter(&self) -> impl Iterator<Item = &TransientEntity> {
        self.obstacles.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut TransientEntity> {
        self.obstacles.iter_mut()
    }

    pub fn count(&self) -> usize {
        self.obstacles.len()
    }
}

/// Manages the full lifecycle of fired projectiles.
pub struct ProjectileSystem {
    projectiles: Vec<TransientEntity>,
    /// Maximum number of simultaneously live projectiles.
    pub max_projectiles: usize,
}

impl ProjectileSystem {
    pub fn new(max_projectiles: usize) -> Self {
        Self {
            projectiles: Vec::new(),
            max_projectiles,
        }
    }

    /// Enqueue a projectile built from the weapon's descriptor.
    ///
    /// Returns `None` when the live cap is reached; the shot is simply
    /// swallowed, matching the weapon's silent no-op contract.
    pub fn fire(
        &mut self,
        descriptor: ProjectileDescriptor,
        ids: &mut EntityIdGen,
    ) -> Option<EntityId> {
        if self.projectiles.len() >= self.max_projectiles {
            return None;
        }
        let projectile = TransientEntity::projectile(ids.next(), descriptor);
        let id = projectile.id;
        debug!(%id, velocity = ?descriptor.velocity, "projectile fired");
        self.projectiles.push(projectile);
        Some(id)
    }

    /// Integrate all live projectiles.
    pub fn update(&mut self, scheme: IntegrationScheme, dt: f32) {
        for projectile in &mut self.projectiles {
            projectile.update(scheme, dt);
        }
    }

    /// Remove every projectile outside the bounds. Returns the culled ids.
    pub fn cull(&mut self, bounds: &Bounds) -> Vec<EntityId> {
        let removed = cull_marked(&mut self.projectiles, bounds);
        for id in &removed {
            debug!(%id, "projectile culled");
        }
        removed
    }

    pub fn iter(&self) -> impl Iterator<Item = &TransientEntity> {
        self.projectiles.iter()
    }

    pub fn count(&self) -> usize {
        self.projectiles.len()
    }
}
