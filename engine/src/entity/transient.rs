//! Transient entities: asteroids and projectiles.
//!
//! A transient entity is a kinematic body with no force model; it keeps
//! its spawn velocity and spin until the bounds-cull predicate removes
//! it. Obstacles come from a stochastic edge-biased spawner, projectiles
//! from the ship's weapon.

use glam::Vec2;
use rand::Rng;

use crate::entity::weapon::ProjectileDescriptor;
use crate::physics::{IntegrationScheme, Pose, RigidBody};
use crate::world::Bounds;

/// Half extent used for obstacle bounds tests (units).
pub const OBSTACLE_HALF_EXTENT: Vec2 = Vec2::splat(16.0);
/// Half extent used for projectile bounds tests (units).
pub const PROJECTILE_HALF_EXTENT: Vec2 = Vec2::splat(4.0);

/// Speed toward the screen interior for edge-spawned obstacles (units/s).
pub const SPAWN_INWARD_SPEED: std::ops::Range<f32> = 30.0..60.0;
/// Speed along the spawn edge (units/s), either direction.
pub const SPAWN_LATERAL_SPEED: std::ops::Range<f32> = -20.0..20.0;
/// Spin for edge-spawned obstacles (rad/s).
pub const SPAWN_ANGULAR_SPEED: std::ops::Range<f32> = -1.5..1.5;
/// Visual scale for spawned obstacles; no effect on physics.
pub const SPAWN_SCALE: std::ops::Range<f32> = 0.75..1.25;

/// Stable identity of a transient entity, unique within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
pub struct EntityId(pub u64);

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Hands out session-unique entity ids.
#[derive(Debug, Default)]
pub struct EntityIdGen {
    next: u64,
}

impl EntityIdGen {
    pub fn next(&mut self) -> EntityId {
        let id = EntityId(self.next);
        self.next += 1;
        id
    }
}

/// A constant-velocity entity: asteroid or projectile.
#[derive(Debug, Clone, Copy)]
pub struct TransientEntity {
    pub id: EntityId,
    pub body: RigidBody,
    /// Half extent for the bounds test
    pub half_extent: Vec2,
    /// Visual-only scale; physics ignores it
    pub scale: f32,
}

impl TransientEntity {
    /// Build a projectile from the weapon's descriptor.
    pub fn projectile(id: EntityId, descriptor: ProjectileDescriptor) -> Self {
        Self {
            id,
            body: RigidBody::with_motion(
                descriptor.position,
                descriptor.velocity,
                descriptor.angle,
                0.0,
            ),
            half_extent: PROJECTILE_HALF_EXTENT,
            scale: 1.0,
        }
    }

    /// Advance by one tick. No forces apply to transient entities.
    pub fn update(&mut self, scheme: IntegrationScheme, dt: f32) {
        self.body.integrate(scheme, Vec2::ZERO, 0.0, dt);
    }

    pub fn pose(&self) -> Pose {
        self.body.pose()
    }
}

/// Which screen edge an obstacle enters from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SpawnEdge {
    Left,
    Right,
    Top,
    Bottom,
}

const SPAWN_EDGES: [SpawnEdge; 4] = [
    SpawnEdge::Left,
    SpawnEdge::Right,
    SpawnEdge::Top,
    SpawnEdge::Bottom,
];

/// Edge-biased stochastic obstacle factory.
///
/// Picks one of the four screen edges uniformly, places the obstacle
/// uniformly along it, and draws a velocity that always points toward
/// the screen interior so fresh obstacles cross the playable area
/// instead of drifting straight out.
pub fn spawn_obstacle(id: EntityId, bounds: &Bounds, rng: &mut impl Rng) -> TransientEntity {
    let edge = SPAWN_EDGES[rng.gen_range(0..SPAWN_EDGES.len())];
    let inward = rng.gen_range(SPAWN_INWARD_SPEED);
    let lateral = rng.gen_range(SPAWN_LATERAL_SPEED);

    let (position, velocity) = match edge {
        SpawnEdge::Left => (
            Vec2::new(0.0, rng.gen_range(0.0..bounds.height)),
            Vec2::new(inward, lateral),
        ),
        SpawnEdge::Right => (
            Vec2::new(bounds.width, rng.gen_range(0.0..bounds.height)),
            Vec2::new(-inward, lateral),
        ),
        SpawnEdge::Top => (
            Vec2::new(rng.gen_range(0.0..bounds.width), 0.0),
            Vec2::new(lateral, inward),
        ),
        SpawnEdge::Bottom => (
            Vec2::new(rng.gen_range(0.0..bounds.width), bounds.height),
            Vec2::new(lateral, -inward),
        ),
    };

    let angle = rng.gen_range(0.0..std::f32::consts::TAU);
    let angular_velocity = rng.gen_range(SPAWN_ANGULAR_SPEED);

    TransientEntity {
        id,
        body: RigidBody::with_motion(position, velocity, angle, angular_velocity),
        half_extent: OBSTACLE_HALF_EXTENT,
        scale: rng.gen_range(SPAWN_SCALE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::f32::consts::TAU;

    fn bounds() -> Bounds {
        Bounds::new(1280.0, 720.0, 20.0)
    }

    #[test]
    fn test_spawn_lands_on_an_edge_within_ranges() {
        let bounds = bounds();
        let mut rng = StdRng::seed_from_u64(7);
        let mut ids = EntityIdGen::default();

        for _ in 0..500 {
            let obstacle = spawn_obstacle(ids.next(), &bounds, &mut rng);
            let p = obstacle.body.position;
            let v = obstacle.body.velocity;

            let on_edge = p.x == 0.0 || p.x == bounds.width || p.y == 0.0 || p.y == bounds.height;
            assert!(on_edge, "spawn position {p} not on any edge");
            assert!(p.x >= 0.0 && p.x <= bounds.width);
            assert!(p.y >= 0.0 && p.y <= bounds.height);

            // One axis carries the inward speed, the other the lateral one.
            let inward = if p.x == 0.0 {
                v.x
            } else if p.x == bounds.width {
                -v.x
            } else if p.y == 0.0 {
                v.y
            } else {
                -v.y
            };
            assert!(
                (SPAWN_INWARD_SPEED.start..SPAWN_INWARD_SPEED.end).contains(&inward),
                "inward speed {inward} out of range"
            );

            assert!((0.0..TAU).contains(&obstacle.body.angle));
            assert!(SPAWN_ANGULAR_SPEED.contains(&obstacle.body.angular_velocity));
            assert!(SPAWN_SCALE.contains(&obstacle.scale));
        }
    }

    #[test]
    fn test_left_edge_spawns_move_right() {
        let bounds = bounds();
        let mut rng = StdRng::seed_from_u64(42);
        let mut ids = EntityIdGen::default();

        let mut seen_left = false;
        for _ in 0..200 {
            let obstacle = spawn_obstacle(ids.next(), &bounds, &mut rng);
            if obstacle.body.position.x == 0.0 && obstacle.body.position.y > 0.0 {
                seen_left = true;
                assert!(obstacle.body.velocity.x > 0.0, "left-edge spawn must head inward");
            }
        }
        assert!(seen_left, "expected at least one left-edge spawn in 200 draws");
    }

    #[test]
    fn test_projectile_from_descriptor_keeps_initial_state() {
        let descriptor = ProjectileDescriptor {
            position: Vec2::new(100.0, 200.0),
            velocity: Vec2::new(-5.0, -97.0),
            angle: 0.5,
        };
        let projectile = TransientEntity::projectile(EntityId(9), descriptor);
        assert_eq!(projectile.body.position, descriptor.position);
        assert_eq!(projectile.body.velocity, descriptor.velocity);
        assert!((projectile.body.angle - 0.5).abs() < 1e-6);
        assert_eq!(projectile.body.angular_velocity, 0.0);
    }

    #[test]
    fn test_entity_ids_are_unique_and_ordered() {
        let mut ids = EntityIdGen::default();
        let a = ids.next();
        let b = ids.next();
        assert_ne!(a, b);
        assert!(a < b);
    }
}
