//! World bounds and the wrap/cull edge policies.
//!
//! Each entity class follows exactly one policy for its lifetime: *wrap*
//! folds an out-of-range coordinate back modulo the world dimension,
//! *cull* removes the entity once it has fully left the playable area by
//! more than the outward margin. The margin keeps partially visible
//! objects alive.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Default outward margin before an off-screen entity is culled (units).
pub const DEFAULT_CULL_MARGIN: f32 = 20.0;

/// What happens when an entity leaves the playable area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoundsPolicy {
    /// Re-enter on the opposite edge (position modulo world dimension).
    Wrap,
    /// Remove once fully outside the bounds plus the margin.
    Cull,
}

/// Playable area in y-down screen coordinates, origin at the top left.
#[derive(Debug, Clone, Copy)]
pub struct Bounds {
    /// World width (units)
    pub width: f32,
    /// World height (units)
    pub height: f32,
    /// Outward cull margin (units)
    pub margin: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32, margin: f32) -> Self {
        Self {
            width,
            height,
            margin,
        }
    }

    /// Fold a position back into the world, componentwise modulo.
    pub fn wrap(&self, position: Vec2) -> Vec2 {
        Vec2::new(
            position.x.rem_euclid(self.width),
            position.y.rem_euclid(self.height),
        )
    }

    /// Bounds-exit predicate for the cull policy.
    ///
    /// True when the entity's extent is fully outside the area on any
    /// side, evaluated with the outward margin: left edge past the right
    /// boundary, top edge past the bottom boundary, bottom edge above the
    /// top boundary, or right edge past the left boundary.
    pub fn is_outside(&self, position: Vec2, half_extent: Vec2) -> bool {
        position.x - half_extent.x > self.width + self.margin
            || position.y - half_extent.y > self.height + self.margin
            || position.y + half_extent.y < -self.margin
            || position.x + half_extent.x < -self.margin
    }
}
