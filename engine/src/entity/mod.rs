//! Entities of the shuttle world.
//!
//! - [`ship`] - The controllable craft (body + thrusters + weapon)
//! - [`weapon`] - Cooldown state machine gating projectile creation
//! - [`transient`] - Constant-velocity asteroids and projectiles

pub mod ship;
pub mod transient;
pub mod weapon;

pub use ship::Ship;
pub use transient::{EntityId, EntityIdGen, TransientEntity, spawn_obstacle};
pub use weapon::{ProjectileDescriptor, Weapon, WeaponPhase};
