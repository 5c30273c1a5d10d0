//! Weapon cooldown state machine.
//!
//! Gates projectile creation: a shot flips the weapon from `Ready` to
//! `Cooling`, and the weapon counts simulation ticks until the cooldown
//! threshold is exceeded before it can fire again. Firing while cooling
//! is a silent no-op, not an error.

use glam::Vec2;

/// Cooldown phase of the ship's weapon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeaponPhase {
    /// A fire request will produce a projectile.
    Ready,
    /// Counting ticks until the cooldown threshold is exceeded.
    Cooling,
}

/// Initial state of a projectile created by [`Weapon::fire`].
///
/// The projectile inherits the negative of the ship's own motion plus a
/// muzzle velocity along the body axis, so it leaves over the nose while
/// the recoil reading stays consistent with the original craft model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectileDescriptor {
    /// Spawn position (the ship's position at fire time)
    pub position: Vec2,
    /// Initial velocity (units/s)
    pub velocity: Vec2,
    /// Initial orientation (the ship's angle at fire time)
    pub angle: f32,
}

/// The ship's weapon: a two-state cooldown machine.
///
/// Lives for the whole session; there is no terminal state.
#[derive(Debug, Clone, Copy)]
pub struct Weapon {
    phase: WeaponPhase,
    counter: u32,
    /// Ticks spent cooling after a shot before `Ready` is restored.
    pub cooldown_ticks: u32,
    /// Muzzle speed added along the body axis.
    pub projectile_speed: f32,
}

impl Weapon {
    pub fn new(cooldown_ticks: u32, projectile_speed: f32) -> Self {
        Self {
            phase: WeaponPhase::Ready,
            counter: 0,
            cooldown_ticks,
            projectile_speed,
        }
    }

    /// Attempt to fire from the given ship state.
    ///
    /// In `Ready`: transitions to `Cooling`, resets the counter, and
    /// returns the projectile's initial state. In `Cooling`: returns
    /// `None` and changes nothing.
    pub fn fire(&mut self, position: Vec2, velocity: Vec2, angle: f32) -> Option<ProjectileDescriptor> {
        if self.phase != WeaponPhase::Ready {
            return None;
        }
        self.phase = WeaponPhase::Cooling;
        self.counter = 0;

        let muzzle = Vec2::new(angle.sin(), angle.cos()) * self.projectile_speed;
        Some(ProjectileDescriptor {
            position,
            velocity: -velocity - muzzle,
            angle,
        })
    }

    /// Advance the cooldown by one simulation tick.
    ///
    /// Runs every tick, including the tick a shot was fired on, so with a
    /// threshold of 10 a shot at tick 0 is next possible at tick 11.
    pub fn tick(&mut self) {
        if self.phase == WeaponPhase::Cooling {
            self.counter += 1;
            if self.counter > self.cooldown_ticks {
                self.counter = 0;
                self.phase = WeaponPhase::Ready;
            }
        }
    }

    pub fn phase(&self) -> WeaponPhase {
        self.phase
    }

    pub fn is_ready(&self) -> bool {
        self.phase == WeaponPhase::Ready
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fire_transitions_to_cooling() {
        let mut weapon = Weapon::new(10, 100.0);
        assert!(weapon.is_ready());

        let shot = weapon.fire(Vec2::new(640.0, 360.0), Vec2::ZERO, 0.0);
        let shot = shot.expect("ready weapon must fire");
        assert_eq!(shot.position, Vec2::new(640.0, 360.0));
        assert_eq!(weapon.phase(), WeaponPhase::Cooling);
    }

    #[test]
    fn test_fire_while_cooling_is_noop() {
        let mut weapon = Weapon::new(10, 100.0);
        assert!(weapon.fire(Vec2::ZERO, Vec2::ZERO, 0.0).is_some());

        // Fewer than cooldown_ticks ticks later: still cooling, no shot.
        for _ in 0..5 {
            weapon.tick();
            assert!(weapon.fire(Vec2::ZERO, Vec2::ZERO, 0.0).is_none());
        }
        assert_eq!(weapon.phase(), WeaponPhase::Cooling);
    }

    #[test]
    fn test_cooldown_scenario_ticks_0_to_11() {
        // Fire at tick 0, attempts at ticks 1-9 are no-ops, tick 11 succeeds.
        let mut weapon = Weapon::new(10, 100.0);

        // Tick 0: fire, then the tick advances the cooldown.
        assert!(weapon.fire(Vec2::ZERO, Vec2::ZERO, 0.0).is_some());
        weapon.tick();

        for tick in 1..=9 {
            assert!(
                weapon.fire(Vec2::ZERO, Vec2::ZERO, 0.0).is_none(),
                "tick {tick} should still be cooling"
            );
            weapon.tick();
        }

        // Tick 10: still cooling at fire time; the tick flips it to Ready.
        assert!(weapon.fire(Vec2::ZERO, Vec2::ZERO, 0.0).is_none());
        weapon.tick();

        // Tick 11: ready again.
        assert!(weapon.fire(Vec2::ZERO, Vec2::ZERO, 0.0).is_some());
    }

    #[test]
    fn test_projectile_inherits_negated_ship_motion() {
        let mut weapon = Weapon::new(10, 100.0);
        let ship_velocity = Vec2::new(5.0, -3.0);

        let shot = weapon
            .fire(Vec2::ZERO, ship_velocity, 0.0)
            .expect("ready weapon must fire");
        // -v_ship - speed*(sin 0, cos 0) = (-5, 3) - (0, 100)
        assert!((shot.velocity.x + 5.0).abs() < 1e-6);
        assert!((shot.velocity.y - (3.0 - 100.0)).abs() < 1e-6);
        assert_eq!(shot.angle, 0.0);
    }

    #[test]
    fn test_weapon_persists_after_many_cycles() {
        let mut weapon = Weapon::new(10, 100.0);
        let mut shots = 0;
        for _ in 0..100 {
            if weapon.fire(Vec2::ZERO, Vec2::ZERO, 0.0).is_some() {
                shots += 1;
            }
            weapon.tick();
        }
        // One shot per 11 ticks: ticks 0, 11, 22, ... 99 -> 10 shots.
        assert_eq!(shots, 10);
        // Last shot was at tick 99: still cooling afterwards.
        assert_eq!(weapon.phase(), WeaponPhase::Cooling);
    }
}
