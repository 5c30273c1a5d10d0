//! Per-tick input commands.
//!
//! The input collaborator (keyboard polling, replay scripts, tests) maps
//! raw key state to thruster magnitudes; the core only consumes the
//! resulting command snapshot once per tick.

/// One tick's worth of control input.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ForceCommand {
    /// Right thruster magnitude: 0 or the configured thrust
    pub fd: f32,
    /// Left thruster magnitude: 0 or the configured thrust
    pub fe: f32,
    /// Whether the player asked to fire this tick
    pub fire_requested: bool,
}

impl ForceCommand {
    /// A coasting tick: both thrusters off, no fire request.
    pub const COAST: ForceCommand = ForceCommand {
        fd: 0.0,
        fe: 0.0,
        fire_requested: false,
    };

    pub fn thrust(fd: f32, fe: f32) -> Self {
        Self {
            fd,
            fe,
            fire_requested: false,
        }
    }

    pub fn with_fire(mut self) -> Self {
        self.fire_requested = true;
        self
    }
}
