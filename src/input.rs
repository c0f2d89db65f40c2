//! Keyboard state to tick input, and the fuel/animation side of thrusting
//!
//! Key bindings: D faces right, A faces left, W faces up, Space thrusts,
//! Q or closing the window quits.

use crate::sim::{Animation, MovingBody, Rotation, TickInput};

/// Keys currently held, sampled once per frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyState {
    pub face_right: bool,
    pub face_left: bool,
    pub face_up: bool,
    pub thrust: bool,
    pub quit: bool,
}

impl KeyState {
    /// Snapshot for the ticks of this frame
    ///
    /// When several direction keys are held, right wins over left, and left
    /// over up.
    pub fn snapshot(&self) -> TickInput {
        let rotation = if self.face_right {
            Some(Rotation::Right)
        } else if self.face_left {
            Some(Rotation::Left)
        } else if self.face_up {
            Some(Rotation::Up)
        } else {
            None
        };
        TickInput {
            thrust: self.thrust,
            rotation,
        }
    }
}

/// Apply a tick's input to the lander before it moves
///
/// Sets the facing, switches the sprite and burns fuel while thrust is held.
/// Returns whether thrust fired.
pub fn apply(body: &mut MovingBody, input: &TickInput, fuel_burn: f32) -> bool {
    if let Some(rotation) = input.rotation {
        body.rotation = rotation;
    }

    if input.thrust && body.has_fuel() {
        body.set_animation(Animation::Thrusting);
        body.decrease_fuel(fuel_burn);
        true
    } else {
        body.set_animation(Animation::Idle);
        false
    }
}

/// Demo pilot for headless runs: keeps upright and brakes hard descents
#[derive(Debug, Clone, Copy)]
pub struct Autopilot {
    /// Fire thrust while falling faster than this (positive, units/s)
    pub max_descent_speed: f32,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self {
            max_descent_speed: 1.2,
        }
    }
}

impl Autopilot {
    pub fn keys(&self, body: &MovingBody) -> KeyState {
        KeyState {
            face_up: true,
            thrust: body.has_fuel() && body.velocity.y < -self.max_descent_speed,
            ..KeyState::default()
        }
    }
}
