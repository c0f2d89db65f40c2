//! Fixed timestep simulation tick
//!
//! Frame time is banked in an accumulator and spent in whole fixed ticks, so
//! the same inputs produce the same ticks regardless of frame rate.

use super::body::Rotation;
use super::state::{GameState, Outcome};
use crate::input::apply as apply_input;

/// Input snapshot for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Thrust key held
    pub thrust: bool,
    /// Facing selected this frame, if any direction key is down
    pub rotation: Option<Rotation>,
}

/// Advance the game state by one fixed tick
pub fn tick(state: &mut GameState, input: &TickInput) {
    // Finished runs no longer move or take input
    if state.player.is_game_over() {
        return;
    }

    state.time_ticks += 1;

    apply_input(&mut state.player, input, state.settings.fuel_burn_per_tick);

    let GameState {
        settings,
        grid,
        player,
        obstacles,
        ..
    } = state;
    player.update(settings.fixed_dt, input, obstacles, grid, settings);
}

/// Drives `tick` from wall-clock frame times
///
/// The tick length is always `state.settings.fixed_dt`. Time is banked in
/// `f64` and whole ticks are taken out in one step, so a long frame runs
/// exactly `floor(banked / dt)` ticks.
#[derive(Debug, Clone, Default)]
pub struct SimulationLoop {
    accumulator: f64,
    last_time: Option<f64>,
}

impl SimulationLoop {
    pub fn new() -> Self {
        Self::default()
    }

    /// Unspent frame time carried to the next frame
    pub fn accumulator(&self) -> f64 {
        self.accumulator
    }

    /// Run a frame given the current wall-clock time in seconds
    ///
    /// The first call only records the time.
    pub fn frame(&mut self, state: &mut GameState, input: &TickInput, now: f64) -> u64 {
        let elapsed = match self.last_time {
            Some(last) => now - last,
            None => 0.0,
        };
        self.last_time = Some(now);
        self.advance(state, input, elapsed)
    }

    /// Bank `elapsed` seconds and run every whole tick it covers
    ///
    /// Returns the number of ticks taken from the accumulator. Nothing runs
    /// once a quit has been requested.
    pub fn advance(&mut self, state: &mut GameState, input: &TickInput, elapsed: f64) -> u64 {
        if state.quit_requested() {
            return 0;
        }

        let dt = f64::from(state.settings.fixed_dt);
        if dt <= 0.0 || !dt.is_finite() {
            log::warn!("Ignoring frame: tick length {} is not positive", dt);
            return 0;
        }

        let before = state.outcome();

        if elapsed.is_finite() {
            self.accumulator += elapsed.max(0.0);
        }

        let whole = (self.accumulator / dt).floor();
        self.accumulator = (self.accumulator - whole * dt).max(0.0);
        let ticks = whole as u64;

        for _ in 0..ticks {
            // Ticks after the run ends are no-ops
            if state.is_game_over() {
                break;
            }
            tick(state, input);
        }

        state.check_fall();
        state.update_camera();

        let after = state.outcome();
        if after != before {
            match after {
                Outcome::Accomplished => log::info!(
                    "Mission accomplished after {} ticks, {:.0}% fuel left",
                    state.time_ticks,
                    state.player.fuel()
                ),
                Outcome::Failed => log::info!(
                    "Mission failed after {} ticks (tile {})",
                    state.time_ticks,
                    state.player.collided_tile()
                ),
                Outcome::InProgress => {}
            }
        }

        ticks
    }
}
