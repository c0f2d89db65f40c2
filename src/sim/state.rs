//! Session state for one run of a level
//!
//! Owns the lander, any other bodies and the tile grid. Passed explicitly to
//! the tick and render entry points.

use glam::{Mat4, Vec3};

use super::body::MovingBody;
use super::grid::{TILE_LANDING_PAD, TileGrid};
use crate::level::{LevelData, LevelError};
use crate::settings::Settings;

/// How the run stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    /// Touched down on a landing pad
    Accomplished,
    /// Hit a hazard or fell out of the world
    Failed,
}

/// Complete state of a running level
#[derive(Debug, Clone)]
pub struct GameState {
    pub settings: Settings,
    pub grid: TileGrid,
    pub player: MovingBody,
    /// Other rigid bodies the player collides with
    pub obstacles: Vec<MovingBody>,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Camera transform for the scene
    pub view_matrix: Mat4,
    quit: bool,
}

impl GameState {
    pub fn new(level: LevelData, settings: Settings) -> Result<Self, LevelError> {
        let grid = TileGrid::new(level, settings.tile_size)?;
        let player = MovingBody::lander(&settings);

        log::info!(
            "Level ready: {}x{} tiles, lander at {:?}, fuel {}",
            grid.width(),
            grid.height(),
            player.position,
            player.fuel()
        );

        let mut state = Self {
            settings,
            grid,
            player,
            obstacles: Vec::new(),
            time_ticks: 0,
            view_matrix: Mat4::IDENTITY,
            quit: false,
        };
        state.update_camera();
        Ok(state)
    }

    /// Ask the frame loop to stop; takes effect at the next frame boundary
    pub fn request_quit(&mut self) {
        if !self.quit {
            log::info!("Quit requested after {} ticks", self.time_ticks);
        }
        self.quit = true;
    }

    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    pub fn is_game_over(&self) -> bool {
        self.player.is_game_over()
    }

    pub fn outcome(&self) -> Outcome {
        if !self.player.is_game_over() {
            Outcome::InProgress
        } else if self.player.collided_tile() == TILE_LANDING_PAD {
            Outcome::Accomplished
        } else {
            Outcome::Failed
        }
    }

    /// End the run if the lander dropped below the world
    pub fn check_fall(&mut self) {
        if self.player.is_game_over() {
            return;
        }
        if self.player.position.y < self.settings.fall_threshold {
            log::debug!(
                "Lander fell below {} (y = {})",
                self.settings.fall_threshold,
                self.player.position.y
            );
            self.player.end_run(crate::consts::FALL_TILE);
        }
    }

    /// Follow the lander horizontally while running; identity once over
    pub fn update_camera(&mut self) {
        self.view_matrix = if self.player.is_game_over() {
            Mat4::IDENTITY
        } else {
            Mat4::from_translation(Vec3::new(-self.player.position.x, 0.0, 0.0))
        };
    }

    /// HUD text for the fuel gauge
    pub fn fuel_label(&self) -> String {
        format!("Fuel: {}%", self.player.fuel() as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::FALL_TILE;

    fn state() -> GameState {
        GameState::new(LevelData::level_one(), Settings::default()).unwrap()
    }

    #[test]
    fn test_new_state() {
        let state = state();
        assert_eq!(state.outcome(), Outcome::InProgress);
        assert_eq!(state.player.position, Vec3::new(3.0, 2.0, 0.0));
        assert_eq!(state.grid.width(), 20);
        assert_eq!(state.fuel_label(), "Fuel: 100%");
    }

    #[test]
    fn test_fall_ends_run() {
        let mut state = state();
        state.player.position.y = -6.0;
        state.check_fall();
        assert!(state.is_game_over());
        assert_eq!(state.player.collided_tile(), FALL_TILE);
        assert_eq!(state.outcome(), Outcome::Failed);
    }

    #[test]
    fn test_fall_keeps_earlier_outcome() {
        let mut state = state();
        state.player.end_run(TILE_LANDING_PAD);
        state.player.position.y = -6.0;
        state.check_fall();
        assert_eq!(state.outcome(), Outcome::Accomplished);
    }

    #[test]
    fn test_camera_follows_then_resets() {
        let mut state = state();
        state.player.position.x = 7.5;
        state.update_camera();
        let shifted = state.view_matrix.transform_point3(Vec3::new(7.5, 1.0, 0.0));
        assert!((shifted - Vec3::new(0.0, 1.0, 0.0)).length() < 1e-6);

        state.player.end_run(1);
        state.update_camera();
        assert_eq!(state.view_matrix, Mat4::IDENTITY);
    }

    #[test]
    fn test_quit_flag() {
        let mut state = state();
        assert!(!state.quit_requested());
        state.request_quit();
        state.request_quit();
        assert!(state.quit_requested());
        // Quitting is not an outcome
        assert_eq!(state.outcome(), Outcome::InProgress);
    }

    #[test]
    fn test_fuel_label_truncates() {
        let mut state = state();
        state.player.set_fuel(42.9);
        assert_eq!(state.fuel_label(), "Fuel: 42%");
    }
}
