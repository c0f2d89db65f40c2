//! Lunar Lander - A tile-map arcade lander
//!
//! Core modules:
//! - `sim`: Deterministic simulation (integration, tile collisions, game state)
//! - `input`: Keyboard state to per-tick input snapshots, fuel burn
//! - `level`: Level data (flat tile codes) and loading
//! - `renderer`: Geometry and matrices handed to the GPU layer
//! - `settings`: Data-driven physics tuning

pub mod input;
pub mod level;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use level::{LevelData, LevelError};
pub use settings::{Settings, SettingsError};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// Downward acceleration applied to vertical velocity (world units/s²)
    pub const GRAVITY: f32 = -1.0;
    /// Thrust acceleration along the lander's facing axis
    pub const THRUST_ACCELERATION: f32 = 3.0;
    /// Horizontal deceleration toward zero (world units/s²)
    pub const DRIFT: f32 = 0.5;

    /// Fuel tank capacity (percent)
    pub const MAX_FUEL: f32 = 100.0;
    /// Fuel burned per tick while thrust is held
    pub const FUEL_BURN_PER_TICK: f32 = 0.25;

    /// Falling below this Y ends the run as a failure
    pub const FALL_THRESHOLD: f32 = -5.5;
    /// Tile code recorded when the lander falls off the world
    pub const FALL_TILE: i32 = 2;

    /// Lander spawn point
    pub const START_POSITION: [f32; 3] = [3.0, 2.0, 0.0];
    /// Lander collision extents
    pub const LANDER_WIDTH: f32 = 1.0;
    pub const LANDER_HEIGHT: f32 = 1.0;

    /// World-space edge length of one tile
    pub const TILE_SIZE: f32 = 1.0;
    /// Tileset atlas layout (4 tiles across, 1 row)
    pub const TILESET_COLS: u32 = 4;
    pub const TILESET_ROWS: u32 = 1;

    /// Sprite animation rate while moving
    pub const ANIMATION_FPS: f32 = 4.0;

    /// Orthographic view volume (left, right, bottom, top)
    pub const VIEW_LEFT: f32 = -5.0;
    pub const VIEW_RIGHT: f32 = 5.0;
    pub const VIEW_BOTTOM: f32 = -5.0;
    pub const VIEW_TOP: f32 = 2.5;
    /// Scale applied to the full-screen end images
    pub const END_SCREEN_SCALE: f32 = 4.0;
}
