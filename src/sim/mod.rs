//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Input arrives as per-tick snapshots
//! - No rendering or platform dependencies

pub mod body;
pub mod collision;
pub mod grid;
pub mod state;
pub mod tick;

pub use body::{Animation, CollisionFlags, MovingBody, Rotation, SpriteSheet};
pub use collision::{Axis, TileProbe, box_overlap, boxes_overlap};
pub use grid::{
    MapBounds, TILE_EMPTY, TILE_GROUND, TILE_HAZARD, TILE_LANDING_PAD, TILE_OUT_OF_BOUNDS,
    TileGrid,
};
pub use state::{GameState, Outcome};
pub use tick::{SimulationLoop, TickInput, tick};
