//! Static tile map used for collision queries
//!
//! Columns grow to the right from world X = 0. Rows grow downward from world
//! Y = 0: row `r` covers world Y in `(-(r + 1) * tile_size, -r * tile_size]`.

use glam::{IVec2, Vec2, Vec3};

use super::collision::TileProbe;
use crate::level::{LevelData, LevelError};

/// Empty, non-solid tile
pub const TILE_EMPTY: i32 = 0;
/// Generic solid ground (failure on contact)
pub const TILE_GROUND: i32 = 1;
/// Hazard variant (failure on contact)
pub const TILE_HAZARD: i32 = 2;
/// Landing pad (success on contact)
pub const TILE_LANDING_PAD: i32 = 3;
/// Returned for indices outside the grid
pub const TILE_OUT_OF_BOUNDS: i32 = -1;

/// World-space extents covered by the grid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapBounds {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

/// Immutable tile grid built once per level
#[derive(Debug, Clone)]
pub struct TileGrid {
    width: usize,
    height: usize,
    tile_size: f32,
    tiles: Vec<u32>,
    bounds: MapBounds,
}

impl TileGrid {
    pub fn new(level: LevelData, tile_size: f32) -> Result<Self, LevelError> {
        // Re-validate in case the caller built LevelData by hand
        let LevelData {
            width,
            height,
            tiles,
        } = LevelData::new(level.width, level.height, level.tiles)?;

        let bounds = MapBounds {
            left: 0.0,
            right: tile_size * width as f32,
            top: 0.0,
            bottom: -tile_size * height as f32,
        };

        log::debug!("Built {}x{} tile grid (tile size {})", width, height, tile_size);

        Ok(Self {
            width,
            height,
            tile_size,
            tiles,
            bounds,
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn tile_size(&self) -> f32 {
        self.tile_size
    }

    #[inline]
    pub fn bounds(&self) -> MapBounds {
        self.bounds
    }

    /// Tile code at (x, y), or `TILE_OUT_OF_BOUNDS`
    pub fn tile_type(&self, x: i32, y: i32) -> i32 {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return TILE_OUT_OF_BOUNDS;
        }
        // Codes are capped at `MAX_TILE_CODE` when the level is validated
        self.tiles[y as usize * self.width + x as usize] as i32
    }

    /// Tile indices containing a world position
    ///
    /// X floors; Y negates the ceiling so that a point exactly on a row's top
    /// edge belongs to that row.
    pub fn tile_index(&self, position: Vec3) -> IVec2 {
        let x = (position.x / self.tile_size).floor() as i32;
        let y = -(position.y / self.tile_size).ceil() as i32;
        IVec2::new(x, y)
    }

    /// Tile code at a world position
    pub fn tile_type_at(&self, position: Vec3) -> i32 {
        let index = self.tile_index(position);
        self.tile_type(index.x, index.y)
    }

    /// World-space center of the tile at (x, y)
    pub fn tile_center(&self, x: i32, y: i32) -> Vec2 {
        let half = self.tile_size / 2.0;
        Vec2::new(
            x as f32 * self.tile_size + half,
            -(y as f32) * self.tile_size - half,
        )
    }

    /// Check whether a world position lies inside a solid tile
    ///
    /// Penetration on each axis is `tile_size / 2 - |p - center|`. Callers
    /// combine it with the body's direction of travel.
    pub fn is_solid(&self, position: Vec3) -> TileProbe {
        let index = self.tile_index(position);
        let tile = self.tile_type(index.x, index.y);
        if tile <= TILE_EMPTY {
            return TileProbe::miss();
        }

        let center = self.tile_center(index.x, index.y);
        let half = self.tile_size / 2.0;
        TileProbe {
            solid: true,
            tile,
            penetration: Vec2::new(
                half - (position.x - center.x).abs(),
                half - (position.y - center.y).abs(),
            ),
        }
    }
}
