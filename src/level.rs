//! Level data: a flat row-major array of tile codes
//!
//! Row 0 is the topmost row of the world. Code 0 is empty, 3 is a landing pad
//! and any other positive code is a hazard.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Failure to build or load a level
#[derive(Debug, thiserror::Error)]
pub enum LevelError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid level JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Level has zero width or height ({width}x{height})")]
    Empty { width: usize, height: usize },

    #[error("Level is {width}x{height} but has {len} tiles")]
    SizeMismatch {
        width: usize,
        height: usize,
        len: usize,
    },

    #[error("Level dimensions {width}x{height} are too large")]
    TooLarge { width: usize, height: usize },

    #[error("Tile {index} has code {code}, above the largest supported code")]
    InvalidTile { index: usize, code: u32 },
}

/// Largest tile code a level may use
pub const MAX_TILE_CODE: u32 = i32::MAX as u32;

/// Raw level layout as authored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelData {
    pub width: usize,
    pub height: usize,
    /// Row-major tile codes, `width * height` long
    pub tiles: Vec<u32>,
}

pub const LEVEL_1_WIDTH: usize = 20;
pub const LEVEL_1_HEIGHT: usize = 7;

#[rustfmt::skip]
const LEVEL_1_TILES: [u32; LEVEL_1_WIDTH * LEVEL_1_HEIGHT] = [
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 3, 0, 0, 0, 0, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 3, 0, 3, 0, 0, 0, 0,
    0, 0, 0, 2, 1, 1, 3, 0, 1, 1, 0, 3, 2, 1, 2, 1, 1, 1, 0, 3,
    2, 1, 1, 1, 1, 1, 1, 0, 1, 1, 0, 1, 1, 1, 1, 1, 1, 1, 1, 1,
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
];

impl LevelData {
    /// Build a level, checking the tile count against the dimensions
    pub fn new(width: usize, height: usize, tiles: Vec<u32>) -> Result<Self, LevelError> {
        let level = Self {
            width,
            height,
            tiles,
        };
        level.validate()?;
        Ok(level)
    }

    /// The built-in first level
    pub fn level_one() -> Self {
        Self {
            width: LEVEL_1_WIDTH,
            height: LEVEL_1_HEIGHT,
            tiles: LEVEL_1_TILES.to_vec(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, LevelError> {
        let level: LevelData = serde_json::from_str(json)?;
        level.validate()?;
        Ok(level)
    }

    /// Load a level from a JSON file (`{ "width", "height", "tiles" }`)
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LevelError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let level = Self::from_json(&json)?;
        log::info!(
            "Loaded {}x{} level from {}",
            level.width,
            level.height,
            path.display()
        );
        Ok(level)
    }

    fn validate(&self) -> Result<(), LevelError> {
        if self.width == 0 || self.height == 0 {
            return Err(LevelError::Empty {
                width: self.width,
                height: self.height,
            });
        }
        let Some(count) = self.width.checked_mul(self.height) else {
            return Err(LevelError::TooLarge {
                width: self.width,
                height: self.height,
            });
        };
        if self.tiles.len() != count {
            return Err(LevelError::SizeMismatch {
                width: self.width,
                height: self.height,
                len: self.tiles.len(),
            });
        }
        if let Some((index, &code)) = self
            .tiles
            .iter()
            .enumerate()
            .find(|(_, code)| **code > MAX_TILE_CODE)
        {
            return Err(LevelError::InvalidTile { index, code });
        }
        Ok(())
    }
}
