//! Collision primitives for axis-aligned boxes and tile probes
//!
//! Resolution is done one axis at a time: the caller moves along X, fixes any
//! overlap, then does the same along Y.

use glam::{Vec2, Vec3};

/// Result of probing a single world point against the tile grid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileProbe {
    /// Whether the point lies in a non-empty tile
    pub solid: bool,
    /// Code of the tile that was hit (0 on a miss)
    pub tile: i32,
    /// Overlap depth with the tile's half-extent on each axis
    pub penetration: Vec2,
}

impl TileProbe {
    pub fn miss() -> Self {
        Self {
            solid: false,
            tile: 0,
            penetration: Vec2::ZERO,
        }
    }
}

/// Axis to resolve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// Check overlap of two centered boxes
///
/// Touching edges do not count as overlap.
#[inline]
pub fn boxes_overlap(a_pos: Vec3, a_size: Vec2, b_pos: Vec3, b_size: Vec2) -> bool {
    let x_distance = (a_pos.x - b_pos.x).abs() - (a_size.x + b_size.x) / 2.0;
    let y_distance = (a_pos.y - b_pos.y).abs() - (a_size.y + b_size.y) / 2.0;
    x_distance < 0.0 && y_distance < 0.0
}

/// Overlap depth of two overlapping boxes along one axis
#[inline]
pub fn box_overlap(a_pos: Vec3, a_size: Vec2, b_pos: Vec3, b_size: Vec2, axis: Axis) -> f32 {
    let (distance, half_sum) = match axis {
        Axis::X => ((a_pos.x - b_pos.x).abs(), a_size.x / 2.0 + b_size.x / 2.0),
        Axis::Y => ((a_pos.y - b_pos.y).abs(), a_size.y / 2.0 + b_size.y / 2.0),
    };
    (distance - half_sum).abs()
}
