//! Geometry for the tile map and sprites

use super::vertex::Vertex;
use crate::consts::{TILESET_COLS, TILESET_ROWS};
use crate::sim::{MovingBody, SpriteSheet, TileGrid};

/// Rectangle in texture space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UvRect {
    pub u: f32,
    pub v: f32,
    pub width: f32,
    pub height: f32,
}

impl UvRect {
    /// Whole texture
    pub const FULL: UvRect = UvRect {
        u: 0.0,
        v: 0.0,
        width: 1.0,
        height: 1.0,
    };
}

/// Atlas cell `index` in a `cols` x `rows` grid, read left to right
pub fn atlas_cell(index: u32, cols: u32, rows: u32) -> UvRect {
    let cols = cols.max(1);
    let rows = rows.max(1);
    let width = 1.0 / cols as f32;
    let height = 1.0 / rows as f32;
    UvRect {
        u: (index % cols) as f32 * width,
        v: (index / cols) as f32 * height,
        width,
        height,
    }
}

/// UV rectangle of a sprite's current frame
pub fn sprite_frame(sheet: SpriteSheet, frame_index: u32) -> UvRect {
    atlas_cell(frame_index, sheet.cols, sheet.rows)
}

/// Unit quad centered on the origin, textured with `uv`
///
/// The image's top row maps to the quad's top edge.
pub fn sprite_quad(uv: UvRect) -> [Vertex; 6] {
    let UvRect {
        u,
        v,
        width: w,
        height: h,
    } = uv;
    [
        Vertex::new(-0.5, -0.5, u, v + h),
        Vertex::new(0.5, -0.5, u + w, v + h),
        Vertex::new(0.5, 0.5, u + w, v),
        Vertex::new(-0.5, -0.5, u, v + h),
        Vertex::new(0.5, 0.5, u + w, v),
        Vertex::new(-0.5, 0.5, u, v),
    ]
}

/// Quad for a body's active animation frame (apply `model_matrix` when drawing)
pub fn body_quad(body: &MovingBody) -> [Vertex; 6] {
    sprite_quad(sprite_frame(body.sprite_sheet(), body.frame_index()))
}

/// Build the static tile map mesh: two triangles per non-empty tile
pub fn tile_map_mesh(grid: &TileGrid) -> Vec<Vertex> {
    let size = grid.tile_size();
    let mut vertices = Vec::new();

    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let tile = grid.tile_type(x as i32, y as i32);
            if tile <= 0 {
                continue;
            }

            let UvRect {
                u,
                v,
                width: w,
                height: h,
            } = atlas_cell(tile as u32, TILESET_COLS, TILESET_ROWS);

            let x_pos = size * x as f32;
            let y_pos = -size * y as f32;

            vertices.extend_from_slice(&[
                Vertex::new(x_pos, y_pos, u, v),
                Vertex::new(x_pos, y_pos - size, u, v + h),
                Vertex::new(x_pos + size, y_pos - size, u + w, v + h),
                Vertex::new(x_pos, y_pos, u, v),
                Vertex::new(x_pos + size, y_pos - size, u + w, v + h),
                Vertex::new(x_pos + size, y_pos, u + w, v),
            ]);
        }
    }

    vertices
}
