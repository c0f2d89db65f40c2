//! Rendering data
//!
//! Builds the vertex data, UVs and matrices the GPU layer needs. Texture
//! loading, shaders and window creation live with the platform frontend.

pub mod frame;
pub mod shapes;
pub mod vertex;

pub use frame::{EndScreen, FramePlan, SpriteDraw, plan_frame, projection};
pub use shapes::{UvRect, atlas_cell, body_quad, sprite_quad, tile_map_mesh};
pub use vertex::Vertex;
