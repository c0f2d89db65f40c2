//! Per-frame draw decisions
//!
//! While the run is live the scene (lander, map, fuel HUD) is drawn through
//! the follow camera. Once it ends a single full-screen image is shown with
//! an identity view.

use glam::{Mat4, Vec3};

use super::shapes::{UvRect, body_quad, sprite_quad};
use super::vertex::{BACKGROUND, Vertex};
use crate::consts::*;
use crate::sim::{GameState, Outcome};

/// Full-screen image shown at the end of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndScreen {
    Accomplished,
    Failed,
}

/// The lander sprite as it should be drawn this frame
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteDraw {
    pub model: Mat4,
    pub texture_slot: usize,
    pub vertices: [Vertex; 6],
}

/// What to draw this frame
#[derive(Debug, Clone, PartialEq)]
pub enum FramePlan {
    Scene {
        view: Mat4,
        player: SpriteDraw,
        /// HUD text drawn with an identity view
        hud: String,
    },
    End {
        screen: EndScreen,
        model: Mat4,
        /// Unit quad sampling the whole image
        vertices: [Vertex; 6],
    },
}

impl FramePlan {
    /// Color the frame is cleared to before drawing
    pub fn clear_color(&self) -> [f32; 4] {
        BACKGROUND
    }
}

/// Orthographic projection shared by every frame
pub fn projection() -> Mat4 {
    Mat4::orthographic_rh_gl(VIEW_LEFT, VIEW_RIGHT, VIEW_BOTTOM, VIEW_TOP, -1.0, 1.0)
}

/// Model matrix for the end-of-run images
pub fn end_screen_model() -> Mat4 {
    Mat4::from_scale(Vec3::new(END_SCREEN_SCALE, END_SCREEN_SCALE, 1.0))
}

/// Decide what the renderer draws for the current state
pub fn plan_frame(state: &GameState) -> FramePlan {
    match state.outcome() {
        Outcome::InProgress => {
            let player = &state.player;
            FramePlan::Scene {
                view: state.view_matrix,
                player: SpriteDraw {
                    model: player.model_matrix(),
                    texture_slot: player.animation().texture_slot(),
                    vertices: body_quad(player),
                },
                hud: state.fuel_label(),
            }
        }
        Outcome::Accomplished => FramePlan::End {
            screen: EndScreen::Accomplished,
            model: end_screen_model(),
            vertices: sprite_quad(UvRect::FULL),
        },
        Outcome::Failed => FramePlan::End {
            screen: EndScreen::Failed,
            model: end_screen_model(),
            vertices: sprite_quad(UvRect::FULL),
        },
    }
}
