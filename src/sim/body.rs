//! The lander body and its fixed-step update
//!
//! Each tick integrates motion in a fixed order, then resolves collisions one
//! axis at a time (X, then Y) against other bodies and the tile grid. Striking
//! a non-empty tile ends the run; the tile code decides success or failure.

use glam::{Mat4, Vec2, Vec3};
use serde::{Deserialize, Serialize};

use super::collision::{Axis, box_overlap, boxes_overlap};
use super::grid::{TILE_LANDING_PAD, TileGrid};
use super::tick::TickInput;
use crate::settings::Settings;

/// Discrete facing of the lander
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Rotation {
    /// 0°, thrust pushes up
    #[default]
    Up,
    /// +90° (clockwise), thrust pushes right
    Right,
    /// -90°, thrust pushes left
    Left,
}

impl Rotation {
    pub fn degrees(self) -> f32 {
        match self {
            Rotation::Up => 0.0,
            Rotation::Right => 90.0,
            Rotation::Left => -90.0,
        }
    }

    /// Unit thrust direction for this facing
    pub fn thrust_direction(self) -> Vec2 {
        match self {
            Rotation::Up => Vec2::Y,
            Rotation::Right => Vec2::X,
            Rotation::Left => Vec2::NEG_X,
        }
    }
}

/// Sprite set currently shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Animation {
    #[default]
    Idle,
    Thrusting,
}

impl Animation {
    /// Texture slot for this animation
    pub fn texture_slot(self) -> usize {
        match self {
            Animation::Idle => 0,
            Animation::Thrusting => 1,
        }
    }
}

/// Layout of a sprite atlas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpriteSheet {
    pub cols: u32,
    pub rows: u32,
    /// Frames in the loop (≤ cols * rows)
    pub frames: u32,
}

impl Default for SpriteSheet {
    fn default() -> Self {
        Self {
            cols: 1,
            rows: 1,
            frames: 1,
        }
    }
}

/// Contacts from the most recent tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollisionFlags {
    pub top: bool,
    pub bottom: bool,
    pub left: bool,
    pub right: bool,
}

impl CollisionFlags {
    pub fn any(&self) -> bool {
        self.top || self.bottom || self.left || self.right
    }

    pub fn vertical(&self) -> bool {
        self.top || self.bottom
    }
}

/// A moving, colliding body (the lander)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovingBody {
    /// Center position; Z is carried for rendering only
    pub position: Vec3,
    pub velocity: Vec2,
    pub rotation: Rotation,
    pub width: f32,
    pub height: f32,
    pub flags: CollisionFlags,
    /// Inactive bodies skip `update` entirely
    pub active: bool,
    fuel: f32,
    max_fuel: f32,
    game_over: bool,
    collided_tile: i32,
    animation: Animation,
    sheet: SpriteSheet,
    frame_index: u32,
    frame_timer: f32,
    #[serde(skip)]
    model_matrix: Mat4,
}

impl MovingBody {
    pub fn new(position: Vec3, size: Vec2, max_fuel: f32) -> Self {
        let mut body = Self {
            position,
            velocity: Vec2::ZERO,
            rotation: Rotation::Up,
            width: size.x,
            height: size.y,
            flags: CollisionFlags::default(),
            active: true,
            fuel: max_fuel,
            max_fuel,
            game_over: false,
            collided_tile: 0,
            animation: Animation::Idle,
            sheet: SpriteSheet::default(),
            frame_index: 0,
            frame_timer: 0.0,
            model_matrix: Mat4::IDENTITY,
        };
        body.update_model_matrix();
        body
    }

    /// A full-tank lander at the configured start point
    pub fn lander(settings: &Settings) -> Self {
        Self::new(
            settings.start_position,
            Vec2::new(settings.lander_width, settings.lander_height),
            settings.max_fuel,
        )
    }

    pub fn with_sprite_sheet(mut self, sheet: SpriteSheet) -> Self {
        self.sheet = sheet;
        self
    }

    // --- Fuel ---

    pub fn has_fuel(&self) -> bool {
        self.fuel > 0.0
    }

    pub fn fuel(&self) -> f32 {
        self.fuel
    }

    pub fn max_fuel(&self) -> f32 {
        self.max_fuel
    }

    /// Burn fuel, never dropping below empty
    pub fn decrease_fuel(&mut self, amount: f32) {
        self.fuel = (self.fuel - amount).clamp(0.0, self.max_fuel);
    }

    pub fn set_fuel(&mut self, fuel: f32) {
        self.fuel = fuel.clamp(0.0, self.max_fuel);
    }

    // --- Game status ---

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Code of the last terminal tile struck (0 if none)
    pub fn collided_tile(&self) -> i32 {
        self.collided_tile
    }

    /// End the run, recording the tile responsible
    pub fn end_run(&mut self, tile: i32) {
        self.game_over = true;
        self.collided_tile = tile;
    }

    // --- Visuals ---

    pub fn animation(&self) -> Animation {
        self.animation
    }

    pub fn set_animation(&mut self, animation: Animation) {
        if self.animation != animation {
            self.animation = animation;
            self.frame_index = 0;
            self.frame_timer = 0.0;
        }
    }

    pub fn sprite_sheet(&self) -> SpriteSheet {
        self.sheet
    }

    pub fn frame_index(&self) -> u32 {
        self.frame_index
    }

    /// World transform: translate to position, then rotate about -Z
    pub fn model_matrix(&self) -> Mat4 {
        self.model_matrix
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Advance one fixed tick
    ///
    /// `others` must not contain this body.
    pub fn update(
        &mut self,
        dt: f32,
        input: &TickInput,
        others: &[MovingBody],
        grid: &TileGrid,
        settings: &Settings,
    ) {
        if !self.active {
            return;
        }

        self.flags = CollisionFlags::default();

        self.animate(dt, settings.animation_fps);

        self.position.y += self.velocity.y * dt;

        // The flags were just cleared, so this always applies gravity
        if !self.flags.top {
            self.velocity.y += settings.gravity * dt;
        }

        let acceleration = self.thrust(input.thrust, settings.thrust_acceleration);

        self.velocity.x += acceleration.x * dt;
        self.apply_drift(settings.drift * dt);

        self.position.x += self.velocity.x * dt;
        // Vertical thrust displaces directly rather than accelerating
        self.position.y += acceleration.y * dt;

        self.collide_bodies(others, Axis::X);
        self.collide_grid_x(grid);
        self.collide_bodies(others, Axis::Y);
        self.collide_grid_y(grid);

        if self.flags.vertical() {
            self.game_over = true;
        }

        self.update_model_matrix();
    }

    /// Acceleration from thrust this tick (zero without fuel)
    pub fn thrust(&self, held: bool, magnitude: f32) -> Vec2 {
        if held && self.has_fuel() {
            self.rotation.thrust_direction() * magnitude
        } else {
            Vec2::ZERO
        }
    }

    fn apply_drift(&mut self, amount: f32) {
        if self.velocity.x > 0.0 {
            self.velocity.x = (self.velocity.x - amount).max(0.0);
        } else if self.velocity.x < 0.0 {
            self.velocity.x = (self.velocity.x + amount).min(0.0);
        }
    }

    fn animate(&mut self, dt: f32, fps: f32) {
        if self.velocity == Vec2::ZERO || fps <= 0.0 {
            return;
        }
        self.frame_timer += dt;
        if self.frame_timer >= 1.0 / fps {
            self.frame_timer = 0.0;
            self.frame_index += 1;
            if self.frame_index >= self.sheet.frames {
                self.frame_index = 0;
            }
        }
    }

    fn collide_bodies(&mut self, others: &[MovingBody], axis: Axis) {
        for other in others {
            if !boxes_overlap(self.position, self.size(), other.position, other.size()) {
                continue;
            }
            let overlap = box_overlap(
                self.position,
                self.size(),
                other.position,
                other.size(),
                axis,
            );
            match axis {
                Axis::X => {
                    if self.velocity.x > 0.0 {
                        self.position.x -= overlap;
                        self.velocity.x = 0.0;
                        self.flags.right = true;
                    } else if self.velocity.x < 0.0 {
                        self.position.x += overlap;
                        self.velocity.x = 0.0;
                        self.flags.left = true;
                    }
                }
                Axis::Y => {
                    if self.velocity.y > 0.0 {
                        self.position.y -= overlap;
                        self.velocity.y = 0.0;
                        self.flags.top = true;
                    } else if self.velocity.y < 0.0 {
                        self.position.y += overlap;
                        self.velocity.y = 0.0;
                        self.flags.bottom = true;
                    }
                }
            }
        }
    }

    fn collide_grid_x(&mut self, grid: &TileGrid) {
        let half = self.width / 2.0;
        let left = self.position - Vec3::new(half, 0.0, 0.0);
        let right = self.position + Vec3::new(half, 0.0, 0.0);

        let mut struck = None;

        let probe = grid.is_solid(left);
        if probe.solid && self.velocity.x < 0.0 {
            self.position.x += probe.penetration.x;
            self.velocity.x = 0.0;
            self.flags.left = true;
            struck = Some(probe.tile);
        }

        let probe = grid.is_solid(right);
        if probe.solid && self.velocity.x > 0.0 {
            self.position.x -= probe.penetration.x;
            self.velocity.x = 0.0;
            self.flags.right = true;
            struck = Some(probe.tile);
        }

        if let Some(tile) = struck {
            self.classify(tile);
        }
    }

    fn collide_grid_y(&mut self, grid: &TileGrid) {
        let half = self.height / 2.0;
        let top = self.position + Vec3::new(0.0, half, 0.0);
        let bottom = self.position - Vec3::new(0.0, half, 0.0);

        let mut struck = None;

        let probe = grid.is_solid(bottom);
        if probe.solid && self.velocity.y < 0.0 {
            self.position.y += probe.penetration.y;
            self.velocity.y = 0.0;
            self.flags.bottom = true;
            struck = Some(probe.tile);
        }

        let probe = grid.is_solid(top);
        if probe.solid && self.velocity.y > 0.0 {
            self.position.y -= probe.penetration.y;
            self.velocity.y = 0.0;
            self.flags.top = true;
            struck = Some(probe.tile);
        }

        if let Some(tile) = struck {
            self.classify(tile);
        }
    }

    /// Terminal transition from a struck tile; later calls overwrite earlier ones
    fn classify(&mut self, tile: i32) {
        if tile <= 0 {
            return;
        }
        if tile == TILE_LANDING_PAD {
            log::debug!("Touched landing pad at {:?}", self.position);
        } else {
            log::debug!("Struck hazard tile {} at {:?}", tile, self.position);
        }
        self.end_run(tile);
    }

    fn update_model_matrix(&mut self) {
        self.model_matrix = Mat4::from_translation(self.position)
            * Mat4::from_axis_angle(Vec3::NEG_Z, self.rotation.degrees().to_radians());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::LevelData;
    use crate::sim::grid::{TILE_GROUND, TILE_HAZARD};
    use proptest::prelude::*;

    const DT: f32 = 1.0 / 60.0;

    /// 3x3 grid whose bottom row is filled with `floor`
    fn floor_grid(floor: u32) -> TileGrid {
        #[rustfmt::skip]
        let tiles = vec![
            0, 0, 0,
            0, 0, 0,
            floor, floor, floor,
        ];
        TileGrid::new(LevelData::new(3, 3, tiles).unwrap(), 1.0).unwrap()
    }

    fn empty_grid() -> TileGrid {
        TileGrid::new(LevelData::new(1, 1, vec![0]).unwrap(), 1.0).unwrap()
    }

    fn weightless() -> Settings {
        Settings {
            gravity: 0.0,
            drift: 0.0,
            ..Settings::default()
        }
    }

    fn body_at(x: f32, y: f32) -> MovingBody {
        MovingBody::new(Vec3::new(x, y, 0.0), Vec2::ONE, 100.0)
    }

    fn idle() -> TickInput {
        TickInput::default()
    }

    fn thrusting(rotation: Rotation) -> TickInput {
        TickInput {
            thrust: true,
            rotation: Some(rotation),
        }
    }

    #[test]
    fn test_free_fall_matches_closed_form() {
        let settings = Settings::default();
        let grid = empty_grid();
        let mut body = body_at(-50.0, 10.0);
        let v0 = 0.7;
        body.velocity.y = v0;

        let n = 120;
        for _ in 0..n {
            body.update(DT, &idle(), &[], &grid, &settings);
        }

        // Position integrates with the pre-gravity velocity each tick
        let g = settings.gravity;
        let nf = n as f32;
        let expected_y = 10.0 + v0 * nf * DT + g * DT * DT * nf * (nf - 1.0) / 2.0;
        let expected_vy = v0 + g * nf * DT;
        assert!((body.position.y - expected_y).abs() < 1e-3);
        assert!((body.velocity.y - expected_vy).abs() < 1e-4);
        assert!(!body.is_game_over());
    }

    #[test]
    fn test_landing_on_ground_fails_run() {
        let settings = Settings::default();
        let grid = floor_grid(TILE_GROUND as u32);
        // Bottom edge sits 0.01 above the ground row; one tick crosses it
        let mut body = body_at(1.5, -1.49);
        body.velocity.y = -1.0;

        body.update(DT, &idle(), &[], &grid, &settings);

        assert!(body.flags.bottom);
        assert_eq!(body.velocity.y, 0.0);
        assert!((body.position.y - (-1.5)).abs() < 1e-5);
        assert!(body.is_game_over());
        assert_eq!(body.collided_tile(), TILE_GROUND);
    }

    #[test]
    fn test_landing_on_pad_succeeds() {
        let settings = Settings::default();
        let grid = floor_grid(TILE_LANDING_PAD as u32);
        let mut body = body_at(1.5, -1.49);
        body.velocity.y = -1.0;

        body.update(DT, &idle(), &[], &grid, &settings);

        assert!(body.flags.bottom);
        assert_eq!(body.velocity.y, 0.0);
        assert!((body.position.y - (-1.5)).abs() < 1e-5);
        assert!(body.is_game_over());
        assert_eq!(body.collided_tile(), TILE_LANDING_PAD);
    }

    #[test]
    fn test_no_fuel_no_thrust() {
        let settings = weightless();
        let grid = empty_grid();

        for rotation in [Rotation::Up, Rotation::Left, Rotation::Right] {
            let mut body = body_at(-50.0, 10.0);
            body.rotation = rotation;
            body.set_fuel(0.0);
            assert!(!body.has_fuel());
            assert_eq!(body.thrust(true, settings.thrust_acceleration), Vec2::ZERO);

            body.update(DT, &thrusting(rotation), &[], &grid, &settings);
            assert_eq!(body.velocity, Vec2::ZERO);
            assert_eq!(body.position, Vec3::new(-50.0, 10.0, 0.0));
        }
    }

    #[test]
    fn test_thrust_follows_rotation() {
        let settings = weightless();
        let grid = empty_grid();
        let a = settings.thrust_acceleration;

        let mut body = body_at(-50.0, 10.0);
        body.rotation = Rotation::Right;
        body.update(DT, &thrusting(Rotation::Right), &[], &grid, &settings);
        assert!((body.velocity.x - a * DT).abs() < 1e-6);
        assert_eq!(body.velocity.y, 0.0);

        let mut body = body_at(-50.0, 10.0);
        body.rotation = Rotation::Left;
        body.update(DT, &thrusting(Rotation::Left), &[], &grid, &settings);
        assert!((body.velocity.x + a * DT).abs() < 1e-6);

        // Upward thrust moves the body without touching its velocity
        let mut body = body_at(-50.0, 10.0);
        body.update(DT, &thrusting(Rotation::Up), &[], &grid, &settings);
        assert_eq!(body.velocity, Vec2::ZERO);
        assert!((body.position.y - (10.0 + a * DT)).abs() < 1e-5);
    }

    #[test]
    fn test_drift_stops_at_zero() {
        let settings = Settings {
            gravity: 0.0,
            ..Settings::default()
        };
        let grid = empty_grid();

        let mut body = body_at(-50.0, 10.0);
        body.velocity.x = 0.001;
        body.update(DT, &idle(), &[], &grid, &settings);
        assert_eq!(body.velocity.x, 0.0);

        let mut body = body_at(-50.0, 10.0);
        body.velocity.x = -0.001;
        body.update(DT, &idle(), &[], &grid, &settings);
        assert_eq!(body.velocity.x, 0.0);

        let mut body = body_at(-50.0, 10.0);
        body.velocity.x = 2.0;
        body.update(DT, &idle(), &[], &grid, &settings);
        assert!((body.velocity.x - (2.0 - settings.drift * DT)).abs() < 1e-6);
    }

    #[test]
    fn test_wall_hit_on_right() {
        #[rustfmt::skip]
        let tiles = vec![
            0, 0, 2,
            0, 0, 2,
        ];
        let grid = TileGrid::new(LevelData::new(3, 2, tiles).unwrap(), 1.0).unwrap();
        let settings = weightless();
        // Right edge at x = 1.99, moving right
        let mut body = body_at(1.49, -0.5);
        body.velocity.x = 3.0;

        body.update(DT, &idle(), &[], &grid, &settings);

        assert!(body.flags.right);
        assert_eq!(body.velocity.x, 0.0);
        assert!((body.position.x - 1.5).abs() < 1e-5);
        assert!(body.is_game_over());
        assert_eq!(body.collided_tile(), TILE_HAZARD);
    }

    #[test]
    fn test_moving_away_does_not_resolve() {
        #[rustfmt::skip]
        let tiles = vec![
            1, 0, 0,
            1, 0, 0,
        ];
        let grid = TileGrid::new(LevelData::new(3, 2, tiles).unwrap(), 1.0).unwrap();
        let settings = weightless();
        // Left edge inside column 0, but heading right
        let mut body = body_at(1.3, -0.5);
        body.velocity.x = 1.0;

        body.update(DT, &idle(), &[], &grid, &settings);

        assert!(!body.flags.any());
        assert_eq!(body.velocity.x, 1.0);
        assert!(!body.is_game_over());
        assert_eq!(body.collided_tile(), 0);
    }

    #[test]
    fn test_y_classification_overwrites_x() {
        // Hazard to the right, pad below
        #[rustfmt::skip]
        let tiles = vec![
            0, 0, 2,
            3, 3, 3,
        ];
        let grid = TileGrid::new(LevelData::new(3, 2, tiles).unwrap(), 1.0).unwrap();
        let settings = weightless();
        let mut body = body_at(1.49, -0.49);
        body.velocity = Vec2::new(1.0, -1.0);

        body.update(DT, &idle(), &[], &grid, &settings);

        assert!(body.flags.right);
        assert!(body.flags.bottom);
        assert_eq!(body.collided_tile(), TILE_LANDING_PAD);
    }

    #[test]
    fn test_gravity_ignores_stale_top_flag() {
        // Known quirk: the top-contact gate reads flags cleared at the start
        // of the same tick, so a previous tick's contact never holds gravity off.
        let settings = Settings::default();
        let grid = empty_grid();
        let mut body = body_at(-50.0, 10.0);
        body.flags.top = true;

        body.update(DT, &idle(), &[], &grid, &settings);

        assert!((body.velocity.y - settings.gravity * DT).abs() < 1e-6);
        assert!(!body.flags.top);
    }

    #[test]
    fn test_inactive_body_is_frozen() {
        let settings = Settings::default();
        let grid = empty_grid();
        let mut body = body_at(-50.0, 10.0);
        body.velocity = Vec2::new(1.0, 1.0);
        body.active = false;

        body.update(DT, &idle(), &[], &grid, &settings);

        assert_eq!(body.position, Vec3::new(-50.0, 10.0, 0.0));
        assert_eq!(body.velocity, Vec2::new(1.0, 1.0));
    }

    #[test]
    fn test_body_push_out_on_x() {
        let settings = weightless();
        let grid = empty_grid();
        let obstacle = body_at(-49.2, 10.0);
        let mut body = body_at(-50.0, 10.0);
        body.velocity.x = 1.0;

        body.update(DT, &idle(), std::slice::from_ref(&obstacle), &grid, &settings);

        assert!(body.flags.right);
        assert_eq!(body.velocity.x, 0.0);
        // Pushed back until the edges touch
        assert!((obstacle.position.x - body.position.x - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_body_contact_below_ends_run() {
        let settings = weightless();
        let grid = empty_grid();
        let platform = body_at(-50.0, 9.2);
        let mut body = body_at(-50.0, 10.0);
        body.velocity.y = -1.0;

        body.update(DT, &idle(), std::slice::from_ref(&platform), &grid, &settings);

        assert!(body.flags.bottom);
        assert_eq!(body.velocity.y, 0.0);
        assert!(body.is_game_over());
        assert_eq!(body.collided_tile(), 0);
    }

    #[test]
    fn test_model_matrix_rotation() {
        let settings = weightless();
        let grid = empty_grid();
        let mut body = body_at(-50.0, 10.0);
        body.rotation = Rotation::Right;
        body.update(DT, &idle(), &[], &grid, &settings);

        let m = body.model_matrix();
        let origin = m.transform_point3(Vec3::ZERO);
        assert!((origin - Vec3::new(-50.0, 10.0, 0.0)).length() < 1e-5);
        // Facing right: local up points along +X
        let nose = m.transform_vector3(Vec3::Y);
        assert!((nose - Vec3::X).length() < 1e-5);
    }

    #[test]
    fn test_animation_advances_only_while_moving() {
        let settings = Settings {
            animation_fps: 10.0,
            ..weightless()
        };
        let grid = empty_grid();
        let sheet = SpriteSheet {
            cols: 2,
            rows: 1,
            frames: 2,
        };

        let mut still = body_at(-50.0, 10.0).with_sprite_sheet(sheet);
        for _ in 0..30 {
            still.update(DT, &idle(), &[], &grid, &settings);
        }
        assert_eq!(still.frame_index(), 0);

        let mut moving = body_at(-50.0, 10.0).with_sprite_sheet(sheet);
        moving.velocity.y = 0.5;
        for _ in 0..7 {
            moving.update(DT, &idle(), &[], &grid, &settings);
        }
        assert_eq!(moving.frame_index(), 1);
        for _ in 0..7 {
            moving.update(DT, &idle(), &[], &grid, &settings);
        }
        assert_eq!(moving.frame_index(), 0);
    }

    #[test]
    fn test_fuel_is_clamped() {
        let mut body = body_at(0.0, 0.0);
        body.decrease_fuel(30.0);
        assert_eq!(body.fuel(), 70.0);
        body.decrease_fuel(500.0);
        assert_eq!(body.fuel(), 0.0);
        assert!(!body.has_fuel());
        body.set_fuel(1000.0);
        assert_eq!(body.fuel(), body.max_fuel());
    }

    proptest! {
        #[test]
        fn prop_free_flight_matches_closed_form(
            dt in 0.001f32..0.05,
            vx0 in -5.0f32..5.0,
            vy0 in -5.0f32..5.0,
            n in 1u32..200,
        ) {
            let settings = Settings::default();
            let grid = empty_grid();
            let start = Vec3::new(-50.0, 10.0, 0.0);
            let mut body = MovingBody::new(start, Vec2::ONE, 100.0);
            body.velocity = Vec2::new(vx0, vy0);

            for _ in 0..n {
                body.update(dt, &idle(), &[], &grid, &settings);
            }

            let (dt, n) = (f64::from(dt), f64::from(n));
            let g = f64::from(settings.gravity);
            let (vx0, vy0) = (f64::from(vx0), f64::from(vy0));

            let vy = vy0 + g * n * dt;
            let y = f64::from(start.y) + vy0 * n * dt + g * dt * dt * n * (n - 1.0) / 2.0;

            // Drift shrinks |vx| by a fixed step each tick and stops at zero
            let step = f64::from(settings.drift) * dt;
            let speed = vx0.abs();
            let moving = n.min((speed / step).floor());
            let vx = vx0.signum() * (speed - n * step).max(0.0);
            let x = f64::from(start.x)
                + vx0.signum() * dt * (moving * speed - step * moving * (moving + 1.0) / 2.0);

            let tolerance = |expected: f64| 1e-3 * (1.0 + expected.abs());
            prop_assert!((f64::from(body.velocity.y) - vy).abs() < tolerance(vy));
            prop_assert!((f64::from(body.position.y) - y).abs() < tolerance(y));
            prop_assert!((f64::from(body.velocity.x) - vx).abs() < tolerance(vx));
            prop_assert!((f64::from(body.position.x) - x).abs() < tolerance(x));
            prop_assert!(!body.flags.any());
            prop_assert!(!body.is_game_over());
        }

        #[test]
        fn prop_flags_zero_velocity(
            x in 0.0f32..3.0,
            y in -3.0f32..0.0,
            vx in -5.0f32..5.0,
            vy in -5.0f32..5.0,
        ) {
            let grid = floor_grid(TILE_GROUND as u32);
            let settings = Settings::default();
            let mut body = body_at(x, y);
            body.velocity = Vec2::new(vx, vy);

            body.update(DT, &idle(), &[], &grid, &settings);

            if body.flags.left || body.flags.right {
                prop_assert_eq!(body.velocity.x, 0.0);
            }
            if body.flags.top || body.flags.bottom {
                prop_assert_eq!(body.velocity.y, 0.0);
            }
        }

        #[test]
        fn prop_game_over_is_sticky(
            y in -2.0f32..2.0,
            vy in -5.0f32..0.0,
            ticks in 1usize..120,
        ) {
            let grid = floor_grid(TILE_LANDING_PAD as u32);
            let settings = Settings::default();
            let mut body = body_at(1.5, y);
            body.velocity.y = vy;

            let mut seen = false;
            for _ in 0..ticks {
                body.update(DT, &idle(), &[], &grid, &settings);
                if seen {
                    prop_assert!(body.is_game_over());
                }
                seen |= body.is_game_over();
            }
        }
    }
}
