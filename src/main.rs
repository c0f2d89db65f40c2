//! Lunar Lander entry point
//!
//! Runs a headless session: the autopilot flies the lander through the fixed
//! step loop on a virtual 60 Hz clock until the run ends or the frame limit
//! is hit.
//!
//! Usage: `lunar-lander [settings.json] [level.json]`

use lunar_lander::input::{Autopilot, KeyState};
use lunar_lander::renderer::{FramePlan, plan_frame, tile_map_mesh};
use lunar_lander::sim::{GameState, Outcome, SimulationLoop};
use lunar_lander::{LevelData, LevelError, Settings, SettingsError};

/// Presented frame interval of the virtual clock
const FRAME_TIME: f64 = 1.0 / 60.0;
/// Give up after this many frames (two minutes)
const MAX_FRAMES: u32 = 60 * 120;

#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error("Failed to load settings: {0}")]
    Settings(#[from] SettingsError),

    #[error("Failed to load level: {0}")]
    Level(#[from] LevelError),
}

fn main() {
    env_logger::init();
    log::info!("Lunar Lander (headless) starting...");

    if let Err(e) = run() {
        log::error!("{}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), StartupError> {
    let mut args = std::env::args().skip(1);

    let settings = match args.next() {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    let level = match args.next() {
        Some(path) => LevelData::load(path)?,
        None => LevelData::level_one(),
    };

    let mut state = GameState::new(level, settings)?;
    let mesh = tile_map_mesh(&state.grid);
    log::info!("Tile map mesh: {} vertices", mesh.len());

    let mut sim = SimulationLoop::new();
    let pilot = Autopilot::default();

    let mut now = 0.0;
    let mut frames = 0;
    loop {
        let keys = pilot.keys(&state.player);
        if keys.quit || frames >= MAX_FRAMES {
            state.request_quit();
        }
        if state.quit_requested() {
            break;
        }

        sim.frame(&mut state, &keys.snapshot(), now);

        if let FramePlan::Scene { hud, .. } = plan_frame(&state) {
            if frames % 60 == 0 {
                log::debug!(
                    "t={:.1}s pos=({:.2}, {:.2}) vel=({:.2}, {:.2}) {}",
                    now,
                    state.player.position.x,
                    state.player.position.y,
                    state.player.velocity.x,
                    state.player.velocity.y,
                    hud
                );
            }
        } else {
            break;
        }

        now += FRAME_TIME;
        frames += 1;
    }

    let verdict = match state.outcome() {
        Outcome::Accomplished => "MISSION ACCOMPLISHED",
        Outcome::Failed => "MISSION FAILED",
        Outcome::InProgress => "Quit before landing",
    };
    println!(
        "{} after {} ticks ({} frames), tile {}, {}",
        verdict,
        state.time_ticks,
        frames,
        state.player.collided_tile(),
        state.fuel_label()
    );

    Ok(())
}
