//! Physics and session tuning
//!
//! Loaded from a JSON file when one is given, otherwise the compiled-in
//! constants are used.

use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Failure to read a settings file
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid settings JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid setting {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
}

/// Tunable simulation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Integration ===
    /// Fixed tick duration in seconds
    pub fixed_dt: f32,
    /// Vertical acceleration (negative is down)
    pub gravity: f32,
    /// Thrust acceleration magnitude
    pub thrust_acceleration: f32,
    /// Horizontal deceleration rate
    pub drift: f32,

    // === Fuel ===
    pub max_fuel: f32,
    pub fuel_burn_per_tick: f32,

    // === World ===
    /// Y below which the run fails
    pub fall_threshold: f32,
    pub start_position: Vec3,
    pub lander_width: f32,
    pub lander_height: f32,
    pub tile_size: f32,

    // === Visuals ===
    pub animation_fps: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            fixed_dt: SIM_DT,
            gravity: GRAVITY,
            thrust_acceleration: THRUST_ACCELERATION,
            drift: DRIFT,

            max_fuel: MAX_FUEL,
            fuel_burn_per_tick: FUEL_BURN_PER_TICK,

            fall_threshold: FALL_THRESHOLD,
            start_position: Vec3::from_array(START_POSITION),
            lander_width: LANDER_WIDTH,
            lander_height: LANDER_HEIGHT,
            tile_size: TILE_SIZE,

            animation_fps: ANIMATION_FPS,
        }
    }
}

impl Settings {
    /// Parse settings from a JSON string; missing fields take defaults
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load settings, falling back to defaults on any error
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Using default settings ({}): {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !(self.fixed_dt > 0.0) {
            return Err(SettingsError::Invalid {
                name: "fixed_dt",
                reason: format!("must be positive, got {}", self.fixed_dt),
            });
        }
        if !(self.tile_size > 0.0) {
            return Err(SettingsError::Invalid {
                name: "tile_size",
                reason: format!("must be positive, got {}", self.tile_size),
            });
        }
        if self.max_fuel < 0.0 {
            return Err(SettingsError::Invalid {
                name: "max_fuel",
                reason: format!("must not be negative, got {}", self.max_fuel),
            });
        }
        if self.drift < 0.0 {
            return Err(SettingsError::Invalid {
                name: "drift",
                reason: format!("must not be negative, got {}", self.drift),
            });
        }
        Ok(())
    }
}
