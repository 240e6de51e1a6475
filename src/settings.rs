//! Simulation parameters
//!
//! Tuned live by the control panel and persisted as JSON. Every field is kept
//! inside its documented bounds regardless of where the value came from.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Live-tunable simulation parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Radius given to newly spawned balls
    ball_size: f32,
    /// Per-axis speed scale for spawned and re-rolled velocities (units/frame)
    ball_speed: f32,
    /// Velocity added toward the center each frame while gravity is on
    gravity_strength: f32,
    /// Central gravity switch
    gravity_enabled: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ball_size: BALL_SIZE_DEFAULT,
            ball_speed: BALL_SPEED_DEFAULT,
            gravity_strength: GRAVITY_DEFAULT,
            gravity_enabled: true,
        }
    }
}

/// Clamp `value` into `[min, max]`, or return `None` if it is not a number
fn bounded(name: &str, value: f32, min: f32, max: f32) -> Option<f32> {
    if !value.is_finite() {
        log::warn!("Ignoring non-finite {name}: {value}");
        return None;
    }
    let clamped = value.clamp(min, max);
    if clamped != value {
        log::debug!("{name} {value} clamped to {clamped}");
    }
    Some(clamped)
}

impl Settings {
    pub fn ball_size(&self) -> f32 {
        self.ball_size
    }

    pub fn ball_speed(&self) -> f32 {
        self.ball_speed
    }

    pub fn gravity_strength(&self) -> f32 {
        self.gravity_strength
    }

    pub fn gravity_enabled(&self) -> bool {
        self.gravity_enabled
    }

    /// Set spawn radius, clamped to [0.05, 0.5]
    pub fn set_ball_size(&mut self, size: f32) {
        if let Some(size) = bounded("ball_size", size, BALL_SIZE_MIN, BALL_SIZE_MAX) {
            self.ball_size = size;
        }
    }

    /// Set spawn speed, clamped to [0.01, 0.1]
    pub fn set_ball_speed(&mut self, speed: f32) {
        if let Some(speed) = bounded("ball_speed", speed, BALL_SPEED_MIN, BALL_SPEED_MAX) {
            self.ball_speed = speed;
        }
    }

    /// Set gravity strength, clamped to [0, 0.1]
    pub fn set_gravity_strength(&mut self, strength: f32) {
        if let Some(strength) = bounded("gravity_strength", strength, GRAVITY_MIN, GRAVITY_MAX) {
            self.gravity_strength = strength;
        }
    }

    pub fn set_gravity_enabled(&mut self, enabled: bool) {
        self.gravity_enabled = enabled;
    }

    /// Flip the gravity switch. Takes effect on the next step.
    pub fn toggle_gravity(&mut self) {
        self.gravity_enabled = !self.gravity_enabled;
    }

    /// Re-apply bounds to every field (after deserializing)
    fn sanitize(&mut self) {
        let raw = *self;
        *self = Self {
            gravity_enabled: raw.gravity_enabled,
            ..Self::default()
        };
        self.set_ball_size(raw.ball_size);
        self.set_ball_speed(raw.ball_speed);
        self.set_gravity_strength(raw.gravity_strength);
    }

    /// Parse settings from JSON. Missing fields take defaults, out-of-range
    /// values are clamped.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut settings: Self = serde_json::from_str(json)?;
        settings.sanitize();
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Invalid settings in {}: {e} - using defaults", path.display());
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Could not read {}: {e} - using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Save settings as JSON. Failures are logged, not returned.
    pub fn save(&self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        let written = self
            .to_json()
            .map_err(|e| e.to_string())
            .and_then(|json| fs::write(path, json).map_err(|e| e.to_string()));
        match written {
            Ok(()) => log::info!("Settings saved to {}", path.display()),
            Err(e) => log::warn!("Failed to save settings to {}: {e}", path.display()),
        }
    }
}
