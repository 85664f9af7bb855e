//! Screensaver settings
//!
//! Loaded from an optional JSON file; every field falls back to its default.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::sim::Bounds;

/// Errors raised while loading settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid settings: {0}")]
    Invalid(String),
}

/// Screensaver settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Window ===
    pub width: u32,
    pub height: u32,
    /// Presentation loop rate
    pub target_fps: u32,

    // === Animation ===
    /// Curve samples per segment
    pub resolution: u32,
    /// Start with motion paused
    pub start_paused: bool,
    /// RNG seed for point velocities (None = pick one at startup)
    pub seed: Option<u64>,

    // === Drawing ===
    /// Hue degrees added each frame
    pub hue_step: u16,
    pub point_radius: f32,
    pub line_width: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,
            target_fps: TARGET_FPS,

            resolution: DEFAULT_RESOLUTION,
            start_paused: true,
            seed: None,

            hue_step: HUE_STEP,
            point_radius: POINT_RADIUS,
            line_width: LINE_WIDTH,
        }
    }
}

impl Settings {
    /// Parse and validate settings from JSON
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load settings, falling back to defaults on any error
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("{}; using default settings", e);
                Self::default()
            }
        }
    }

    /// Reject values the animation loop cannot run with
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.width == 0 || self.height == 0 {
            return Err(SettingsError::Invalid(format!(
                "window size {}x{} must be non-zero",
                self.width, self.height
            )));
        }
        if self.target_fps == 0 {
            return Err(SettingsError::Invalid("target_fps must be non-zero".into()));
        }
        Ok(())
    }

    /// Bounce area for control points
    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.width, self.height)
    }

    /// Frame duration in seconds
    pub fn frame_dt(&self) -> f64 {
        1.0 / self.target_fps.max(1) as f64
    }
}
