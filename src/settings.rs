//! Runtime configuration
//!
//! Loaded from a JSON file next to the binary; any missing or malformed file
//! falls back to defaults so the animation always starts.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::consts;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Canvas dimensions
    pub canvas_width: f32,
    pub canvas_height: f32,

    /// Fixed ticks per second
    pub tick_rate: f32,

    /// Number of randomly generated shapes; 0 selects the classic
    /// circle-and-square scene
    pub random_shapes: usize,

    /// Scene seed; 0 derives one from the wall clock at startup
    pub seed: u64,

    /// Stop after this many ticks; `None` runs until the process is killed
    pub max_ticks: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            canvas_width: consts::CANVAS_WIDTH,
            canvas_height: consts::CANVAS_HEIGHT,
            tick_rate: consts::TICK_RATE,
            random_shapes: 0,
            seed: 0,
            max_ticks: None,
        }
    }
}

impl Settings {
    /// Load settings from a JSON file, falling back to defaults on any error
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Malformed settings in {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("No settings at {}, using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Best-effort save; failures are logged and ignored
    pub fn save(&self, path: &Path) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = std::fs::write(path, json) {
                    log::warn!("Failed to save settings to {}: {}", path.display(), e);
                }
            }
            Err(e) => log::warn!("Failed to serialize settings: {}", e),
        }
    }
}
