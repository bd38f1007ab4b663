//! Runtime settings
//!
//! A small JSON file next to the binary; anything missing or malformed falls
//! back to defaults so a bad edit never blocks a game from starting.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Fixed simulation seed for reproducible runs; absent means random
    pub seed: Option<u64>,
    /// Draw the player's collision boxes over the sprite
    pub show_hitboxes: bool,
    /// Outer-loop frame cadence for the headless driver (ms)
    pub frame_ms: u32,
    /// How long the headless demo flies before giving up (ms of simulated time)
    pub demo_ms: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            show_hitboxes: false,
            frame_ms: 16,
            demo_ms: 120_000,
        }
    }
}

impl Settings {
    /// Default settings file location
    pub const DEFAULT_PATH: &'static str = "gapwing.json";

    /// Load settings, falling back to defaults when the file is absent or bad
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(err) => {
                    log::warn!("Ignoring malformed settings in {}: {err}", path.display());
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("No settings at {}, using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Persist settings; failures are logged, never fatal
    pub fn save(&self, path: &Path) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(err) = fs::write(path, json) {
                    log::warn!("Could not save settings to {}: {err}", path.display());
                } else {
                    log::info!("Settings saved");
                }
            }
            Err(err) => log::warn!("Could not serialize settings: {err}"),
        }
    }
}
