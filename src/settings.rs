use std::path::{Path, PathBuf};

use eframe::egui;
use serde::{Deserialize, Serialize};

use crate::animation::{DEFAULT_SIDES, DEFAULT_TICK_INTERVAL_MS};
use crate::PolywaveApp;

/// Returns the path to the settings file: `~/.config/polywave/settings.json`
fn settings_path() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("polywave");
    path.push("settings.json");
    path
}

/// Persisted user preferences.
///
/// Serialized as JSON to the platform config directory.
/// Only control values are stored; the phase and the running flag
/// always start fresh.
#[derive(Serialize, Deserialize, Debug, PartialEq)]
#[serde(default)]
pub struct AppSettings {
    // Animation
    pub side_count: u32,
    pub tick_interval_ms: u32,

    // Display
    pub show_controls: bool,

    // Background color (stored as u8 triple since Color32 isn't serde-friendly)
    pub background_r: u8,
    pub background_g: u8,
    pub background_b: u8,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            side_count: DEFAULT_SIDES,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,

            show_controls: true,

            background_r: 0,
            background_g: 0,
            background_b: 0,
        }
    }
}

impl AppSettings {
    /// Load settings from disk, falling back to defaults on any error.
    pub fn load() -> Self {
        Self::load_from(&settings_path())
    }

    fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Failed to parse settings ({}), using defaults", e);
                    Self::default()
                }
            },
            Err(e) => {
                log::info!("No settings file found ({}), using defaults", e);
                Self::default()
            }
        }
    }

    /// Save settings to disk as pretty JSON.
    pub fn save(&self) {
        self.save_to(&settings_path());
    }

    fn save_to(&self, path: &Path) {
        if let Some(parent) = path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                log::warn!("Failed to create config directory: {}", e);
                return;
            }
        }
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = std::fs::write(path, json) {
                    log::warn!("Failed to write settings: {}", e);
                }
            }
            Err(e) => {
                log::warn!("Failed to serialize settings: {}", e);
            }
        }
    }

    /// Extract current settings from the running application.
    pub fn from_app(app: &PolywaveApp) -> Self {
        let background = app.view.settings.background;
        Self {
            side_count: app.controller.side_count(),
            tick_interval_ms: app.controller.tick_interval(),

            show_controls: app.show_controls,

            background_r: background.r(),
            background_g: background.g(),
            background_b: background.b(),
        }
    }

    /// Apply loaded settings to the running application.
    ///
    /// Out-of-range values from a hand-edited file are logged and the
    /// application keeps its current value.
    pub fn apply(&self, app: &mut PolywaveApp) {
        if let Err(e) = app.controller.set_side_count(self.side_count) {
            log::warn!("Ignoring stored side count: {}", e);
        }
        if let Err(e) = app.controller.set_tick_interval(self.tick_interval_ms) {
            log::warn!("Ignoring stored tick interval: {}", e);
        }

        app.show_controls = self.show_controls;

        app.view.settings.background =
            egui::Color32::from_rgb(self.background_r, self.background_g, self.background_b);
    }
}
