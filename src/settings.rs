//! Scene settings
//!
//! Data-driven tuning for the demo, persisted as a JSON file next to the
//! binary. Missing or corrupt files fall back to defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Scene tuning knobs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Scene dimensions
    pub scene_width: f32,
    pub scene_height: f32,
    /// Number of carousel buttons
    pub button_count: usize,
    /// Percent chance of a ball spawn per tick (0-100)
    pub spawn_chance_pct: u32,
    /// Tick rate in Hz (informational; the sim always steps 1000/60 ms)
    pub tick_hz: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            scene_width: SCENE_WIDTH,
            scene_height: SCENE_HEIGHT,
            button_count: BUTTON_COUNT,
            spawn_chance_pct: SPAWN_CHANCE_PCT,
            tick_hz: 60,
        }
    }
}

impl Settings {
    /// Clamp degenerate values to something the scene can run with
    pub fn validated(&self) -> Self {
        Self {
            scene_width: self.scene_width.max(1.0),
            scene_height: self.scene_height.max(1.0),
            button_count: self.button_count.max(1),
            spawn_chance_pct: self.spawn_chance_pct.min(100),
            tick_hz: self.tick_hz.max(1),
        }
    }

    /// Load settings from a JSON file, falling back to defaults on any error
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str::<Settings>(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings.validated()
                }
                Err(e) => {
                    log::warn!("Ignoring corrupt settings {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("No settings at {}, using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Save settings as pretty JSON
    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        fs::write(path, json)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validated_clamps_degenerate_values() {
        let bad = Settings {
            scene_width: 0.0,
            scene_height: -5.0,
            button_count: 0,
            spawn_chance_pct: 500,
            tick_hz: 0,
        };
        let fixed = bad.validated();
        assert_eq!(fixed.scene_width, 1.0);
        assert_eq!(fixed.scene_height, 1.0);
        assert_eq!(fixed.button_count, 1);
        assert_eq!(fixed.spawn_chance_pct, 100);
        assert_eq!(fixed.tick_hz, 1);
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let path = std::env::temp_dir().join("orbit-scene-test-missing.json");
        let _ = fs::remove_file(&path);
        assert_eq!(Settings::load(&path), Settings::default());
    }

    #[test]
    fn test_save_then_load() {
        let path = std::env::temp_dir().join("orbit-scene-test-roundtrip.json");
        let settings = Settings {
            button_count: 7,
            spawn_chance_pct: 10,
            ..Default::default()
        };
        settings.save(&path).unwrap();
        assert_eq!(Settings::load(&path), settings);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let parsed: Settings = serde_json::from_str(r#"{"button_count": 5}"#).unwrap();
        assert_eq!(parsed.button_count, 5);
        assert_eq!(parsed.scene_width, SCENE_WIDTH);
        assert_eq!(parsed.spawn_chance_pct, SPAWN_CHANCE_PCT);
    }
}
