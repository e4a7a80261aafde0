//! Simulation configuration resource.
//!
//! Manages settings loaded from an INI configuration file. Provides defaults
//! for safe startup and a loader that keeps defaults for missing values.
//!
//! # Configuration File Format
//!
//! ```ini
//! [sim]
//! tick_rate = 120
//!
//! [scene]
//! path = assets/scene.json
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

/// Default safe values for startup
const DEFAULT_TICK_RATE: u32 = 120;
const DEFAULT_SCENE_PATH: &str = "./assets/scene.json";
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Simulation configuration resource.
///
/// Stores the fixed frame rate the headless loop runs at and the path of the
/// scene document to spawn.
#[derive(Resource, Debug, Clone)]
pub struct SimConfig {
    /// Fixed frames per second for the headless loop.
    pub tick_rate: u32,
    /// Path to the scene JSON document.
    pub scene_path: PathBuf,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl SimConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            tick_rate: DEFAULT_TICK_RATE,
            scene_path: PathBuf::from(DEFAULT_SCENE_PATH),
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        if let Some(rate) = config.getuint("sim", "tick_rate").ok().flatten() {
            self.tick_rate = rate as u32;
        }
        if let Some(path) = config.get("scene", "path") {
            self.scene_path = PathBuf::from(path);
        }

        info!(
            "Loaded config: tick_rate={}, scene={:?}",
            self.tick_rate, self.scene_path
        );

        Ok(())
    }

    /// Seconds per frame at the configured tick rate.
    pub fn frame_delta(&self) -> f32 {
        1.0 / self.tick_rate.max(1) as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = SimConfig::new();
        assert_eq!(c.tick_rate, 120);
        assert_eq!(c.scene_path, PathBuf::from("./assets/scene.json"));
    }

    #[test]
    fn test_frame_delta() {
        let mut c = SimConfig::new();
        c.tick_rate = 100;
        assert!((c.frame_delta() - 0.01).abs() < 1e-6);
        c.tick_rate = 0;
        assert!((c.frame_delta() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_missing_file_is_error() {
        let mut c = SimConfig::with_path("/nonexistent/config.ini");
        assert!(c.load_from_file().is_err());
        // Defaults survive a failed load.
        assert_eq!(c.tick_rate, 120);
    }
}
