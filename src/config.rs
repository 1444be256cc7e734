//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`PONY_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::Path;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Demo simulation configuration
    #[serde(default)]
    pub demo: DemoConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`PONY_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    ///
    /// Missing files are skipped; anything not set anywhere keeps its default value.
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // PONY_DEMO__FRAMES=10 -> demo.frames = 10
        figment = figment.merge(Env::prefixed("PONY_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// Demo simulation configuration
///
/// A quad spins in the plane while its tint and a 3D orientation are interpolated from the
/// start values to the end values over the configured number of frames.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Number of frames to simulate
    pub frames: u32,
    /// Fixed time step in seconds
    pub time_step: f32,
    /// Spin of the quad in degrees per second
    pub rotation_speed: f32,
    /// Position of the quad [x, y]
    pub translation: [f32; 2],
    /// Scale of the quad along its local axes [x, y]
    pub scale: [f32; 2],
    /// Tint on the first frame [r, g, b, a]
    pub start_tint: [f32; 4],
    /// Tint on the last frame [r, g, b, a]
    pub end_tint: [f32; 4],
    /// Orientation on the first frame, Euler angles in degrees [x, y, z]
    pub start_orientation: [f32; 3],
    /// Orientation on the last frame, Euler angles in degrees [x, y, z]
    pub end_orientation: [f32; 3],
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            frames: 120,
            time_step: 1.0 / 60.0,
            rotation_speed: 90.0,
            translation: [0.0, 0.0],
            scale: [1.0, 1.0],
            start_tint: [1.0, 0.0, 0.0, 1.0],
            end_tint: [0.0, 0.0, 1.0, 1.0],
            start_orientation: [0.0, 0.0, 0.0],
            end_orientation: [0.0, 90.0, 0.0],
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
    /// Log a summary of every frame instead of only the last one
    pub log_frames: bool,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_frames: false,
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}
