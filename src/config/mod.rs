//! Configuration file support for inkboard.
//!
//! This module handles loading and validating user settings from the
//! configuration file located at `~/.config/inkboard/config.toml`. Settings
//! include the surface size and the drawing defaults (color, line width,
//! brush style).
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::ColorSpec;
pub use types::{DrawingConfig, SurfaceConfig};

use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML
/// file. All fields have sensible defaults and will use those if not
/// specified in the config file.
///
/// # Example TOML
/// ```toml
/// [surface]
/// width = 800
/// height = 600
///
/// [drawing]
/// default_color = "black"
/// default_width = 5.0
/// default_brush = "crayon"
/// ```
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Config {
    /// Surface allocation (width, height)
    #[serde(default)]
    pub surface: SurfaceConfig,

    /// Drawing tool defaults (color, width, brush style)
    #[serde(default)]
    pub drawing: DrawingConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// This method ensures that user-provided config values won't cause
    /// rendering issues. Invalid values are clamped to the nearest valid
    /// value and a warning is logged.
    ///
    /// Validated ranges:
    /// - `surface.width` / `surface.height`: 1 - 8192
    /// - `default_width`: 1.0 - 50.0
    /// - `default_brush`: one of normal / crayon / ink
    fn validate_and_clamp(&mut self) {
        // Surface dimensions: 1 - 8192 per edge
        if !(1..=8192).contains(&self.surface.width) {
            log::warn!(
                "Invalid surface width {}, clamping to 1-8192 range",
                self.surface.width
            );
            self.surface.width = self.surface.width.clamp(1, 8192);
        }
        if !(1..=8192).contains(&self.surface.height) {
            log::warn!(
                "Invalid surface height {}, clamping to 1-8192 range",
                self.surface.height
            );
            self.surface.height = self.surface.height.clamp(1, 8192);
        }

        // Line width: 1.0 - 50.0 (the width slider's range)
        if !(1.0..=50.0).contains(&self.drawing.default_width) {
            log::warn!(
                "Invalid default_width {:.1}, clamping to 1.0-50.0 range",
                self.drawing.default_width
            );
            self.drawing.default_width = self.drawing.default_width.clamp(1.0, 50.0);
        }

        // Brush style must be a known name
        if crate::brush::BrushStyle::parse(&self.drawing.default_brush).is_none() {
            log::warn!(
                "Invalid default_brush '{}', falling back to 'normal'",
                self.drawing.default_brush
            );
            self.drawing.default_brush = "normal".to_string();
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/inkboard/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g.,
    /// HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("inkboard");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from file, or returns defaults if not found.
    ///
    /// Attempts to read and parse the config file at
    /// `~/.config/inkboard/config.toml`. If the file doesn't exist, returns a
    /// Config with default values. All loaded values are validated and
    /// clamped to acceptable ranges.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        let config_str = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        // Validate and clamp values to acceptable ranges
        config.validate_and_clamp();

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Saves the current configuration to file.
    ///
    /// Serializes the config to TOML format and writes it to
    /// `~/.config/inkboard/config.toml`. Creates the parent directory if it
    /// doesn't exist. Used by collaborators that persist runtime changes.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory cannot be created
    /// - The config cannot be serialized to TOML
    /// - The file cannot be written
    pub fn save(&self) -> Result<()> {
        let config_path = Self::get_config_path()?;

        // Create directory if it doesn't exist
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let config_str = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&config_path, config_str)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Saved config to {}", config_path.display());
        Ok(())
    }
}
