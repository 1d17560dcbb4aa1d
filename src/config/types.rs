//! Configuration type definitions.

use super::enums::ColorSpec;
use crate::brush::BrushStyle;
use serde::{Deserialize, Serialize};

/// Surface allocation settings.
///
/// The surface size is fixed for the whole session once the engine is
/// created; these values only apply at startup.
#[derive(Debug, Serialize, Deserialize)]
pub struct SurfaceConfig {
    /// Surface width in pixels (valid range: 1 - 8192)
    #[serde(default = "default_surface_width")]
    pub width: u32,

    /// Surface height in pixels (valid range: 1 - 8192)
    #[serde(default = "default_surface_height")]
    pub height: u32,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            width: default_surface_width(),
            height: default_surface_height(),
        }
    }
}

/// Drawing-related settings.
///
/// Controls the default tool parameters when the engine starts. The UI
/// collaborator can change all of these at runtime.
#[derive(Debug, Serialize, Deserialize)]
pub struct DrawingConfig {
    /// Default drawing color - either a named color (black, red, green, blue,
    /// yellow, orange, pink, cyan, white) or an RGB array like `[255, 0, 0]`
    #[serde(default = "default_color")]
    pub default_color: ColorSpec,

    /// Default line width in pixels (valid range: 1.0 - 50.0)
    #[serde(default = "default_width")]
    pub default_width: f64,

    /// Default marker brush style: "normal", "crayon", or "ink"
    #[serde(default = "default_brush")]
    pub default_brush: String,
}

impl DrawingConfig {
    /// Resolves the configured brush style name.
    ///
    /// Invalid names were already normalized by config validation, so this
    /// falls back to normal silently.
    pub fn brush_style(&self) -> BrushStyle {
        BrushStyle::parse(&self.default_brush).unwrap_or_default()
    }
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            default_color: default_color(),
            default_width: default_width(),
            default_brush: default_brush(),
        }
    }
}

fn default_surface_width() -> u32 {
    800
}

fn default_surface_height() -> u32 {
    600
}

fn default_color() -> ColorSpec {
    ColorSpec::Name("black".to_string())
}

fn default_width() -> f64 {
    5.0
}

fn default_brush() -> String {
    "normal".to_string()
}
