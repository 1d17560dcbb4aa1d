//! Utility functions for colors and geometry.
//!
//! This module provides:
//! - Color name mapping used by the configuration system
//! - Point/segment geometry helpers shared by the brush engine and rasterizer
//! - The [`Rect`] type used for damage tracking

use crate::draw::{Color, color::*};

// ============================================================================
// Color Mapping
// ============================================================================

/// Maps color name strings to Color values.
///
/// Used by the configuration system to parse color names from the config file.
///
/// # Supported Names (case-insensitive)
/// - "black", "red", "green", "blue", "yellow", "orange", "pink", "cyan", "white"
///
/// # Arguments
/// * `name` - Color name string
///
/// # Returns
/// - `Some(Color)` if the name matches a predefined color
/// - `None` if the name is not recognized
pub fn name_to_color(name: &str) -> Option<Color> {
    match name.to_lowercase().as_str() {
        "black" => Some(BLACK),
        "red" => Some(RED),
        "green" => Some(GREEN),
        "blue" => Some(BLUE),
        "yellow" => Some(YELLOW),
        "orange" => Some(ORANGE),
        "pink" => Some(PINK),
        "cyan" => Some(CYAN),
        "white" => Some(WHITE),
        _ => None,
    }
}

/// Maps a Color value to its human-readable name.
///
/// Uses approximate matching (0.1 tolerance per channel) so colors that went
/// through an RGBA8 round trip still resolve. Used by status displays.
///
/// # Returns
/// A static string with the color name, or "Custom" if the color doesn't
/// match any predefined color.
pub fn color_to_name(color: &Color) -> &'static str {
    if color.r < 0.1 && color.g < 0.1 && color.b < 0.1 {
        "Black"
    } else if color.r > 0.9 && color.g < 0.1 && color.b < 0.1 {
        "Red"
    } else if color.r < 0.1 && color.g > 0.9 && color.b < 0.1 {
        "Green"
    } else if color.r < 0.1 && color.g < 0.1 && color.b > 0.9 {
        "Blue"
    } else if color.r > 0.9 && color.g > 0.9 && color.b < 0.1 {
        "Yellow"
    } else if color.r > 0.9 && (0.4..=0.6).contains(&color.g) && color.b < 0.1 {
        "Orange"
    } else if color.r > 0.9 && color.g < 0.1 && color.b > 0.9 {
        "Pink"
    } else if color.r < 0.1 && color.g > 0.9 && color.b > 0.9 {
        "Cyan"
    } else if color.r > 0.9 && color.g > 0.9 && color.b > 0.9 {
        "White"
    } else {
        "Custom"
    }
}

// ============================================================================
// Geometry Utilities
// ============================================================================

/// Euclidean distance between two points.
pub fn distance(a: (f64, f64), b: (f64, f64)) -> f64 {
    let dx = b.0 - a.0;
    let dy = b.1 - a.1;
    (dx * dx + dy * dy).sqrt()
}

/// Direction angle (radians) of the segment from `a` to `b`.
///
/// Returns 0.0 for a degenerate segment so callers never divide by zero;
/// degenerate segments are filtered out before rendering anyway.
pub fn segment_angle(a: (f64, f64), b: (f64, f64)) -> f64 {
    (b.1 - a.1).atan2(b.0 - a.0)
}

/// Axis-aligned rectangle helper used for damage tracking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    /// Creates a new rectangle. Width/height must be positive.
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Option<Self> {
        if width <= 0 || height <= 0 {
            None
        } else {
            Some(Self {
                x,
                y,
                width,
                height,
            })
        }
    }

    /// Builds a rectangle from min/max bounds (inclusive min, exclusive max).
    pub fn from_min_max(min_x: i32, min_y: i32, max_x: i32, max_y: i32) -> Option<Self> {
        let width = max_x - min_x;
        let height = max_y - min_y;
        Self::new(min_x, min_y, width, height)
    }

    /// Bounding box of a set of points, expanded by `pad` in every direction.
    ///
    /// Returns `None` for an empty point set. This is how stroke segments and
    /// shape previews report the damage they cause: the geometric bounds plus
    /// stroke radius (and jitter, for stylized brushes).
    pub fn from_points_padded(points: &[(f64, f64)], pad: f64) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut min_x = first.0;
        let mut max_x = first.0;
        let mut min_y = first.1;
        let mut max_y = first.1;

        for &(x, y) in rest {
            min_x = min_x.min(x);
            max_x = max_x.max(x);
            min_y = min_y.min(y);
            max_y = max_y.max(y);
        }

        Self::from_min_max(
            (min_x - pad).floor() as i32,
            (min_y - pad).floor() as i32,
            (max_x + pad).ceil() as i32,
            (max_y + pad).ceil() as i32,
        )
    }

    /// Returns true if rectangle has a positive area.
    pub fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{BLACK, RED, WHITE};

    #[test]
    fn distance_and_angle_handle_axis_aligned_segments() {
        assert_eq!(distance((0.0, 0.0), (3.0, 4.0)), 5.0);
        assert_eq!(segment_angle((0.0, 0.0), (10.0, 0.0)), 0.0);
        assert!((segment_angle((0.0, 0.0), (0.0, 5.0)) - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn degenerate_segment_angle_is_zero() {
        assert_eq!(segment_angle((5.0, 5.0), (5.0, 5.0)), 0.0);
    }

    #[test]
    fn padded_bounds_cover_stroke_radius() {
        let rect = Rect::from_points_padded(&[(10.0, 20.0), (30.0, 25.0)], 3.0).unwrap();
        assert_eq!(rect.x, 7);
        assert_eq!(rect.y, 17);
        assert_eq!(rect.width, 26);
        assert_eq!(rect.height, 11);
    }

    #[test]
    fn padded_bounds_reject_empty_input() {
        assert!(Rect::from_points_padded(&[], 2.0).is_none());
    }

    #[test]
    fn name_color_mappings_round_trip() {
        assert_eq!(name_to_color("red").unwrap(), RED);
        assert_eq!(name_to_color("BLACK").unwrap(), BLACK);
        assert!(name_to_color("chartreuse").is_none());
        assert_eq!(color_to_name(&WHITE), "White");
        assert_eq!(
            color_to_name(&Color {
                r: 0.42,
                g: 0.42,
                b: 0.42,
                a: 1.0
            }),
            "Custom"
        );
    }
}
