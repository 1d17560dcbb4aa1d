//! The drawing surface: an owned RGBA pixel buffer with snapshot support.
//!
//! The surface is the single mutable raster the whole engine paints into.
//! It exposes primitive compositing operations plus snapshot/restore, which
//! the history stack uses for undo/redo and the shape previewer uses to
//! redraw over a clean base. The interface boundary is deliberately explicit
//! (no caller touches pixels directly) so a future renderer could add
//! synchronization without changing callers.

use super::color::Color;
use super::raster::{self, Composite};
use image::RgbaImage;
use log::error;
use thiserror::Error;

/// Longest edge accepted for a surface. Keeps snapshot memory bounded.
const MAX_DIMENSION: u32 = 8192;

/// Errors reported when constructing a [`Surface`].
#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("surface dimensions {width}x{height} are invalid (must be 1..={max} per edge)", max = MAX_DIMENSION)]
    InvalidDimensions { width: u32, height: u32 },
}

/// An immutable full copy of the surface pixels at a point in time.
///
/// Snapshots are captured by [`Surface::snapshot`] and owned by the history
/// stack; they are never mutated after capture.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pixels: RgbaImage,
}

impl Snapshot {
    /// Snapshot dimensions as `(width, height)`.
    pub fn dimensions(&self) -> (u32, u32) {
        self.pixels.dimensions()
    }

    /// Raw RGBA bytes, row-major.
    pub fn as_raw(&self) -> &[u8] {
        self.pixels.as_raw()
    }
}

impl PartialEq for Snapshot {
    fn eq(&self, other: &Self) -> bool {
        self.pixels.dimensions() == other.pixels.dimensions()
            && self.pixels.as_raw() == other.pixels.as_raw()
    }
}

/// Fixed-size RGBA raster, mutable in place.
///
/// Created once per session; dimensions never change afterwards. All
/// coordinates arriving here are already in surface space.
#[derive(Debug)]
pub struct Surface {
    pixels: RgbaImage,
}

impl Surface {
    /// Allocates a surface filled with opaque white.
    ///
    /// # Errors
    /// Returns [`SurfaceError::InvalidDimensions`] when either edge is zero
    /// or exceeds the supported maximum.
    pub fn new(width: u32, height: u32) -> Result<Self, SurfaceError> {
        if width == 0 || height == 0 || width > MAX_DIMENSION || height > MAX_DIMENSION {
            return Err(SurfaceError::InvalidDimensions { width, height });
        }

        Ok(Self {
            pixels: RgbaImage::from_pixel(width, height, super::color::WHITE.to_rgba8()),
        })
    }

    /// Surface dimensions as `(width, height)`.
    pub fn dimensions(&self) -> (u32, u32) {
        self.pixels.dimensions()
    }

    /// Read access to the pixel buffer for display or export.
    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    /// Fills the entire surface with `color`, replacing existing pixels.
    pub fn fill(&mut self, color: Color) {
        let px = color.to_rgba8();
        for pixel in self.pixels.pixels_mut() {
            *pixel = px;
        }
    }

    /// Returns a full independent copy of the current pixels. No side effects.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            pixels: self.pixels.clone(),
        }
    }

    /// Replaces all pixels with the snapshot's contents.
    ///
    /// A dimension mismatch is a caller bug: it trips a debug assertion in
    /// development builds and is ignored (with an error log) in release so
    /// the interaction loop never crashes.
    pub fn restore(&mut self, snapshot: &Snapshot) {
        if snapshot.pixels.dimensions() != self.pixels.dimensions() {
            debug_assert!(
                false,
                "restore with mismatched snapshot {:?} onto surface {:?}",
                snapshot.pixels.dimensions(),
                self.pixels.dimensions()
            );
            error!(
                "Ignoring restore of {:?} snapshot onto {:?} surface",
                snapshot.pixels.dimensions(),
                self.pixels.dimensions()
            );
            return;
        }
        self.pixels.clone_from(&snapshot.pixels);
    }

    /// Draws a round-capped stroke segment from `from` to `to`.
    ///
    /// `mode` selects normal painting or destination-out erasure.
    pub fn stroke_segment(
        &mut self,
        from: (f64, f64),
        to: (f64, f64),
        color: Color,
        width: f64,
        mode: Composite,
    ) {
        raster::stroke_segment(&mut self.pixels, from, to, color, width, mode);
    }

    /// Fills a disk; the eraser stamp when `mode` is [`Composite::Erase`].
    pub fn fill_circle(&mut self, center: (f64, f64), radius: f64, color: Color, mode: Composite) {
        raster::fill_circle(&mut self.pixels, center, radius, color, mode);
    }

    /// Draws a circle outline.
    pub fn stroke_circle(&mut self, center: (f64, f64), radius: f64, color: Color, width: f64) {
        raster::stroke_circle(&mut self.pixels, center, radius, color, width);
    }

    /// Draws an axis-aligned rectangle outline with corners at `a` and `b`.
    pub fn stroke_rect(&mut self, a: (f64, f64), b: (f64, f64), color: Color, width: f64) {
        raster::stroke_rect(&mut self.pixels, a, b, color, width);
    }

    /// Draws a cubic Bézier stroke (the ink brush's flowing segment).
    pub fn stroke_bezier(
        &mut self,
        p0: (f64, f64),
        c1: (f64, f64),
        c2: (f64, f64),
        p1: (f64, f64),
        color: Color,
        width: f64,
    ) {
        raster::stroke_bezier(&mut self.pixels, p0, c1, c2, p1, color, width);
    }
}
