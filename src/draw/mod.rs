//! Rasterization primitives and the drawing surface.
//!
//! This module defines the core raster types of the engine:
//! - [`Color`]: RGBA color representation with predefined color constants
//! - [`Surface`]: the owned pixel buffer with compositing operations
//! - [`Snapshot`]: immutable full-surface pixel copies used for undo/redo
//! - [`Composite`]: how new pixels combine with existing ones
//! - [`DirtyTracker`]: damage rectangles for incremental repaints

pub mod color;
pub mod dirty;
pub mod raster;
pub mod surface;

// Re-export commonly used types at module level
pub use color::Color;
pub use dirty::DirtyTracker;
pub use raster::Composite;
pub use surface::{Snapshot, Surface, SurfaceError};

// Re-export color constants for public API (unused internally but part of public interface)
#[allow(unused_imports)]
pub use color::{BLACK, BLUE, CYAN, GREEN, ORANGE, PINK, RED, TRANSPARENT, WHITE, YELLOW};
