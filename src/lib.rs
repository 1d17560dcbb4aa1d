//! Library exports for the inkboard drawing engine.
//!
//! Inkboard is the core of an interactive raster sketch board: pointer
//! events go in, pixels come out. The engine owns the pixel surface, renders
//! marker strokes under three brush styles plus an eraser, previews
//! parametric shapes flicker-free, and keeps a snapshot history so every
//! committed gesture can be undone and redone.
//!
//! The UI shell (toolbars, palette, sliders, file dialogs) is expected to
//! live elsewhere: it feeds [`input::PointerEvent`]s and tool-state changes
//! into an [`input::InputState`] and reads pixels and damage rectangles back
//! out for display.

pub mod brush;
pub mod config;
pub mod draw;
pub mod history;
pub mod input;
pub mod util;

pub use config::Config;
