//! Damage tracking for incremental repaints.
//!
//! Collects axis-aligned rectangles that changed since the collaborator last
//! drained them, so a display layer can repaint only what moved instead of
//! re-uploading the whole surface every pointer event.

use crate::util::Rect;

/// Tracks dirty rectangles accumulated between repaints.
#[derive(Debug, Default)]
pub struct DirtyTracker {
    regions: Vec<Rect>,
    force_full: bool,
}

impl DirtyTracker {
    /// Creates a new, empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the entire surface as dirty. Clears any accumulated rectangles.
    ///
    /// Used after restore/undo/redo, which may touch any pixel.
    pub fn mark_full(&mut self) {
        self.force_full = true;
        self.regions.clear();
    }

    /// Adds a dirty rectangle if the tracker is not already full.
    pub fn mark_rect(&mut self, rect: Rect) {
        if !rect.is_valid() || self.force_full {
            return;
        }
        self.regions.push(rect);
    }

    /// Adds a dirty rectangle when present.
    pub fn mark_optional_rect(&mut self, rect: Option<Rect>) {
        if let Some(rect) = rect {
            self.mark_rect(rect);
        }
    }

    /// Drains the dirty regions gathered so far.
    ///
    /// When the full surface is marked, returns a single rectangle covering
    /// the entire surface; otherwise returns the accumulated rectangles.
    pub fn take_regions(&mut self, width: u32, height: u32) -> Vec<Rect> {
        if self.force_full {
            self.force_full = false;
            self.regions.clear();
            let width = width.min(i32::MAX as u32) as i32;
            let height = height.min(i32::MAX as u32) as i32;
            match Rect::new(0, 0, width, height) {
                Some(full) => vec![full],
                None => Vec::new(),
            }
        } else {
            self.regions.drain(..).collect()
        }
    }
}
