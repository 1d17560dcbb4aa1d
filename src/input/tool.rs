//! Drawing tool selection.

/// Drawing tool selection.
///
/// The active tool determines what a pointer drag produces: freehand marker
/// pixels, a parametric shape previewed live and committed on release, or
/// erasure. Tool switching is the UI collaborator's job; the engine reads
/// the current tool at each pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tool {
    /// Freehand drawing - follows the pointer path (default)
    #[default]
    Marker,
    /// Straight line - from gesture anchor to release point
    Line,
    /// Circle outline - centered on the anchor, radius to the pointer
    Circle,
    /// Rectangle outline - anchor and pointer as opposite corners
    Rectangle,
    /// Eraser - clears a disk under the pointer
    Eraser,
}

impl Tool {
    /// Whether this tool previews a parametric shape during the gesture
    /// (restore-then-redraw on every move) rather than painting directly.
    pub fn is_shape(&self) -> bool {
        matches!(self, Tool::Line | Tool::Circle | Tool::Rectangle)
    }
}
