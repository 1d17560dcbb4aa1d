//! Pointer event handlers: the transitions of the gesture state machine.

use crate::input::Tool;
use crate::util::{self, Rect};
use log::debug;

use super::{GestureState, InputState};

impl InputState {
    /// Processes a pointer-down event.
    ///
    /// # Behavior
    /// - Idle: starts a gesture anchored at the event position. The marker
    ///   tool seeds the stroke window with the anchor at full pressure.
    /// - Active: a second down without an intervening up is a frontend
    ///   glitch; it is ignored so the running gesture stays intact.
    pub fn on_pointer_down(&mut self, x: f64, y: f64) {
        if !matches!(self.state, GestureState::Idle) {
            debug!("Ignoring pointer-down during an active gesture");
            return;
        }

        if self.current_tool == Tool::Marker {
            self.brush.begin_stroke((x, y));
        }
        self.state = GestureState::Active {
            anchor: (x, y),
            last: (x, y),
            preview: None,
        };
        debug!(
            "Gesture start at ({x:.1}, {y:.1}) with {:?}",
            self.current_tool
        );
    }

    /// Processes a pointer-move event.
    ///
    /// # Behavior
    /// - Marker: renders a stroke increment in the current brush style.
    /// - Eraser: clears a disk under the pointer.
    /// - Shape tools: restores the pre-gesture snapshot, then draws one
    ///   shape from the anchor to the current position (live preview).
    /// - Idle: no transition, nothing drawn.
    pub fn on_pointer_move(&mut self, x: f64, y: f64) {
        let GestureState::Active {
            anchor,
            last,
            preview,
        } = self.state
        else {
            return;
        };

        let color = self.current_color;
        let width = self.current_width;
        let mut new_preview = preview;

        match self.current_tool {
            Tool::Eraser => {
                let damage = self.brush.erase_at(&mut self.surface, (x, y), width);
                self.dirty_tracker.mark_optional_rect(damage);
            }
            Tool::Marker => {
                let damage = self.brush.stroke_to(
                    &mut self.surface,
                    last,
                    (x, y),
                    self.brush_style,
                    color,
                    width,
                );
                self.dirty_tracker.mark_optional_rect(damage);
            }
            Tool::Line | Tool::Circle | Tool::Rectangle => {
                // Erase the previous preview frame by restoring the snapshot
                // that was current when the gesture began (the cursor cannot
                // move mid-gesture), then draw the one current shape.
                self.surface.restore(self.history.current());
                new_preview = self.draw_shape(anchor, (x, y));

                // Only the union of the old and new shape bounds actually
                // changed on screen.
                self.dirty_tracker.mark_optional_rect(preview);
                self.dirty_tracker.mark_optional_rect(new_preview);
            }
        }

        self.state = GestureState::Active {
            anchor,
            last: (x, y),
            preview: new_preview,
        };
    }

    /// Processes a pointer-up event.
    ///
    /// Ends the gesture: the stroke window is discarded and the surface is
    /// committed to history exactly once.
    pub fn on_pointer_up(&mut self, _x: f64, _y: f64) {
        if !matches!(self.state, GestureState::Active { .. }) {
            return;
        }

        self.brush.end_stroke();
        self.history.commit(self.surface.snapshot());
        self.state = GestureState::Idle;
        debug!(
            "Gesture committed: history at {}/{}",
            self.history.cursor(),
            self.history.len() - 1
        );
    }

    /// Processes the pointer leaving the surface.
    ///
    /// An active gesture is not ended: the leave is treated as a synthetic
    /// move at the last known position, keeping the drawing continuous across
    /// the boundary.
    pub fn on_pointer_leave(&mut self) {
        if let GestureState::Active { last, .. } = self.state {
            self.on_pointer_move(last.0, last.1);
        }
    }

    /// Processes the pointer re-entering the surface.
    ///
    /// If a gesture is still active (button held while outside), the stroke
    /// window and segment start are reset to a single sample at the re-entry
    /// position, so no spurious segment connects the exit and entry points.
    /// Shape anchors are deliberately preserved.
    pub fn on_pointer_enter(&mut self, x: f64, y: f64) {
        if let GestureState::Active {
            anchor, preview, ..
        } = self.state
        {
            self.brush.reseed((x, y));
            self.state = GestureState::Active {
                anchor,
                last: (x, y),
                preview,
            };
            debug!("Gesture re-entered at ({x:.1}, {y:.1})");
        }
    }

    /// Draws the parametric shape for the active tool from `anchor` to
    /// `position` and returns its damage bounds.
    fn draw_shape(&mut self, anchor: (f64, f64), position: (f64, f64)) -> Option<Rect> {
        let color = self.current_color;
        let width = self.current_width;
        let pad = width / 2.0 + 1.0;

        match self.current_tool {
            Tool::Line => {
                self.surface
                    .stroke_segment(anchor, position, color, width, crate::draw::Composite::Paint);
                Rect::from_points_padded(&[anchor, position], pad)
            }
            Tool::Circle => {
                let radius = util::distance(anchor, position);
                self.surface.stroke_circle(anchor, radius, color, width);
                Rect::from_points_padded(&[anchor], radius + pad)
            }
            Tool::Rectangle => {
                self.surface.stroke_rect(anchor, position, color, width);
                Rect::from_points_padded(&[anchor, position], pad)
            }
            // Marker and eraser never route here.
            _ => None,
        }
    }
}
