//! Gesture state machine and engine state management.

use crate::brush::{BrushEngine, BrushStyle};
use crate::config::Config;
use crate::draw::{Color, DirtyTracker, Surface, SurfaceError};
use crate::history::HistoryStack;
use crate::input::{PointerEvent, Tool};
use crate::util::Rect;
use image::RgbaImage;
use log::debug;

/// Current gesture state machine.
///
/// A gesture runs from pointer-down to pointer-up. The anchor point, the
/// last known pointer position, and the current shape-preview bounds are
/// carried inside the `Active` variant rather than as ambient fields, so a
/// finished gesture cannot leak stale data into the next one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureState {
    /// Not drawing - waiting for a pointer-down
    Idle,
    /// A gesture is in progress (pointer button held)
    Active {
        /// Position of the initial pointer-down; shape tools draw from here
        anchor: (f64, f64),
        /// Most recent pointer position (used for synthetic leave moves)
        last: (f64, f64),
        /// Damage bounds of the currently visible shape preview, if any
        preview: Option<Rect>,
    },
}

/// Main engine state: surface, history, brush engine, and tool parameters.
///
/// This is the type the UI collaborator talks to. It feeds pointer events
/// through [`InputState::handle_pointer_event`], mutates the tool-state
/// fields directly (changes apply from the next segment onward), triggers
/// [`InputState::undo`]/[`InputState::redo`], and reads pixels and damage
/// rectangles back out for display.
pub struct InputState {
    pub(super) surface: Surface,
    pub(super) history: HistoryStack,
    pub(super) brush: BrushEngine,
    /// Currently selected tool
    pub current_tool: Tool,
    /// Current drawing color
    pub current_color: Color,
    /// Current line width in pixels
    pub current_width: f64,
    /// Rendering style for the marker tool
    pub brush_style: BrushStyle,
    /// Current gesture state machine
    pub state: GestureState,
    /// Damage accumulated since the collaborator last drained it
    pub(super) dirty_tracker: DirtyTracker,
}

impl InputState {
    /// Creates an engine with an opaque-white surface of the given size and
    /// default tool parameters (black marker, width 5, normal style).
    ///
    /// The initial surface state is captured as history entry 0, so the very
    /// first committed gesture can be undone back to blank.
    ///
    /// # Errors
    /// Returns [`SurfaceError::InvalidDimensions`] for a zero or oversized
    /// surface.
    pub fn new(width: u32, height: u32) -> Result<Self, SurfaceError> {
        Self::build(width, height, BrushEngine::new())
    }

    /// Like [`InputState::new`] but with a seeded brush RNG, so stylized
    /// strokes are reproducible (tests, scripted replays).
    pub fn with_seed(width: u32, height: u32, seed: u64) -> Result<Self, SurfaceError> {
        Self::build(width, height, BrushEngine::from_seed(seed))
    }

    /// Builds an engine from loaded configuration: surface size and drawing
    /// defaults all come from the config file.
    pub fn from_config(config: &Config) -> Result<Self, SurfaceError> {
        Self::apply_config(Self::new(config.surface.width, config.surface.height)?, config)
    }

    /// Like [`InputState::from_config`] with a seeded brush RNG, for
    /// reproducible scripted replays.
    pub fn from_config_with_seed(config: &Config, seed: u64) -> Result<Self, SurfaceError> {
        Self::apply_config(
            Self::with_seed(config.surface.width, config.surface.height, seed)?,
            config,
        )
    }

    fn apply_config(mut state: Self, config: &Config) -> Result<Self, SurfaceError> {
        state.current_color = config.drawing.default_color.to_color();
        state.current_width = config.drawing.default_width;
        state.brush_style = config.drawing.brush_style();
        Ok(state)
    }

    fn build(width: u32, height: u32, brush: BrushEngine) -> Result<Self, SurfaceError> {
        let surface = Surface::new(width, height)?;
        let history = HistoryStack::new(surface.snapshot());
        Ok(Self {
            surface,
            history,
            brush,
            current_tool: Tool::default(),
            current_color: crate::draw::BLACK,
            current_width: 5.0,
            brush_style: BrushStyle::default(),
            state: GestureState::Idle,
            dirty_tracker: DirtyTracker::new(),
        })
    }

    /// Routes a pointer event into the state machine.
    pub fn handle_pointer_event(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Down { x, y } => self.on_pointer_down(x, y),
            PointerEvent::Move { x, y } => self.on_pointer_move(x, y),
            PointerEvent::Up { x, y } => self.on_pointer_up(x, y),
            PointerEvent::Enter { x, y } => self.on_pointer_enter(x, y),
            PointerEvent::Leave => self.on_pointer_leave(),
        }
    }

    /// Steps back one committed gesture and restores those pixels.
    ///
    /// A no-op at the bottom of the history, and ignored while a gesture is
    /// in progress (the cursor must not move mid-gesture).
    pub fn undo(&mut self) {
        if !matches!(self.state, GestureState::Idle) {
            debug!("Ignoring undo during an active gesture");
            return;
        }
        if let Some(snapshot) = self.history.undo() {
            self.surface.restore(snapshot);
            self.dirty_tracker.mark_full();
            debug!("Undo to history entry {}", self.history.cursor());
        }
    }

    /// Steps forward one gesture and restores those pixels.
    ///
    /// A no-op at the tip of the history, and ignored mid-gesture.
    pub fn redo(&mut self) {
        if !matches!(self.state, GestureState::Idle) {
            debug!("Ignoring redo during an active gesture");
            return;
        }
        if let Some(snapshot) = self.history.redo() {
            self.surface.restore(snapshot);
            self.dirty_tracker.mark_full();
            debug!("Redo to history entry {}", self.history.cursor());
        }
    }

    /// Whether an undo step is available (drives the UI button state).
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Whether a redo step is available (drives the UI button state).
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Read access to the current pixels.
    ///
    /// Valid at any time; mid-gesture it reflects the in-progress stroke or
    /// shape preview.
    pub fn pixels(&self) -> &RgbaImage {
        self.surface.pixels()
    }

    /// The underlying surface (read-only).
    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    /// Surface dimensions as `(width, height)`.
    pub fn dimensions(&self) -> (u32, u32) {
        self.surface.dimensions()
    }

    /// Whether a gesture is currently in progress.
    pub fn gesture_active(&self) -> bool {
        matches!(self.state, GestureState::Active { .. })
    }

    /// Drains the damage rectangles accumulated since the last call.
    pub fn take_damage(&mut self) -> Vec<Rect> {
        let (width, height) = self.surface.dimensions();
        self.dirty_tracker.take_regions(width, height)
    }

    /// Number of history entries (including the initial blank state).
    pub fn history_len(&self) -> usize {
        self.history.len()
    }
}
