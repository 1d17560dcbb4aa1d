//! Input handling and the gesture state machine.
//!
//! This module translates frontend pointer events into drawing actions. It
//! owns the surface, brush engine, and history stack, maintains the current
//! tool state (tool, color, width, brush style), and runs the state machine
//! for gestures (idle vs. actively drawing).

pub mod events;
pub mod state;
pub mod tool;

// Re-export commonly used types at module level
pub use events::PointerEvent;
pub use state::{GestureState, InputState};
pub use tool::Tool;
