//! Generic pointer event types for cross-frontend compatibility.
//!
//! Frontend implementations map their native pointer callbacks to these
//! generic events, with positions already scaled into surface space.

/// A discrete pointer event delivered to the engine.
///
/// `Leave` carries no position: the engine substitutes the last position it
/// saw, which keeps drawing continuous across the surface boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Primary button pressed: begins a gesture
    Down { x: f64, y: f64 },
    /// Pointer moved while inside the surface
    Move { x: f64, y: f64 },
    /// Primary button released: ends and commits the gesture
    Up { x: f64, y: f64 },
    /// Pointer re-entered the surface (possibly mid-gesture)
    Enter { x: f64, y: f64 },
    /// Pointer left the surface; an active gesture keeps going
    Leave,
}
