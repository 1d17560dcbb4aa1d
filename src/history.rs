//! Snapshot-based linear undo/redo history.
//!
//! The stack owns one [`Snapshot`] per committed gesture plus the initial
//! blank state, and a cursor pointing at the snapshot that matches the
//! surface's committed pixels. Undo/redo only move the cursor and hand back
//! the snapshot to restore; committing past a non-tip cursor destroys the
//! redo branch (history is strictly linear, no branching).

use crate::draw::Snapshot;
use log::debug;

/// Ordered sequence of committed snapshots plus the current cursor.
#[derive(Debug)]
pub struct HistoryStack {
    snapshots: Vec<Snapshot>,
    cursor: usize,
}

impl HistoryStack {
    /// Creates a history whose first entry (index 0) is the initial surface
    /// state. The cursor starts there.
    pub fn new(initial: Snapshot) -> Self {
        Self {
            snapshots: vec![initial],
            cursor: 0,
        }
    }

    /// Records a completed gesture.
    ///
    /// Discards any entries beyond the cursor (the redo branch), appends the
    /// snapshot, and advances the cursor to it. Called exactly once per
    /// pointer-up with an active gesture, never mid-gesture.
    pub fn commit(&mut self, snapshot: Snapshot) {
        self.snapshots.truncate(self.cursor + 1);
        self.snapshots.push(snapshot);
        self.cursor += 1;
        debug!(
            "History commit: {} entries, cursor at {}",
            self.snapshots.len(),
            self.cursor
        );
    }

    /// Steps the cursor back and returns the snapshot to restore.
    ///
    /// Returns `None` at the bottom of the stack: a defined no-op, not an
    /// error. Stack contents are never mutated.
    pub fn undo(&mut self) -> Option<&Snapshot> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        Some(&self.snapshots[self.cursor])
    }

    /// Steps the cursor forward and returns the snapshot to restore.
    ///
    /// Returns `None` at the tip of the stack: a defined no-op, not an error.
    pub fn redo(&mut self) -> Option<&Snapshot> {
        if self.cursor + 1 >= self.snapshots.len() {
            return None;
        }
        self.cursor += 1;
        Some(&self.snapshots[self.cursor])
    }

    /// The snapshot the cursor points at: the current committed state.
    ///
    /// While a gesture is in progress the cursor cannot move, so this is also
    /// the clean base the shape previewer restores before each preview frame.
    pub fn current(&self) -> &Snapshot {
        &self.snapshots[self.cursor]
    }

    /// Whether an undo step is available.
    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    /// Whether a redo step is available.
    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.snapshots.len()
    }

    /// Number of stored snapshots (including the initial state).
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false: the initial snapshot is never discarded.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Current cursor index (diagnostics and tests).
    pub fn cursor(&self) -> usize {
        self.cursor
    }
}
