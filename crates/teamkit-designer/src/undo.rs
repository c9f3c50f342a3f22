//! Timed undo for deleted text elements.
//!
//! A single-slot expiring buffer: deleting a text element captures the
//! element and its list index, and the capture stays recoverable for a
//! short window. A second delete replaces the slot - only the most recent
//! deletion is recoverable, there is no stack.
//!
//! The slot holds a deadline instead of owning a timer. The host drives
//! time by passing `Instant`s into [`arm`](UndoSlot::arm),
//! [`take`](UndoSlot::take), and [`expire_if_due`](UndoSlot::expire_if_due),
//! which keeps the logic testable without wall-clock waits and makes the
//! race between expiry and a second delete explicit.

use crate::model::TextElement;
use std::time::{Duration, Instant};

/// How long a deleted element stays recoverable.
pub const UNDO_WINDOW: Duration = Duration::from_millis(3000);

/// A captured deletion: the element and where it sat in the list.
#[derive(Debug, Clone)]
pub struct DeletedText {
    pub element: TextElement,
    pub index: usize,
}

/// Single-slot expiring undo buffer.
#[derive(Debug, Clone, Default)]
pub struct UndoSlot {
    entry: Option<(DeletedText, Instant)>,
}

impl UndoSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Captures a deletion, replacing any pending capture. The previous
    /// capture's window is implicitly cancelled by the replacement.
    pub fn arm(&mut self, element: TextElement, index: usize, now: Instant) {
        self.entry = Some((DeletedText { element, index }, now + UNDO_WINDOW));
    }

    /// Takes the capture for reinsertion. Returns `None` when the slot is
    /// empty or the window has passed (the expired capture is dropped).
    pub fn take(&mut self, now: Instant) -> Option<DeletedText> {
        let (deleted, expires_at) = self.entry.take()?;
        if now >= expires_at {
            return None;
        }
        Some(deleted)
    }

    /// Drops the capture when its window has passed. The host calls this
    /// from its timer tick; returns true when something was cleared.
    pub fn expire_if_due(&mut self, now: Instant) -> bool {
        match &self.entry {
            Some((_, expires_at)) if now >= *expires_at => {
                self.entry = None;
                true
            }
            _ => false,
        }
    }

    /// Whether an unexpired capture is available.
    pub fn is_armed(&self, now: Instant) -> bool {
        matches!(&self.entry, Some((_, expires_at)) if now < *expires_at)
    }
}
