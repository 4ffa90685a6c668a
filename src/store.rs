//! The snapshot history store: a size-bounded, pointer-addressed stack of
//! opaque snapshots with an auxiliary auto-complete marker.
//!
//! The store is the only mutation surface over a [`HistoryState`]; callers
//! read state freely but can only change it through the operations here,
//! which is what keeps `total_size`, `entries`, and the cursors coherent.

use crate::error::{HistoryError, Result};
use crate::types::{HistoryEntry, HistoryState, DEFAULT_MAX_SIZE};
use tracing::{debug, trace};

/// Undo/redo history for a single editing session.
///
/// Snapshots are opaque: the store compares them with `PartialEq` for the
/// duplicate-add check and otherwise never inspects them. Byte sizes are
/// supplied by the caller per add and drive the eviction budget.
///
/// All operations are synchronous and total. Failure paths are silent
/// no-ops (`add_snapshot` with an oversized payload), `false`, or `None`;
/// see [`move_by`](Self::move_by).
///
/// # Example
///
/// ```
/// use undo_history::SnapshotHistory;
///
/// let mut history = SnapshotHistory::new();
/// history.add_snapshot("hello".to_string(), 5, false);
/// history.add_snapshot("hello world".to_string(), 11, false);
///
/// assert_eq!(history.move_by(-1), Some(&"hello".to_string()));
/// assert_eq!(history.move_by(1), Some(&"hello world".to_string()));
/// ```
pub struct SnapshotHistory<S> {
    state: HistoryState<S>,
}

impl<S: PartialEq> SnapshotHistory<S> {
    /// Empty history with the default 10 MB budget.
    pub fn new() -> Self {
        Self::with_max_size(DEFAULT_MAX_SIZE)
    }

    /// Empty history with an explicit byte budget.
    pub fn with_max_size(max_size: u64) -> Self {
        Self {
            state: HistoryState::new(max_size),
        }
    }

    /// Adopt a caller-supplied state, validating its bookkeeping first.
    ///
    /// The cursor must be a valid index or -1, the recorded `total_size`
    /// must equal the sum of entry sizes, and the total must fit the
    /// budget. The auto-complete marker is advisory and allowed to point
    /// past the tail (it goes stale legitimately), but never below -1.
    pub fn from_state(state: HistoryState<S>) -> Result<Self> {
        let len = state.entries.len();
        if state.current_index < -1 || state.current_index >= len as isize {
            return Err(HistoryError::CursorOutOfRange {
                cursor: state.current_index,
                len,
            });
        }
        if state.auto_complete_index < -1 {
            return Err(HistoryError::InvalidMarker(state.auto_complete_index));
        }
        let actual: u64 = state.entries.iter().map(|e| e.size).sum();
        if actual != state.total_size {
            return Err(HistoryError::SizeMismatch {
                recorded: state.total_size,
                actual,
            });
        }
        if state.total_size > state.max_size {
            return Err(HistoryError::OverBudget {
                total: state.total_size,
                max: state.max_size,
            });
        }
        Ok(Self { state })
    }

    /// Read-only view of the underlying state.
    pub fn state(&self) -> &HistoryState<S> {
        &self.state
    }

    /// Hand the state back to the session that owns its lifetime.
    pub fn into_state(self) -> HistoryState<S> {
        self.state
    }

    /// The snapshot at the current position, if the cursor is on one.
    pub fn current(&self) -> Option<&S> {
        if self.state.current_index >= 0 {
            self.state
                .entries
                .get(self.state.current_index as usize)
                .map(|e| &e.snapshot)
        } else {
            None
        }
    }

    /// Record a new snapshot as the head of history.
    ///
    /// Discards any redo tail, evicts oldest entries while over budget,
    /// and optionally marks the written index as the auto-complete anchor.
    ///
    /// Two adds change nothing structurally:
    /// - a snapshot whose own size exceeds the budget is rejected outright
    ///   (it could never fit, regardless of eviction);
    /// - a snapshot equal to the one at the current position is treated as
    ///   a continuation of it rather than a new entry. The auto-complete
    ///   marker is still updated in that case when `is_auto_complete` is
    ///   set, since the matched entry is the last written index.
    pub fn add_snapshot(&mut self, snapshot: S, size_in_bytes: u64, is_auto_complete: bool) {
        if size_in_bytes > self.state.max_size {
            debug!(
                size = size_in_bytes,
                max = self.state.max_size,
                "rejecting snapshot larger than the whole budget"
            );
            return;
        }

        let is_duplicate = self
            .current()
            .map_or(false, |current| *current == snapshot);

        if !is_duplicate {
            self.clear_redo();

            let state = &mut self.state;
            state.entries.push(HistoryEntry {
                snapshot,
                size: size_in_bytes,
            });
            state.total_size += size_in_bytes;
            state.current_index = state.entries.len() as isize - 1;

            // Eviction is oldest-first. The entry just added always
            // survives: its size alone fits the budget, so the loop ends
            // at or before it.
            let mut evicted = 0u64;
            while state.total_size > state.max_size && !state.entries.is_empty() {
                let removed = state.entries.remove(0);
                state.total_size -= removed.size;
                state.current_index -= 1;
                evicted += 1;
            }
            if evicted > 0 {
                trace!(
                    evicted,
                    total_size = state.total_size,
                    "evicted oldest entries to stay within budget"
                );
            }
        }

        if is_auto_complete {
            self.state.auto_complete_index = self.state.current_index;
        }
    }

    /// Whether the cursor can move by `step` entries.
    ///
    /// Positive steps go toward newer entries (redo), negative toward
    /// older ones (undo). `step == 0` is valid exactly when the cursor is
    /// on an entry.
    pub fn can_move(&self, step: isize) -> bool {
        // A step large enough to overflow the cursor is out of range by
        // definition, not a panic.
        match self.state.current_index.checked_add(step) {
            Some(target) => target >= 0 && target < self.state.entries.len() as isize,
            None => false,
        }
    }

    /// Move the cursor by `step` entries and return the snapshot it lands
    /// on, or `None` (with no mutation) if the target is out of range.
    ///
    /// Named `move_by` because `move` is a keyword.
    pub fn move_by(&mut self, step: isize) -> Option<&S> {
        if !self.can_move(step) {
            return None;
        }
        self.state.current_index += step;
        Some(&self.state.entries[self.state.current_index as usize].snapshot)
    }

    /// Discard every entry strictly after the current position.
    ///
    /// With the cursor at -1 this clears the whole history: no current
    /// entry exists, so everything is redo material. The cursor and the
    /// auto-complete marker are left untouched.
    pub fn clear_redo(&mut self) {
        let state = &mut self.state;
        let keep = (state.current_index + 1) as usize;
        if keep < state.entries.len() {
            let dropped: u64 = state.entries[keep..].iter().map(|e| e.size).sum();
            state.entries.truncate(keep);
            state.total_size -= dropped;
        }
    }

    /// Whether undoing one step would land exactly on the auto-complete
    /// marker.
    ///
    /// True iff a marker is set and the cursor sits one past it: the very
    /// last add was the auto-completed edit and nothing has moved the
    /// cursor since. Cursor on the marker, behind it, or further ahead all
    /// yield false.
    pub fn can_undo_auto_complete(&self) -> bool {
        self.state.auto_complete_index >= 0
            && self.state.current_index == self.state.auto_complete_index + 1
    }
}

impl<S: PartialEq> Default for SnapshotHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}
