//! Core types for the snapshot history store.

use serde::{Deserialize, Serialize};

/// Default byte budget for a history session (10 MB).
pub const DEFAULT_MAX_SIZE: u64 = 10_000_000;

/// A retained snapshot together with the byte size the caller reported
/// for it when it was added.
///
/// The store never computes sizes itself; it records the caller-supplied
/// number so eviction and redo-tail truncation can subtract exact amounts.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry<S> {
    /// The opaque snapshot payload.
    pub snapshot: S,

    /// Serialized size in bytes, as reported by the caller.
    pub size: u64,
}

/// The full mutable state of one editing session's history.
///
/// Index 0 is the oldest retained entry, the last index the newest.
/// Insertion order is the sole ordering; there are no timestamps.
///
/// The two cursors use `-1` as a sentinel: `current_index == -1` means
/// "before the first snapshot" (initial state, or everything undone past
/// the earliest point), and `auto_complete_index == -1` means "no pending
/// auto-complete marker".
///
/// This is plain data. Only [`SnapshotHistory`](crate::SnapshotHistory)
/// mutates it, which is what keeps `total_size` and `entries` coherent;
/// hand a hand-built state to
/// [`SnapshotHistory::from_state`](crate::SnapshotHistory::from_state)
/// to have it validated before use.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryState<S> {
    /// Retained snapshots, oldest first.
    pub entries: Vec<HistoryEntry<S>>,

    /// Running sum of all retained entries' sizes, in bytes.
    pub total_size: u64,

    /// The caller's current position: a valid index into `entries`, or -1.
    pub current_index: isize,

    /// Index of the most recent snapshot flagged as an auto-complete
    /// candidate, or -1. Advisory: it is set by adds but never actively
    /// invalidated when later operations shift the array, so it can go
    /// stale. [`can_undo_auto_complete`](crate::SnapshotHistory::can_undo_auto_complete)
    /// re-checks it against `current_index`.
    pub auto_complete_index: isize,

    /// Fixed byte budget for the whole session. Immutable after
    /// construction.
    pub max_size: u64,
}

impl<S> HistoryState<S> {
    /// Empty state with the given byte budget.
    pub fn new(max_size: u64) -> Self {
        Self {
            entries: Vec::new(),
            total_size: 0,
            current_index: -1,
            auto_complete_index: -1,
            max_size,
        }
    }
}

impl<S> Default for HistoryState<S> {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_SIZE)
    }
}
