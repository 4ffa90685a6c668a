//! Error types for the snapshot history store.
//!
//! The store operations themselves are total: an oversized add is a silent
//! no-op and an out-of-range move returns `None`. Errors only arise when
//! adopting a caller-supplied [`HistoryState`](crate::HistoryState) whose
//! bookkeeping is incoherent.

use thiserror::Error;

/// Validation errors for a caller-supplied history state.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HistoryError {
    #[error("cursor {cursor} out of range for {len} entries")]
    CursorOutOfRange { cursor: isize, len: usize },

    #[error("auto-complete marker {0} below -1")]
    InvalidMarker(isize),

    #[error("size accounting mismatch: recorded {recorded} bytes, entries sum to {actual}")]
    SizeMismatch { recorded: u64, actual: u64 },

    #[error("total size {total} exceeds budget {max}")]
    OverBudget { total: u64, max: u64 },
}

/// Result type for history operations.
pub type Result<T> = std::result::Result<T, HistoryError>;
