//! # Undo History
//!
//! A size-bounded snapshot history store for undo/redo navigation in a
//! rich text editing engine.
//!
//! ## Core Concepts
//!
//! - **Snapshots**: Opaque, caller-defined recordings of document state
//! - **Linear history**: A single stack navigated by a cursor, no branching
//! - **Byte budget**: Oldest entries are evicted once the total size of
//!   retained snapshots exceeds a fixed budget
//! - **Auto-complete marker**: Lets a transient edit (autocorrect and the
//!   like) be undone as a unit without polluting the visible undo stack
//!
//! ## Example
//!
//! ```
//! use undo_history::{EditorSnapshot, SnapshotHistory};
//!
//! let mut history = SnapshotHistory::new();
//!
//! let snapshot = EditorSnapshot::new("<div>hello</div>");
//! let size = snapshot.size_in_bytes();
//! history.add_snapshot(snapshot, size, false);
//!
//! let snapshot = EditorSnapshot::new("<div>hello world</div>");
//! let size = snapshot.size_in_bytes();
//! history.add_snapshot(snapshot, size, false);
//!
//! // Undo one step
//! if history.can_move(-1) {
//!     let restored = history.move_by(-1).unwrap();
//!     assert_eq!(restored.html, "<div>hello</div>");
//! }
//! ```

pub mod error;
pub mod snapshot;
pub mod store;
pub mod types;

// Re-exports
pub use error::{HistoryError, Result};
pub use snapshot::{EditorSnapshot, EntityState};
pub use store::SnapshotHistory;
pub use types::{HistoryEntry, HistoryState, DEFAULT_MAX_SIZE};
