//! Coxbox: a snapshot-based temporal state engine for crew lineup editing
//!
//! Coxbox powers the seat-assignment screen of a rowing team editor: a
//! generic snapshot/undo/redo layer plus the selection-and-swap protocol
//! it protects. The engine is synchronous, in-memory, and per-session;
//! persistence, auth, and collaboration are the host's concern.
//!
//! # Core Concepts
//!
//! - **Tracked state**: the declared subset of application state under
//!   temporal control, via the `Tracked` trait
//! - **Snapshots**: independent copies of tracked state, compared
//!   structurally to decide what deserves a history entry
//! - **Temporal store**: bounded past/future stacks with batching, a
//!   reentrancy guard, and boolean (never panicking) boundary signaling
//! - **Selection & swap**: a FIFO-of-two slot selection feeding atomic
//!   occupant exchanges
//!
//! # Example
//!
//! ```rust
//! use coxbox::{AthleteId, BoatConfig, LineupEditor, SlotRef};
//!
//! let mut editor = LineupEditor::new();
//! let boat = editor.add_boat(BoatConfig::eight("Varsity 8"));
//!
//! editor.assign_to_seat(boat, 8, AthleteId::new("stroke"));
//! editor.assign_to_seat(boat, 7, AthleteId::new("seven"));
//!
//! // Swap the two seats as a single undoable step.
//! editor.toggle_selection(SlotRef::Seat { boat, seat: 8 });
//! editor.toggle_selection(SlotRef::Seat { boat, seat: 7 });
//! editor.swap();
//!
//! assert_eq!(
//!     editor
//!         .roster()
//!         .occupant_at(SlotRef::Seat { boat, seat: 8 })
//!         .unwrap()
//!         .as_str(),
//!     "seven"
//! );
//!
//! editor.undo();
//! assert_eq!(
//!     editor
//!         .roster()
//!         .occupant_at(SlotRef::Seat { boat, seat: 8 })
//!         .unwrap()
//!         .as_str(),
//!     "stroke"
//! );
//! ```

pub mod core;
pub mod editor;
pub mod export;
pub mod roster;
pub mod store;
pub mod validate;

// Re-export commonly used types
pub use crate::core::{HistoryEntry, HistoryStack, Snapshot, Tracked, DEFAULT_HISTORY_LIMIT};
pub use editor::LineupEditor;
pub use export::{ExportError, LineupFile, LINEUP_FORMAT_VERSION};
pub use roster::{
    AthleteId, Boat, BoatConfig, BoatId, RosterState, Seat, SelectionBuffer, Side, SlotRef,
    SELECTION_CAPACITY,
};
pub use store::TemporalStore;
