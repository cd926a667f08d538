//! Pure core of the temporal engine.
//!
//! This module contains the side-effect-free building blocks:
//! - The `Tracked` trait marking state the engine manages
//! - `Snapshot`: independent copies of tracked state
//! - `HistoryStack`: the bounded past/future snapshot sequences
//!
//! Nothing here mutates shared state or performs I/O; the imperative
//! shell lives in the `store` and `editor` modules.

mod history;
mod snapshot;
mod tracked;

pub use history::{HistoryEntry, HistoryStack, DEFAULT_HISTORY_LIMIT};
pub use snapshot::Snapshot;
pub use tracked::Tracked;
