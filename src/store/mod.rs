//! The temporal controller wrapping a tracked state container.
//!
//! `TemporalStore` owns the live state and intercepts every mutation.
//! Each mutation is a closure applied to the state; the store snapshots
//! around it and decides whether the change deserves a history entry.
//! No operation here ever panics or returns an error: exhausted undo,
//! exhausted redo, and precondition misses are observable no-ops
//! signaled by a `bool` return.
//!
//! # Usage
//!
//! ```rust
//! use coxbox::{Boat, BoatConfig, RosterState, TemporalStore};
//!
//! let mut store = TemporalStore::new(RosterState::new());
//!
//! store.set("add boat", |roster| {
//!     roster.boats.push(Boat::new(&BoatConfig::new("Pair", 2)));
//! });
//!
//! assert!(store.can_undo());
//! assert!(store.undo());
//! assert!(store.state().boats.is_empty());
//! assert!(store.redo());
//! assert_eq!(store.state().boats.len(), 1);
//! ```

use crate::core::{HistoryEntry, HistoryStack, Snapshot, Tracked, DEFAULT_HISTORY_LIMIT};

/// Mutations accumulated between `start_batch` and `end_batch`.
///
/// Deferred closures are applied back-to-back at commit time so the
/// whole group reads as one atomic mutation in history.
struct Batch<T: Tracked> {
    label: String,
    ops: Vec<Box<dyn FnOnce(&mut T)>>,
}

/// Snapshot-based undo/redo controller over a tracked state container.
///
/// The store is constructed once per editing session and owns its own
/// history; nothing is shared across instances or stored globally.
pub struct TemporalStore<T: Tracked> {
    state: T,
    history: HistoryStack<T>,
    /// True while undo/redo is restoring a snapshot. Guards against the
    /// controller recording history while it is itself replaying it.
    applying: bool,
    batch: Option<Batch<T>>,
}

impl<T: Tracked> TemporalStore<T> {
    /// Create a store with the default history limit.
    pub fn new(initial: T) -> Self {
        Self::with_limit(initial, DEFAULT_HISTORY_LIMIT)
    }

    /// Create a store retaining at most `limit` undo entries.
    pub fn with_limit(initial: T, limit: usize) -> Self {
        Self {
            state: initial,
            history: HistoryStack::new(limit),
            applying: false,
            batch: None,
        }
    }

    /// Borrow the current tracked state.
    pub fn state(&self) -> &T {
        &self.state
    }

    /// Apply a mutation to the tracked state.
    ///
    /// - During undo/redo replay the mutation is applied directly and
    ///   never recorded.
    /// - During a batch the mutation is deferred into the accumulator;
    ///   nothing is applied or recorded until `end_batch`.
    /// - Otherwise the state before the mutation is recorded, unless the
    ///   mutation turns out to be a no-op (snapshot equality), in which
    ///   case history is untouched.
    ///
    /// Returns `true` iff a history entry was recorded now.
    pub fn set<F>(&mut self, label: &str, f: F) -> bool
    where
        F: FnOnce(&mut T) + 'static,
    {
        if self.applying {
            f(&mut self.state);
            return false;
        }

        if let Some(batch) = self.batch.as_mut() {
            batch.ops.push(Box::new(f));
            tracing::debug!(label, "mutation deferred: batch in progress");
            return false;
        }

        let before = Snapshot::capture(&self.state);
        f(&mut self.state);

        if before.value() == &self.state {
            tracing::debug!(label, "no-op mutation elided");
            return false;
        }

        self.history.record(HistoryEntry::new(label, before));
        tracing::debug!(
            label,
            undo_depth = self.history.undo_count(),
            "history entry recorded"
        );
        true
    }

    /// Restore the most recent past snapshot.
    ///
    /// The present state is saved onto the redo stack first. Returns
    /// `false` at the history boundary.
    pub fn undo(&mut self) -> bool {
        self.discard_stuck_batch("undo");

        let Some(entry) = self.history.pop_past() else {
            return false;
        };

        self.applying = true;
        let current = Snapshot::capture(&self.state);
        self.history
            .push_future(HistoryEntry::new(entry.label.clone(), current));
        self.state = entry.snapshot.into_inner();
        self.applying = false;

        tracing::debug!(
            label = %entry.label,
            undo_remaining = self.history.undo_count(),
            "undo applied"
        );
        true
    }

    /// Restore the most recent future snapshot. Mirror of `undo`.
    pub fn redo(&mut self) -> bool {
        self.discard_stuck_batch("redo");

        let Some(entry) = self.history.pop_future() else {
            return false;
        };

        self.applying = true;
        let current = Snapshot::capture(&self.state);
        self.history
            .push_past(HistoryEntry::new(entry.label.clone(), current));
        self.state = entry.snapshot.into_inner();
        self.applying = false;

        tracing::debug!(
            label = %entry.label,
            redo_remaining = self.history.redo_count(),
            "redo applied"
        );
        true
    }

    /// Enter batch mode. Subsequent `set` calls are accumulated and
    /// committed as one atomic, singly-undoable mutation by `end_batch`.
    ///
    /// Returns `false` when a batch is already open (idempotent).
    pub fn start_batch(&mut self, label: &str) -> bool {
        if self.batch.is_some() {
            tracing::warn!(label, "start_batch ignored: already batching");
            return false;
        }

        self.batch = Some(Batch {
            label: label.to_string(),
            ops: Vec::new(),
        });
        tracing::debug!(label, "batch started");
        true
    }

    /// Commit the open batch: apply every accumulated mutation in order
    /// as one atomic change, recording at most one history entry.
    ///
    /// Batch mode is left regardless of outcome. Returns `true` iff a
    /// history entry was recorded (an open, non-empty batch whose net
    /// effect changed the state).
    pub fn end_batch(&mut self) -> bool {
        let Some(batch) = self.batch.take() else {
            return false;
        };

        if batch.ops.is_empty() {
            tracing::debug!(label = %batch.label, "empty batch discarded");
            return false;
        }

        let before = Snapshot::capture(&self.state);
        for op in batch.ops {
            op(&mut self.state);
        }

        if before.value() == &self.state {
            tracing::debug!(label = %batch.label, "batch had no net effect");
            return false;
        }

        self.history.record(HistoryEntry::new(batch.label, before));
        tracing::debug!(
            undo_depth = self.history.undo_count(),
            "batch committed as one entry"
        );
        true
    }

    /// Force the present state onto the undo stack without mutating
    /// anything, unless the top of the stack already equals it.
    ///
    /// Returns `true` iff an entry was recorded.
    pub fn checkpoint(&mut self, label: &str) -> bool {
        let current = Snapshot::capture(&self.state);

        if let Some(top) = self.history.peek_past() {
            if top.snapshot == current {
                tracing::debug!(label, "checkpoint deduplicated");
                return false;
            }
        }

        self.history.record(HistoryEntry::new(label, current));
        true
    }

    /// Empty both history stacks. The tracked state is untouched.
    pub fn clear_history(&mut self) {
        self.history.clear();
        self.batch = None;
        tracing::debug!("history cleared");
    }

    /// Whether undo would restore a snapshot.
    pub fn can_undo(&self) -> bool {
        self.history.undo_count() > 0
    }

    /// Whether redo would restore a snapshot.
    pub fn can_redo(&self) -> bool {
        self.history.redo_count() > 0
    }

    /// Number of undoable entries.
    pub fn undo_count(&self) -> usize {
        self.history.undo_count()
    }

    /// Number of redoable entries.
    pub fn redo_count(&self) -> usize {
        self.history.redo_count()
    }

    /// Label of the mutation that would be undone next.
    pub fn undo_label(&self) -> Option<&str> {
        self.history.undo_label()
    }

    /// Label of the mutation that would be redone next.
    pub fn redo_label(&self) -> Option<&str> {
        self.history.redo_label()
    }

    /// Whether a batch is currently open.
    pub fn is_batching(&self) -> bool {
        self.batch.is_some()
    }

    /// Maximum number of undo entries retained.
    pub fn history_limit(&self) -> usize {
        self.history.limit()
    }

    /// A batch left open across an undo/redo request (lost pointer-up,
    /// host bug) would replay stale closures later; drop it instead.
    fn discard_stuck_batch(&mut self, during: &str) {
        if let Some(batch) = self.batch.take() {
            tracing::warn!(label = %batch.label, during, "discarding open batch");
        }
    }
}
