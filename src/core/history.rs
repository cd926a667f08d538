//! Bounded past/future snapshot stacks implementing undo/redo.
//!
//! The stack knows nothing about what the snapshots mean; it only
//! maintains the two sequences and their invariants:
//!
//! - `past` never exceeds the configured limit (oldest entries evicted)
//! - recording a new entry clears `future` (a new timeline branch)
//! - undo/redo shuffle entries between the two stacks

use super::snapshot::Snapshot;
use super::tracked::Tracked;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Default number of ancestor snapshots retained.
pub const DEFAULT_HISTORY_LIMIT: usize = 50;

/// One entry on the undo or redo stack.
///
/// The label names the mutation that the snapshot precedes (e.g.
/// "assign seat", "swap occupants") and is surfaced to hosts for
/// undo/redo menu captions.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct HistoryEntry<T: Tracked> {
    /// Human-readable name of the recorded mutation.
    pub label: String,
    /// The tracked state captured at this point in history.
    pub snapshot: Snapshot<T>,
    /// When this entry was created.
    pub timestamp: DateTime<Utc>,
}

impl<T: Tracked> HistoryEntry<T> {
    /// Create an entry timestamped now.
    pub fn new(label: impl Into<String>, snapshot: Snapshot<T>) -> Self {
        Self {
            label: label.into(),
            snapshot,
            timestamp: Utc::now(),
        }
    }
}

/// The bounded `past`/`future` snapshot sequences.
///
/// # Example
///
/// ```rust
/// use coxbox::{HistoryEntry, HistoryStack, RosterState, Snapshot};
///
/// let mut history: HistoryStack<RosterState> = HistoryStack::new(50);
/// let snapshot = Snapshot::capture(&RosterState::new());
///
/// history.record(HistoryEntry::new("add boat", snapshot));
/// assert_eq!(history.undo_count(), 1);
/// assert_eq!(history.undo_label(), Some("add boat"));
/// ```
#[derive(Clone, Debug)]
pub struct HistoryStack<T: Tracked> {
    past: Vec<HistoryEntry<T>>,
    future: Vec<HistoryEntry<T>>,
    limit: usize,
}

impl<T: Tracked> Default for HistoryStack<T> {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_LIMIT)
    }
}

impl<T: Tracked> HistoryStack<T> {
    /// Create an empty stack retaining at most `limit` past entries.
    pub fn new(limit: usize) -> Self {
        Self {
            past: Vec::new(),
            future: Vec::new(),
            limit,
        }
    }

    /// Record a new entry: append to `past`, evict the oldest entries
    /// beyond the limit, and clear `future`.
    pub fn record(&mut self, entry: HistoryEntry<T>) {
        self.future.clear();
        self.push_past(entry);
    }

    /// Append to `past` without clearing `future`. Evicts from the
    /// front when over the limit. Used by redo to save the present
    /// state before restoring a future one.
    pub fn push_past(&mut self, entry: HistoryEntry<T>) {
        self.past.push(entry);
        while self.past.len() > self.limit {
            self.past.remove(0);
        }
    }

    /// Append to `future` without touching `past`. Used by undo to save
    /// the present state before restoring a past one.
    pub fn push_future(&mut self, entry: HistoryEntry<T>) {
        self.future.push(entry);
    }

    /// Pop the most recent past entry, or `None` at the boundary.
    pub fn pop_past(&mut self) -> Option<HistoryEntry<T>> {
        self.past.pop()
    }

    /// Pop the most recent future entry, or `None` at the boundary.
    pub fn pop_future(&mut self) -> Option<HistoryEntry<T>> {
        self.future.pop()
    }

    /// Peek at the entry that `pop_past` would return.
    pub fn peek_past(&self) -> Option<&HistoryEntry<T>> {
        self.past.last()
    }

    /// Number of entries available to undo.
    pub fn undo_count(&self) -> usize {
        self.past.len()
    }

    /// Number of entries available to redo.
    pub fn redo_count(&self) -> usize {
        self.future.len()
    }

    /// Label of the mutation that would be undone next.
    pub fn undo_label(&self) -> Option<&str> {
        self.past.last().map(|e| e.label.as_str())
    }

    /// Label of the mutation that would be redone next.
    pub fn redo_label(&self) -> Option<&str> {
        self.future.last().map(|e| e.label.as_str())
    }

    /// Maximum number of past entries retained.
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Empty both stacks.
    pub fn clear(&mut self) {
        self.past.clear();
        self.future.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(tag: &str) -> HistoryEntry<Vec<String>> {
        HistoryEntry::new(tag, Snapshot::capture(&vec![tag.to_string()]))
    }

    #[test]
    fn new_stack_is_empty() {
        let h: HistoryStack<Vec<String>> = HistoryStack::new(50);
        assert_eq!(h.undo_count(), 0);
        assert_eq!(h.redo_count(), 0);
        assert!(h.undo_label().is_none());
        assert!(h.redo_label().is_none());
    }

    #[test]
    fn record_appends_to_past() {
        let mut h = HistoryStack::new(50);
        h.record(entry("a"));
        h.record(entry("b"));

        assert_eq!(h.undo_count(), 2);
        assert_eq!(h.undo_label(), Some("b"));
    }

    #[test]
    fn record_clears_future() {
        let mut h = HistoryStack::new(50);
        h.push_future(entry("pending-redo"));
        assert_eq!(h.redo_count(), 1);

        h.record(entry("new-branch"));
        assert_eq!(h.redo_count(), 0);
    }

    #[test]
    fn limit_evicts_oldest_first() {
        let mut h = HistoryStack::new(3);
        for tag in ["a", "b", "c", "d", "e"] {
            h.record(entry(tag));
        }

        assert_eq!(h.undo_count(), 3);
        assert_eq!(h.pop_past().unwrap().label, "e");
        assert_eq!(h.pop_past().unwrap().label, "d");
        assert_eq!(h.pop_past().unwrap().label, "c");
        assert!(h.pop_past().is_none());
    }

    #[test]
    fn push_past_does_not_clear_future() {
        let mut h = HistoryStack::new(50);
        h.push_future(entry("redoable"));
        h.push_past(entry("present"));

        assert_eq!(h.undo_count(), 1);
        assert_eq!(h.redo_count(), 1);
    }

    #[test]
    fn push_past_respects_limit() {
        let mut h = HistoryStack::new(2);
        h.push_past(entry("a"));
        h.push_past(entry("b"));
        h.push_past(entry("c"));

        assert_eq!(h.undo_count(), 2);
        assert_eq!(h.undo_label(), Some("c"));
    }

    #[test]
    fn pop_at_boundary_returns_none() {
        let mut h: HistoryStack<Vec<String>> = HistoryStack::new(50);
        assert!(h.pop_past().is_none());
        assert!(h.pop_future().is_none());
    }

    #[test]
    fn peek_past_does_not_consume() {
        let mut h = HistoryStack::new(50);
        h.record(entry("a"));

        assert_eq!(h.peek_past().unwrap().label, "a");
        assert_eq!(h.undo_count(), 1);
    }

    #[test]
    fn clear_empties_both_stacks() {
        let mut h = HistoryStack::new(50);
        h.record(entry("a"));
        h.push_future(entry("b"));

        h.clear();
        assert_eq!(h.undo_count(), 0);
        assert_eq!(h.redo_count(), 0);
    }

    #[test]
    fn labels_track_stack_tops() {
        let mut h = HistoryStack::new(50);
        h.record(entry("first"));
        h.record(entry("second"));
        assert_eq!(h.undo_label(), Some("second"));

        let popped = h.pop_past().unwrap();
        h.push_future(popped);
        assert_eq!(h.undo_label(), Some("first"));
        assert_eq!(h.redo_label(), Some("second"));
    }

    #[test]
    fn entry_serialization_roundtrip() {
        let e = entry("serialize-me");
        let json = serde_json::to_string(&e).unwrap();
        let back: HistoryEntry<Vec<String>> = serde_json::from_str(&json).unwrap();
        assert_eq!(back.label, "serialize-me");
        assert_eq!(back.snapshot, e.snapshot);
    }
}
