//! The lineup editor: roster mutations wired through the temporal store.
//!
//! `LineupEditor` is the surface the host application talks to. Every
//! roster mutation goes through one `set` call on the store, so every
//! operation is a single undoable step. The selection buffer lives here,
//! outside the tracked state, so undo/redo never touches it.
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
//! assert!(editor.undo());
//! assert!(editor
//!     .roster()
//!     .occupant_at(SlotRef::Seat { boat, seat: 8 })
//!     .is_none());
//! assert!(editor.redo());
//! ```

use crate::roster::{AthleteId, Boat, BoatConfig, BoatId, RosterState, SelectionBuffer, SlotRef};
use crate::store::TemporalStore;

/// Write an occupant into one slot of a boat.
///
/// Same-boat swaps rely on this threading both updates through a single
/// `&mut Boat`: applying the two slot writes in two separate lookups of
/// the original boat would lose the first one.
fn place(boat: &mut Boat, slot: SlotRef, occupant: Option<AthleteId>) {
    match slot {
        SlotRef::Seat { seat, .. } => {
            if let Some(s) = boat.seat_mut(seat) {
                s.occupant = occupant;
            }
        }
        SlotRef::Coxswain { .. } => boat.coxswain = occupant,
    }
}

/// Seat-assignment editor with snapshot-based undo/redo.
///
/// Constructed once per editing session; owns its roster, history, and
/// selection outright.
pub struct LineupEditor {
    store: TemporalStore<RosterState>,
    selection: SelectionBuffer,
}

impl Default for LineupEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl LineupEditor {
    /// An empty editor with the default history limit.
    pub fn new() -> Self {
        Self {
            store: TemporalStore::new(RosterState::new()),
            selection: SelectionBuffer::new(),
        }
    }

    /// An empty editor retaining at most `limit` undo entries.
    pub fn with_history_limit(limit: usize) -> Self {
        Self {
            store: TemporalStore::with_limit(RosterState::new(), limit),
            selection: SelectionBuffer::new(),
        }
    }

    /// The current tracked roster.
    pub fn roster(&self) -> &RosterState {
        self.store.state()
    }

    /// The current selection, oldest first.
    pub fn selection(&self) -> &SelectionBuffer {
        &self.selection
    }

    // --- mutation API -----------------------------------------------------

    /// Create a boat from the configuration and append it to the roster.
    pub fn add_boat(&mut self, config: BoatConfig) -> BoatId {
        let boat = Boat::new(&config);
        let id = boat.id;
        self.store
            .set("add boat", move |roster| roster.boats.push(boat));
        id
    }

    /// Delete a boat and purge any selection referencing it.
    ///
    /// Returns `false` when the boat does not exist. Inside an open
    /// batch the removal is deferred like any other mutation, so the
    /// purge is deferred with it: `end_batch` drops selections whose
    /// slot the commit took away.
    pub fn remove_boat(&mut self, id: BoatId) -> bool {
        if self.roster().boat(id).is_none() {
            return false;
        }

        let recorded = self.store.set("remove boat", move |roster| {
            roster.boats.retain(|b| b.id != id);
        });
        if recorded {
            self.selection.purge_boat(id);
        }
        recorded
    }

    /// Place an athlete in a numbered seat.
    ///
    /// Occupant uniqueness is deliberately not enforced here: the same
    /// athlete may transiently occupy several slots mid-edit. Save-time
    /// validation (`validate::check_roster`) reports duplicates.
    ///
    /// Returns `true` iff the roster changed and was recorded now
    /// (`false` for unknown slots, identical re-assignment, or while a
    /// batch is deferring mutations).
    pub fn assign_to_seat(&mut self, boat: BoatId, seat: u8, athlete: AthleteId) -> bool {
        if !self.roster().contains_slot(SlotRef::Seat { boat, seat }) {
            return false;
        }

        self.store.set("assign seat", move |roster| {
            if let Some(b) = roster.boat_mut(boat) {
                if let Some(s) = b.seat_mut(seat) {
                    s.occupant = Some(athlete);
                }
            }
        })
    }

    /// Place an athlete in the coxswain slot of a coxed shell.
    pub fn assign_to_coxswain(&mut self, boat: BoatId, athlete: AthleteId) -> bool {
        if !self.roster().contains_slot(SlotRef::Coxswain { boat }) {
            return false;
        }

        self.store.set("assign coxswain", move |roster| {
            if let Some(b) = roster.boat_mut(boat) {
                b.coxswain = Some(athlete);
            }
        })
    }

    /// Empty a numbered seat.
    pub fn remove_from_seat(&mut self, boat: BoatId, seat: u8) -> bool {
        if !self.roster().contains_slot(SlotRef::Seat { boat, seat }) {
            return false;
        }

        self.store.set("clear seat", move |roster| {
            if let Some(b) = roster.boat_mut(boat) {
                if let Some(s) = b.seat_mut(seat) {
                    s.occupant = None;
                }
            }
        })
    }

    /// Empty the coxswain slot.
    pub fn remove_from_coxswain(&mut self, boat: BoatId) -> bool {
        if !self.roster().contains_slot(SlotRef::Coxswain { boat }) {
            return false;
        }

        self.store.set("clear coxswain", move |roster| {
            if let Some(b) = roster.boat_mut(boat) {
                b.coxswain = None;
            }
        })
    }

    // --- selection & swap -------------------------------------------------

    /// Toggle a slot in or out of the selection buffer.
    ///
    /// Slots that do not exist in the roster are rejected. Returns
    /// `true` when the slot is selected afterwards. Selection changes
    /// are never history entries.
    pub fn toggle_selection(&mut self, slot: SlotRef) -> bool {
        if !self.roster().contains_slot(slot) {
            return false;
        }
        self.selection.toggle(slot)
    }

    /// Deselect everything.
    pub fn clear_seat_selection(&mut self) {
        self.selection.clear();
    }

    /// Exchange the occupants of the two selected slots.
    ///
    /// No-op unless exactly two slots are selected and both still exist
    /// in the roster: a selection left dangling by undo (its boat was
    /// undone away) is dropped from the buffer instead of exchanged.
    /// Rejected while a batch is open, where occupants would be
    /// resolved against the pre-batch roster. Exchanging with an empty
    /// slot moves the occupant. The whole exchange is one `set` call,
    /// so it is one undoable step; the selection is cleared once the
    /// swap commits.
    ///
    /// Returns `true` iff the exchange changed the roster and was
    /// recorded.
    pub fn swap(&mut self) -> bool {
        if self.store.is_batching() {
            return false;
        }

        let Some((a, b)) = self.selection.pair() else {
            return false;
        };

        if !self.roster().contains_slot(a) || !self.roster().contains_slot(b) {
            let roster = self.store.state();
            self.selection.retain(|slot| roster.contains_slot(slot));
            return false;
        }

        let occupant_a = self.roster().occupant_at(a).cloned();
        let occupant_b = self.roster().occupant_at(b).cloned();

        let recorded = self.store.set("swap occupants", move |roster| {
            if a.boat() == b.boat() {
                // One working copy of the boat carries both writes.
                if let Some(boat) = roster.boat_mut(a.boat()) {
                    place(boat, a, occupant_b);
                    place(boat, b, occupant_a);
                }
            } else {
                if let Some(boat) = roster.boat_mut(a.boat()) {
                    place(boat, a, occupant_b);
                }
                if let Some(boat) = roster.boat_mut(b.boat()) {
                    place(boat, b, occupant_a);
                }
            }
        });

        self.selection.clear();
        recorded
    }

    // --- temporal API -----------------------------------------------------

    /// Undo the most recent recorded mutation. `false` at the boundary.
    pub fn undo(&mut self) -> bool {
        self.store.undo()
    }

    /// Redo the most recently undone mutation. `false` at the boundary.
    pub fn redo(&mut self) -> bool {
        self.store.redo()
    }

    /// Group subsequent mutations into one undoable step.
    pub fn start_batch(&mut self, label: &str) -> bool {
        self.store.start_batch(label)
    }

    /// Commit the open batch as a single history entry, dropping any
    /// selection whose slot a batched removal took away.
    pub fn end_batch(&mut self) -> bool {
        let recorded = self.store.end_batch();
        let roster = self.store.state();
        self.selection.retain(|slot| roster.contains_slot(slot));
        recorded
    }

    /// Force the current roster onto the undo stack (deduplicated).
    pub fn checkpoint(&mut self, label: &str) -> bool {
        self.store.checkpoint(label)
    }

    /// Drop all undo/redo history. The roster is untouched.
    pub fn clear_history(&mut self) {
        self.store.clear_history()
    }

    pub fn can_undo(&self) -> bool {
        self.store.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.store.can_redo()
    }

    pub fn undo_count(&self) -> usize {
        self.store.undo_count()
    }

    pub fn redo_count(&self) -> usize {
        self.store.redo_count()
    }

    /// Label of the mutation that would be undone next.
    pub fn undo_label(&self) -> Option<&str> {
        self.store.undo_label()
    }

    /// Label of the mutation that would be redone next.
    pub fn redo_label(&self) -> Option<&str> {
        self.store.redo_label()
    }

    pub fn is_batching(&self) -> bool {
        self.store.is_batching()
    }
}
