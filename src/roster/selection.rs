//! Slot references and the bounded selection buffer feeding swaps.

use super::boat::BoatId;
use serde::{Deserialize, Serialize};

/// Maximum number of simultaneously selected slots.
pub const SELECTION_CAPACITY: usize = 2;

/// Reference to exactly one slot: a numbered seat or the coxswain slot
/// of one boat.
///
/// The seat/coxswain distinction is a tagged union so that every
/// consumer has to handle both cases explicitly.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum SlotRef {
    /// A numbered rowing seat.
    Seat { boat: BoatId, seat: u8 },
    /// The coxswain slot.
    Coxswain { boat: BoatId },
}

impl SlotRef {
    /// The boat this slot belongs to.
    pub fn boat(&self) -> BoatId {
        match self {
            SlotRef::Seat { boat, .. } | SlotRef::Coxswain { boat } => *boat,
        }
    }
}

/// Ordered FIFO of at most two selected slots.
///
/// Selecting a third distinct slot silently evicts the oldest
/// selection, never the most recent one. Toggling a slot that is
/// already selected deselects it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SelectionBuffer {
    entries: Vec<SlotRef>,
}

impl SelectionBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle a slot in or out of the selection.
    ///
    /// Returns `true` when the slot is selected afterwards, `false`
    /// when the call deselected it.
    pub fn toggle(&mut self, slot: SlotRef) -> bool {
        if let Some(pos) = self.entries.iter().position(|e| *e == slot) {
            self.entries.remove(pos);
            return false;
        }

        if self.entries.len() == SELECTION_CAPACITY {
            self.entries.remove(0);
        }
        self.entries.push(slot);
        true
    }

    /// Drop every selection referencing the given boat.
    pub fn purge_boat(&mut self, boat: BoatId) {
        self.entries.retain(|e| e.boat() != boat);
    }

    /// Keep only the selections satisfying the predicate, preserving
    /// oldest-first order.
    pub fn retain(&mut self, keep: impl Fn(SlotRef) -> bool) {
        self.entries.retain(|e| keep(*e));
    }

    /// Deselect everything.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// The selected slots, oldest first.
    pub fn entries(&self) -> &[SlotRef] {
        &self.entries
    }

    /// Both selected slots, oldest first, when exactly two are selected.
    pub fn pair(&self) -> Option<(SlotRef, SlotRef)> {
        match self.entries[..] {
            [a, b] => Some((a, b)),
            _ => None,
        }
    }

    pub fn contains(&self, slot: SlotRef) -> bool {
        self.entries.contains(&slot)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
