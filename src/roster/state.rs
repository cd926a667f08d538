//! The tracked roster: every boat currently being edited.

use super::boat::{AthleteId, Boat, BoatId};
use super::selection::SlotRef;
use serde::{Deserialize, Serialize};

/// The collection of boats under temporal control.
///
/// This is the tracked subset of the editor's state: snapshots cover
/// exactly this value, nothing else. The selection buffer is kept
/// outside it on purpose, so undo never resurrects a stale selection.
#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct RosterState {
    pub boats: Vec<Boat>,
}

impl RosterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a boat by id.
    pub fn boat(&self, id: BoatId) -> Option<&Boat> {
        self.boats.iter().find(|b| b.id == id)
    }

    /// Mutable boat lookup.
    pub fn boat_mut(&mut self, id: BoatId) -> Option<&mut Boat> {
        self.boats.iter_mut().find(|b| b.id == id)
    }

    /// Whether the referenced slot exists in the roster. A coxswain
    /// slot exists only on coxed shells.
    pub fn contains_slot(&self, slot: SlotRef) -> bool {
        match slot {
            SlotRef::Seat { boat, seat } => {
                self.boat(boat).is_some_and(|b| b.seat(seat).is_some())
            }
            SlotRef::Coxswain { boat } => self.boat(boat).is_some_and(|b| b.coxed),
        }
    }

    /// The athlete currently occupying the referenced slot, if any.
    pub fn occupant_at(&self, slot: SlotRef) -> Option<&AthleteId> {
        match slot {
            SlotRef::Seat { boat, seat } => self.boat(boat)?.seat(seat)?.occupant.as_ref(),
            SlotRef::Coxswain { boat } => self.boat(boat)?.coxswain.as_ref(),
        }
    }

    /// Every filled slot in the roster with its occupant, boat by boat.
    ///
    /// This is the raw material for save-time validation and for
    /// "available athletes" filtering in the host.
    pub fn occupied_slots(&self) -> Vec<(SlotRef, &AthleteId)> {
        let mut slots = Vec::new();
        for boat in &self.boats {
            for seat in &boat.seats {
                if let Some(athlete) = &seat.occupant {
                    slots.push((
                        SlotRef::Seat {
                            boat: boat.id,
                            seat: seat.number,
                        },
                        athlete,
                    ));
                }
            }
            if let Some(athlete) = &boat.coxswain {
                slots.push((SlotRef::Coxswain { boat: boat.id }, athlete));
            }
        }
        slots
    }
}
