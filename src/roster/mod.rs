//! The rowing domain model: boats, seats, athletes, and selections.
//!
//! Everything here is plain data. Mutation policy (what gets recorded,
//! how swaps commit) lives in the `store` and `editor` modules.

mod boat;
mod selection;
mod state;

pub use boat::{AthleteId, Boat, BoatConfig, BoatId, Seat, Side};
pub use selection::{SelectionBuffer, SlotRef, SELECTION_CAPACITY};
pub use state::RosterState;
