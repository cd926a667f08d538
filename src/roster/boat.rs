//! Boats, seats, and the identifiers placed into them.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque reference to an athlete record.
///
/// The engine copies these into seats and coxswain slots but never
/// interprets them; athlete identity is owned by the host's roster
/// source.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub struct AthleteId(String);

impl AthleteId {
    /// Wrap a host-supplied athlete identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The underlying identifier string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AthleteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Unique identifier of one boat instance in the roster.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct BoatId(Uuid);

impl BoatId {
    pub(crate) fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for BoatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Rigging side of a seat.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Side {
    Port,
    Starboard,
}

/// One rowing seat in a boat.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Seat {
    /// Seat number, 1 (bow) through the boat's seat count (stroke).
    pub number: u8,
    /// Which side the seat is rigged on.
    pub side: Side,
    /// Athlete currently assigned, if any.
    pub occupant: Option<AthleteId>,
}

/// Configuration for creating a boat.
///
/// # Example
///
/// ```rust
/// use coxbox::BoatConfig;
///
/// let config = BoatConfig::new("Varsity 8", 8).coxed();
/// assert_eq!(config.seat_count, 8);
/// assert!(config.coxed);
///
/// let four = BoatConfig::four("Lightweight 4");
/// assert_eq!(four.seat_count, 4);
/// ```
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct BoatConfig {
    /// Shell name shown in the editor.
    pub name: String,
    /// Number of rowing seats.
    pub seat_count: u8,
    /// Whether the shell carries a coxswain slot.
    pub coxed: bool,
}

impl BoatConfig {
    /// A shell with the given name and seat count, uncoxed.
    pub fn new(name: impl Into<String>, seat_count: u8) -> Self {
        Self {
            name: name.into(),
            seat_count,
            coxed: false,
        }
    }

    /// Add a coxswain slot.
    pub fn coxed(mut self) -> Self {
        self.coxed = true;
        self
    }

    /// A coxed eight.
    pub fn eight(name: impl Into<String>) -> Self {
        Self::new(name, 8).coxed()
    }

    /// A straight (uncoxed) four.
    pub fn four(name: impl Into<String>) -> Self {
        Self::new(name, 4)
    }

    /// A single scull.
    pub fn single(name: impl Into<String>) -> Self {
        Self::new(name, 1)
    }
}

/// One boat being edited: ordered seats plus an optional coxswain slot.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Boat {
    pub id: BoatId,
    pub name: String,
    /// Seats ordered stroke-to-bow (highest number first), side
    /// alternating by parity: even numbers port, odd starboard.
    pub seats: Vec<Seat>,
    /// Whether this shell has a coxswain slot at all.
    pub coxed: bool,
    /// Athlete in the coxswain slot, if any.
    pub coxswain: Option<AthleteId>,
}

impl Boat {
    /// Build an empty boat from a configuration, generating a fresh id.
    pub fn new(config: &BoatConfig) -> Self {
        let seats = (1..=config.seat_count)
            .rev()
            .map(|number| Seat {
                number,
                side: if number % 2 == 0 {
                    Side::Port
                } else {
                    Side::Starboard
                },
                occupant: None,
            })
            .collect();

        Self {
            id: BoatId::generate(),
            name: config.name.clone(),
            seats,
            coxed: config.coxed,
            coxswain: None,
        }
    }

    /// Look up a seat by number.
    pub fn seat(&self, number: u8) -> Option<&Seat> {
        self.seats.iter().find(|s| s.number == number)
    }

    /// Mutable seat lookup.
    pub fn seat_mut(&mut self, number: u8) -> Option<&mut Seat> {
        self.seats.iter_mut().find(|s| s.number == number)
    }

    /// All athletes currently placed in this boat, seats then coxswain.
    pub fn occupants(&self) -> impl Iterator<Item = &AthleteId> {
        self.seats
            .iter()
            .filter_map(|s| s.occupant.as_ref())
            .chain(self.coxswain.as_ref())
    }

    /// Whether no seat (coxswain included) is filled.
    pub fn is_empty(&self) -> bool {
        self.occupants().next().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seats_are_ordered_stroke_to_bow() {
        let boat = Boat::new(&BoatConfig::eight("V8"));
        let numbers: Vec<u8> = boat.seats.iter().map(|s| s.number).collect();
        assert_eq!(numbers, vec![8, 7, 6, 5, 4, 3, 2, 1]);
    }

    #[test]
    fn sides_alternate_by_parity() {
        let boat = Boat::new(&BoatConfig::four("Four"));
        assert_eq!(boat.seat(4).unwrap().side, Side::Port);
        assert_eq!(boat.seat(3).unwrap().side, Side::Starboard);
        assert_eq!(boat.seat(2).unwrap().side, Side::Port);
        assert_eq!(boat.seat(1).unwrap().side, Side::Starboard);
    }

    #[test]
    fn new_boat_is_empty() {
        let boat = Boat::new(&BoatConfig::eight("V8"));
        assert!(boat.is_empty());
        assert!(boat.seats.iter().all(|s| s.occupant.is_none()));
        assert!(boat.coxswain.is_none());
        assert!(boat.coxed);
    }

    #[test]
    fn uncoxed_config_has_no_cox_slot() {
        let boat = Boat::new(&BoatConfig::four("Four"));
        assert!(!boat.coxed);
    }

    #[test]
    fn seat_lookup_by_number() {
        let boat = Boat::new(&BoatConfig::new("Pair", 2));
        assert!(boat.seat(1).is_some());
        assert!(boat.seat(2).is_some());
        assert!(boat.seat(3).is_none());
        assert!(boat.seat(0).is_none());
    }

    #[test]
    fn occupants_cover_seats_and_coxswain() {
        let mut boat = Boat::new(&BoatConfig::eight("V8"));
        boat.seat_mut(8).unwrap().occupant = Some(AthleteId::new("stroke"));
        boat.seat_mut(1).unwrap().occupant = Some(AthleteId::new("bow"));
        boat.coxswain = Some(AthleteId::new("cox"));

        let names: Vec<&str> = boat.occupants().map(|a| a.as_str()).collect();
        assert_eq!(names, vec!["stroke", "bow", "cox"]);
        assert!(!boat.is_empty());
    }

    #[test]
    fn fresh_boats_get_distinct_ids() {
        let a = Boat::new(&BoatConfig::single("A"));
        let b = Boat::new(&BoatConfig::single("B"));
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn boat_serialization_roundtrip() {
        let mut boat = Boat::new(&BoatConfig::eight("V8"));
        boat.seat_mut(5).unwrap().occupant = Some(AthleteId::new("a5"));

        let json = serde_json::to_string(&boat).unwrap();
        let back: Boat = serde_json::from_str(&json).unwrap();
        assert_eq!(boat, back);
    }
}
