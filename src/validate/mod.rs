//! Save-time lineup validation.
//!
//! The editor is deliberately permissive while a lineup is in flight:
//! the same athlete may sit in several seats mid-edit and a coxed shell
//! may go coxless. These rules run when the host is about to persist a
//! lineup, and they accumulate ALL violations rather than stopping at
//! the first.

use crate::roster::{AthleteId, RosterState};
use std::collections::{BTreeMap, HashSet};
use thiserror::Error;

/// A lineup problem that blocks saving.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum Violation {
    /// One athlete occupies more than one slot across the roster.
    #[error("athlete {athlete} is assigned to {count} slots")]
    DuplicateAthlete { athlete: AthleteId, count: usize },

    /// A boat with no rowers at all.
    #[error("boat \"{name}\" has no rowers assigned")]
    EmptyBoat { name: String },

    /// A coxed shell without a coxswain.
    #[error("coxed boat \"{name}\" is missing a coxswain")]
    MissingCoxswain { name: String },
}

/// Check a roster against every save rule, accumulating all violations.
///
/// An empty result means the lineup is save-ready.
///
/// # Example
///
/// ```rust
/// use coxbox::{AthleteId, BoatConfig, LineupEditor};
/// use coxbox::validate::{check_roster, Violation};
///
/// let mut editor = LineupEditor::new();
/// let boat = editor.add_boat(BoatConfig::four("Four"));
/// editor.assign_to_seat(boat, 1, AthleteId::new("p"));
/// editor.assign_to_seat(boat, 2, AthleteId::new("p"));
///
/// let violations = check_roster(editor.roster());
/// assert!(violations
///     .iter()
///     .any(|v| matches!(v, Violation::DuplicateAthlete { count: 2, .. })));
/// ```
pub fn check_roster(roster: &RosterState) -> Vec<Violation> {
    let mut violations = Vec::new();

    let mut counts: BTreeMap<&AthleteId, usize> = BTreeMap::new();
    for (_, athlete) in roster.occupied_slots() {
        *counts.entry(athlete).or_default() += 1;
    }
    for (athlete, count) in counts {
        if count > 1 {
            violations.push(Violation::DuplicateAthlete {
                athlete: athlete.clone(),
                count,
            });
        }
    }

    for boat in &roster.boats {
        if boat.seats.iter().all(|s| s.occupant.is_none()) {
            violations.push(Violation::EmptyBoat {
                name: boat.name.clone(),
            });
        }
        if boat.coxed && boat.coxswain.is_none() {
            violations.push(Violation::MissingCoxswain {
                name: boat.name.clone(),
            });
        }
    }

    violations
}

/// Filter a host-supplied athlete pool down to those not yet assigned
/// anywhere in the roster.
pub fn unassigned<'a>(roster: &RosterState, pool: &'a [AthleteId]) -> Vec<&'a AthleteId> {
    let assigned: HashSet<&AthleteId> = roster
        .occupied_slots()
        .into_iter()
        .map(|(_, athlete)| athlete)
        .collect();

    pool.iter().filter(|a| !assigned.contains(a)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::BoatConfig;
    use crate::LineupEditor;

    fn athlete(name: &str) -> AthleteId {
        AthleteId::new(name)
    }

    #[test]
    fn empty_roster_is_save_ready() {
        assert!(check_roster(&RosterState::new()).is_empty());
    }

    #[test]
    fn full_uncoxed_boat_is_save_ready() {
        let mut editor = LineupEditor::new();
        let id = editor.add_boat(BoatConfig::four("Four"));
        for (seat, name) in [(1, "a"), (2, "b"), (3, "c"), (4, "d")] {
            editor.assign_to_seat(id, seat, athlete(name));
        }

        assert!(check_roster(editor.roster()).is_empty());
    }

    #[test]
    fn duplicate_athlete_is_reported_with_count() {
        let mut editor = LineupEditor::new();
        let id = editor.add_boat(BoatConfig::eight("V8"));
        editor.assign_to_seat(id, 8, athlete("p"));
        editor.assign_to_seat(id, 7, athlete("p"));
        editor.assign_to_coxswain(id, athlete("p"));

        let violations = check_roster(editor.roster());
        assert!(violations.contains(&Violation::DuplicateAthlete {
            athlete: athlete("p"),
            count: 3,
        }));
    }

    #[test]
    fn all_violations_accumulate() {
        let mut editor = LineupEditor::new();
        let eight = editor.add_boat(BoatConfig::eight("V8"));
        editor.add_boat(BoatConfig::four("Empty Four"));
        editor.assign_to_seat(eight, 8, athlete("p"));
        editor.assign_to_seat(eight, 7, athlete("p"));

        let violations = check_roster(editor.roster());
        assert!(violations
            .iter()
            .any(|v| matches!(v, Violation::DuplicateAthlete { .. })));
        assert!(violations
            .iter()
            .any(|v| matches!(v, Violation::EmptyBoat { .. })));
        assert!(violations
            .iter()
            .any(|v| matches!(v, Violation::MissingCoxswain { .. })));
    }

    #[test]
    fn coxswain_alone_does_not_fill_a_boat() {
        let mut editor = LineupEditor::new();
        let id = editor.add_boat(BoatConfig::eight("V8"));
        editor.assign_to_coxswain(id, athlete("cox"));

        let violations = check_roster(editor.roster());
        assert!(violations
            .iter()
            .any(|v| matches!(v, Violation::EmptyBoat { .. })));
    }

    #[test]
    fn violation_messages_name_the_problem() {
        let v = Violation::MissingCoxswain {
            name: "V8".to_string(),
        };
        assert_eq!(v.to_string(), "coxed boat \"V8\" is missing a coxswain");
    }

    #[test]
    fn unassigned_filters_out_placed_athletes() {
        let mut editor = LineupEditor::new();
        let id = editor.add_boat(BoatConfig::four("Four"));
        editor.assign_to_seat(id, 1, athlete("a"));

        let pool = vec![athlete("a"), athlete("b"), athlete("c")];
        let available = unassigned(editor.roster(), &pool);
        let names: Vec<&str> = available.iter().map(|a| a.as_str()).collect();
        assert_eq!(names, vec!["b", "c"]);
    }
}
