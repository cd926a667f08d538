//! Independent copies of tracked state at one instant.
//!
//! A `Snapshot` owns its copy, so later mutation of the live state can
//! never retroactively change a stored snapshot. Equality is structural,
//! which for `Tracked` types coincides with equality of the canonical
//! serialized form.

use super::tracked::Tracked;
use serde::{Deserialize, Serialize};

/// An immutable deep copy of tracked state.
///
/// # Example
///
/// ```rust
/// use coxbox::{RosterState, Snapshot};
///
/// let roster = RosterState::new();
/// let snapshot = Snapshot::capture(&roster);
///
/// assert_eq!(snapshot.value(), &roster);
/// assert_eq!(snapshot, Snapshot::capture(&roster));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Snapshot<T: Tracked> {
    value: T,
}

impl<T: Tracked> Snapshot<T> {
    /// Capture an independent copy of the given state.
    ///
    /// This is a total function with no side effects; the returned
    /// snapshot shares no structure with `state`.
    pub fn capture(state: &T) -> Self {
        Self {
            value: state.clone(),
        }
    }

    /// Borrow the captured value.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Produce an independent copy of the captured value, leaving the
    /// snapshot intact.
    pub fn restore(&self) -> T {
        self.value.clone()
    }

    /// Consume the snapshot, handing back the captured value.
    pub fn into_inner(self) -> T {
        self.value
    }
}
