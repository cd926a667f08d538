//! The `Tracked` trait marking state the temporal engine manages.
//!
//! The engine only ever sees the tracked subset of application state.
//! Everything else (view state, network caches, playback position) stays
//! outside the tracked type and is invisible to undo/redo.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// State that can be placed under temporal control.
///
/// The trait is a bound alias: any plain-data type with the required
/// derives is tracked automatically. The bounds encode the snapshot
/// contract:
///
/// - `Clone`: snapshots are independent deep copies
/// - `PartialEq`: structural comparison decides whether a mutation is
///   recorded (no-op elision) and whether a checkpoint is a duplicate
/// - `Debug`: diagnostics
/// - `Serialize` + `Deserialize`: tracked state must round-trip through
///   a canonical serialization cleanly
///
/// The serde bounds are deliberate, not incidental: structural equality
/// on a tracked type must coincide with equality of its canonical
/// serialized form. Types whose `Clone` or `PartialEq` diverge from
/// their serialized shape (interior mutability, identity-based equality,
/// non-plain collections) are out of contract and must not be tracked.
///
/// # Example
///
/// ```rust
/// use coxbox::Tracked;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// struct Counter {
///     value: i64,
/// }
///
/// fn assert_tracked<T: Tracked>() {}
/// assert_tracked::<Counter>();
/// ```
pub trait Tracked: Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> {}

impl<T> Tracked for T where T: Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> {}
