//! Lineup serialization for the host's persistence layer.
//!
//! The engine itself never touches disk or network; persistence is the
//! host's concern. This module gives the host a versioned, serializable
//! capture of the tracked roster to hand to whatever storage it uses.

use crate::roster::RosterState;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod error;

pub use error::ExportError;

/// Version identifier for the lineup file format
pub const LINEUP_FORMAT_VERSION: u32 = 1;

/// Serializable capture of a roster at one instant.
///
/// Carries only tracked state; history and selection are session-local
/// and never persisted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LineupFile {
    /// Lineup file format version
    pub version: u32,

    /// Unique capture identifier
    pub id: String,

    /// When the capture was taken
    pub timestamp: DateTime<Utc>,

    /// The roster as it stood
    pub roster: RosterState,
}

impl LineupFile {
    /// Capture the given roster, stamping a fresh id and timestamp.
    pub fn capture(roster: &RosterState) -> Self {
        Self {
            version: LINEUP_FORMAT_VERSION,
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            roster: roster.clone(),
        }
    }

    /// Encode as JSON.
    pub fn to_json(&self) -> Result<String, ExportError> {
        serde_json::to_string(self).map_err(|e| ExportError::SerializationFailed(e.to_string()))
    }

    /// Decode from JSON, rejecting unsupported format versions.
    pub fn from_json(json: &str) -> Result<Self, ExportError> {
        let file: Self = serde_json::from_str(json)
            .map_err(|e| ExportError::DeserializationFailed(e.to_string()))?;
        file.validate_version()
    }

    /// Encode as a compact binary blob.
    pub fn to_bytes(&self) -> Result<Vec<u8>, ExportError> {
        bincode::serialize(self).map_err(|e| ExportError::SerializationFailed(e.to_string()))
    }

    /// Decode from a binary blob, rejecting unsupported format versions.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ExportError> {
        let file: Self = bincode::deserialize(bytes)
            .map_err(|e| ExportError::DeserializationFailed(e.to_string()))?;
        file.validate_version()
    }

    fn validate_version(self) -> Result<Self, ExportError> {
        if self.version != LINEUP_FORMAT_VERSION {
            return Err(ExportError::UnsupportedVersion {
                found: self.version,
                supported: LINEUP_FORMAT_VERSION,
            });
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::{AthleteId, BoatConfig};
    use crate::LineupEditor;

    fn sample_roster() -> RosterState {
        let mut editor = LineupEditor::new();
        let id = editor.add_boat(BoatConfig::eight("V8"));
        editor.assign_to_seat(id, 8, AthleteId::new("stroke"));
        editor.assign_to_coxswain(id, AthleteId::new("cox"));
        editor.roster().clone()
    }

    #[test]
    fn capture_copies_the_roster() {
        let roster = sample_roster();
        let file = LineupFile::capture(&roster);

        assert_eq!(file.version, LINEUP_FORMAT_VERSION);
        assert_eq!(file.roster, roster);
    }

    #[test]
    fn captures_get_distinct_ids() {
        let roster = sample_roster();
        let a = LineupFile::capture(&roster);
        let b = LineupFile::capture(&roster);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn json_roundtrip() {
        let file = LineupFile::capture(&sample_roster());
        let json = file.to_json().unwrap();
        let back = LineupFile::from_json(&json).unwrap();
        assert_eq!(file, back);
    }

    #[test]
    fn binary_roundtrip() {
        let file = LineupFile::capture(&sample_roster());
        let bytes = file.to_bytes().unwrap();
        let back = LineupFile::from_bytes(&bytes).unwrap();
        assert_eq!(file, back);
    }

    #[test]
    fn unsupported_version_is_rejected() {
        let mut file = LineupFile::capture(&sample_roster());
        file.version = LINEUP_FORMAT_VERSION + 1;

        let json = file.to_json().unwrap();
        let err = LineupFile::from_json(&json).unwrap_err();
        assert!(matches!(
            err,
            ExportError::UnsupportedVersion { found, .. } if found == LINEUP_FORMAT_VERSION + 1
        ));
    }

    #[test]
    fn garbage_json_is_a_deserialization_error() {
        let err = LineupFile::from_json("not json").unwrap_err();
        assert!(matches!(err, ExportError::DeserializationFailed(_)));
    }
}
