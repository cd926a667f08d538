//! Lineup export error types.

use thiserror::Error;

/// Errors that can occur when encoding or decoding a lineup file.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Serialization to JSON or binary format failed
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),

    /// Deserialization from JSON or binary format failed
    #[error("Deserialization failed: {0}")]
    DeserializationFailed(String),

    /// Lineup format version is not supported by this version
    #[error("Unsupported lineup format version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },
}
