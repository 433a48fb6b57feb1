//! Error types for model artifact handling.
//!
//! The classifier itself is infallible; errors only arise when consuming
//! a trained artifact or validating a bounds table.

use crate::channel::Channel;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;

/// Errors that can occur when loading or validating a bounds model.
#[derive(Debug, Error)]
pub enum ModelError {
    /// Artifact file not found at specified path.
    #[error("artifact not found: {path}")]
    ArtifactNotFound { path: PathBuf },

    /// Artifact is structurally invalid.
    #[error("invalid artifact: {reason}")]
    InvalidArtifact { reason: String },

    /// An artifact array does not have one entry per monitored channel.
    #[error("channel count mismatch in {field}: expected {expected}, got {actual}")]
    ChannelCountMismatch {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Lower bound exceeds upper bound for a channel, leaving an empty
    /// acceptance interval.
    #[error("inverted bounds for {channel}: lower {lower} > upper {upper}")]
    InvertedBounds {
        channel: Channel,
        lower: f32,
        upper: f32,
    },

    /// A bound is NaN or infinite.
    #[error("non-finite bound for {channel}")]
    NonFiniteBound { channel: Channel },

    /// I/O error during file operations.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl ModelError {
    /// Create a new invalid artifact error.
    #[must_use]
    pub fn invalid_artifact(reason: impl Into<String>) -> Self {
        Self::InvalidArtifact {
            reason: reason.into(),
        }
    }

    /// Create a new channel count mismatch error.
    #[must_use]
    pub fn channel_count_mismatch(field: &'static str, expected: usize, actual: usize) -> Self {
        Self::ChannelCountMismatch {
            field,
            expected,
            actual,
        }
    }
}

impl From<serde_json::Error> for ModelError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_artifact_not_found() {
        let err = ModelError::ArtifactNotFound {
            path: PathBuf::from("/path/to/bounds.json"),
        };
        assert_eq!(err.to_string(), "artifact not found: /path/to/bounds.json");
    }

    #[test]
    fn test_error_display_invalid_artifact() {
        let err = ModelError::invalid_artifact("truncated payload");
        assert_eq!(err.to_string(), "invalid artifact: truncated payload");
    }

    #[test]
    fn test_error_display_channel_count_mismatch() {
        let err = ModelError::channel_count_mismatch("lower_bounds", 4, 3);
        assert_eq!(
            err.to_string(),
            "channel count mismatch in lower_bounds: expected 4, got 3"
        );
    }

    #[test]
    fn test_error_display_inverted_bounds() {
        let err = ModelError::InvertedBounds {
            channel: Channel::Voltage,
            lower: 5000.0,
            upper: 0.0,
        };
        assert_eq!(
            err.to_string(),
            "inverted bounds for voltage: lower 5000 > upper 0"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ModelError = io_err.into();
        assert!(err.to_string().contains("io error"));
    }
}
