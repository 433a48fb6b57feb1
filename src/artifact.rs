//! Trained-model artifact consumption.
//!
//! The offline trainer analyses historical sensor traces and emits a small
//! JSON artifact holding four numeric arrays of equal length, one entry per
//! channel in the fixed order accel-X, accel-Y, accel-Z, voltage. This
//! module parses that artifact into a [`BoundsTable`]. The core only ever
//! consumes artifacts; producing or persisting them stays with the trainer.
//!
//! On the device the artifact is embedded into the firmware image at build
//! time:
//!
//! ```ignore
//! use tamper_model::artifact::TrainedArtifact;
//!
//! const BOUNDS: &[u8] = include_bytes!("../models/bounds.json");
//!
//! fn load() -> tamper_model::Result<tamper_model::BoundsTable> {
//!     TrainedArtifact::from_bytes(BOUNDS)?.into_table()
//! }
//! ```

use crate::channel::Channel;
use crate::error::{ModelError, Result};
use crate::model::BoundsTable;
use serde::Deserialize;
use std::path::Path;

/// A trained bounds artifact as emitted by the offline trainer.
///
/// Arrays are kept as vectors until [`into_table`](Self::into_table) so a
/// wrong-length artifact is reported with a precise error instead of
/// failing deserialization opaquely.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TrainedArtifact {
    /// Per-channel means from the training traces.
    pub means: Vec<f32>,
    /// Per-channel standard deviations.
    pub stds: Vec<f32>,
    /// Per-channel lower acceptance bounds.
    pub lower_bounds: Vec<f32>,
    /// Per-channel upper acceptance bounds.
    pub upper_bounds: Vec<f32>,
    /// Optional model name attached by the trainer.
    #[serde(default)]
    pub name: Option<String>,
    /// Optional training timestamp (RFC 3339) attached by the trainer.
    #[serde(default)]
    pub trained_at: Option<String>,
}

impl TrainedArtifact {
    /// Parse an artifact from raw JSON bytes, e.g. an `include_bytes!()`
    /// blob baked into the firmware image.
    ///
    /// # Errors
    ///
    /// Returns an error if the bytes are not a valid artifact document.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        serde_json::from_slice(bytes)
            .map_err(|e| ModelError::invalid_artifact(e.to_string()))
    }

    /// Read and parse an artifact from a file path (host-side tooling).
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::ArtifactNotFound`] if the path does not exist,
    /// or a parse error for malformed contents.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ModelError::ArtifactNotFound {
                path: path.to_path_buf(),
            });
        }
        let bytes = std::fs::read(path)?;
        Self::from_bytes(&bytes)
    }

    /// Model name, if the trainer attached one.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or("unnamed")
    }

    /// Convert into a validated [`BoundsTable`].
    ///
    /// # Errors
    ///
    /// Returns an error if any array does not have exactly one entry per
    /// channel, or if a channel's acceptance interval is empty or
    /// non-finite.
    pub fn into_table(self) -> Result<BoundsTable> {
        let table = self.into_table_unchecked()?;
        table.validate()?;
        Ok(table)
    }

    /// Convert into a [`BoundsTable`] checking only the array lengths,
    /// preserving the firmware's no-validation semantics for the bounds
    /// themselves.
    ///
    /// # Errors
    ///
    /// Returns an error if any array does not have exactly one entry per
    /// channel.
    pub fn into_table_unchecked(self) -> Result<BoundsTable> {
        Ok(BoundsTable::builder()
            .with_means(to_channel_array("means", &self.means)?)
            .with_stds(to_channel_array("stds", &self.stds)?)
            .with_lower_bounds(to_channel_array("lower_bounds", &self.lower_bounds)?)
            .with_upper_bounds(to_channel_array("upper_bounds", &self.upper_bounds)?)
            .build())
    }
}

fn to_channel_array(field: &'static str, values: &[f32]) -> Result<[f32; Channel::COUNT]> {
    <[f32; Channel::COUNT]>::try_from(values)
        .map_err(|_| ModelError::channel_count_mismatch(field, Channel::COUNT, values.len()))
}
