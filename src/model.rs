//! Bounds table and out-of-bounds classifier.
//!
//! The table holds per-channel statistics computed by the offline trainer:
//! mean, standard deviation, and the derived lower/upper acceptance bounds.
//! Classification is a single pass over the channels in fixed order with a
//! closed-interval membership test per channel, so a call costs at most four
//! comparisons and never allocates.
//!
//! # Example
//!
//! ```
//! use tamper_model::{BoundsTable, Channel, Reading};
//!
//! let table = BoundsTable::builder()
//!     .with_lower_bounds([-1000.0, -1000.0, -1000.0, 0.0])
//!     .with_upper_bounds([1000.0, 1000.0, 1000.0, 5000.0])
//!     .build();
//!
//! assert!(!table.is_anomaly(&Reading::new(500, -500, 999, 4999)));
//! assert!(table.is_anomaly(&Reading::new(1001, 0, 0, 0)));
//! assert_eq!(
//!     table.first_violation(&Reading::new(1001, 0, 0, 0)),
//!     Some(Channel::AccelX),
//! );
//! ```

use crate::channel::{Channel, Reading};
use crate::error::{ModelError, Result};
use serde::{Deserialize, Serialize};

/// Bound wide enough to accept any plausible sensor value; used by the
/// untrained placeholder so the detector produces no false positives
/// before a trained table is installed.
const PLACEHOLDER_BOUND: f32 = 99_999.0;

/// Per-channel statistics and acceptance bounds for the anomaly check.
///
/// Immutable once built. The firmware constructs one table at startup
/// (placeholder or trained) and passes it by reference into every
/// classification call; replacing a trained table means building a new
/// value and swapping it whole, never patching arrays in place.
///
/// `means` and `stds` are carried from the trainer but unread by the
/// range check; they are retained for a future z-score based test.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundsTable {
    means: [f32; Channel::COUNT],
    stds: [f32; Channel::COUNT],
    lower_bounds: [f32; Channel::COUNT],
    upper_bounds: [f32; Channel::COUNT],
}

impl BoundsTable {
    /// The permissive untrained table: zero statistics and ±99999 bounds.
    ///
    /// Installed at firmware build time until the offline trainer emits a
    /// real table. Accepts every representable accelerometer sample and
    /// any voltage within ±99999.
    #[must_use]
    pub fn placeholder() -> Self {
        Self {
            means: [0.0; Channel::COUNT],
            stds: [0.0; Channel::COUNT],
            lower_bounds: [-PLACEHOLDER_BOUND; Channel::COUNT],
            upper_bounds: [PLACEHOLDER_BOUND; Channel::COUNT],
        }
    }

    /// Start building a table from per-channel arrays.
    #[must_use]
    pub fn builder() -> BoundsTableBuilder {
        BoundsTableBuilder::default()
    }

    /// Trained mean for one channel.
    #[must_use]
    pub fn mean(&self, channel: Channel) -> f32 {
        self.means[channel.index()]
    }

    /// Trained standard deviation for one channel.
    #[must_use]
    pub fn std_dev(&self, channel: Channel) -> f32 {
        self.stds[channel.index()]
    }

    /// Lower acceptance bound for one channel (inclusive).
    #[must_use]
    pub fn lower_bound(&self, channel: Channel) -> f32 {
        self.lower_bounds[channel.index()]
    }

    /// Upper acceptance bound for one channel (inclusive).
    #[must_use]
    pub fn upper_bound(&self, channel: Channel) -> f32 {
        self.upper_bounds[channel.index()]
    }

    /// Classify a reading against this table.
    ///
    /// Returns `true` as soon as any channel falls strictly outside its
    /// closed interval `[lower, upper]`; later channels are not examined.
    /// Values exactly on a bound are normal. Pure and infallible: no
    /// validation of the table happens here, so a degenerate table (lower
    /// above upper) makes its channel permanently anomalous.
    #[must_use]
    pub fn is_anomaly(&self, reading: &Reading) -> bool {
        self.first_violation(reading).is_some()
    }

    /// The first channel, in classification order, whose value falls
    /// outside its acceptance interval. `None` means the reading is normal.
    #[must_use]
    pub fn first_violation(&self, reading: &Reading) -> Option<Channel> {
        Channel::ALL.into_iter().find(|&channel| {
            let value = reading.value(channel);
            value < self.lower_bound(channel) || value > self.upper_bound(channel)
        })
    }

    /// Check that every channel has a non-empty, finite acceptance interval.
    ///
    /// Construction never validates; this is an opt-in startup check for
    /// callers that want to reject a malformed trained table instead of
    /// running with a permanently-anomalous channel.
    ///
    /// # Errors
    ///
    /// Returns an error for the first channel with a NaN or infinite bound,
    /// or with `lower > upper`.
    pub fn validate(&self) -> Result<()> {
        for channel in Channel::ALL {
            let lower = self.lower_bound(channel);
            let upper = self.upper_bound(channel);
            if !lower.is_finite() || !upper.is_finite() {
                return Err(ModelError::NonFiniteBound { channel });
            }
            if lower > upper {
                return Err(ModelError::InvertedBounds {
                    channel,
                    lower,
                    upper,
                });
            }
        }
        Ok(())
    }
}

impl Default for BoundsTable {
    fn default() -> Self {
        Self::placeholder()
    }
}

/// Builder assembling a [`BoundsTable`] from per-channel arrays.
///
/// Unset arrays default to the placeholder values, so a builder with only
/// bounds set still carries zeroed statistics.
#[derive(Debug, Clone)]
pub struct BoundsTableBuilder {
    table: BoundsTable,
}

impl Default for BoundsTableBuilder {
    fn default() -> Self {
        Self {
            table: BoundsTable::placeholder(),
        }
    }
}

impl BoundsTableBuilder {
    /// Set the per-channel means.
    #[must_use]
    pub fn with_means(mut self, means: [f32; Channel::COUNT]) -> Self {
        self.table.means = means;
        self
    }

    /// Set the per-channel standard deviations.
    #[must_use]
    pub fn with_stds(mut self, stds: [f32; Channel::COUNT]) -> Self {
        self.table.stds = stds;
        self
    }

    /// Set the per-channel lower bounds.
    #[must_use]
    pub fn with_lower_bounds(mut self, lower_bounds: [f32; Channel::COUNT]) -> Self {
        self.table.lower_bounds = lower_bounds;
        self
    }

    /// Set the per-channel upper bounds.
    #[must_use]
    pub fn with_upper_bounds(mut self, upper_bounds: [f32; Channel::COUNT]) -> Self {
        self.table.upper_bounds = upper_bounds;
        self
    }

    /// Build the table without validation, preserving firmware semantics.
    #[must_use]
    pub fn build(self) -> BoundsTable {
        self.table
    }

    /// Build the table, rejecting empty or non-finite acceptance intervals.
    ///
    /// # Errors
    ///
    /// Returns an error if any channel has `lower > upper` or a NaN or
    /// infinite bound.
    pub fn build_validated(self) -> Result<BoundsTable> {
        self.table.validate()?;
        Ok(self.table)
    }
}
