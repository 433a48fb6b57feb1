//! # Tamper Model
//!
//! Out-of-bounds anomaly model for HSM tamper-detection telemetry: 3-axis
//! acceleration plus a supply-voltage reading, sampled on a microcontroller
//! with no on-device training capability.
//!
//! The crate holds two halves of one contract:
//!
//! - **Bounds table + classifier**: per-channel acceptance intervals and a
//!   constant-time closed-interval check, at most four comparisons per
//!   reading. Before training, a permissive placeholder table guarantees
//!   zero false positives.
//! - **Artifact consumption**: the offline trainer emits a small JSON
//!   document of per-channel statistics and bounds; [`artifact`] parses it
//!   into a table, optionally validating that every acceptance interval is
//!   non-empty and finite.
//!
//! Training, persistence, and the firmware sampling loop live elsewhere;
//! this crate is the pure decision core between them.
//!
//! # Example
//!
//! ```
//! use tamper_model::{BoundsTable, Reading};
//!
//! let table = BoundsTable::placeholder();
//! let reading = Reading::new(120, -80, 1015, 3300);
//! assert!(!table.is_anomaly(&reading));
//! ```

pub mod artifact;
pub mod channel;
pub mod error;
pub mod model;

pub use channel::{Channel, Reading};
pub use error::{ModelError, Result};
pub use model::{BoundsTable, BoundsTableBuilder};

/// Re-exports for convenient access
pub mod prelude {
    pub use crate::artifact::TrainedArtifact;
    pub use crate::channel::{Channel, Reading};
    pub use crate::error::{ModelError, Result};
    pub use crate::model::{BoundsTable, BoundsTableBuilder};
}
