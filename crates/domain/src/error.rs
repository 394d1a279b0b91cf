//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`SimmoseError`] via `From`.

use crate::sensor::SensorKind;

/// Top-level error shared by the application and its adapters.
#[derive(Debug, thiserror::Error)]
pub enum SimmoseError {
    /// No reading is recorded for the requested sensor.
    #[error(transparent)]
    NotFound(#[from] SensorError),

    /// The backing store failed for a reason unrelated to the data itself.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Failure tied to a single sensor, carrying its identity and a message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("[{sensor}] {message}")]
pub struct SensorError {
    pub sensor: SensorKind,
    pub message: String,
}

impl SensorError {
    /// Build the error raised when a store holds no reading for `sensor`.
    #[must_use]
    pub fn not_found(sensor: SensorKind) -> Self {
        Self {
            sensor,
            message: "Data not found".to_string(),
        }
    }
}
