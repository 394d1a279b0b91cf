//! Storage port — repository trait for sensor readings.

use std::future::Future;

use simmose_domain::error::SimmoseError;
use simmose_domain::sensor::{Reading, SensorKind};

/// Holds the latest [`Reading`] of each [`SensorKind`].
///
/// Implementations must make a single write atomic per kind: concurrent
/// writers to the same kind leave exactly one of their values behind.
pub trait SensorRepository {
    /// Overwrite the reading for `kind` unconditionally.
    fn write(
        &self,
        kind: SensorKind,
        value: Reading,
    ) -> impl Future<Output = Result<(), SimmoseError>> + Send;

    /// Return the current reading for `kind`.
    ///
    /// Fails with [`SimmoseError::NotFound`] when the store has no value for
    /// `kind`; implementations must never substitute a default.
    fn read(&self, kind: SensorKind) -> impl Future<Output = Result<Reading, SimmoseError>> + Send;
}

impl<T: SensorRepository + Send + Sync> SensorRepository for std::sync::Arc<T> {
    fn write(
        &self,
        kind: SensorKind,
        value: Reading,
    ) -> impl Future<Output = Result<(), SimmoseError>> + Send {
        (**self).write(kind, value)
    }

    fn read(&self, kind: SensorKind) -> impl Future<Output = Result<Reading, SimmoseError>> + Send {
        (**self).read(kind)
    }
}
