//! In-memory implementation of [`SensorRepository`].

use std::collections::HashMap;
use std::future::Future;
use std::sync::{PoisonError, RwLock};

use simmose_app::ports::SensorRepository;
use simmose_domain::error::{SensorError, SimmoseError};
use simmose_domain::sensor::{Reading, SensorKind};

/// Map-backed sensor repository.
///
/// Each write replaces the stored value under an exclusive lock, so a reader
/// only ever observes a value that some writer actually stored.
pub struct InMemorySensorRepository {
    readings: RwLock<HashMap<SensorKind, Reading>>,
}

impl Default for InMemorySensorRepository {
    fn default() -> Self {
        Self::with_readings(SensorKind::ALL.iter().map(|kind| (*kind, 0)))
    }
}

impl InMemorySensorRepository {
    /// Create a repository with every declared sensor set to `0`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository holding no reading at all.
    ///
    /// Reads fail with [`SimmoseError::NotFound`] until a kind is written.
    #[must_use]
    pub fn empty() -> Self {
        Self::with_readings(std::iter::empty())
    }

    /// Create a repository seeded with the given readings only.
    #[must_use]
    pub fn with_readings(readings: impl IntoIterator<Item = (SensorKind, Reading)>) -> Self {
        Self {
            readings: RwLock::new(readings.into_iter().collect()),
        }
    }
}

impl SensorRepository for InMemorySensorRepository {
    fn write(
        &self,
        kind: SensorKind,
        value: Reading,
    ) -> impl Future<Output = Result<(), SimmoseError>> + Send {
        // Poisoning cannot leave a half-written reading behind.
        self.readings
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(kind, value);
        async { Ok(()) }
    }

    fn read(&self, kind: SensorKind) -> impl Future<Output = Result<Reading, SimmoseError>> + Send {
        let result = self
            .readings
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&kind)
            .copied()
            .ok_or_else(|| SimmoseError::from(SensorError::not_found(kind)));
        async { result }
    }
}
