//! Sensor service — use-cases for reporting and reading sensor values.

use simmose_domain::error::SimmoseError;
use simmose_domain::sensor::{Reading, SensorKind, SensorSnapshot};

use crate::ports::SensorRepository;

/// Application service translating sensor operations into repository calls.
///
/// Behaviour is identical for every [`SensorKind`]; the kind only selects
/// which stored reading is touched.
pub struct SensorService<R> {
    repo: R,
}

impl<R: SensorRepository> SensorService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Record a new reading for `kind`, replacing the previous one.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn update_data(&self, kind: SensorKind, value: Reading) -> Result<(), SimmoseError> {
        self.repo.write(kind, value).await?;
        tracing::debug!(sensor = %kind, value, "sensor reading updated");
        Ok(())
    }

    /// Current reading for `kind`.
    ///
    /// # Errors
    ///
    /// Returns [`SimmoseError::NotFound`] when the repository holds no value
    /// for `kind`, or a storage error from the repository.
    pub async fn retrieve_data(&self, kind: SensorKind) -> Result<Reading, SimmoseError> {
        self.repo.read(kind).await
    }

    /// Current reading of every declared sensor.
    ///
    /// # Errors
    ///
    /// Fails as a whole on the first sensor that cannot be read; no partial
    /// snapshot is ever returned.
    pub async fn snapshot(&self) -> Result<SensorSnapshot, SimmoseError> {
        let mut snapshot = SensorSnapshot::default();
        for kind in SensorKind::ALL {
            snapshot.insert(kind, self.retrieve_data(kind).await?);
        }
        Ok(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use simmose_domain::error::SensorError;
    use std::collections::HashMap;
    use std::future::Future;
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct InMemorySensorRepo {
        store: Mutex<HashMap<SensorKind, Reading>>,
    }

    impl InMemorySensorRepo {
        fn populated() -> Self {
            Self {
                store: Mutex::new(SensorKind::ALL.iter().map(|kind| (*kind, 0)).collect()),
            }
        }
    }

    impl SensorRepository for InMemorySensorRepo {
        fn write(
            &self,
            kind: SensorKind,
            value: Reading,
        ) -> impl Future<Output = Result<(), SimmoseError>> + Send {
            self.store.lock().unwrap().insert(kind, value);
            async { Ok(()) }
        }

        fn read(
            &self,
            kind: SensorKind,
        ) -> impl Future<Output = Result<Reading, SimmoseError>> + Send {
            let result: Result<Reading, SimmoseError> = self
                .store
                .lock()
                .unwrap()
                .get(&kind)
                .copied()
                .ok_or_else(|| SensorError::not_found(kind).into());
            async { result }
        }
    }

    struct FailingRepo;

    impl SensorRepository for FailingRepo {
        async fn write(&self, _kind: SensorKind, _value: Reading) -> Result<(), SimmoseError> {
            Err(SimmoseError::Storage(Box::new(std::io::Error::other(
                "backend unavailable",
            ))))
        }

        async fn read(&self, _kind: SensorKind) -> Result<Reading, SimmoseError> {
            Err(SimmoseError::Storage(Box::new(std::io::Error::other(
                "backend unavailable",
            ))))
        }
    }

    fn make_service() -> SensorService<InMemorySensorRepo> {
        SensorService::new(InMemorySensorRepo::populated())
    }

    #[tokio::test]
    async fn should_retrieve_written_value() {
        let svc = make_service();
        svc.update_data(SensorKind::Temperature, 42).await.unwrap();

        let value = svc.retrieve_data(SensorKind::Temperature).await.unwrap();
        assert_eq!(value, 42);
    }

    #[tokio::test]
    async fn should_accept_negative_and_zero_values() {
        let svc = make_service();
        svc.update_data(SensorKind::Pressure, -17).await.unwrap();
        assert_eq!(svc.retrieve_data(SensorKind::Pressure).await.unwrap(), -17);

        svc.update_data(SensorKind::Pressure, 0).await.unwrap();
        assert_eq!(svc.retrieve_data(SensorKind::Pressure).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn should_not_touch_other_kind_when_writing() {
        let svc = make_service();
        svc.update_data(SensorKind::Pressure, 1013).await.unwrap();

        assert_eq!(svc.retrieve_data(SensorKind::Temperature).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn should_snapshot_every_kind() {
        let svc = make_service();
        svc.update_data(SensorKind::Temperature, 21).await.unwrap();

        let snapshot = svc.snapshot().await.unwrap();
        assert!(snapshot.is_complete());
        assert_eq!(snapshot.get(SensorKind::Temperature), Some(21));
        assert_eq!(snapshot.get(SensorKind::Pressure), Some(0));
    }

    #[tokio::test]
    async fn should_propagate_not_found_unchanged() {
        let svc = SensorService::new(InMemorySensorRepo::default());

        let result = svc.retrieve_data(SensorKind::Pressure).await;
        assert!(matches!(
            result,
            Err(SimmoseError::NotFound(SensorError {
                sensor: SensorKind::Pressure,
                ..
            }))
        ));
    }

    #[tokio::test]
    async fn should_fail_snapshot_when_any_kind_missing() {
        let svc = SensorService::new(InMemorySensorRepo::default());
        svc.update_data(SensorKind::Temperature, 5).await.unwrap();

        let result = svc.snapshot().await;
        assert!(matches!(result, Err(SimmoseError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_propagate_storage_errors() {
        let svc = SensorService::new(FailingRepo);

        assert!(matches!(
            svc.update_data(SensorKind::Temperature, 1).await,
            Err(SimmoseError::Storage(_))
        ));
        assert!(matches!(svc.snapshot().await, Err(SimmoseError::Storage(_))));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn should_keep_one_of_the_concurrently_written_values() {
        let svc = Arc::new(make_service());

        let handles: Vec<_> = (1..=32)
            .map(|value| {
                let svc = Arc::clone(&svc);
                tokio::spawn(async move { svc.update_data(SensorKind::Temperature, value).await })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let value = svc.retrieve_data(SensorKind::Temperature).await.unwrap();
        assert!((1..=32).contains(&value));
    }
}
