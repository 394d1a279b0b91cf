//! Shared application state for axum handlers.

use std::sync::Arc;

use simmose_app::ports::SensorRepository;
use simmose_app::services::sensor_service::SensorService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository type to avoid dynamic dispatch.
/// `Clone` is implemented manually so the repository itself does not
/// need to be `Clone` — only the `Arc` wrapper is cloned.
pub struct AppState<R> {
    /// Sensor read/write service.
    pub sensor_service: Arc<SensorService<R>>,
}

impl<R> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            sensor_service: Arc::clone(&self.sensor_service),
        }
    }
}

impl<R> AppState<R>
where
    R: SensorRepository + Send + Sync + 'static,
{
    /// Create a new application state from a service instance.
    pub fn new(sensor_service: SensorService<R>) -> Self {
        Self {
            sensor_service: Arc::new(sensor_service),
        }
    }
}
