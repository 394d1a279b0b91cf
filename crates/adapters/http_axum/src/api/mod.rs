//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod hardware;
#[allow(clippy::missing_errors_doc)]
pub mod webclient;

use axum::Router;
use axum::routing::{get, put};

use simmose_app::ports::SensorRepository;

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<R>() -> Router<AppState<R>>
where
    R: SensorRepository + Send + Sync + 'static,
{
    Router::new()
        // Device-facing
        .route("/hardware/temperature", put(hardware::update_temperature::<R>))
        .route("/hardware/pressure", put(hardware::update_pressure::<R>))
        // Client-facing
        .route("/webclient/sensor", get(webclient::sensor_status::<R>))
}
