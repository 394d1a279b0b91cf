//! Client-facing handlers.

use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Response};

use simmose_app::ports::SensorRepository;
use simmose_domain::sensor::SensorSnapshot;

use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the sensor status endpoint.
pub enum StatusResponse {
    Ok(Json<SensorSnapshot>),
}

impl IntoResponse for StatusResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /api/webclient/sensor`
///
/// Every declared sensor as one JSON object, or an error if any of them
/// cannot be read.
pub async fn sensor_status<R>(
    State(state): State<AppState<R>>,
) -> Result<StatusResponse, ApiError>
where
    R: SensorRepository + Send + Sync + 'static,
{
    let snapshot = state.sensor_service.snapshot().await?;
    Ok(StatusResponse::Ok(Json(snapshot)))
}
