//! Device-facing handlers: hardware pushes a new reading, one route per sensor.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use simmose_app::ports::SensorRepository;
use simmose_domain::sensor::{Reading, SensorKind};

use crate::error::ApiError;
use crate::state::AppState;

/// Request body pushed by a device, e.g. `{"data": 21}`.
#[derive(Debug, Deserialize)]
pub struct SensorDataRequest {
    pub data: Reading,
}

/// Possible responses from the update endpoints.
pub enum UpdateResponse {
    NoContent,
}

impl IntoResponse for UpdateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::NoContent => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

/// `PUT /api/hardware/temperature`
pub async fn update_temperature<R>(
    State(state): State<AppState<R>>,
    Json(req): Json<SensorDataRequest>,
) -> Result<UpdateResponse, ApiError>
where
    R: SensorRepository + Send + Sync + 'static,
{
    update(&state, SensorKind::Temperature, req).await
}

/// `PUT /api/hardware/pressure`
pub async fn update_pressure<R>(
    State(state): State<AppState<R>>,
    Json(req): Json<SensorDataRequest>,
) -> Result<UpdateResponse, ApiError>
where
    R: SensorRepository + Send + Sync + 'static,
{
    update(&state, SensorKind::Pressure, req).await
}

async fn update<R>(
    state: &AppState<R>,
    kind: SensorKind,
    req: SensorDataRequest,
) -> Result<UpdateResponse, ApiError>
where
    R: SensorRepository + Send + Sync + 'static,
{
    state.sensor_service.update_data(kind, req.data).await?;
    Ok(UpdateResponse::NoContent)
}
