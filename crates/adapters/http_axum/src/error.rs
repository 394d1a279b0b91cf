//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use simmose_domain::error::SimmoseError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`SimmoseError`] to an HTTP response with appropriate status code.
#[derive(Debug)]
pub struct ApiError(SimmoseError);

impl From<SimmoseError> for ApiError {
    fn from(err: SimmoseError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            SimmoseError::NotFound(err) => {
                tracing::warn!(sensor = %err.sensor, "sensor data not found");
                (StatusCode::NOT_FOUND, err.to_string())
            }
            SimmoseError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
