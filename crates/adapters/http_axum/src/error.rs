//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use gasscale_domain::error::{GasScaleError, ValidationError};

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
pub(crate) struct ErrorBody {
    message: String,
}

impl ErrorBody {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Maps [`GasScaleError`] to an HTTP response with appropriate status code.
#[derive(Debug)]
pub struct ApiError(GasScaleError);

impl From<GasScaleError> for ApiError {
    fn from(err: GasScaleError) -> Self {
        Self(err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            GasScaleError::Validation(err @ ValidationError::InvalidCalibration) => {
                (StatusCode::UNPROCESSABLE_ENTITY, err.to_string())
            }
            GasScaleError::Validation(
                err @ (ValidationError::MissingScale | ValidationError::ScaleOutOfRange { .. }),
            ) => (StatusCode::BAD_REQUEST, err.to_string()),
            GasScaleError::Source(err) => {
                tracing::error!(error = %err, "reading source error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody::new(message))).into_response()
    }
}
