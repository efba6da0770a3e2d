//! Handlers for per-scale load-cell setup.
//!
//! Setup runs in two steps on an empty scale: `POST /setup/empty` takes the
//! current load as zero, then, with a known weight placed on the scale,
//! `POST /setup/weight` derives the scaling factor from it.

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use serde_json::Value;

use gasscale_app::ports::ReadingSource;
use gasscale_domain::calibration::CalibrationAck;

use crate::error::ApiError;
use crate::extract::ScaleParam;
use crate::state::AppState;

/// Possible responses from the setup endpoints.
pub enum SetupResponse {
    Ok(Json<CalibrationAck>),
}

impl IntoResponse for SetupResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `POST /setup/empty?scale=N`
pub async fn empty<S>(
    State(state): State<AppState<S>>,
    scale: ScaleParam,
) -> Result<SetupResponse, ApiError>
where
    S: ReadingSource + Send + Sync + 'static,
{
    let ack = state.telemetry.tare_scale(scale.as_deref()).await?;
    Ok(SetupResponse::Ok(Json(ack)))
}

/// `POST /setup/weight?scale=N` with `{"weight": <grams>}`
///
/// An unparsable body counts as a missing weight.
pub async fn weight<S>(
    State(state): State<AppState<S>>,
    scale: ScaleParam,
    body: Bytes,
) -> Result<SetupResponse, ApiError>
where
    S: ReadingSource + Send + Sync + 'static,
{
    let body: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
    let ack = state
        .telemetry
        .calibrate_scale(scale.as_deref(), &body)
        .await?;
    Ok(SetupResponse::Ok(Json(ack)))
}
