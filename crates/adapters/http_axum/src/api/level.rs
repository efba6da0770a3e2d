//! JSON handlers for bottle fill levels.

use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use gasscale_app::ports::ReadingSource;
use gasscale_domain::level::LevelReading;

use crate::error::ApiError;
use crate::extract::ScaleParam;
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelPercent {
    pub level_percent: u8,
}

#[derive(Debug, Serialize)]
pub struct RawValue {
    pub raw: i64,
}

#[derive(Debug, Serialize)]
pub struct ScaleCount {
    pub num: usize,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<LevelReading>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the single-scale endpoints.
pub enum ScaleResponse<T> {
    Ok(Json<T>),
}

impl<T: Serialize> IntoResponse for ScaleResponse<T> {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /level/current/all`
pub async fn list<S>(State(state): State<AppState<S>>) -> Result<ListResponse, ApiError>
where
    S: ReadingSource + Send + Sync + 'static,
{
    let levels = state.telemetry.levels().await?;
    Ok(ListResponse::Ok(Json(levels)))
}

/// `GET /level/current?scale=N`
pub async fn get<S>(
    State(state): State<AppState<S>>,
    scale: ScaleParam,
) -> Result<ScaleResponse<LevelPercent>, ApiError>
where
    S: ReadingSource + Send + Sync + 'static,
{
    let reading = state.telemetry.level(scale.as_deref()).await?;
    Ok(ScaleResponse::Ok(Json(LevelPercent {
        level_percent: reading.level,
    })))
}

/// `GET /rawvalue?scale=N`
pub async fn raw<S>(
    State(state): State<AppState<S>>,
    scale: ScaleParam,
) -> Result<ScaleResponse<RawValue>, ApiError>
where
    S: ReadingSource + Send + Sync + 'static,
{
    let reading = state.telemetry.level(scale.as_deref()).await?;
    Ok(ScaleResponse::Ok(Json(RawValue {
        raw: reading.sensor_value,
    })))
}

/// `GET /num/levels`
pub async fn count<S>(State(state): State<AppState<S>>) -> ScaleResponse<ScaleCount>
where
    S: ReadingSource + Send + Sync + 'static,
{
    ScaleResponse::Ok(Json(ScaleCount {
        num: state.telemetry.scale_count(),
    }))
}
