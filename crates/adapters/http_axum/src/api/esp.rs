//! Handlers for device diagnostics.

use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Response};

use gasscale_app::ports::ReadingSource;
use gasscale_domain::diagnostics::DeviceDiagnostics;

use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the diagnostics endpoint.
pub enum GetResponse {
    Ok(Json<DeviceDiagnostics>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the single-metric endpoints.
pub enum MetricResponse {
    /// 200 OK with the value as `text/plain`.
    Ok(String),
}

impl IntoResponse for MetricResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(text) => text.into_response(),
        }
    }
}

/// `GET /esp`
pub async fn get<S>(State(state): State<AppState<S>>) -> Result<GetResponse, ApiError>
where
    S: ReadingSource + Send + Sync + 'static,
{
    let diagnostics = state.telemetry.diagnostics().await?;
    Ok(GetResponse::Ok(Json(diagnostics)))
}

/// `GET /esp/heap`: free heap in bytes.
pub async fn heap<S>(State(state): State<AppState<S>>) -> Result<MetricResponse, ApiError>
where
    S: ReadingSource + Send + Sync + 'static,
{
    let diagnostics = state.telemetry.diagnostics().await?;
    Ok(MetricResponse::Ok(diagnostics.ram.free_heap.to_string()))
}

/// `GET /esp/cores`
pub async fn cores<S>(State(state): State<AppState<S>>) -> Result<MetricResponse, ApiError>
where
    S: ReadingSource + Send + Sync + 'static,
{
    let diagnostics = state.telemetry.diagnostics().await?;
    Ok(MetricResponse::Ok(diagnostics.chip.cores.to_string()))
}

/// `GET /esp/freq`: CPU frequency in MHz.
pub async fn freq<S>(State(state): State<AppState<S>>) -> Result<MetricResponse, ApiError>
where
    S: ReadingSource + Send + Sync + 'static,
{
    let diagnostics = state.telemetry.diagnostics().await?;
    Ok(MetricResponse::Ok(diagnostics.chip.cpu_freq_mhz.to_string()))
}
