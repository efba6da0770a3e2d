//! Axum router assembly.

use axum::Json;
use axum::Router;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use gasscale_app::ports::ReadingSource;

use crate::error::ErrorBody;
use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// API routes are mounted at `/` and again under `/api`, the prefix the web
/// UI and the device firmware use. Unknown paths answer with a JSON 404.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build<S>(state: AppState<S>) -> Router
where
    S: ReadingSource + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .merge(crate::api::routes())
        .nest("/api", crate::api::routes())
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(ErrorBody::new("Not found")))
}

#[cfg(test)]
mod tests {
    use crate::test_support::{app, body_json, body_text, get};
    use axum::http::StatusCode;
    use serde_json::json;

    #[tokio::test]
    async fn should_return_ok_when_health_check_called() {
        let response = get(app(), "/health").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "OK");
    }

    #[tokio::test]
    async fn should_return_json_not_found_for_unknown_path() {
        let response = get(app(), "/does/not/exist").await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await, json!({ "message": "Not found" }));
    }

    #[tokio::test]
    async fn should_serve_api_under_api_prefix() {
        let root = body_json(get(app(), "/level/current/all").await).await;
        let prefixed = get(app(), "/api/level/current/all").await;

        assert_eq!(prefixed.status(), StatusCode::OK);
        assert_eq!(body_json(prefixed).await, root);
    }

    #[tokio::test]
    async fn should_return_json_not_found_for_unknown_api_path() {
        let response = get(app(), "/api/unknown").await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await, json!({ "message": "Not found" }));
    }
}
