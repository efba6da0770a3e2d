//! JSON handlers for bottle-weight calibration.

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use serde_json::Value;

use gasscale_app::ports::ReadingSource;
use gasscale_domain::calibration::{CalibrationAck, CalibrationReading};
use gasscale_domain::error::ValidationError;

use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<CalibrationReading>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the set endpoint.
pub enum SetResponse {
    Ok(Json<CalibrationAck>),
}

impl IntoResponse for SetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /calibrate/bottleweight`
pub async fn get<S>(State(state): State<AppState<S>>) -> Result<GetResponse, ApiError>
where
    S: ReadingSource + Send + Sync + 'static,
{
    let reading = state.telemetry.bottle_weight().await?;
    Ok(GetResponse::Ok(Json(reading)))
}

/// `POST /calibrate/bottleweight`
///
/// The body is read as raw bytes so that a missing or wrong `Content-Type`
/// and malformed JSON end up as the same 422 as a missing key.
pub async fn set<S>(
    State(state): State<AppState<S>>,
    body: Bytes,
) -> Result<SetResponse, ApiError>
where
    S: ReadingSource + Send + Sync + 'static,
{
    let body: Value =
        serde_json::from_slice(&body).map_err(|_| ValidationError::InvalidCalibration)?;
    let ack = state.telemetry.set_bottle_weight(&body).await?;
    Ok(SetResponse::Ok(Json(ack)))
}

#[cfg(test)]
mod tests {
    use crate::test_support::{app, body_json, get, post_json};
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::json;
    use tower::ServiceExt;

    const PATH: &str = "/calibrate/bottleweight";

    #[tokio::test]
    async fn should_return_current_calibration() {
        let response = get(app(), PATH).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({ "emptyWeightGramms": 5500, "fullWeightGramms": 16500 })
        );
    }

    #[tokio::test]
    async fn should_acknowledge_valid_calibration() {
        let response = post_json(
            app(),
            PATH,
            r#"{"emptyWeightGramms":120,"fullWeightGramms":8500}"#,
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({ "message": "New bottle weight set" })
        );
    }

    #[tokio::test]
    async fn should_acknowledge_calibration_regardless_of_value_types() {
        let response = post_json(
            app(),
            PATH,
            r#"{"emptyWeightGramms":"abc","fullWeightGramms":-3.5}"#,
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({ "message": "New bottle weight set" })
        );
    }

    #[tokio::test]
    async fn should_reject_empty_object() {
        let response = post_json(app(), PATH, "{}").await;

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body_json(response).await, json!({ "message": "Invalid data" }));
    }

    #[tokio::test]
    async fn should_reject_body_missing_one_key() {
        for body in [
            r#"{"emptyWeightGramms":120}"#,
            r#"{"fullWeightGramms":8500}"#,
        ] {
            let response = post_json(app(), PATH, body).await;

            assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
            assert_eq!(body_json(response).await, json!({ "message": "Invalid data" }));
        }
    }

    #[tokio::test]
    async fn should_reject_malformed_json() {
        let response = post_json(app(), PATH, "{not json").await;

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body_json(response).await, json!({ "message": "Invalid data" }));
    }

    #[tokio::test]
    async fn should_accept_body_without_content_type() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(PATH)
                    .body(Body::from(
                        r#"{"emptyWeightGramms":1,"fullWeightGramms":2}"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn should_hand_valid_update_to_source() {
        use tower::Service;

        let mut app = app().into_service();

        let response = ServiceExt::ready(&mut app)
            .await
            .unwrap()
            .call(
                Request::builder()
                    .method("POST")
                    .uri(PATH)
                    .body(Body::from(
                        r#"{"emptyWeightGramms":6000,"fullWeightGramms":17000}"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = ServiceExt::ready(&mut app)
            .await
            .unwrap()
            .call(Request::builder().uri(PATH).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(
            body_json(response).await,
            json!({ "emptyWeightGramms": 6000, "fullWeightGramms": 17000 })
        );
    }
}
