//! Helpers shared by the handler tests: a deterministic reading source and
//! request/response shortcuts for driving the router with `oneshot`.

use std::future::Future;
use std::sync::Mutex;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, header};
use axum::response::Response;
use tower::ServiceExt;

use gasscale_app::ports::ReadingSource;
use gasscale_app::services::telemetry_service::TelemetryService;
use gasscale_domain::calibration::{BottleWeightUpdate, CalibrationReading, ReferenceWeight};
use gasscale_domain::diagnostics::DeviceDiagnostics;
use gasscale_domain::error::GasScaleError;
use gasscale_domain::level::LevelReading;
use gasscale_domain::scale::ScaleIndex;

use crate::router;
use crate::state::AppState;

pub(crate) struct StubSource {
    calibration: Mutex<CalibrationReading>,
    raw: Vec<i64>,
    broken: bool,
}

impl StubSource {
    pub(crate) fn new(raw: Vec<i64>) -> Self {
        Self {
            calibration: Mutex::new(CalibrationReading::new(5_500, 16_500)),
            raw,
            broken: false,
        }
    }

    pub(crate) fn broken() -> Self {
        Self {
            broken: true,
            ..Self::new(vec![0, 0])
        }
    }

    fn check(&self) -> Result<(), GasScaleError> {
        if self.broken {
            Err(GasScaleError::Source(Box::new(std::io::Error::other(
                "load cell unplugged",
            ))))
        } else {
            Ok(())
        }
    }
}

impl ReadingSource for StubSource {
    fn scale_count(&self) -> usize {
        self.raw.len()
    }

    fn bottle_weight(
        &self,
    ) -> impl Future<Output = Result<CalibrationReading, GasScaleError>> + Send {
        let calibration = *self.calibration.lock().unwrap();
        async move { Ok(calibration) }
    }

    fn set_bottle_weight(
        &self,
        update: BottleWeightUpdate,
    ) -> impl Future<Output = Result<(), GasScaleError>> + Send {
        if let Some(grams) = update.grams() {
            *self.calibration.lock().unwrap() = grams;
        }
        async { Ok(()) }
    }

    fn levels(&self) -> impl Future<Output = Result<Vec<LevelReading>, GasScaleError>> + Send {
        let result = self.check().map(|()| {
            let calibration = *self.calibration.lock().unwrap();
            self.raw
                .iter()
                .zip(0u8..)
                .map(|(raw, id)| LevelReading::from_measurement(id, *raw, &calibration))
                .collect::<Vec<_>>()
        });
        async move { result }
    }

    fn tare(&self, _scale: ScaleIndex) -> impl Future<Output = Result<(), GasScaleError>> + Send {
        let result = self.check();
        async move { result }
    }

    fn calibrate(
        &self,
        _scale: ScaleIndex,
        _weight: ReferenceWeight,
    ) -> impl Future<Output = Result<(), GasScaleError>> + Send {
        let result = self.check();
        async move { result }
    }

    fn diagnostics(&self) -> impl Future<Output = Result<DeviceDiagnostics, GasScaleError>> + Send {
        async { Ok(DeviceDiagnostics::reference()) }
    }
}

/// Router over a stub with two scales at 100 % and 50 %.
pub(crate) fn app() -> Router {
    app_with(StubSource::new(vec![16_500, 11_000]))
}

pub(crate) fn app_with(source: StubSource) -> Router {
    router::build(AppState::new(TelemetryService::new(source)))
}

pub(crate) async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub(crate) async fn post_json(app: Router, uri: &str, body: &str) -> Response {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

pub(crate) async fn body_bytes(response: Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

pub(crate) async fn body_json(response: Response) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

pub(crate) async fn body_text(response: Response) -> String {
    String::from_utf8(body_bytes(response).await).unwrap()
}
