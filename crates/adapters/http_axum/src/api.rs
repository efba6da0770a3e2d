//! JSON API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod calibrate;
#[allow(clippy::missing_errors_doc)]
pub mod esp;
pub mod events;
#[allow(clippy::missing_errors_doc)]
pub mod level;
#[allow(clippy::missing_errors_doc)]
pub mod setup;

use axum::Router;
use axum::routing::{get, post};

use gasscale_app::ports::ReadingSource;

use crate::state::AppState;

/// Build the API sub-router.
pub fn routes<S>() -> Router<AppState<S>>
where
    S: ReadingSource + Send + Sync + 'static,
{
    Router::new()
        // Calibration
        .route(
            "/calibrate/bottleweight",
            get(calibrate::get::<S>).post(calibrate::set::<S>),
        )
        // Diagnostics
        .route("/esp", get(esp::get::<S>))
        .route("/esp/heap", get(esp::heap::<S>))
        .route("/esp/cores", get(esp::cores::<S>))
        .route("/esp/freq", get(esp::freq::<S>))
        // Levels
        .route("/level/current/all", get(level::list::<S>))
        .route("/level/current", get(level::get::<S>))
        .route("/rawvalue", get(level::raw::<S>))
        .route("/num/levels", get(level::count::<S>))
        // Scale setup
        .route("/setup/empty", post(setup::empty::<S>))
        .route("/setup/weight", post(setup::weight::<S>))
        // Status stream
        .route("/events", get(events::stream::<S>))
}
