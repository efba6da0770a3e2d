//! # gasscale-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **JSON API** consumed by the web UI
//!   (`/calibrate/bottleweight`, `/level/current/all`, `/esp`, …), both at the
//!   root and under `/api`
//! - Stream periodic level snapshots to the UI as server-sent `status` events
//! - Map HTTP requests into [`TelemetryService`](gasscale_app::services::telemetry_service::TelemetryService)
//!   calls (driving adapter)
//! - Map application results and errors into HTTP responses
//!
//! ## Dependency rule
//! Depends on `gasscale-app` (for the port trait and service) and
//! `gasscale-domain` (for types used in request/response mapping). Never
//! leaks axum types into the domain.

pub mod api;
pub mod error;
pub mod extract;
pub mod router;
pub mod state;

#[cfg(test)]
pub(crate) mod test_support;
