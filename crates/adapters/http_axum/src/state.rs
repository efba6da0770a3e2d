//! Shared application state for axum handlers.

use std::sync::Arc;
use std::time::Duration;

use gasscale_app::ports::ReadingSource;
use gasscale_app::services::telemetry_service::TelemetryService;

/// Period between two `status` events when none is configured.
pub const DEFAULT_STATUS_INTERVAL: Duration = Duration::from_secs(1);

/// Application state shared across all axum handlers.
///
/// Generic over the reading source to avoid dynamic dispatch.
/// `Clone` is implemented manually so the source itself does not need to be
/// `Clone`: only the `Arc` wrapper is cloned.
pub struct AppState<S> {
    /// Calibration, level and diagnostics use-cases.
    pub telemetry: Arc<TelemetryService<S>>,
    /// Period of the `/events` status stream.
    pub status_interval: Duration,
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            telemetry: Arc::clone(&self.telemetry),
            status_interval: self.status_interval,
        }
    }
}

impl<S> AppState<S>
where
    S: ReadingSource + Send + Sync + 'static,
{
    /// Create a new application state from a service instance.
    pub fn new(telemetry: TelemetryService<S>) -> Self {
        Self {
            telemetry: Arc::new(telemetry),
            status_interval: DEFAULT_STATUS_INTERVAL,
        }
    }

    /// Override the period of the status stream.
    #[must_use]
    pub fn with_status_interval(mut self, interval: Duration) -> Self {
        self.status_interval = interval;
        self
    }
}
