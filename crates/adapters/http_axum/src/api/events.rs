//! Server-Sent Events (SSE) stream of periodic level snapshots.

use std::convert::Infallible;
use std::sync::Arc;
use std::time::Duration;

use axum::extract::State;
use axum::response::sse::{Event, KeepAlive, Sse};
use tokio::time::{MissedTickBehavior, interval};
use tokio_stream::wrappers::IntervalStream;
use tokio_stream::{Stream, StreamExt};

use gasscale_app::ports::ReadingSource;

use crate::state::AppState;

/// Name of the SSE event carrying a level snapshot.
pub const STATUS_EVENT: &str = "status";

const MIN_STATUS_INTERVAL: Duration = Duration::from_millis(10);

/// `GET /events`: SSE stream of `status` events.
///
/// Every `status_interval` the readings of all scales are sent as the same
/// JSON array `/level/current/all` answers with. The first snapshot is sent
/// right away. Failed reads are logged and skipped; the stream runs until the
/// client disconnects.
pub async fn stream<S>(
    State(state): State<AppState<S>>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>>
where
    S: ReadingSource + Send + Sync + 'static,
{
    let mut ticks = interval(state.status_interval.max(MIN_STATUS_INTERVAL));
    ticks.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let telemetry = state.telemetry;
    let events = IntervalStream::new(ticks)
        .then(move |_| {
            let telemetry = Arc::clone(&telemetry);
            async move { telemetry.levels().await }
        })
        .filter_map(|result| match result {
            Ok(levels) => match serde_json::to_string(&levels) {
                Ok(json) => Some(Ok(Event::default().event(STATUS_EVENT).data(json))),
                Err(err) => {
                    tracing::warn!(%err, "failed to serialize levels for status stream");
                    None
                }
            },
            Err(err) => {
                tracing::warn!(%err, "skipping status event, levels unavailable");
                None
            }
        });

    Sse::new(events).keep_alive(KeepAlive::default())
}
