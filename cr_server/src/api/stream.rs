//! Server-sent snapshot feed.
//!
//! The current snapshot is sent on connect, then one `snapshot` event per
//! store revision. Intermediate revisions may be skipped when a client
//! lags; the latest one is always delivered.

use super::AppState;
use axum::{
    extract::State,
    response::sse::{Event, KeepAlive, Sse},
};
use chess_registry::ContentSnapshot;
use futures_util::stream::{self, Stream};
use std::convert::Infallible;
use tokio::sync::watch;

fn snapshot_event(snapshot: &ContentSnapshot) -> Event {
    Event::default()
        .event("snapshot")
        .id(snapshot.revision.to_string())
        .json_data(snapshot)
        .unwrap_or_else(|e| {
            tracing::error!(error = %e, "Failed to serialize snapshot");
            Event::default().comment("snapshot unavailable")
        })
}

/// Stream snapshots to the client until it disconnects
pub async fn content_stream(
    State(state): State<AppState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let receiver: watch::Receiver<ContentSnapshot> = state.provider.subscribe();
    tracing::debug!("Snapshot stream opened");

    let events = stream::unfold((receiver, true), |(mut receiver, first)| async move {
        if !first && receiver.changed().await.is_err() {
            return None;
        }
        let event = snapshot_event(&receiver.borrow_and_update());
        Some((Ok(event), (receiver, false)))
    });

    Sse::new(events).keep_alive(KeepAlive::default())
}
