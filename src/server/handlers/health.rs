//! Health handler.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::super::types::{AppState, HealthResponse};
use crate::storage::WriterState;

/// Healthy only while the batch writer is running and accepting writes.
///
/// A failed flush stops the writer, so this is how a backing-store failure
/// becomes visible to whoever is watching the process.
pub async fn health_handler(State(state): State<AppState>) -> Response {
    let writer_state = state.stats.state();
    let healthy = writer_state == WriterState::Running && !state.queue.is_closed();

    let response = HealthResponse {
        healthy,
        writer_state: writer_state.as_str(),
        queue_closed: state.queue.is_closed(),
        queue_available: state.queue.available(),
        queue_capacity: state.queue.max_capacity(),
        pending_operations: state.stats.operations_pending(),
        flushes: state.stats.total_flushes(),
        uptime_seconds: state.stats.elapsed().as_secs_f64(),
    };

    let status = if healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status, Json(response)).into_response()
}
