//! Organisation write handler.

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::super::types::AppState;
use crate::error_handling::WriterError;
use crate::orgs::{to_queries, Organisation};

/// `PUT /organisations/:uuid`
///
/// Decodes the body, translates it and hands it to the batch writer. Returns
/// once the submission is queued, not once it is written; waits while the
/// queue is full.
pub async fn write_handler(
    State(state): State<AppState>,
    Path(uuid): Path<String>,
    body: Bytes,
) -> Response {
    let org: Organisation = match serde_json::from_slice(&body) {
        Ok(org) => org,
        Err(e) => return (StatusCode::BAD_REQUEST, e.to_string()).into_response(),
    };

    if org.uuid != uuid {
        log::debug!("Rejected write: body uuid {} does not match path {}", org.uuid, uuid);
        return (
            StatusCode::BAD_REQUEST,
            format!("id does not match: {} {}", org.uuid, uuid),
        )
            .into_response();
    }

    let queries = match to_queries(&org) {
        Ok(queries) => queries,
        Err(e) => return (StatusCode::BAD_REQUEST, e.to_string()).into_response(),
    };

    match state.queue.submit(queries).await {
        Ok(()) => StatusCode::OK.into_response(),
        Err(WriterError::QueueClosed) => {
            (StatusCode::SERVICE_UNAVAILABLE, "write queue is closed").into_response()
        }
        Err(e) => {
            log::error!("Unexpected error submitting {}: {}", uuid, e);
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
        }
    }
}
