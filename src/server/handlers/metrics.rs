//! Prometheus metrics handler.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use strum::IntoEnumIterator;

use super::super::types::AppState;
use crate::storage::{FlushTrigger, WriterState};

/// Prometheus-compatible metrics endpoint
pub async fn metrics_handler(State(state): State<AppState>) -> Response {
    let stats = &state.stats;
    let failed = if stats.state() == WriterState::Failed {
        1
    } else {
        0
    };

    let mut metrics = format!(
        r#"# HELP org_writer_submissions_total Submissions taken off the write queue
# TYPE org_writer_submissions_total counter
org_writer_submissions_total {}

# HELP org_writer_operations_received_total Write operations taken off the write queue
# TYPE org_writer_operations_received_total counter
org_writer_operations_received_total {}

# HELP org_writer_operations_flushed_total Write operations committed to the store
# TYPE org_writer_operations_flushed_total counter
org_writer_operations_flushed_total {}

# HELP org_writer_operations_pending Write operations waiting for the next flush
# TYPE org_writer_operations_pending gauge
org_writer_operations_pending {}

# HELP org_writer_queue_available Free slots in the write queue
# TYPE org_writer_queue_available gauge
org_writer_queue_available {}

# HELP org_writer_failed Whether the batch writer stopped on a store error (0 or 1)
# TYPE org_writer_failed gauge
org_writer_failed {}

# HELP org_writer_flushes_total Successful flushes by trigger
# TYPE org_writer_flushes_total counter
"#,
        stats.submissions(),
        stats.operations_received(),
        stats.operations_flushed(),
        stats.operations_pending(),
        state.queue.available(),
        failed,
    );

    for trigger in FlushTrigger::iter() {
        metrics.push_str(&format!(
            "org_writer_flushes_total{{trigger=\"{}\"}} {}\n",
            trigger,
            stats.flush_count(trigger)
        ));
    }

    (
        StatusCode::OK,
        [("Content-Type", "text/plain; version=0.0.4")],
        metrics,
    )
        .into_response()
}
