//! HTTP server data structures.

use serde::Serialize;
use std::sync::Arc;

use crate::storage::{CypherQuery, WriteQueue, WriterStats};

/// Shared state for the HTTP handlers
#[derive(Clone)]
pub struct AppState {
    pub queue: WriteQueue<CypherQuery>,
    pub stats: Arc<WriterStats>,
}

impl AppState {
    pub fn new(queue: WriteQueue<CypherQuery>, stats: Arc<WriterStats>) -> Self {
        AppState { queue, stats }
    }
}

/// JSON response for `/__health`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub healthy: bool,
    pub writer_state: &'static str,
    pub queue_closed: bool,
    pub queue_available: usize,
    pub queue_capacity: usize,
    pub pending_operations: usize,
    pub flushes: usize,
    pub uptime_seconds: f64,
}
