//! Configuration constants.
//!
//! Defaults for the batch writer, the Neo4j adapter and the HTTP surface.

use std::time::Duration;

/// Maximum number of write operations collected before a flush is forced.
pub const DEFAULT_BATCH_SIZE: usize = 1024;

/// Maximum time an operation may sit in the accumulator before it is flushed.
pub const DEFAULT_FLUSH_INTERVAL: Duration = Duration::from_secs(1);

/// Same value in milliseconds, used as the CLI default.
pub const DEFAULT_FLUSH_INTERVAL_MS: u64 = 1000;

/// Number of submissions the ingest queue holds before producers block.
pub const DEFAULT_QUEUE_CAPACITY: usize = 1024;

/// Neo4j REST endpoint (the legacy `/db/data` root).
pub const DEFAULT_NEO_URL: &str = "http://localhost:7474/db/data";

/// Port the HTTP ingestion surface listens on.
pub const DEFAULT_PORT: u16 = 8080;

/// Per-request timeout for calls to the graph store, in seconds.
/// Covers a whole flush, which is one transactional request.
pub const DEFAULT_STORE_TIMEOUT_SECS: u64 = 30;

/// Path appended to the Neo4j root for single-request transactions.
pub const NEO_COMMIT_PATH: &str = "transaction/commit";

/// Maximum number of characters of a store error body kept in error messages.
pub const MAX_ERROR_BODY_LENGTH: usize = 2000;

/// Interval between progress log lines, in seconds.
pub const LOGGING_INTERVAL_SECS: u64 = 60;
