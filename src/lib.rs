//! org_writer library: batched organisation writes to Neo4j
//!
//! Request handlers translate each incoming organisation into Cypher
//! statements and submit them to a bounded queue. A single batch writer task
//! collects those statements and commits them to Neo4j in batches, flushing
//! when a batch is full, when the oldest pending write has waited long enough,
//! or when the service shuts down.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use org_writer::{start_batch_writer, BatchConfig, CypherQuery, NeoStoreClient};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Arc::new(reqwest::Client::new());
//! let store = NeoStoreClient::new(client, "http://localhost:7474/db/data");
//! let (queue, writer) = start_batch_writer(store, BatchConfig::default())?;
//!
//! queue
//!     .submit(vec![CypherQuery::new("MERGE (n:Concept {uuid: $uuid})").param("uuid", "1")])
//!     .await?;
//!
//! let summary = writer.shutdown().await?;
//! println!("Wrote {} operations in {} flushes", summary.operations, summary.flushes);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

mod app;
pub mod config;
mod error_handling;
pub mod initialization;
pub mod orgs;
mod run;
pub mod server;
mod storage;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{InitializationError, StoreError, TranslateError, WriterError};
pub use run::run_server;
pub use storage::{
    start_batch_writer, BatchAccumulator, BatchConfig, BatchWriter, BatchWriterHandle,
    CypherQuery, FlushTrigger, NeoStoreClient, StoreClient, Submission, WriteQueue, WriterState,
    WriterStats, WriterSummary,
};
