// storage/mod.rs
// Batch writer and graph store adapter

pub mod batch;
pub mod client;
pub mod neo4j;

// Re-export commonly used items
pub use batch::{
    start_batch_writer, BatchAccumulator, BatchConfig, BatchWriter, BatchWriterHandle,
    FlushTrigger, Submission, WriteQueue, WriterState, WriterStats, WriterSummary,
};
pub use client::StoreClient;
pub use neo4j::{CypherQuery, NeoStoreClient};
