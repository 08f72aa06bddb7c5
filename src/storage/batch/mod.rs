//! Asynchronous batch-write pipeline.
//!
//! Request handlers push submissions onto a bounded [`WriteQueue`]; a single
//! [`BatchWriter`] task accumulates their operations and hands them to a
//! [`StoreClient`](crate::storage::StoreClient) in batches:
//!
//! - when `batch_size` operations are pending (size trigger),
//! - when the oldest pending operation has waited `flush_interval` (time trigger),
//! - when the queue is closed (shutdown drain).
//!
//! A failed flush stops the writer; the error is returned from
//! [`BatchWriterHandle::wait_drained`].

mod accumulator;
mod queue;
mod stats;
mod types;
mod writer;

pub use accumulator::BatchAccumulator;
pub use queue::WriteQueue;
pub use stats::{WriterState, WriterStats};
pub use types::{BatchConfig, FlushTrigger, Submission, WriterSummary};
pub use writer::{start_batch_writer, BatchWriter, BatchWriterHandle};
