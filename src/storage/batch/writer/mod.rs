//! Batch writer implementation.
//!
//! The writer is the only reader of the ingest queue. It appends each
//! submission to its accumulator and flushes when the accumulator reaches
//! `batch_size` operations, when the oldest pending operation has waited
//! `flush_interval`, or when the queue is closed. Flushes run one at a time and
//! nothing else is processed while a flush is in flight.

mod flush;

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{sleep_until, Instant};
use tokio_util::sync::CancellationToken;

use crate::error_handling::WriterError;
use crate::storage::client::StoreClient;

use super::accumulator::BatchAccumulator;
use super::queue::WriteQueue;
use super::stats::{WriterState, WriterStats};
use super::types::{BatchConfig, FlushTrigger, Submission, WriterSummary};

/// Batch writer that collects operations and writes them in batches
pub struct BatchWriter<S: StoreClient> {
    store: S,
    pub(crate) config: BatchConfig,
    pub(crate) buffer: BatchAccumulator<S::Operation>,
    deadline: Option<Instant>,
    stats: Arc<WriterStats>,
}

impl<S: StoreClient> BatchWriter<S> {
    pub fn new(store: S, config: BatchConfig, stats: Arc<WriterStats>) -> Self {
        BatchWriter {
            store,
            config,
            buffer: BatchAccumulator::new(),
            deadline: None,
            stats,
        }
    }

    /// Adds a submission to the buffer and flushes if it is full.
    ///
    /// The flush deadline is armed when the first operation lands in an empty
    /// buffer; later appends do not push it back.
    pub async fn add_submission(
        &mut self,
        submission: Submission<S::Operation>,
    ) -> Result<(), WriterError> {
        self.stats.record_submission(submission.len());
        self.buffer.append(submission);

        if self.buffer.len() >= self.config.batch_size {
            self.flush(FlushTrigger::SizeThreshold).await?;
        } else if !self.buffer.is_empty() && self.deadline.is_none() {
            self.deadline = Some(Instant::now() + self.config.flush_interval);
        }

        Ok(())
    }

    /// Handles the flush deadline firing.
    pub async fn on_deadline(&mut self) -> Result<(), WriterError> {
        if self.buffer.is_empty() {
            log::trace!("Flush deadline fired with an empty buffer, ignoring");
            self.deadline = None;
            return Ok(());
        }
        self.flush(FlushTrigger::TimeThreshold).await
    }

    /// Flushes whatever is left after the queue has been closed.
    pub async fn drain(&mut self) -> Result<(), WriterError> {
        self.flush(FlushTrigger::ShutdownDrain).await
    }

    /// When the pending operations must be flushed, if any are pending.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Number of operations waiting for the next flush.
    pub fn pending(&self) -> usize {
        self.buffer.len()
    }

    /// Runs the writer until the queue is closed and drained, or a flush fails.
    async fn run(
        &mut self,
        rx: &mut mpsc::Receiver<Submission<S::Operation>>,
        closed: &CancellationToken,
    ) -> Result<(), WriterError> {
        let mut closing = false;

        loop {
            let deadline = self.deadline;

            tokio::select! {
                biased;

                _ = closed.cancelled(), if !closing => {
                    log::info!(
                        "Write queue closed, draining {} buffered submission(s)",
                        rx.len()
                    );
                    // Refuses new sends but keeps buffered submissions readable
                    rx.close();
                    closing = true;
                    self.stats.set_state(WriterState::Draining);
                }

                _ = sleep_until(deadline.unwrap_or_else(Instant::now)), if deadline.is_some() => {
                    self.on_deadline().await?;
                }

                submission = rx.recv() => {
                    match submission {
                        Some(submission) => self.add_submission(submission).await?,
                        None => {
                            if !closing {
                                log::info!("All write queue handles dropped, draining");
                                self.stats.set_state(WriterState::Draining);
                            }
                            self.drain().await?;
                            return Ok(());
                        }
                    }
                }
            }
        }
    }
}

/// Handle held by the owning process to shut the writer down and observe it.
pub struct BatchWriterHandle {
    task: JoinHandle<Result<WriterSummary, WriterError>>,
    closed: CancellationToken,
    stats: Arc<WriterStats>,
}

impl BatchWriterHandle {
    /// Closes the ingest queue. The writer drains what is buffered and stops.
    pub fn begin_shutdown(&self) {
        self.closed.cancel();
    }

    /// Waits until the writer has drained, returning its totals.
    ///
    /// # Errors
    ///
    /// Returns `WriterError::BackingStore` if a flush failed (reported here
    /// exactly once), or `WriterError::Aborted` if the task panicked.
    pub async fn wait_drained(self) -> Result<WriterSummary, WriterError> {
        match self.task.await {
            Ok(result) => result,
            Err(join_error) => Err(WriterError::Aborted(join_error.to_string())),
        }
    }

    /// `begin_shutdown` followed by `wait_drained`.
    pub async fn shutdown(self) -> Result<WriterSummary, WriterError> {
        self.begin_shutdown();
        self.wait_drained().await
    }

    /// Resolves once the writer loop has exited, drained or failed.
    pub async fn terminated(&self) {
        self.stats.terminated().cancelled().await;
    }

    pub fn stats(&self) -> Arc<WriterStats> {
        Arc::clone(&self.stats)
    }
}

/// Starts the batch writer task that processes submissions from a bounded queue.
///
/// Returns the producer handle for request handlers and the handle the owning
/// process uses to shut the writer down.
///
/// # Errors
///
/// Returns `WriterError::InvalidConfig` if any setting in `config` is zero.
pub fn start_batch_writer<S: StoreClient>(
    store: S,
    config: BatchConfig,
) -> Result<(WriteQueue<S::Operation>, BatchWriterHandle), WriterError> {
    config.validate()?;

    let (tx, mut rx) = mpsc::channel(config.queue_capacity);
    let closed = CancellationToken::new();
    let stats = Arc::new(WriterStats::new());

    log::info!(
        "Starting batch writer (batch size: {}, flush interval: {}ms, queue capacity: {})",
        config.batch_size,
        config.flush_interval.as_millis(),
        config.queue_capacity
    );

    let mut writer = BatchWriter::new(store, config, Arc::clone(&stats));
    let task_closed = closed.clone();
    let task_stats = Arc::clone(&stats);

    let task = tokio::spawn(async move {
        // Fires on return and on panic
        let _terminated = task_stats.terminated().drop_guard();

        let result = writer.run(&mut rx, &task_closed).await;
        drop(rx);

        match result {
            Ok(()) => {
                task_stats.set_state(WriterState::Drained);
                let summary = WriterSummary {
                    submissions: task_stats.submissions(),
                    operations: task_stats.operations_flushed(),
                    flushes: task_stats.total_flushes(),
                    elapsed: task_stats.elapsed(),
                };
                log::info!(
                    "Batch writer drained: {} submission(s), {} operation(s) in {} flush(es)",
                    summary.submissions,
                    summary.operations,
                    summary.flushes
                );
                Ok(summary)
            }
            Err(e) => {
                task_stats.set_state(WriterState::Failed);
                log::error!("Batch writer stopped: {}", e);
                Err(e)
            }
        }
    });

    Ok((WriteQueue::new(tx, closed.clone()), BatchWriterHandle { task, closed, stats }))
}
