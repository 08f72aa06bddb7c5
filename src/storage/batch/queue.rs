//! Ingest queue: the producer side of the batch writer.
//!
//! Request handlers hold a [`WriteQueue`] and push one submission per decoded
//! entity. The queue is bounded: when it is full, `submit` waits for the writer
//! to free a slot instead of dropping data.

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::error_handling::WriterError;

use super::types::Submission;

/// Cloneable producer handle for the bounded ingest queue.
pub struct WriteQueue<Op> {
    tx: mpsc::Sender<Submission<Op>>,
    closed: CancellationToken,
}

impl<Op> Clone for WriteQueue<Op> {
    fn clone(&self) -> Self {
        WriteQueue {
            tx: self.tx.clone(),
            closed: self.closed.clone(),
        }
    }
}

impl<Op> WriteQueue<Op> {
    pub(crate) fn new(tx: mpsc::Sender<Submission<Op>>, closed: CancellationToken) -> Self {
        WriteQueue { tx, closed }
    }

    /// Enqueues a submission, waiting while the queue is at capacity.
    ///
    /// # Errors
    ///
    /// Returns `WriterError::QueueClosed` if shutdown has begun (including while
    /// this call was waiting for capacity) or the writer has stopped.
    pub async fn submit(&self, submission: Submission<Op>) -> Result<(), WriterError> {
        if self.closed.is_cancelled() {
            return Err(WriterError::QueueClosed);
        }

        tokio::select! {
            biased;
            _ = self.closed.cancelled() => Err(WriterError::QueueClosed),
            sent = self.tx.send(submission) => sent.map_err(|_| WriterError::QueueClosed),
        }
    }

    /// Closes the queue. Already-buffered submissions are still written.
    ///
    /// Calling this more than once has no further effect.
    pub fn close(&self) {
        self.closed.cancel();
    }

    /// Whether the queue no longer accepts submissions.
    pub fn is_closed(&self) -> bool {
        self.closed.is_cancelled() || self.tx.is_closed()
    }

    /// Number of free slots right now.
    pub fn available(&self) -> usize {
        self.tx.capacity()
    }

    /// Total number of slots.
    pub fn max_capacity(&self) -> usize {
        self.tx.max_capacity()
    }
}
