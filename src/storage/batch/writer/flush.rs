//! Batch flushing logic.

use crate::error_handling::WriterError;
use crate::storage::batch::types::FlushTrigger;
use crate::storage::client::StoreClient;

use super::BatchWriter;

impl<S: StoreClient> BatchWriter<S> {
    /// Hands every buffered operation to the store as one batch.
    ///
    /// The buffer is emptied and the deadline disarmed whether or not the store
    /// succeeds. A store failure is not retried: an unknown prefix of the batch
    /// may already be applied.
    pub(crate) async fn flush(&mut self, trigger: FlushTrigger) -> Result<(), WriterError> {
        self.deadline = None;

        if self.buffer.is_empty() {
            return Ok(());
        }

        let batch = self.buffer.drain();
        let count = batch.len();
        log::debug!("Flushing batch of {} operations ({} trigger)", count, trigger);

        let started = std::time::Instant::now();
        match self.store.execute_batch(batch).await {
            Ok(()) => {
                self.stats.record_flush(trigger, count);
                log::debug!(
                    "Flushed {} operations in {:.3}s",
                    count,
                    started.elapsed().as_secs_f64()
                );
                Ok(())
            }
            Err(e) => {
                log::error!(
                    "Flush of {} operations ({} trigger) failed after {:.3}s: {}",
                    count,
                    trigger,
                    started.elapsed().as_secs_f64(),
                    e
                );
                Err(WriterError::BackingStore(e))
            }
        }
    }
}
