//! Backing store interface used by the batch writer.

use std::future::Future;

use crate::error_handling::StoreError;

/// A store that executes a batch of opaque write operations.
///
/// The batch writer owns its client and calls it from a single task, one batch
/// at a time, so implementations need no internal locking.
pub trait StoreClient: Send + 'static {
    /// One store-specific write instruction. The batch writer never inspects it.
    type Operation: Send + 'static;

    /// Executes `ops` in order.
    ///
    /// `Ok` means every operation was applied. On `Err` the writer assumes
    /// nothing about which operations, if any, were applied.
    fn execute_batch(
        &mut self,
        ops: Vec<Self::Operation>,
    ) -> impl Future<Output = Result<(), StoreError>> + Send;
}
