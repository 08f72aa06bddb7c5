// Shared test helpers for the batch writer tests.
//
// Provides an in-memory store that records every batch it is given, and can be
// told to block, slow down, or fail.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use org_writer::{StoreClient, StoreError};
use tokio::sync::Semaphore;
use tokio::time::Instant;

/// Recording store for pipeline tests.
///
/// Clones share the same recording, so a test keeps one clone and hands the
/// other to the writer.
#[derive(Clone)]
pub struct RecordingStore<Op> {
    batches: Arc<Mutex<Vec<(Instant, Vec<Op>)>>>,
    calls: Arc<AtomicUsize>,
    fail_on_call: Option<usize>,
    delay: Duration,
    gate: Option<Arc<Semaphore>>,
}

#[allow(dead_code)] // Not every test file uses every helper
impl<Op: Clone + Send + 'static> RecordingStore<Op> {
    pub fn new() -> Self {
        RecordingStore {
            batches: Arc::new(Mutex::new(Vec::new())),
            calls: Arc::new(AtomicUsize::new(0)),
            fail_on_call: None,
            delay: Duration::ZERO,
            gate: None,
        }
    }

    /// The `call`-th batch (1-based) fails with a store error.
    pub fn failing_on(mut self, call: usize) -> Self {
        self.fail_on_call = Some(call);
        self
    }

    /// Every batch takes `delay` to execute.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Every batch waits for a permit from `gate` before executing.
    pub fn gated(mut self, gate: Arc<Semaphore>) -> Self {
        self.gate = Some(gate);
        self
    }

    /// Batches recorded so far, in execution order.
    pub fn batches(&self) -> Vec<Vec<Op>> {
        self.batches
            .lock()
            .unwrap()
            .iter()
            .map(|(_, ops)| ops.clone())
            .collect()
    }

    /// When each recorded batch finished executing.
    pub fn flush_times(&self) -> Vec<Instant> {
        self.batches.lock().unwrap().iter().map(|(at, _)| *at).collect()
    }

    /// Number of times `execute_batch` was called, including failed calls.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl<Op: Clone + Send + 'static> StoreClient for RecordingStore<Op> {
    type Operation = Op;

    async fn execute_batch(&mut self, ops: Vec<Op>) -> Result<(), StoreError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;

        if let Some(gate) = &self.gate {
            let _permit = gate.acquire().await.expect("gate closed");
        }
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        if self.fail_on_call == Some(call) {
            return Err(StoreError::Status {
                status: 500,
                body: format!("batch {} rejected", call),
            });
        }

        self.batches.lock().unwrap().push((Instant::now(), ops));
        Ok(())
    }
}

/// Lets spawned tasks run without letting a flush interval elapse.
#[allow(dead_code)]
pub async fn settle() {
    tokio::time::sleep(Duration::from_millis(10)).await;
}
