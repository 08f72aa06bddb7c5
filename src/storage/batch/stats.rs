//! Batch writer statistics tracking.
//!
//! Counters are atomics so request handlers and the status endpoints can read
//! them while the writer task updates them.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU8, AtomicUsize, Ordering};
use std::time::{Duration, Instant};

use strum::IntoEnumIterator;
use tokio_util::sync::CancellationToken;

use super::types::FlushTrigger;

/// Lifecycle of the batch writer task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriterState {
    /// Accepting and flushing submissions.
    Running,
    /// The queue is closed; buffered submissions are being written.
    Draining,
    /// Everything accepted has been written. Terminal.
    Drained,
    /// A flush failed and the writer stopped. Terminal.
    Failed,
}

impl WriterState {
    pub fn as_str(&self) -> &'static str {
        match self {
            WriterState::Running => "running",
            WriterState::Draining => "draining",
            WriterState::Drained => "drained",
            WriterState::Failed => "failed",
        }
    }

    /// Whether the writer loop has exited.
    pub fn is_terminal(&self) -> bool {
        matches!(self, WriterState::Drained | WriterState::Failed)
    }

    fn from_u8(value: u8) -> Self {
        match value {
            0 => WriterState::Running,
            1 => WriterState::Draining,
            2 => WriterState::Drained,
            _ => WriterState::Failed,
        }
    }

    fn to_u8(self) -> u8 {
        match self {
            WriterState::Running => 0,
            WriterState::Draining => 1,
            WriterState::Drained => 2,
            WriterState::Failed => 3,
        }
    }
}

/// Thread-safe batch writer statistics.
///
/// Shared across tasks with `Arc`. Every `FlushTrigger` gets its own counter,
/// initialized to zero on creation.
pub struct WriterStats {
    started: Instant,
    submissions: AtomicUsize,
    operations_received: AtomicUsize,
    operations_flushed: AtomicUsize,
    flushes: HashMap<FlushTrigger, AtomicUsize>,
    state: AtomicU8,
    terminated: CancellationToken,
}

impl WriterStats {
    pub fn new() -> Self {
        let mut flushes = HashMap::new();
        for trigger in FlushTrigger::iter() {
            flushes.insert(trigger, AtomicUsize::new(0));
        }

        WriterStats {
            started: Instant::now(),
            submissions: AtomicUsize::new(0),
            operations_received: AtomicUsize::new(0),
            operations_flushed: AtomicUsize::new(0),
            flushes,
            state: AtomicU8::new(WriterState::Running.to_u8()),
            terminated: CancellationToken::new(),
        }
    }

    /// Records a submission taken off the queue.
    pub fn record_submission(&self, operations: usize) {
        self.submissions.fetch_add(1, Ordering::Relaxed);
        self.operations_received
            .fetch_add(operations, Ordering::Relaxed);
    }

    /// Records a successful flush.
    pub fn record_flush(&self, trigger: FlushTrigger, operations: usize) {
        if let Some(counter) = self.flushes.get(&trigger) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!(
                "Attempted to increment flush counter for {:?} which is not in the map. \
                 This indicates a bug in WriterStats initialization.",
                trigger
            );
        }
        self.operations_flushed
            .fetch_add(operations, Ordering::Relaxed);
    }

    pub fn submissions(&self) -> usize {
        self.submissions.load(Ordering::SeqCst)
    }

    pub fn operations_received(&self) -> usize {
        self.operations_received.load(Ordering::SeqCst)
    }

    pub fn operations_flushed(&self) -> usize {
        self.operations_flushed.load(Ordering::SeqCst)
    }

    /// Operations received but not yet written.
    pub fn operations_pending(&self) -> usize {
        self.operations_received()
            .saturating_sub(self.operations_flushed())
    }

    /// Number of successful flushes for one trigger.
    pub fn flush_count(&self, trigger: FlushTrigger) -> usize {
        self.flushes
            .get(&trigger)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    /// Number of successful flushes across all triggers.
    pub fn total_flushes(&self) -> usize {
        FlushTrigger::iter().map(|t| self.flush_count(t)).sum()
    }

    pub fn state(&self) -> WriterState {
        WriterState::from_u8(self.state.load(Ordering::SeqCst))
    }

    pub(crate) fn set_state(&self, state: WriterState) {
        self.state.store(state.to_u8(), Ordering::SeqCst);
    }

    /// Time since the writer started.
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Token cancelled when the writer loop exits, for any reason.
    pub fn terminated(&self) -> CancellationToken {
        self.terminated.clone()
    }
}

impl Default for WriterStats {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writer_stats_initialization() {
        let stats = WriterStats::new();
        for trigger in FlushTrigger::iter() {
            assert_eq!(stats.flush_count(trigger), 0);
        }
        assert_eq!(stats.total_flushes(), 0);
        assert_eq!(stats.submissions(), 0);
        assert_eq!(stats.state(), WriterState::Running);
        assert!(!stats.terminated().is_cancelled());
    }

    #[test]
    fn test_writer_stats_counts() {
        let stats = WriterStats::new();
        stats.record_submission(3);
        stats.record_submission(0);
        stats.record_submission(2);
        assert_eq!(stats.submissions(), 3);
        assert_eq!(stats.operations_received(), 5);
        assert_eq!(stats.operations_pending(), 5);

        stats.record_flush(FlushTrigger::SizeThreshold, 3);
        stats.record_flush(FlushTrigger::TimeThreshold, 2);
        assert_eq!(stats.flush_count(FlushTrigger::SizeThreshold), 1);
        assert_eq!(stats.flush_count(FlushTrigger::TimeThreshold), 1);
        assert_eq!(stats.flush_count(FlushTrigger::ShutdownDrain), 0);
        assert_eq!(stats.total_flushes(), 2);
        assert_eq!(stats.operations_pending(), 0);
    }

    #[test]
    fn test_writer_state_round_trip() {
        let stats = WriterStats::new();
        for state in [
            WriterState::Draining,
            WriterState::Drained,
            WriterState::Failed,
            WriterState::Running,
        ] {
            stats.set_state(state);
            assert_eq!(stats.state(), state);
        }
        assert!(WriterState::Drained.is_terminal());
        assert!(WriterState::Failed.is_terminal());
        assert!(!WriterState::Draining.is_terminal());
    }
}
