//! Batch writer data structures.
//!
//! This module defines the configuration, the flush trigger and the summary
//! types shared by the ingest queue and the batch writer.

use std::fmt;
use std::time::Duration;

use strum_macros::EnumIter as EnumIterMacro;

use crate::config::{DEFAULT_BATCH_SIZE, DEFAULT_FLUSH_INTERVAL, DEFAULT_QUEUE_CAPACITY};
use crate::error_handling::WriterError;

/// One client-originated group of write operations, in execution order.
///
/// Produced by translating a single entity. Its operations are appended to the
/// batch as a unit and always land in the same flush, even when that pushes the
/// batch past `batch_size`.
pub type Submission<Op> = Vec<Op>;

/// Configuration for batch writing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchConfig {
    /// Maximum number of operations to accumulate before flushing
    pub batch_size: usize,
    /// Maximum time an operation may wait in the accumulator
    pub flush_interval: Duration,
    /// Number of submissions the ingest queue buffers before producers block
    pub queue_capacity: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        BatchConfig {
            batch_size: DEFAULT_BATCH_SIZE,
            flush_interval: DEFAULT_FLUSH_INTERVAL,
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
        }
    }
}

impl BatchConfig {
    /// Checks that every setting is strictly positive.
    pub fn validate(&self) -> Result<(), WriterError> {
        if self.batch_size == 0 {
            return Err(WriterError::InvalidConfig(
                "batch_size must be at least 1".to_string(),
            ));
        }
        if self.flush_interval.is_zero() {
            return Err(WriterError::InvalidConfig(
                "flush_interval must be greater than zero".to_string(),
            ));
        }
        if self.queue_capacity == 0 {
            return Err(WriterError::InvalidConfig(
                "queue_capacity must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// What caused a flush.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum FlushTrigger {
    /// The accumulator reached `batch_size` operations.
    SizeThreshold,
    /// The oldest pending operation waited `flush_interval`.
    TimeThreshold,
    /// The queue was closed and the remainder was flushed on the way out.
    ShutdownDrain,
}

impl FlushTrigger {
    pub fn as_str(&self) -> &'static str {
        match self {
            FlushTrigger::SizeThreshold => "size",
            FlushTrigger::TimeThreshold => "time",
            FlushTrigger::ShutdownDrain => "shutdown",
        }
    }
}

impl fmt::Display for FlushTrigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Totals reported once the writer has drained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriterSummary {
    /// Submissions received from the queue
    pub submissions: usize,
    /// Operations written to the store
    pub operations: usize,
    /// Number of successful flushes
    pub flushes: usize,
    /// Time from writer start to drain
    pub elapsed: Duration,
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_batch_config_default() {
        let config = BatchConfig::default();
        assert_eq!(config.batch_size, 1024);
        assert_eq!(config.flush_interval, Duration::from_secs(1));
        assert_eq!(config.queue_capacity, 1024);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_batch_config_rejects_zero_values() {
        let zero_size = BatchConfig {
            batch_size: 0,
            ..Default::default()
        };
        assert!(matches!(
            zero_size.validate(),
            Err(WriterError::InvalidConfig(_))
        ));

        let zero_interval = BatchConfig {
            flush_interval: Duration::ZERO,
            ..Default::default()
        };
        assert!(matches!(
            zero_interval.validate(),
            Err(WriterError::InvalidConfig(_))
        ));

        let zero_capacity = BatchConfig {
            queue_capacity: 0,
            ..Default::default()
        };
        assert!(matches!(
            zero_capacity.validate(),
            Err(WriterError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_flush_trigger_display() {
        let names: Vec<String> = FlushTrigger::iter().map(|t| t.to_string()).collect();
        assert_eq!(names, vec!["size", "time", "shutdown"]);
    }
}
