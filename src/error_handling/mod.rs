//! Error handling.
//!
//! This module provides the error taxonomy for the service:
//! - **Initialization**: logger and HTTP client setup failures
//! - **Store**: failures executing a batch against the graph store
//! - **Writer**: what producers and the owning process see from the batch writer
//! - **Translate**: entities that cannot be turned into write operations

mod types;

// Re-export public API
pub use types::{InitializationError, StoreError, TranslateError, WriterError};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_closed_display() {
        assert_eq!(WriterError::QueueClosed.to_string(), "Write queue is closed");
    }

    #[test]
    fn test_store_error_converts_into_writer_error() {
        let store = StoreError::Cypher {
            code: "Neo.ClientError.Statement.SyntaxError".to_string(),
            message: "Invalid input".to_string(),
        };
        let writer: WriterError = store.into();
        match &writer {
            WriterError::BackingStore(StoreError::Cypher { code, .. }) => {
                assert_eq!(code, "Neo.ClientError.Statement.SyntaxError");
            }
            other => panic!("unexpected variant: {:?}", other),
        }
        let msg = writer.to_string();
        assert!(msg.contains("Backing store write failed"));
        assert!(msg.contains("Invalid input"));
    }

    #[test]
    fn test_status_error_display() {
        let err = StoreError::Status {
            status: 503,
            body: "unavailable".to_string(),
        };
        assert_eq!(err.to_string(), "Store returned HTTP 503: unavailable");
    }

    #[test]
    fn test_translate_error_display() {
        let err = TranslateError::InvalidLabel("Bad Label".to_string());
        assert_eq!(err.to_string(), "Invalid node label: \"Bad Label\"");
    }
}
