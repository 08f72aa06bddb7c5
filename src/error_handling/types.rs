//! Error type definitions.
//!
//! This module defines all error types used throughout the application.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Errors reported by a backing store when executing a batch.
///
/// Any of these is fatal to the batch writer: the store may have applied an
/// unknown prefix of the batch, so nothing is retried.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Transport-level failure (connect, timeout, body read).
    #[error("Store request failed: {0}")]
    Http(#[from] ReqwestError),

    /// The store answered with a non-success HTTP status.
    #[error("Store returned HTTP {status}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body, truncated
        body: String,
    },

    /// The store rejected one of the statements.
    #[error("Cypher error {code}: {message}")]
    Cypher {
        /// Neo4j status code, e.g. `Neo.ClientError.Statement.SyntaxError`
        code: String,
        /// Human-readable message from the store
        message: String,
    },

    /// The store's response could not be decoded.
    #[error("Malformed store response: {0}")]
    Decode(String),
}

/// Errors surfaced by the batch writer.
#[derive(Error, Debug)]
pub enum WriterError {
    /// The ingest queue has been closed; the submission was not accepted.
    #[error("Write queue is closed")]
    QueueClosed,

    /// A flush failed. The writer stopped and will not flush again.
    #[error("Backing store write failed: {0}")]
    BackingStore(#[from] StoreError),

    /// The batch configuration was rejected before the writer started.
    #[error("Invalid batch configuration: {0}")]
    InvalidConfig(String),

    /// The writer task ended without reporting a result (panic or cancellation).
    #[error("Batch writer task aborted: {0}")]
    Aborted(String),
}

/// Errors produced while translating an entity into write operations.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TranslateError {
    /// The entity type cannot be used as a node label.
    #[error("Invalid node label: {0:?}")]
    InvalidLabel(String),
}
