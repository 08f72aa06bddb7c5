//! Graceful shutdown handling.

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::error_handling::WriterError;
use crate::storage::{BatchWriterHandle, WriterSummary};

/// Resolves on Ctrl-C. If the signal handler cannot be installed, never resolves.
pub async fn wait_for_interrupt() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::warn!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
}

/// Shuts everything down in order, returning the writer's result.
///
/// The HTTP server stops first and finishes in-flight requests, so every
/// write it accepted is already queued when the writer is told to drain.
/// Background tasks are stopped last.
pub async fn shutdown_gracefully(
    server_shutdown: CancellationToken,
    server_task: JoinHandle<Result<(), anyhow::Error>>,
    writer: BatchWriterHandle,
    background: CancellationToken,
) -> Result<WriterSummary, WriterError> {
    server_shutdown.cancel();
    match server_task.await {
        Ok(Ok(())) => {}
        Ok(Err(e)) => log::warn!("HTTP server exited with error: {}", e),
        Err(e) => log::warn!("HTTP server task panicked: {:?}", e),
    }

    log::info!("Draining batch writer...");
    let result = writer.shutdown().await;

    background.cancel();
    result
}
