//! Service lifecycle.
//!
//! `run_server` wires the graph store client, the batch writer and the HTTP
//! server together, then waits for Ctrl-C or for the writer to stop.

use std::time::Duration;

use anyhow::{Context, Result};
use log::{info, warn};
use tokio_util::sync::CancellationToken;

use crate::app::{log_progress, shutdown_gracefully, wait_for_interrupt};
use crate::config::{Config, LOGGING_INTERVAL_SECS};
use crate::initialization::init_client;
use crate::orgs::SUGGESTED_INDEXES;
use crate::server::{self, AppState};
use crate::storage::{start_batch_writer, NeoStoreClient, WriterStats, WriterSummary};

/// Runs the organisation writer until interrupted.
///
/// Startup:
/// 1. Build the Neo4j client and ensure the suggested indexes exist
/// 2. Start the batch writer
/// 3. Bind and serve the HTTP API
///
/// Shutdown (on Ctrl-C, or as soon as the writer stops on its own):
/// 1. Stop accepting requests and finish in-flight ones
/// 2. Close the write queue and wait for the final flush
///
/// # Errors
///
/// Returns an error if startup fails or if the batch writer stopped because a
/// flush failed. In the latter case some accepted writes were not persisted.
pub async fn run_server(config: Config) -> Result<WriterSummary> {
    let client = init_client(&config).context("Failed to initialize HTTP client")?;
    let store = NeoStoreClient::new(client, &config.neo_url);
    info!("Writing to neo4j at {}", store.commit_url());

    store
        .ensure_indexes(SUGGESTED_INDEXES)
        .await
        .context("Failed to ensure neo4j indexes")?;

    let (queue, writer) =
        start_batch_writer(store, config.batch_config()).context("Failed to start batch writer")?;
    let stats = writer.stats();

    let listener = match server::bind(config.port).await {
        Ok(listener) => listener,
        Err(e) => {
            // Nothing was accepted yet, but stop the writer cleanly anyway
            let _ = writer.shutdown().await;
            return Err(e);
        }
    };

    let server_shutdown = CancellationToken::new();
    let server_task = tokio::spawn(server::serve(
        listener,
        AppState::new(queue, stats.clone()),
        server_shutdown.clone(),
    ));

    let background = CancellationToken::new();
    spawn_progress_logger(stats, background.clone());

    tokio::select! {
        _ = wait_for_interrupt() => info!("Received interrupt, shutting down"),
        _ = writer.terminated() => warn!("Batch writer stopped, shutting down"),
    }

    let summary = shutdown_gracefully(server_shutdown, server_task, writer, background)
        .await
        .context("Batch writer failed; writes accepted since the last successful flush were not persisted")?;

    info!("exiting");
    Ok(summary)
}

fn spawn_progress_logger(stats: std::sync::Arc<WriterStats>, cancel: CancellationToken) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(LOGGING_INTERVAL_SECS));
        // The first tick completes immediately
        interval.tick().await;
        loop {
            tokio::select! {
                _ = interval.tick() => log_progress(&stats),
                _ = cancel.cancelled() => break,
            }
        }
    });
}
