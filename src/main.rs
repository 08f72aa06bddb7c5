//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `org_writer` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use org_writer::initialization::init_logger_with;
use org_writer::{run_server, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file (if it exists)
    let _ = dotenvy::dotenv();

    // Parse command-line arguments into Config
    let config = Config::parse();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    match run_server(config).await {
        Ok(summary) => {
            log::info!(
                "Wrote {} operation{} from {} submission{} in {:.1}s",
                summary.operations,
                if summary.operations == 1 { "" } else { "s" },
                summary.submissions,
                if summary.submissions == 1 { "" } else { "s" },
                summary.elapsed.as_secs_f64()
            );
            Ok(())
        }
        Err(e) => {
            log::error!("org_writer error: {:#}", e);
            eprintln!("org_writer error: {:#}", e);
            process::exit(1);
        }
    }
}
