//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    DEFAULT_BATCH_SIZE, DEFAULT_FLUSH_INTERVAL_MS, DEFAULT_NEO_URL, DEFAULT_PORT,
    DEFAULT_QUEUE_CAPACITY, DEFAULT_STORE_TIMEOUT_SECS,
};
use crate::storage::BatchConfig;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Service configuration.
///
/// Every option can be given on the command line or through the environment
/// (a `.env` file is loaded by the binary before parsing).
///
/// # Examples
///
/// ```bash
/// # Defaults: local Neo4j, port 8080, 1024 operations or 1s per flush
/// org_writer
///
/// # Smaller batches against a remote store
/// org_writer --neo-url http://neo4j:7474/db/data --batch-size 256
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "org_writer",
    about = "A RESTful API for writing Organisations to neo4j in batches"
)]
pub struct Config {
    /// neo4j endpoint URL
    #[arg(long, env = "NEO_URL", default_value = DEFAULT_NEO_URL)]
    pub neo_url: String,

    /// Port to listen on
    #[arg(long, env = "APP_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Maximum number of write operations per flush
    #[arg(long, env = "BATCH_SIZE", default_value_t = DEFAULT_BATCH_SIZE)]
    pub batch_size: usize,

    /// Maximum time (milliseconds) a write may wait before it is flushed
    #[arg(long, env = "FLUSH_INTERVAL_MS", default_value_t = DEFAULT_FLUSH_INTERVAL_MS)]
    pub flush_interval_ms: u64,

    /// Number of pending submissions before request handlers block
    #[arg(long, env = "QUEUE_CAPACITY", default_value_t = DEFAULT_QUEUE_CAPACITY)]
    pub queue_capacity: usize,

    /// Timeout in seconds for a single request to neo4j
    #[arg(long, env = "STORE_TIMEOUT_SECONDS", default_value_t = DEFAULT_STORE_TIMEOUT_SECS)]
    pub store_timeout_seconds: u64,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl Config {
    /// Batch writer settings derived from this configuration.
    pub fn batch_config(&self) -> BatchConfig {
        BatchConfig {
            batch_size: self.batch_size,
            flush_interval: Duration::from_millis(self.flush_interval_ms),
            queue_capacity: self.queue_capacity,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            neo_url: DEFAULT_NEO_URL.to_string(),
            port: DEFAULT_PORT,
            batch_size: DEFAULT_BATCH_SIZE,
            flush_interval_ms: DEFAULT_FLUSH_INTERVAL_MS,
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
            store_timeout_seconds: DEFAULT_STORE_TIMEOUT_SECS,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}
