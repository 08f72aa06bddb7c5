//! Main application modules.
//!
//! This module provides the progress logging and shutdown handling used by
//! `run_server`.

pub mod logging;
pub mod shutdown;

// Re-export public API
pub use logging::log_progress;
pub use shutdown::{shutdown_gracefully, wait_for_interrupt};
