//! HTTP handlers.

mod health;
mod metrics;
mod organisations;

pub use health::health_handler;
pub use metrics::metrics_handler;
pub use organisations::write_handler;
