//! Progress logging utilities.

use log::info;

use crate::storage::WriterStats;

/// Logs how much the batch writer has written so far.
pub fn log_progress(stats: &WriterStats) {
    let elapsed_secs = stats.elapsed().as_secs_f64();
    let flushed = stats.operations_flushed();
    let rate = if elapsed_secs > 0.0 {
        flushed as f64 / elapsed_secs
    } else {
        0.0
    };
    info!(
        "Wrote {} operations from {} submissions in {} flushes over {:.0} seconds (~{:.2} ops/sec, {} pending)",
        flushed,
        stats.submissions(),
        stats.total_flushes(),
        elapsed_secs,
        rate,
        stats.operations_pending()
    );
}
