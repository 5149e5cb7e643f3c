//! Timing instrumentation helpers

use std::time::{Duration, Instant};

/// Tracks the elapsed time of an operation
///
/// # Example
///
/// ```ignore
/// use shopboot_infrastructure::utils::TimedOperation;
///
/// let timer = TimedOperation::start();
/// // bootstrap
/// tracing::info!(elapsed_ms = timer.elapsed_ms(), "Bootstrap complete");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TimedOperation {
    start: Instant,
}

impl TimedOperation {
    /// Start a new timed operation
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Get elapsed time in milliseconds
    pub fn elapsed_ms(&self) -> u64 {
        u64::try_from(self.start.elapsed().as_millis()).unwrap_or(u64::MAX)
    }

    /// Get elapsed time as Duration
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}
