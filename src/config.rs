//! Worker configuration.
//!
//! Everything here has a sensible default; the binary maps its command-line
//! flags onto [`WorkerConfig`] and log verbosity is controlled with `RUST_LOG`.

use crate::worker::VALID_ORDERS;
use std::time::Duration;

/// How long a single receive waits for an order.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// How long the worker sleeps after a receive timed out.
pub const DEFAULT_WAIT_INTERVAL: Duration = Duration::from_secs(5);

/// Tunables for a [`Worker`](crate::worker::Worker).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkerConfig {
    /// Upper bound on a single blocking receive.
    pub timeout: Duration,
    /// Idle sleep after a receive timed out.
    pub wait_interval: Duration,
    /// Command names this deployment recognizes. Names without a handler are skipped.
    pub allow_list: Vec<String>,
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            wait_interval: DEFAULT_WAIT_INTERVAL,
            allow_list: VALID_ORDERS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl WorkerConfig {
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_wait_interval(mut self, wait_interval: Duration) -> Self {
        self.wait_interval = wait_interval;
        self
    }

    pub fn with_allow_list<I, S>(mut self, allow_list: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allow_list = allow_list.into_iter().map(Into::into).collect();
        self
    }
}
