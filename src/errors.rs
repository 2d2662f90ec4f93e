//! Configuration errors shared by the three counter binaries.

use thiserror::Error;

/// Rejected work configurations. Every variant is fatal: the binaries map
/// these to exit status 1 before any worker is spawned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Thread count was zero or negative.
    #[error("thread count must be at least 1 (got {given})")]
    InvalidThreadCount { given: i64 },

    /// Thread count exceeded the hard cap.
    #[error("thread count {given} exceeds the supported maximum of {max}")]
    TooManyThreads { given: usize, max: usize },
}
