//! Validated run configuration.
//!
//! The classic versions of these demos keep the thread count and iteration
//! total in globals; here they live in an immutable [`WorkConfig`] that the
//! coordinator passes by reference to every worker.

use crate::errors::ConfigError;

/// Hard cap on worker threads. Far beyond anything useful for the demos,
/// but it turns a typo'd thread count into an error instead of a fork bomb.
pub const MAX_THREADS: usize = 1024;

/// Default iteration total, the workload the original demos bake in.
pub const DEFAULT_TOTAL_COUNT: u64 = 2_000_000;

/// Immutable description of one run: how many workers, and how many
/// increments they perform in aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkConfig {
    thread_count: usize,
    total_count: u64,
}

impl WorkConfig {
    /// Builds a validated configuration.
    ///
    /// Rejects non-positive thread counts and counts above [`MAX_THREADS`].
    /// A thread count above the machine's logical core count is accepted
    /// (oversubscription is a legitimate thing to demo) but logged.
    pub fn new(thread_count: i64, total_count: u64) -> Result<Self, ConfigError> {
        if thread_count < 1 {
            return Err(ConfigError::InvalidThreadCount {
                given: thread_count,
            });
        }
        let thread_count = thread_count as usize;
        if thread_count > MAX_THREADS {
            return Err(ConfigError::TooManyThreads {
                given: thread_count,
                max: MAX_THREADS,
            });
        }

        let cores = num_cpus::get();
        if thread_count > cores {
            log::warn!(
                "{} worker threads requested but only {} logical cores available; workers will be time-sliced",
                thread_count,
                cores
            );
        }

        Ok(Self {
            thread_count,
            total_count,
        })
    }

    pub fn thread_count(&self) -> usize {
        self.thread_count
    }

    pub fn total_count(&self) -> u64 {
        self.total_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_config() {
        let config = WorkConfig::new(4, 100).unwrap();
        assert_eq!(config.thread_count(), 4);
        assert_eq!(config.total_count(), 100);
    }

    #[test]
    fn test_zero_threads_rejected() {
        assert_eq!(
            WorkConfig::new(0, 100),
            Err(ConfigError::InvalidThreadCount { given: 0 })
        );
    }

    #[test]
    fn test_negative_threads_rejected() {
        assert_eq!(
            WorkConfig::new(-3, 100),
            Err(ConfigError::InvalidThreadCount { given: -3 })
        );
    }

    #[test]
    fn test_thread_cap_enforced() {
        let over = (MAX_THREADS + 1) as i64;
        assert_eq!(
            WorkConfig::new(over, 100),
            Err(ConfigError::TooManyThreads {
                given: MAX_THREADS + 1,
                max: MAX_THREADS
            })
        );
        assert!(WorkConfig::new(MAX_THREADS as i64, 100).is_ok());
    }

    #[test]
    fn test_zero_total_is_valid() {
        let config = WorkConfig::new(8, 0).unwrap();
        assert_eq!(config.total_count(), 0);
    }
}
