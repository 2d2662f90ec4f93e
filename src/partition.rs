//! Work partitioning: dividing `total_count` increments among workers.
//!
//! All functions here are pure; the coordinator computes every worker's
//! assignment up front and hands each worker a typed [`WorkerTask`] by
//! value, replacing the original demos' rank-smuggled-through-a-pointer
//! argument passing.

use crate::config::WorkConfig;

/// One worker's assignment: a rank and a contiguous, half-open iteration
/// range `[start, end)`. Never mutated after construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkerTask {
    pub rank: usize,
    pub start: u64,
    pub end: u64,
}

impl WorkerTask {
    pub fn len(&self) -> u64 {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Variant A's per-worker share: `total_count / thread_count`, remainder
/// dropped. The truncation is deliberate — the racy demo reproduces the
/// original's behavior, and the name makes the loss explicit instead of
/// hiding it.
pub fn truncating_share(config: &WorkConfig) -> u64 {
    config.total_count() / config.thread_count() as u64
}

/// Tasks for the racy variant: every worker gets the same truncated share,
/// expressed as the range `[0, share)` since the workers do not own
/// distinct slices of the counter space.
pub fn race_tasks(config: &WorkConfig) -> Vec<WorkerTask> {
    let share = truncating_share(config);
    (0..config.thread_count())
        .map(|rank| WorkerTask {
            rank,
            start: 0,
            end: share,
        })
        .collect()
}

/// Tasks for the synchronized variants: contiguous ranges
/// `[rank * share, (rank + 1) * share)`, with the last worker's range
/// extended to `total_count` so the remainder is absorbed exactly once.
///
/// The returned ranges partition `[0, total_count)` exactly: no gaps, no
/// overlaps, for every valid configuration.
pub fn partition(config: &WorkConfig) -> Vec<WorkerTask> {
    let threads = config.thread_count();
    let share = config.total_count() / threads as u64;
    (0..threads)
        .map(|rank| {
            let start = rank as u64 * share;
            let end = if rank + 1 == threads {
                config.total_count()
            } else {
                start + share
            };
            WorkerTask { rank, start, end }
        })
        .collect()
}
