//! Variant A: unsynchronized shared increments.

use std::sync::atomic::{AtomicU64, Ordering};
use std::thread;

use crate::config::WorkConfig;
use crate::partition::race_tasks;

/// Runs the racy variant and returns the final counter value.
///
/// Every worker bumps the shared counter with a split load/store instead
/// of an atomic read-modify-write: two workers can observe the same value
/// and one of their updates is silently overwritten. The result is
/// frequently below `total_count` under contention, never above it, and
/// exact when `thread_count` is 1. That lossiness is the point of the
/// demo — do not "fix" it.
///
/// `Relaxed` ordering keeps the increments free of synchronization while
/// staying inside defined behavior; the update loss comes from the
/// load/store split, not from memory-ordering exotica.
pub fn run(config: &WorkConfig) -> u64 {
    let counter = AtomicU64::new(0);
    let tasks = race_tasks(config);
    log::debug!("spawning {} unsynchronized workers", tasks.len());

    thread::scope(|scope| {
        for task in &tasks {
            let counter = &counter;
            scope.spawn(move || {
                println!(
                    "worker {} of {}: counting {}",
                    task.rank,
                    config.thread_count(),
                    task.len()
                );
                for _ in task.start..task.end {
                    // Concurrent read-modify-write with no discipline:
                    // updates interleaved between the load and the store
                    // are lost.
                    let seen = counter.load(Ordering::Relaxed);
                    counter.store(seen + 1, Ordering::Relaxed);
                }
            });
        }
    });

    // The scope has joined every worker; this read is sequenced after
    // their last writes.
    counter.load(Ordering::Relaxed)
}
