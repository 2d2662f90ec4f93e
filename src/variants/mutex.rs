//! Variant B: one lock/unlock pair per increment.

use std::thread;

use parking_lot::Mutex;

use crate::config::WorkConfig;
use crate::partition::partition;

/// Runs the fully locked variant and returns the final counter value.
///
/// Each worker owns a contiguous slice of `[0, total_count)` and takes the
/// shared mutex once per increment. Always exact, but every single
/// increment serializes against every other worker — the worst possible
/// contention pattern, kept on purpose as the comparison baseline.
pub fn run(config: &WorkConfig) -> u64 {
    let counter = Mutex::new(0u64);
    let tasks = partition(config);
    log::debug!("spawning {} workers, one lock per increment", tasks.len());

    thread::scope(|scope| {
        for task in &tasks {
            let counter = &counter;
            scope.spawn(move || {
                println!(
                    "worker {} of {}: range [{}, {})",
                    task.rank,
                    config.thread_count(),
                    task.start,
                    task.end
                );
                for _ in task.start..task.end {
                    // Guard dropped at the end of the statement; the lock
                    // covers exactly one increment.
                    *counter.lock() += 1;
                }
            });
        }
    });

    counter.into_inner()
}
