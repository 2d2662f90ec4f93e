//! Variant C: private accumulation, one locked add per worker.

use std::thread;

use parking_lot::Mutex;

use crate::config::WorkConfig;
use crate::partition::partition;

/// Runs the low-contention variant and returns the final counter value.
///
/// Each worker counts its range in a local variable it exclusively owns —
/// no synchronization needed — and folds that local total into the shared
/// counter with a single locked add when its range is done. Always exact,
/// with `thread_count` lock acquisitions instead of `total_count`.
pub fn run(config: &WorkConfig) -> u64 {
    let counter = Mutex::new(0u64);
    let tasks = partition(config);
    log::debug!("spawning {} workers, one lock per worker", tasks.len());

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
                let mut local = 0u64;
                for _ in task.start..task.end {
                    local += 1;
                }
                *counter.lock() += local;
            });
        }
    });

    counter.into_inner()
}
