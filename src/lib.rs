//! Teaching examples of shared-counter races and their mitigation.
//!
//! Three variants run the same workload — `thread_count` workers performing
//! `total_count` increments in aggregate against a single shared counter —
//! and differ only in synchronization strategy:
//!
//! - [`variants::race`]: no synchronization; lost updates, kept
//!   reproducible on purpose.
//! - [`variants::mutex`]: one lock per increment; correct, fully
//!   serialized.
//! - [`variants::local`]: per-worker accumulation, one locked add per
//!   worker; correct, minimal contention.
//!
//! Each variant ships as its own binary (`contend-race`, `contend-mutex`,
//! `contend-local`) taking a thread count and an optional `--total-count`.

pub mod cli;
pub mod config;
pub mod errors;
pub mod partition;
pub mod variants;

pub use crate::config::{WorkConfig, DEFAULT_TOTAL_COUNT, MAX_THREADS};
pub use crate::errors::ConfigError;
pub use crate::partition::{partition, race_tasks, truncating_share, WorkerTask};
