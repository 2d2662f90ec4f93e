//! The three parallel-counter variants.
//!
//! Each variant runs the same workload — spawn `thread_count` workers,
//! perform `total_count` increments in aggregate against one shared
//! counter, join everything, return the final value — and differs only in
//! how the shared counter is protected:
//!
//! - [`race`]: no protection at all. Lost updates are the demo.
//! - [`mutex`]: one lock/unlock pair per increment. Correct, maximally
//!   contended.
//! - [`local`]: private per-worker accumulation, one locked add per
//!   worker. Correct, `thread_count` lock acquisitions total.
//!
//! All three use `std::thread::scope`, so the join barrier is the scope
//! exit itself: the coordinator cannot read the counter before every
//! worker has finished, and counter plus lock are dropped when `run`
//! returns.

pub mod local;
pub mod mutex;
pub mod race;
