//! Single-CPU schedulers and the turnaround aggregator.
//!
//! Each scheduler fills in `waiting_time` for every process of a batch;
//! [`assign_turnaround_times`] then derives `turnaround_time`. [`run`]
//! chains the two over a batch the caller hands over by value, so a batch
//! is never shared between two runs.
//!
//! # Disciplines
//!
//! | Scheduler | Preemptive | Order |
//! |-----------|-----------|-------|
//! | [`Fcfs`] | no | input order |
//! | [`ShortestRemainingTime`] | yes, per tick | least remaining burst |
//! | [`PriorityScheduler`] | no | [`priority_order`], then FCFS |
//! | [`RoundRobin`] | yes, per quantum | index-order passes |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3

mod algorithm;
mod fcfs;
mod priority;
mod round_robin;
mod sjf;
mod turnaround;

pub use algorithm::Algorithm;
pub use fcfs::{fcfs_waiting_times, Fcfs};
pub use priority::{priority_order, PriorityScheduler};
pub use round_robin::{RoundRobin, DEFAULT_QUANTUM};
pub use sjf::ShortestRemainingTime;
pub use turnaround::assign_turnaround_times;

use std::fmt::Debug;

use crate::models::Process;

/// A CPU scheduling discipline.
///
/// Implementations must write a non-negative `waiting_time` for every
/// process in the slice and must not touch any other field, except that
/// a discipline may reorder the slice (see [`PriorityScheduler`]).
pub trait Scheduler: Send + Sync + Debug {
    /// Display name (e.g., "FCFS", "RR Quantum = 2").
    fn name(&self) -> String;

    /// Computes waiting times for the batch in place.
    fn assign_waiting_times(&self, processes: &mut [Process]);
}

/// Runs one scheduler over an owned batch and returns it annotated with
/// waiting and turnaround times.
///
/// # Example
/// ```
/// use schedsim::models::Process;
/// use schedsim::scheduler::{run, RoundRobin};
///
/// let batch = vec![
///     Process::new(1).with_burst_time(5),
///     Process::new(2).with_burst_time(3),
/// ];
/// let rr = RoundRobin::new(2).unwrap();
/// let done = run(&rr, batch);
/// assert_eq!(done[0].waiting_time, 3);
/// assert_eq!(done[1].waiting_time, 4);
/// ```
pub fn run<S: Scheduler + ?Sized>(scheduler: &S, mut batch: Vec<Process>) -> Vec<Process> {
    scheduler.assign_waiting_times(&mut batch);
    assign_turnaround_times(&mut batch);
    tracing::debug!(
        scheduler = %scheduler.name(),
        processes = batch.len(),
        "scheduling run complete"
    );
    batch
}

/// Waiting time for a process that finished at `finish`, clamped at zero.
#[inline]
pub(crate) fn waiting_from_finish(process: &Process, finish: i64) -> i64 {
    (finish - process.burst_time - process.arrival_time).max(0)
}
