//! Non-preemptive priority scheduling.
//!
//! Reorders the batch with [`priority_order`] and serves the result
//! first-come-first-served, so the idle-time handling is the FCFS one.
//!
//! The reorder is visible to the caller: after a priority run the batch is
//! in priority order, not input order.

use std::cmp::Ordering;

use super::{fcfs_waiting_times, Scheduler};
use crate::models::Process;

/// Priority scheduler (higher `priority` value served first).
#[derive(Debug, Clone, Copy, Default)]
pub struct PriorityScheduler;

impl Scheduler for PriorityScheduler {
    fn name(&self) -> String {
        "Priority".to_string()
    }

    fn assign_waiting_times(&self, processes: &mut [Process]) {
        processes.sort_by(priority_order);
        fcfs_waiting_times(processes);
    }
}

/// Serving order for [`PriorityScheduler`].
///
/// 1. Higher `priority` first.
/// 2. On equal priority, the **later** arrival first.
///
/// Rule 2 is the inherited compatibility policy, not the FCFS-like
/// tie-break one might expect. Do not flip it without checking against
/// reference output. Processes equal on both keys keep their input order
/// (the sort is stable).
pub fn priority_order(a: &Process, b: &Process) -> Ordering {
    b.priority
        .cmp(&a.priority)
        .then_with(|| b.arrival_time.cmp(&a.arrival_time))
}
