//! First-Come-First-Served.
//!
//! Serves processes strictly in the order given, never starting one before
//! its arrival. When the next process has not arrived yet the CPU idles
//! until it does.
//!
//! # Complexity
//! O(n).

use super::Scheduler;
use crate::models::Process;

/// First-Come-First-Served scheduler.
///
/// The batch order *is* the serving order; no sorting happens here.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fcfs;

impl Scheduler for Fcfs {
    fn name(&self) -> String {
        "FCFS".to_string()
    }

    fn assign_waiting_times(&self, processes: &mut [Process]) {
        fcfs_waiting_times(processes);
    }
}

/// Assigns FCFS waiting times over the slice in its current order.
///
/// Shared with [`PriorityScheduler`](super::PriorityScheduler), which
/// reorders first and then serves the result first-come-first-served.
pub fn fcfs_waiting_times(processes: &mut [Process]) {
    let mut prev_completion: i64 = 0;

    for p in processes.iter_mut() {
        let start = prev_completion.max(p.arrival_time);
        if start > prev_completion {
            tracing::trace!(from = prev_completion, to = start, "cpu idle");
        }
        p.waiting_time = start - p.arrival_time;
        prev_completion = start + p.burst_time;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::test_support::{batch, waits};

    #[test]
    fn test_fcfs_single_process() {
        let mut procs = batch(&[(0, 5)]);
        Fcfs.assign_waiting_times(&mut procs);
        assert_eq!(waits(&procs), vec![0]);
    }

    #[test]
    fn test_fcfs_single_late_arrival() {
        let mut procs = batch(&[(9, 5)]);
        Fcfs.assign_waiting_times(&mut procs);
        assert_eq!(waits(&procs), vec![0]);
    }

    #[test]
    fn test_fcfs_two_processes() {
        let mut procs = batch(&[(0, 4), (1, 3)]);
        Fcfs.assign_waiting_times(&mut procs);
        // Second starts at 4, arrived at 1
        assert_eq!(waits(&procs), vec![0, 3]);
    }

    #[test]
    fn test_fcfs_idle_gap() {
        // P1 runs 0..2, CPU idles until 6, P2 runs 6..9, P3 waits 9-7
        let mut procs = batch(&[(0, 2), (6, 3), (7, 1)]);
        Fcfs.assign_waiting_times(&mut procs);
        assert_eq!(waits(&procs), vec![0, 0, 2]);
    }

    #[test]
    fn test_fcfs_input_order_is_serving_order() {
        // Listed first but arrives later: everyone behind it waits
        let mut procs = batch(&[(5, 2), (0, 3)]);
        Fcfs.assign_waiting_times(&mut procs);
        // P1 runs 5..7, P2 starts at 7 having arrived at 0
        assert_eq!(waits(&procs), vec![0, 7]);
    }

    #[test]
    fn test_fcfs_empty() {
        let mut procs: Vec<Process> = Vec::new();
        Fcfs.assign_waiting_times(&mut procs);
        assert!(procs.is_empty());
    }
}
