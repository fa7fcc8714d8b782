//! Round-Robin with a fixed quantum.
//!
//! # Algorithm
//!
//! Repeated passes over the batch in index order. In each pass, every
//! arrived, unfinished process runs for `min(remaining, quantum)` ticks and
//! the clock advances by that much. A process that was preempted comes back
//! only on the *next* pass, so processes later in the same pass may run
//! before it. If a whole pass runs nothing, the CPU idles one tick.
//!
//! This is index-order cycling, not a FIFO ready queue.

use super::{waiting_from_finish, Scheduler};
use crate::error::{Error, Result};
use crate::models::Process;

/// Quantum used when none is configured.
pub const DEFAULT_QUANTUM: i64 = 2;

/// Round-Robin scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundRobin {
    quantum: i64,
}

impl RoundRobin {
    /// Creates a round-robin scheduler.
    ///
    /// # Errors
    /// [`Error::InvalidQuantum`] if `quantum < 1`.
    pub fn new(quantum: i64) -> Result<Self> {
        if quantum < 1 {
            return Err(Error::InvalidQuantum(quantum));
        }
        Ok(Self { quantum })
    }

    /// The configured quantum.
    pub fn quantum(&self) -> i64 {
        self.quantum
    }
}

impl Default for RoundRobin {
    fn default() -> Self {
        Self {
            quantum: DEFAULT_QUANTUM,
        }
    }
}

impl Scheduler for RoundRobin {
    fn name(&self) -> String {
        format!("RR Quantum = {}", self.quantum)
    }

    fn assign_waiting_times(&self, processes: &mut [Process]) {
        let n = processes.len();
        let mut remaining: Vec<i64> = processes.iter().map(|p| p.burst_time).collect();
        let mut current_time: i64 = 0;
        let mut completed = 0;

        for p in processes.iter_mut() {
            p.waiting_time = 0;
        }

        while completed < n {
            let mut did_run = false;

            for (i, p) in processes.iter_mut().enumerate() {
                if remaining[i] == 0 || p.arrival_time > current_time {
                    continue;
                }
                did_run = true;

                if remaining[i] > self.quantum {
                    current_time += self.quantum;
                    remaining[i] -= self.quantum;
                } else {
                    current_time += remaining[i];
                    remaining[i] = 0;
                    completed += 1;
                    p.waiting_time = waiting_from_finish(p, current_time);
                    tracing::debug!(
                        id = p.id,
                        finish = current_time,
                        waiting = p.waiting_time,
                        "process completed"
                    );
                }
            }

            if !did_run && completed < n {
                tracing::trace!(time = current_time, "cpu idle");
                current_time += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::test_support::{batch, waits};

    #[test]
    fn test_rr_rejects_non_positive_quantum() {
        assert!(matches!(RoundRobin::new(0), Err(Error::InvalidQuantum(0))));
        assert!(matches!(RoundRobin::new(-3), Err(Error::InvalidQuantum(-3))));
        assert_eq!(RoundRobin::new(1).unwrap().quantum(), 1);
    }

    #[test]
    fn test_rr_default_quantum() {
        assert_eq!(RoundRobin::default().quantum(), DEFAULT_QUANTUM);
        assert_eq!(RoundRobin::default().name(), "RR Quantum = 2");
    }

    #[test]
    fn test_rr_interleaving() {
        // q=2: P1 0..2, P2 2..4, P1 4..6, P2 6..7 (done), P1 7..8 (done)
        let mut procs = batch(&[(0, 5), (0, 3)]);
        RoundRobin::new(2).unwrap().assign_waiting_times(&mut procs);
        // P1: 8 - 5 = 3, P2: 7 - 3 = 4
        assert_eq!(waits(&procs), vec![3, 4]);
    }

    #[test]
    fn test_rr_preempted_returns_next_pass() {
        // q=2, P2 arrives at 1. Pass 1: P1 0..2, P2 (arrived) 2..4.
        // Pass 2: P1 4..5 done, P2 5..6 done.
        let mut procs = batch(&[(0, 3), (1, 3)]);
        RoundRobin::new(2).unwrap().assign_waiting_times(&mut procs);
        assert_eq!(waits(&procs), vec![2, 2]);
    }

    #[test]
    fn test_rr_idles_until_arrival() {
        let mut procs = batch(&[(0, 1), (5, 2)]);
        RoundRobin::new(4).unwrap().assign_waiting_times(&mut procs);
        assert_eq!(waits(&procs), vec![0, 0]);
    }

    #[test]
    fn test_rr_large_quantum_matches_fcfs_order() {
        // Quantum above every burst: one slice each, index order
        let mut procs = batch(&[(0, 3), (0, 2), (1, 4)]);
        RoundRobin::new(10).unwrap().assign_waiting_times(&mut procs);
        assert_eq!(waits(&procs), vec![0, 3, 4]);
    }

    #[test]
    fn test_rr_empty() {
        let mut procs: Vec<Process> = Vec::new();
        RoundRobin::new(2).unwrap().assign_waiting_times(&mut procs);
        assert!(procs.is_empty());
    }
}
