//! Shortest-Job-First, preemptive (shortest remaining time).
//!
//! # Algorithm
//!
//! Time-stepped at one-tick granularity:
//! 1. Among arrived, unfinished processes pick the one with the least
//!    remaining burst; ties go to the lowest batch index.
//! 2. If none is ready, the CPU idles for one tick.
//! 3. Otherwise run the pick for one tick.
//! 4. On completion, `waiting = finish - burst - arrival` (clamped at 0).
//!
//! # Complexity
//! O(n * T) where T is the makespan. Fine for small batches.
//!
//! # Reference
//! Schrage (1968), SRPT is optimal for mean flow time with preemption.

use super::{waiting_from_finish, Scheduler};
use crate::models::Process;

/// Shortest-remaining-time-first scheduler.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShortestRemainingTime;

impl Scheduler for ShortestRemainingTime {
    fn name(&self) -> String {
        "SJF".to_string()
    }

    fn assign_waiting_times(&self, processes: &mut [Process]) {
        let n = processes.len();
        let mut remaining: Vec<i64> = processes.iter().map(|p| p.burst_time).collect();
        let mut current_time: i64 = 0;
        let mut completed = 0;

        while completed < n {
            // min_by_key keeps the first of equal minima: lowest index wins
            let shortest = (0..n)
                .filter(|&i| processes[i].arrival_time <= current_time && remaining[i] > 0)
                .min_by_key(|&i| remaining[i]);

            let Some(idx) = shortest else {
                tracing::trace!(time = current_time, "cpu idle");
                current_time += 1;
                continue;
            };

            remaining[idx] -= 1;
            current_time += 1;

            if remaining[idx] == 0 {
                completed += 1;
                let p = &mut processes[idx];
                p.waiting_time = waiting_from_finish(p, current_time);
                tracing::debug!(
                    id = p.id,
                    finish = current_time,
                    waiting = p.waiting_time,
                    "process completed"
                );
            }
        }
    }
}
