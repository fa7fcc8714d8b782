//! Batch quality metrics.
//!
//! Computes the standard single-CPU performance indicators from an
//! already-scheduled batch.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Total / Avg Waiting | Sum / mean of `waiting_time` |
//! | Total / Avg Turnaround | Sum / mean of `turnaround_time` |
//! | Makespan | Latest completion time |
//! | Utilization | Total burst / makespan |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2: Scheduling Criteria

use serde::{Deserialize, Serialize};

use super::Process;

/// Aggregate indicators for one scheduling run.
///
/// Averages are `None` for an empty batch, where the mean is undefined.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchMetrics {
    /// Number of processes in the batch.
    pub process_count: usize,
    /// Sum of waiting times.
    pub total_waiting_time: i64,
    /// Sum of turnaround times.
    pub total_turnaround_time: i64,
    /// Mean waiting time.
    pub avg_waiting_time: Option<f64>,
    /// Mean turnaround time.
    pub avg_turnaround_time: Option<f64>,
    /// Sum of burst times (busy CPU ticks).
    pub total_burst_time: i64,
    /// Latest completion time across the batch.
    pub makespan: i64,
    /// Fraction of the makespan the CPU was busy (0.0..1.0).
    pub cpu_utilization: f64,
}

impl BatchMetrics {
    /// Computes metrics from a batch whose waiting and turnaround times
    /// have already been assigned.
    pub fn calculate(processes: &[Process]) -> Self {
        let process_count = processes.len();
        let mut total_waiting_time: i64 = 0;
        let mut total_turnaround_time: i64 = 0;
        let mut total_burst_time: i64 = 0;
        let mut makespan: i64 = 0;

        for p in processes {
            total_waiting_time += p.waiting_time;
            total_turnaround_time += p.turnaround_time;
            total_burst_time += p.burst_time;
            makespan = makespan.max(p.completion_time());
        }

        let mean = |total: i64| {
            if process_count == 0 {
                None
            } else {
                Some(total as f64 / process_count as f64)
            }
        };

        let cpu_utilization = if makespan <= 0 {
            0.0
        } else {
            total_burst_time as f64 / makespan as f64
        };

        Self {
            process_count,
            total_waiting_time,
            total_turnaround_time,
            avg_waiting_time: mean(total_waiting_time),
            avg_turnaround_time: mean(total_turnaround_time),
            total_burst_time,
            makespan,
            cpu_utilization,
        }
    }
}
