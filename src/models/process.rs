//! Process record.
//!
//! A process is the unit of scheduling: fixed input fields (arrival, burst,
//! priority) plus the two metrics a scheduling run fills in.
//!
//! # Time Representation
//! All times are integer ticks relative to the simulation epoch (t=0).

use serde::{Deserialize, Serialize};

/// A process to be scheduled on a single CPU.
///
/// `arrival_time`, `burst_time` and `priority` are inputs and are never
/// touched by a scheduler. `waiting_time` is written by exactly one
/// scheduler per run; `turnaround_time` is written afterwards by
/// [`assign_turnaround_times`](crate::scheduler::assign_turnaround_times).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Identifier, unique within a batch.
    pub id: u32,
    /// Tick at which the process becomes eligible to run.
    pub arrival_time: i64,
    /// Total CPU ticks required.
    pub burst_time: i64,
    /// Scheduling priority (higher = more important).
    #[serde(default)]
    pub priority: i32,
    /// Ticks spent ready but not running. Computed.
    #[serde(default)]
    pub waiting_time: i64,
    /// `burst_time + waiting_time`. Computed.
    #[serde(default)]
    pub turnaround_time: i64,
}

impl Process {
    /// Creates a process arriving at t=0 with a burst of one tick.
    pub fn new(id: u32) -> Self {
        Self {
            id,
            arrival_time: 0,
            burst_time: 1,
            priority: 0,
            waiting_time: 0,
            turnaround_time: 0,
        }
    }

    /// Sets the arrival time.
    pub fn with_arrival_time(mut self, arrival_time: i64) -> Self {
        self.arrival_time = arrival_time;
        self
    }

    /// Sets the burst time.
    pub fn with_burst_time(mut self, burst_time: i64) -> Self {
        self.burst_time = burst_time;
        self
    }

    /// Sets the priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Tick at which the process finished (`arrival + turnaround`).
    ///
    /// Only meaningful after a full scheduling run.
    #[inline]
    pub fn completion_time(&self) -> i64 {
        self.arrival_time + self.turnaround_time
    }

    /// Clears both computed metrics.
    pub fn reset_metrics(&mut self) {
        self.waiting_time = 0;
        self.turnaround_time = 0;
    }
}
