//! Turnaround aggregator.

use crate::models::Process;

/// Sets `turnaround_time = burst_time + waiting_time` for every process.
///
/// Must run after a scheduler has finalized waiting times; it is the same
/// for every discipline.
pub fn assign_turnaround_times(processes: &mut [Process]) {
    for p in processes.iter_mut() {
        p.turnaround_time = p.burst_time + p.waiting_time;
    }
}
