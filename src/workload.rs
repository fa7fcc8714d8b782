//! Seeded synthetic batches.
//!
//! Generates a fixed batch up front: arrival times are drawn once and do not
//! change while the batch is scheduled. The same seed always yields the same
//! batch.

use std::ops::RangeInclusive;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::Process;

/// Parameters for [`generate`].
#[derive(Debug, Clone)]
pub struct WorkloadSpec {
    /// Number of processes (ids are `u32`, so at most `u32::MAX`).
    pub count: usize,
    /// Arrival times are drawn from `0..=max_arrival`.
    pub max_arrival: i64,
    /// Burst time range (lower bound must be >= 1).
    pub burst: RangeInclusive<i64>,
    /// Priority range.
    pub priority: RangeInclusive<i32>,
    /// RNG seed.
    pub seed: u64,
}

impl WorkloadSpec {
    /// Creates a spec for `count` processes with default ranges.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            max_arrival: 20,
            burst: 1..=10,
            priority: 0..=5,
            seed: 0,
        }
    }

    /// Sets the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the latest possible arrival time.
    pub fn with_max_arrival(mut self, max_arrival: i64) -> Self {
        self.max_arrival = max_arrival.max(0);
        self
    }

    /// Sets the burst time range, clamping the lower bound to 1.
    pub fn with_burst(mut self, burst: RangeInclusive<i64>) -> Self {
        let lo = (*burst.start()).max(1);
        let hi = (*burst.end()).max(lo);
        self.burst = lo..=hi;
        self
    }

    /// Sets the priority range. An inverted range collapses to its start.
    pub fn with_priority(mut self, priority: RangeInclusive<i32>) -> Self {
        let lo = *priority.start();
        let hi = (*priority.end()).max(lo);
        self.priority = lo..=hi;
        self
    }
}

/// Generates a batch with ids `1..=count`, in id order.
pub fn generate(spec: &WorkloadSpec) -> Vec<Process> {
    let mut rng = StdRng::seed_from_u64(spec.seed);

    (1..=spec.count)
        .map(|id| {
            Process::new(id as u32)
                .with_arrival_time(rng.random_range(0..=spec.max_arrival))
                .with_burst_time(rng.random_range(spec.burst.clone()))
                .with_priority(rng.random_range(spec.priority.clone()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate_batch;

    #[test]
    fn test_generate_deterministic() {
        let spec = WorkloadSpec::new(25).with_seed(99);
        assert_eq!(generate(&spec), generate(&spec));
    }

    #[test]
    fn test_generate_respects_ranges() {
        let spec = WorkloadSpec::new(200)
            .with_seed(3)
            .with_max_arrival(7)
            .with_burst(2..=4)
            .with_priority(-1..=1);
        let batch = generate(&spec);

        assert_eq!(batch.len(), 200);
        assert!(validate_batch(&batch).is_ok());
        for (i, p) in batch.iter().enumerate() {
            assert_eq!(p.id, i as u32 + 1);
            assert!((0..=7).contains(&p.arrival_time));
            assert!((2..=4).contains(&p.burst_time));
            assert!((-1..=1).contains(&p.priority));
        }
    }

    #[test]
    fn test_burst_lower_bound_clamped() {
        let spec = WorkloadSpec::new(50).with_burst(0..=0);
        assert_eq!(spec.burst, 1..=1);
        assert!(generate(&spec).iter().all(|p| p.burst_time == 1));
    }

    #[test]
    fn test_inverted_priority_range_normalized() {
        let spec = WorkloadSpec::new(3).with_priority(5..=1);
        assert_eq!(spec.priority, 5..=5);
        assert!(generate(&spec).iter().all(|p| p.priority == 5));
    }

    #[test]
    fn test_generate_empty() {
        assert!(generate(&WorkloadSpec::new(0)).is_empty());
    }
}
