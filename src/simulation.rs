//! Simulation driver.
//!
//! Runs each configured algorithm over its own copy of one input batch.
//! The input is never mutated, so runs cannot contaminate each other and
//! can be repeated.

use crate::config::SimulationConfig;
use crate::error::Result;
use crate::models::Process;
use crate::report::Report;
use crate::scheduler::{self, Algorithm};

/// A batch plus the configuration to run it under.
///
/// # Example
/// ```
/// use schedsim::config::SimulationConfig;
/// use schedsim::models::Process;
/// use schedsim::simulation::Simulation;
///
/// let batch = vec![
///     Process::new(1).with_burst_time(5),
///     Process::new(2).with_burst_time(3),
/// ];
/// let sim = Simulation::new(batch, SimulationConfig::default()).unwrap();
/// let reports = sim.run_all().unwrap();
/// assert_eq!(reports.len(), 4);
/// assert_eq!(reports[3].title, "RR Quantum = 2");
/// ```
#[derive(Debug, Clone)]
pub struct Simulation {
    batch: Vec<Process>,
    config: SimulationConfig,
}

impl Simulation {
    /// Creates a simulation after checking the configuration.
    pub fn new(batch: Vec<Process>, config: SimulationConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { batch, config })
    }

    /// The pristine input batch.
    pub fn batch(&self) -> &[Process] {
        &self.batch
    }

    /// The active configuration.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Runs one algorithm on a fresh copy of the batch.
    pub fn run(&self, algorithm: Algorithm) -> Result<Report> {
        let scheduler = algorithm.scheduler(self.config.quantum)?;
        let annotated = scheduler::run(scheduler.as_ref(), self.batch.clone());
        let report = Report::new(scheduler.name(), annotated);

        tracing::info!(
            algorithm = %report.title,
            processes = report.metrics.process_count,
            avg_waiting = ?report.metrics.avg_waiting_time,
            avg_turnaround = ?report.metrics.avg_turnaround_time,
            "algorithm finished"
        );
        Ok(report)
    }

    /// Runs every configured algorithm, in configuration order.
    pub fn run_all(&self) -> Result<Vec<Report>> {
        self.config
            .algorithms
            .iter()
            .map(|&algorithm| self.run(algorithm))
            .collect()
    }
}
