//! Simulation configuration.
//!
//! Can be built in code, read from a JSON file, or assembled from
//! command-line flags:
//!
//! ```json
//! { "quantum": 4, "algorithms": ["fcfs", "rr"] }
//! ```
//!
//! Missing fields take their defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::scheduler::{Algorithm, DEFAULT_QUANTUM};

/// Which algorithms to run and how.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Round-Robin time quantum (ticks, >= 1).
    pub quantum: i64,
    /// Algorithms to run, in report order.
    pub algorithms: Vec<Algorithm>,
}

impl SimulationConfig {
    /// Creates the default configuration: all four algorithms, quantum 2.
    pub fn new() -> Self {
        Self {
            quantum: DEFAULT_QUANTUM,
            algorithms: Algorithm::ALL.to_vec(),
        }
    }

    /// Sets the Round-Robin quantum.
    pub fn with_quantum(mut self, quantum: i64) -> Self {
        self.quantum = quantum;
        self
    }

    /// Replaces the algorithm selection.
    pub fn with_algorithms(mut self, algorithms: Vec<Algorithm>) -> Self {
        self.algorithms = algorithms;
        self
    }

    /// Reads a JSON configuration file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the configuration.
    ///
    /// The quantum is only checked when Round-Robin is selected.
    pub fn validate(&self) -> Result<()> {
        if self.algorithms.is_empty() {
            return Err(Error::Config("no algorithms selected".to_string()));
        }
        if self.algorithms.contains(&Algorithm::RoundRobin) && self.quantum < 1 {
            return Err(Error::InvalidQuantum(self.quantum));
        }
        Ok(())
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self::new()
    }
}
