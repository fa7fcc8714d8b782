//! Algorithm selection by name.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{Fcfs, PriorityScheduler, RoundRobin, Scheduler, ShortestRemainingTime};
use crate::error::{Error, Result};

/// The scheduling disciplines available to a simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// First-Come-First-Served.
    Fcfs,
    /// Shortest remaining time first.
    Sjf,
    /// Non-preemptive priority.
    Priority,
    /// Round-Robin with the configured quantum.
    #[serde(alias = "rr", alias = "round-robin")]
    RoundRobin,
}

impl Algorithm {
    /// All disciplines, in the order the simulator reports them.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Fcfs,
        Algorithm::Sjf,
        Algorithm::Priority,
        Algorithm::RoundRobin,
    ];

    /// Builds the scheduler. `quantum` is only used by Round-Robin.
    ///
    /// # Errors
    /// [`Error::InvalidQuantum`] for Round-Robin with `quantum < 1`.
    pub fn scheduler(self, quantum: i64) -> Result<Box<dyn Scheduler>> {
        Ok(match self {
            Algorithm::Fcfs => Box::new(Fcfs),
            Algorithm::Sjf => Box::new(ShortestRemainingTime),
            Algorithm::Priority => Box::new(PriorityScheduler),
            Algorithm::RoundRobin => Box::new(RoundRobin::new(quantum)?),
        })
    }

    fn as_str(self) -> &'static str {
        match self {
            Algorithm::Fcfs => "fcfs",
            Algorithm::Sjf => "sjf",
            Algorithm::Priority => "priority",
            Algorithm::RoundRobin => "roundrobin",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "fcfs" => Ok(Algorithm::Fcfs),
            "sjf" | "srtf" => Ok(Algorithm::Sjf),
            "priority" | "pri" => Ok(Algorithm::Priority),
            "rr" | "roundrobin" | "round-robin" => Ok(Algorithm::RoundRobin),
            other => Err(Error::Config(format!("unknown algorithm '{other}'"))),
        }
    }
}
