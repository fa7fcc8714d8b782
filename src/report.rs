//! Per-run metrics report.
//!
//! Renders an annotated batch as the classic table:
//!
//! ```text
//! *********
//! FCFS
//!     Processes   Burst time  Waiting time    Turn around time
//!     1           4           0               4
//!
//! Average waiting time = 0.00
//! Average turn around time = 4.00
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::{BatchMetrics, Process};

/// The outcome of one scheduling run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Scheduler name (e.g., "SJF", "RR Quantum = 2").
    pub title: String,
    /// Annotated batch, in the order the scheduler left it.
    pub processes: Vec<Process>,
    /// Aggregates over `processes`.
    pub metrics: BatchMetrics,
}

impl Report {
    /// Builds a report, computing metrics from the batch.
    pub fn new(title: impl Into<String>, processes: Vec<Process>) -> Self {
        let metrics = BatchMetrics::calculate(&processes);
        Self {
            title: title.into(),
            processes,
            metrics,
        }
    }
}

fn fmt_avg(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.2}"),
        None => "n/a".to_string(),
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "*********")?;
        writeln!(f, "{}", self.title)?;
        writeln!(f, "\tProcesses\tBurst time\tWaiting time\tTurn around time")?;
        for p in &self.processes {
            writeln!(
                f,
                "\t{}\t\t{}\t\t{}\t\t{}",
                p.id, p.burst_time, p.waiting_time, p.turnaround_time
            )?;
        }
        writeln!(f)?;
        writeln!(
            f,
            "Average waiting time = {}",
            fmt_avg(self.metrics.avg_waiting_time)
        )?;
        writeln!(
            f,
            "Average turn around time = {}",
            fmt_avg(self.metrics.avg_turnaround_time)
        )
    }
}
