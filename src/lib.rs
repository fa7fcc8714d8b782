//! CPU scheduling simulator.
//!
//! Computes per-process waiting and turnaround times for a fixed batch of
//! processes under four classical single-CPU disciplines.
//!
//! # Modules
//!
//! - **`models`**: `Process` record and `BatchMetrics`
//! - **`scheduler`**: `Scheduler` trait, FCFS / SJF / Priority / Round-Robin,
//!   and the turnaround aggregator
//! - **`validation`**: Input integrity checks (duplicate IDs, burst/arrival bounds)
//! - **`loader`**: Batch parsing from plain-text or JSON input
//! - **`report`**: Per-run metrics table
//! - **`config`**: Quantum and algorithm selection
//! - **`simulation`**: Runs every configured algorithm on its own copy of a batch
//! - **`workload`**: Seeded synthetic batches
//!
//! # Example
//!
//! ```
//! use schedsim::models::Process;
//! use schedsim::scheduler::{self, Fcfs};
//!
//! let batch = vec![
//!     Process::new(1).with_arrival_time(0).with_burst_time(4),
//!     Process::new(2).with_arrival_time(1).with_burst_time(3),
//! ];
//! let done = scheduler::run(&Fcfs, batch);
//! assert_eq!(done[1].waiting_time, 3);
//! assert_eq!(done[1].turnaround_time, 6);
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 3

pub mod config;
pub mod error;
pub mod loader;
pub mod models;
pub mod report;
pub mod scheduler;
pub mod simulation;
pub mod validation;
pub mod workload;

pub use error::{Error, Result};
