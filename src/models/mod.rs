//! Scheduling domain models.
//!
//! Provides the process record consumed and annotated by the schedulers,
//! and the aggregate metrics derived from a finished run.
//!
//! # Field Mappings
//!
//! | schedsim | Textbook | Linux |
//! |----------|----------|-------|
//! | `arrival_time` | Arrival | fork/wakeup time |
//! | `burst_time` | CPU burst | runtime |
//! | `priority` | Priority | nice (inverted) |
//! | `waiting_time` | Waiting time | time on runqueue |

mod metrics;
mod process;

pub use metrics::BatchMetrics;
pub use process::Process;
