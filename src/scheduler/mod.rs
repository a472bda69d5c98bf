//! CPU scheduling policies and KPI evaluation.
//!
//! Provides four classical single-CPU disciplines over a discrete logical
//! clock, plus schedule quality metrics.
//!
//! # Policies
//!
//! | Policy | Preemptive | Order |
//! |--------|-----------|-------|
//! | `FcfsScheduler` | no | `(arrival, input order)` |
//! | `SjfScheduler` | no | arrived set by `(burst, arrival, id)` |
//! | `RoundRobinScheduler` | at quantum expiry | FIFO ready queue |
//! | `PriorityScheduler` | no | `(priority, arrival, id)` |
//!
//! Each policy is a pure function from a workload to a [`Schedule`]: the
//! input slice is never mutated, and results land on fresh copies.
//!
//! # KPI
//!
//! `ScheduleKpi` computes average waiting, turnaround and response time,
//! makespan, utilization, throughput and context switches.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Arpaci-Dusseau (2018), "Operating Systems: Three Easy Pieces", Ch. 7

mod fcfs;
mod idle;
mod kpi;
mod priority;
mod request;
mod round_robin;
mod run;
mod sjf;

pub use fcfs::FcfsScheduler;
pub use idle::IdleStrategy;
pub use kpi::ScheduleKpi;
pub use priority::{PriorityMode, PriorityScheduler};
pub use request::{simulate, SimulationRequest};
pub use round_robin::RoundRobinScheduler;
pub use sjf::SjfScheduler;

use crate::models::{Algorithm, Process, Schedule};
use crate::validation::ValidationError;

/// Outcome of one policy run: a finished schedule, or every problem found
/// with the input.
pub type ScheduleResult = Result<Schedule, Vec<ValidationError>>;

/// A single-CPU scheduling policy.
pub trait CpuScheduler {
    /// Algorithm this policy implements.
    fn algorithm(&self) -> Algorithm;

    /// Runs the workload to completion.
    ///
    /// Rejects invalid workloads (zero burst, negative arrival, duplicate
    /// IDs) before doing any work. An empty workload yields an empty
    /// schedule.
    fn schedule(&self, processes: &[Process]) -> ScheduleResult;
}
