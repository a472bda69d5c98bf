//! First-Come-First-Served scheduling.
//!
//! # Algorithm
//!
//! 1. Order processes by arrival time; ties keep input order.
//! 2. Run each to completion in that order, idling until it arrives if needed.
//!
//! # Complexity
//! O(n log n) for the sort, O(n) for the run.

use log::info;

use super::run::run_in_order;
use super::{CpuScheduler, ScheduleResult};
use crate::dispatching::RuleEngine;
use crate::models::{Algorithm, Process, Schedule};
use crate::validation::validate_processes;

/// Non-preemptive FCFS scheduler.
///
/// # Example
///
/// ```
/// use cpu_sched::models::Process;
/// use cpu_sched::scheduler::{CpuScheduler, FcfsScheduler};
///
/// let processes = vec![Process::new(1, 0, 5), Process::new(2, 1, 3)];
/// let schedule = FcfsScheduler::new().schedule(&processes).unwrap();
/// assert_eq!(schedule.process(2).unwrap().waiting_time, 4);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FcfsScheduler;

impl FcfsScheduler {
    /// Creates a new scheduler.
    pub fn new() -> Self {
        Self
    }
}

impl CpuScheduler for FcfsScheduler {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Fcfs
    }

    fn schedule(&self, processes: &[Process]) -> ScheduleResult {
        validate_processes(processes)?;
        info!("FCFS: scheduling {} process(es)", processes.len());

        let order = RuleEngine::fcfs().sort_indices(processes);
        let (finished, timeline) = run_in_order(processes, &order);

        info!("FCFS: finished at t={}", timeline.end_time());
        Ok(Schedule::new(Algorithm::Fcfs, finished, timeline))
    }
}
