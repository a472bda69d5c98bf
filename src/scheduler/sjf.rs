//! Shortest-Job-First scheduling (non-preemptive).
//!
//! # Algorithm
//!
//! At each decision point, among processes that have arrived and are not
//! finished, run the one with the smallest burst to completion. Ties go
//! to the earliest arrival, then the lowest ID. If nothing has arrived
//! the clock advances per [`IdleStrategy`].
//!
//! # Complexity
//! O(n²): one scan of the workload per completion.
//!
//! # Termination
//! Every process eventually arrives, and each decision either completes
//! a process or strictly advances the clock toward the next arrival.

use log::info;

use super::run::run_ready_first;
use super::{CpuScheduler, IdleStrategy, ScheduleResult};
use crate::dispatching::RuleEngine;
use crate::models::{Algorithm, Process, Schedule};
use crate::validation::validate_processes;

/// Non-preemptive SJF scheduler.
#[derive(Debug, Clone, Default)]
pub struct SjfScheduler {
    idle: IdleStrategy,
}

impl SjfScheduler {
    /// Creates a new scheduler that jumps over idle gaps.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the idle clock strategy.
    pub fn with_idle_strategy(mut self, idle: IdleStrategy) -> Self {
        self.idle = idle;
        self
    }
}

impl CpuScheduler for SjfScheduler {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Sjf
    }

    fn schedule(&self, processes: &[Process]) -> ScheduleResult {
        validate_processes(processes)?;
        info!("SJF: scheduling {} process(es)", processes.len());

        let (finished, timeline) = run_ready_first(processes, &RuleEngine::sjf(), self.idle);

        info!("SJF: finished at t={}", timeline.end_time());
        Ok(Schedule::new(Algorithm::Sjf, finished, timeline))
    }
}
