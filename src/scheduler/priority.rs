//! Priority scheduling (non-preemptive).
//!
//! Lower priority value = more urgent. Ties go to the earlier arrival,
//! then the lower ID.
//!
//! # Modes
//!
//! - [`PriorityMode::Static`] (default): sort the whole workload by
//!   priority once, then run it in that fixed order like FCFS. A process
//!   that arrives early with a low priority still waits behind a more
//!   urgent process that arrives much later.
//! - [`PriorityMode::Dynamic`]: re-evaluate the arrived set at each
//!   completion, like SJF with priority as the key. This is the textbook
//!   non-preemptive variant and must be selected explicitly.

use log::info;
use serde::{Deserialize, Serialize};

use super::run::{run_in_order, run_ready_first};
use super::{CpuScheduler, IdleStrategy, ScheduleResult};
use crate::dispatching::RuleEngine;
use crate::models::{Algorithm, Process, Schedule};
use crate::validation::validate_processes;

/// How priority order is decided.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriorityMode {
    /// One up-front sort; arrival times only delay, never reorder.
    #[default]
    Static,
    /// Pick the most urgent arrived process at each completion.
    Dynamic,
}

/// Non-preemptive priority scheduler.
#[derive(Debug, Clone, Default)]
pub struct PriorityScheduler {
    mode: PriorityMode,
    idle: IdleStrategy,
}

impl PriorityScheduler {
    /// Creates a static-order priority scheduler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the ordering mode.
    pub fn with_mode(mut self, mode: PriorityMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the idle clock strategy (dynamic mode only).
    pub fn with_idle_strategy(mut self, idle: IdleStrategy) -> Self {
        self.idle = idle;
        self
    }

    /// Ordering mode.
    pub fn mode(&self) -> PriorityMode {
        self.mode
    }
}

impl CpuScheduler for PriorityScheduler {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Priority
    }

    fn schedule(&self, processes: &[Process]) -> ScheduleResult {
        validate_processes(processes)?;
        info!(
            "Priority ({:?}): scheduling {} process(es)",
            self.mode,
            processes.len()
        );

        let engine = RuleEngine::priority();
        let (finished, timeline) = match self.mode {
            PriorityMode::Static => run_in_order(processes, &engine.sort_indices(processes)),
            PriorityMode::Dynamic => run_ready_first(processes, &engine, self.idle),
        };

        info!("Priority: finished at t={}", timeline.end_time());
        Ok(Schedule::new(Algorithm::Priority, finished, timeline))
    }
}
