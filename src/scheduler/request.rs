//! Simulation request and dispatch.
//!
//! A [`SimulationRequest`] bundles everything one run needs: the
//! algorithm selector, the workload and the per-algorithm parameters.
//! It is serde-(de)serializable, so a JSON file can describe a full run.

use log::info;
use serde::{Deserialize, Serialize};

use super::{
    CpuScheduler, FcfsScheduler, IdleStrategy, PriorityMode, PriorityScheduler,
    RoundRobinScheduler, ScheduleResult, SjfScheduler,
};
use crate::models::{Algorithm, Process, Ticks};
use crate::validation::{validate_quantum, ValidationError};

/// Input container for one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationRequest {
    /// Policy to run.
    pub algorithm: Algorithm,
    /// Workload.
    pub processes: Vec<Process>,
    /// Round-Robin time quantum. Required for Round-Robin, ignored otherwise.
    #[serde(default)]
    pub quantum: Option<Ticks>,
    /// Idle clock strategy.
    #[serde(default)]
    pub idle_strategy: IdleStrategy,
    /// Priority ordering mode.
    #[serde(default)]
    pub priority_mode: PriorityMode,
}

impl SimulationRequest {
    /// Creates a new request with default parameters.
    pub fn new(algorithm: Algorithm, processes: Vec<Process>) -> Self {
        Self {
            algorithm,
            processes,
            quantum: None,
            idle_strategy: IdleStrategy::default(),
            priority_mode: PriorityMode::default(),
        }
    }

    /// Sets the Round-Robin time quantum.
    pub fn with_quantum(mut self, quantum: Ticks) -> Self {
        self.quantum = Some(quantum);
        self
    }

    /// Sets the idle clock strategy.
    pub fn with_idle_strategy(mut self, idle_strategy: IdleStrategy) -> Self {
        self.idle_strategy = idle_strategy;
        self
    }

    /// Sets the priority ordering mode.
    pub fn with_priority_mode(mut self, priority_mode: PriorityMode) -> Self {
        self.priority_mode = priority_mode;
        self
    }

    /// Builds the scheduler this request selects.
    ///
    /// Fails only when Round-Robin is selected without a positive quantum.
    pub fn scheduler(&self) -> Result<Box<dyn CpuScheduler>, ValidationError> {
        let scheduler: Box<dyn CpuScheduler> = match self.algorithm {
            Algorithm::Fcfs => Box::new(FcfsScheduler::new()),
            Algorithm::Sjf => Box::new(SjfScheduler::new().with_idle_strategy(self.idle_strategy)),
            Algorithm::RoundRobin => {
                let quantum = validate_quantum(self.quantum)?;
                Box::new(RoundRobinScheduler::new(quantum).with_idle_strategy(self.idle_strategy))
            }
            Algorithm::Priority => Box::new(
                PriorityScheduler::new()
                    .with_mode(self.priority_mode)
                    .with_idle_strategy(self.idle_strategy),
            ),
        };
        Ok(scheduler)
    }
}

/// Runs the selected policy over the request's workload.
///
/// # Example
///
/// ```
/// use cpu_sched::models::{Algorithm, Process};
/// use cpu_sched::scheduler::{simulate, SimulationRequest};
///
/// let request = SimulationRequest::new(
///     Algorithm::RoundRobin,
///     vec![Process::new(1, 0, 4), Process::new(2, 0, 3)],
/// )
/// .with_quantum(2);
///
/// let schedule = simulate(&request).unwrap();
/// assert_eq!(schedule.timeline.len(), 4);
/// ```
pub fn simulate(request: &SimulationRequest) -> ScheduleResult {
    let scheduler = request.scheduler().map_err(|e| vec![e])?;
    info!(
        "simulating {} over {} process(es)",
        scheduler.algorithm(),
        request.processes.len()
    );
    scheduler.schedule(&request.processes)
}
