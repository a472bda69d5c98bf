//! Built-in dispatching rules.
//!
//! # Rules
//!
//! | Rule | Key | Used by |
//! |------|-----|---------|
//! | FIFO | arrival time | FCFS, tie-breaks |
//! | SPT | burst time | SJF |
//! | PRIORITY | priority value | Priority scheduling |
//!
//! # Score Convention
//! All rules return lower scores for processes that should run first.

use super::{DispatchingRule, RuleScore};
use crate::models::Process;

/// First In First Out.
///
/// Prioritizes processes that arrived earlier.
#[derive(Debug, Clone, Copy)]
pub struct Fifo;

impl DispatchingRule for Fifo {
    fn name(&self) -> &'static str {
        "FIFO"
    }

    fn evaluate(&self, process: &Process) -> RuleScore {
        process.arrival
    }

    fn description(&self) -> &'static str {
        "First In First Out"
    }
}

/// Shortest Processing Time (shortest job first).
///
/// Prioritizes processes with the smallest burst. Minimizes average
/// waiting time among non-preemptive policies when all jobs are ready.
///
/// # Reference
/// Smith (1956), optimal for minimizing mean flow time on single machine.
#[derive(Debug, Clone, Copy)]
pub struct Spt;

impl DispatchingRule for Spt {
    fn name(&self) -> &'static str {
        "SPT"
    }

    fn evaluate(&self, process: &Process) -> RuleScore {
        process.burst
    }

    fn description(&self) -> &'static str {
        "Shortest Processing Time"
    }
}

/// Process priority.
///
/// Lower priority value = more urgent, so the value is the score as-is.
#[derive(Debug, Clone, Copy)]
pub struct Priority;

impl DispatchingRule for Priority {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn evaluate(&self, process: &Process) -> RuleScore {
        RuleScore::from(process.priority)
    }

    fn description(&self) -> &'static str {
        "Process Priority"
    }
}
