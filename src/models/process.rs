//! Process (job) model.
//!
//! A process is a unit of CPU work with a fixed service demand. Static
//! attributes come from the workload; computed results are filled in by
//! whichever scheduling policy runs it.
//!
//! # Time Representation
//! All times are integer ticks of a logical clock starting at t=0.

use serde::{Deserialize, Serialize};

/// Logical clock value (ticks).
pub type Ticks = i64;

/// Process identifier (1-based, unique within a run).
pub type ProcessId = u32;

/// A process to be scheduled.
///
/// Invariants once a policy has finished with it:
/// - `turnaround_time == completion_time - arrival`
/// - `turnaround_time == waiting_time + burst`
/// - `completion_time >= arrival + burst`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Unique process identifier.
    pub id: ProcessId,
    /// Time the process becomes eligible to run.
    pub arrival: Ticks,
    /// Total CPU time required.
    pub burst: Ticks,
    /// Scheduling priority (lower = more urgent). Only used by priority scheduling.
    #[serde(default)]
    pub priority: i32,
    /// Time spent ready but not running.
    #[serde(default)]
    pub waiting_time: Ticks,
    /// Time from arrival to completion.
    #[serde(default)]
    pub turnaround_time: Ticks,
    /// Time the process finished its last slice.
    #[serde(default)]
    pub completion_time: Ticks,
    /// Time the process was first dispatched. `None` = never ran.
    #[serde(default)]
    pub start_time: Option<Ticks>,
}

impl Process {
    /// Creates a process with no results recorded.
    pub fn new(id: ProcessId, arrival: Ticks, burst: Ticks) -> Self {
        Self {
            id,
            arrival,
            burst,
            priority: 0,
            waiting_time: 0,
            turnaround_time: 0,
            completion_time: 0,
            start_time: None,
        }
    }

    /// Sets the scheduling priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Records the first dispatch. Later dispatches are ignored.
    pub(crate) fn mark_started(&mut self, now: Ticks) {
        if self.start_time.is_none() {
            self.start_time = Some(now);
        }
    }

    /// Records completion at `now` and derives turnaround and waiting time.
    pub(crate) fn mark_completed(&mut self, now: Ticks) {
        self.completion_time = now;
        self.turnaround_time = now - self.arrival;
        self.waiting_time = self.turnaround_time - self.burst;
    }

    /// Response time: first dispatch minus arrival.
    pub fn response_time(&self) -> Option<Ticks> {
        self.start_time.map(|s| s - self.arrival)
    }

    /// Whether the process has been run to completion.
    pub fn is_finished(&self) -> bool {
        self.start_time.is_some() && self.completion_time >= self.arrival + self.burst
    }

    /// Returns a copy with all computed results cleared.
    pub fn reset(&self) -> Self {
        Self::new(self.id, self.arrival, self.burst).with_priority(self.priority)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_builder() {
        let p = Process::new(3, 4, 10).with_priority(2);
        assert_eq!(p.id, 3);
        assert_eq!(p.arrival, 4);
        assert_eq!(p.burst, 10);
        assert_eq!(p.priority, 2);
        assert_eq!(p.waiting_time, 0);
        assert_eq!(p.completion_time, 0);
        assert!(p.start_time.is_none());
        assert!(!p.is_finished());
    }

    #[test]
    fn test_completion_derives_metrics() {
        let mut p = Process::new(1, 2, 5);
        p.mark_started(4);
        p.mark_completed(9);

        assert_eq!(p.completion_time, 9);
        assert_eq!(p.turnaround_time, 7);
        assert_eq!(p.waiting_time, 2);
        assert_eq!(p.turnaround_time, p.waiting_time + p.burst);
        assert_eq!(p.response_time(), Some(2));
        assert!(p.is_finished());
    }

    #[test]
    fn test_first_start_wins() {
        let mut p = Process::new(1, 0, 4);
        p.mark_started(1);
        p.mark_started(6);
        assert_eq!(p.start_time, Some(1));
    }

    #[test]
    fn test_reset_keeps_inputs() {
        let mut p = Process::new(7, 1, 3).with_priority(5);
        p.mark_started(1);
        p.mark_completed(4);

        let fresh = p.reset();
        assert_eq!(fresh, Process::new(7, 1, 3).with_priority(5));
    }

    #[test]
    fn test_deserialize_defaults() {
        let p: Process = serde_json::from_str(r#"{"id":1,"arrival":0,"burst":5}"#).unwrap();
        assert_eq!(p, Process::new(1, 0, 5));
    }
}
