//! Schedule (simulation result) model.
//!
//! A schedule is the output of one policy run: the processes with their
//! computed results, plus the timeline that produced them.

use serde::{Deserialize, Serialize};

use super::{Algorithm, Process, ProcessId, Ticks, Timeline};

/// Result of running one scheduling policy to completion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    /// Policy that produced this schedule.
    pub algorithm: Algorithm,
    /// Processes in input order, with results filled in.
    pub processes: Vec<Process>,
    /// Execution history.
    pub timeline: Timeline,
}

impl Schedule {
    /// Creates a schedule from finished processes and their timeline.
    pub fn new(algorithm: Algorithm, processes: Vec<Process>, timeline: Timeline) -> Self {
        Self {
            algorithm,
            processes,
            timeline,
        }
    }

    /// Finds a process by ID.
    pub fn process(&self, id: ProcessId) -> Option<&Process> {
        self.processes.iter().find(|p| p.id == id)
    }

    /// Processes sorted by ID ascending.
    pub fn processes_by_id(&self) -> Vec<&Process> {
        let mut sorted: Vec<&Process> = self.processes.iter().collect();
        sorted.sort_by_key(|p| p.id);
        sorted
    }

    /// Number of processes.
    pub fn process_count(&self) -> usize {
        self.processes.len()
    }

    /// Latest completion time (0 if empty).
    pub fn makespan(&self) -> Ticks {
        self.processes
            .iter()
            .map(|p| p.completion_time)
            .max()
            .unwrap_or(0)
    }

    /// Process IDs in the order they finished.
    pub fn completion_order(&self) -> Vec<ProcessId> {
        let mut order: Vec<&Process> = self.processes.iter().collect();
        order.sort_by_key(|p| (p.completion_time, p.id));
        order.into_iter().map(|p| p.id).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Schedule {
        let mut p1 = Process::new(2, 0, 3);
        p1.mark_started(0);
        p1.mark_completed(3);
        let mut p2 = Process::new(1, 1, 2);
        p2.mark_started(3);
        p2.mark_completed(5);

        let mut timeline = Timeline::new();
        timeline.push(2, 3);
        timeline.push(1, 5);
        Schedule::new(Algorithm::Fcfs, vec![p1, p2], timeline)
    }

    #[test]
    fn test_lookup_and_sorting() {
        let schedule = sample();
        assert_eq!(schedule.process(1).unwrap().completion_time, 5);
        assert!(schedule.process(9).is_none());

        let ids: Vec<_> = schedule.processes_by_id().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(schedule.completion_order(), vec![2, 1]);
    }

    #[test]
    fn test_makespan() {
        assert_eq!(sample().makespan(), 5);
        let empty = Schedule::new(Algorithm::Sjf, Vec::new(), Timeline::new());
        assert_eq!(empty.makespan(), 0);
        assert_eq!(empty.process_count(), 0);
    }
}
