//! Round-Robin scheduling.
//!
//! # Algorithm
//!
//! A FIFO ready queue of process indices, a membership flag per process,
//! and a remaining-time counter per process.
//!
//! 1. Enqueue every process that has arrived at t=0, in index order.
//! 2. Pop the head, run it for `min(quantum, remaining)`, advance the clock.
//! 3. Enqueue every other unfinished, not-yet-queued process that has
//!    arrived by now, in index order.
//! 4. If the popped process still has work, re-enqueue it **behind** those
//!    arrivals; otherwise record its completion.
//! 5. If the queue is empty but work remains, advance the clock per
//!    [`IdleStrategy`] until something arrives.
//!
//! Step 4's ordering matters: processes that arrived during a slice cut
//! ahead of the process that just ran.

use std::collections::VecDeque;

use log::{debug, info};

use super::{CpuScheduler, IdleStrategy, ScheduleResult};
use crate::models::{Algorithm, Process, Schedule, Ticks, Timeline};
use crate::validation::{validate_processes, validate_quantum};

/// Round-Robin scheduler with a fixed time quantum.
///
/// # Example
///
/// ```
/// use cpu_sched::models::Process;
/// use cpu_sched::scheduler::{CpuScheduler, RoundRobinScheduler};
///
/// let processes = vec![Process::new(1, 0, 4), Process::new(2, 0, 3)];
/// let schedule = RoundRobinScheduler::new(2).schedule(&processes).unwrap();
/// assert_eq!(schedule.process(1).unwrap().completion_time, 6);
/// assert_eq!(schedule.process(2).unwrap().completion_time, 7);
/// ```
#[derive(Debug, Clone)]
pub struct RoundRobinScheduler {
    quantum: Ticks,
    idle: IdleStrategy,
}

impl RoundRobinScheduler {
    /// Creates a scheduler with the given quantum.
    ///
    /// The quantum is checked when scheduling; a non-positive value is
    /// rejected there.
    pub fn new(quantum: Ticks) -> Self {
        Self {
            quantum,
            idle: IdleStrategy::default(),
        }
    }

    /// Sets the idle clock strategy.
    pub fn with_idle_strategy(mut self, idle: IdleStrategy) -> Self {
        self.idle = idle;
        self
    }

    /// Time quantum.
    pub fn quantum(&self) -> Ticks {
        self.quantum
    }
}

/// Mutable state of one Round-Robin run.
struct ReadyQueue {
    queue: VecDeque<usize>,
    queued: Vec<bool>,
    remaining: Vec<Ticks>,
}

impl ReadyQueue {
    fn new(processes: &[Process]) -> Self {
        Self {
            queue: VecDeque::with_capacity(processes.len()),
            queued: vec![false; processes.len()],
            remaining: processes.iter().map(|p| p.burst).collect(),
        }
    }

    fn pop(&mut self) -> Option<usize> {
        let idx = self.queue.pop_front()?;
        self.queued[idx] = false;
        Some(idx)
    }

    fn push(&mut self, idx: usize) {
        debug_assert!(!self.queued[idx], "process index {idx} queued twice");
        self.queued[idx] = true;
        self.queue.push_back(idx);
    }

    /// Enqueues arrived, unfinished, unqueued processes in index order,
    /// skipping `running`.
    fn admit_arrivals(&mut self, processes: &[Process], now: Ticks, running: Option<usize>) {
        for (idx, process) in processes.iter().enumerate() {
            if Some(idx) != running
                && !self.queued[idx]
                && self.remaining[idx] > 0
                && process.arrival <= now
            {
                debug!("t={now} P{} enters ready queue", process.id);
                self.push(idx);
            }
        }
    }

    /// Earliest arrival among unfinished processes.
    fn next_arrival(&self, processes: &[Process]) -> Option<Ticks> {
        processes
            .iter()
            .zip(&self.remaining)
            .filter(|(_, left)| **left > 0)
            .map(|(p, _)| p.arrival)
            .min()
    }
}

impl CpuScheduler for RoundRobinScheduler {
    fn algorithm(&self) -> Algorithm {
        Algorithm::RoundRobin
    }

    fn schedule(&self, processes: &[Process]) -> ScheduleResult {
        let (quantum, mut errors) = match validate_quantum(Some(self.quantum)) {
            Ok(quantum) => (quantum, Vec::new()),
            Err(e) => (self.quantum, vec![e]),
        };
        if let Err(workload_errors) = validate_processes(processes) {
            errors.extend(workload_errors);
        }
        if !errors.is_empty() {
            return Err(errors);
        }
        info!(
            "RR: scheduling {} process(es) with quantum {quantum}",
            processes.len()
        );

        let mut finished: Vec<Process> = processes.iter().map(Process::reset).collect();
        let mut ready = ReadyQueue::new(&finished);
        let mut timeline = Timeline::new();
        let mut now: Ticks = 0;

        ready.admit_arrivals(&finished, now, None);

        loop {
            let Some(idx) = ready.pop() else {
                let Some(next_arrival) = ready.next_arrival(&finished) else {
                    break;
                };
                let until = self.idle.advance(now, next_arrival);
                debug!("t={now} ready queue empty, idle until {until}");
                timeline.push_idle(until);
                now = until;
                ready.admit_arrivals(&finished, now, None);
                continue;
            };

            let slice = quantum.min(ready.remaining[idx]);
            let process = &mut finished[idx];
            debug!("t={now} run P{} for {slice}", process.id);
            process.mark_started(now);
            now += slice;
            ready.remaining[idx] -= slice;
            timeline.push(process.id, now);

            ready.admit_arrivals(&finished, now, Some(idx));

            if ready.remaining[idx] > 0 {
                ready.push(idx);
            } else {
                let process = &mut finished[idx];
                process.mark_completed(now);
                debug!("t={now} P{} completed", process.id);
            }
        }

        info!("RR: finished at t={}", timeline.end_time());
        Ok(Schedule::new(Algorithm::RoundRobin, finished, timeline))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;
    use crate::workload::WorkloadGenerator;

    fn run_ids(schedule: &Schedule) -> Vec<(u32, Ticks)> {
        schedule
            .timeline
            .segments()
            .iter()
            .map(|s| (s.process_id.unwrap_or(0), s.end))
            .collect()
    }

    #[test]
    fn test_two_process_scenario() {
        let processes = vec![Process::new(1, 0, 4), Process::new(2, 0, 3)];
        let schedule = RoundRobinScheduler::new(2).schedule(&processes).unwrap();

        assert_eq!(run_ids(&schedule), vec![(1, 2), (2, 4), (1, 6), (2, 7)]);
        let p1 = schedule.process(1).unwrap();
        assert_eq!((p1.completion_time, p1.waiting_time, p1.turnaround_time), (6, 2, 6));
        let p2 = schedule.process(2).unwrap();
        assert_eq!((p2.completion_time, p2.waiting_time, p2.turnaround_time), (7, 4, 7));
    }

    #[test]
    fn test_arrivals_cut_ahead_of_requeued() {
        // P2 arrives during P1's first slice and must run before P1's second
        let processes = vec![Process::new(1, 0, 5), Process::new(2, 1, 2)];
        let schedule = RoundRobinScheduler::new(3).schedule(&processes).unwrap();

        assert_eq!(run_ids(&schedule), vec![(1, 3), (2, 5), (1, 7)]);
    }

    #[test]
    fn test_arrival_at_slice_end_is_admitted_first() {
        let processes = vec![Process::new(1, 0, 4), Process::new(2, 2, 2)];
        let schedule = RoundRobinScheduler::new(2).schedule(&processes).unwrap();
        assert_eq!(run_ids(&schedule), vec![(1, 2), (2, 4), (1, 6)]);
    }

    #[test]
    fn test_idle_when_queue_drains_early() {
        // Queue empties at t=2 while P2 has not arrived yet
        let processes = vec![Process::new(1, 0, 2), Process::new(2, 5, 3)];
        let schedule = RoundRobinScheduler::new(2).schedule(&processes).unwrap();

        assert_eq!(run_ids(&schedule), vec![(1, 2), (0, 5), (2, 7), (2, 8)]);
        assert_eq!(schedule.process(2).unwrap().completion_time, 8);
        assert_eq!(schedule.process(2).unwrap().waiting_time, 0);
    }

    #[test]
    fn test_no_process_at_time_zero() {
        let processes = vec![Process::new(1, 3, 1)];
        let schedule = RoundRobinScheduler::new(4).schedule(&processes).unwrap();
        assert_eq!(run_ids(&schedule), vec![(0, 3), (1, 4)]);
    }

    #[test]
    fn test_quantum_larger_than_bursts_is_fcfs() {
        let processes = vec![
            Process::new(1, 0, 3),
            Process::new(2, 1, 2),
            Process::new(3, 2, 4),
        ];
        let rr = RoundRobinScheduler::new(100).schedule(&processes).unwrap();
        let fcfs = crate::scheduler::FcfsScheduler::new()
            .schedule(&processes)
            .unwrap();
        assert_eq!(rr.processes, fcfs.processes);
    }

    #[test]
    fn test_slices_conserve_burst() {
        for seed in 0..30 {
            let processes = WorkloadGenerator::new(8).with_seed(seed).generate();
            let schedule = RoundRobinScheduler::new(3).schedule(&processes).unwrap();

            for p in &schedule.processes {
                let served: Ticks = schedule
                    .timeline
                    .slices_for(p.id)
                    .iter()
                    .map(|s| s.duration())
                    .sum();
                assert_eq!(served, p.burst, "seed {seed}, P{}", p.id);
                assert!(schedule
                    .timeline
                    .slices_for(p.id)
                    .iter()
                    .all(|s| s.duration() <= 3));
            }
        }
    }

    #[test]
    fn test_requeued_wait_is_bounded() {
        let quantum = 2;
        for seed in 0..30 {
            let processes = WorkloadGenerator::new(6)
                .with_seed(seed)
                .with_burst_range(1, 9)
                .generate();
            let schedule = RoundRobinScheduler::new(quantum)
                .schedule(&processes)
                .unwrap();

            for p in &schedule.processes {
                let slices = schedule.timeline.slices_for(p.id);
                for pair in slices.windows(2) {
                    let requeued_at = pair[0].end;
                    // Everyone else in the queue at that moment
                    let ahead = schedule
                        .processes
                        .iter()
                        .filter(|q| {
                            q.id != p.id && q.arrival <= requeued_at && q.completion_time > requeued_at
                        })
                        .count() as Ticks;
                    let waited = pair[1].start - requeued_at;
                    assert!(
                        waited <= ahead * quantum,
                        "seed {seed}: P{} waited {waited} with {ahead} ahead",
                        p.id
                    );
                }
            }
        }
    }

    #[test]
    fn test_tick_and_jump_agree() {
        for seed in 0..20 {
            let processes = WorkloadGenerator::new(6)
                .with_seed(seed)
                .with_arrival_range(0, 50)
                .generate();
            let tick = RoundRobinScheduler::new(2)
                .with_idle_strategy(IdleStrategy::Tick)
                .schedule(&processes)
                .unwrap();
            let jump = RoundRobinScheduler::new(2).schedule(&processes).unwrap();
            assert_eq!(tick, jump, "seed {seed}");
        }
    }

    #[test]
    fn test_rejects_bad_quantum() {
        let processes = vec![Process::new(1, 0, 1)];
        for quantum in [0, -2] {
            let errors = RoundRobinScheduler::new(quantum)
                .schedule(&processes)
                .unwrap_err();
            assert_eq!(errors[0].kind, ValidationErrorKind::InvalidQuantum);
        }
    }

    #[test]
    fn test_bad_quantum_reported_with_workload_errors() {
        let processes = vec![Process::new(1, -1, 2), Process::new(2, 0, 0)];
        let errors = RoundRobinScheduler::new(0)
            .schedule(&processes)
            .unwrap_err();

        let kinds: Vec<_> = errors.iter().map(|e| e.kind.clone()).collect();
        assert_eq!(
            kinds,
            vec![
                ValidationErrorKind::InvalidQuantum,
                ValidationErrorKind::NegativeArrival,
                ValidationErrorKind::NonPositiveBurst,
            ]
        );
    }

    #[test]
    fn test_quantum_accessor() {
        let scheduler = RoundRobinScheduler::new(3).with_idle_strategy(IdleStrategy::Tick);
        assert_eq!(scheduler.quantum(), 3);
        assert_eq!(scheduler.algorithm(), Algorithm::RoundRobin);
    }

    #[test]
    fn test_empty_input() {
        let schedule = RoundRobinScheduler::new(2).schedule(&[]).unwrap();
        assert!(schedule.timeline.is_empty());
    }
}
