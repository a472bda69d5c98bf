//! Shared run-to-completion loops for the non-preemptive policies.
//!
//! - [`run_in_order`]: a fixed dispatch sequence decided up front
//!   (FCFS, static priority).
//! - [`run_ready_first`]: re-evaluate the arrived set at every completion
//!   (SJF, dynamic priority).
//!
//! Both work on reset copies of the input, so callers never see a
//! half-filled process.

use log::debug;

use super::IdleStrategy;
use crate::dispatching::RuleEngine;
use crate::models::{Process, Ticks, Timeline};

/// Runs processes to completion in `order` (indices into `processes`).
///
/// When the next process has not arrived yet the clock jumps to its
/// arrival and the gap is recorded as idle.
pub(crate) fn run_in_order(processes: &[Process], order: &[usize]) -> (Vec<Process>, Timeline) {
    let mut finished: Vec<Process> = processes.iter().map(Process::reset).collect();
    let mut timeline = Timeline::new();
    let mut now: Ticks = 0;

    for &idx in order {
        let process = &mut finished[idx];
        if now < process.arrival {
            debug!("t={now} idle until P{} arrives at {}", process.id, process.arrival);
            now = process.arrival;
            timeline.push_idle(now);
        }
        now = dispatch(process, now, &mut timeline);
    }

    (finished, timeline)
}

/// Repeatedly runs the best arrived process (per `engine`) to completion.
///
/// When nothing has arrived the clock advances per `idle`.
pub(crate) fn run_ready_first(
    processes: &[Process],
    engine: &RuleEngine,
    idle: IdleStrategy,
) -> (Vec<Process>, Timeline) {
    let mut finished: Vec<Process> = processes.iter().map(Process::reset).collect();
    let mut done = vec![false; finished.len()];
    let mut timeline = Timeline::new();
    let mut now: Ticks = 0;
    let mut completed = 0;

    while completed < finished.len() {
        let ready = (0..finished.len()).filter(|&i| !done[i] && finished[i].arrival <= now);

        match engine.select_best(&finished, ready) {
            Some(idx) => {
                now = dispatch(&mut finished[idx], now, &mut timeline);
                done[idx] = true;
                completed += 1;
            }
            None => {
                let Some(next_arrival) = (0..finished.len())
                    .filter(|&i| !done[i])
                    .map(|i| finished[i].arrival)
                    .min()
                else {
                    break;
                };
                let until = idle.advance(now, next_arrival);
                debug!("t={now} nothing ready, idle until {until}");
                timeline.push_idle(until);
                now = until;
            }
        }
    }

    (finished, timeline)
}

/// Runs one process from `now` to completion. Returns the new clock.
fn dispatch(process: &mut Process, now: Ticks, timeline: &mut Timeline) -> Ticks {
    debug!("t={now} dispatch P{} for {}", process.id, process.burst);
    process.mark_started(now);
    let end = now + process.burst;
    process.mark_completed(end);
    timeline.push(process.id, end);
    end
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_order_with_gap() {
        let processes = vec![Process::new(1, 0, 2), Process::new(2, 5, 1)];
        let (finished, timeline) = run_in_order(&processes, &[0, 1]);

        assert_eq!(finished[1].completion_time, 6);
        assert_eq!(finished[1].waiting_time, 0);
        assert_eq!(timeline.len(), 3);
        assert!(timeline.segments()[1].is_idle());
        assert_eq!(timeline.idle_time(), 3);
    }

    #[test]
    fn test_ready_first_picks_minimum() {
        let processes = vec![
            Process::new(1, 0, 3),
            Process::new(2, 1, 5),
            Process::new(3, 2, 1),
        ];
        let (finished, _) = run_ready_first(&processes, &RuleEngine::sjf(), IdleStrategy::Jump);

        // P1 runs 0..3, then P3 (burst 1) before P2 (burst 5)
        assert_eq!(finished[2].completion_time, 4);
        assert_eq!(finished[1].completion_time, 9);
    }

    #[test]
    fn test_input_is_not_mutated() {
        let processes = vec![Process::new(1, 0, 3)];
        let _ = run_ready_first(&processes, &RuleEngine::sjf(), IdleStrategy::Tick);
        assert_eq!(processes[0].completion_time, 0);
    }

    #[test]
    fn test_stale_results_are_cleared() {
        let mut stale = Process::new(1, 0, 3);
        stale.start_time = Some(99);
        stale.completion_time = 102;
        let (finished, _) = run_in_order(&[stale], &[0]);
        assert_eq!(finished[0].start_time, Some(0));
        assert_eq!(finished[0].completion_time, 3);
    }
}
