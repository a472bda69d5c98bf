//! Schedule quality metrics (KPIs).
//!
//! Computes standard CPU scheduling indicators from a finished schedule.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Avg Waiting | Mean(turnaround - burst) |
//! | Avg Turnaround | Mean(completion - arrival) |
//! | Avg Response | Mean(first dispatch - arrival) |
//! | Makespan | Latest completion time |
//! | CPU Utilization | busy time / makespan |
//! | Throughput | processes / makespan |
//! | Context Switches | hand-overs between different processes |
//!
//! Averages over an empty workload are 0.0, as are ratios over a zero
//! makespan.

use serde::{Deserialize, Serialize};

use crate::models::{Schedule, Ticks};

/// Schedule performance indicators.
///
/// All time values are in clock ticks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleKpi {
    /// Number of processes scheduled.
    pub process_count: usize,
    /// Mean waiting time.
    pub avg_waiting_time: f64,
    /// Mean turnaround time.
    pub avg_turnaround_time: f64,
    /// Mean response time.
    pub avg_response_time: f64,
    /// Latest completion time.
    pub makespan: Ticks,
    /// Time the CPU was running some process.
    pub busy_time: Ticks,
    /// Time the CPU was idle before the last completion.
    pub idle_time: Ticks,
    /// Fraction of the makespan spent busy (0.0..1.0).
    pub cpu_utilization: f64,
    /// Completed processes per tick.
    pub throughput: f64,
    /// Number of process-to-process hand-overs.
    pub context_switches: usize,
}

impl ScheduleKpi {
    /// Computes KPIs from a finished schedule.
    pub fn calculate(schedule: &Schedule) -> Self {
        let count = schedule.process_count();
        // Summed as f64: per-process times fit the clock, their sum may not
        let total_waiting: f64 = schedule.processes.iter().map(|p| p.waiting_time as f64).sum();
        let total_turnaround: f64 = schedule
            .processes
            .iter()
            .map(|p| p.turnaround_time as f64)
            .sum();
        let total_response: f64 = schedule
            .processes
            .iter()
            .filter_map(|p| p.response_time())
            .map(|r| r as f64)
            .sum();

        let makespan = schedule.makespan();
        let busy_time = schedule.timeline.busy_time();

        Self {
            process_count: count,
            avg_waiting_time: mean(total_waiting, count),
            avg_turnaround_time: mean(total_turnaround, count),
            avg_response_time: mean(total_response, count),
            makespan,
            busy_time,
            idle_time: schedule.timeline.idle_time(),
            cpu_utilization: ratio(busy_time as f64, makespan),
            throughput: ratio(count as f64, makespan),
            context_switches: schedule.timeline.context_switches(),
        }
    }
}

fn mean(total: f64, count: usize) -> f64 {
    if count == 0 {
        0.0
    } else {
        total / count as f64
    }
}

fn ratio(numerator: f64, makespan: Ticks) -> f64 {
    if makespan <= 0 {
        0.0
    } else {
        numerator / makespan as f64
    }
}
