//! Discrete-time CPU scheduling simulator.
//!
//! Simulates a single CPU serving a fixed set of processes under one of
//! four classic policies and reports per-process metrics, averages and a
//! Gantt timeline.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Process`, `Algorithm`, `Timeline`, `Schedule`
//! - **`dispatching`**: Rule-based selection (`Fifo`, `Spt`, `Priority`) and the `RuleEngine`
//! - **`scheduler`**: FCFS, SJF, Round-Robin and Priority schedulers plus KPIs
//! - **`validation`**: Input integrity checks (IDs, bursts, arrivals, quantum)
//! - **`input`**: Text and JSON workload parsing
//! - **`report`**: Results table and Gantt chart rendering
//! - **`workload`**: Seeded random workloads
//!
//! # Example
//!
//! ```
//! use cpu_sched::models::Process;
//! use cpu_sched::scheduler::{CpuScheduler, RoundRobinScheduler, ScheduleKpi};
//!
//! let processes = vec![Process::new(1, 0, 5), Process::new(2, 1, 3)];
//! let schedule = RoundRobinScheduler::new(2).schedule(&processes).unwrap();
//! let kpi = ScheduleKpi::calculate(&schedule);
//!
//! assert_eq!(schedule.makespan(), 8);
//! assert!((kpi.cpu_utilization - 1.0).abs() < 1e-10);
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin, Gagne, "Operating System Concepts", ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod dispatching;
pub mod input;
pub mod models;
pub mod report;
pub mod scheduler;
pub mod validation;
pub mod workload;
