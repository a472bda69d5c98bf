//! Seeded random workload generation.
//!
//! Produces reproducible process sets for demos and for exercising the
//! schedulers over many inputs. The same seed always yields the same
//! workload.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::{Process, ProcessId, Ticks};

/// Random workload generator.
///
/// # Example
///
/// ```
/// use cpu_sched::workload::WorkloadGenerator;
///
/// let processes = WorkloadGenerator::new(5)
///     .with_seed(42)
///     .with_burst_range(1, 4)
///     .generate();
/// assert_eq!(processes.len(), 5);
/// assert!(processes.iter().all(|p| (1..=4).contains(&p.burst)));
/// ```
#[derive(Debug, Clone)]
pub struct WorkloadGenerator {
    count: usize,
    seed: u64,
    arrival: (Ticks, Ticks),
    burst: (Ticks, Ticks),
    priority: (i32, i32),
}

impl WorkloadGenerator {
    /// Creates a generator for `count` processes.
    ///
    /// Defaults: seed 0, arrivals in `0..=10`, bursts in `1..=10`,
    /// priorities in `1..=5`.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            seed: 0,
            arrival: (0, 10),
            burst: (1, 10),
            priority: (1, 5),
        }
    }

    /// Sets the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the inclusive arrival range. Negative bounds are clamped to 0.
    pub fn with_arrival_range(mut self, min: Ticks, max: Ticks) -> Self {
        let min = min.max(0);
        self.arrival = (min, max.max(min));
        self
    }

    /// Sets the inclusive burst range. Bounds are clamped to at least 1.
    pub fn with_burst_range(mut self, min: Ticks, max: Ticks) -> Self {
        let min = min.max(1);
        self.burst = (min, max.max(min));
        self
    }

    /// Sets the inclusive priority range.
    pub fn with_priority_range(mut self, min: i32, max: i32) -> Self {
        self.priority = (min, max.max(min));
        self
    }

    /// Generates the workload. IDs are 1-based in generation order.
    pub fn generate(&self) -> Vec<Process> {
        let mut rng = StdRng::seed_from_u64(self.seed);

        (1..=self.count)
            .map(|n| {
                let arrival = rng.random_range(self.arrival.0..=self.arrival.1);
                let burst = rng.random_range(self.burst.0..=self.burst.1);
                let priority = rng.random_range(self.priority.0..=self.priority.1);
                Process::new(n as ProcessId, arrival, burst).with_priority(priority)
            })
            .collect()
    }
}
