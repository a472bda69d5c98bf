//! Clock advancement while the CPU is idle.

use serde::{Deserialize, Serialize};

use crate::models::Ticks;

/// How the logical clock moves when no process is ready.
///
/// Both strategies produce identical timelines, because consecutive idle
/// time is merged into one segment. `Tick` costs one loop iteration per
/// idle tick; `Jump` costs one per idle gap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdleStrategy {
    /// Advance one tick at a time and re-check.
    Tick,
    /// Advance straight to the next arrival.
    #[default]
    Jump,
}

impl IdleStrategy {
    /// Next clock value when nothing is ready at `now`.
    ///
    /// `next_arrival` is the earliest arrival among unfinished processes,
    /// which is always after `now` when this is called.
    pub fn advance(&self, now: Ticks, next_arrival: Ticks) -> Ticks {
        match self {
            Self::Tick => now + 1,
            Self::Jump => next_arrival.max(now + 1),
        }
    }
}
