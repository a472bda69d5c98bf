//! CPU scheduling domain models.
//!
//! Provides the data types shared by every scheduling policy: the
//! process record, the execution timeline, the algorithm selector and
//! the finished schedule.
//!
//! # Lifecycle
//!
//! | Stage | Owner | Mutation |
//! |-------|-------|----------|
//! | Workload | caller | none |
//! | Policy run | scheduler | results filled in on a private copy |
//! | Report | `Schedule` | read-only |

mod algorithm;
mod process;
mod schedule;
mod timeline;

pub use algorithm::Algorithm;
pub use process::{Process, ProcessId, Ticks};
pub use schedule::Schedule;
pub use timeline::{Segment, Timeline};
