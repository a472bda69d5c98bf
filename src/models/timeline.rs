//! Execution timeline (Gantt chart).
//!
//! An append-only sequence of contiguous segments. Each segment records
//! which process held the CPU over `[start, end)`; idle gaps are explicit
//! segments with no process.

use serde::{Deserialize, Serialize};

use super::{ProcessId, Ticks};

/// One contiguous interval of the timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    /// Running process. `None` = CPU idle.
    pub process_id: Option<ProcessId>,
    /// Start time (inclusive).
    pub start: Ticks,
    /// End time (exclusive).
    pub end: Ticks,
}

impl Segment {
    /// Length of the segment in ticks.
    #[inline]
    pub fn duration(&self) -> Ticks {
        self.end - self.start
    }

    /// Whether the CPU was idle during this segment.
    #[inline]
    pub fn is_idle(&self) -> bool {
        self.process_id.is_none()
    }
}

/// Ordered, gap-free execution history starting at t=0.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    segments: Vec<Segment>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a run of `process_id` ending at `end`.
    ///
    /// The segment starts where the previous one ended. Zero-length runs
    /// are dropped.
    pub fn push(&mut self, process_id: ProcessId, end: Ticks) {
        self.append(Some(process_id), end);
    }

    /// Appends idle time up to `end`, merging with a trailing idle segment.
    pub fn push_idle(&mut self, end: Ticks) {
        if let Some(last) = self.segments.last_mut() {
            if last.is_idle() {
                if end > last.end {
                    last.end = end;
                }
                return;
            }
        }
        self.append(None, end);
    }

    fn append(&mut self, process_id: Option<ProcessId>, end: Ticks) {
        let start = self.end_time();
        debug_assert!(end >= start, "segment ends at {end} before it starts at {start}");
        if end > start {
            self.segments.push(Segment {
                process_id,
                start,
                end,
            });
        }
    }

    /// All segments in chronological order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// End of the last segment (0 if empty).
    pub fn end_time(&self) -> Ticks {
        self.segments.last().map(|s| s.end).unwrap_or(0)
    }

    /// Total time some process held the CPU.
    pub fn busy_time(&self) -> Ticks {
        self.segments
            .iter()
            .filter(|s| !s.is_idle())
            .map(Segment::duration)
            .sum()
    }

    /// Total idle time.
    pub fn idle_time(&self) -> Ticks {
        self.segments
            .iter()
            .filter(|s| s.is_idle())
            .map(Segment::duration)
            .sum()
    }

    /// Segments belonging to one process, in order.
    pub fn slices_for(&self, process_id: ProcessId) -> Vec<&Segment> {
        self.segments
            .iter()
            .filter(|s| s.process_id == Some(process_id))
            .collect()
    }

    /// Number of hand-overs between different processes. Idle gaps are skipped.
    pub fn context_switches(&self) -> usize {
        let mut switches = 0;
        let mut previous: Option<ProcessId> = None;
        for id in self.segments.iter().filter_map(|s| s.process_id) {
            if previous.is_some_and(|p| p != id) {
                switches += 1;
            }
            previous = Some(id);
        }
        switches
    }
}
