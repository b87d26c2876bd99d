//! Execution trace model.
//!
//! The trace is the canonical record of a run: an ordered sequence of
//! (process, start, end) segments, one per contiguous interval during which
//! a process occupied the CPU. Per-process timing fields are derived from
//! it, never tracked by a second simulation, so the timeline a renderer
//! draws and the metrics a report shows can never diverge.

use serde::{Deserialize, Serialize};

/// A contiguous interval during which one process occupied the CPU.
///
/// `start < end` always holds; segments from different processes never
/// overlap (one CPU, one process per time unit).
///
/// A segment spans contiguous occupancy, not a single scheduling grant:
/// under round robin, a process running consecutive quantum slices
/// back-to-back still yields one segment. Segment boundaries mark actual
/// handovers of the CPU, not expired quanta, so they undercount context
/// switches for a process that kept the CPU across a slice boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    /// ID of the executing process.
    pub process_id: String,
    /// Inclusive start time.
    pub start: i64,
    /// Exclusive end time.
    pub end: i64,
    /// Whether this is the process's first execution segment.
    pub is_first_segment: bool,
}

impl Segment {
    /// Segment duration (`end - start`).
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }
}

/// The ordered execution timeline of a completed run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExecutionTrace {
    /// Segments in execution order.
    pub segments: Vec<Segment>,
}

impl ExecutionTrace {
    /// Creates an empty trace.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an execution interval for a process.
    ///
    /// If the interval directly continues the previous segment of the same
    /// process, the two are merged, so unit-stepped preemptive kernels
    /// still produce one segment per contiguous run.
    pub fn record(&mut self, process_id: &str, start: i64, end: i64, is_first_segment: bool) {
        if let Some(last) = self.segments.last_mut() {
            if last.process_id == process_id && last.end == start {
                last.end = end;
                return;
            }
        }
        self.segments.push(Segment {
            process_id: process_id.to_string(),
            start,
            end,
            is_first_segment,
        });
    }

    /// Makespan: end of the last segment, 0 for an empty trace.
    pub fn makespan(&self) -> i64 {
        self.segments.last().map(|s| s.end).unwrap_or(0)
    }

    /// All segments of a given process, in execution order.
    pub fn segments_for(&self, process_id: &str) -> Vec<&Segment> {
        self.segments
            .iter()
            .filter(|s| s.process_id == process_id)
            .collect()
    }

    /// First execution segment of a given process.
    pub fn first_segment_for(&self, process_id: &str) -> Option<&Segment> {
        self.segments.iter().find(|s| s.process_id == process_id)
    }

    /// Total executed time of a given process across all its segments.
    pub fn executed_time(&self, process_id: &str) -> i64 {
        self.segments_for(process_id)
            .iter()
            .map(|s| s.duration())
            .sum()
    }

    /// Total busy time across all processes.
    ///
    /// Equals makespan minus idle gaps.
    pub fn busy_time(&self) -> i64 {
        self.segments.iter().map(|s| s.duration()).sum()
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Whether the trace has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}
