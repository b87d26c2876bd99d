//! Scheduling policy engine.
//!
//! One discrete-time simulator per policy family, all sharing a single
//! contract: take a process set, produce an [`ExecutionTrace`] and fully
//! timed process records. The trace is the ground truth — per-process
//! timing fields are derived from its first and last segments, so the
//! timeline and the reported numbers can never diverge.
//!
//! # Policies
//!
//! | Policy | Kernel | Preemptive |
//! |--------|--------|------------|
//! | FCFS | arrival-ordered pass | no |
//! | SJF | decision-point + [`rules::ShortestBurst`] | no |
//! | SRTF | unit-step + [`rules::ShortestRemaining`] | yes |
//! | RoundRobin | quantum-sliced FIFO queue | yes |
//! | Priority | decision-point + [`rules::MostUrgent`] | no |
//! | PreemptivePriority | unit-step + [`rules::MostUrgent`] | yes |
//!
//! Ties everywhere break by earliest arrival, then registration order, so
//! identical inputs always yield identical output.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5

mod nonpreemptive;
mod preemptive;
mod round_robin;
pub mod rules;

use serde::{Deserialize, Serialize};

use crate::error::SchedulerError;
use crate::models::{ExecutionTrace, Process};

/// Scheduling policy selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Policy {
    /// First-come-first-served.
    #[serde(rename = "FCFS")]
    Fcfs,
    /// Shortest job first (non-preemptive).
    #[serde(rename = "SJF")]
    Sjf,
    /// Shortest remaining time first (preemptive SJF).
    #[serde(rename = "SRTF")]
    Srtf,
    /// Fixed-quantum FIFO time slicing.
    RoundRobin,
    /// Lowest priority value first (non-preemptive).
    Priority,
    /// Lowest priority value first; strictly lower values preempt.
    PreemptivePriority,
}

impl Policy {
    /// Whether the policy can interrupt a running process.
    pub fn is_preemptive(self) -> bool {
        matches!(self, Policy::Srtf | Policy::RoundRobin | Policy::PreemptivePriority)
    }
}

/// Result of a completed policy run: fully timed process records plus the
/// execution trace they were derived from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationOutcome {
    /// Processes with all timing fields populated, in registration order.
    pub processes: Vec<Process>,
    /// The ordered execution timeline.
    pub trace: ExecutionTrace,
}

/// Runs a scheduling policy over a process set.
///
/// The input is never mutated: the engine simulates freshly reset working
/// copies, so repeated calls with the same static inputs are bit-identical
/// even if `processes` carries stale derived state from an earlier run.
///
/// `quantum` is only consulted for [`Policy::RoundRobin`].
///
/// # Errors
/// - `EmptyProcessSet` if `processes` is empty.
/// - `InvalidQuantum` for round robin with a missing or non-positive
///   quantum.
/// - `SimulationInvariantViolation` if the produced trace contradicts the
///   process set (an engine bug; never silently truncated).
pub fn run(
    processes: &[Process],
    policy: Policy,
    quantum: Option<i64>,
) -> Result<SimulationOutcome, SchedulerError> {
    if processes.is_empty() {
        return Err(SchedulerError::EmptyProcessSet);
    }

    let mut working: Vec<Process> = processes.iter().map(Process::reset_copy).collect();
    let mut trace = ExecutionTrace::new();

    match policy {
        Policy::Fcfs => nonpreemptive::run_fcfs(&mut working, &mut trace)?,
        Policy::Sjf => {
            nonpreemptive::run_decision_point(&mut working, &rules::ShortestBurst, &mut trace)?
        }
        Policy::Priority => {
            nonpreemptive::run_decision_point(&mut working, &rules::MostUrgent, &mut trace)?
        }
        Policy::Srtf => {
            preemptive::run_unit_step(&mut working, &rules::ShortestRemaining, &mut trace)?
        }
        Policy::PreemptivePriority => {
            preemptive::run_unit_step(&mut working, &rules::MostUrgent, &mut trace)?
        }
        Policy::RoundRobin => {
            let q = quantum.unwrap_or(0);
            if q <= 0 {
                return Err(SchedulerError::InvalidQuantum(q));
            }
            round_robin::run(&mut working, q, &mut trace)?;
        }
    }

    derive_timing_fields(&mut working, &trace)?;
    Ok(SimulationOutcome {
        processes: working,
        trace,
    })
}

/// Populates per-process timing fields from the trace.
///
/// `start_time` comes from the first segment, `completion_time` from the
/// last; waiting, turnaround, and response follow by definition. The
/// derivation re-checks the coverage invariant (segment durations sum to
/// the burst) and that no work is left over.
fn derive_timing_fields(
    processes: &mut [Process],
    trace: &ExecutionTrace,
) -> Result<(), SchedulerError> {
    for p in processes {
        let segments = trace.segments_for(&p.id);
        let (first, last) = match (segments.first(), segments.last()) {
            (Some(first), Some(last)) => (*first, *last),
            _ => {
                return Err(SchedulerError::invariant(format!(
                    "process '{}' never appears in the trace",
                    p.id
                )))
            }
        };

        let executed: i64 = segments.iter().map(|s| s.duration()).sum();
        if executed != p.burst_time {
            return Err(SchedulerError::invariant(format!(
                "process '{}' executed {} of {} units",
                p.id, executed, p.burst_time
            )));
        }
        if p.remaining_time != 0 {
            return Err(SchedulerError::invariant(format!(
                "process '{}' completed with remaining time {}",
                p.id, p.remaining_time
            )));
        }

        p.start_time = Some(first.start);
        p.completion_time = Some(last.end);
        p.turnaround_time = last.end - p.arrival_time;
        p.waiting_time = p.turnaround_time - p.burst_time;
        p.response_time = first.start - p.arrival_time;
    }
    Ok(())
}
