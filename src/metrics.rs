//! Schedule performance metrics.
//!
//! Reduces a finished run into the standard summary statistics:
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Avg Waiting Time | mean(waiting_time) |
//! | Avg Turnaround Time | mean(turnaround_time) |
//! | Avg Response Time | mean(response_time) |
//! | Makespan | latest completion time |
//! | CPU Utilization | 100 · sum(burst) / makespan |
//! | Throughput | process count / makespan |
//!
//! Internal values are exact; [`ScheduleMetrics::rounded`] produces the
//! two-decimal display form.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2

use serde::{Deserialize, Serialize};

use crate::engine::SimulationOutcome;
use crate::error::SchedulerError;

/// Summary statistics of a completed run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleMetrics {
    /// Mean time spent ready but not executing.
    pub avg_waiting_time: f64,
    /// Mean time from arrival to completion.
    pub avg_turnaround_time: f64,
    /// Mean time from arrival to first execution.
    pub avg_response_time: f64,
    /// Completion time of the last-finishing process.
    pub makespan: i64,
    /// Busy fraction of the makespan, as a percentage (100 = no idle gaps).
    pub cpu_utilization: f64,
    /// Completed processes per time unit.
    pub throughput: f64,
    /// Units during which the CPU sat idle (makespan minus busy time).
    pub total_idle_time: i64,
}

impl ScheduleMetrics {
    /// Computes metrics from a finished run.
    ///
    /// # Errors
    /// `EmptyProcessSet` if the outcome holds no processes;
    /// `SimulationInvariantViolation` if a process lacks a completion time
    /// or the makespan is zero — with validated inputs (burst > 0) neither
    /// can come out of this crate's engine.
    pub fn calculate(outcome: &SimulationOutcome) -> Result<Self, SchedulerError> {
        let n = outcome.processes.len();
        if n == 0 {
            return Err(SchedulerError::EmptyProcessSet);
        }

        let mut total_waiting: i64 = 0;
        let mut total_turnaround: i64 = 0;
        let mut total_response: i64 = 0;
        let mut total_burst: i64 = 0;
        let mut makespan: i64 = 0;

        for p in &outcome.processes {
            let completion = p.completion_time.ok_or_else(|| {
                SchedulerError::invariant(format!("process '{}' has no completion time", p.id))
            })?;
            total_waiting += p.waiting_time;
            total_turnaround += p.turnaround_time;
            total_response += p.response_time;
            total_burst += p.burst_time;
            makespan = makespan.max(completion);
        }

        if makespan <= 0 {
            return Err(SchedulerError::invariant(
                "zero makespan for a non-empty process set",
            ));
        }

        let count = n as f64;
        Ok(Self {
            avg_waiting_time: total_waiting as f64 / count,
            avg_turnaround_time: total_turnaround as f64 / count,
            avg_response_time: total_response as f64 / count,
            makespan,
            cpu_utilization: 100.0 * total_burst as f64 / makespan as f64,
            throughput: count / makespan as f64,
            total_idle_time: makespan - outcome.trace.busy_time(),
        })
    }

    /// A copy with the floating-point fields rounded to two decimals, for
    /// display. The original stays exact.
    pub fn rounded(&self) -> Self {
        Self {
            avg_waiting_time: round2(self.avg_waiting_time),
            avg_turnaround_time: round2(self.avg_turnaround_time),
            avg_response_time: round2(self.avg_response_time),
            makespan: self.makespan,
            cpu_utilization: round2(self.cpu_utilization),
            throughput: round2(self.throughput),
            total_idle_time: self.total_idle_time,
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
