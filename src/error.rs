//! Error taxonomy for registration, simulation, and metrics.
//!
//! All failures are surfaced immediately to the caller with the violated
//! field or condition named. The computation is deterministic, so nothing
//! here is retryable.

use thiserror::Error;

/// Process definition field that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessField {
    /// Process identifier.
    Id,
    /// Arrival time.
    ArrivalTime,
    /// Burst time.
    BurstTime,
    /// Scheduling priority.
    Priority,
}

impl std::fmt::Display for ProcessField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ProcessField::Id => "id",
            ProcessField::ArrivalTime => "arrival time",
            ProcessField::BurstTime => "burst time",
            ProcessField::Priority => "priority",
        };
        f.write_str(name)
    }
}

/// Errors produced by the registry, the policy engine, and the
/// metrics calculator.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SchedulerError {
    /// A process definition was rejected at registration.
    ///
    /// Never raised during a run: a registered process is always
    /// simulatable.
    #[error("invalid process definition ({field}): {reason}")]
    InvalidProcessDefinition {
        /// The violated field.
        field: ProcessField,
        /// What was wrong with it.
        reason: String,
    },

    /// A run or metrics computation was attempted with no processes.
    #[error("no processes to schedule")]
    EmptyProcessSet,

    /// Round robin was requested with a non-positive quantum.
    #[error("round robin quantum must be positive, got {0}")]
    InvalidQuantum(i64),

    /// An internal invariant of the simulation was violated.
    ///
    /// Signals an engine bug, not a user error. Never downgraded to a
    /// best-effort partial result.
    #[error("simulation invariant violated: {0}")]
    SimulationInvariantViolation(String),
}

impl SchedulerError {
    pub(crate) fn invalid_definition(field: ProcessField, reason: impl Into<String>) -> Self {
        Self::InvalidProcessDefinition {
            field,
            reason: reason.into(),
        }
    }

    pub(crate) fn invariant(reason: impl Into<String>) -> Self {
        Self::SimulationInvariantViolation(reason.into())
    }
}
