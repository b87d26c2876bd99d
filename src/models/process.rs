//! Process model.
//!
//! A process is a unit of CPU demand: it arrives at a fixed time, needs a
//! fixed amount of CPU (its burst), and carries a scheduling priority.
//!
//! # Time Representation
//! All times are abstract discrete units relative to a simulation epoch
//! (t=0), not wall-clock time.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5

use serde::{Deserialize, Serialize};

/// A process to be scheduled.
///
/// Static inputs (`id`, `arrival_time`, `burst_time`, `priority`) are set at
/// registration and never change. Derived state (`remaining_time`,
/// `start_time`, `completion_time`, and the timing fields) is owned by the
/// policy engine, which populates it from the execution trace of a run.
///
/// Lower `priority` value = higher precedence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Process {
    /// Unique identifier (non-empty, alphanumeric).
    pub id: String,
    /// Time at which the process becomes eligible to run.
    pub arrival_time: i64,
    /// Total CPU time the process requires.
    pub burst_time: i64,
    /// Scheduling priority (lower value = higher precedence).
    pub priority: i32,
    /// CPU time still owed. Initialized to `burst_time`, zero at completion.
    pub remaining_time: i64,
    /// Time of first execution. `None` until the process first runs;
    /// set exactly once.
    pub start_time: Option<i64>,
    /// Time at which `remaining_time` reached zero. `None` until then.
    pub completion_time: Option<i64>,
    /// Time spent ready but not executing: `turnaround_time - burst_time`.
    pub waiting_time: i64,
    /// Total time from arrival to completion: `completion_time - arrival_time`.
    pub turnaround_time: i64,
    /// Time from arrival to first execution: `start_time - arrival_time`.
    pub response_time: i64,
}

impl Process {
    /// Creates a process with only its static inputs set.
    ///
    /// No validation happens here; the registry validates at registration.
    pub fn new(id: impl Into<String>, arrival_time: i64, burst_time: i64, priority: i32) -> Self {
        Self {
            id: id.into(),
            arrival_time,
            burst_time,
            priority,
            remaining_time: burst_time,
            start_time: None,
            completion_time: None,
            waiting_time: 0,
            turnaround_time: 0,
            response_time: 0,
        }
    }

    /// A fresh copy with all derived state reset from the static inputs.
    ///
    /// The engine always simulates reset copies, never previously timed
    /// records, so repeated runs over the same static inputs are
    /// bit-identical.
    pub fn reset_copy(&self) -> Self {
        Self::new(self.id.clone(), self.arrival_time, self.burst_time, self.priority)
    }

    /// Whether the process has executed at least once.
    #[inline]
    pub fn has_started(&self) -> bool {
        self.start_time.is_some()
    }

    /// Whether the process has finished all of its burst.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.completion_time.is_some()
    }

    /// Whether the process has arrived by time `t`.
    #[inline]
    pub fn has_arrived(&self, t: i64) -> bool {
        self.arrival_time <= t
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_initializes_derived_state() {
        let p = Process::new("P1", 3, 7, 2);
        assert_eq!(p.id, "P1");
        assert_eq!(p.arrival_time, 3);
        assert_eq!(p.burst_time, 7);
        assert_eq!(p.priority, 2);
        assert_eq!(p.remaining_time, 7);
        assert_eq!(p.start_time, None);
        assert_eq!(p.completion_time, None);
        assert!(!p.has_started());
        assert!(!p.is_complete());
    }

    #[test]
    fn test_reset_copy_clears_derived_state() {
        let mut p = Process::new("P1", 0, 5, 0);
        p.remaining_time = 0;
        p.start_time = Some(0);
        p.completion_time = Some(5);
        p.waiting_time = 2;

        let fresh = p.reset_copy();
        assert_eq!(fresh.remaining_time, 5);
        assert_eq!(fresh.start_time, None);
        assert_eq!(fresh.completion_time, None);
        assert_eq!(fresh.waiting_time, 0);
        assert_eq!(fresh.id, "P1");
    }

    #[test]
    fn test_has_arrived() {
        let p = Process::new("P1", 4, 1, 0);
        assert!(!p.has_arrived(3));
        assert!(p.has_arrived(4));
        assert!(p.has_arrived(10));
    }

    #[test]
    fn test_serde_field_names_match_contract() {
        let p = Process::new("P1", 1, 2, 3);
        let json = serde_json::to_value(&p).unwrap();
        assert_eq!(json["arrivalTime"], 1);
        assert_eq!(json["burstTime"], 2);
        assert_eq!(json["priority"], 3);
        assert_eq!(json["remainingTime"], 2);
        assert!(json["startTime"].is_null());
    }
}
