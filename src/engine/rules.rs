//! Selection rules for the scheduling kernels.
//!
//! Each rule reduces a process to a single selection key; kernels pick the
//! arrived candidate with the minimal `(key, arrival_time, registration
//! index)` tuple, so every policy shares the same deterministic tie-break:
//! earliest arrival first, then registration order.
//!
//! # Key Convention
//! **Lower key = scheduled first**, matching the academic convention
//! (SJF = shortest burst first, lower priority value = higher precedence).
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3

use crate::models::Process;

/// A rule that reduces a process to a scheduling key.
///
/// Lower key = higher precedence. Keys may read derived state
/// (`remaining_time`), so preemptive kernels re-evaluate them every unit.
pub trait SelectionRule {
    /// Rule name (e.g., "SJF", "SRTF").
    fn name(&self) -> &'static str;

    /// Selection key for a process. Lower wins.
    fn key(&self, process: &Process) -> i64;
}

/// Shortest burst time first (SJF).
///
/// Static key: total burst. Optimal for mean waiting time among
/// non-preemptive policies on a single CPU.
#[derive(Debug, Clone, Copy)]
pub struct ShortestBurst;

impl SelectionRule for ShortestBurst {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn key(&self, process: &Process) -> i64 {
        process.burst_time
    }
}

/// Shortest remaining time first (SRTF).
///
/// Dynamic key: work still owed. Under unit stepping this is the
/// preemptive counterpart of [`ShortestBurst`].
#[derive(Debug, Clone, Copy)]
pub struct ShortestRemaining;

impl SelectionRule for ShortestRemaining {
    fn name(&self) -> &'static str {
        "SRTF"
    }

    fn key(&self, process: &Process) -> i64 {
        process.remaining_time
    }
}

/// Lowest priority value first.
///
/// Static key: the priority field (lower value = higher precedence).
/// Drives both the non-preemptive and the preemptive priority policies.
#[derive(Debug, Clone, Copy)]
pub struct MostUrgent;

impl SelectionRule for MostUrgent {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn key(&self, process: &Process) -> i64 {
        i64::from(process.priority)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shortest_burst_key() {
        let p = Process::new("P1", 0, 7, 3);
        assert_eq!(ShortestBurst.key(&p), 7);
        assert_eq!(ShortestBurst.name(), "SJF");
    }

    #[test]
    fn test_shortest_remaining_tracks_derived_state() {
        let mut p = Process::new("P1", 0, 7, 3);
        assert_eq!(ShortestRemaining.key(&p), 7);
        p.remaining_time = 2;
        assert_eq!(ShortestRemaining.key(&p), 2);
    }

    #[test]
    fn test_most_urgent_key() {
        let p = Process::new("P1", 0, 7, 3);
        assert_eq!(MostUrgent.key(&p), 3);
    }
}
