//! Process registry.
//!
//! Holds the immutable process definitions of a simulation and validates
//! them at registration. Detects:
//! - Empty or non-alphanumeric IDs
//! - Duplicate IDs
//! - Negative arrival times
//! - Non-positive burst times
//! - Negative priorities
//!
//! Registration order matters: it is the tie-break fallback for every
//! scheduling policy, so [`ProcessRegistry::list`] preserves it.

use crate::engine::{self, Policy, SimulationOutcome};
use crate::error::{ProcessField, SchedulerError};
use crate::models::Process;

/// Registration-ordered store of process definitions.
///
/// The registry holds only static inputs. Runs started through
/// [`ProcessRegistry::run`] hand the engine freshly reset copies, so the
/// registered definitions stay reusable across repeated simulations.
#[derive(Debug, Clone, Default)]
pub struct ProcessRegistry {
    processes: Vec<Process>,
}

impl ProcessRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new process definition.
    ///
    /// Validates every field and returns the stored record on success.
    ///
    /// # Errors
    /// `InvalidProcessDefinition` naming the violated field:
    /// empty or non-alphanumeric `id`, duplicate `id`, negative
    /// `arrival_time`, non-positive `burst_time`, negative `priority`.
    pub fn register(
        &mut self,
        id: impl Into<String>,
        arrival_time: i64,
        burst_time: i64,
        priority: i32,
    ) -> Result<&Process, SchedulerError> {
        let id = id.into();

        if id.is_empty() {
            return Err(SchedulerError::invalid_definition(
                ProcessField::Id,
                "must not be empty",
            ));
        }
        if !id.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(SchedulerError::invalid_definition(
                ProcessField::Id,
                format!("'{id}' must contain only letters and digits"),
            ));
        }
        if self.processes.iter().any(|p| p.id == id) {
            return Err(SchedulerError::invalid_definition(
                ProcessField::Id,
                format!("'{id}' is already registered"),
            ));
        }
        if arrival_time < 0 {
            return Err(SchedulerError::invalid_definition(
                ProcessField::ArrivalTime,
                format!("must be non-negative, got {arrival_time}"),
            ));
        }
        if burst_time <= 0 {
            return Err(SchedulerError::invalid_definition(
                ProcessField::BurstTime,
                format!("must be positive, got {burst_time}"),
            ));
        }
        if priority < 0 {
            return Err(SchedulerError::invalid_definition(
                ProcessField::Priority,
                format!("must be non-negative, got {priority}"),
            ));
        }

        self.processes
            .push(Process::new(id, arrival_time, burst_time, priority));
        // Just pushed, so the last element exists.
        Ok(&self.processes[self.processes.len() - 1])
    }

    /// Removes a process by ID.
    ///
    /// Removing an unknown ID is a no-op, not an error.
    pub fn remove(&mut self, id: &str) {
        self.processes.retain(|p| p.id != id);
    }

    /// All registered processes, in registration order.
    pub fn list(&self) -> &[Process] {
        &self.processes
    }

    /// Looks up a process by ID.
    pub fn get(&self, id: &str) -> Option<&Process> {
        self.processes.iter().find(|p| p.id == id)
    }

    /// Number of registered processes.
    pub fn len(&self) -> usize {
        self.processes.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    /// Removes all processes.
    pub fn clear(&mut self) {
        self.processes.clear();
    }

    /// Runs a scheduling policy over the registered processes.
    ///
    /// The engine simulates freshly reset copies; the registered
    /// definitions are never mutated, so repeated calls with the same
    /// inputs yield identical outcomes.
    ///
    /// # Errors
    /// `EmptyProcessSet` if nothing is registered; `InvalidQuantum` for
    /// round robin with a non-positive (or missing) quantum.
    pub fn run(
        &self,
        policy: Policy,
        quantum: Option<i64>,
    ) -> Result<SimulationOutcome, SchedulerError> {
        engine::run(&self.processes, policy, quantum)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_valid_process() {
        let mut registry = ProcessRegistry::new();
        let p = registry.register("P1", 0, 5, 2).unwrap();
        assert_eq!(p.id, "P1");
        assert_eq!(p.remaining_time, 5);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_register_rejects_empty_id() {
        let mut registry = ProcessRegistry::new();
        let err = registry.register("", 0, 5, 0).unwrap_err();
        assert!(matches!(
            err,
            SchedulerError::InvalidProcessDefinition {
                field: ProcessField::Id,
                ..
            }
        ));
    }

    #[test]
    fn test_register_rejects_non_alphanumeric_id() {
        let mut registry = ProcessRegistry::new();
        assert!(registry.register("P-1", 0, 5, 0).is_err());
        assert!(registry.register("P 1", 0, 5, 0).is_err());
        assert!(registry.register("P1!", 0, 5, 0).is_err());
        // Plain letters and digits are fine
        assert!(registry.register("p1", 0, 5, 0).is_ok());
        assert!(registry.register("42", 0, 5, 0).is_ok());
    }

    #[test]
    fn test_register_rejects_duplicate_id() {
        let mut registry = ProcessRegistry::new();
        registry.register("P1", 0, 5, 0).unwrap();
        let err = registry.register("P1", 1, 3, 0).unwrap_err();
        assert!(matches!(
            err,
            SchedulerError::InvalidProcessDefinition {
                field: ProcessField::Id,
                ..
            }
        ));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_register_rejects_negative_arrival() {
        let mut registry = ProcessRegistry::new();
        let err = registry.register("P1", -1, 5, 0).unwrap_err();
        assert!(matches!(
            err,
            SchedulerError::InvalidProcessDefinition {
                field: ProcessField::ArrivalTime,
                ..
            }
        ));
    }

    #[test]
    fn test_register_rejects_non_positive_burst() {
        let mut registry = ProcessRegistry::new();
        for burst in [0, -3] {
            let err = registry.register("P1", 0, burst, 0).unwrap_err();
            assert!(matches!(
                err,
                SchedulerError::InvalidProcessDefinition {
                    field: ProcessField::BurstTime,
                    ..
                }
            ));
        }
    }

    #[test]
    fn test_register_rejects_negative_priority() {
        let mut registry = ProcessRegistry::new();
        let err = registry.register("P1", 0, 5, -1).unwrap_err();
        assert!(matches!(
            err,
            SchedulerError::InvalidProcessDefinition {
                field: ProcessField::Priority,
                ..
            }
        ));
    }

    #[test]
    fn test_list_preserves_registration_order() {
        let mut registry = ProcessRegistry::new();
        registry.register("C", 2, 1, 0).unwrap();
        registry.register("A", 0, 1, 0).unwrap();
        registry.register("B", 1, 1, 0).unwrap();

        let ids: Vec<&str> = registry.list().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["C", "A", "B"]);
    }

    #[test]
    fn test_remove_is_noop_for_unknown_id() {
        let mut registry = ProcessRegistry::new();
        registry.register("P1", 0, 5, 0).unwrap();
        registry.remove("P9");
        assert_eq!(registry.len(), 1);
        registry.remove("P1");
        assert!(registry.is_empty());
    }

    #[test]
    fn test_get_and_clear() {
        let mut registry = ProcessRegistry::new();
        registry.register("P1", 0, 5, 0).unwrap();
        assert!(registry.get("P1").is_some());
        assert!(registry.get("P2").is_none());
        registry.clear();
        assert!(registry.is_empty());
    }

    #[test]
    fn test_run_on_empty_registry_fails() {
        let registry = ProcessRegistry::new();
        assert_eq!(
            registry.run(Policy::Fcfs, None).unwrap_err(),
            SchedulerError::EmptyProcessSet
        );
    }

    #[test]
    fn test_run_leaves_registered_definitions_untouched() {
        let mut registry = ProcessRegistry::new();
        registry.register("P1", 0, 5, 0).unwrap();
        registry.run(Policy::Fcfs, None).unwrap();

        let p = registry.get("P1").unwrap();
        assert_eq!(p.remaining_time, 5);
        assert_eq!(p.start_time, None);
        assert_eq!(p.completion_time, None);
    }
}
