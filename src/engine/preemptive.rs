//! Preemptive scheduling kernel.
//!
//! Unit-step simulation shared by SRTF and preemptive priority: every time
//! unit the arrived, unfinished process with the minimal `(rule key,
//! arrival, registration index)` tuple runs for exactly one unit. A change
//! of the chosen process between units is a preemption (no switch cost is
//! modeled); consecutive units of the same process merge into one trace
//! segment.
//!
//! Equal keys never preempt: the running process was selected under the
//! same ordering, and any later arrival with an equal key loses the
//! arrival-time tie-break. This gives preemptive priority its
//! strictly-lower-value-preempts rule for free.
//!
//! Total simulated units equal `sum(burst_time)` by construction; the
//! kernel fails with `SimulationInvariantViolation` rather than loop past
//! that bound.

use crate::engine::rules::SelectionRule;
use crate::error::SchedulerError;
use crate::models::{ExecutionTrace, Process};

/// Unit-step kernel for SRTF and preemptive priority.
pub(super) fn run_unit_step(
    processes: &mut [Process],
    rule: &dyn SelectionRule,
    trace: &mut ExecutionTrace,
) -> Result<(), SchedulerError> {
    let n = processes.len();
    let total_work: i64 = processes.iter().map(|p| p.burst_time).sum();
    let mut executed: i64 = 0;
    let mut t = 0;

    while executed < total_work {
        let candidate = (0..n)
            .filter(|&i| processes[i].remaining_time > 0 && processes[i].has_arrived(t))
            .min_by_key(|&i| (rule.key(&processes[i]), processes[i].arrival_time, i));

        let i = match candidate {
            Some(i) => i,
            None => {
                // CPU idle: jump to the next arrival instead of stepping.
                t = processes
                    .iter()
                    .filter(|p| p.remaining_time > 0)
                    .map(|p| p.arrival_time)
                    .min()
                    .ok_or_else(|| {
                        SchedulerError::invariant(format!(
                            "{}: work remains but no process owns it",
                            rule.name()
                        ))
                    })?;
                continue;
            }
        };

        let p = &mut processes[i];
        let first_run = p.remaining_time == p.burst_time;
        trace.record(&p.id, t, t + 1, first_run);
        p.remaining_time -= 1;
        if p.remaining_time < 0 {
            return Err(SchedulerError::invariant(format!(
                "{}: negative remaining time for '{}'",
                rule.name(),
                p.id
            )));
        }
        t += 1;
        executed += 1;
    }
    Ok(())
}
