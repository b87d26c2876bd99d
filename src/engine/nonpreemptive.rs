//! Non-preemptive scheduling kernels.
//!
//! Two kernels live here: plain FCFS (a single arrival-ordered pass) and
//! the decision-point kernel shared by SJF and non-preemptive priority
//! (select among arrived processes at each completion, run to completion).
//!
//! Both produce exactly one trace segment per process and advance the
//! clock directly to the next arrival when the CPU would idle.

use crate::engine::rules::SelectionRule;
use crate::error::SchedulerError;
use crate::models::{ExecutionTrace, Process};

/// First-come-first-served: arrival order, ties by registration order.
pub(super) fn run_fcfs(
    processes: &mut [Process],
    trace: &mut ExecutionTrace,
) -> Result<(), SchedulerError> {
    let mut order: Vec<usize> = (0..processes.len()).collect();
    order.sort_by_key(|&i| (processes[i].arrival_time, i));

    let mut t = 0;
    for &i in &order {
        let p = &mut processes[i];
        let start = t.max(p.arrival_time);
        let end = start + p.burst_time;
        trace.record(&p.id, start, end, true);
        p.remaining_time = 0;
        t = end;
    }
    Ok(())
}

/// Decision-point kernel for SJF and non-preemptive priority.
///
/// At each decision point (a completion, or an idle jump to the next
/// arrival) the arrived, unfinished process with the minimal
/// `(rule key, arrival, registration index)` tuple runs to completion.
pub(super) fn run_decision_point(
    processes: &mut [Process],
    rule: &dyn SelectionRule,
    trace: &mut ExecutionTrace,
) -> Result<(), SchedulerError> {
    let n = processes.len();
    let mut done = vec![false; n];
    let mut t = 0;

    // Each iteration completes exactly one process.
    for _ in 0..n {
        if !has_arrived_candidate(processes, &done, t) {
            t = next_arrival(processes, &done).ok_or_else(|| {
                SchedulerError::invariant(format!(
                    "{}: no runnable process and no pending arrival",
                    rule.name()
                ))
            })?;
        }

        let i = (0..n)
            .filter(|&i| !done[i] && processes[i].has_arrived(t))
            .min_by_key(|&i| (rule.key(&processes[i]), processes[i].arrival_time, i))
            .ok_or_else(|| {
                SchedulerError::invariant(format!("{}: selection found no candidate", rule.name()))
            })?;

        let p = &mut processes[i];
        let end = t + p.burst_time;
        trace.record(&p.id, t, end, true);
        p.remaining_time = 0;
        done[i] = true;
        t = end;
    }
    Ok(())
}

fn has_arrived_candidate(processes: &[Process], done: &[bool], t: i64) -> bool {
    processes
        .iter()
        .zip(done)
        .any(|(p, &d)| !d && p.has_arrived(t))
}

fn next_arrival(processes: &[Process], done: &[bool]) -> Option<i64> {
    processes
        .iter()
        .zip(done)
        .filter(|(_, &d)| !d)
        .map(|(p, _)| p.arrival_time)
        .min()
}
