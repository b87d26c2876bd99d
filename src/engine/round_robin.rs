//! Round robin scheduling kernel.
//!
//! FIFO ready queue with a fixed time quantum. The head of the queue runs
//! for `min(remaining_time, quantum)` units; processes that arrive during
//! (or exactly at the end of) that slice enter the queue before the
//! preempted process re-enters it. When the queue drains while arrivals
//! are still pending, the clock jumps straight to the next arrival.
//!
//! Each slice records one trace segment, except that back-to-back slices
//! of the same process (possible only when it is alone in the ready
//! queue) merge into a single segment, since no handover of the CPU
//! happened between them. Every slice consumes at least one unit, so the
//! loop is bounded by `sum(burst_time)`.

use std::collections::VecDeque;

use crate::error::SchedulerError;
use crate::models::{ExecutionTrace, Process};

pub(super) fn run(
    processes: &mut [Process],
    quantum: i64,
    trace: &mut ExecutionTrace,
) -> Result<(), SchedulerError> {
    let n = processes.len();

    // Admission order: earliest arrival, ties by registration order.
    let mut admission: Vec<usize> = (0..n).collect();
    admission.sort_by_key(|&i| (processes[i].arrival_time, i));

    let mut next_admit = 0;
    let mut ready: VecDeque<usize> = VecDeque::new();
    let mut t = 0;

    admit_up_to(processes, &admission, &mut next_admit, t, &mut ready);
    if ready.is_empty() && next_admit < n {
        t = processes[admission[next_admit]].arrival_time;
        admit_up_to(processes, &admission, &mut next_admit, t, &mut ready);
    }

    while let Some(i) = ready.pop_front() {
        let slice = processes[i].remaining_time.min(quantum);
        if slice <= 0 {
            return Err(SchedulerError::invariant(format!(
                "round robin dequeued '{}' with no remaining work",
                processes[i].id
            )));
        }

        let first_run = processes[i].remaining_time == processes[i].burst_time;
        trace.record(&processes[i].id, t, t + slice, first_run);
        t += slice;
        processes[i].remaining_time -= slice;

        // Arrivals during the slice take queue priority over the
        // just-run process.
        admit_up_to(processes, &admission, &mut next_admit, t, &mut ready);
        if processes[i].remaining_time > 0 {
            ready.push_back(i);
        }

        if ready.is_empty() && next_admit < n {
            t = processes[admission[next_admit]].arrival_time;
            admit_up_to(processes, &admission, &mut next_admit, t, &mut ready);
        }
    }

    if next_admit < n {
        return Err(SchedulerError::invariant(
            "round robin finished with unadmitted processes",
        ));
    }
    Ok(())
}

/// Moves every process that has arrived by `t` from the admission list
/// into the ready queue, in (arrival, registration index) order.
fn admit_up_to(
    processes: &[Process],
    admission: &[usize],
    next_admit: &mut usize,
    t: i64,
    ready: &mut VecDeque<usize>,
) {
    while *next_admit < admission.len() && processes[admission[*next_admit]].arrival_time <= t {
        ready.push_back(admission[*next_admit]);
        *next_admit += 1;
    }
}
