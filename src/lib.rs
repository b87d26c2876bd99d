//! Discrete-time CPU scheduling simulator.
//!
//! Given a set of processes (arrival time, burst time, priority) and a
//! scheduling policy, computes each process's execution timeline and the
//! derived performance metrics, plus an ordered execution trace suitable
//! for timeline visualization.
//!
//! # Modules
//!
//! - **`models`**: Domain types — [`Process`], [`ExecutionTrace`], [`Segment`]
//! - **`registry`**: Validated, registration-ordered process store
//! - **`engine`**: The six scheduling policies (FCFS, SJF, SRTF, round
//!   robin, priority, preemptive priority) and the trace-driven timing
//!   derivation
//! - **`metrics`**: Summary statistics over a finished run
//!
//! # Example
//!
//! ```
//! use cpu_sched::{Policy, ProcessRegistry, ScheduleMetrics};
//!
//! let mut registry = ProcessRegistry::new();
//! registry.register("P1", 0, 5, 0)?;
//! registry.register("P2", 1, 3, 0)?;
//!
//! let outcome = registry.run(Policy::RoundRobin, Some(2))?;
//! assert_eq!(outcome.trace.makespan(), 8);
//!
//! let metrics = ScheduleMetrics::calculate(&outcome)?;
//! assert_eq!(metrics.rounded().avg_waiting_time, 3.0);
//! # Ok::<(), cpu_sched::SchedulerError>(())
//! ```
//!
//! Time is an abstract discrete unit. The simulation is single-threaded,
//! deterministic (ties break by earliest arrival, then registration
//! order), and pure: a run never mutates its input.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2015), "Modern Operating Systems", Ch. 2.4

pub mod engine;
pub mod error;
pub mod metrics;
pub mod models;
pub mod registry;

pub use engine::{run, Policy, SimulationOutcome};
pub use error::{ProcessField, SchedulerError};
pub use metrics::ScheduleMetrics;
pub use models::{ExecutionTrace, Process, Segment};
pub use registry::ProcessRegistry;
