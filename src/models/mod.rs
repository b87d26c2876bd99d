//! Scheduling domain models.
//!
//! Core data types for representing scheduling problems and results:
//! the [`Process`] (static inputs plus simulation-derived timing) and the
//! [`ExecutionTrace`] (the ordered CPU timeline a run produces).
//!
//! All types derive serde `Serialize`/`Deserialize`; they form the data
//! contract consumed by external rendering layers.

mod process;
mod trace;

pub use process::Process;
pub use trace::{ExecutionTrace, Segment};
