//! Simulation domain models.
//!
//! Provides the workload type ([`Task`]) and the policy output
//! ([`DispatchTrace`]).
//!
//! # Domain Mappings
//!
//! | cpu-schedule-sim | Operating system | Job shop |
//! |------------------|------------------|----------|
//! | Task | Process / thread | Job |
//! | Burst | CPU burst | Processing time |
//! | DispatchEntry | Context switch in | Operation start |
//! | Quantum | Time slice | Maximum run length |

mod task;
mod trace;

pub use task::Task;
pub use trace::{DispatchEntry, DispatchTrace, Outcome, PolicyKind};
