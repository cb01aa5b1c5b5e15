//! Scheduling policies.
//!
//! Each policy consumes a workload in arrival order and produces a
//! [`DispatchTrace`] with one entry per service event.
//!
//! # Usage
//!
//! ```
//! use cpu_schedule_sim::generator::TaskGenerator;
//! use cpu_schedule_sim::models::PolicyKind;
//! use cpu_schedule_sim::policies;
//!
//! let policy = policies::build(PolicyKind::RoundRobin, Some(2)).unwrap();
//! let tasks = TaskGenerator::seeded(42).generate(10, policy.requires_burst());
//! let trace = policy.run(tasks);
//! assert!(trace.len() >= 10);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

mod fcfs;
mod round_robin;
mod sjf;

pub use fcfs::Fcfs;
pub use round_robin::RoundRobin;
pub use sjf::{Sjf, SjfTieBreaker};

use crate::models::{DispatchTrace, PolicyKind, Task};
use crate::validation::{ValidationError, ValidationErrorKind};
use std::fmt::Debug;

/// A scheduling discipline.
pub trait SchedulingPolicy: Send + Sync + Debug {
    /// Policy name (e.g., "FCFS", "RR").
    fn name(&self) -> &'static str {
        self.kind().label()
    }

    /// The discipline implemented.
    fn kind(&self) -> PolicyKind;

    /// Dispatches the workload and returns the trace.
    ///
    /// `tasks` must be in arrival order.
    fn run(&self, tasks: Vec<Task>) -> DispatchTrace;

    /// Whether the workload must carry burst lengths.
    fn requires_burst(&self) -> bool {
        self.kind().requires_burst()
    }

    /// Policy description.
    fn description(&self) -> &'static str {
        self.name()
    }
}

/// Builds the policy for `kind`.
///
/// `quantum` is required for Round-Robin and ignored otherwise.
pub fn build(
    kind: PolicyKind,
    quantum: Option<i64>,
) -> Result<Box<dyn SchedulingPolicy>, ValidationError> {
    match kind {
        PolicyKind::Fcfs => Ok(Box::new(Fcfs)),
        PolicyKind::Sjf => Ok(Box::new(Sjf::default())),
        PolicyKind::RoundRobin => {
            let quantum = quantum.ok_or_else(|| {
                ValidationError::new(
                    ValidationErrorKind::InvalidQuantum,
                    "Round-Robin requires a time quantum",
                )
            })?;
            Ok(Box::new(RoundRobin::from_raw(quantum)?))
        }
    }
}
