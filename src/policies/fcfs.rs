//! First-Come-First-Served.

use super::SchedulingPolicy;
use crate::models::{DispatchEntry, DispatchTrace, Outcome, PolicyKind, Task};

/// First-Come-First-Served.
///
/// Dispatches in arrival order; every task runs to completion once.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fcfs;

impl SchedulingPolicy for Fcfs {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Fcfs
    }

    fn run(&self, tasks: Vec<Task>) -> DispatchTrace {
        let mut trace = DispatchTrace::new(PolicyKind::Fcfs);
        trace.entries.reserve(tasks.len());
        for task in tasks {
            trace.push(DispatchEntry {
                task_id: task.id,
                arrival: task.arrival,
                created_at: task.created_at,
                burst: None,
                outcome: Outcome::Done,
            });
        }
        trace
    }

    fn description(&self) -> &'static str {
        "First-Come-First-Served"
    }
}
