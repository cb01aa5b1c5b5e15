//! Shortest-Job-First (non-preemptive).
//!
//! The whole workload is buffered before dispatch starts, then tasks are
//! served in ascending burst order. Ties among equal bursts are broken
//! explicitly by [`SjfTieBreaker`] so that traces are reproducible.

use super::SchedulingPolicy;
use crate::models::{DispatchEntry, DispatchTrace, Outcome, PolicyKind, Task};

/// How ties among equal bursts are broken.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SjfTieBreaker {
    /// Earlier arrival first (stable).
    #[default]
    Arrival,
    /// Lower task ID first, then earlier arrival.
    ById,
}

/// Shortest-Job-First.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sjf {
    /// Tie-breaking strategy for equal bursts.
    pub tie_breaker: SjfTieBreaker,
}

impl Sjf {
    /// Creates an SJF policy with the given tie-breaker.
    pub fn with_tie_breaker(tie_breaker: SjfTieBreaker) -> Self {
        Self { tie_breaker }
    }
}

impl SchedulingPolicy for Sjf {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Sjf
    }

    fn run(&self, mut tasks: Vec<Task>) -> DispatchTrace {
        // sort_by_key is stable, so input (arrival) order survives among ties.
        match self.tie_breaker {
            SjfTieBreaker::Arrival => tasks.sort_by_key(|t| t.remaining()),
            SjfTieBreaker::ById => tasks.sort_by_key(|t| (t.remaining(), t.id)),
        }

        let mut trace = DispatchTrace::new(PolicyKind::Sjf);
        trace.entries.reserve(tasks.len());
        for task in tasks {
            trace.push(DispatchEntry {
                task_id: task.id,
                arrival: task.arrival,
                created_at: task.created_at,
                burst: Some(task.remaining()),
                outcome: Outcome::Done,
            });
        }
        trace
    }

    fn description(&self) -> &'static str {
        "Shortest Job First"
    }
}
