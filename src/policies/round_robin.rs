//! Round-Robin (preemptive, fixed quantum).
//!
//! # Algorithm
//!
//! 1. Seed a FIFO ready queue with the workload in arrival order.
//! 2. Dequeue the head and record it with its remaining burst.
//! 3. If the remaining burst exceeds the quantum, charge one quantum and
//!    requeue at the tail (`Later`).
//! 4. Otherwise the task completes and is dropped (`Done`). The final slice
//!    is not charged: the trace shows the remainder the task had going in.
//!
//! A task with burst `b` is therefore dispatched `ceil(b / q)` times and the
//! loop ends after at most `sum(b) / q + n` events.

use std::collections::VecDeque;
use std::num::NonZeroU64;

use log::debug;

use super::SchedulingPolicy;
use crate::models::{DispatchEntry, DispatchTrace, Outcome, PolicyKind, Task};
use crate::validation::{ValidationError, ValidationErrorKind};

/// Round-Robin with a fixed time quantum.
#[derive(Debug, Clone, Copy)]
pub struct RoundRobin {
    quantum: NonZeroU64,
}

impl RoundRobin {
    /// Creates a Round-Robin policy.
    pub fn new(quantum: NonZeroU64) -> Self {
        Self { quantum }
    }

    /// Creates a Round-Robin policy from unchecked input.
    ///
    /// A quantum of zero or less would never complete a task, so it is
    /// rejected here rather than inside the dispatch loop.
    pub fn from_raw(quantum: i64) -> Result<Self, ValidationError> {
        u64::try_from(quantum)
            .ok()
            .and_then(NonZeroU64::new)
            .map(Self::new)
            .ok_or_else(|| {
                ValidationError::new(
                    ValidationErrorKind::InvalidQuantum,
                    format!("Time quantum must be a positive integer, got {quantum}"),
                )
            })
    }

    /// The time quantum.
    pub fn quantum(&self) -> u64 {
        self.quantum.get()
    }
}

impl SchedulingPolicy for RoundRobin {
    fn kind(&self) -> PolicyKind {
        PolicyKind::RoundRobin
    }

    fn run(&self, tasks: Vec<Task>) -> DispatchTrace {
        let quantum = self.quantum();
        let mut trace = DispatchTrace::new(PolicyKind::RoundRobin).with_quantum(quantum);
        let mut ready: VecDeque<Task> = tasks.into();

        while let Some(mut task) = ready.pop_front() {
            let remaining = task.remaining();
            let outcome = if u64::from(remaining) > quantum {
                Outcome::Later
            } else {
                Outcome::Done
            };

            trace.push(DispatchEntry {
                task_id: task.id,
                arrival: task.arrival,
                created_at: task.created_at,
                burst: Some(remaining),
                outcome,
            });

            if outcome == Outcome::Later {
                // Fits in u32: quantum < remaining.
                let left = (u64::from(remaining) - quantum) as u32;
                task.burst = Some(left);
                debug!(
                    "task {} (arrival {}) preempted, {left} left",
                    task.id, task.arrival
                );
                ready.push_back(task);
            }
        }

        trace
    }

    fn description(&self) -> &'static str {
        "Round Robin"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::TaskGenerator;
    use proptest::prelude::*;

    fn rr(quantum: u32) -> RoundRobin {
        RoundRobin::new(NonZeroU64::new(quantum.into()).unwrap())
    }

    fn workload(bursts: &[u32]) -> Vec<Task> {
        bursts
            .iter()
            .enumerate()
            .map(|(i, &b)| {
                Task::new(i as u32 + 1, i as u64)
                    .with_arrival(i)
                    .with_burst(b)
            })
            .collect()
    }

    #[test]
    fn test_three_task_scenario() {
        let trace = rr(3).run(workload(&[4, 2, 5]));

        let events: Vec<(u32, Option<u32>, Outcome)> = trace
            .entries
            .iter()
            .map(|e| (e.task_id, e.burst, e.outcome))
            .collect();
        assert_eq!(
            events,
            vec![
                (1, Some(4), Outcome::Later),
                (2, Some(2), Outcome::Done),
                (3, Some(5), Outcome::Later),
                (1, Some(1), Outcome::Done),
                (3, Some(2), Outcome::Done),
            ]
        );
        assert_eq!(trace.quantum, Some(3));
    }

    #[test]
    fn test_final_slice_not_charged() {
        // Remaining equal to the quantum completes without a requeue.
        let trace = rr(3).run(workload(&[3, 6]));
        let events: Vec<(u32, Option<u32>, Outcome)> = trace
            .entries
            .iter()
            .map(|e| (e.task_id, e.burst, e.outcome))
            .collect();
        assert_eq!(
            events,
            vec![
                (1, Some(3), Outcome::Done),
                (2, Some(6), Outcome::Later),
                (2, Some(3), Outcome::Done),
            ]
        );
    }

    #[test]
    fn test_large_quantum_matches_fcfs() {
        let tasks = TaskGenerator::seeded(8).generate(100, true);
        let expected: Vec<u32> = tasks.iter().map(|t| t.id).collect();

        let trace = rr(6).run(tasks);
        assert_eq!(trace.len(), 100);
        assert_eq!(trace.ids(), expected);
        assert_eq!(trace.requeue_count(), 0);
    }

    #[test]
    fn test_quantum_one_on_generated_workload() {
        let tasks = TaskGenerator::seeded(13).generate(100, true);
        let total: u32 = tasks.iter().map(|t| t.remaining()).sum();

        let trace = rr(1).run(tasks);
        assert_eq!(trace.len() as u32, total);
        assert_eq!(trace.completed_count(), 100);
    }

    #[test]
    fn test_from_raw() {
        assert_eq!(RoundRobin::from_raw(4).unwrap().quantum(), 4);
        for bad in [0, -3, i64::MIN] {
            let err = RoundRobin::from_raw(bad).unwrap_err();
            assert_eq!(err.kind, ValidationErrorKind::InvalidQuantum);
        }
    }

    #[test]
    fn test_quantum_beyond_u32() {
        let policy = RoundRobin::from_raw(5_000_000_000).unwrap();
        assert_eq!(policy.quantum(), 5_000_000_000);

        let trace = policy.run(workload(&[6, u32::MAX]));
        assert_eq!(trace.len(), 2);
        assert_eq!(trace.requeue_count(), 0);
        assert_eq!(trace.quantum, Some(5_000_000_000));
    }

    #[test]
    fn test_rerun_is_identical() {
        let tasks = TaskGenerator::seeded(77).generate(100, true);
        let a = rr(2).run(tasks.clone());
        let b = rr(2).run(tasks);
        assert_eq!(a.to_string(), b.to_string());
    }

    proptest! {
        /// Each task appears ceil(b/q) times, the last time as Done, and the
        /// decrements it received add up to b minus its final remainder.
        #[test]
        fn appearances_match_ceiling(
            bursts in prop::collection::vec(1u32..=20, 1..60),
            quantum in 1u32..=8,
        ) {
            let trace = rr(quantum).run(workload(&bursts));

            for (arrival, &burst) in bursts.iter().enumerate() {
                let seen: Vec<&DispatchEntry> = trace.entries_for_arrival(arrival).collect();
                prop_assert_eq!(seen.len() as u32, burst.div_ceil(quantum));

                let (last, earlier) = seen.split_last().unwrap();
                prop_assert_eq!(last.outcome, Outcome::Done);
                prop_assert!(earlier.iter().all(|e| e.outcome == Outcome::Later));

                let charged = earlier.len() as u32 * quantum;
                prop_assert_eq!(charged, burst - last.burst.unwrap());
                for pair in seen.windows(2) {
                    prop_assert!(pair[1].burst < pair[0].burst);
                }
            }
        }

        /// The loop ends within sum(b)/q + n events.
        #[test]
        fn terminates_within_bound(
            bursts in prop::collection::vec(1u32..=6, 0..150),
            quantum in 1u32..=10,
        ) {
            let n = bursts.len();
            let total: u32 = bursts.iter().sum();
            let trace = rr(quantum).run(workload(&bursts));

            prop_assert!(trace.len() >= n);
            prop_assert!(trace.len() <= (total / quantum) as usize + n);
            prop_assert_eq!(trace.completed_count(), n);
            let all_fit = bursts.iter().all(|&b| b <= quantum);
            prop_assert_eq!(trace.len() == n, all_fit);
        }
    }
}
