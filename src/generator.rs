//! Synthetic workload generation.
//!
//! Draws task identifiers (and optionally burst lengths) from an injected
//! random source and stamps each task with a logical creation time that
//! advances by one unit per generated task.
//!
//! # Usage
//!
//! ```
//! use cpu_schedule_sim::generator::TaskGenerator;
//!
//! let mut generator = TaskGenerator::seeded(42);
//! let tasks = generator.generate(100, true);
//! assert_eq!(tasks.len(), 100);
//! assert!(tasks.iter().all(|t| (1..=6).contains(&t.remaining())));
//! ```

use std::ops::RangeInclusive;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::Task;

/// Number of tasks per simulation run.
pub const DEFAULT_TASK_COUNT: usize = 100;

/// Largest workload a run accepts.
pub const MAX_TASK_COUNT: usize = 1_000_000;

/// Range task identifiers are drawn from (with replacement).
pub const ID_RANGE: RangeInclusive<u32> = 1..=100;

/// Range burst lengths are drawn from.
pub const BURST_RANGE: RangeInclusive<u32> = 1..=6;

/// Produces ordered task sequences with a monotonic logical clock.
#[derive(Debug, Clone)]
pub struct TaskGenerator<R> {
    rng: R,
    clock: u64,
}

impl TaskGenerator<StdRng> {
    /// Creates a generator over a `StdRng` seeded with `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> TaskGenerator<R> {
    /// Creates a generator with the clock at zero.
    pub fn new(rng: R) -> Self {
        Self { rng, clock: 0 }
    }

    /// Generates `count` tasks in arrival order.
    ///
    /// With `with_burst`, each task gets a burst drawn from [`BURST_RANGE`];
    /// otherwise the burst is left unset. The clock keeps advancing across
    /// calls, so successive workloads never share a timestamp.
    pub fn generate(&mut self, count: usize, with_burst: bool) -> Vec<Task> {
        let mut tasks = Vec::new();
        for arrival in 0..count {
            let id = self.rng.random_range(ID_RANGE);
            let mut task = Task::new(id, self.clock).with_arrival(arrival);
            if with_burst {
                task = task.with_burst(self.rng.random_range(BURST_RANGE));
            }
            tasks.push(task);
            self.clock += 1;
        }
        tasks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generates_exact_count() {
        let mut generator = TaskGenerator::seeded(1);
        assert_eq!(generator.generate(DEFAULT_TASK_COUNT, true).len(), 100);
        assert!(generator.generate(0, true).is_empty());
    }

    #[test]
    fn test_ids_and_bursts_in_range() {
        let mut generator = TaskGenerator::seeded(7);
        let tasks = generator.generate(500, true);

        assert!(tasks.iter().all(|t| ID_RANGE.contains(&t.id)));
        assert!(tasks.iter().all(|t| t.burst.is_some_and(|b| BURST_RANGE.contains(&b))));
    }

    #[test]
    fn test_without_burst() {
        let mut generator = TaskGenerator::seeded(7);
        let tasks = generator.generate(10, false);
        assert!(tasks.iter().all(|t| !t.has_burst()));
    }

    #[test]
    fn test_clock_strictly_increasing() {
        let tasks = TaskGenerator::seeded(3).generate(50, false);

        for pair in tasks.windows(2) {
            assert!(pair[0].created_at < pair[1].created_at);
        }
        for (i, task) in tasks.iter().enumerate() {
            assert_eq!(task.arrival, i);
            assert_eq!(task.created_at, i as u64);
        }
    }

    #[test]
    fn test_clock_continues_across_calls() {
        let mut generator = TaskGenerator::seeded(3);
        let first = generator.generate(5, true);
        let second = generator.generate(5, true);
        assert_eq!(first.last().map(|t| t.created_at), Some(4));
        assert_eq!(second[0].created_at, 5);
        assert_eq!(second[0].arrival, 0);
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let a = TaskGenerator::seeded(99).generate(100, true);
        let b = TaskGenerator::seeded(99).generate(100, true);
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seeds_differ() {
        let a = TaskGenerator::seeded(1).generate(100, true);
        let b = TaskGenerator::seeded(2).generate(100, true);
        assert_ne!(a, b);
    }

    #[test]
    fn test_ids_cover_range() {
        // 5000 draws from 100 values: every id should show up.
        let tasks = TaskGenerator::seeded(5).generate(5000, false);
        let mut seen = [false; 101];
        for t in &tasks {
            seen[t.id as usize] = true;
        }
        assert!(seen[1..].iter().all(|&s| s));
    }
}
