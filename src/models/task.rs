//! Task model.
//!
//! A task is the unit of schedulable work: an identifier, the logical time
//! at which it arrived, and the CPU burst it still needs.

/// A task to be dispatched by a scheduling policy.
///
/// # Time Representation
/// `created_at` is a logical clock value, one unit per generated task.
/// It is used for display and arrival order only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// Task identifier in `1..=100`. Not unique within a workload.
    pub id: u32,
    /// Logical creation time.
    pub created_at: u64,
    /// Position in the generated workload (0-based).
    pub arrival: usize,
    /// Remaining service time. `None` for workloads without bursts (FCFS).
    pub burst: Option<u32>,
}

impl Task {
    /// Creates a task with no burst.
    pub fn new(id: u32, created_at: u64) -> Self {
        Self {
            id,
            created_at,
            arrival: 0,
            burst: None,
        }
    }

    /// Sets the burst length.
    pub fn with_burst(mut self, burst: u32) -> Self {
        self.burst = Some(burst);
        self
    }

    /// Sets the arrival index.
    pub fn with_arrival(mut self, arrival: usize) -> Self {
        self.arrival = arrival;
        self
    }

    /// Remaining burst, counting a missing burst as zero work.
    pub fn remaining(&self) -> u32 {
        self.burst.unwrap_or(0)
    }

    /// Whether the task carries a burst length.
    pub fn has_burst(&self) -> bool {
        self.burst.is_some()
    }
}
