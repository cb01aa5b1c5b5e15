//! Dispatch trace (solution) model.
//!
//! A trace is the ordered log of service events produced by a scheduling
//! policy. Under Round-Robin the same task may appear several times.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The scheduling discipline that produced a trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PolicyKind {
    /// First-Come-First-Served.
    Fcfs,
    /// Shortest-Job-First, non-preemptive.
    Sjf,
    /// Round-Robin with a fixed quantum.
    RoundRobin,
}

impl PolicyKind {
    /// All kinds in menu order.
    pub const ALL: [PolicyKind; 3] = [PolicyKind::Fcfs, PolicyKind::Sjf, PolicyKind::RoundRobin];

    /// Maps a menu number (`1`, `2`, `3`) to a kind.
    pub fn from_menu(choice: i64) -> Option<Self> {
        match choice {
            1 => Some(PolicyKind::Fcfs),
            2 => Some(PolicyKind::Sjf),
            3 => Some(PolicyKind::RoundRobin),
            _ => None,
        }
    }

    /// Menu number of this kind.
    pub fn menu_number(self) -> u8 {
        match self {
            PolicyKind::Fcfs => 1,
            PolicyKind::Sjf => 2,
            PolicyKind::RoundRobin => 3,
        }
    }

    /// Short label used in menus and logs.
    pub fn label(self) -> &'static str {
        match self {
            PolicyKind::Fcfs => "FCFS",
            PolicyKind::Sjf => "SJF",
            PolicyKind::RoundRobin => "RR",
        }
    }

    /// Whether the policy orders by burst length.
    pub fn requires_burst(self) -> bool {
        !matches!(self, PolicyKind::Fcfs)
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// What happened to a task after a dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Task finished and left the system.
    Done,
    /// Task was preempted and requeued at the tail.
    Later,
}

/// A single service event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchEntry {
    /// Dispatched task ID.
    pub task_id: u32,
    /// Arrival index of the task (disambiguates colliding IDs).
    pub arrival: usize,
    /// Logical creation time of the task.
    pub created_at: u64,
    /// Burst shown for this event: the full burst for SJF, the remaining
    /// burst before the slice for Round-Robin, `None` for FCFS.
    pub burst: Option<u32>,
    /// Result of the dispatch.
    pub outcome: Outcome,
}

/// An ordered dispatch trace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchTrace {
    /// Policy that produced the trace.
    pub policy: PolicyKind,
    /// Time quantum, for Round-Robin only.
    pub quantum: Option<u64>,
    /// Service events in dispatch order.
    pub entries: Vec<DispatchEntry>,
}

impl DispatchTrace {
    /// Creates an empty trace.
    pub fn new(policy: PolicyKind) -> Self {
        Self {
            policy,
            quantum: None,
            entries: Vec::new(),
        }
    }

    /// Sets the quantum.
    pub fn with_quantum(mut self, quantum: u64) -> Self {
        self.quantum = Some(quantum);
        self
    }

    /// Appends a service event.
    pub fn push(&mut self, entry: DispatchEntry) {
        self.entries.push(entry);
    }

    /// Number of service events.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the trace has no events.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Task IDs in dispatch order.
    pub fn ids(&self) -> Vec<u32> {
        self.entries.iter().map(|e| e.task_id).collect()
    }

    /// Events belonging to the task with the given arrival index.
    pub fn entries_for_arrival(&self, arrival: usize) -> impl Iterator<Item = &DispatchEntry> {
        self.entries.iter().filter(move |e| e.arrival == arrival)
    }

    /// Number of tasks that completed.
    pub fn completed_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| e.outcome == Outcome::Done)
            .count()
    }

    /// Number of preemptions (requeues).
    pub fn requeue_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| e.outcome == Outcome::Later)
            .count()
    }

    /// Human-readable lines, one or two per event.
    pub fn render_lines(&self) -> Vec<String> {
        self.entries
            .iter()
            .flat_map(|entry| self.render_entry(entry))
            .collect()
    }

    /// Lines for a single event, in the trace's format.
    ///
    /// Round-Robin events yield a second line stating LATER or DONE.
    pub fn render_entry(&self, entry: &DispatchEntry) -> impl Iterator<Item = String> {
        let id = entry.task_id;
        let t = entry.created_at;
        let (work, status) = match (self.policy, entry.burst) {
            (PolicyKind::Fcfs, _) | (_, None) => (
                format!("Working on task ID {id} received at time t={t}"),
                None,
            ),
            (PolicyKind::Sjf, Some(burst)) => (
                format!("Working on task ID {id} with burst time {burst} at time t={t}"),
                None,
            ),
            (PolicyKind::RoundRobin, Some(remaining)) => (
                format!(
                    "Working on task ID {id} with remaining burst time {remaining} at time t={t}"
                ),
                Some(match entry.outcome {
                    Outcome::Later => format!("Task ID {id} will Get Back to it LATER"),
                    Outcome::Done => format!("Task ID {id} is DONE"),
                }),
            ),
        };
        std::iter::once(work).chain(status)
    }
}

impl fmt::Display for DispatchTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.render_lines() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(task_id: u32, arrival: usize, burst: Option<u32>, outcome: Outcome) -> DispatchEntry {
        DispatchEntry {
            task_id,
            arrival,
            created_at: arrival as u64,
            burst,
            outcome,
        }
    }

    #[test]
    fn test_menu_mapping() {
        assert_eq!(PolicyKind::from_menu(1), Some(PolicyKind::Fcfs));
        assert_eq!(PolicyKind::from_menu(2), Some(PolicyKind::Sjf));
        assert_eq!(PolicyKind::from_menu(3), Some(PolicyKind::RoundRobin));
        assert_eq!(PolicyKind::from_menu(0), None);
        assert_eq!(PolicyKind::from_menu(7), None);
        for kind in PolicyKind::ALL {
            assert_eq!(PolicyKind::from_menu(kind.menu_number() as i64), Some(kind));
        }
    }

    #[test]
    fn test_render_fcfs() {
        let mut trace = DispatchTrace::new(PolicyKind::Fcfs);
        trace.push(entry(12, 3, None, Outcome::Done));
        assert_eq!(
            trace.render_lines(),
            vec!["Working on task ID 12 received at time t=3"]
        );
    }

    #[test]
    fn test_render_sjf() {
        let mut trace = DispatchTrace::new(PolicyKind::Sjf);
        trace.push(entry(8, 0, Some(2), Outcome::Done));
        assert_eq!(
            trace.render_lines(),
            vec!["Working on task ID 8 with burst time 2 at time t=0"]
        );
    }

    #[test]
    fn test_render_round_robin() {
        let mut trace = DispatchTrace::new(PolicyKind::RoundRobin).with_quantum(3);
        trace.push(entry(5, 0, Some(4), Outcome::Later));
        trace.push(entry(5, 0, Some(1), Outcome::Done));

        let lines = trace.render_lines();
        assert_eq!(lines.len(), 4);
        assert_eq!(
            lines[0],
            "Working on task ID 5 with remaining burst time 4 at time t=0"
        );
        assert_eq!(lines[1], "Task ID 5 will Get Back to it LATER");
        assert_eq!(lines[3], "Task ID 5 is DONE");
        assert_eq!(trace.to_string(), lines.join("\n") + "\n");
    }

    #[test]
    fn test_render_entry_line_counts() {
        let rr = DispatchTrace::new(PolicyKind::RoundRobin).with_quantum(2);
        let sjf = DispatchTrace::new(PolicyKind::Sjf);
        let later = entry(4, 1, Some(5), Outcome::Later);

        let lines: Vec<String> = rr.render_entry(&later).collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], "Task ID 4 will Get Back to it LATER");
        assert_eq!(sjf.render_entry(&later).count(), 1);
    }

    #[test]
    fn test_counts() {
        let mut trace = DispatchTrace::new(PolicyKind::RoundRobin);
        trace.push(entry(1, 0, Some(4), Outcome::Later));
        trace.push(entry(2, 1, Some(2), Outcome::Done));
        trace.push(entry(1, 0, Some(1), Outcome::Done));

        assert_eq!(trace.len(), 3);
        assert_eq!(trace.completed_count(), 2);
        assert_eq!(trace.requeue_count(), 1);
        assert_eq!(trace.ids(), vec![1, 2, 1]);
        assert_eq!(trace.entries_for_arrival(0).count(), 2);
    }

    #[test]
    fn test_serde_shape() {
        let mut trace = DispatchTrace::new(PolicyKind::Sjf);
        trace.push(entry(9, 0, Some(1), Outcome::Done));

        let json = serde_json::to_value(&trace).unwrap();
        assert_eq!(json["policy"], "Sjf");
        assert_eq!(json["entries"][0]["task_id"], 9);
        assert_eq!(json["entries"][0]["outcome"], "Done");
        assert!(json["quantum"].is_null());
    }
}
