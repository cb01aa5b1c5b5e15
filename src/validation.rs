//! Input validation for simulation runs.
//!
//! Checks the external input (menu selection, time quantum) and the
//! structural integrity of a workload before it is dispatched. Detects:
//! - Selections outside the menu
//! - Non-positive or malformed quanta
//! - Empty or oversized workloads
//! - Tasks missing a burst where the policy needs one
//! - Task IDs outside `1..=100`
//! - Logical clock regressions

use std::fmt;

use crate::generator::{ID_RANGE, MAX_TASK_COUNT};
use crate::models::{PolicyKind, Task};

/// Workload validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Menu selection is not 1, 2 or 3.
    InvalidSelection,
    /// Time quantum is not a positive integer.
    InvalidQuantum,
    /// Workload has no tasks.
    EmptyWorkload,
    /// Workload size exceeds the supported maximum.
    WorkloadTooLarge,
    /// A task has no burst but the policy orders by burst.
    MissingBurst,
    /// A task ID is outside the allowed range.
    IdOutOfRange,
    /// A task was created earlier than its predecessor.
    ClockRegression,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Parses a menu selection.
///
/// Anything that is not `1`, `2` or `3` (including non-numeric text)
/// is an [`ValidationErrorKind::InvalidSelection`].
pub fn parse_selection(input: &str) -> Result<PolicyKind, ValidationError> {
    let trimmed = input.trim();
    trimmed
        .parse::<i64>()
        .ok()
        .and_then(PolicyKind::from_menu)
        .ok_or_else(|| {
            ValidationError::new(
                ValidationErrorKind::InvalidSelection,
                format!("Invalid choice: '{trimmed}'"),
            )
        })
}

/// Parses a time quantum.
///
/// Returns the raw value; range checking happens when the policy is built.
/// Non-numeric text is an [`ValidationErrorKind::InvalidQuantum`].
pub fn parse_quantum(input: &str) -> Result<i64, ValidationError> {
    let trimmed = input.trim();
    trimmed.parse::<i64>().map_err(|_| {
        ValidationError::new(
            ValidationErrorKind::InvalidQuantum,
            format!("Time quantum must be a positive integer, got '{trimmed}'"),
        )
    })
}

/// Checks a requested workload size before any task is generated.
pub fn validate_task_count(count: usize) -> Result<(), ValidationError> {
    if count == 0 {
        return Err(ValidationError::new(
            ValidationErrorKind::EmptyWorkload,
            "Workload has no tasks",
        ));
    }
    if count > MAX_TASK_COUNT {
        return Err(ValidationError::new(
            ValidationErrorKind::WorkloadTooLarge,
            format!("Workload size must be at most {MAX_TASK_COUNT}, got {count}"),
        ));
    }
    Ok(())
}

/// Validates a workload before dispatch.
///
/// Checks:
/// 1. At least one task
/// 2. All IDs in `1..=100`
/// 3. Every task carries a burst when `requires_burst`
/// 4. Creation times are non-decreasing in arrival order
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_workload(tasks: &[Task], requires_burst: bool) -> ValidationResult {
    let mut errors = Vec::new();

    if tasks.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyWorkload,
            "Workload has no tasks",
        ));
    }

    for task in tasks {
        if !ID_RANGE.contains(&task.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::IdOutOfRange,
                format!(
                    "Task at arrival {} has ID {} outside {}..={}",
                    task.arrival,
                    task.id,
                    ID_RANGE.start(),
                    ID_RANGE.end()
                ),
            ));
        }

        if requires_burst && !task.has_burst() {
            errors.push(ValidationError::new(
                ValidationErrorKind::MissingBurst,
                format!("Task {} at arrival {} has no burst", task.id, task.arrival),
            ));
        }
    }

    for pair in tasks.windows(2) {
        if pair[1].created_at < pair[0].created_at {
            errors.push(ValidationError::new(
                ValidationErrorKind::ClockRegression,
                format!(
                    "Task at arrival {} created at t={} before its predecessor (t={})",
                    pair[1].arrival, pair[1].created_at, pair[0].created_at
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
