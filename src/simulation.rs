//! Simulation driver.
//!
//! Wires the pieces together: resolve the policy, generate the workload,
//! validate it, dispatch it.
//!
//! # Usage
//!
//! ```
//! use cpu_schedule_sim::models::PolicyKind;
//! use cpu_schedule_sim::simulation::{run_simulation, SimulationRequest};
//!
//! let request = SimulationRequest::new(PolicyKind::RoundRobin)
//!     .with_quantum(3)
//!     .with_seed(42);
//! let report = run_simulation(&request).unwrap();
//! assert_eq!(report.seed, Some(42));
//! assert_eq!(report.workload.len(), 100);
//! assert!(report.trace.len() >= 100);
//! ```

use std::io::{self, BufRead, Write};

use log::{info, warn};
use rand::Rng;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::generator::{TaskGenerator, DEFAULT_TASK_COUNT};
use crate::models::{DispatchTrace, PolicyKind, Task};
use crate::policies;
use crate::validation::{self, ValidationError};

/// Menu shown before a selection is read.
pub const MENU_PROMPT: &str =
    "Choose your simulation\n1. FCFS\n2. SJF\n3. RR\nEnter your selection: ";

/// Prompt for the Round-Robin quantum.
pub const QUANTUM_PROMPT: &str = "Enter the time slice (quantum) for RR: ";

/// Input for a simulation run.
#[derive(Debug, Clone)]
pub struct SimulationRequest {
    /// Policy to run.
    pub policy: PolicyKind,
    /// Raw quantum (Round-Robin only).
    pub quantum: Option<i64>,
    /// Workload size.
    pub task_count: usize,
    /// RNG seed. `None` draws one.
    pub seed: Option<u64>,
}

impl SimulationRequest {
    /// Creates a request for `policy` with the default workload size.
    pub fn new(policy: PolicyKind) -> Self {
        Self {
            policy,
            quantum: None,
            task_count: DEFAULT_TASK_COUNT,
            seed: None,
        }
    }

    /// Sets the quantum.
    pub fn with_quantum(mut self, quantum: i64) -> Self {
        self.quantum = Some(quantum);
        self
    }

    /// Sets the workload size.
    pub fn with_task_count(mut self, task_count: usize) -> Self {
        self.task_count = task_count;
        self
    }

    /// Sets the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Result of a simulation run.
#[derive(Debug, Clone)]
pub struct SimulationReport {
    /// Seed the workload was generated from. `None` for an injected RNG.
    pub seed: Option<u64>,
    /// Generated workload, in arrival order.
    pub workload: Vec<Task>,
    /// Dispatch trace.
    pub trace: DispatchTrace,
}

/// Runs a simulation, seeding a `StdRng` from the request (or from entropy).
pub fn run_simulation(request: &SimulationRequest) -> Result<SimulationReport, ValidationError> {
    let seed = request.seed.unwrap_or_else(rand::random);
    info!("workload seed {seed}");
    let report = run_with_rng(request, StdRng::seed_from_u64(seed))?;
    Ok(SimulationReport {
        seed: Some(seed),
        ..report
    })
}

/// Runs a simulation with an injected random source.
///
/// The policy (and its quantum) and the workload size are validated before
/// any task is generated, so a bad quantum never reaches the dispatch loop.
pub fn run_with_rng<R: Rng>(
    request: &SimulationRequest,
    rng: R,
) -> Result<SimulationReport, ValidationError> {
    let policy = policies::build(request.policy, request.quantum).inspect_err(|e| {
        warn!("rejected {} configuration: {e}", request.policy);
    })?;
    validation::validate_task_count(request.task_count).inspect_err(|e| {
        warn!("rejected workload size: {e}");
    })?;

    let workload = TaskGenerator::new(rng).generate(request.task_count, policy.requires_burst());
    if let Err(mut errors) = validation::validate_workload(&workload, policy.requires_burst()) {
        for e in &errors {
            warn!("workload check failed: {e}");
        }
        // Err is never empty.
        return Err(errors.swap_remove(0));
    }

    info!(
        "running {} over {} tasks",
        policy.description(),
        workload.len()
    );
    let trace = policy.run(workload.clone());
    info!(
        "{} finished: {} dispatches, {} requeues",
        policy.name(),
        trace.len(),
        trace.requeue_count()
    );

    Ok(SimulationReport {
        seed: None,
        workload,
        trace,
    })
}

/// Shows the menu and reads a policy selection from `input`.
pub fn prompt_selection<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> io::Result<Result<PolicyKind, ValidationError>> {
    let line = prompt_line(input, output, MENU_PROMPT)?;
    Ok(validation::parse_selection(&line))
}

/// Asks for the Round-Robin quantum and reads it from `input`.
pub fn prompt_quantum<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> io::Result<Result<i64, ValidationError>> {
    let line = prompt_line(input, output, QUANTUM_PROMPT)?;
    Ok(validation::parse_quantum(&line))
}

fn prompt_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> io::Result<String> {
    output.write_all(prompt.as_bytes())?;
    output.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line)
}
