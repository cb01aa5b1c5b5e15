//! Command-line front end for the scheduling simulator.
//!
//! Resolves the policy and quantum from flags, a JSON config file or
//! interactive prompts, runs one simulation and prints its trace as text
//! or JSON. Exit status is 1 for rejected input and 2 for bad usage.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use env_logger::{Builder, Env};
use log::debug;

use cpu_schedule_sim::config::{OutputFormat, SimulationConfig};
use cpu_schedule_sim::models::{DispatchTrace, PolicyKind};
use cpu_schedule_sim::simulation::{self, SimulationRequest};
use cpu_schedule_sim::validation::{self, ValidationError, ValidationErrorKind};

#[derive(Debug, Default)]
struct CliOptions {
    config: Option<PathBuf>,
    policy: Option<String>,
    quantum: Option<String>,
    tasks: Option<usize>,
    seed: Option<u64>,
    pace_ms: Option<u64>,
    json: bool,
    help: bool,
}

fn print_usage(program: &str) {
    println!("CPU scheduling simulator");
    println!("Usage:");
    println!("  {program} [options]        (prompts for anything not given)");
    println!("  {program} --help");
    println!();
    println!("Options:");
    println!("  --policy <1|2|3>   1=FCFS 2=SJF 3=RR");
    println!("  --quantum <n>      RR time slice, positive integer");
    println!("  --tasks <n>        workload size (default 100)");
    println!("  --seed <n>         RNG seed for a reproducible workload");
    println!("  --config <path>    JSON config file; flags override it");
    println!("  --pace-ms <n>      delay between printed lines");
    println!("  --json             print the trace as JSON");
}

fn exit_with_usage(program: &str, message: &str) -> ExitCode {
    eprintln!("{message}");
    print_usage(program);
    ExitCode::from(2)
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<CliOptions, String> {
    let mut options = CliOptions::default();
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        let mut value = |name: &str| args.next().ok_or_else(|| format!("{name}: missing value"));
        match arg.as_str() {
            "--help" | "-h" | "help" => options.help = true,
            "--json" => options.json = true,
            "--config" => options.config = Some(PathBuf::from(value("--config")?)),
            "--policy" => options.policy = Some(value("--policy")?),
            "--quantum" => options.quantum = Some(value("--quantum")?),
            "--tasks" => {
                let raw = value("--tasks")?;
                options.tasks = Some(
                    raw.parse()
                        .map_err(|_| format!("--tasks: invalid value: {raw}"))?,
                );
            }
            "--seed" => {
                let raw = value("--seed")?;
                options.seed = Some(
                    raw.parse()
                        .map_err(|_| format!("--seed: invalid value: {raw}"))?,
                );
            }
            "--pace-ms" => {
                let raw = value("--pace-ms")?;
                options.pace_ms = Some(
                    raw.parse()
                        .map_err(|_| format!("--pace-ms: invalid value: {raw}"))?,
                );
            }
            other => return Err(format!("unexpected argument: {other}")),
        }
    }
    Ok(options)
}

fn load_config(options: &CliOptions) -> Result<SimulationConfig> {
    let mut config = match &options.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            SimulationConfig::from_json_str(&text)
                .with_context(|| format!("parsing config {}", path.display()))?
        }
        None => SimulationConfig::default(),
    };

    if let Some(tasks) = options.tasks {
        config.task_count = tasks;
    }
    if let Some(seed) = options.seed {
        config.seed = Some(seed);
    }
    if let Some(pace_ms) = options.pace_ms {
        config.pace_ms = pace_ms;
    }
    if options.json {
        config.format = OutputFormat::Json;
    }
    Ok(config)
}

fn resolve_policy(
    options: &CliOptions,
    config: &SimulationConfig,
) -> Result<Result<PolicyKind, ValidationError>> {
    if let Some(raw) = &options.policy {
        return Ok(validation::parse_selection(raw));
    }
    if let Some(choice) = config.policy {
        return Ok(PolicyKind::from_menu(choice).ok_or_else(|| ValidationError {
            kind: ValidationErrorKind::InvalidSelection,
            message: format!("Invalid choice: '{choice}'"),
        }));
    }
    simulation::prompt_selection(&mut io::stdin().lock(), &mut io::stdout())
        .context("reading selection")
}

fn resolve_quantum(
    options: &CliOptions,
    config: &SimulationConfig,
) -> Result<Result<i64, ValidationError>> {
    if let Some(raw) = &options.quantum {
        return Ok(validation::parse_quantum(raw));
    }
    if let Some(quantum) = config.quantum {
        return Ok(Ok(quantum));
    }
    simulation::prompt_quantum(&mut io::stdin().lock(), &mut io::stdout())
        .context("reading quantum")
}

fn write_trace(trace: &DispatchTrace, config: &SimulationConfig) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match config.format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, trace).context("encoding trace")?;
            writeln!(out)?;
        }
        OutputFormat::Text => {
            let pace = Duration::from_millis(config.pace_ms);
            for entry in &trace.entries {
                for line in trace.render_entry(entry) {
                    writeln!(out, "{line}")?;
                }
                if !pace.is_zero() {
                    out.flush()?;
                    thread::sleep(pace);
                }
            }
        }
    }
    out.flush()?;
    Ok(())
}

fn run(options: &CliOptions) -> Result<ExitCode> {
    let config = load_config(options)?;
    debug!("config: {config:?}");

    let policy = match resolve_policy(options, &config)? {
        Ok(policy) => policy,
        Err(err) => {
            debug!("{err}");
            eprintln!("Invalid choice");
            return Ok(ExitCode::FAILURE);
        }
    };

    let mut request = SimulationRequest::new(policy).with_task_count(config.task_count);
    if let Some(seed) = config.seed {
        request = request.with_seed(seed);
    }
    if policy == PolicyKind::RoundRobin {
        match resolve_quantum(options, &config)? {
            Ok(quantum) => request = request.with_quantum(quantum),
            Err(err) => {
                eprintln!("{err}");
                return Ok(ExitCode::FAILURE);
            }
        }
    }

    let report = match simulation::run_simulation(&request) {
        Ok(report) => report,
        Err(err) => {
            eprintln!("{err}");
            return Ok(ExitCode::FAILURE);
        }
    };

    write_trace(&report.trace, &config)?;
    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    Builder::from_env(Env::default().default_filter_or("warn"))
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    let program = std::env::args()
        .next()
        .unwrap_or_else(|| "cpu-schedule-sim".to_string());
    let options = match parse_args(std::env::args().skip(1)) {
        Ok(options) => options,
        Err(message) => return exit_with_usage(&program, &message),
    };
    if options.help {
        print_usage(&program);
        return ExitCode::SUCCESS;
    }

    match run(&options) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
